//! Shared fixture: three companies, each with one job.
#![allow(dead_code)]

use jobly_core::domain::{JobId, NewCompany, NewJob};
use jobly_core::port::{CompanyRepository, JobRepository};
use jobly_infra_sqlite::{
    create_pool, run_migrations, SqliteCompanyRepository, SqliteJobRepository, SqlitePool,
};

pub struct TestDb {
    pub pool: SqlitePool,
    pub jobs: SqliteJobRepository,
    pub companies: SqliteCompanyRepository,
    /// Ids of J1, J2, J3 in insertion order
    pub job_ids: Vec<JobId>,
}

pub async fn empty_db() -> SqlitePool {
    let pool = create_pool("sqlite::memory:", 1).await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

pub async fn seeded_db() -> TestDb {
    let pool = empty_db().await;
    let jobs = SqliteJobRepository::new(pool.clone());
    let companies = SqliteCompanyRepository::new(pool.clone());

    let mut job_ids = Vec::new();
    for n in 1..=3 {
        let handle = format!("c{}", n);
        companies
            .create(&NewCompany {
                handle: handle.clone(),
                name: format!("C{}", n),
                description: format!("Desc{}", n),
                num_employees: n,
                logo_url: Some(format!("http://c{}.img", n)),
            })
            .await
            .unwrap();

        let job = jobs
            .create(&NewJob {
                title: format!("J{}", n),
                salary: Some(n * 1000),
                equity: Some(format!("0.0{}0", n).parse().unwrap()),
                company_handle: handle,
            })
            .await
            .unwrap();
        job_ids.push(job.id);
    }

    TestDb {
        pool,
        jobs,
        companies,
        job_ids,
    }
}
