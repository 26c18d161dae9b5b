//! Subcommand handlers. Each works against the repository ports only.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use jobly_core::domain::{
    Company, CompanyFilter, CompanyPatch, Equity, JobFilter, JobId, JobListing, JobPatch,
    NewCompany, NewJob,
};
use jobly_core::port::{CompanyRepository, JobRepository};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Subcommand)]
pub enum JobCommand {
    /// Post a new job
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        salary: Option<i64>,

        /// Decimal in [0, 1] with three fractional digits, e.g. 0.010
        #[arg(long)]
        equity: Option<Equity>,

        /// Handle of the owning company
        #[arg(long)]
        company: String,
    },

    /// List jobs, optionally filtered
    List {
        /// Case-insensitive title substring
        #[arg(long)]
        title: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        min_salary: Option<i64>,

        /// Only jobs with non-zero equity
        #[arg(long)]
        has_equity: bool,
    },

    /// Show one job with its company
    Show { id: JobId },

    /// Change title, salary or equity
    Update(JobUpdateArgs),

    /// Delete a job
    Remove { id: JobId },
}

#[derive(Args)]
pub struct JobUpdateArgs {
    pub id: JobId,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, conflicts_with = "clear_salary")]
    pub salary: Option<i64>,

    /// Set salary to null
    #[arg(long)]
    pub clear_salary: bool,

    #[arg(long, conflicts_with = "clear_equity")]
    pub equity: Option<Equity>,

    /// Set equity to null
    #[arg(long)]
    pub clear_equity: bool,
}

impl JobUpdateArgs {
    pub fn to_patch(&self) -> JobPatch {
        JobPatch {
            title: self.title.clone(),
            salary: nullable(self.salary, self.clear_salary),
            equity: nullable(self.equity.clone(), self.clear_equity),
        }
    }
}

#[derive(Subcommand)]
pub enum CompanyCommand {
    /// Register a company
    Add {
        #[arg(long)]
        handle: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        #[arg(long, default_value = "0")]
        num_employees: i64,

        #[arg(long)]
        logo_url: Option<String>,
    },

    /// List companies, optionally filtered
    List {
        /// Case-insensitive name substring
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        min_employees: Option<i64>,

        #[arg(long)]
        max_employees: Option<i64>,
    },

    /// Show one company with its jobs
    Show { handle: String },

    /// Change name, description, size or logo
    Update {
        handle: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        num_employees: Option<i64>,

        #[arg(long, conflicts_with = "clear_logo_url")]
        logo_url: Option<String>,

        /// Set logo URL to null
        #[arg(long)]
        clear_logo_url: bool,
    },

    /// Delete a company and its jobs
    Remove { handle: String },
}

/// `Some(Some(v))` to set, `Some(None)` to clear, `None` to leave alone.
fn nullable<T>(value: Option<T>, clear: bool) -> Option<Option<T>> {
    if clear {
        Some(None)
    } else {
        value.map(Some)
    }
}

/// Only criteria the user actually gave; `None` when there are none.
pub fn job_filter(
    title: Option<String>,
    min_salary: Option<i64>,
    has_equity: bool,
) -> Option<JobFilter> {
    let filter = JobFilter {
        title,
        min_salary,
        has_equity: has_equity.then_some(true),
    };
    (filter != JobFilter::default()).then_some(filter)
}

fn display_opt<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map_or_else(|| "-".to_string(), T::to_string)
}

#[derive(Tabled)]
struct JobTableRow {
    id: JobId,
    title: String,
    salary: String,
    equity: String,
    company: String,
}

impl From<JobListing> for JobTableRow {
    fn from(job: JobListing) -> Self {
        Self {
            id: job.id,
            title: job.title,
            salary: display_opt(&job.salary),
            equity: display_opt(&job.equity),
            company: format!("{} ({})", job.company_name, job.company_handle),
        }
    }
}

#[derive(Tabled)]
struct CompanyTableRow {
    handle: String,
    name: String,
    employees: i64,
    logo_url: String,
}

impl From<Company> for CompanyTableRow {
    fn from(company: Company) -> Self {
        Self {
            handle: company.handle,
            name: company.name,
            employees: company.num_employees,
            logo_url: display_opt(&company.logo_url),
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn run_job_command(repo: &dyn JobRepository, command: JobCommand) -> Result<()> {
    match command {
        JobCommand::Add {
            title,
            salary,
            equity,
            company,
        } => {
            let job = repo
                .create(&NewJob {
                    title,
                    salary,
                    equity,
                    company_handle: company,
                })
                .await?;
            println!("{}", format!("✓ Job {} created", job.id).green().bold());
            print_json(&job)?;
        }

        JobCommand::List {
            title,
            min_salary,
            has_equity,
        } => {
            let filter = job_filter(title, min_salary, has_equity);
            let jobs = repo.find_all(filter.as_ref()).await?;
            if jobs.is_empty() {
                println!("{}", "No jobs found".yellow());
            } else {
                let rows: Vec<JobTableRow> = jobs.into_iter().map(Into::into).collect();
                println!("{}", Table::new(rows));
            }
        }

        JobCommand::Show { id } => {
            print_json(&repo.get(id).await?)?;
        }

        JobCommand::Update(args) => {
            let job = repo.update(args.id, &args.to_patch()).await?;
            println!("{}", format!("✓ Job {} updated", job.id).green().bold());
            print_json(&job)?;
        }

        JobCommand::Remove { id } => {
            repo.remove(id).await?;
            println!("{}", format!("✓ Job {} removed", id).green().bold());
        }
    }

    Ok(())
}

pub async fn run_company_command(
    repo: &dyn CompanyRepository,
    command: CompanyCommand,
) -> Result<()> {
    match command {
        CompanyCommand::Add {
            handle,
            name,
            description,
            num_employees,
            logo_url,
        } => {
            let company = repo
                .create(&NewCompany {
                    handle,
                    name,
                    description,
                    num_employees,
                    logo_url,
                })
                .await?;
            println!(
                "{}",
                format!("✓ Company {} created", company.handle).green().bold()
            );
        }

        CompanyCommand::List {
            name,
            min_employees,
            max_employees,
        } => {
            let filter = CompanyFilter {
                name_like: name,
                min_employees,
                max_employees,
            };
            let companies = repo.find_all(Some(&filter)).await?;
            if companies.is_empty() {
                println!("{}", "No companies found".yellow());
            } else {
                let rows: Vec<CompanyTableRow> = companies.into_iter().map(Into::into).collect();
                println!("{}", Table::new(rows));
            }
        }

        CompanyCommand::Show { handle } => {
            print_json(&repo.get(&handle).await?)?;
        }

        CompanyCommand::Update {
            handle,
            name,
            description,
            num_employees,
            logo_url,
            clear_logo_url,
        } => {
            let patch = CompanyPatch {
                name,
                description,
                num_employees,
                logo_url: nullable(logo_url, clear_logo_url),
            };
            let company = repo.update(&handle, &patch).await?;
            println!(
                "{}",
                format!("✓ Company {} updated", company.handle).green().bold()
            );
            print_json(&company)?;
        }

        CompanyCommand::Remove { handle } => {
            repo.remove(&handle).await?;
            println!("{}", format!("✓ Company {} removed", handle).green().bold());
        }
    }

    Ok(())
}
