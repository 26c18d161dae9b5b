// Filter Clause Builder
//
// Turns optional listing criteria into a conjunctive WHERE clause with
// positional placeholders and the values bound to them.

use super::{SqlDialect, SqlValue};
use crate::domain::{CompanyFilter, JobFilter};
use crate::error::{AppError, Result};

/// Conjunctive WHERE clause under construction.
///
/// Placeholders continue after `preceding` parameters that the enclosing
/// statement already uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereClause {
    preceding: usize,
    predicates: Vec<String>,
    values: Vec<SqlValue>,
}

impl WhereClause {
    pub fn new(preceding: usize) -> Self {
        Self {
            preceding,
            predicates: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Add a predicate with one bound value. `render` receives the
    /// placeholder number assigned to `value`.
    pub fn push_bound(&mut self, value: SqlValue, render: impl FnOnce(usize) -> String) {
        let position = self.preceding + self.values.len() + 1;
        self.predicates.push(render(position));
        self.values.push(value);
    }

    /// Add a predicate that binds nothing.
    pub fn push(&mut self, predicate: impl Into<String>) {
        self.predicates.push(predicate.into());
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn predicates(&self) -> &[String] {
        &self.predicates
    }

    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// `WHERE a AND b ...`, or an empty string when there are no predicates.
    pub fn to_sql(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.predicates.join(" AND "))
        }
    }
}

fn non_negative(name: &str, value: i64) -> Result<i64> {
    if value < 0 {
        return Err(AppError::Validation(format!(
            "{} must be a non-negative integer, got {}",
            name, value
        )));
    }
    Ok(value)
}

/// WHERE clause for a job listing.
///
/// `None`, or a filter with no usable criteria, yields an empty clause.
pub fn sql_for_job_filter(
    filter: Option<&JobFilter>,
    dialect: SqlDialect,
    preceding: usize,
) -> Result<WhereClause> {
    let mut clause = WhereClause::new(preceding);
    let Some(filter) = filter else {
        return Ok(clause);
    };

    if let Some(title) = filter.title.as_deref().filter(|t| !t.is_empty()) {
        clause.push_bound(dialect.contains_pattern(title), |n| {
            dialect.contains_predicate("title", n)
        });
    }

    if let Some(min_salary) = filter.min_salary {
        let min_salary = non_negative("minSalary", min_salary)?;
        clause.push_bound(SqlValue::Integer(min_salary), |n| format!("salary >= ${}", n));
    }

    if filter.has_equity == Some(true) {
        clause.push(dialect.positive_decimal("equity"));
    }

    Ok(clause)
}

/// WHERE clause for a company listing.
pub fn sql_for_company_filter(
    filter: Option<&CompanyFilter>,
    dialect: SqlDialect,
    preceding: usize,
) -> Result<WhereClause> {
    let mut clause = WhereClause::new(preceding);
    let Some(filter) = filter else {
        return Ok(clause);
    };

    let min = filter
        .min_employees
        .map(|v| non_negative("minEmployees", v))
        .transpose()?;
    let max = filter
        .max_employees
        .map(|v| non_negative("maxEmployees", v))
        .transpose()?;

    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(AppError::Validation(
                "minEmployees cannot be greater than maxEmployees".to_string(),
            ));
        }
    }

    if let Some(name) = filter.name_like.as_deref().filter(|n| !n.is_empty()) {
        clause.push_bound(dialect.contains_pattern(name), |n| {
            dialect.contains_predicate("name", n)
        });
    }

    if let Some(min) = min {
        clause.push_bound(SqlValue::Integer(min), |n| format!("num_employees >= ${}", n));
    }

    if let Some(max) = max {
        clause.push_bound(SqlValue::Integer(max), |n| format!("num_employees <= ${}", n));
    }

    Ok(clause)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_filter(
        title: Option<&str>,
        min_salary: Option<i64>,
        has_equity: Option<bool>,
    ) -> JobFilter {
        JobFilter {
            title: title.map(str::to_string),
            min_salary,
            has_equity,
        }
    }

    #[test]
    fn test_no_filter_is_empty() {
        let clause = sql_for_job_filter(None, SqlDialect::Postgres, 0).unwrap();
        assert!(clause.is_empty());
        assert_eq!(clause.to_sql(), "");
        assert!(clause.values().is_empty());

        let clause =
            sql_for_job_filter(Some(&JobFilter::default()), SqlDialect::Postgres, 0).unwrap();
        assert!(clause.is_empty());
    }

    #[test]
    fn test_all_criteria_postgres() {
        let filter = job_filter(Some("Eng"), Some(2000), Some(true));

        let clause = sql_for_job_filter(Some(&filter), SqlDialect::Postgres, 0).unwrap();

        assert_eq!(
            clause.to_sql(),
            "WHERE title ILIKE $1 AND salary >= $2 AND equity > 0"
        );
        assert_eq!(
            clause.values(),
            &[SqlValue::from("%Eng%"), SqlValue::Integer(2000)]
        );
    }

    #[test]
    fn test_sqlite_dialect_matches_folded_title() {
        let filter = job_filter(Some("ÉLÈVE"), None, Some(true));

        let clause = sql_for_job_filter(Some(&filter), SqlDialect::Sqlite, 0).unwrap();

        assert_eq!(
            clause.predicates(),
            &[
                "title_folded LIKE $1".to_string(),
                "CAST(equity AS REAL) > 0".to_string()
            ]
        );
        assert_eq!(clause.values(), &[SqlValue::from("%élève%")]);
    }

    #[test]
    fn test_sqlite_company_name_is_folded() {
        let filter = CompanyFilter {
            name_like: Some("SOCIÉTÉ".to_string()),
            ..Default::default()
        };

        let clause = sql_for_company_filter(Some(&filter), SqlDialect::Sqlite, 0).unwrap();

        assert_eq!(clause.to_sql(), "WHERE name_folded LIKE $1");
        assert_eq!(clause.values(), &[SqlValue::from("%société%")]);
    }

    #[test]
    fn test_placeholders_continue_after_preceding() {
        let filter = job_filter(Some("Eng"), Some(10), None);

        let clause = sql_for_job_filter(Some(&filter), SqlDialect::Postgres, 2).unwrap();

        assert_eq!(clause.to_sql(), "WHERE title ILIKE $3 AND salary >= $4");
        assert_eq!(clause.values().len(), 2);
    }

    #[test]
    fn test_empty_title_and_false_equity_are_ignored() {
        let filter = job_filter(Some(""), None, Some(false));

        let clause = sql_for_job_filter(Some(&filter), SqlDialect::Postgres, 0).unwrap();

        assert!(clause.is_empty());
    }

    #[test]
    fn test_has_equity_binds_nothing() {
        let filter = job_filter(None, Some(5), Some(true));

        let clause = sql_for_job_filter(Some(&filter), SqlDialect::Postgres, 0).unwrap();

        assert_eq!(clause.to_sql(), "WHERE salary >= $1 AND equity > 0");
        assert_eq!(clause.values(), &[SqlValue::Integer(5)]);
    }

    #[test]
    fn test_negative_min_salary() {
        let filter = job_filter(None, Some(-1), None);

        let result = sql_for_job_filter(Some(&filter), SqlDialect::Postgres, 0);

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_company_filter() {
        let filter = CompanyFilter {
            name_like: Some("net".to_string()),
            min_employees: Some(10),
            max_employees: Some(100),
        };

        let clause = sql_for_company_filter(Some(&filter), SqlDialect::Postgres, 0).unwrap();

        assert_eq!(
            clause.to_sql(),
            "WHERE name ILIKE $1 AND num_employees >= $2 AND num_employees <= $3"
        );
        assert_eq!(
            clause.values(),
            &[
                SqlValue::from("%net%"),
                SqlValue::Integer(10),
                SqlValue::Integer(100)
            ]
        );
    }

    #[test]
    fn test_company_filter_min_above_max() {
        let filter = CompanyFilter {
            name_like: None,
            min_employees: Some(10),
            max_employees: Some(5),
        };

        let result = sql_for_company_filter(Some(&filter), SqlDialect::Postgres, 0);

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
