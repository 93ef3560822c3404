//! SELECT statement construction.
//!
//! Queries have the shape `SELECT <cols> FROM <table> WHERE <predicates>`.
//! Table and column names are validated as identifiers before they are
//! interpolated; threshold values render through [`ColumnFilter::to_sql`].

use trigtab_core::filter::is_identifier;
use trigtab_core::ColumnFilter;

use crate::error::{Error, Result};

/// Builds a `SELECT` statement for one table.
///
/// With no `columns` the projection is `*`; otherwise each column is
/// double-quoted and comma-joined. Predicates are joined with ` AND `; an
/// empty filter list produces no `WHERE` clause.
///
/// # Errors
///
/// Returns an error if the table or any column is not a plain identifier.
pub fn build_select(
    table: &str,
    columns: Option<&[String]>,
    filters: &[ColumnFilter],
) -> Result<String> {
    if !is_identifier(table) {
        return Err(Error::Core(trigtab_core::Error::InvalidIdentifier(
            table.to_string(),
        )));
    }

    let projection = match columns {
        None => "*".to_string(),
        Some([]) => "*".to_string(),
        Some(cols) => {
            for col in cols {
                if !is_identifier(col) {
                    return Err(Error::Core(trigtab_core::Error::InvalidIdentifier(
                        col.clone(),
                    )));
                }
            }
            cols.iter()
                .map(|c| format!("\"{c}\""))
                .collect::<Vec<_>>()
                .join(", ")
        }
    };

    let mut sql = format!("SELECT {projection} FROM {table}");
    if !filters.is_empty() {
        let predicates = filters
            .iter()
            .map(ColumnFilter::to_sql)
            .collect::<Vec<_>>()
            .join(" AND ");
        sql.push_str(" WHERE ");
        sql.push_str(&predicates);
    }
    Ok(sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trigtab_core::parse_filters;

    #[test]
    fn test_select_all() {
        let sql = build_select("glitches", None, &[]).unwrap();
        assert_eq!(sql, "SELECT * FROM glitches");
    }

    #[test]
    fn test_select_columns_are_quoted() {
        let cols = vec!["peak_time".to_string(), "snr".to_string()];
        let sql = build_select("glitches", Some(&cols), &[]).unwrap();
        assert_eq!(sql, "SELECT \"peak_time\", \"snr\" FROM glitches");
    }

    #[test]
    fn test_empty_column_list_selects_all() {
        let sql = build_select("glitches", Some(&[]), &[]).unwrap();
        assert_eq!(sql, "SELECT * FROM glitches");
    }

    #[test]
    fn test_filters_join_with_and() {
        let filters = parse_filters(["snr > 5", "10 <= frequency < 100"]).unwrap();
        let sql = build_select("glitches", None, &filters).unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM glitches WHERE snr > 5 AND frequency >= 10 AND frequency < 100"
        );
    }

    #[test]
    fn test_text_filter_renders_quoted() {
        let filters = parse_filters(["label = 'Blip'"]).unwrap();
        let sql = build_select("glitches", None, &filters).unwrap();
        assert_eq!(sql, "SELECT * FROM glitches WHERE label = 'Blip'");
    }

    #[test]
    fn test_bad_table_name_rejected() {
        assert!(build_select("glitches; DROP TABLE x", None, &[]).is_err());
        assert!(build_select("", None, &[]).is_err());
    }

    #[test]
    fn test_bad_column_name_rejected() {
        let cols = vec!["snr\" FROM other --".to_string()];
        assert!(build_select("glitches", Some(&cols), &[]).is_err());
    }
}
