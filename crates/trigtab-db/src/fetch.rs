//! Query execution against a remote PostgreSQL server.

use serde_json::Value;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{Column, PgPool, Row, TypeInfo};
use tracing::{debug, info, warn};

use trigtab_core::{parse_filters, ColumnFilter, EventTable};

use crate::config::DbConfig;
use crate::error::{Error, Result};
use crate::sql::build_select;

/// PostgreSQL error code for an undefined table.
const UNDEFINED_TABLE: &str = "42P01";

/// Opens a connection pool to the configured server.
///
/// # Errors
///
/// Returns an error if the server is unreachable or rejects the credentials.
pub async fn connect(config: &DbConfig) -> Result<PgPool> {
    info!(url = %config.display_url(), "connecting to trigger database");
    let pool = PgPoolOptions::new()
        .max_connections(4)
        .connect(&config.connection_url())
        .await?;
    Ok(pool)
}

/// Names of ordinary tables in the `public` schema, sorted.
///
/// # Errors
///
/// Returns an error if the catalog query fails.
pub async fn list_tables(pool: &PgPool) -> Result<Vec<String>> {
    let rows = sqlx::query(
        "SELECT table_name FROM information_schema.tables \
         WHERE table_schema = 'public' AND table_type = 'BASE TABLE' \
         ORDER BY table_name",
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| row.try_get::<String, _>(0).map_err(Error::from))
        .collect()
}

/// Fetches triggers into an [`EventTable`].
///
/// `selection` holds filter strings such as `"snr > 5"` or
/// `"10 <= frequency < 100"`; `columns` restricts the projection, `None`
/// selecting every column. Null cells are filled with their column's type
/// default before the table is returned.
///
/// # Errors
///
/// Returns an error if a filter does not parse, the query fails, or a column
/// type cannot be converted. When the table does not exist the error lists
/// the table names that do.
pub async fn fetch_table(
    pool: &PgPool,
    table: &str,
    columns: Option<&[String]>,
    selection: &[String],
) -> Result<EventTable> {
    let filters = parse_filters(selection)?;
    fetch_table_filtered(pool, table, columns, &filters).await
}

/// [`fetch_table`] with already-parsed predicates.
///
/// # Errors
///
/// See [`fetch_table`].
pub async fn fetch_table_filtered(
    pool: &PgPool,
    table: &str,
    columns: Option<&[String]>,
    filters: &[ColumnFilter],
) -> Result<EventTable> {
    let sql = build_select(table, columns, filters)?;
    debug!(query = %sql, "executing");

    let rows = match sqlx::query(&sql).fetch_all(pool).await {
        Ok(rows) => rows,
        Err(err) => return Err(amend_undefined_table(pool, table, err).await),
    };

    let result = rows_to_table(&rows)?;
    info!(table = %table, rows = result.n_rows(), "fetched triggers");
    Ok(result.filled())
}

/// Rewrites an undefined-table failure into an error that lists the
/// acceptable table names; every other failure propagates unchanged.
async fn amend_undefined_table(pool: &PgPool, table: &str, err: sqlx::Error) -> Error {
    let undefined = matches!(
        &err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNDEFINED_TABLE)
    );
    if undefined {
        match list_tables(pool).await {
            Ok(available) => {
                return Error::UnknownTable {
                    table: table.to_string(),
                    available,
                }
            }
            Err(list_err) => {
                warn!(error = %list_err, "could not list tables for error message");
            }
        }
    }
    Error::Database(err)
}

/// Converts driver rows into an [`EventTable`].
///
/// An empty result set carries no column metadata and becomes the empty
/// table.
fn rows_to_table(rows: &[PgRow]) -> Result<EventTable> {
    let Some(first) = rows.first() else {
        return Ok(EventTable::empty());
    };

    let columns: Vec<String> = first
        .columns()
        .iter()
        .map(|col| col.name().to_string())
        .collect();
    let type_names: Vec<String> = first
        .columns()
        .iter()
        .map(|col| col.type_info().name().to_string())
        .collect();

    let mut data = Vec::with_capacity(rows.len());
    for row in rows {
        let mut cells = Vec::with_capacity(columns.len());
        for (idx, (column, type_name)) in columns.iter().zip(&type_names).enumerate() {
            cells.push(row_cell(row, idx, column, type_name)?);
        }
        data.push(cells);
    }

    Ok(EventTable::new(columns, data)?)
}

fn row_cell(row: &PgRow, idx: usize, column: &str, type_name: &str) -> Result<Value> {
    let value = match type_name {
        "INT2" => row.try_get::<Option<i16>, _>(idx)?.map_or(Value::Null, Value::from),
        "INT4" => row.try_get::<Option<i32>, _>(idx)?.map_or(Value::Null, Value::from),
        "INT8" => row.try_get::<Option<i64>, _>(idx)?.map_or(Value::Null, Value::from),
        "FLOAT4" => row
            .try_get::<Option<f32>, _>(idx)?
            .map_or(Value::Null, |v| Value::from(f64::from(v))),
        "FLOAT8" => row.try_get::<Option<f64>, _>(idx)?.map_or(Value::Null, Value::from),
        "TEXT" | "VARCHAR" | "CHAR" | "BPCHAR" | "NAME" => row
            .try_get::<Option<String>, _>(idx)?
            .map_or(Value::Null, Value::from),
        "BOOL" => row.try_get::<Option<bool>, _>(idx)?.map_or(Value::Null, Value::from),
        "JSON" | "JSONB" => row
            .try_get::<Option<Value>, _>(idx)?
            .unwrap_or(Value::Null),
        _ => {
            return Err(Error::UnsupportedType {
                column: column.to_string(),
                type_name: type_name.to_string(),
            })
        }
    };
    Ok(value)
}
