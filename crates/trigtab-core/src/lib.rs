//! # trigtab Core
//!
//! Table type and column-filter predicates for the trigtab toolkit.
//!
//! An [`EventTable`] wraps one tabular query result: named columns over rows
//! of JSON cells. [`filter`] provides the predicate model used to build SQL
//! `WHERE` clauses from strings like `snr > 5` or `10 <= frequency < 100`.
//!
//! ## Quick start
//!
//! ```rust
//! use trigtab_core::{parse_filter, EventTable};
//! use serde_json::json;
//!
//! fn main() -> trigtab_core::Result<()> {
//!     let filters = parse_filter("10 <= frequency < 100")?;
//!     assert_eq!(filters.len(), 2);
//!     assert_eq!(filters[0].to_sql(), "frequency >= 10");
//!
//!     let table = EventTable::new(
//!         vec!["snr".to_string()],
//!         vec![vec![json!(7.5)], vec![json!(12.0)]],
//!     )?;
//!     assert_eq!(table.numeric_column("snr")?, vec![7.5, 12.0]);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod filter;
pub mod table;

pub use error::{Error, Result};
pub use filter::{parse_filter, parse_filters, ColumnFilter, CompareOp, FilterValue};
pub use table::EventTable;
