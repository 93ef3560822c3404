//! # trigtab Plotting
//!
//! Scatter-figure rendering and label formatting for
//! [`trigtab_core::EventTable`]s.
//!
//! Figures render through plotters' SVG backend into memory (tests assert
//! save-ability this way) or to SVG/raster files by extension. All text on
//! a figure flows through a [`TextRendering`] mode so the same figure can be
//! produced with plain or TeX-style labels.
//!
//! ```rust
//! use serde_json::json;
//! use trigtab_core::EventTable;
//! use trigtab_plot::{render_scatter, FigureSpec, TextRendering};
//!
//! # fn main() -> trigtab_plot::Result<()> {
//! let table = EventTable::new(
//!     vec!["frequency".to_string(), "snr".to_string()],
//!     vec![
//!         vec![json!(32.0), json!(7.5)],
//!         vec![json!(64.0), json!(12.0)],
//!     ],
//! )?;
//! let spec = FigureSpec {
//!     title: "triggers".to_string(),
//!     text_rendering: TextRendering::Tex,
//!     ..FigureSpec::default()
//! };
//! let svg = render_scatter(&table, "frequency", "snr", &spec)?;
//! assert!(svg.contains("<svg"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod figure;
pub mod text;

pub use error::{Error, Result};
pub use figure::{render_scatter, save_scatter, FigureSpec};
pub use text::{format_float, format_label, TextRendering};
