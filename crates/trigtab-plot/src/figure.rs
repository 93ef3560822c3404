//! Scatter-figure rendering for event tables.
//!
//! Figures render either to an in-memory SVG document or to a file chosen
//! by extension. Rendering is the save-ability check: a figure that cannot
//! be drawn returns an error rather than producing an empty document.

use std::ffi::OsStr;
use std::fmt::Display;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use trigtab_core::EventTable;

use crate::error::{Error, Result};
use crate::text::{format_float, format_label, TextRendering};

/// Appearance of one figure.
#[derive(Debug, Clone)]
pub struct FigureSpec {
    /// Figure title; empty for none.
    pub title: String,
    /// X-axis label; empty to use the column name.
    pub x_label: String,
    /// Y-axis label; empty to use the column name.
    pub y_label: String,
    /// Text rendering mode applied to title, axis labels and tick labels.
    pub text_rendering: TextRendering,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl Default for FigureSpec {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            text_rendering: TextRendering::Plain,
            width: 800,
            height: 600,
        }
    }
}

/// Renders a scatter plot of two numeric columns to an SVG document.
///
/// # Errors
///
/// Returns an error if either column is missing or non-numeric, the table
/// is empty, or the backend fails.
pub fn render_scatter(
    table: &EventTable,
    x: &str,
    y: &str,
    spec: &FigureSpec,
) -> Result<String> {
    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (spec.width, spec.height)).into_drawing_area();
        draw_scatter(&root, table, x, y, spec)?;
    }
    Ok(svg)
}

/// Renders a scatter plot to a file, picking the backend from the
/// extension: `.svg` for vector output, `.png`/`.bmp`/`.jpg`/`.jpeg` for
/// raster.
///
/// # Errors
///
/// Returns an error for unknown extensions and for any rendering failure.
pub fn save_scatter(
    path: impl AsRef<Path>,
    table: &EventTable,
    x: &str,
    y: &str,
    spec: &FigureSpec,
) -> Result<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(OsStr::to_str)
        .unwrap_or_default()
        .to_ascii_lowercase();
    match ext.as_str() {
        "svg" => {
            let root = SVGBackend::new(path, (spec.width, spec.height)).into_drawing_area();
            draw_scatter(&root, table, x, y, spec)?;
        }
        "png" | "bmp" | "jpg" | "jpeg" => {
            let root = BitMapBackend::new(path, (spec.width, spec.height)).into_drawing_area();
            draw_scatter(&root, table, x, y, spec)?;
        }
        other => return Err(Error::UnsupportedFormat(other.to_string())),
    }
    debug!(path = %path.display(), "figure saved");
    Ok(())
}

fn draw_scatter<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    table: &EventTable,
    x: &str,
    y: &str,
    spec: &FigureSpec,
) -> Result<()> {
    let xs = table.numeric_column(x)?;
    let ys = table.numeric_column(y)?;
    if xs.is_empty() {
        return Err(Error::EmptyTable);
    }

    root.fill(&WHITE).map_err(render_err)?;

    let (x_min, x_max) = padded_range(&xs);
    let (y_min, y_max) = padded_range(&ys);
    let mode = spec.text_rendering;

    let mut builder = ChartBuilder::on(root);
    builder
        .margin(12)
        .x_label_area_size(42)
        .y_label_area_size(52);
    if !spec.title.is_empty() {
        builder.caption(format_label(&spec.title, mode), ("sans-serif", 22));
    }
    let mut chart = builder
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(render_err)?;

    let x_desc = if spec.x_label.is_empty() { x } else { &spec.x_label };
    let y_desc = if spec.y_label.is_empty() { y } else { &spec.y_label };
    chart
        .configure_mesh()
        .x_desc(format_label(x_desc, mode))
        .y_desc(format_label(y_desc, mode))
        .x_label_formatter(&|v| format_float(*v, mode))
        .y_label_formatter(&|v| format_float(*v, mode))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(
            xs.iter()
                .zip(ys.iter())
                .map(|(&px, &py)| Circle::new((px, py), 3, BLUE.filled())),
        )
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    debug!(points = xs.len(), "rendered scatter");
    Ok(())
}

/// Axis range with a 5% margin on either side so edge points stay visible.
fn padded_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return (min - 1.0, max + 1.0);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}

fn render_err<E: Display>(err: E) -> Error {
    Error::Render(err.to_string())
}
