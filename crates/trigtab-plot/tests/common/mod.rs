//! Shared fixtures for figure tests.
//!
//! Every figure test runs under each text-rendering mode and finishes by
//! proving the figure saves: `save` renders to an in-memory SVG document and
//! checks it is well formed, `save_and_close` additionally drops the
//! document, returning only its size.

use serde_json::json;
use trigtab_core::EventTable;
use trigtab_plot::{render_scatter, FigureSpec, TextRendering};

/// A small deterministic trigger table.
pub fn sample_table() -> EventTable {
    EventTable::new(
        vec![
            "peak_time".to_string(),
            "frequency".to_string(),
            "snr".to_string(),
        ],
        vec![
            vec![json!(1_126_259_462.0), json!(32.0), json!(7.5)],
            vec![json!(1_126_259_463.5), json!(64.0), json!(12.0)],
            vec![json!(1_126_259_465.0), json!(96.0), json!(5.25)],
            vec![json!(1_126_259_467.2), json!(128.0), json!(9.1)],
        ],
    )
    .expect("sample table is well formed")
}

/// A spec for the sample table under the given rendering mode.
pub fn sample_spec(mode: TextRendering) -> FigureSpec {
    FigureSpec {
        title: "trigger_rate".to_string(),
        text_rendering: mode,
        ..FigureSpec::default()
    }
}

/// Runs `test` once per text-rendering mode.
pub fn for_each_text_rendering(test: impl Fn(TextRendering)) {
    for mode in TextRendering::ALL {
        test(mode);
    }
}

/// Renders the figure and asserts the document is a usable SVG.
pub fn save(spec: &FigureSpec, table: &EventTable) -> String {
    let svg = render_scatter(table, "frequency", "snr", spec)
        .expect("figure must render");
    assert!(!svg.is_empty(), "rendered document is empty");
    assert!(svg.contains("<svg"), "document is not SVG");
    assert!(svg.contains("</svg>"), "document is truncated");
    svg
}

/// Renders, asserts, and discards the figure, returning its size in bytes.
pub fn save_and_close(spec: &FigureSpec, table: &EventTable) -> usize {
    let svg = save(spec, table);
    svg.len()
}
