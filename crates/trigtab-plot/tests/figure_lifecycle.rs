//! Figure save/close lifecycle under every text-rendering mode.

mod common;

use common::{for_each_text_rendering, sample_spec, sample_table, save, save_and_close};
use trigtab_plot::{format_label, save_scatter, FigureSpec, TextRendering};

#[test]
fn test_every_mode_saves() {
    let table = sample_table();
    for_each_text_rendering(|mode| {
        let size = save_and_close(&sample_spec(mode), &table);
        assert!(size > 0);
    });
}

#[test]
fn test_title_follows_rendering_mode() {
    let table = sample_table();
    for_each_text_rendering(|mode| {
        let svg = save(&sample_spec(mode), &table);
        assert!(svg.contains(&format_label("trigger_rate", mode)));
    });

    // the two modes really differ for this title
    let plain = save(&sample_spec(TextRendering::Plain), &table);
    assert!(plain.contains("trigger_rate"));
    let tex = save(&sample_spec(TextRendering::Tex), &table);
    assert!(tex.contains("trigger\\_rate"));
}

#[test]
fn test_untitled_figure_saves() {
    let table = sample_table();
    for_each_text_rendering(|mode| {
        let spec = FigureSpec {
            text_rendering: mode,
            ..FigureSpec::default()
        };
        save_and_close(&spec, &table);
    });
}

#[test]
fn test_save_to_svg_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("triggers.svg");
    let table = sample_table();

    save_scatter(&path, &table, "frequency", "snr", &sample_spec(TextRendering::Plain)).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("<svg"));
}

#[test]
fn test_repeated_save_is_stable() {
    let table = sample_table();
    let spec = sample_spec(TextRendering::Plain);
    let first = save(&spec, &table);
    let second = save(&spec, &table);
    assert_eq!(first, second);
}
