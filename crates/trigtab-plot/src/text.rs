//! Text formatting for figure labels.
//!
//! Labels pass through a [`TextRendering`] mode: `Plain` leaves them
//! untouched, `Tex` escapes TeX-special characters and typesets numbers in
//! math mode. The mode is an explicit argument so tests can exercise every
//! figure under both renderings.

/// How figure text is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextRendering {
    /// Labels are used verbatim.
    #[default]
    Plain,
    /// Labels are escaped for a TeX typesetter, numbers set in math mode.
    Tex,
}

impl TextRendering {
    /// Every rendering mode, for parameterized tests.
    pub const ALL: [Self; 2] = [Self::Plain, Self::Tex];
}

/// Formats a text label for the given rendering mode.
///
/// Under [`TextRendering::Tex`] the characters TeX treats as special
/// (`_`, `%`, `&`, `#`) are backslash-escaped; channel-style names such as
/// `peak_time` would otherwise typeset their underscores as subscripts.
#[must_use]
pub fn format_label(label: &str, mode: TextRendering) -> String {
    match mode {
        TextRendering::Plain => label.to_string(),
        TextRendering::Tex => {
            let mut out = String::with_capacity(label.len());
            for c in label.chars() {
                if matches!(c, '_' | '%' | '&' | '#') {
                    out.push('\\');
                }
                out.push(c);
            }
            out
        }
    }
}

/// Formats a number for the given rendering mode.
///
/// Under [`TextRendering::Tex`], magnitudes outside `[1e-3, 1e4)` are set as
/// `$m \times 10^{e}$` (the mantissa is dropped when it is 1); everything
/// else is wrapped in `$...$`. `Plain` uses shortest-exact decimal
/// formatting.
#[must_use]
pub fn format_float(value: f64, mode: TextRendering) -> String {
    match mode {
        TextRendering::Plain => value.to_string(),
        TextRendering::Tex => format_float_tex(value),
    }
}

#[allow(clippy::cast_possible_truncation)] // exponent of a finite f64 fits i32
fn format_float_tex(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("${value}$");
    }
    let mut exp = value.abs().log10().floor() as i32;
    if (-3..4).contains(&exp) {
        return format!("${value}$");
    }
    // Round away binary noise from the mantissa division.
    let mut mantissa = (value / 10f64.powi(exp) * 1e10).round() / 1e10;
    if mantissa.abs() >= 10.0 {
        mantissa /= 10.0;
        exp += 1;
    }
    if (mantissa - 1.0).abs() < f64::EPSILON {
        format!("$10^{{{exp}}}$")
    } else if (mantissa + 1.0).abs() < f64::EPSILON {
        format!("$-10^{{{exp}}}$")
    } else {
        format!("${mantissa} \\times 10^{{{exp}}}$")
    }
}
