//! Post-processing passes applied to the renderer's buffer.

use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder the renderer drops wherever a line break belongs.
///
/// A private-use code point: the squeeze pass collapses every whitespace run,
/// so the marker must not itself be whitespace, and it must not collide with
/// anything a document could plausibly contain.
pub(crate) const PARAGRAPH_BREAK: &str = "\u{e000}";

const UNCHECKED_BOX: &str = "☐ ";
const CHECKED_BOX: &str = "☑\u{fe0e} ";

static BOLD_MARKER_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*(\s\*)+").expect("bold marker pattern should compile"));
static ITALIC_MARKER_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_( _)+").expect("italic marker pattern should compile"));
static PADDED_NEWLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" *\n *").expect("padded newline pattern should compile"));

/// Collapses redundant markers and whitespace in an accumulated buffer and
/// resolves paragraph-break placeholders into real newlines.
///
/// The pass order is load-bearing: checkbox shorthand is rewritten before the
/// whitespace squeeze (the trailing space in `"[] "` must still be a literal
/// single space), and placeholders become newlines only after the squeeze so
/// it cannot eat them.
pub fn normalize(buffer: &str) -> String {
    // Marker runs left behind where bold or italic elements touch.
    let output = BOLD_MARKER_RUN.replace_all(buffer, "*");
    let output = ITALIC_MARKER_RUN.replace_all(&output, "_");

    let output = output
        .replace("[] ", UNCHECKED_BOX)
        .replace("[x] ", CHECKED_BOX);

    // Squeeze every whitespace run to a single space; trims the ends as a
    // side effect. The paragraph marker is not whitespace and rides through.
    let output = output.split_whitespace().collect::<Vec<_>>().join(" ");

    let output = output.replace(PARAGRAPH_BREAK, "\n");
    let output = PADDED_NEWLINE.replace_all(&output, "\n");

    output.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn squeezes_whitespace_runs() {
        assert_eq!(normalize("  a \t b\n\nc  "), "a b c");
    }

    #[test]
    fn collapses_adjacent_bold_markers() {
        assert_eq!(normalize(" * *x* * "), "*x*");
    }

    #[test]
    fn collapses_adjacent_italic_markers() {
        assert_eq!(normalize(" _ _x_ _ "), "_x_");
    }

    #[test]
    fn paragraph_break_survives_the_squeeze() {
        let buffer = format!("left  {PARAGRAPH_BREAK}  right");
        assert_eq!(normalize(&buffer), "left\nright");
    }

    #[test]
    fn rewrites_checkbox_shorthand() {
        assert_eq!(normalize("[] task"), "☐ task");
        assert_eq!(normalize("[x] task"), "☑\u{fe0e} task");
    }

    #[test]
    fn checkbox_needs_the_trailing_space() {
        assert_eq!(normalize("[]x"), "[]x");
    }

    #[test]
    fn idempotent_on_marker_free_input() {
        // Holds for buffers already free of placeholders and of the raw
        // `*`/`_` markers the first two passes rewrite.
        for input in ["  spaced   out\ttext ", "[] task", "plain", ""] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
    }
}
