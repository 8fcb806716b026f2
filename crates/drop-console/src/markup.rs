//! Inline colour markup
//!
//! Entries are annotated as `<color="RRGGBBAA">message</color>`, the rich-text
//! form understood by the display surface's text renderer.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::colour::Colour;

static COLOUR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)</?color(=[^>]*)?>"#).expect("valid colour tag regex"));

static COLOURED_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<color="([0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})">(.*?)</color>"#)
        .expect("valid coloured span regex")
});

/// How message bodies are treated before they are wrapped in markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupPolicy {
    /// Message passes through untouched, including any embedded tags
    #[default]
    Verbatim,
    /// Embedded colour tags are removed from the message
    Strip,
}

impl MarkupPolicy {
    pub fn apply<'a>(self, message: &'a str) -> std::borrow::Cow<'a, str> {
        match self {
            MarkupPolicy::Verbatim => message.into(),
            MarkupPolicy::Strip => strip_colour_tags(message),
        }
    }
}

/// Wrap a message in a colour annotation
pub fn wrap(colour: Colour, message: &str) -> String {
    format!("<color=\"{colour}\">{message}</color>")
}

/// Remove opening and closing colour tags from a message
pub fn strip_colour_tags(message: &str) -> std::borrow::Cow<'_, str> {
    COLOUR_TAG.replace_all(message, "")
}

/// A run of text with an optional colour, as produced by [`segments`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub colour: Option<Colour>,
}

/// Split rendered text into plain and coloured runs.
///
/// Tags that do not form a well-formed coloured span are left in the plain
/// text as-is.
pub fn segments(rendered: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut cursor = 0;

    for caps in COLOURED_SPAN.captures_iter(rendered) {
        let (Some(whole), Some(hex), Some(body)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };

        if whole.start() > cursor {
            out.push(Segment {
                text: &rendered[cursor..whole.start()],
                colour: None,
            });
        }

        out.push(Segment {
            text: body.as_str(),
            colour: hex.as_str().parse().ok(),
        });
        cursor = whole.end();
    }

    if cursor < rendered.len() {
        out.push(Segment {
            text: &rendered[cursor..],
            colour: None,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap() {
        let colour: Colour = "FFFF00".parse().unwrap();
        assert_eq!(wrap(colour, "x"), r#"<color="FFFF00FF">x</color>"#);
    }

    #[test]
    fn test_verbatim_keeps_tags() {
        let message = r#"a <color="00FF00">b</color>"#;
        assert_eq!(MarkupPolicy::Verbatim.apply(message), message);
    }

    #[test]
    fn test_strip_removes_tags() {
        let message = r#"a <color="00FF00">b</color> c</COLOR>"#;
        assert_eq!(MarkupPolicy::Strip.apply(message), "a b c");
    }

    #[test]
    fn test_strip_leaves_other_angle_brackets() {
        assert_eq!(strip_colour_tags("Vec<String> <b>"), "Vec<String> <b>");
    }

    #[test]
    fn test_segments_mixed() {
        let red = Colour::rgb(0xFF, 0, 0);
        let rendered = format!("one\n{}\nthree", wrap(red, "two"));

        assert_eq!(
            segments(&rendered),
            vec![
                Segment {
                    text: "one\n",
                    colour: None
                },
                Segment {
                    text: "two",
                    colour: Some(red)
                },
                Segment {
                    text: "\nthree",
                    colour: None
                },
            ]
        );
    }

    #[test]
    fn test_segments_multiline_body() {
        let red = Colour::rgb(0xFF, 0, 0);
        let rendered = wrap(red, "line 1\nline 2");
        assert_eq!(
            segments(&rendered),
            vec![Segment {
                text: "line 1\nline 2",
                colour: Some(red)
            }]
        );
    }

    #[test]
    fn test_segments_empty() {
        assert!(segments("").is_empty());
    }
}
