//! HTML entity decoding for server-provided strings.
//!
//! The backend escapes text for a browser. The terminal has no HTML renderer,
//! so line breaks become newlines, tags are stripped and the common named and
//! numeric entities are translated back to characters.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br>").expect("valid line break regex"));

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?[a-z0-9\-_]+[^>]*>").expect("valid tag regex"));

static NAMED_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(nbsp|amp|quot|lt|gt|apos);").expect("valid entity regex"));

static DECIMAL_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#?([0-9]+);").expect("valid decimal entity regex"));

static HEX_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)&#x?([0-9a-f]+);").expect("valid hex entity regex"));

/// Decode HTML entities and strip markup from `input`.
///
/// Unknown named entities and code points that are not valid characters are
/// left untouched.
pub fn decode_html_entities(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let text = LINE_BREAK.replace_all(input, "\n");
    let text = TAG.replace_all(&text, "");
    let text = NAMED_ENTITY.replace_all(&text, |caps: &Captures| {
        match &caps[1] {
            "nbsp" => " ",
            "amp" => "&",
            "quot" => "\"",
            "lt" => "<",
            "gt" => ">",
            "apos" => "'",
            _ => unreachable!("regex only matches known entities"),
        }
        .to_string()
    });
    let text = DECIMAL_ENTITY.replace_all(&text, |caps: &Captures| {
        decode_code_point(&caps[1], 10).unwrap_or_else(|| caps[0].to_string())
    });
    let text = HEX_ENTITY.replace_all(&text, |caps: &Captures| {
        decode_code_point(&caps[1], 16).unwrap_or_else(|| caps[0].to_string())
    });

    text.into_owned()
}

fn decode_code_point(digits: &str, radix: u32) -> Option<String> {
    u32::from_str_radix(digits, radix)
        .ok()
        .and_then(char::from_u32)
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(decode_html_entities("12:04:33"), "12:04:33");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode_html_entities(""), "");
    }

    #[test]
    fn test_named_entities() {
        assert_eq!(
            decode_html_entities("Tom &amp; Jerry &lt;3 &quot;hi&quot; it&apos;s&nbsp;ok"),
            "Tom & Jerry <3 \"hi\" it's ok"
        );
    }

    #[test]
    fn test_decimal_entity() {
        assert_eq!(decode_html_entities("&#39;quoted&#39;"), "'quoted'");
    }

    #[test]
    fn test_hex_entity() {
        assert_eq!(decode_html_entities("&#x41;&#x42;"), "AB");
    }

    #[test]
    fn test_line_breaks_and_tags() {
        assert_eq!(
            decode_html_entities("<b>Round</b> time<br>12:00"),
            "Round time\n12:00"
        );
    }

    #[test]
    fn test_unknown_entity_untouched() {
        assert_eq!(decode_html_entities("&copy; 2560"), "&copy; 2560");
    }

    #[test]
    fn test_invalid_code_point_untouched() {
        assert_eq!(decode_html_entities("&#1114112;"), "&#1114112;");
    }
}
