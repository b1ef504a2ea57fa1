//! Matches icon glyph declarations in stylesheet lines

use regex::Regex;

use crate::error::Result;

pub const DEFAULT_SELECTOR_PREFIX: &str = "ri-";

/// One icon declaration found on a stylesheet line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconMatch<'a> {
    /// Selector name after the prefix, e.g. `arrow-left`
    pub raw_name: &'a str,
    /// Hex digits from the `content` escape, e.g. `f104`
    pub raw_codepoint: &'a str,
}

/// Compiled `.<prefix><name>: ... content: "\<hex>"` matcher
#[derive(Debug, Clone)]
pub struct IconPattern {
    regex: Regex,
}

impl IconPattern {
    pub fn new(selector_prefix: &str) -> Result<Self> {
        let source = format!(
            r#"\.{}(\S+):.*content: "\\(\w+)""#,
            regex::escape(selector_prefix)
        );
        Ok(Self {
            regex: Regex::new(&source)?,
        })
    }

    /// Search a single line, returning `None` when it holds no declaration
    pub fn find<'a>(&self, line: &'a str) -> Option<IconMatch<'a>> {
        let caps = self.regex.captures(line)?;
        Some(IconMatch {
            raw_name: caps.get(1)?.as_str(),
            raw_codepoint: caps.get(2)?.as_str(),
        })
    }
}

impl Default for IconPattern {
    fn default() -> Self {
        Self::new(DEFAULT_SELECTOR_PREFIX).expect("default selector pattern compiles")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_before_pseudo_element() {
        let pattern = IconPattern::default();
        let m = pattern
            .find(r#".ri-arrow-left:before { content: "\f104"; }"#)
            .unwrap();
        assert_eq!(m.raw_name, "arrow-left");
        assert_eq!(m.raw_codepoint, "f104");
    }

    #[test]
    fn test_match_is_not_anchored() {
        let pattern = IconPattern::default();
        let m = pattern
            .find(r#"  .ri-home-fill:before { content: "\ee1a"; }"#)
            .unwrap();
        assert_eq!(m.raw_name, "home-fill");
        assert_eq!(m.raw_codepoint, "ee1a");
    }

    #[test]
    fn test_non_matching_lines() {
        let pattern = IconPattern::default();
        assert!(pattern.find("").is_none());
        assert!(pattern.find("@font-face {").is_none());
        assert!(pattern.find(r#".fa-home:before { content: "\f015"; }"#).is_none());
        // content on a separate line
        assert!(pattern.find(".ri-home:before {").is_none());
        assert!(pattern.find(r#"  content: "\e900";"#).is_none());
        // requires exactly one space after the colon
        assert!(pattern.find(r#".ri-home:before { content:"\e900"; }"#).is_none());
    }

    #[test]
    fn test_custom_prefix_is_escaped() {
        let pattern = IconPattern::new("fa.").unwrap();
        assert!(pattern.find(r#".fa.home:before { content: "\f015"; }"#).is_some());
        assert!(pattern.find(r#".faxhome:before { content: "\f015"; }"#).is_none());
    }

    #[test]
    fn test_word_token_may_be_non_hex() {
        let pattern = IconPattern::default();
        let m = pattern
            .find(r#".ri-odd:before { content: "\zz9"; }"#)
            .unwrap();
        assert_eq!(m.raw_codepoint, "zz9");
    }
}
