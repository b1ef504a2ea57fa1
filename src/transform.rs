//! Identifier and codepoint transforms for emitted constants

use crate::error::{Error, Result};

pub const DEFAULT_CONSTANT_PREFIX: &str = "ICON_";

/// How each UTF-8 byte is rendered inside the string literal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EscapeStyle {
    /// Natural lowercase hex with no width, so `0x0a` becomes `\xa`
    #[default]
    Unpadded,
    /// Always two digits, so `0x0a` becomes `\x0a`
    Padded,
}

/// Build a constant name: hyphens become underscores, letters are uppercased
pub fn constant_name(prefix: &str, raw_name: &str) -> String {
    let mut name = String::with_capacity(prefix.len() + raw_name.len());
    name.push_str(prefix);
    name.push_str(&raw_name.replace('-', "_").to_uppercase());
    name
}

/// Strip an optional `0x` prefix and single `_` separators between digits.
///
/// Returns `None` when separators are misplaced (leading, trailing or doubled).
fn hex_digits(raw: &str) -> Option<String> {
    let digits = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(rest) => rest.strip_prefix('_').unwrap_or(rest),
        None => raw,
    };
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    Some(digits.replace('_', ""))
}

/// Parse a base-16 token into a Unicode scalar value.
///
/// Accepts `0xf104` and `f_104` as well as plain `f104`.
pub fn parse_codepoint(raw: &str) -> Result<char> {
    // misplaced separators are left in so the parse reports them
    let digits = hex_digits(raw).unwrap_or_else(|| raw.to_string());
    let value = u32::from_str_radix(&digits, 16).map_err(|source| Error::Parse {
        token: raw.to_string(),
        source,
    })?;
    char::from_u32(value).ok_or(Error::InvalidCodepoint { value })
}

/// Render the UTF-8 encoding of `c` as concatenated `\x` escapes
pub fn escape_utf8(c: char, style: EscapeStyle) -> String {
    let mut buf = [0u8; 4];
    escape_bytes(c.encode_utf8(&mut buf).as_bytes(), style)
}

pub fn escape_bytes(bytes: &[u8], style: EscapeStyle) -> String {
    let mut out = String::with_capacity(bytes.len() * 4);
    for byte in bytes {
        let escape = match style {
            EscapeStyle::Unpadded => format!("\\x{:x}", byte),
            EscapeStyle::Padded => format!("\\x{:02x}", byte),
        };
        out.push_str(&escape);
    }
    out
}

/// Decode a run of `\x` escapes in either style back into bytes
pub fn decode_escapes(escaped: &str) -> Result<Vec<u8>> {
    if escaped.is_empty() {
        return Ok(Vec::new());
    }
    let body = escaped
        .strip_prefix("\\x")
        .ok_or_else(|| Error::MalformedEscape {
            escape: escaped.to_string(),
        })?;

    body.split("\\x")
        .map(|digits| {
            let valid = (1..=2).contains(&digits.len())
                && digits.chars().all(|c| c.is_ascii_hexdigit());
            if !valid {
                return Err(Error::MalformedEscape {
                    escape: format!("\\x{}", digits),
                });
            }
            u8::from_str_radix(digits, 16).map_err(|_| Error::MalformedEscape {
                escape: format!("\\x{}", digits),
            })
        })
        .collect()
}

/// A single output constant derived from one matched declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconConstant {
    /// Selector name as written in the stylesheet
    pub icon_name: String,
    pub constant_name: String,
    pub codepoint: char,
}

impl IconConstant {
    pub fn new(constant_prefix: &str, raw_name: &str, raw_codepoint: &str) -> Result<Self> {
        Ok(Self {
            icon_name: raw_name.to_string(),
            constant_name: constant_name(constant_prefix, raw_name),
            codepoint: parse_codepoint(raw_codepoint)?,
        })
    }

    pub fn utf8_bytes(&self) -> Vec<u8> {
        let mut buf = [0u8; 4];
        self.codepoint.encode_utf8(&mut buf).as_bytes().to_vec()
    }

    pub fn escaped(&self, style: EscapeStyle) -> String {
        escape_utf8(self.codepoint, style)
    }

    /// The declaration line, without the trailing newline
    pub fn declaration(&self, style: EscapeStyle) -> String {
        format!(
            "const char* const {} = \"{}\";",
            self.constant_name,
            self.escaped(style)
        )
    }
}
