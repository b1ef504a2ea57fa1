//! Decodes a generated icon header and prints each constant's codepoint

use std::fs;
use std::sync::LazyLock;

use clap::Parser;
use regex::Regex;

use iconheader::transform::decode_escapes;

static DECLARATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^const char\* const (\w+) = "((?:\\x[0-9a-fA-F]{1,2})*)";$"#).unwrap()
});

#[derive(Debug, Parser)]
#[command(name = "check_header", about = "Verify the escapes in a generated icon header")]
struct Cli {
    header: std::path::PathBuf,
}

fn decode_line(line: &str) -> Result<(String, char), String> {
    let caps = DECLARATION_RE
        .captures(line)
        .ok_or_else(|| format!("not a constant declaration: {}", line))?;
    let bytes = decode_escapes(&caps[2]).map_err(|e| e.to_string())?;
    let text = String::from_utf8(bytes).map_err(|e| format!("{}: {}", &caps[1], e))?;

    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok((caps[1].to_string(), c)),
        _ => Err(format!("{}: expected exactly one character", &caps[1])),
    }
}

fn main() {
    let cli = Cli::parse();

    let contents = match fs::read_to_string(&cli.header) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to read {:?}: {}", cli.header, e);
            std::process::exit(1);
        }
    };

    let mut failures = 0;
    for (index, line) in contents.lines().enumerate() {
        match decode_line(line) {
            Ok((name, c)) => println!("{} U+{:04X}", name, c as u32),
            Err(e) => {
                eprintln!("line {}: {}", index + 1, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_line() {
        let (name, c) =
            decode_line(r#"const char* const ICON_ARROW_LEFT = "\xef\x84\x84";"#).unwrap();
        assert_eq!(name, "ICON_ARROW_LEFT");
        assert_eq!(c, '\u{f104}');
    }

    #[test]
    fn test_decode_line_unpadded_byte() {
        let (_, c) = decode_line(r#"const char* const ICON_NL = "\xa";"#).unwrap();
        assert_eq!(c, '\n');
    }

    #[test]
    fn test_decode_line_rejects_invalid() {
        assert!(decode_line("#pragma once").is_err());
        assert!(decode_line(r#"const char* const ICON_BAD = "\xef\x84";"#).is_err());
        assert!(decode_line(r#"const char* const ICON_TWO = "\x41\x42";"#).is_err());
    }
}
