//! Scans a stylesheet and writes one constant declaration per icon

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::pattern::IconPattern;
use crate::transform::{EscapeStyle, IconConstant};

const STREAM_INPUT: &str = "<input>";
const STREAM_OUTPUT: &str = "<output>";

#[derive(Debug, Clone)]
pub struct Generator {
    pattern: IconPattern,
    constant_prefix: String,
    escape: EscapeStyle,
}

impl Default for Generator {
    fn default() -> Self {
        Self::from_config(&Config::default()).expect("default config is valid")
    }
}

impl Generator {
    pub fn new(pattern: IconPattern, constant_prefix: impl Into<String>, escape: EscapeStyle) -> Self {
        Self {
            pattern,
            constant_prefix: constant_prefix.into(),
            escape,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            IconPattern::new(&config.selector_prefix)?,
            config.constant_prefix.as_str(),
            config.escape_style(),
        ))
    }

    pub fn escape_style(&self) -> EscapeStyle {
        self.escape
    }

    /// Yield a constant for every matching line, in input order
    pub fn constants<'g, R: BufRead + 'g>(
        &'g self,
        reader: R,
    ) -> impl Iterator<Item = Result<IconConstant>> + 'g {
        self.scan(reader, Path::new(STREAM_INPUT))
    }

    fn scan<'g, R: BufRead + 'g>(
        &'g self,
        reader: R,
        input: &'g Path,
    ) -> impl Iterator<Item = Result<IconConstant>> + 'g {
        reader.lines().filter_map(move |line| {
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::file_access(input, e))),
            };
            let m = self.pattern.find(&line)?;
            Some(IconConstant::new(&self.constant_prefix, m.raw_name, m.raw_codepoint))
        })
    }

    /// Write the header for everything `reader` declares and return the emitted constants
    pub fn write_header<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
    ) -> Result<Vec<IconConstant>> {
        self.emit(reader, writer, Path::new(STREAM_INPUT), Path::new(STREAM_OUTPUT))
    }

    fn emit<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
        input: &Path,
        output: &Path,
    ) -> Result<Vec<IconConstant>> {
        let mut emitted = Vec::new();
        for icon in self.scan(reader, input) {
            let icon = icon?;
            debug!("{} -> U+{:04X}", icon.constant_name, icon.codepoint as u32);
            writeln!(writer, "{}", icon.declaration(self.escape))
                .map_err(|e| Error::file_access(output, e))?;
            emitted.push(icon);
        }
        Ok(emitted)
    }

    /// Generate `output_path` from the stylesheet at `css_path`.
    ///
    /// The output is created (or truncated) before the input is opened, so a
    /// missing input leaves an empty output behind.
    pub fn generate_files(&self, css_path: &Path, output_path: &Path) -> Result<Vec<IconConstant>> {
        let output = File::create(output_path).map_err(|e| Error::file_access(output_path, e))?;
        let mut writer = BufWriter::new(output);

        let input = File::open(css_path).map_err(|e| Error::file_access(css_path, e))?;
        let emitted = self.emit(BufReader::new(input), &mut writer, css_path, output_path)?;

        writer.flush().map_err(|e| Error::file_access(output_path, e))?;
        Ok(emitted)
    }
}
