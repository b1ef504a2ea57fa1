//! JSON listing of the constants written to a header

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::transform::{EscapeStyle, IconConstant};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Selector name, e.g. `arrow-left`
    pub name: String,
    /// Constant name, e.g. `ICON_ARROW_LEFT`
    pub constant: String,
    /// Lowercase hex without prefix, e.g. `f104`
    pub codepoint: String,
    /// Escape sequence exactly as written into the header
    pub utf8: String,
}

impl ManifestEntry {
    pub fn new(icon: &IconConstant, style: EscapeStyle) -> Self {
        Self {
            name: icon.icon_name.clone(),
            constant: icon.constant_name.clone(),
            codepoint: format!("{:x}", icon.codepoint as u32),
            utf8: icon.escaped(style),
        }
    }
}

pub fn entries(icons: &[IconConstant], style: EscapeStyle) -> Vec<ManifestEntry> {
    icons.iter().map(|icon| ManifestEntry::new(icon, style)).collect()
}

pub fn write_manifest<W: Write>(writer: W, icons: &[IconConstant], style: EscapeStyle) -> Result<()> {
    serde_json::to_writer_pretty(writer, &entries(icons, style))?;
    Ok(())
}

pub fn write_manifest_file(path: &Path, icons: &[IconConstant], style: EscapeStyle) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::file_access(path, e))?;
    let mut writer = BufWriter::new(file);
    write_manifest(&mut writer, icons, style)?;
    writer.flush().map_err(|e| Error::file_access(path, e))
}
