use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{error, info};

use iconheader::error::{Error, Result};
use iconheader::{manifest, Config, Generator};

/// Generate a C++ header of icon constants from an icon font stylesheet.
///
/// Paths not given as flags are prompted for on stdin.
#[derive(Debug, Parser)]
#[command(name = "iconheader", version, about)]
struct Cli {
    /// Stylesheet declaring the icon glyphs
    #[arg(long)]
    css: Option<PathBuf>,

    /// Header file to create or overwrite
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (default: $XDG_CONFIG_HOME/iconheader/iconheaderrc)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write a JSON listing of the emitted constants
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Zero-pad every byte escape to two hex digits
    #[arg(long)]
    pad_escapes: bool,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,
}

/// Print `message` and read one line as a path, keeping all but the line terminator
fn prompt_path<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<PathBuf> {
    writeln!(output, "{}", message).map_err(Error::Prompt)?;
    output.flush().map_err(Error::Prompt)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(Error::Prompt)?;
    Ok(PathBuf::from(line.trim_end_matches(['\r', '\n'])))
}

/// Use the paths given as flags, prompting in order for whichever is missing
fn resolve_paths<R: BufRead, W: Write>(
    css: Option<PathBuf>,
    output: Option<PathBuf>,
    input: &mut R,
    prompt_out: &mut W,
) -> Result<(PathBuf, PathBuf)> {
    let css_path = match css {
        Some(path) => path,
        None => prompt_path(input, prompt_out, "css file name:")?,
    };
    let output_path = match output {
        Some(path) => path,
        None => prompt_path(input, prompt_out, "output header name:")?,
    };
    Ok((css_path, output_path))
}

fn run(cli: Cli) -> Result<()> {
    if cli.init_config {
        let path = cli.config.or_else(Config::default_path).ok_or_else(|| {
            Error::Config("no config location; pass --config <path>".to_string())
        })?;
        Config::default().save_to_file(&path)?;
        info!("Created default config at {:?}", path);
        return Ok(());
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.pad_escapes {
        config.pad_escapes = true;
    }
    info!(
        "Loaded configuration: selector_prefix={:?} constant_prefix={:?} pad_escapes={}",
        config.selector_prefix, config.constant_prefix, config.pad_escapes
    );

    let (css_path, output_path) = resolve_paths(
        cli.css,
        cli.output,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
    )?;

    let generator = Generator::from_config(&config)?;
    let icons = generator.generate_files(&css_path, &output_path)?;
    info!("Wrote {} icon constants to {:?}", icons.len(), output_path);

    if let Some(manifest_path) = cli.manifest {
        manifest::write_manifest_file(&manifest_path, &icons, generator.escape_style())?;
        info!("Wrote manifest to {:?}", manifest_path);
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_for_both_paths_in_order() {
        let mut input = "icons.css\nIcons.h\n".as_bytes();
        let mut out = Vec::new();
        let (css, header) = resolve_paths(None, None, &mut input, &mut out).unwrap();
        assert_eq!(css, PathBuf::from("icons.css"));
        assert_eq!(header, PathBuf::from("Icons.h"));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "css file name:\noutput header name:\n"
        );
    }

    #[test]
    fn test_prompt_strips_only_line_terminator() {
        let mut input = " a b.css \r\n".as_bytes();
        let mut out = Vec::new();
        let path = prompt_path(&mut input, &mut out, "css file name:").unwrap();
        assert_eq!(path, PathBuf::from(" a b.css "));
    }

    #[test]
    fn test_prompt_at_eof_gives_empty_path() {
        let mut input = "".as_bytes();
        let mut out = Vec::new();
        let path = prompt_path(&mut input, &mut out, "css file name:").unwrap();
        assert_eq!(path, PathBuf::new());
    }

    #[test]
    fn test_flags_skip_prompts() {
        let mut input = "ignored.css\n".as_bytes();
        let mut out = Vec::new();
        let (css, header) = resolve_paths(
            Some(PathBuf::from("a.css")),
            Some(PathBuf::from("a.h")),
            &mut input,
            &mut out,
        )
        .unwrap();
        assert_eq!((css, header), (PathBuf::from("a.css"), PathBuf::from("a.h")));
        assert!(out.is_empty());
    }

    #[test]
    fn test_only_missing_path_is_prompted() {
        let mut input = "out.h\n".as_bytes();
        let mut out = Vec::new();
        let (css, header) =
            resolve_paths(Some(PathBuf::from("a.css")), None, &mut input, &mut out).unwrap();
        assert_eq!(css, PathBuf::from("a.css"));
        assert_eq!(header, PathBuf::from("out.h"));
        assert_eq!(String::from_utf8(out).unwrap(), "output header name:\n");
    }
}
