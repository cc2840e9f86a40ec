//! Reading and writing email records as JSON.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use mailsift_core::Email;

/// Read records from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_emails(path: Option<&Path>) -> Result<Vec<Email>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            parse_emails(file).with_context(|| format!("cannot parse {}", path.display()))
        }
        _ => parse_emails(std::io::stdin().lock()).context("cannot parse standard input"),
    }
}

/// Parse a JSON array of records.
pub fn parse_emails(reader: impl Read) -> Result<Vec<Email>> {
    let emails = serde_json::from_reader(std::io::BufReader::new(reader))?;
    Ok(emails)
}

/// Write records as a JSON array followed by a newline.
pub fn write_emails(mut writer: impl Write, emails: &[Email], pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, emails)?;
    } else {
        serde_json::to_writer(&mut writer, emails)?;
    }
    writeln!(writer)?;
    Ok(())
}
