//! `name=value` config files as option entries.
//!
//! Each non-empty, non-comment line becomes one entry: `key=value` gives
//! `-key` with that value, a bare `key` gives the bare flag `-key`. Keys
//! may be written with one or two leading hyphens. A backslash at the end
//! of a line joins it with the next one.

use std::path::Path;

use crate::error::{Error, Result};
use crate::token::OptionEntry;

/// Parse config text, silently skipping lines that cannot be understood.
pub fn parse_config(text: &str) -> Vec<OptionEntry> {
    let mut entries = Vec::new();
    for (line, l) in logical_lines(text) {
        match parse_line(&l) {
            Some(entry) => entries.push(entry),
            None => tracing::debug!(line, text = %l, "skipping config line"),
        }
    }
    entries
}

/// Like [`parse_config`] but reports the first bad line.
pub fn parse_config_strict(text: &str) -> Result<Vec<OptionEntry>> {
    let mut entries = Vec::new();
    for (line, l) in logical_lines(text) {
        match parse_line(&l) {
            Some(entry) => entries.push(entry),
            None => return Err(Error::ConfigLine { line, text: l }),
        }
    }
    Ok(entries)
}

pub fn read_config_file(path: impl AsRef<Path>) -> Result<Vec<OptionEntry>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_config(&content);
    tracing::debug!(path = %path.display(), entries = entries.len(), "read config file");
    Ok(entries)
}

pub fn read_config_file_strict(path: impl AsRef<Path>) -> Result<Vec<OptionEntry>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config_strict(&content)
}

/// Join continuation lines and drop blanks and comments.
///
/// Yields the 1-based number of the line each logical line starts on,
/// together with its trimmed text.
fn logical_lines(text: &str) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    let mut pending = String::new();
    let mut continued = false;
    let mut start = 0;

    for (i, raw) in text.lines().enumerate() {
        if !continued {
            start = i + 1;
        }
        match raw.strip_suffix('\\') {
            Some(head) => {
                pending.push_str(head);
                continued = true;
                continue;
            }
            None => pending.push_str(raw),
        }
        continued = false;
        let joined = std::mem::take(&mut pending);
        push_logical(&mut out, start, &joined);
    }
    if continued {
        push_logical(&mut out, start, &pending);
    }
    out
}

fn push_logical(out: &mut Vec<(usize, String)>, line: usize, text: &str) {
    let l = text.trim();
    if l.is_empty() || l.starts_with('#') {
        return;
    }
    out.push((line, l.to_string()));
}

fn parse_line(line: &str) -> Option<OptionEntry> {
    let (key, value) = match line.split_once('=') {
        Some((k, v)) => (k.trim_end(), Some(v.trim_start())),
        None => (line, None),
    };

    let key = key.strip_prefix('-').unwrap_or(key);
    let key = key.strip_prefix('-').unwrap_or(key);
    if key.is_empty() || key.contains(|c: char| c.is_whitespace()) {
        return None;
    }

    Some(OptionEntry::new(&format!("-{}", key), value))
}
