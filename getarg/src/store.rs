//! Parsed argument state and its typed accessors.

use std::collections::HashMap;
use std::ffi::OsString;

use crate::error::{Error, Result};
use crate::flags;
use crate::number;
use crate::token::{self, OptionEntry};

/// Canonical option entries from one parse, indexed by name.
///
/// A store is never modified after construction. Parsing a new argument
/// list builds a new store; there is no merging with a previous one.
#[derive(Debug, Clone, Default)]
pub struct ArgStore {
    entries: Vec<OptionEntry>,
    index: HashMap<String, Vec<usize>>,
}

impl ArgStore {
    /// Build from an argument list that no longer contains the program name.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let store = Self::from_entries(token::tokenize(args));
        tracing::debug!(
            entries = store.len(),
            names = store.index.len(),
            "parsed arguments"
        );
        store
    }

    /// Build from a full argv; element 0 (the program) is discarded.
    pub fn from_argv<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_args(argv.into_iter().skip(1))
    }

    /// Build from the current process arguments.
    ///
    /// Fails only when an option token is not valid UTF-8; the program
    /// path and non-option tokens are never inspected as text.
    pub fn from_env() -> Result<Self> {
        let args = unicode_args(std::env::args_os())?;
        Ok(Self::from_args(args))
    }

    pub fn from_entries(entries: Vec<OptionEntry>) -> Self {
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            index.entry(entry.name.clone()).or_default().push(i);
        }
        ArgStore { entries, index }
    }

    /// Layer config-file entries underneath the command line.
    ///
    /// A config entry is dropped when the command line named the same
    /// option or any of its boolean counterparts (`-X` and `-nonoX` for
    /// `-noX`, `-noX` for `-X`).
    pub fn with_config(self, config: Vec<OptionEntry>) -> Self {
        let mut entries = self.entries;
        let mut kept = 0usize;
        let total = config.len();
        for entry in config {
            if self.index.contains_key(&entry.name)
                || flags::counterpart_names(&entry.name)
                    .iter()
                    .any(|c| self.index.contains_key(c))
            {
                tracing::trace!(name = %entry.name, "config entry overridden by command line");
                continue;
            }
            entries.push(entry);
            kept += 1;
        }
        tracing::debug!(kept, skipped = total - kept, "merged config entries");
        Self::from_entries(entries)
    }

    /// True if `name` occurred at least once.
    pub fn has(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Last occurrence of `name`, if any.
    pub fn last(&self, name: &str) -> Option<&OptionEntry> {
        let idx = *self.index.get(name)?.last()?;
        self.entries.get(idx)
    }

    /// Last value of `name`; a bare flag gives `""`, absence gives `default`.
    pub fn get_string(&self, name: &str, default: &str) -> String {
        match self.last(name) {
            Some(entry) => entry.text().to_string(),
            None => default.to_string(),
        }
    }

    /// Last value of `name` as an integer.
    ///
    /// Absence gives `default`. A value that does not parse gives 0, not
    /// `default`; a bare flag also reads as 0.
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        match self.last(name) {
            Some(entry) => number::parse_int(entry.text()),
            None => default,
        }
    }

    /// Boolean value of `name`, honouring `-no<name>` negation.
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        flags::bool_arg(self, name, default)
    }

    /// Shorthand for `get_bool(name, false)`.
    pub fn flag(&self, name: &str) -> bool {
        self.get_bool(name, false)
    }

    /// Every value given for `name`, in order. Bare occurrences read as `""`.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        match self.index.get(name) {
            Some(idxs) => idxs.iter().map(|&i| self.entries[i].text()).collect(),
            None => Vec::new(),
        }
    }

    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    /// Distinct option names in first-seen order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<(usize, &str)> = self
            .index
            .iter()
            .map(|(name, idxs)| (idxs[0], name.as_str()))
            .collect();
        names.sort_unstable_by_key(|&(first, _)| first);
        names.into_iter().map(|(_, name)| name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Convert argv (program name first) to text, dropping the program name.
///
/// A non-UTF-8 token that starts with `-` is an error; any other
/// non-UTF-8 token could never be an option and is skipped.
fn unicode_args<I>(argv: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = Vec::new();
    for (index, arg) in argv.into_iter().enumerate().skip(1) {
        match arg.into_string() {
            Ok(arg) => args.push(arg),
            Err(raw) => {
                let lossy = raw.to_string_lossy().into_owned();
                if lossy.starts_with('-') {
                    return Err(Error::NotUnicode { index, lossy });
                }
                tracing::trace!(index, token = %lossy, "ignoring non-UTF-8 token");
            }
        }
    }
    Ok(args)
}
