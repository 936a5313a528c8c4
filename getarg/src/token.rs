//! Raw argument tokens to canonical option entries.
//!
//! A token names an option when it starts with `-` or `--`. Both prefixes
//! collapse to a single hyphen, so `--foo=1` and `-foo=1` yield the same
//! entry. Everything after the first `=` is the value; a token without `=`
//! is a bare flag and carries no value at all.

use std::fmt;

/// One option occurrence: canonical name plus the optional raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub name: String,
    pub value: Option<String>,
}

impl OptionEntry {
    pub fn new(name: &str, value: Option<&str>) -> Self {
        OptionEntry {
            name: name.to_string(),
            value: value.map(str::to_string),
        }
    }

    /// True when the token had no `=value` suffix.
    pub fn is_bare(&self) -> bool {
        self.value.is_none()
    }

    /// The value as text; a bare flag reads as the empty string.
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

impl fmt::Display for OptionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{}={}", self.name, v),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Canonicalize a single token, or `None` if it is not an option.
pub fn normalize(token: &str) -> Option<OptionEntry> {
    let rest = token.strip_prefix('-')?;
    let rest = rest.strip_prefix('-').unwrap_or(rest);

    let (key, value) = match rest.split_once('=') {
        Some((k, v)) => (k, Some(v)),
        None => (rest, None),
    };

    Some(OptionEntry {
        name: format!("-{}", key),
        value: value.map(str::to_string),
    })
}

/// Canonicalize an argument list (program name already removed).
///
/// Tokens that do not start with a hyphen are skipped; positional
/// arguments are not this layer's concern.
pub fn tokenize<I, S>(args: I) -> Vec<OptionEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries = Vec::new();
    for arg in args {
        let arg = arg.as_ref();
        match normalize(arg) {
            Some(entry) => entries.push(entry),
            None => tracing::trace!(token = arg, "ignoring non-option token"),
        }
    }
    entries
}
