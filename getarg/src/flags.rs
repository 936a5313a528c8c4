//! Boolean resolution with `-noX` negation.
//!
//! Precedence, in order:
//!
//! 1. If `-X` occurs anywhere, its last occurrence decides: bare means
//!    true, otherwise any value other than `"0"` is true. `-noX` is then
//!    ignored entirely, wherever it appears.
//! 2. Otherwise, if `-noX` occurs, its last occurrence decides inversely:
//!    bare or any value other than `"0"` forces false, `-noX=0` forces true.
//! 3. Otherwise the caller's default applies.

use crate::store::ArgStore;

/// Name of the negation option for `name` (`-X` becomes `-noX`).
///
/// Returns `None` when there is nothing to negate, i.e. `name` is empty or
/// a lone hyphen.
pub fn negation_name(name: &str) -> Option<String> {
    let bare = name.strip_prefix('-').unwrap_or(name);
    if bare.is_empty() {
        return None;
    }
    Some(format!("-no{}", bare))
}

/// Names whose presence decides the boolean `name` as well.
///
/// Always includes the negation (`-X` gives `-noX`). A name that is itself
/// a negation also yields its positive form, so `-noX` gives both `-nonoX`
/// and `-X`.
pub fn counterpart_names(name: &str) -> Vec<String> {
    let bare = name.strip_prefix('-').unwrap_or(name);
    let mut names: Vec<String> = negation_name(name).into_iter().collect();
    if let Some(rest) = bare.strip_prefix("no") {
        if !rest.is_empty() {
            names.push(format!("-{}", rest));
        }
    }
    names
}

/// Interpret the last value of a flag: bare counts as set.
fn truthy(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => v != "0",
    }
}

/// Resolve boolean option `name` against `store`.
pub fn bool_arg(store: &ArgStore, name: &str, default: bool) -> bool {
    if let Some(last) = store.last(name) {
        let set = truthy(last.value.as_deref());
        tracing::trace!(name, set, "flag resolved from positive form");
        return set;
    }

    if let Some(neg) = negation_name(name) {
        if let Some(last) = store.last(&neg) {
            let set = !truthy(last.value.as_deref());
            tracing::trace!(name, negation = %neg, set, "flag resolved from negation");
            return set;
        }
    }

    default
}
