//! Command-line arguments as typed, defaulted lookups.
//!
//! Arguments are read once into an [`ArgStore`] and queried by canonical
//! single-hyphen name:
//! - `store.get_bool("-name", default)` for flags, with `-noname` negation
//! - `store.get_string("-name", default)` / `store.get_int("-name", default)`
//! - `store.has("-name")` for presence
//!
//! `-name` and `--name` are the same option. A value follows the first `=`.
//! Repeated options resolve to their last occurrence. Lookups never fail:
//! absence yields the caller's default and unparsable numbers yield 0.
//!
//! ```
//! let args = getarg::parse_parameters(["prog", "--port=8333", "-nolisten"]);
//! assert_eq!(args.get_int("-port", 0), 8333);
//! assert!(!args.get_bool("-listen", true));
//! assert_eq!(args.get_string("-datadir", "~/.data"), "~/.data");
//! ```

pub mod config;
pub mod error;
pub mod flags;
pub mod number;
pub mod store;
pub mod token;

pub use error::{Error, Result};
pub use store::ArgStore;
pub use token::OptionEntry;

/// Parse a full argv (program name first) into a fresh store.
pub fn parse_parameters<I, S>(argv: I) -> ArgStore
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ArgStore::from_argv(argv)
}
