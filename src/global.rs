//! Process-wide flag store.
//!
//! `parse_parameters` is meant to run once at start-up; every later call
//! replaces the store wholesale. The accessors read whatever was parsed last
//! and fall back to their defaults before the first parse.

use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use lazy_static::lazy_static;
use tracing::debug;

use crate::core::flags::{FlagError, Flags};

lazy_static! {
    static ref ARGS: RwLock<Flags> = RwLock::new(Flags::default());
}

fn read() -> RwLockReadGuard<'static, Flags> {
    ARGS.read().unwrap_or_else(PoisonError::into_inner)
}

/// Parses `args` and replaces the process-wide store.
///
/// On error the previous store is kept.
pub fn parse_parameters<I, S>(args: I) -> Result<(), FlagError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let flags = Flags::parse(args)?;
    debug!(count = flags.len(), "replacing process-wide flags");
    *ARGS.write().unwrap_or_else(PoisonError::into_inner) = flags;
    Ok(())
}

pub fn get_bool_arg(name: &str, default: bool) -> bool {
    read().get_bool(name, default)
}

pub fn get_arg(name: &str, default: &str) -> String {
    read().get_str(name, default)
}

pub fn get_int_arg(name: &str, default: i64) -> i64 {
    read().get_int(name, default)
}

pub fn get_args(name: &str) -> Vec<String> {
    read().get_all(name).to_vec()
}

/// Copy of the current store
pub fn snapshot() -> Flags {
    read().clone()
}
