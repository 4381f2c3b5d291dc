//! Command-line flag parsing with `-noX` negation and typed lookups.
//!
//! ```
//! use argmap::Flags;
//!
//! let flags = Flags::parse(["prog", "--level=3", "-noBOLD"]).unwrap();
//! assert_eq!(flags.get_int("-level", 0), 3);
//! assert!(!flags.get_bool("-BOLD", true));
//! ```

pub mod core;
pub mod global;

pub use crate::core::flags::{FlagError, Flags};
