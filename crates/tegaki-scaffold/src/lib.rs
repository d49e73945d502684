//! `tegaki-scaffold` - project layout validation and scaffolding.
//!
//! Two clerical operations over a fixed project layout contract:
//! validating that every expected file and directory exists, and creating
//! the layout with placeholder contents.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod layout;
pub mod setup;
pub mod validate;

pub use layout::{Entry, EntryKind};
pub use setup::{setup, SetupReport};
pub use validate::{validate, Missing, Report};
