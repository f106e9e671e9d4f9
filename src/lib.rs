//! jdlib: a librarian for Johnny Decimal directory trees.
//!
//! A library root holds areas (`10-19 Reference`), areas hold categories
//! (`11 Recipes`), categories hold identifiers (`11.01 Pasta`) and
//! identifiers hold plain files. [`Library`] scans the tree once and
//! answers searches, prints it, and allocates new category and identifier
//! slots.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::services::{AddOutcome, Library, TreeOptions};
pub use application::{ApplicationError, ApplicationResult};
pub use domain::{Area, Category, DomainError, Identifier, JdFile};
