//! Domain layer: entities and business logic
//!
//! Parsing, ordering and slot allocation. Filesystem access goes through the
//! `FileSystem` boundary trait only.

pub mod builder;
pub mod entities;
pub mod error;
pub mod name;
pub mod slot;
pub mod validate;

pub use builder::{TreeBuilder, TreeResult};
pub use entities::*;
pub use error::DomainError;
pub use name::{parse_name, ParsedName};
pub use validate::{NamingValidator, Violation};
