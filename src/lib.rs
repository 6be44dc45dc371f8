//! # spanner-ddl
//!
//! Schema model and dialect-aware DDL printer for Cloud Spanner.
//!
//! A [`Schema`] describes tables, columns, keys, indexes, foreign keys and
//! interleaving; [`DdlGenerator`] turns it into an ordered list of statements for
//! either Spanner dialect. Parents are always created before the tables
//! interleaved in them, and foreign keys are added once every table exists.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use spanner_ddl::prelude::*;
//!
//! # fn main() -> spanner_ddl::Result<()> {
//! let singers = CreateTable::new("t1", "Singers")
//!     .column(ColumnDef::new("c1", "SingerId", TypeName::Int64).not_null())
//!     .column(ColumnDef::new("c2", "Name", Type::string(Length::Max)))
//!     .primary_key(IndexKey::new("c1", 1));
//! let schema: Schema = [singers].into_iter().collect();
//!
//! let gsql = DdlGenerator::new(Config::new(Dialect::GoogleStandardSql));
//! assert_eq!(
//!     gsql.generate(&schema, &HashMap::new())?,
//!     ["CREATE TABLE `Singers` (\n\t`SingerId` INT64 NOT NULL,\n\t`Name` STRING(MAX),\n) PRIMARY KEY (`SingerId`)"]
//! );
//!
//! let pg = DdlGenerator::new(Config::new(Dialect::PostgreSql));
//! assert_eq!(
//!     pg.generate(&schema, &HashMap::new())?,
//!     ["CREATE TABLE Singers (\n\tSingerId INT8 NOT NULL,\n\tName VARCHAR(2621440),\n\tPRIMARY KEY (SingerId)\n)"]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! | Feature   | Default | Description                                        |
//! |-----------|---------|----------------------------------------------------|
//! | `serde`   | yes     | Serde for the schema model, TOML [`Config`] files  |
//! | `tracing` | yes     | `tracing` events while ordering and printing       |

// Must come first so the macros are visible to the modules below
#[macro_use]
mod tracing;

mod config;
mod error;
mod generator;
mod order;
mod quote;

pub use config::{Config, ConfigError};
pub use error::{DdlError, Result};
pub use generator::DdlGenerator;
pub use order::sorted_table_ids;

pub use spanner_ddl_types::*;

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{Config, DdlError, DdlGenerator};
    pub use spanner_ddl_types::prelude::*;
}
