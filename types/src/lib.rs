//! Shared type definitions for spanner-ddl
//!
//! This crate holds the data half of the DDL printer:
//!
//! - [`Dialect`] - the two Spanner SQL dialects
//! - [`SourceKind`] - databases a schema can be converted from
//! - [`Type`] and [`TypeName`] - the column type vocabulary and its PostgreSQL spelling
//! - [`keywords`] - reserved words of the PostgreSQL dialect
//! - the schema model in [`ddl`]
//!
//! # Features
//!
//! - `serde` - Enable serde serialization/deserialization of the schema model

mod dialect;
pub mod ddl;
pub mod keywords;
mod source;
mod sql_type;

pub use ddl::*;
pub use dialect::{Dialect, DialectParseError};
pub use source::{SourceKind, SourceParseError};
pub use sql_type::{
    BYTES_MAX_LENGTH, Length, MAX_NON_KEY_COLUMN_LENGTH, PG_MAX_LENGTH, PG_TYPE_MAP,
    STRING_MAX_LENGTH, Type, TypeName,
};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::ddl::{
        AutoGenCol, CheckConstraint, ColumnDef, CreateIndex, CreateTable, ForeignKey, IndexKey,
        InterleaveType, InterleavedParent, Schema, Sequence,
    };
    pub use crate::{Dialect, Length, SourceKind, Type, TypeName};
}
