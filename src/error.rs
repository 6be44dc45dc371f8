use thiserror::Error;

/// Faults raised while generating DDL from a schema that breaks its own references
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DdlError {
    /// A column id is used by a table, key or index but has no definition
    #[error("Missing column: table `{table}` has no definition for column id `{column}`")]
    MissingColumn { table: String, column: String },

    /// A foreign key references a table id that is not part of the schema
    #[error("Missing table: no table with id `{0}` in the schema")]
    MissingTable(String),

    /// Foreign key local and referenced column lists differ in length
    #[error(
        "Foreign key error: `{name}` on table `{table}` pairs {columns} columns with {referenced} referenced columns"
    )]
    ForeignKeyArity {
        table: String,
        name: String,
        columns: usize,
        referenced: usize,
    },

    /// Following parent links from a table leads back to it
    #[error("Interleave cycle: table `{0}` is (transitively) interleaved in itself")]
    InterleaveCycle(String),
}

/// Result type for DDL generation
pub type Result<T> = std::result::Result<T, DdlError>;
