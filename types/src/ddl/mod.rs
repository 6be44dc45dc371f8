//! Spanner DDL entity types
//!
//! Plain owned values describing a database schema. They are built once by a
//! schema converter and only read while DDL is generated; cross-table links
//! (interleaving, foreign keys, index ownership) are table ids resolved through
//! [`Schema`] at print time, never references.
//!
//! ```text
//! Schema ──┬── CreateTable ──┬── col_ids: [id, ...]        (print order)
//!          │                 ├── col_defs: id -> ColumnDef (lookup)
//!          │                 ├── primary_keys: [IndexKey]
//!          │                 ├── indexes: [CreateIndex]
//!          │                 ├── foreign_keys: [ForeignKey] ── refer_table_id ──┐
//!          │                 ├── check_constraints            │
//!          │                 └── parent_table ── id ──────────┤
//!          └── CreateTable <──────────────────────────────────┘
//! ```

mod check_constraint;
mod column;
mod foreign_key;
mod index;
mod interleave;
mod schema;
mod sequence;
mod table;

pub use check_constraint::CheckConstraint;
pub use column::{
    AutoGenCol, CASSANDRA_TYPE_OPTION, ColumnDef, DefaultValue, Expression, GenerationType,
};
pub use foreign_key::ForeignKey;
pub use index::{CreateIndex, IndexKey};
pub use interleave::{InterleaveType, InterleavedParent};
pub use schema::Schema;
pub use sequence::{Sequence, SequenceKind};
pub use table::CreateTable;
