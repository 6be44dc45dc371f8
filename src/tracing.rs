//! Tracing utilities for DDL generation.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level event with the table names in print order.
macro_rules! trace_order {
    ($tables:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(tables = ?$tables, "spanner_ddl.order");
    };
}

/// Emit a trace-level event for one generated statement.
///
/// ```ignore
/// trace_statement!("create_table", table.name);
/// ```
macro_rules! trace_statement {
    ($kind:literal, $name:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(kind = $kind, name = %$name, "spanner_ddl.statement");
    };
}

/// Emit a debug-level summary of a finished generation run.
macro_rules! trace_generate {
    ($dialect:expr, $statements:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(dialect = %$dialect, statements = $statements, "spanner_ddl.generate");
    };
}

/// Warn that an array column was downgraded to a string for the PostgreSQL dialect.
macro_rules! warn_array_downgrade {
    ($column:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!(
            column = %$column,
            "spanner_ddl.array_downgrade: PostgreSQL dialect has no arrays, using VARCHAR"
        );
    };
}
