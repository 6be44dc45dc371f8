//! Table print order
//!
//! Tables are printed in alphabetical order of their names with one exception:
//! an interleaved table must come after its parent, so children whose parent has
//! not been printed yet are pushed to the back of the queue and retried.

use std::collections::{HashSet, VecDeque};

use spanner_ddl_types::{CreateTable, Schema};

use crate::error::{DdlError, Result};

/// Ids of the schema's tables in print order
///
/// A table whose parent id is not in the schema is treated as a root. Parent
/// links that loop back on themselves are rejected up front with
/// [`DdlError::InterleaveCycle`], since the retry queue would never drain.
pub fn sorted_table_ids(schema: &Schema) -> Result<Vec<&str>> {
    Ok(sorted_tables(schema)?
        .into_iter()
        .map(|(id, _)| id)
        .collect())
}

/// Tables in print order, paired with the id they are keyed by
pub(crate) fn sorted_tables(schema: &Schema) -> Result<Vec<(&str, &CreateTable)>> {
    let mut tables: Vec<(&str, &CreateTable)> =
        schema.iter().map(|(id, t)| (id.as_str(), t)).collect();
    tables.sort_by(|(a_id, a), (b_id, b)| a.name.cmp(&b.name).then_with(|| a_id.cmp(b_id)));

    check_interleave_cycles(schema, &tables)?;

    trace_order!(
        tables
            .iter()
            .map(|(_, t)| t.name.as_str())
            .collect::<Vec<_>>()
    );

    let mut queue: VecDeque<(&str, &CreateTable)> = tables.into_iter().collect();
    let mut added: HashSet<&str> = HashSet::with_capacity(queue.len());
    let mut sorted = Vec::with_capacity(queue.len());

    while let Some((id, table)) = queue.pop_front() {
        match table.parent_id() {
            // Parent exists but hasn't been printed yet: try again later.
            // Chains of interleaved tables are short, so the worst case
            // O(n^2) is not a concern.
            Some(parent) if schema.contains(parent) && !added.contains(parent) => {
                queue.push_back((id, table));
            }
            _ => {
                added.insert(id);
                sorted.push((id, table));
            }
        }
    }

    Ok(sorted)
}

fn check_interleave_cycles(schema: &Schema, tables: &[(&str, &CreateTable)]) -> Result<()> {
    for (id, table) in tables {
        let mut seen = HashSet::from([*id]);
        let mut current = *table;
        while let Some(parent_id) = current.parent_id() {
            let Some(parent) = schema.get(parent_id) else {
                break;
            };
            if !seen.insert(parent_id) {
                return Err(DdlError::InterleaveCycle(table.name.clone()));
            }
            current = parent;
        }
    }
    Ok(())
}
