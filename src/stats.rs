use crate::models::CoordinateTable;
use crate::pipeline::PipelineOutput;
use serde::Serialize;

/// How much of a table made it onto the map.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Coverage {
    pub rows: usize,
    pub mapped: usize,
    /// Names without a coordinate, in table order.
    pub unmapped: Vec<String>,
    pub total_publications: u64,
    pub max_count: Option<u64>,
}

/// Summarize a pipeline run against the coordinate table it was built with.
pub fn coverage(out: &PipelineOutput, coordinates: &CoordinateTable) -> Coverage {
    let unmapped = out
        .table
        .iter()
        .filter(|r| !coordinates.contains(&r.name))
        .map(|r| r.name.clone())
        .collect();
    Coverage {
        rows: out.table.len(),
        mapped: out.markers.len(),
        unmapped,
        total_publications: out.table.iter().map(|r| r.count).sum(),
        max_count: out.table.iter().map(|r| r.count).max(),
    }
}
