// Wall mesh derivation from the corridor graph.
//
// Two stages. `base_mesh()` projects every grid cell to a vertex on the
// z=0 plane and emits one edge per carved link, giving a flat wireframe of
// the maze walls. `extrude_walls()` lifts that wireframe into a 3D wall
// volume: the base layer is duplicated at `z + wall_height`, every base
// edge gains a top counterpart, every vertex gains a vertical edge to its
// top twin, and every base edge contributes one side quad. The counts are
// fully determined by the input: vertices double, edges triple, and there
// is exactly one face per base edge.
//
// Vertex ordering is load-bearing: base vertices are emitted in row-major
// cell order (`row * cols + col`) and edges reference vertices by that
// computed index, never through a lookup table. Top-layer indices are the
// base index offset by the base vertex count.
//
// Edges are unordered index pairs stored low-index-first; the loop phase
// can carve the same corridor from both ends, so `base_mesh()` deduplicates
// pairs while preserving first-emission order.
//
// See also: `grid.rs` for the link table being projected, `mesh_clean.rs`
// and `islands.rs` for the post-extrusion passes, `backend.rs` for the
// scene handoff.

use rustc_hash::FxHashSet;

use crate::grid::GridGraph;

/// Indexed wall mesh: positions, unordered edge pairs, and side quads.
///
/// Faces exist only after extrusion; they are used solely for island-size
/// accounting, not for any other geometric operation in this core.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WallMesh {
    /// Vertex positions as `[x, y, z]`.
    pub positions: Vec<[f32; 3]>,
    /// Unordered vertex index pairs, stored low-index-first. No duplicate
    /// edge exists between the same vertex pair.
    pub edges: Vec<[u32; 2]>,
    /// Side quads `{base_i, base_j, top_j, top_i}` produced by extrusion.
    pub faces: Vec<[u32; 4]>,
}

impl WallMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// Project the corridor graph onto the z=0 plane.
///
/// One vertex per cell at `(col * cell_size, row * cell_size, 0)` in
/// row-major cell order, one edge per carved link. Duplicate unordered
/// pairs (a corridor carved from both ends by the loop phase) are emitted
/// once. The result has no faces.
pub fn base_mesh(graph: &GridGraph, cell_size: f32) -> WallMesh {
    let mut positions = Vec::with_capacity(graph.cell_count());
    for cell in 0..graph.cell_count() {
        let (row, col) = graph.position(cell);
        positions.push([col as f32 * cell_size, row as f32 * cell_size, 0.0]);
    }

    let mut edges = Vec::new();
    let mut seen = FxHashSet::default();
    for (cell, target) in graph.links() {
        let pair = if cell < target {
            [cell as u32, target as u32]
        } else {
            [target as u32, cell as u32]
        };
        if seen.insert(pair) {
            edges.push(pair);
        }
    }

    WallMesh {
        positions,
        edges,
        faces: Vec::new(),
    }
}

/// Extrude a base-layer wireframe into a 3D wall volume.
///
/// Duplicates every base vertex at `z + wall_height` (top indices offset by
/// the base vertex count), duplicates every base edge into a top edge, adds
/// one vertical edge per vertex pair, and one side quad per base edge.
///
/// For a base mesh with V vertices and E edges the result has exactly
/// 2V vertices, 3E edges, and E faces.
pub fn extrude_walls(base: &WallMesh, wall_height: f32) -> WallMesh {
    debug_assert!(base.faces.is_empty(), "extrusion input is a wireframe");
    let offset = base.positions.len() as u32;

    let mut positions = Vec::with_capacity(base.positions.len() * 2);
    positions.extend_from_slice(&base.positions);
    for &[x, y, z] in &base.positions {
        positions.push([x, y, z + wall_height]);
    }

    let mut edges = Vec::with_capacity(base.edges.len() * 3);
    edges.extend_from_slice(&base.edges);
    for &[i, j] in &base.edges {
        edges.push([i + offset, j + offset]);
    }
    for i in 0..offset {
        edges.push([i, i + offset]);
    }

    let faces = base
        .edges
        .iter()
        .map(|&[i, j]| [i, j, j + offset, i + offset])
        .collect();

    WallMesh {
        positions,
        edges,
        faces,
    }
}
