// Dangling-edge cleanup after extrusion.
//
// A cell that ends a run with no wall connections still receives a vertical
// edge during extrusion: its base vertex and top vertex, joined by nothing
// else. Such an edge is dangling — both endpoints have exactly one incident
// edge in the whole mesh — and contributes no wall panel. This pass deletes
// every dangling edge in one sweep.
//
// The endpoints left behind become isolated vertices; removing them is part
// of the island pass (an isolated vertex is a faceless component) or the
// backend's cleanup, not this one.
//
// Removing an isolated edge cannot change the degree of any other vertex,
// so one sweep finds everything and the pass is idempotent.
//
// See also: `mesh.rs` for the extrusion that produces these artifacts,
// `islands.rs` for the component pass that sweeps up isolated vertices.

use crate::mesh::WallMesh;

/// Delete every edge whose two endpoints each have exactly one incident
/// edge in the whole mesh. Returns the number of edges removed.
pub fn remove_dangling_edges(mesh: &mut WallMesh) -> usize {
    let mut degree = vec![0u32; mesh.positions.len()];
    for &[a, b] in &mesh.edges {
        degree[a as usize] += 1;
        degree[b as usize] += 1;
    }

    let before = mesh.edges.len();
    mesh.edges
        .retain(|&[a, b]| degree[a as usize] != 1 || degree[b as usize] != 1);
    before - mesh.edges.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A connected square plus one isolated edge off to the side.
    fn square_with_stray_edge() -> WallMesh {
        WallMesh {
            positions: vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
                [5.0, 5.0, 0.0],
                [5.0, 5.0, 1.0],
            ],
            edges: vec![[0, 1], [1, 2], [2, 3], [0, 3], [4, 5]],
            faces: Vec::new(),
        }
    }

    #[test]
    fn removes_isolated_edge_only() {
        let mut mesh = square_with_stray_edge();
        let removed = remove_dangling_edges(&mut mesh);

        assert_eq!(removed, 1);
        assert_eq!(mesh.edges, vec![[0, 1], [1, 2], [2, 3], [0, 3]]);
        // Endpoint vertices stay behind as isolated vertices.
        assert_eq!(mesh.vertex_count(), 6);
    }

    #[test]
    fn keeps_edges_touching_other_geometry() {
        // A path 0-1-2: the end vertices have degree 1 but each edge's other
        // endpoint has degree 2, so nothing is dangling.
        let mut mesh = WallMesh {
            positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]],
            edges: vec![[0, 1], [1, 2]],
            faces: Vec::new(),
        };
        assert_eq!(remove_dangling_edges(&mut mesh), 0);
        assert_eq!(mesh.edge_count(), 2);
    }

    #[test]
    fn removal_is_idempotent() {
        let mut mesh = square_with_stray_edge();
        remove_dangling_edges(&mut mesh);
        let after_first = mesh.clone();

        let removed_again = remove_dangling_edges(&mut mesh);
        assert_eq!(removed_again, 0);
        assert_eq!(mesh, after_first);
    }

    #[test]
    fn empty_mesh_is_a_noop() {
        let mut mesh = WallMesh::default();
        assert_eq!(remove_dangling_edges(&mut mesh), 0);
    }
}
