// Island detection and pruning.
//
// An island is a maximal connected component of the mesh graph under the
// "share an edge" relation. Loop insertion can re-route a corridor link and
// leave a handful of walls connected to nothing else; those fragments read
// as floating debris in the finished maze, so components whose face count
// is at or below a configured threshold are deleted outright.
//
// `connected_components()` assigns a component id to every vertex with an
// iterative stack-based flood fill over edge adjacency, scanning vertices
// in ascending order so the ids are deterministic. `prune_islands()` then
// counts, for each component, the faces whose vertices all belong to it,
// marks components at or below the threshold, and removes the marked
// components' faces together with their edges and vertices, compacting the
// surviving indices. A component with no faces at all (an isolated vertex
// or edge fragment) counts zero and is removed at any threshold, including
// zero.
//
// Components are transient: they are recomputed on each call and never
// persisted.
//
// See also: `mesh.rs` for the mesh being classified, `mesh_clean.rs` for
// the dangling-edge pass that runs before this one, `generator.rs` for the
// stage ordering.

use crate::mesh::WallMesh;

/// Component assignment for every vertex of a mesh.
#[derive(Clone, Debug)]
pub struct ComponentMap {
    /// Component id per vertex index.
    pub component_of: Vec<u32>,
    /// Number of distinct components.
    pub count: usize,
}

/// Label the connected components of the mesh graph.
///
/// Flood-fills over edge adjacency with an explicit stack, visiting vertices
/// in ascending index order. Isolated vertices form their own components.
pub fn connected_components(mesh: &WallMesh) -> ComponentMap {
    let n = mesh.positions.len();
    let mut adjacency = vec![Vec::new(); n];
    for &[a, b] in &mesh.edges {
        adjacency[a as usize].push(b as usize);
        adjacency[b as usize].push(a as usize);
    }

    const UNASSIGNED: u32 = u32::MAX;
    let mut component_of = vec![UNASSIGNED; n];
    let mut count = 0usize;
    let mut stack = Vec::new();

    for start in 0..n {
        if component_of[start] != UNASSIGNED {
            continue;
        }
        let id = count as u32;
        count += 1;
        component_of[start] = id;
        stack.push(start);
        while let Some(vertex) = stack.pop() {
            for &next in &adjacency[vertex] {
                if component_of[next] == UNASSIGNED {
                    component_of[next] = id;
                    stack.push(next);
                }
            }
        }
    }

    ComponentMap {
        component_of,
        count,
    }
}

/// Delete every island whose face count is at or below `max_face_count`.
///
/// A face belongs to a component when every one of its vertices does. Marked
/// components lose their faces and, with them, their edges and vertices;
/// surviving indices are compacted. Faceless components are always at or
/// below any non-negative threshold and are therefore always removed.
///
/// Returns the number of components removed.
pub fn prune_islands(mesh: &mut WallMesh, max_face_count: usize) -> usize {
    let components = connected_components(mesh);
    if components.count == 0 {
        return 0;
    }

    let mut face_counts = vec![0usize; components.count];
    for face in &mesh.faces {
        let id = components.component_of[face[0] as usize];
        if face
            .iter()
            .all(|&v| components.component_of[v as usize] == id)
        {
            face_counts[id as usize] += 1;
        }
    }

    let doomed: Vec<bool> = face_counts
        .iter()
        .map(|&count| count <= max_face_count)
        .collect();
    let removed = doomed.iter().filter(|&&d| d).count();
    if removed == 0 {
        return 0;
    }

    // Compact surviving vertices and remap edge/face indices.
    const DROPPED: u32 = u32::MAX;
    let mut remap = vec![DROPPED; mesh.positions.len()];
    let mut positions = Vec::new();
    for (vertex, &id) in components.component_of.iter().enumerate() {
        if !doomed[id as usize] {
            remap[vertex] = positions.len() as u32;
            positions.push(mesh.positions[vertex]);
        }
    }

    let edges = mesh
        .edges
        .iter()
        .filter(|&&[a, _]| remap[a as usize] != DROPPED)
        .map(|&[a, b]| [remap[a as usize], remap[b as usize]])
        .collect();

    let faces = mesh
        .faces
        .iter()
        .filter(|face| face.iter().all(|&v| remap[v as usize] != DROPPED))
        .map(|face| face.map(|v| remap[v as usize]))
        .collect();

    mesh.positions = positions;
    mesh.edges = edges;
    mesh.faces = faces;
    removed
}
