// Top-level generation run.
//
// `generate_maze()` sequences the whole pipeline: validate the config, seed
// the RNG once, clear any prior maze object, carve the spanning tree, insert
// random loops, derive and extrude the wall mesh, clean dangling geometry,
// prune islands, then hand the finished mesh to the backend for insertion,
// optional cosmetic finishing, and placement.
//
// All randomness is drawn from a single `MazeRng` created at the start of
// the run; identical `(seed, rows, cols, iterations)` reproduce an identical
// link table, and every later stage is a deterministic function of the
// graph. The run is single-threaded and synchronous — each stage fully
// consumes its predecessor's output, and the in-progress mesh is owned
// exclusively by this function until the handoff.
//
// Failure policy: a rejected config returns before the backend is touched.
// A backend failure aborts the run with the failing stage attached; if it
// happens after the new object was inserted, the object is removed
// best-effort so a failed run leaves no maze object in the scene at all —
// the prior one was already cleared up front (delete-then-recreate, never
// merge).
//
// See also: `grid.rs`, `mesh.rs`, `mesh_clean.rs`, `islands.rs` for the
// stages, `backend.rs` for the scene seam, `config.rs` for the parameter
// surface.

use std::time::Instant;

use crate::backend::GeometryBackend;
use crate::config::MazeConfig;
use crate::error::{MazeError, Stage};
use crate::grid::GridGraph;
use crate::islands::prune_islands;
use crate::mesh::{self, WallMesh};
use crate::mesh_clean::remove_dangling_edges;
use crate::prng::MazeRng;

/// Scene object name for the generated maze. Generation replaces any prior
/// object of this name.
pub const MAZE_OBJECT_NAME: &str = "Maze";

/// Wall thickness forwarded to the backend's solidify pass.
pub const SOLIDIFY_THICKNESS: f32 = 0.15;

/// Edge rounding width forwarded to the backend's bevel pass.
pub const BEVEL_WIDTH: f32 = 0.02;

/// Segment count forwarded to the backend's bevel pass.
pub const BEVEL_SEGMENTS: u32 = 4;

/// Summary of a completed generation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeReport {
    /// Vertex count of the finished base mesh (before cosmetic finishing).
    pub vertices: usize,
    /// Edge count of the finished base mesh.
    pub edges: usize,
    /// Face count of the finished base mesh.
    pub faces: usize,
    /// Dangling extrusion edges removed by the cleanup pass.
    pub dangling_edges_removed: usize,
    /// Islands removed by the pruning pass (0 when pruning is disabled).
    pub pruned_islands: usize,
}

/// Run the full generation pipeline against the given backend.
pub fn generate_maze(
    config: &MazeConfig,
    backend: &mut impl GeometryBackend,
) -> Result<MazeReport, MazeError> {
    config.validate()?;
    let start = Instant::now();

    let mut rng = MazeRng::new(config.seed as u64);

    backend
        .remove_object(MAZE_OBJECT_NAME)
        .map_err(|source| MazeError::Backend {
            stage: Stage::ClearScene,
            source,
        })?;

    let rows = config.rows as usize;
    let cols = config.cols as usize;
    let mut graph = GridGraph::carve(rows, cols, &mut rng);
    graph.add_random_loops(config.iterations as usize, &mut rng);
    log::debug!(
        "carved {rows}x{cols} grid: {} links after {} loop insertions",
        graph.links().count(),
        config.iterations
    );

    let base = mesh::base_mesh(&graph, config.cell_size);
    let mut walls = mesh::extrude_walls(&base, config.wall_height);
    log::debug!(
        "extruded walls: {} vertices, {} edges, {} faces",
        walls.vertex_count(),
        walls.edge_count(),
        walls.face_count()
    );

    let dangling_edges_removed = remove_dangling_edges(&mut walls);
    let pruned_islands = if config.delete_islands {
        prune_islands(&mut walls, config.island_face_threshold as usize)
    } else {
        0
    };
    log::debug!(
        "cleanup: {dangling_edges_removed} dangling edges removed, {pruned_islands} islands pruned"
    );

    let report = MazeReport {
        vertices: walls.vertex_count(),
        edges: walls.edge_count(),
        faces: walls.face_count(),
        dangling_edges_removed,
        pruned_islands,
    };

    if let Err(error) = finish_in_scene(config, backend, walls) {
        // Leave no half-built maze behind: the failed object is removed
        // best-effort and the original failure is reported.
        let _ = backend.remove_object(MAZE_OBJECT_NAME);
        return Err(error);
    }

    log::info!(
        "maze generated in {:.3?}: {} vertices, {} edges, {} faces",
        start.elapsed(),
        report.vertices,
        report.edges,
        report.faces
    );
    Ok(report)
}

/// Insert the finished mesh and apply the requested finishing passes.
fn finish_in_scene(
    config: &MazeConfig,
    backend: &mut impl GeometryBackend,
    walls: WallMesh,
) -> Result<(), MazeError> {
    backend
        .insert_object(MAZE_OBJECT_NAME, walls)
        .map_err(|source| MazeError::Backend {
            stage: Stage::Insert,
            source,
        })?;

    if config.apply_solidify {
        backend
            .solidify(MAZE_OBJECT_NAME, SOLIDIFY_THICKNESS)
            .map_err(|source| MazeError::Backend {
                stage: Stage::Solidify,
                source,
            })?;
    }

    if config.apply_bevel {
        backend
            .bevel(MAZE_OBJECT_NAME, BEVEL_WIDTH, BEVEL_SEGMENTS)
            .map_err(|source| MazeError::Backend {
                stage: Stage::Bevel,
                source,
            })?;
    }

    backend
        .center_origin(MAZE_OBJECT_NAME, config.wall_height / 2.0)
        .map_err(|source| MazeError::Backend {
            stage: Stage::Placement,
            source,
        })
}
