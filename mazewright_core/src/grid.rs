// Corridor graph over a rectangular cell grid.
//
// The grid is stored as a flat `Vec<Option<usize>>` link table indexed by
// `row * cols + col` — one slot per cell, `links[i] = Some(j)` meaning a
// corridor was carved between cell `i` and cell `j`. There is no per-cell
// struct and no aliased references: a cell is its index.
//
// `GridGraph::carve()` runs an iterative randomized depth-first traversal
// from cell (0,0). When a cell is discovered, its link slot is set to the
// cell that reached it; each non-start cell is discovered exactly once, so
// a full carve yields exactly `rows * cols - 1` links forming a spanning
// tree over the grid. `add_random_loops()` then overwrites randomly chosen
// link slots with random neighbors, deliberately introducing cycles — and
// occasionally re-routing a tree link, which is preserved behavior from the
// original generator rather than a defect to repair.
//
// See also: `mesh.rs` which projects this graph into wall geometry,
// `generator.rs` which owns the RNG stream and sequences the stages.
//
// **Critical constraint: determinism.** All randomness comes from the
// `MazeRng` passed by the caller. Neighbor enumeration order is fixed
// (up, down, left, right) so the shuffle is the only source of variation.

use smallvec::SmallVec;

use crate::prng::MazeRng;

/// Spanning-tree corridor graph over an R×C cell grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridGraph {
    rows: usize,
    cols: usize,
    /// One slot per cell: the corridor link carved at that cell, if any.
    links: Vec<Option<usize>>,
}

impl GridGraph {
    /// Carve a spanning tree over a `rows` × `cols` grid with randomized
    /// depth-first search starting at cell (0,0).
    ///
    /// Maintains an explicit stack and a dense visited table. Popping a cell
    /// enumerates its in-bounds 4-neighbors, shuffles them with the supplied
    /// RNG, and claims every still-unvisited one: the neighbor's link slot
    /// is set to the current cell, the neighbor is marked visited and pushed.
    /// Each non-start cell is claimed exactly once, so the result carries
    /// exactly `rows * cols - 1` links.
    pub fn carve(rows: usize, cols: usize, rng: &mut MazeRng) -> Self {
        let mut graph = Self {
            rows,
            cols,
            links: vec![None; rows * cols],
        };

        let mut visited = vec![false; rows * cols];
        let mut stack = vec![0usize];
        visited[0] = true;

        while let Some(cell) = stack.pop() {
            let mut neighbors = graph.neighbors(cell);
            rng.shuffle(&mut neighbors);
            for neighbor in neighbors {
                if !visited[neighbor] {
                    graph.links[neighbor] = Some(cell);
                    visited[neighbor] = true;
                    stack.push(neighbor);
                }
            }
        }

        graph
    }

    /// Insert `iterations` random extra connections.
    ///
    /// Each iteration picks a uniformly random cell and one of its in-bounds
    /// neighbors uniformly at random (visited state ignored), then overwrites
    /// the cell's link slot with that neighbor. Overwriting can re-route a
    /// spanning-tree link, silently cutting the traceable path through part
    /// of the tree — the walls stay physically connected, only the directed
    /// link is lost. On a 1×1 grid there are no candidates and each draw is
    /// a no-op after the cell pick.
    pub fn add_random_loops(&mut self, iterations: usize, rng: &mut MazeRng) {
        for _ in 0..iterations {
            let cell = rng.range_usize(0, self.links.len());
            let neighbors = self.neighbors(cell);
            if neighbors.is_empty() {
                continue;
            }
            let pick = neighbors[rng.range_usize(0, neighbors.len())];
            self.links[cell] = Some(pick);
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.links.len()
    }

    /// Row-major cell index for a (row, col) position.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// (row, col) position of a cell index.
    pub fn position(&self, cell: usize) -> (usize, usize) {
        (cell / self.cols, cell % self.cols)
    }

    /// The corridor link carved at `cell`, if any.
    pub fn link(&self, cell: usize) -> Option<usize> {
        self.links[cell]
    }

    /// Iterate over all carved links as `(cell, target)` pairs in cell order.
    pub fn links(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.links
            .iter()
            .enumerate()
            .filter_map(|(cell, link)| link.map(|target| (cell, target)))
    }

    /// In-bounds 4-neighbors of a cell, in fixed up/down/left/right order.
    pub fn neighbors(&self, cell: usize) -> SmallVec<[usize; 4]> {
        let (row, col) = self.position(cell);
        let mut out = SmallVec::new();
        if row > 0 {
            out.push(self.index(row - 1, col));
        }
        if row + 1 < self.rows {
            out.push(self.index(row + 1, col));
        }
        if col > 0 {
            out.push(self.index(row, col - 1));
        }
        if col + 1 < self.cols {
            out.push(self.index(row, col + 1));
        }
        out
    }
}
