// mazewright_core — pure Rust maze wall-mesh generator.
//
// This crate turns a rectangular grid into a 3D maze surface: a randomized
// spanning-tree corridor graph over grid cells, rendered as an extruded
// wall mesh with small disconnected fragments pruned away. It has zero
// host-engine dependencies and can be tested, benchmarked, and run
// headless; a host bridge implements the `GeometryBackend` trait to put
// the result in a real scene.
//
// Module overview:
// - `generator.rs`:  Top-level pipeline — one run from config to scene handoff.
// - `grid.rs`:       Corridor graph: randomized-DFS spanning tree + random loop insertion.
// - `mesh.rs`:       `WallMesh` buffers, plane projection, wall extrusion.
// - `mesh_clean.rs`: Dangling-edge cleanup after extrusion.
// - `islands.rs`:    Connected-component labeling + small-island pruning.
// - `config.rs`:     `MazeConfig` — all tunable parameters, validated up front.
// - `backend.rs`:    `GeometryBackend` trait + in-memory reference scene.
// - `error.rs`:      `ConfigError` / `MazeError`, stage context for failures.
// - `prng`:          Re-exported from `mazewright_prng` — xoshiro256++ PRNG
//                    with SplitMix64 seeding.
//
// **Critical constraint: determinism.** A generation run is a pure function
// of its config: the same seed and grid parameters must reproduce an
// identical mesh, run after run and platform after platform. All randomness
// comes from one seeded xoshiro256++ PRNG. No `HashMap` iteration feeds any
// output ordering; hash sets are used for membership tests only.

pub mod backend;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod islands;
pub mod mesh;
pub mod mesh_clean;
pub use mazewright_prng as prng;
