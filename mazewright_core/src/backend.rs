// The geometry backend seam.
//
// This core has no wire protocol or file format; its boundary is a set of
// calls against the host 3D application's geometry tools. `GeometryBackend`
// expresses that boundary as explicit, mode-free method calls on a trait —
// there is no hidden "current mode" to switch, so operation order is
// enforced by the orchestrator's call sequence and nothing else.
//
// The core decides *whether* to invoke the cosmetic finishing passes
// (solidify, bevel); how they are implemented is entirely the backend's
// business. Scene insertion uses replace semantics: inserting under an
// existing name swaps the object out, never merges.
//
// `MemoryScene` is the in-repo reference backend: named objects in a
// `BTreeMap`, modifier applications recorded by name, and a real
// origin-recentering implementation. Tests and headless callers use it; a
// host bridge (Blender, Godot, ...) would implement the same trait in its
// own crate.
//
// See also: `generator.rs` for the call sequence and failure containment,
// `error.rs` for how `BackendError` gains stage context.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::mesh::WallMesh;

/// A refused or failed backend edit. Not recoverable by the core.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("backend operation `{op}` failed: {detail}")]
pub struct BackendError {
    /// The operation that failed, e.g. `"solidify"`.
    pub op: &'static str,
    /// Backend-specific failure detail.
    pub detail: String,
}

impl BackendError {
    pub fn operation(op: &'static str, detail: impl Into<String>) -> Self {
        Self {
            op,
            detail: detail.into(),
        }
    }
}

/// External geometry-processing backend.
///
/// Every method is synchronous and side-effecting; a returned error means
/// the edit did not happen and the current run must abort.
pub trait GeometryBackend {
    /// Remove the named object if it exists. Removing a missing object is
    /// not an error.
    fn remove_object(&mut self, name: &str) -> Result<(), BackendError>;

    /// Insert a mesh as a named scene object, replacing any object already
    /// under that name.
    fn insert_object(&mut self, name: &str, mesh: WallMesh) -> Result<(), BackendError>;

    /// Uniformly thicken the named object's walls.
    fn solidify(&mut self, name: &str, thickness: f32) -> Result<(), BackendError>;

    /// Round the named object's edges.
    fn bevel(&mut self, name: &str, width: f32, segments: u32) -> Result<(), BackendError>;

    /// Recenter the object's origin to its geometric median, then offset it
    /// vertically by `z_offset` with the transform baked into the vertices.
    fn center_origin(&mut self, name: &str, z_offset: f32) -> Result<(), BackendError>;
}

/// A named object held by `MemoryScene`.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub mesh: WallMesh,
    /// Names of the modifiers applied so far, in application order.
    pub modifiers: Vec<&'static str>,
}

/// In-memory reference backend.
///
/// `BTreeMap` keeps object iteration deterministic. Solidify and bevel are
/// recorded rather than computed — their geometry is cosmetic and outside
/// this core's contract — while `center_origin` really translates vertices
/// so placement behavior is testable.
#[derive(Clone, Debug, Default)]
pub struct MemoryScene {
    objects: BTreeMap<String, SceneObject>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    fn object_mut(&mut self, name: &str, op: &'static str) -> Result<&mut SceneObject, BackendError> {
        self.objects
            .get_mut(name)
            .ok_or_else(|| BackendError::operation(op, format!("no object named `{name}`")))
    }
}

impl GeometryBackend for MemoryScene {
    fn remove_object(&mut self, name: &str) -> Result<(), BackendError> {
        self.objects.remove(name);
        Ok(())
    }

    fn insert_object(&mut self, name: &str, mesh: WallMesh) -> Result<(), BackendError> {
        self.objects.insert(
            name.to_owned(),
            SceneObject {
                mesh,
                modifiers: Vec::new(),
            },
        );
        Ok(())
    }

    fn solidify(&mut self, name: &str, _thickness: f32) -> Result<(), BackendError> {
        let object = self.object_mut(name, "solidify")?;
        object.modifiers.push("solidify");
        Ok(())
    }

    fn bevel(&mut self, name: &str, _width: f32, _segments: u32) -> Result<(), BackendError> {
        let object = self.object_mut(name, "bevel")?;
        object.modifiers.push("bevel");
        Ok(())
    }

    fn center_origin(&mut self, name: &str, z_offset: f32) -> Result<(), BackendError> {
        let object = self.object_mut(name, "center-origin")?;
        let positions = &mut object.mesh.positions;
        if positions.is_empty() {
            return Ok(());
        }

        let mut mean = [0.0f64; 3];
        for position in positions.iter() {
            for axis in 0..3 {
                mean[axis] += position[axis] as f64;
            }
        }
        let n = positions.len() as f64;
        for value in &mut mean {
            *value /= n;
        }

        for position in positions.iter_mut() {
            for axis in 0..3 {
                position[axis] -= mean[axis] as f32;
            }
            position[2] += z_offset;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_bar_mesh() -> WallMesh {
        WallMesh {
            positions: vec![[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 1.0], [2.0, 0.0, 1.0]],
            edges: vec![[0, 1], [2, 3], [0, 2], [1, 3]],
            faces: vec![[0, 1, 3, 2]],
        }
    }

    #[test]
    fn insert_replaces_existing_object() {
        let mut scene = MemoryScene::new();
        scene.insert_object("Maze", unit_bar_mesh()).unwrap();
        scene.solidify("Maze", 0.15).unwrap();

        // Re-inserting swaps the object out entirely: fresh mesh, no
        // leftover modifier history.
        scene.insert_object("Maze", WallMesh::default()).unwrap();
        let object = scene.object("Maze").unwrap();
        assert_eq!(object.mesh, WallMesh::default());
        assert!(object.modifiers.is_empty());
        assert_eq!(scene.object_count(), 1);
    }

    #[test]
    fn remove_missing_object_is_not_an_error() {
        let mut scene = MemoryScene::new();
        assert!(scene.remove_object("Maze").is_ok());
    }

    #[test]
    fn modifiers_are_recorded_in_order() {
        let mut scene = MemoryScene::new();
        scene.insert_object("Maze", unit_bar_mesh()).unwrap();
        scene.solidify("Maze", 0.15).unwrap();
        scene.bevel("Maze", 0.02, 4).unwrap();

        let object = scene.object("Maze").unwrap();
        assert_eq!(object.modifiers, vec!["solidify", "bevel"]);
    }

    #[test]
    fn modifiers_on_missing_object_fail() {
        let mut scene = MemoryScene::new();
        let error = scene.solidify("Maze", 0.15).unwrap_err();
        assert_eq!(error.op, "solidify");
        assert!(scene.bevel("Maze", 0.02, 4).is_err());
        assert!(scene.center_origin("Maze", 1.2).is_err());
    }

    #[test]
    fn center_origin_recenters_and_lifts() {
        let mut scene = MemoryScene::new();
        scene.insert_object("Maze", unit_bar_mesh()).unwrap();
        scene.center_origin("Maze", 0.5).unwrap();

        let positions = &scene.object("Maze").unwrap().mesh.positions;
        // Mean of the bar was (1.0, 0.0, 0.5): x recentered, z recentered
        // then lifted by 0.5.
        assert_eq!(positions[0], [-1.0, 0.0, 0.0]);
        assert_eq!(positions[1], [1.0, 0.0, 0.0]);
        assert_eq!(positions[2], [-1.0, 0.0, 1.0]);
        assert_eq!(positions[3], [1.0, 0.0, 1.0]);
    }

    #[test]
    fn center_origin_on_empty_mesh_is_a_noop() {
        let mut scene = MemoryScene::new();
        scene.insert_object("Maze", WallMesh::default()).unwrap();
        assert!(scene.center_origin("Maze", 1.0).is_ok());
    }
}
