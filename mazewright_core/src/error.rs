// Error taxonomy for a generation run.
//
// Two kinds of failure exist. A `ConfigError` means an out-of-range
// parameter and is raised before any mesh or scene mutation begins. A
// backend failure means the external geometry backend refused an edit; it
// is not recoverable here, so the run aborts with the failing pipeline
// stage attached as context. No stage swallows an error: the underlying
// cause travels up unmodified inside `MazeError::Backend`.
//
// The pure stages (carving, mesh derivation, cleanup, pruning) are total
// over validated inputs and have no error type of their own.
//
// See also: `config.rs` for the validation that produces `ConfigError`,
// `backend.rs` for `BackendError`, `generator.rs` for where stages are
// attached.

use std::fmt;

use thiserror::Error;

use crate::backend::BackendError;

/// Pipeline stage names, attached to backend failures as context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Removing any prior maze object before generation starts.
    ClearScene,
    /// Inserting the finished mesh into the scene.
    Insert,
    /// The solidify finishing pass.
    Solidify,
    /// The bevel finishing pass.
    Bevel,
    /// Origin recentering and vertical placement.
    Placement,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ClearScene => "clear-scene",
            Stage::Insert => "insert",
            Stage::Solidify => "solidify",
            Stage::Bevel => "bevel",
            Stage::Placement => "placement",
        };
        f.write_str(name)
    }
}

/// An out-of-range generation parameter, rejected before any mutation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("`{field}` must be at least 1 (got {value})")]
    TooSmall { field: &'static str, value: u32 },
    #[error("`{field}` must be positive and finite (got {value})")]
    NotPositive { field: &'static str, value: f32 },
}

impl ConfigError {
    pub(crate) fn too_small(field: &'static str, value: u32) -> Self {
        Self::TooSmall { field, value }
    }

    pub(crate) fn not_positive(field: &'static str, value: f32) -> Self {
        Self::NotPositive { field, value }
    }
}

/// Failure of a generation run.
#[derive(Debug, Error)]
pub enum MazeError {
    /// The configuration was rejected before generation began.
    #[error("configuration rejected: {0}")]
    Config(#[from] ConfigError),
    /// The geometry backend failed during the named stage.
    #[error("{stage} stage failed: {source}")]
    Backend {
        stage: Stage,
        #[source]
        source: BackendError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_names_render_in_messages() {
        let error = MazeError::Backend {
            stage: Stage::Solidify,
            source: BackendError::operation("solidify", "modifier refused"),
        };
        let message = error.to_string();
        assert!(message.contains("solidify stage failed"), "{message}");
    }

    #[test]
    fn config_error_names_the_field() {
        let error = ConfigError::too_small("rows", 0);
        assert!(error.to_string().contains("rows"));
    }

    #[test]
    fn backend_cause_is_preserved() {
        use std::error::Error as _;
        let error = MazeError::Backend {
            stage: Stage::Bevel,
            source: BackendError::operation("bevel", "no such object"),
        };
        let cause = error.source().expect("backend cause must be attached");
        assert!(cause.to_string().contains("no such object"));
    }
}
