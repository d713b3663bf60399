//! The scene loop.
//!
//! Walks `scene-01.png` through `scene-10.png` in the scene directory, in
//! order, and pads each one in place to the configured target size.
//!
//! ## Per-scene behavior
//!
//! - **Missing file**: reported as [`SceneEvent::NotFound`], loop continues.
//! - **Present file**: original size recorded, image padded and rewritten,
//!   reported as [`SceneEvent::Resized`].
//! - **Decode / encode / write failure**: the loop stops and the error is
//!   returned. Scenes before it have already been rewritten; scenes after it
//!   are untouched.
//!
//! Events are handed to the caller as they happen so progress output is not
//! lost when a later scene fails.

use crate::config::PadConfig;
use crate::imaging::{BackendError, Dimensions, ImageBackend, RustBackend, pad_in_place};
use crate::naming::scene_names;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("{filename}: {source}")]
    Scene {
        filename: String,
        #[source]
        source: BackendError,
    },
}

/// Progress event for a single scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneEvent {
    /// The expected file does not exist.
    NotFound { filename: String },
    /// The file was padded in place.
    Resized {
        filename: String,
        original: Dimensions,
        target: Dimensions,
    },
}

/// Summary of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessReport {
    pub resized: Vec<String>,
    pub missing: Vec<String>,
}

/// Pad every scene in `dir` with the pure Rust backend.
pub fn process(
    dir: &Path,
    config: &PadConfig,
    on_event: impl FnMut(&SceneEvent),
) -> Result<ProcessReport, ProcessError> {
    process_with_backend(&RustBackend::new(), dir, config, on_event)
}

/// Pad every scene using a specific backend (allows testing with mock).
pub fn process_with_backend(
    backend: &impl ImageBackend,
    dir: &Path,
    config: &PadConfig,
    mut on_event: impl FnMut(&SceneEvent),
) -> Result<ProcessReport, ProcessError> {
    let target = config.target_dimensions();
    let mut report = ProcessReport::default();

    for scene in scene_names() {
        let path = dir.join(&scene.filename);

        let event = if !path.exists() {
            debug!("scene {} missing at {}", scene.index, path.display());
            report.missing.push(scene.filename.clone());
            SceneEvent::NotFound {
                filename: scene.filename,
            }
        } else {
            let original = pad_in_place(backend, &path, target, config.background).map_err(
                |source| ProcessError::Scene {
                    filename: scene.filename.clone(),
                    source,
                },
            )?;
            report.resized.push(scene.filename.clone());
            SceneEvent::Resized {
                filename: scene.filename,
                original,
                target,
            }
        };

        on_event(&event);
    }

    Ok(report)
}
