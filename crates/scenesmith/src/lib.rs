#![warn(missing_docs)]

//! scenesmith — procedural 3-D scene authoring in Rust.
//!
//! Describe a scene through add-operations (shapes, lights, cameras), then
//! emit it in one of two textual forms:
//!
//! - [`Scene`] writes a flat-hierarchy JSON scene document for a
//!   ggslac-style viewer, with Lambertian materials deduplicated by color
//!   and every shape wrapped in a canonical nested transform tree.
//! - [`WebScene`] writes a self-contained HTML page that rebuilds the scene
//!   at load time by calling methods on a three.js `SceneCanvas` viewer,
//!   with PBR roughness/metalness materials and point/directional lights.
//!
//! # Example
//!
//! ```rust,no_run
//! use scenesmith::{Placement, Rgb, Scene};
//!
//! let mut scene = Scene::new();
//! scene.add_light(0.0, 100.0, 0.0, 1.0, 1.0, 1.0);
//! scene.add_camera(0.0, 2.0, -20.0, 180.0);
//! scene.add_box(
//!     0.0, -25.0, 0.0,
//!     1000.0, 50.0, 1000.0,
//!     Rgb::new(127.0, 127.0, 127.0),
//!     Placement::default(),
//! );
//! scene.save_scene("ground.json", "Ground Plane").unwrap();
//! ```

use thiserror::Error;

mod color;
mod fixture;
mod html;
mod palette;
mod place;
mod scene;
mod web;

pub use color::{ColorTable, Rgb};
pub use fixture::CameraPose;
pub use palette::{Palette, PaletteEntry};
pub use place::Placement;
pub use scene::Scene;
pub use web::{Finish, WebScene};

/// Errors returned by scene emission and palette parsing.
#[derive(Error, Debug)]
pub enum SceneError {
    /// An I/O error occurred while writing a scene file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Serializing the scene document failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A material palette failed to parse.
    #[error("palette error: {0}")]
    Palette(#[from] toml::de::Error),
}

/// Result type for scenesmith operations.
pub type Result<T> = std::result::Result<T, SceneError>;
