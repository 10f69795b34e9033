//! Camera and light fixture records.

use crate::color::Rgb;

/// A camera position with a rotation about the Y axis.
///
/// The flat emitter converts the rotation to a quaternion; the scripted
/// emitter forwards the scalar to the viewer unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// X position.
    pub x: f64,
    /// Y position.
    pub y: f64,
    /// Z position.
    pub z: f64,
    /// Rotation about the Y axis, in degrees.
    pub rot_y_deg: f64,
}

/// The kind of a scripted-variant light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LightKind {
    Point,
    Directional,
}

/// A scripted-variant light record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WebLight {
    pub kind: LightKind,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub color: Rgb,
    pub intensity: f64,
}
