//! Placement configuration and the canonical transform hierarchy.

use scenesmith_ir::{GroupNode, Shape};
use scenesmith_math::Transform;

/// Optional rotation and scale for a shape, with identity defaults.
///
/// This one record replaces the pairs of full/short operations the scene
/// format grew up with: a default `Placement` is the axis-aligned,
/// unit-scale form, and any field can be overridden independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Rotation about the X, Y, and Z axes, in degrees.
    pub rotation: [f64; 3],
    /// Scale along each axis.
    pub scale: [f64; 3],
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            rotation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
        }
    }
}

impl Placement {
    /// A placement rotated by `(rx, ry, rz)` degrees, unit scale.
    pub fn rotation(rx: f64, ry: f64, rz: f64) -> Self {
        Self {
            rotation: [rx, ry, rz],
            ..Self::default()
        }
    }

    /// A placement scaled by `(sx, sy, sz)`, no rotation.
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            scale: [sx, sy, sz],
            ..Self::default()
        }
    }

    /// This placement with the rotation replaced.
    pub fn rotated(self, rx: f64, ry: f64, rz: f64) -> Self {
        Self {
            rotation: [rx, ry, rz],
            ..self
        }
    }

    /// This placement with the scale replaced.
    pub fn scaled(self, sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            scale: [sx, sy, sz],
            ..self
        }
    }
}

/// Wrap a shape descriptor in the canonical five-level transform tree.
///
/// From outermost to innermost: translate, rotate-Z, rotate-Y, rotate-X,
/// scale, then the shape leaf. Every level carries its own matrix — the
/// levels are never pre-composed, because the downstream viewer renders the
/// nested hierarchy as given. The Z-Y-X rotation order is fixed; reordering
/// would silently change rendered orientations.
pub(crate) fn hierarchy(
    translate: [f64; 3],
    rotation_deg: [f64; 3],
    scale: [f64; 3],
    shape: Shape,
) -> GroupNode {
    let [tx, ty, tz] = translate;
    let [rx, ry, rz] = rotation_deg;
    let [sx, sy, sz] = scale;

    let leaf = GroupNode::leaf(Transform::scale(sx, sy, sz).to_row_major(), shape);
    let rot_x = GroupNode::group(Transform::rotation_x(rx.to_radians()).to_row_major(), leaf);
    let rot_y = GroupNode::group(Transform::rotation_y(ry.to_radians()).to_row_major(), rot_x);
    let rot_z = GroupNode::group(Transform::rotation_z(rz.to_radians()).to_row_major(), rot_y);
    GroupNode::group(Transform::translation(tx, ty, tz).to_row_major(), rot_z)
}
