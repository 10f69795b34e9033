#![warn(missing_docs)]

//! Flat-hierarchy scene document model for the scenesmith ecosystem.
//!
//! This crate defines the data types of the JSON scene files consumed by the
//! downstream viewer: a top-level document with `materials`, `lights`,
//! `cameras`, and a `children` array where every object sits at a single
//! nesting depth with its transform expressed as an inline nested tree.
//!
//! The model is purely declarative — no geometry, just the serialized shape
//! of the document. Scene assembly lives in the `scenesmith` crate.
//! The document is write-only by design: the library emits scenes, it never
//! loads them.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A Lambertian material entry — diffuse color only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    /// Diffuse color as `[r, g, b]` in 0.0..1.0.
    pub kd: [f64; 3],
}

/// The `materials` section: one [`Material`] per distinct interned color,
/// indexed by ID.
///
/// Serializes as a JSON map whose keys are the derived material names
/// `"color0"`, `"color1"`, ... in ID order, so the section is deterministic
/// for a given insertion sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Materials(pub Vec<Material>);

impl Serialize for Materials {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (id, material) in self.0.iter().enumerate() {
            map.serialize_entry(&format!("color{id}"), material)?;
        }
        map.end()
    }
}

/// An omnidirectional light.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Light {
    /// Position `[x, y, z]`.
    pub pos: [f64; 3],
    /// Color `[r, g, b]`, passed through exactly as the caller supplied it.
    pub color: [f64; 3],
}

/// A camera with a quaternion orientation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Camera {
    /// Position `[x, y, z]`.
    pub pos: [f64; 3],
    /// Orientation quaternion `[x, y, z, w]`.
    pub rot: [f64; 4],
}

/// A shape descriptor — the innermost leaf of a transform tree.
///
/// Box and sphere are unit shapes; their extent comes entirely from the
/// enclosing scale level. Cylinder and cone carry their radius and height
/// inline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// Unit box.
    Box {
        /// Material name (`"color{id}"`).
        material: String,
    },
    /// Cylinder along the Y axis.
    Cylinder {
        /// Radius of the cylinder.
        radius: f64,
        /// Height of the cylinder.
        height: f64,
        /// Material name (`"color{id}"`).
        material: String,
    },
    /// Cone along the Y axis.
    Cone {
        /// Radius of the cone.
        radius: f64,
        /// Height of the cone.
        height: f64,
        /// Material name (`"color{id}"`).
        material: String,
    },
    /// Unit sphere (ellipsoids are spheres under a non-uniform scale).
    Sphere {
        /// Material name (`"color{id}"`).
        material: String,
    },
    /// External mesh file.
    Mesh {
        /// Material name (`"color{id}"`).
        material: String,
        /// Path to the mesh file, relative to the viewer.
        filename: String,
    },
}

/// A node in an inline transform tree.
///
/// Interior nodes carry a transform and `children`; the innermost node
/// carries a transform and `shapes`. Empty arrays are omitted from the
/// output so each node shows exactly one of the two.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupNode {
    /// Row-major 4x4 affine matrix.
    pub transform: [f64; 16],
    /// Nested child nodes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<GroupNode>,
    /// Shape descriptors at the innermost level.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Shape>,
}

impl GroupNode {
    /// An interior node wrapping a single child.
    pub fn group(transform: [f64; 16], child: GroupNode) -> Self {
        Self {
            transform,
            children: vec![child],
            shapes: Vec::new(),
        }
    }

    /// The innermost node carrying a shape descriptor.
    pub fn leaf(transform: [f64; 16], shape: Shape) -> Self {
        Self {
            transform,
            children: Vec::new(),
            shapes: vec![shape],
        }
    }
}

/// A complete flat-hierarchy scene document.
///
/// Field order is the section order of the emitted file: `name`,
/// `materials`, `lights`, `cameras`, `children`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SceneDoc {
    /// Human-readable scene name, shown by the viewer.
    pub name: String,
    /// Material entries in ID order.
    pub materials: Materials,
    /// Lights in insertion order.
    pub lights: Vec<Light>,
    /// Cameras in insertion order.
    pub cameras: Vec<Camera>,
    /// Shape fragments in insertion order, each a nested transform tree.
    pub children: Vec<GroupNode>,
}

impl SceneDoc {
    /// Serialize to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serialize pretty-printed JSON into a writer.
    pub fn write_json<W: std::io::Write>(&self, writer: W) -> Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(writer, self)
    }
}
