//! The flat-variant scene builder.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use scenesmith_ir::{Camera, GroupNode, Light, Material, Materials, SceneDoc, Shape};
use scenesmith_math::y_rotation_quat;

use crate::color::{ColorTable, Rgb};
use crate::fixture::CameraPose;
use crate::place::{hierarchy, Placement};
use crate::Result;

/// A procedurally assembled scene that emits a flat-hierarchy JSON document.
///
/// Shapes, lights, and cameras accumulate in insertion order; shape colors
/// are interned into shared Lambertian materials. The scene is a
/// monotonically growing buffer — there is no finalized state, and emission
/// can be repeated at any point.
#[derive(Debug, Default)]
pub struct Scene {
    colors: ColorTable,
    lights: Vec<Light>,
    cameras: Vec<CameraPose>,
    shapes: Vec<GroupNode>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a box centered at `(cx, cy, cz)` with side lengths
    /// `(xlen, ylen, zlen)`.
    ///
    /// The box is emitted as a unit shape; its extent is carried entirely by
    /// the scale level, so any `placement` scale multiplies the side
    /// lengths.
    #[allow(clippy::too_many_arguments)]
    pub fn add_box(
        &mut self,
        cx: f64,
        cy: f64,
        cz: f64,
        xlen: f64,
        ylen: f64,
        zlen: f64,
        color: Rgb,
        placement: Placement,
    ) {
        let material = self.colors.intern(color);
        let [sx, sy, sz] = placement.scale;
        self.shapes.push(hierarchy(
            [cx, cy, cz],
            placement.rotation,
            [xlen * sx, ylen * sy, zlen * sz],
            Shape::Box { material },
        ));
    }

    /// Add a cylinder centered at `(cx, cy, cz)`.
    #[allow(clippy::too_many_arguments)]
    pub fn add_cylinder(
        &mut self,
        cx: f64,
        cy: f64,
        cz: f64,
        radius: f64,
        height: f64,
        color: Rgb,
        placement: Placement,
    ) {
        let material = self.colors.intern(color);
        self.shapes.push(hierarchy(
            [cx, cy, cz],
            placement.rotation,
            placement.scale,
            Shape::Cylinder {
                radius,
                height,
                material,
            },
        ));
    }

    /// Add a cone centered at `(cx, cy, cz)`.
    #[allow(clippy::too_many_arguments)]
    pub fn add_cone(
        &mut self,
        cx: f64,
        cy: f64,
        cz: f64,
        radius: f64,
        height: f64,
        color: Rgb,
        placement: Placement,
    ) {
        let material = self.colors.intern(color);
        self.shapes.push(hierarchy(
            [cx, cy, cz],
            placement.rotation,
            placement.scale,
            Shape::Cone {
                radius,
                height,
                material,
            },
        ));
    }

    /// Add an ellipsoid centered at `(cx, cy, cz)` with semi-axes
    /// `(radx, rady, radz)`.
    ///
    /// Emitted as a unit sphere whose semi-axes come from the scale level;
    /// any `placement` scale multiplies them.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ellipsoid(
        &mut self,
        cx: f64,
        cy: f64,
        cz: f64,
        radx: f64,
        rady: f64,
        radz: f64,
        color: Rgb,
        placement: Placement,
    ) {
        let material = self.colors.intern(color);
        let [sx, sy, sz] = placement.scale;
        self.shapes.push(hierarchy(
            [cx, cy, cz],
            placement.rotation,
            [radx * sx, rady * sy, radz * sz],
            Shape::Sphere { material },
        ));
    }

    /// Add a sphere centered at `(cx, cy, cz)`.
    pub fn add_sphere(&mut self, cx: f64, cy: f64, cz: f64, radius: f64, color: Rgb) {
        self.add_ellipsoid(
            cx,
            cy,
            cz,
            radius,
            radius,
            radius,
            color,
            Placement::default(),
        );
    }

    /// Add one of the viewer's bundled meshes by name.
    ///
    /// The file path is derived as `"../meshes/{mesh_name}.off"`, relative
    /// to where the viewer serves scene files from.
    pub fn add_special_mesh(
        &mut self,
        mesh_name: &str,
        cx: f64,
        cy: f64,
        cz: f64,
        placement: Placement,
        color: Rgb,
    ) {
        let material = self.colors.intern(color);
        self.shapes.push(hierarchy(
            [cx, cy, cz],
            placement.rotation,
            placement.scale,
            Shape::Mesh {
                material,
                filename: format!("../meshes/{mesh_name}.off"),
            },
        ));
    }

    /// Add a camera at `(x, y, z)` rotated `rot_y_deg` degrees about the
    /// Y axis.
    pub fn add_camera(&mut self, x: f64, y: f64, z: f64, rot_y_deg: f64) {
        self.cameras.push(CameraPose { x, y, z, rot_y_deg });
    }

    /// Add an omnidirectional light at `(x, y, z)`.
    ///
    /// Unlike shape colors, the light color is emitted exactly as supplied —
    /// callers pass intensities in [0, 1].
    pub fn add_light(&mut self, x: f64, y: f64, z: f64, r: f64, g: f64, b: f64) {
        self.lights.push(Light {
            pos: [x, y, z],
            color: [r, g, b],
        });
    }

    /// Number of shapes added so far.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the scene has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Assemble the flat scene document under the given name.
    pub fn to_document(&self, scene_name: &str) -> SceneDoc {
        SceneDoc {
            name: scene_name.to_string(),
            materials: Materials(
                self.colors
                    .entries()
                    .iter()
                    .map(|&kd| Material { kd })
                    .collect(),
            ),
            lights: self.lights.clone(),
            cameras: self
                .cameras
                .iter()
                .map(|c| Camera {
                    pos: [c.x, c.y, c.z],
                    rot: y_rotation_quat(c.rot_y_deg),
                })
                .collect(),
            children: self.shapes.clone(),
        }
    }

    /// Serialize the scene to a pretty-printed JSON string.
    pub fn to_json_string(&self, scene_name: &str) -> Result<String> {
        Ok(self.to_document(scene_name).to_json()?)
    }

    /// Save the scene document to a file.
    ///
    /// The path is opened for writing and closed on every exit path; a
    /// failed write may leave partial output behind.
    pub fn save_scene(&self, path: impl AsRef<Path>, scene_name: &str) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.to_document(scene_name).write_json(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Print the scene document to standard output.
    pub fn print_scene(&self, scene_name: &str) -> Result<()> {
        println!("{}", self.to_json_string(scene_name)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray() -> Rgb {
        Rgb::new(127.0, 127.0, 127.0)
    }

    fn parse(scene: &Scene, name: &str) -> serde_json::Value {
        serde_json::from_str(&scene.to_json_string(name).unwrap()).unwrap()
    }

    #[test]
    fn empty_scene_emits_empty_sections() {
        let scene = Scene::new();
        let value = parse(&scene, "Empty");
        assert_eq!(value["name"], "Empty");
        assert!(value["materials"].as_object().unwrap().is_empty());
        assert!(value["lights"].as_array().unwrap().is_empty());
        assert!(value["cameras"].as_array().unwrap().is_empty());
        assert!(value["children"].as_array().unwrap().is_empty());
    }

    #[test]
    fn single_red_box_at_origin() {
        let mut scene = Scene::new();
        scene.add_box(
            0.0,
            0.0,
            0.0,
            1.0,
            1.0,
            1.0,
            Rgb::new(255.0, 0.0, 0.0),
            Placement::default(),
        );
        let value = parse(&scene, "Box");

        let materials = value["materials"].as_object().unwrap();
        assert_eq!(materials.len(), 1);
        assert_eq!(materials["color0"]["kd"][0], 1.0);
        assert_eq!(materials["color0"]["kd"][1], 0.0);

        // Outermost level translates by (0, 0, 0).
        let root = &value["children"][0];
        assert_eq!(root["transform"][3], 0.0);
        assert_eq!(root["transform"][7], 0.0);
        assert_eq!(root["transform"][11], 0.0);

        // Innermost level scales by (1, 1, 1) and holds the box.
        let leaf = &root["children"][0]["children"][0]["children"][0]["children"][0];
        assert_eq!(leaf["transform"][0], 1.0);
        assert_eq!(leaf["transform"][5], 1.0);
        assert_eq!(leaf["transform"][10], 1.0);
        assert_eq!(leaf["shapes"][0]["type"], "box");
        assert_eq!(leaf["shapes"][0]["material"], "color0");
    }

    #[test]
    fn shared_color_yields_one_material() {
        let mut scene = Scene::new();
        let color = Rgb::new(10.0, 20.0, 30.0);
        scene.add_box(0.0, 0.0, 0.0, 1.0, 1.0, 1.0, color, Placement::default());
        scene.add_sphere(5.0, 0.0, 0.0, 2.0, color);
        let value = parse(&scene, "Shared");
        assert_eq!(value["materials"].as_object().unwrap().len(), 1);

        let leaf_material = |i: usize| {
            value["children"][i]["children"][0]["children"][0]["children"][0]["children"][0]
                ["shapes"][0]["material"]
                .clone()
        };
        assert_eq!(leaf_material(0), "color0");
        assert_eq!(leaf_material(1), "color0");
    }

    #[test]
    fn distinct_colors_get_first_seen_ids() {
        let mut scene = Scene::new();
        scene.add_box(
            0.0,
            0.0,
            0.0,
            1.0,
            1.0,
            1.0,
            Rgb::new(10.0, 20.0, 30.0),
            Placement::default(),
        );
        scene.add_box(
            2.0,
            0.0,
            0.0,
            1.0,
            1.0,
            1.0,
            Rgb::new(30.0, 20.0, 10.0),
            Placement::default(),
        );
        let value = parse(&scene, "Two");
        let materials = value["materials"].as_object().unwrap();
        assert_eq!(materials.len(), 2);
        assert_eq!(materials["color0"]["kd"][0], 10.0 / 255.0);
        assert_eq!(materials["color1"]["kd"][0], 30.0 / 255.0);
    }

    #[test]
    fn camera_quaternion_about_y() {
        let mut scene = Scene::new();
        scene.add_camera(0.0, 2.0, -20.0, 180.0);
        let value = parse(&scene, "Cam");
        // rotY = 180° gives (0, sin(π/2), 0, cos(π/2)) = (0, 1, 0, 0).
        let rot = value["cameras"][0]["rot"].as_array().unwrap();
        assert_eq!(rot[0], 0.0);
        assert!((rot[1].as_f64().unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(rot[2], 0.0);
        assert!(rot[3].as_f64().unwrap().abs() < 1e-12);
        assert_eq!(value["cameras"][0]["pos"][2], -20.0);
    }

    #[test]
    fn light_color_passes_through() {
        let mut scene = Scene::new();
        scene.add_light(0.0, 100.0, 0.0, 1.0, 0.5, 0.25);
        let value = parse(&scene, "Light");
        let light = &value["lights"][0];
        assert_eq!(light["pos"][1], 100.0);
        assert_eq!(light["color"][1], 0.5);
    }

    #[test]
    fn insertion_order_preserved() {
        let mut scene = Scene::new();
        scene.add_cylinder(
            1.0,
            0.0,
            0.0,
            0.5,
            2.0,
            gray(),
            Placement::default(),
        );
        scene.add_cone(2.0, 0.0, 0.0, 0.5, 2.0, gray(), Placement::default());
        scene.add_sphere(3.0, 0.0, 0.0, 1.0, gray());
        let value = parse(&scene, "Order");
        let type_of = |i: usize| {
            value["children"][i]["children"][0]["children"][0]["children"][0]["children"][0]
                ["shapes"][0]["type"]
                .clone()
        };
        assert_eq!(type_of(0), "cylinder");
        assert_eq!(type_of(1), "cone");
        assert_eq!(type_of(2), "sphere");
    }

    #[test]
    fn emission_is_idempotent() {
        let mut scene = Scene::new();
        scene.add_light(0.0, 100.0, 0.0, 1.0, 1.0, 1.0);
        scene.add_camera(0.0, 2.0, 0.0, 0.0);
        scene.add_box(
            0.0,
            -25.0,
            0.0,
            1000.0,
            50.0,
            1000.0,
            gray(),
            Placement::rotation(0.0, 45.0, 0.0),
        );
        let first = scene.to_json_string("Same").unwrap();
        let second = scene.to_json_string("Same").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn sphere_matches_equal_radius_ellipsoid() {
        let mut a = Scene::new();
        a.add_sphere(1.0, 2.0, 3.0, 4.0, gray());
        let mut b = Scene::new();
        b.add_ellipsoid(1.0, 2.0, 3.0, 4.0, 4.0, 4.0, gray(), Placement::default());
        assert_eq!(
            a.to_json_string("S").unwrap(),
            b.to_json_string("S").unwrap()
        );
    }

    #[test]
    fn default_placement_equals_explicit_identity() {
        let mut a = Scene::new();
        a.add_cylinder(0.0, 1.0, 0.0, 0.05, 2.0, gray(), Placement::default());
        let mut b = Scene::new();
        b.add_cylinder(
            0.0,
            1.0,
            0.0,
            0.05,
            2.0,
            gray(),
            Placement::rotation(0.0, 0.0, 0.0).scaled(1.0, 1.0, 1.0),
        );
        assert_eq!(
            a.to_json_string("S").unwrap(),
            b.to_json_string("S").unwrap()
        );
    }

    #[test]
    fn special_mesh_path_is_derived() {
        let mut scene = Scene::new();
        scene.add_special_mesh(
            "homer",
            0.0,
            1.0,
            -7.0,
            Placement::rotation(0.0, 1.0, 0.0),
            Rgb::new(255.0, 255.0, 0.0),
        );
        let value = parse(&scene, "Mesh");
        let leaf = &value["children"][0]["children"][0]["children"][0]["children"][0]
            ["children"][0]["shapes"][0];
        assert_eq!(leaf["type"], "mesh");
        assert_eq!(leaf["filename"], "../meshes/homer.off");
    }

    #[test]
    fn sign_shapes_share_the_gray_material() {
        // A sign: gray pole, then a red face; the pole's gray is color0.
        let mut scene = Scene::new();
        scene.add_cylinder(-2.0, 1.0, -5.0, 0.05, 2.0, gray(), Placement::default());
        scene.add_box(
            -2.0,
            2.0,
            -5.0,
            0.5,
            0.5,
            0.1,
            Rgb::new(255.0, 0.0, 0.0),
            Placement::default(),
        );
        scene.add_cylinder(0.0, 1.0, -10.0, 0.05, 2.0, gray(), Placement::default());
        let value = parse(&scene, "Signs");
        let materials = value["materials"].as_object().unwrap();
        assert_eq!(materials.len(), 2);
        let leaf_material = |i: usize| {
            value["children"][i]["children"][0]["children"][0]["children"][0]["children"][0]
                ["shapes"][0]["material"]
                .clone()
        };
        assert_eq!(leaf_material(0), "color0");
        assert_eq!(leaf_material(1), "color1");
        assert_eq!(leaf_material(2), "color0");
    }

    #[test]
    fn box_extents_land_in_scale_level() {
        let mut scene = Scene::new();
        scene.add_box(
            0.0,
            -25.0,
            0.0,
            1000.0,
            50.0,
            1000.0,
            gray(),
            Placement::default(),
        );
        let value = parse(&scene, "Ground");
        let scale = &value["children"][0]["children"][0]["children"][0]["children"][0]
            ["children"][0]["transform"];
        assert_eq!(scale[0], 1000.0);
        assert_eq!(scale[5], 50.0);
        assert_eq!(scale[10], 1000.0);
    }

    #[test]
    fn save_scene_writes_parseable_json() {
        let mut scene = Scene::new();
        scene.add_sphere(0.0, 0.0, 0.0, 1.0, gray());
        let path = std::env::temp_dir().join("scenesmith_save_test.json");
        scene.save_scene(&path, "Saved").unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["name"], "Saved");
        std::fs::remove_file(&path).ok();
    }
}
