//! The scripted-variant scene builder.
//!
//! Where the flat variant serializes a document, this builder records one
//! `canvas.add*(...)` statement per shape and wraps them — together with
//! light and camera statements — in a fixed HTML envelope. The statement
//! signatures mirror the viewer's `SceneCanvas` methods exactly; the
//! viewer deduplicates materials on its side, so no color interning
//! happens here.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::color::Rgb;
use crate::fixture::{CameraPose, LightKind, WebLight};
use crate::html::{escape_js, HTML_PREFIX, HTML_SUFFIX};
use crate::place::Placement;
use crate::Result;

/// PBR surface parameters for scripted-variant materials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Finish {
    /// How rough the surface appears: 0.0 is a mirror, 1.0 fully diffuse.
    pub roughness: f64,
    /// How metallic the surface is: 0.0 dielectric, 1.0 metal.
    pub metalness: f64,
}

impl Default for Finish {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            metalness: 0.0,
        }
    }
}

impl Finish {
    /// Create a finish with the given roughness and metalness.
    pub fn new(roughness: f64, metalness: f64) -> Self {
        Self {
            roughness,
            metalness,
        }
    }
}

/// A procedurally assembled scene that emits a self-contained HTML page.
///
/// Lights, cameras, and shape statements accumulate in insertion order and
/// are replayed against a viewer canvas when the page loads. Emission is
/// repeatable; there is no finalized state.
#[derive(Debug, Default)]
pub struct WebScene {
    lights: Vec<WebLight>,
    cameras: Vec<CameraPose>,
    statements: Vec<String>,
}

impl WebScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a box centered at `(cx, cy, cz)` with side lengths
    /// `(xlen, ylen, zlen)`.
    ///
    /// The viewer's box call has no scale parameters, so any `placement`
    /// scale multiplies the side lengths before emission.
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
        finish: Finish,
        placement: Placement,
    ) {
        let [rx, ry, rz] = placement.rotation;
        let [sx, sy, sz] = placement.scale;
        self.statements.push(format!(
            "canvas.addBox({}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {});",
            cx,
            cy,
            cz,
            xlen * sx,
            ylen * sy,
            zlen * sz,
            color.r,
            color.g,
            color.b,
            finish.roughness,
            finish.metalness,
            rx,
            ry,
            rz,
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
        finish: Finish,
        placement: Placement,
    ) {
        let [rx, ry, rz] = placement.rotation;
        let [sx, sy, sz] = placement.scale;
        self.statements.push(format!(
            "canvas.addCylinder({}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {});",
            cx,
            cy,
            cz,
            radius,
            height,
            color.r,
            color.g,
            color.b,
            finish.roughness,
            finish.metalness,
            rx,
            ry,
            rz,
            sx,
            sy,
            sz,
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
        finish: Finish,
        placement: Placement,
    ) {
        let [rx, ry, rz] = placement.rotation;
        let [sx, sy, sz] = placement.scale;
        self.statements.push(format!(
            "canvas.addCone({}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {});",
            cx,
            cy,
            cz,
            radius,
            height,
            color.r,
            color.g,
            color.b,
            finish.roughness,
            finish.metalness,
            rx,
            ry,
            rz,
            sx,
            sy,
            sz,
        ));
    }

    /// Add an ellipsoid centered at `(cx, cy, cz)` with semi-axes
    /// `(radx, rady, radz)`.
    ///
    /// The viewer builds ellipsoids as scaled unit spheres, so any
    /// `placement` scale multiplies the semi-axes.
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
        finish: Finish,
        placement: Placement,
    ) {
        let [rx, ry, rz] = placement.rotation;
        let [sx, sy, sz] = placement.scale;
        self.statements.push(format!(
            "canvas.addEllipsoid({}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {});",
            cx,
            cy,
            cz,
            radx * sx,
            rady * sy,
            radz * sz,
            color.r,
            color.g,
            color.b,
            finish.roughness,
            finish.metalness,
            rx,
            ry,
            rz,
        ));
    }

    /// Add a sphere centered at `(cx, cy, cz)`.
    pub fn add_sphere(&mut self, cx: f64, cy: f64, cz: f64, radius: f64, color: Rgb, finish: Finish) {
        self.add_ellipsoid(
            cx,
            cy,
            cz,
            radius,
            radius,
            radius,
            color,
            finish,
            Placement::default(),
        );
    }

    /// Add a mesh from `path` (passed to the viewer verbatim).
    #[allow(clippy::too_many_arguments)]
    pub fn add_mesh(
        &mut self,
        path: &str,
        cx: f64,
        cy: f64,
        cz: f64,
        placement: Placement,
        color: Rgb,
        finish: Finish,
    ) {
        let [rx, ry, rz] = placement.rotation;
        let [sx, sy, sz] = placement.scale;
        self.statements.push(format!(
            "canvas.addMesh(\"{}\", {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {});",
            escape_js(path),
            cx,
            cy,
            cz,
            rx,
            ry,
            rz,
            sx,
            sy,
            sz,
            color.r,
            color.g,
            color.b,
            finish.roughness,
            finish.metalness,
        ));
    }

    /// Add a textured mesh whose material comes from an external material
    /// file; no color is attached here.
    #[allow(clippy::too_many_arguments)]
    pub fn add_textured_mesh(
        &mut self,
        path: &str,
        mat_path: &str,
        cx: f64,
        cy: f64,
        cz: f64,
        placement: Placement,
        shininess: f64,
    ) {
        let [rx, ry, rz] = placement.rotation;
        let [sx, sy, sz] = placement.scale;
        self.statements.push(format!(
            "canvas.addTexturedMesh(\"{}\", \"{}\", {}, {}, {}, {}, {}, {}, {}, {}, {}, {});",
            escape_js(path),
            escape_js(mat_path),
            cx,
            cy,
            cz,
            rx,
            ry,
            rz,
            sx,
            sy,
            sz,
            shininess,
        ));
    }

    /// Add a camera at `(x, y, z)` rotated `rot_y_deg` degrees about the
    /// Y axis. The rotation is forwarded to the viewer as a scalar.
    pub fn add_camera(&mut self, x: f64, y: f64, z: f64, rot_y_deg: f64) {
        self.cameras.push(CameraPose { x, y, z, rot_y_deg });
    }

    /// Add a point light at `(x, y, z)` with `color` in [0, 255] and
    /// `intensity` in [0, 1].
    pub fn add_point_light(&mut self, x: f64, y: f64, z: f64, color: Rgb, intensity: f64) {
        self.lights.push(WebLight {
            kind: LightKind::Point,
            x,
            y,
            z,
            color,
            intensity,
        });
    }

    /// Add a directional light at `(x, y, z)` pointing toward the origin,
    /// with `color` in [0, 255] and `intensity` in [0, 1].
    pub fn add_directional_light(&mut self, x: f64, y: f64, z: f64, color: Rgb, intensity: f64) {
        self.lights.push(WebLight {
            kind: LightKind::Directional,
            x,
            y,
            z,
            color,
            intensity,
        });
    }

    /// Number of shape statements recorded so far.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Whether no shape has been added.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Render the complete HTML page for the scene.
    pub fn to_html(&self, scene_name: &str) -> String {
        let mut out = String::from(HTML_PREFIX);
        out.push_str("<script>\n");
        out.push_str("  let canvas = new SceneCanvas();\n");
        for light in &self.lights {
            let method = match light.kind {
                LightKind::Point => "addPointLight",
                LightKind::Directional => "addDirectionalLight",
            };
            out.push_str(&format!(
                "  canvas.{}({}, {}, {}, {}, {}, {}, {});\n",
                method,
                light.x,
                light.y,
                light.z,
                light.color.r,
                light.color.g,
                light.color.b,
                light.intensity,
            ));
        }
        for camera in &self.cameras {
            out.push_str(&format!(
                "  canvas.addCamera({}, {}, {}, {});\n",
                camera.x, camera.y, camera.z, camera.rot_y_deg,
            ));
        }
        for statement in &self.statements {
            out.push_str("  ");
            out.push_str(statement);
            out.push('\n');
        }
        out.push_str(&format!(
            "  canvas.name = \"{}\";\n",
            escape_js(scene_name)
        ));
        out.push_str("  canvas.repaint();\n");
        out.push_str("</script>\n");
        out.push_str(HTML_SUFFIX);
        out
    }

    /// Save the HTML page to a file.
    ///
    /// The path is opened for writing and closed on every exit path; a
    /// failed write may leave partial output behind.
    pub fn save_scene(&self, path: impl AsRef<Path>, scene_name: &str) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(self.to_html(scene_name).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white() -> Rgb {
        Rgb::new(255.0, 255.0, 255.0)
    }

    #[test]
    fn empty_scene_still_boots_the_viewer() {
        let scene = WebScene::new();
        let html = scene.to_html("Empty");
        assert!(html.starts_with(HTML_PREFIX));
        assert!(html.ends_with(HTML_SUFFIX));
        assert!(html.contains("let canvas = new SceneCanvas();"));
        assert!(html.contains("canvas.name = \"Empty\";"));
        assert!(html.contains("canvas.repaint();"));
    }

    #[test]
    fn box_statement_mirrors_viewer_signature() {
        let mut scene = WebScene::new();
        scene.add_box(
            0.0,
            2.0,
            -5.0,
            0.5,
            0.5,
            0.1,
            Rgb::new(255.0, 0.0, 0.0),
            Finish::new(0.5, 0.0),
            Placement::default(),
        );
        let html = scene.to_html("Box");
        assert!(html.contains(
            "canvas.addBox(0, 2, -5, 0.5, 0.5, 0.1, 255, 0, 0, 0.5, 0, 0, 0, 0);"
        ));
    }

    #[test]
    fn cylinder_statement_includes_scale() {
        let mut scene = WebScene::new();
        scene.add_cylinder(
            1.0,
            1.0,
            1.0,
            0.05,
            2.0,
            Rgb::new(127.0, 127.0, 127.0),
            Finish::default(),
            Placement::rotation(0.0, 90.0, 0.0).scaled(1.0, 2.0, 1.0),
        );
        let html = scene.to_html("Cyl");
        assert!(html.contains(
            "canvas.addCylinder(1, 1, 1, 0.05, 2, 127, 127, 127, 1, 0, 0, 90, 0, 1, 2, 1);"
        ));
    }

    #[test]
    fn sphere_delegates_to_ellipsoid() {
        let mut a = WebScene::new();
        a.add_sphere(1.0, 2.0, 3.0, 4.0, white(), Finish::default());
        let mut b = WebScene::new();
        b.add_ellipsoid(
            1.0,
            2.0,
            3.0,
            4.0,
            4.0,
            4.0,
            white(),
            Finish::default(),
            Placement::default(),
        );
        assert_eq!(a.to_html("S"), b.to_html("S"));
    }

    #[test]
    fn lights_then_cameras_then_shapes() {
        let mut scene = WebScene::new();
        scene.add_sphere(0.0, 0.0, 0.0, 1.0, white(), Finish::default());
        scene.add_camera(0.0, 2.0, -20.0, 180.0);
        scene.add_point_light(0.0, 20.0, 0.0, white(), 0.8);
        scene.add_directional_light(10.0, 20.0, 10.0, white(), 0.4);
        let html = scene.to_html("Order");

        let point = html.find("canvas.addPointLight(0, 20, 0, 255, 255, 255, 0.8);").unwrap();
        let directional = html
            .find("canvas.addDirectionalLight(10, 20, 10, 255, 255, 255, 0.4);")
            .unwrap();
        let camera = html.find("canvas.addCamera(0, 2, -20, 180);").unwrap();
        let sphere = html.find("canvas.addEllipsoid(").unwrap();
        assert!(point < directional);
        assert!(directional < camera);
        assert!(camera < sphere);
    }

    #[test]
    fn textured_mesh_has_no_color() {
        let mut scene = WebScene::new();
        scene.add_textured_mesh(
            "meshes/statue.obj",
            "meshes/statue.mtl",
            0.0,
            0.0,
            -3.0,
            Placement::default(),
            55.0,
        );
        let html = scene.to_html("Tex");
        assert!(html.contains(
            "canvas.addTexturedMesh(\"meshes/statue.obj\", \"meshes/statue.mtl\", 0, 0, -3, 0, 0, 0, 1, 1, 1, 55);"
        ));
    }

    #[test]
    fn mesh_path_passed_verbatim() {
        let mut scene = WebScene::new();
        scene.add_mesh(
            "../meshes/homer.off",
            0.0,
            1.0,
            -7.0,
            Placement::rotation(0.0, 1.0, 0.0),
            Rgb::new(255.0, 255.0, 0.0),
            Finish::default(),
        );
        let html = scene.to_html("Mesh");
        assert!(html.contains(
            "canvas.addMesh(\"../meshes/homer.off\", 0, 1, -7, 0, 1, 0, 1, 1, 1, 255, 255, 0, 1, 0);"
        ));
    }

    #[test]
    fn name_is_escaped() {
        let scene = WebScene::new();
        let html = scene.to_html(r#"My "Great" Scene"#);
        assert!(html.contains(r#"canvas.name = "My \"Great\" Scene";"#));
    }

    #[test]
    fn emission_is_idempotent() {
        let mut scene = WebScene::new();
        scene.add_point_light(0.0, 20.0, 0.0, white(), 1.0);
        scene.add_box(
            0.0,
            0.0,
            0.0,
            1.0,
            1.0,
            1.0,
            white(),
            Finish::default(),
            Placement::default(),
        );
        assert_eq!(scene.to_html("Same"), scene.to_html("Same"));
    }

    #[test]
    fn save_scene_round_trips_to_disk() {
        let mut scene = WebScene::new();
        scene.add_sphere(0.0, 0.0, 0.0, 1.0, white(), Finish::default());
        let path = std::env::temp_dir().join("scenesmith_web_save_test.html");
        scene.save_scene(&path, "Saved").unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, scene.to_html("Saved"));
        std::fs::remove_file(&path).ok();
    }
}
