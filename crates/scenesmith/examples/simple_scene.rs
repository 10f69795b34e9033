//! A simple sample scene: street signs on a city street, plus Homer.
//!
//! Writes `simplescene.json`, loadable in a ggslac-style viewer.

use anyhow::Result;
use scenesmith::{Placement, Rgb, Scene};

/// Draw a sign: a 2 meter pole with a 0.5 x 0.5 face on top.
///
/// `east_west` picks the face orientation — thin in Z when the sign faces
/// along the street, thin in X when it faces across it.
fn draw_sign(scene: &mut Scene, cx: f64, cz: f64, east_west: bool, color: Rgb) {
    let gray = Rgb::new(127.0, 127.0, 127.0);
    scene.add_cylinder(cx, 1.0, cz, 0.05, 2.0, gray, Placement::default());
    if east_west {
        scene.add_box(cx, 2.0, cz, 0.5, 0.5, 0.1, color, Placement::default());
    } else {
        scene.add_box(cx, 2.0, cz, 0.1, 0.5, 0.5, color, Placement::default());
    }
}

fn main() -> Result<()> {
    let mut scene = Scene::new();

    // Lights
    scene.add_light(0.0, 100.0, 0.0, 1.0, 1.0, 1.0);
    scene.add_light(0.0, -100.0, 0.0, 1.0, 1.0, 1.0);
    scene.add_light(-100.0, 100.0, 0.0, 1.0, 1.0, 1.0);
    scene.add_light(100.0, -100.0, 0.0, 1.0, 1.0, 1.0);

    // Cameras: one at street level, one looking back from 20 meters out
    scene.add_camera(0.0, 2.0, 0.0, 0.0);
    scene.add_camera(0.0, 2.0, -20.0, 180.0);

    // A large gray box for the ground
    scene.add_box(
        0.0,
        -25.0,
        0.0,
        1000.0,
        50.0,
        1000.0,
        Rgb::new(127.0, 127.0, 127.0),
        Placement::default(),
    );

    // A red sign 5 meters ahead and 2 to the left, oriented east-west
    draw_sign(&mut scene, -2.0, -5.0, true, Rgb::new(255.0, 0.0, 0.0));
    // A green sign 10 meters ahead, oriented north-south
    draw_sign(&mut scene, 0.0, -10.0, false, Rgb::new(0.0, 255.0, 0.0));

    // A yellow Homer
    scene.add_special_mesh(
        "homer",
        0.0,
        1.0,
        -7.0,
        Placement::rotation(0.0, 1.0, 0.0),
        Rgb::new(255.0, 255.0, 0.0),
    );

    scene.save_scene("simplescene.json", "Simple Sample Scene")?;
    println!("wrote simplescene.json");
    Ok(())
}
