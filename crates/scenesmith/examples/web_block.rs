//! A city block as a self-contained web page.
//!
//! Writes `cityblock.html`, which rebuilds the scene against the
//! SceneCanvas viewer when opened in a browser.

use anyhow::Result;
use scenesmith::{Finish, Palette, Placement, Rgb, WebScene};

fn main() -> Result<()> {
    let palette = Palette::parse(
        r#"
[materials.asphalt]
color = [40, 40, 45]
roughness = 0.9

[materials.brick]
color = [170, 60, 40]
roughness = 0.8

[materials.glass]
color = [140, 180, 200]
roughness = 0.1
metalness = 0.4

[materials.trim]
color = [220, 220, 220]
roughness = 0.4
metalness = 0.6
"#,
    )?;

    let mut scene = WebScene::new();

    // Lights: warm key light plus a cool fill from the side
    scene.add_point_light(0.0, 30.0, 0.0, Rgb::new(255.0, 240.0, 220.0), 0.9);
    scene.add_directional_light(-40.0, 25.0, -30.0, Rgb::new(180.0, 200.0, 255.0), 0.4);

    // Cameras
    scene.add_camera(0.0, 2.0, -25.0, 180.0);
    scene.add_camera(15.0, 8.0, -15.0, 135.0);

    // Ground
    scene.add_box(
        0.0,
        -25.0,
        0.0,
        1000.0,
        50.0,
        1000.0,
        palette.color("asphalt").unwrap(),
        palette.finish("asphalt").unwrap(),
        Placement::default(),
    );

    // A row of brick buildings with glass fronts along the street
    for i in 0..4 {
        let cx = -12.0 + 8.0 * i as f64;
        let height = 6.0 + 2.0 * (i % 3) as f64;
        scene.add_box(
            cx,
            height / 2.0,
            -12.0,
            6.0,
            height,
            6.0,
            palette.color("brick").unwrap(),
            palette.finish("brick").unwrap(),
            Placement::default(),
        );
        scene.add_box(
            cx,
            height / 2.0,
            -8.9,
            5.0,
            height - 2.0,
            0.2,
            palette.color("glass").unwrap(),
            palette.finish("glass").unwrap(),
            Placement::default(),
        );
    }

    // A street lamp: pole, arm, and a glowing bulb
    let trim = palette.color("trim").unwrap();
    let trim_finish = palette.finish("trim").unwrap();
    scene.add_cylinder(4.0, 2.5, -5.0, 0.08, 5.0, trim, trim_finish, Placement::default());
    scene.add_cylinder(
        4.0,
        5.0,
        -5.5,
        0.05,
        1.0,
        trim,
        trim_finish,
        Placement::rotation(90.0, 0.0, 0.0),
    );
    scene.add_sphere(
        4.0,
        5.0,
        -6.0,
        0.25,
        Rgb::new(255.0, 250.0, 200.0),
        Finish::new(0.3, 0.0),
    );

    // A traffic cone at the curb
    scene.add_cone(
        -3.0,
        0.35,
        -4.0,
        0.3,
        0.7,
        Rgb::new(255.0, 120.0, 30.0),
        Finish::default(),
        Placement::default(),
    );

    scene.save_scene("cityblock.html", "City Block")?;
    println!("wrote cityblock.html");
    Ok(())
}
