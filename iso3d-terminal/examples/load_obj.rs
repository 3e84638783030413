/// Example: Load and render an OBJ file in the terminal
///
/// Usage: cargo run --example load_obj -- path/to/file.obj [hex-color]

use iso3d_core::{obj, Color, Scene};
use iso3d_terminal::{demo_scene, init_logging, AppConfig, RenderError, TerminalApp};
use std::env;
use std::fs;

fn main() -> Result<(), RenderError> {
    let config = AppConfig::default();
    init_logging(config.logging.clone());

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <obj-file> [#rrggbb]", args[0]);
        eprintln!("\nNo OBJ file provided, using the demo scene...");
        let mut app = TerminalApp::new(demo_scene(), config)?;
        return app.run();
    }

    let obj_path = &args[1];
    let color = args
        .get(2)
        .and_then(|hex| Color::from_hex(hex))
        .unwrap_or(Color::rgb(160, 160, 170));

    println!("Loading OBJ file: {}", obj_path);

    let data = fs::read(obj_path)?;
    let shape = obj::parse_obj_bytes(&data)?;

    println!("Loaded {} faces", shape.len());
    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut scene = Scene::new();
    scene.add_shape(shape, color);

    let mut app = TerminalApp::new(scene, config)?;
    app.run()?;

    println!("Thank you for using ISO3D Terminal Renderer!");
    Ok(())
}
