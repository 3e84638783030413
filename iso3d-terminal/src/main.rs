/// ISO3D Terminal Demo - Isometric Primitives
///
/// Paints a small scene of primitives back to front in the terminal.
/// Controls:
///   - A/D / Left/Right: Spin around the vertical axis
///   - W/S / Up/Down: Tilt
///   - E/R: Roll
///   - P / Space: Pause the automatic spin
///   - Q/ESC: Quit

use iso3d_terminal::{demo_scene, init_logging, AppConfig, RenderError, TerminalApp};

fn main() -> Result<(), RenderError> {
    let config = AppConfig::default();
    init_logging(config.logging.clone());

    println!("ISO3D Terminal Renderer - Loading...");
    let scene = demo_scene();

    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    // Run the terminal app
    let mut app = TerminalApp::new(scene, config)?;
    app.run()?;

    println!("Thank you for using ISO3D Terminal Renderer!");
    Ok(())
}
