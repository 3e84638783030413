/// Terminal-based painter for isometric scenes
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    terminal,
};
use iso3d_core::primitives::{cylinder, prism, pyramid, rectangle, star};
use iso3d_core::{Color, Point, RotationState, Scene, Shape};
use std::io::{stdout, Write};
use std::time::{Duration, Instant};

pub mod error;
pub mod logging;
pub mod renderer;

pub use error::RenderError;
pub use logging::{init_logging, LoggingConfig};
pub use renderer::TextRenderer;

/// Runtime settings for [`TerminalApp`]
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub target_fps: u32,
    /// Cells per scene unit along the x axis
    pub scale: f64,
    /// Radians added around z every frame; 0 disables auto-spin
    pub spin: f64,
    /// Radians per key press
    pub rotation_step: f64,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target_fps: 30,
            scale: 6.0,
            spin: 0.02,
            rotation_step: 0.1,
            logging: LoggingConfig::default(),
        }
    }
}

/// A small scene with one of each primitive, added back to front
pub fn demo_scene() -> Scene {
    let mut scene = Scene::new();

    scene.add_path(
        rectangle(Point::new(-1.0, -1.0, 0.0), 7.0, 7.0),
        Color::rgb(90, 90, 100),
    );
    scene.add_shape(prism(Point::new(3.0, 2.0, 0.0), 2.0, 2.0, 1.5), Color::rgb(50, 160, 60));
    scene.add_shape(pyramid(Point::new(0.0, 3.5, 0.0), 2.0, 2.0, 2.0), Color::rgb(180, 100, 40));
    scene.add_shape(
        cylinder(Point::new(1.5, 1.0, 0.0), 1.0, 24, 2.0),
        Color::rgb(40, 110, 190),
    );
    scene.add_shape(
        Shape::extrude(&star(Point::new(4.5, 0.0, 0.0), 1.0, 0.5, 5), 0.3),
        Color::rgb(200, 180, 40),
    );

    scene
}

/// Mean of every point in the scene, used as the rotation pivot
pub fn scene_center(scene: &Scene) -> Point {
    let (sum, count) = scene
        .shapes()
        .flat_map(|shape| shape.iter())
        .flat_map(|path| path.iter())
        .fold((Point::ORIGIN, 0usize), |(sum, count), p| {
            (sum.translate(p.x, p.y, p.z), count + 1)
        });

    if count == 0 {
        return Point::ORIGIN;
    }

    let n = count as f64;
    Point::new(sum.x / n, sum.y / n, sum.z / n)
}

// Both steps run even if one fails, so the screen is never left behind
fn restore_terminal() -> Result<(), RenderError> {
    let raw = terminal::disable_raw_mode();
    let screen = execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show);
    raw?;
    screen?;
    Ok(())
}

/// The loop's error wins over a cleanup error
fn first_error(
    result: Result<(), RenderError>,
    cleanup: Result<(), RenderError>,
) -> Result<(), RenderError> {
    if let (Err(_), Err(e)) = (&result, &cleanup) {
        log::error!("failed to restore terminal: {}", e);
    }
    result.and(cleanup)
}

/// Main application struct for terminal scene rendering
pub struct TerminalApp {
    scene: Scene,
    pivot: Point,
    rotation: RotationState,
    config: AppConfig,
    renderer: TextRenderer,
    running: bool,
    paused: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(scene: Scene, config: AppConfig) -> Result<Self, RenderError> {
        let (width, height) = terminal::size()?;
        let pivot = scene_center(&scene);

        Ok(Self {
            pivot,
            scene,
            rotation: RotationState::zero(),
            renderer: TextRenderer::new(width as usize, height as usize, config.scale),
            config,
            running: true,
            paused: false,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> Result<(), RenderError> {
        log::info!("starting terminal renderer with {} shapes", self.scene.len());

        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();
        first_error(result, restore_terminal())
    }

    fn main_loop(&mut self) -> Result<(), RenderError> {
        let target_frame_time = Duration::from_millis(1000 / self.config.target_fps.max(1) as u64);

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?);
            }

            self.update();
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let step = self.config.rotation_step;

        match event {
            Event::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('p') | KeyCode::Char(' ') => {
                    self.paused = !self.paused;
                }
                KeyCode::Char('w') | KeyCode::Up => {
                    self.rotation.rotate(step, 0.0, 0.0);
                }
                KeyCode::Char('s') | KeyCode::Down => {
                    self.rotation.rotate(-step, 0.0, 0.0);
                }
                KeyCode::Char('a') | KeyCode::Left => {
                    self.rotation.rotate(0.0, 0.0, -step);
                }
                KeyCode::Char('d') | KeyCode::Right => {
                    self.rotation.rotate(0.0, 0.0, step);
                }
                KeyCode::Char('e') => {
                    self.rotation.rotate(0.0, step, 0.0);
                }
                KeyCode::Char('r') => {
                    self.rotation.rotate(0.0, -step, 0.0);
                }
                KeyCode::Char('0') => {
                    self.rotation = RotationState::zero();
                }
                _ => {}
            },
            Event::Resize(width, height) => {
                log::debug!("terminal resized to {}x{}", width, height);
                self.renderer.resize(width as usize, height as usize);
            }
            _ => {}
        }
    }

    fn update(&mut self) {
        if !self.paused {
            self.rotation.rotate(0.0, 0.0, self.config.spin);
        }
    }

    fn render(&mut self) -> Result<(), RenderError> {
        let rotation = self.rotation;
        let pivot = self.pivot;
        let frame = self.scene.map_shapes(|shape| rotation.apply(shape, pivot));

        self.renderer.clear();
        self.renderer.render_faces(&frame.faces());

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(TermColor::Yellow),
            Print(format!(
                "ISO3D Terminal | FPS: {:.1} | A/D=Spin W/S=Tilt E/R=Roll P=Pause 0=Reset Q=Quit",
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
