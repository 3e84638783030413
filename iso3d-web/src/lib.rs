/// ISO3D Web - Canvas 2D painter for isometric scenes
///
/// Builds a scene from JavaScript, orders its faces with the core depth
/// heuristic and fills them back to front on a `<canvas>`.

use iso3d_core::primitives::{cylinder, prism, pyramid};
use iso3d_core::{
    obj, Color, Face, IsometricProjection, Point, RotationState, Scene, Shape, Transform,
};
use nalgebra::Point2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Default screen pixels per scene unit
const DEFAULT_SCALE: f64 = 70.0;

#[wasm_bindgen]
pub struct WebRenderer {
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    projection: IsometricProjection,
    scene: Scene,
    rotation: RotationState,
}

#[wasm_bindgen]
impl WebRenderer {
    /// Attach to the canvas element with id `canvas_id`
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WebRenderer, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id {:?}", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()?;

        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let width = canvas.width() as f64;
        let height = canvas.height() as f64;

        Ok(WebRenderer {
            context,
            width,
            height,
            projection: IsometricProjection::for_surface(width, height, DEFAULT_SCALE),
            scene: Scene::new(),
            rotation: RotationState::zero(),
        })
    }

    /// Screen pixels per scene unit
    pub fn set_scale(&mut self, scale: f64) {
        self.projection.scale = scale;
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_prism(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        dx: f64,
        dy: f64,
        dz: f64,
        color: &str,
    ) -> Result<(), JsValue> {
        let color = parse_color(color)?;
        self.scene.add_shape(prism(Point::new(x, y, z), dx, dy, dz), color);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_pyramid(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        dx: f64,
        dy: f64,
        dz: f64,
        color: &str,
    ) -> Result<(), JsValue> {
        let color = parse_color(color)?;
        self.scene.add_shape(pyramid(Point::new(x, y, z), dx, dy, dz), color);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_cylinder(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        radius: f64,
        vertices: u32,
        height: f64,
        color: &str,
    ) -> Result<(), JsValue> {
        let color = parse_color(color)?;
        let shape = cylinder(Point::new(x, y, z), radius, vertices as usize, height);
        self.scene.add_shape(shape, color);
        Ok(())
    }

    /// Import OBJ text and place it at `(x, y, z)`
    pub fn add_obj(&mut self, text: &str, x: f64, y: f64, z: f64, color: &str) -> Result<(), JsValue> {
        let color = parse_color(color)?;
        let shape = load_obj(text, Point::new(x, y, z)).map_err(|e| JsValue::from_str(&e))?;
        self.scene.add_shape(shape, color);
        Ok(())
    }

    /// Remove every shape
    pub fn clear(&mut self) {
        self.scene.clear();
    }

    /// Accumulate rotation (radians), applied about the scene origin
    pub fn rotate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.rotation.rotate(dx, dy, dz);
    }

    /// Paint the scene back to front
    pub fn render(&self) -> Result<(), JsValue> {
        let rotation = self.rotation;
        let frame = self
            .scene
            .map_shapes(|shape| rotation.apply(shape, Point::ORIGIN));
        let faces = frame.faces();

        self.context.clear_rect(0.0, 0.0, self.width, self.height);
        for face in &faces {
            self.fill_face(face);
        }

        log::debug!("painted {} faces", faces.len());
        Ok(())
    }
}

impl WebRenderer {
    fn fill_face(&self, face: &Face) {
        let points: Vec<Point2<f64>> = self.projection.project_path(&face.path);
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        let ctx = &self.context;
        ctx.begin_path();
        ctx.move_to(first.x, first.y);
        for point in rest {
            ctx.line_to(point.x, point.y);
        }
        ctx.close_path();

        // Stroking in the fill color hides the seams between faces
        let css = face.color.to_hex();
        ctx.set_global_alpha(face.color.a / 100.0);
        ctx.set_fill_style_str(&css);
        ctx.set_stroke_style_str(&css);
        ctx.set_line_width(1.0);
        ctx.fill();
        ctx.stroke();
    }
}

fn parse_color(hex: &str) -> Result<Color, JsValue> {
    Color::from_hex(hex).ok_or_else(|| JsValue::from_str(&format!("invalid color {:?}", hex)))
}

fn load_obj(text: &str, origin: Point) -> Result<Shape, String> {
    let shape = obj::parse_obj(text).map_err(|e| e.to_string())?;
    Ok(shape.translate(origin.x, origin.y, origin.z))
}
