//! Browser host
//!
//! Binds the background to a `<canvas>` with a 2D context, drives it from
//! `requestAnimationFrame`, and listens for window resizes. Exactly one frame
//! request is outstanding while mounted; `unmount` (or dropping the handle)
//! cancels it and detaches the listener.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use glam::DVec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::background::Background;
use crate::consts::FALLBACK_BACKGROUND;
use crate::error::BackgroundError;
use crate::platform::Viewport;
use crate::renderer::{CompositeMode, Glow, GradientShape, Paint, Rgba, Surface};
use crate::settings::FieldConfig;

/// Canvas id used when the page doesn't name one
pub const DEFAULT_CANVAS_ID: &str = "bg-canvas";

/// Canvas 2D implementation of `Surface`
pub struct WebSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl WebSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, BackgroundError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(BackgroundError::ContextUnavailable)?;
        Ok(Self { canvas, ctx })
    }

    fn apply_paint(&self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Paint::Gradient(gradient) => {
                let created = match gradient.shape {
                    GradientShape::Linear { from, to } => {
                        Ok(self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y))
                    }
                    GradientShape::Radial {
                        center,
                        inner_radius,
                        outer_radius,
                    } => self.ctx.create_radial_gradient(
                        center.x,
                        center.y,
                        inner_radius,
                        center.x,
                        center.y,
                        outer_radius,
                    ),
                };
                match created {
                    Ok(g) => {
                        for stop in gradient.stops {
                            let _ = g.add_color_stop(stop.offset as f32, &stop.color.to_css());
                        }
                        self.ctx.set_fill_style_canvas_gradient(&g);
                    }
                    Err(e) => log::warn!("Gradient creation failed: {:?}", e),
                }
            }
        }
    }
}

impl Surface for WebSurface {
    fn configure(&mut self, viewport: &Viewport) {
        let (width, height) = viewport.surface_size();
        self.canvas.set_width(width);
        self.canvas.set_height(height);

        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", viewport.width));
        let _ = style.set_property("height", &format!("{}px", viewport.height));

        let [a, b, c, d, e, f] = viewport.transform();
        if let Err(err) = self.ctx.set_transform(a, b, c, d, e, f) {
            log::warn!("set_transform failed: {:?}", err);
        }
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, origin: DVec2, size: DVec2, paint: &Paint) {
        self.apply_paint(paint);
        self.ctx.fill_rect(origin.x, origin.y, size.x, size.y);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba, glow: Option<Glow>) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&color.to_css());
        if let Some(glow) = glow {
            self.ctx.set_shadow_blur(glow.blur);
            self.ctx.set_shadow_color(&glow.color.to_css());
        }
        let _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
        if glow.is_some() {
            self.ctx.set_shadow_blur(0.0);
        }
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        let _ = self.ctx.set_global_composite_operation(mode.as_str());
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}

/// Current window viewport
fn current_viewport(window: &Window) -> Viewport {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width, height, window.device_pixel_ratio())
}

fn now_ms(window: &Window) -> f64 {
    window
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Find the canvas by id, or create one at the end of `<body>`
fn find_or_create_canvas(document: &Document, id: &str) -> Result<HtmlCanvasElement, BackgroundError> {
    if let Some(el) = document.get_element_by_id(id) {
        return el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| BackgroundError::Js(format!("#{} is not a canvas", id)));
    }

    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| BackgroundError::Js("created element is not a canvas".into()))?;
    canvas.set_id(id);
    document
        .body()
        .ok_or(BackgroundError::NoDocument)?
        .append_child(&canvas)?;
    log::debug!("Created #{} canvas", id);
    Ok(canvas)
}

/// Full-viewport, behind content, ignores pointer input
fn style_canvas(canvas: &HtmlCanvasElement) -> Result<(), BackgroundError> {
    let style = canvas.style();
    for (name, value) in [
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("z-index", "-10"),
        ("pointer-events", "none"),
        ("background", FALLBACK_BACKGROUND),
    ] {
        style.set_property(name, value)?;
    }
    Ok(())
}

struct Host {
    window: Window,
    background: Background,
    surface: WebSurface,
    frame_id: Option<i32>,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Handle to a mounted background. Dropping it unmounts.
#[wasm_bindgen]
pub struct StarfieldHandle {
    host: Option<Rc<RefCell<Host>>>,
    frame_callback: FrameCallback,
    resize_callback: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

#[wasm_bindgen]
impl StarfieldHandle {
    /// Whether the animation loop is running
    pub fn is_animating(&self) -> bool {
        self.host
            .as_ref()
            .is_some_and(|host| host.borrow().background.is_mounted())
    }

    /// Cancel the pending frame and detach the resize listener
    pub fn unmount(&mut self) {
        if let Some(host) = self.host.take() {
            let mut h = host.borrow_mut();
            if let Some(id) = h.frame_id.take() {
                let _ = h.window.cancel_animation_frame(id);
            }
            if let Some(callback) = self.resize_callback.take() {
                let _ = h
                    .window
                    .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
            }
            h.background.unmount();
        }
        // Breaks the closure's reference to itself
        self.frame_callback.borrow_mut().take();
    }
}

impl StarfieldHandle {
    /// Handle for a page that fell back to the static background
    fn inert() -> Self {
        Self {
            host: None,
            frame_callback: Rc::new(RefCell::new(None)),
            resize_callback: None,
        }
    }
}

impl Drop for StarfieldHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn request_frame(host: &mut Host, callback: &FrameCallback) {
    if let Some(cb) = callback.borrow().as_ref() {
        match host.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => host.frame_id = Some(id),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

fn mount(canvas_id: &str) -> Result<StarfieldHandle, BackgroundError> {
    let window = web_sys::window().ok_or(BackgroundError::NoWindow)?;
    let document = window.document().ok_or(BackgroundError::NoDocument)?;

    let canvas = find_or_create_canvas(&document, canvas_id)?;
    style_canvas(&canvas)?;
    let mut surface = WebSurface::new(canvas)?;

    let config = FieldConfig::load();
    let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
    let background = Background::mount(
        config,
        current_viewport(&window),
        seed,
        now_ms(&window),
        &mut surface,
    );

    let host = Rc::new(RefCell::new(Host {
        window: window.clone(),
        background,
        surface,
        frame_id: None,
    }));

    // Animation loop
    let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
    {
        let host = host.clone();
        let callback = frame_callback.clone();
        *frame_callback.borrow_mut() = Some(Closure::new(move |now: f64| {
            let mut h = host.borrow_mut();
            h.frame_id = None;

            let viewport = current_viewport(&h.window);
            let Host {
                background,
                surface,
                ..
            } = &mut *h;
            background.observe_viewport(viewport);
            let outcome = background.frame(now, surface);

            if outcome.wants_next_frame() {
                request_frame(&mut h, &callback);
            }
        }));
    }

    // Resize only queues; the next frame applies it
    let resize_callback = {
        let host = host.clone();
        let window = window.clone();
        Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Ok(mut h) = host.try_borrow_mut() {
                h.background.request_resize(current_viewport(&window));
            }
        })
    };
    window.add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref())?;

    request_frame(&mut host.borrow_mut(), &frame_callback);
    log::info!("Starfield background running on #{}", canvas_id);

    Ok(StarfieldHandle {
        host: Some(host),
        frame_callback,
        resize_callback: Some(resize_callback),
    })
}

fn init_logging() {
    console_error_panic_hook::set_once();
    // Already initialized on a second mount
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Mount the background onto `#canvas_id` (created if missing).
///
/// Without a 2D context the canvas keeps its static fallback color and an
/// inert handle is returned.
#[wasm_bindgen]
pub fn mount_background(canvas_id: &str) -> Result<StarfieldHandle, JsValue> {
    init_logging();
    match mount(canvas_id) {
        Ok(handle) => Ok(handle),
        Err(e) if e.is_degradable() => {
            log::warn!("{}; keeping static background", e);
            Ok(StarfieldHandle::inert())
        }
        Err(e) => {
            log::error!("Failed to mount background: {}", e);
            Err(e.into())
        }
    }
}
