//! Starfield background entry point
//!
//! On the web this mounts the background onto `#bg-canvas` for the life of
//! the page. Natively it runs a headless simulation and logs draw stats.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    let handle = starfield_bg::web::mount_background(starfield_bg::web::DEFAULT_CANVAS_ID)?;
    // The page never unmounts the standalone background
    std::mem::forget(handle);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use starfield_bg::consts::NOMINAL_FRAME_MS;
    use starfield_bg::{Background, FieldConfig, FrameOutcome, RecordingSurface, Viewport};

    env_logger::init();
    log::info!("Starfield background (native) starting headless run");

    let mut args = std::env::args().skip(1);
    let width = args.next().and_then(|a| a.parse().ok()).unwrap_or(1920.0);
    let height = args.next().and_then(|a| a.parse().ok()).unwrap_or(1080.0);
    let frames: u32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(600);

    let config = FieldConfig::load();
    let seed = config.seed.unwrap_or(0x5eed);
    let mut surface = RecordingSurface::new();
    let mut background =
        Background::mount(config, Viewport::new(width, height, 1.0), seed, 0.0, &mut surface);

    let mut total_draws = 0usize;
    let mut total_highlighted = 0usize;
    for i in 1..=frames {
        surface.reset();
        let now = i as f64 * NOMINAL_FRAME_MS;
        if let FrameOutcome::Rendered(stats) = background.frame(now, &mut surface) {
            total_draws += surface.calls.len();
            total_highlighted += stats.highlighted;
        }
    }

    let field = background.field();
    println!(
        "{}x{}: {} particles, band {:.1}px, {} frames",
        width,
        height,
        field.particles.len(),
        field.band_width,
        background.frames()
    );
    if frames > 0 {
        println!(
            "avg {:.1} draw calls/frame, avg {:.1} highlighted/frame, sweep angle {:.4} rad",
            total_draws as f64 / frames as f64,
            total_highlighted as f64 / frames as f64,
            field.angle
        );
    }

    background.unmount();
}
