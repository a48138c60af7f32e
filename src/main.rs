//! Rock Fall entry point
//!
//! In the browser this drives the demo from requestAnimationFrame onto a
//! 400x600 canvas. Natively it runs the same frames headless and prints
//! the final state as JSON.

#[cfg(target_arch = "wasm32")]
mod wasm_demo {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

    use rock_fall::FrameDriver;
    use rock_fall::consts::*;
    use rock_fall::platform::{FrameClock, SetupError};
    use rock_fall::renderer::CanvasSurface;

    const CANVAS_ID: &str = "canvas";

    /// Demo instance holding all state
    struct Demo {
        driver: FrameDriver,
        surface: CanvasSurface,
        clock: FrameClock,
    }

    impl Demo {
        fn on_animation_frame(&mut self, time: f64) {
            if !self.clock.should_step(time) {
                return;
            }
            let fps = self.clock.fps();
            self.driver.frame(&mut self.surface, fps);
        }
    }

    /// Find `#canvas`, creating it under <body> if the page has none
    fn find_or_create_canvas(document: &Document) -> Result<HtmlCanvasElement, SetupError> {
        let element = match document.get_element_by_id(CANVAS_ID) {
            Some(element) => element,
            None => {
                let element = document.create_element("canvas")?;
                element.set_id(CANVAS_ID);
                let body = document.body().ok_or(SetupError::NoBody)?;
                body.append_child(&element)?;
                element
            }
        };
        element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SetupError::NotACanvas(CANVAS_ID.to_string()))
    }

    pub fn run() -> Result<(), SetupError> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Rock Fall starting...");

        let window = web_sys::window().ok_or(SetupError::NoWindow)?;
        let document = window.document().ok_or(SetupError::NoDocument)?;

        let canvas = find_or_create_canvas(&document)?;
        let width = CANVAS_WIDTH as u32;
        let height = CANVAS_HEIGHT as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(SetupError::NoContext2d)?
            .dyn_into()
            .map_err(|_| SetupError::NoContext2d)?;

        let seed = js_sys::Date::now() as u64;
        let demo = Rc::new(RefCell::new(Demo {
            driver: FrameDriver::new(seed),
            surface: CanvasSurface::new(ctx, width, height),
            clock: FrameClock::new(TARGET_FPS),
        }));

        log::info!("Demo initialized with seed: {}", seed);

        request_animation_frame(demo);

        log::info!("Rock Fall running!");
        Ok(())
    }

    fn request_animation_frame(demo: Rc<RefCell<Demo>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window disappeared, stopping");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(demo, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(demo: Rc<RefCell<Demo>>, time: f64) {
        demo.borrow_mut().on_animation_frame(time);
        request_animation_frame(demo);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), wasm_bindgen::JsValue> {
    wasm_demo::run().map_err(Into::into)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Length of the native headless run
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_SECONDS: u64 = 10;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use rock_fall::FrameDriver;
    use rock_fall::consts::TARGET_FPS;
    use rock_fall::renderer::RecordingSurface;

    env_logger::init();
    log::info!("Rock Fall (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to watch the rock fall");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    log::info!("Seed: {}", seed);

    let mut driver = FrameDriver::new(seed);
    let mut surface = RecordingSurface::new();
    let fps_frames = TARGET_FPS as u64;
    let total_frames = HEADLESS_SECONDS * fps_frames;
    let mut wall_hits = 0u32;

    for _ in 0..total_frames {
        surface.clear();
        let outcome = driver.frame(&mut surface, TARGET_FPS);
        if outcome.contact.is_some() {
            wall_hits += 1;
        }

        let state = &driver.state;
        if state.frame % fps_frames == 0 {
            log::info!(
                "t={}s depth={}m camera={:.1} draw calls={}",
                state.frame / fps_frames,
                state.depth(),
                state.camera.y,
                surface.commands().len()
            );
        }
    }

    log::info!("{} wall hits in {} frames", wall_hits, total_frames);

    match serde_json::to_string_pretty(&driver.state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize final state: {}", e),
    }
}
