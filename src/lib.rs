#![cfg(target_arch = "wasm32")]
use crate::constants::{
    CANVAS_ID, FRAGMENT_SHADER_URL, SURFACE_TEXTURE_URL, VERTEX_SHADER_URL,
};
use crate::core::{FrameDriver, Readiness, RippleStore, ShadingParams, SimClock};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod core;
mod dom;
mod error;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    if let Some(window) = web::window() {
        dom::listen(window.as_ref(), "resize", move |_ev: web::Event| {
            dom::sync_canvas_backing_size(&canvas_resize);
        });
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ripple-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some(document) = dom::window_document() {
                overlay::show_status(&document, &format!("Startup failed: {}", e));
            }
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
    wire_canvas_resize(&canvas);

    // Shared state mutated by clicks and the panel, read by the driver each tick
    let clock = SimClock::new();
    let store = Rc::new(RefCell::new(RippleStore::new()));
    let params = Rc::new(RefCell::new(ShadingParams::default()));
    let driver = Rc::new(RefCell::new(FrameDriver::new(store.clone(), params.clone())));

    events::wire_click_ripples(&canvas, store.clone(), clock);
    match events::wire_param_panel(&document, params.clone()) {
        Err(e) if e.is_fatal() => return Err(e.into()),
        Err(e) => log::warn!("[panel] control surface disabled: {}", e),
        Ok(_) => {}
    }

    // Idle until the program is built and the texture is on the GPU
    let assets =
        assets::load_startup_assets(VERTEX_SHADER_URL, FRAGMENT_SHADER_URL, SURFACE_TEXTURE_URL)
            .await?;
    let mut readiness = Readiness::default();
    let gpu = render::GpuContext::acquire(&canvas).await?;
    let surface_texture = gpu.upload_surface_texture(&assets.image).await?;
    readiness.mark_texture_ready();
    let pass = gpu.build_program(&assets, &surface_texture).await?;
    readiness.mark_shaders_ready();

    let renderer = render::RippleRenderer::new(gpu, &canvas, surface_texture, pass);
    driver.borrow_mut().start(renderer, &readiness)?;
    overlay::hide_status(&document);

    frame::start_loop(driver, clock);
    Ok(())
}
