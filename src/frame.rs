use crate::core::{DriverState, FrameDriver, SimClock, TickOutcome};
use crate::render::RippleRenderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type Driver = FrameDriver<RippleRenderer>;

const STATS_EVERY_FRAMES: u64 = 600;

fn frame(driver: &mut Driver, clock: &SimClock) {
    match driver.tick(clock.now_sec()) {
        Ok(TickOutcome::Drawn { ripple_count }) => {
            if driver.frames() % STATS_EVERY_FRAMES == 0 {
                log::debug!("[frame] {} frames, {} ripples", driver.frames(), ripple_count);
            }
        }
        Ok(TickOutcome::Idle) => {}
        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
            if let Some(r) = driver.stage_mut() {
                r.reconfigure();
            }
        }
        Err(wgpu::SurfaceError::Timeout) => log::warn!("[frame] surface timeout, frame skipped"),
        Err(e) => log::error!("render error: {:?}", e),
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Tick the driver once per display refresh, forever.
pub fn start_loop(driver: Rc<RefCell<Driver>>, clock: SimClock) {
    if driver.borrow().state() == DriverState::Idle {
        log::warn!("[frame] loop started before the driver; frames stay blank");
    }
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame(&mut driver.borrow_mut(), &clock);
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
}
