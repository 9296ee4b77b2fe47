use crate::constants::{MAX_RIPPLES, RIPPLE_STRIDE};
use crate::core::params::ShadingParams;
use crate::core::ripples::RippleStore;
use crate::error::RippleError;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;

/// Everything the shading program consumes for one frame. Uploaded in full
/// every tick whether or not anything changed.
#[derive(Clone, Copy, Debug)]
pub struct FrameInputs<'a> {
    pub time: f32,
    pub ripples: &'a [[f32; RIPPLE_STRIDE]; MAX_RIPPLES],
    pub ripple_count: u32,
    pub params: &'a ShadingParams,
}

/// The fixed per-pixel program the driver configures and draws with.
pub trait ShadingStage {
    type Error: std::fmt::Debug;

    fn configure(&mut self, inputs: &FrameInputs<'_>) -> Result<(), Self::Error>;

    /// One draw covering the whole output surface.
    fn draw(&mut self) -> Result<(), Self::Error>;
}

/// Startup gate: the driver may only run once the shader program is built and
/// the surface texture has been uploaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Readiness {
    shaders: bool,
    texture: bool,
}

impl Readiness {
    pub fn mark_shaders_ready(&mut self) {
        self.shaders = true;
    }

    pub fn mark_texture_ready(&mut self) {
        self.texture = true;
    }

    pub fn is_ready(&self) -> bool {
        self.shaders && self.texture
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Drawn { ripple_count: usize },
}

/// Monotonic simulation clock, seconds since the page started the effect.
#[derive(Clone, Copy, Debug)]
pub struct SimClock {
    epoch: Instant,
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SimClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    #[inline]
    pub fn now_sec(&self) -> f32 {
        self.epoch.elapsed().as_secs_f32()
    }
}

/// Per-refresh orchestration: expire ripples, configure the stage, draw.
pub struct FrameDriver<S: ShadingStage> {
    store: Rc<RefCell<RippleStore>>,
    params: Rc<RefCell<ShadingParams>>,
    stage: Option<S>,
    frames: u64,
}

impl<S: ShadingStage> FrameDriver<S> {
    pub fn new(store: Rc<RefCell<RippleStore>>, params: Rc<RefCell<ShadingParams>>) -> Self {
        Self {
            store,
            params,
            stage: None,
            frames: 0,
        }
    }

    pub fn state(&self) -> DriverState {
        if self.stage.is_some() {
            DriverState::Running
        } else {
            DriverState::Idle
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn stage(&self) -> Option<&S> {
        self.stage.as_ref()
    }

    pub fn stage_mut(&mut self) -> Option<&mut S> {
        self.stage.as_mut()
    }

    /// Idle → Running. Refused until `readiness` reports both the program and
    /// the texture as done; a running driver stays on its current stage.
    pub fn start(&mut self, stage: S, readiness: &Readiness) -> Result<(), RippleError> {
        if !readiness.is_ready() {
            return Err(RippleError::NotReady);
        }
        if self.stage.is_none() {
            self.stage = Some(stage);
            log::info!("[driver] running");
        }
        Ok(())
    }

    /// Advance one frame at `now_sec`. Store expiry always completes before the
    /// stage sees the buffer. An idle driver touches nothing.
    pub fn tick(&mut self, now_sec: f32) -> Result<TickOutcome, S::Error> {
        let Some(stage) = self.stage.as_mut() else {
            return Ok(TickOutcome::Idle);
        };
        let ripple_count = {
            let mut store = self.store.borrow_mut();
            let frame = store.tick(now_sec);
            let params = self.params.borrow();
            stage.configure(&FrameInputs {
                time: now_sec,
                ripples: frame.slots,
                ripple_count: frame.count as u32,
                params: &params,
            })?;
            frame.count
        };
        stage.draw()?;
        self.frames += 1;
        Ok(TickOutcome::Drawn { ripple_count })
    }
}
