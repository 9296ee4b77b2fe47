use thiserror::Error;

/// Failure taxonomy for the ripple effect.
///
/// `Setup` is fatal and aborts startup. `ResourceUnavailable` is logged and the
/// affected control is skipped. `CapacityExceeded` never reaches the user: the
/// click is dropped and `RippleStore::add` reports `false`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RippleError {
    #[error("setup failed: {0}")]
    Setup(String),
    #[error("resource unavailable: {0}")]
    ResourceUnavailable(String),
    #[error("ripple store full ({capacity} active)")]
    CapacityExceeded { capacity: usize },
    #[error("ripple duration must be positive, got {0}")]
    InvalidDuration(f32),
    #[error("frame driver cannot run before shaders and texture are ready")]
    NotReady,
}

impl RippleError {
    pub fn setup(msg: impl Into<String>) -> Self {
        Self::Setup(msg.into())
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Setup(_) | Self::NotReady)
    }
}
