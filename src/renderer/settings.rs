use crate::error::{RenderError, Result};
use crate::{WINDOW_HEIGHT, WINDOW_WIDTH};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Samples per pixel used unless configured otherwise
pub const DEFAULT_SAMPLES: usize = if cfg!(feature = "anti_aliasing") { 6 } else { 1 };

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    /// Samples per pixel, one samples the pixel centre
    pub samples: usize,
    /// Photons mapping to full intensity are `255 × exposure`
    pub exposure: f32,
    /// Worker threads, `None` uses one per core
    pub threads: Option<usize>,
    /// Seed of the sampling jitter
    pub seed: u64,
}

impl RenderSettings {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples == 0 {
            return Err(RenderError::InvalidSamples);
        }
        if !(self.exposure.is_finite() && self.exposure > 0.0) {
            return Err(RenderError::InvalidExposure(self.exposure));
        }

        Ok(())
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            samples: DEFAULT_SAMPLES,
            exposure: 1.0,
            threads: None,
            seed: 0,
        }
    }
}

/// Shared flag asking a running render to stop
///
/// Checked before each row is started, rows already in progress complete.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
