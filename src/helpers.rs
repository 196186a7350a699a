use palette::Srgb;
use std::fmt::{Debug, Formatter};
use std::ops::Deref;
use std::time::{Duration, Instant};

/// Colour in photon units, `0.0..=255.0` per channel at unit exposure
pub type ColorType = Srgb<f32>;

#[inline(always)]
pub const fn black() -> ColorType {
    Srgb::new(0.0, 0.0, 0.0)
}

#[inline(always)]
pub const fn grey(photons: f32) -> ColorType {
    Srgb::new(photons, photons, photons)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Pixel(pub Srgb<u8>);

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(Srgb::new(r, g, b))
    }

    /// Quantise a photon colour, dividing by `exposure` and truncating each
    /// channel into `0..=255`
    pub fn from_photons(color: ColorType, exposure: f32) -> Self {
        let channel = |photons: f32| (photons / exposure).clamp(0.0, 255.0) as u8;

        Self::new(
            channel(color.red),
            channel(color.green),
            channel(color.blue),
        )
    }
}

impl From<(u8, u8, u8)> for Pixel {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl Deref for Pixel {
    type Target = Srgb<u8>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Wall clock timing between successive checkpoints
pub struct RenderTiming {
    start: Instant,
    last: Instant,
    lap: Duration,
    laps: u32,
}

impl RenderTiming {
    /// Close the current lap and start a new one
    pub fn next(&mut self) -> Duration {
        let now = Instant::now();
        self.lap = now - self.last;
        self.last = now;
        self.laps += 1;
        self.lap
    }

    pub fn total(&self) -> Duration {
        self.last - self.start
    }

    pub fn lap(&self) -> Duration {
        self.lap
    }
}

impl Default for RenderTiming {
    fn default() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            lap: Duration::ZERO,
            laps: 0,
        }
    }
}

impl Debug for RenderTiming {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lap #{} took {:.3?} ({:.3?} total)",
            self.laps,
            self.lap,
            self.total()
        )
    }
}
