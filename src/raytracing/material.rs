use crate::helpers::{ColorType, black};
use palette::Srgb;

/// Surface material properties
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Material {
    /// Matte reflectance, `0.0..=1.0` per channel
    pub albedo: ColorType,

    /// Light emitted by the surface itself, in photons
    pub emission: ColorType,
}

impl Material {
    pub const fn new(albedo: ColorType, emission: ColorType) -> Self {
        Self { albedo, emission }
    }

    /// Create a simple diffuse material
    pub const fn matte(albedo: ColorType) -> Self {
        Self::new(albedo, black())
    }

    pub const fn emissive(emission: ColorType) -> Self {
        Self::new(black(), emission)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::matte(Srgb::new(1.0, 1.0, 1.0))
    }
}
