use crate::camera::Camera;
use crate::helpers::ColorType;
use crate::raytracing::{Intersectable, emission};
use crate::scalar::Scalar;
use crate::scene::{Light, LightModel};
use crate::vector::Vector;

/// Smallest ray parameter accepted for a strike unless configured otherwise
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Geometry, lighting and background of one image
///
/// Nothing in a scene changes while it is being rendered.
#[derive(Debug, Clone)]
pub struct Scene<V, G, L = LightModel<V>>
where
    V: Vector,
{
    pub geometry: G,
    pub light: L,
    pub background: ColorType,
    pub epsilon: V::Scalar,
}

impl<V, G, L> Scene<V, G, L>
where
    V: Vector,
    G: Intersectable<V>,
    L: Light<V>,
{
    pub fn new(geometry: G, light: L, background: ColorType) -> Self {
        Self {
            geometry,
            light,
            background,
            epsilon: V::Scalar::from_literal(DEFAULT_EPSILON),
        }
    }

    #[must_use]
    pub fn with_epsilon(mut self, epsilon: V::Scalar) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Photons arriving at image position `(x, y)` of `camera`
    pub fn evaluate<C>(&self, camera: &C, x: V::Scalar, y: V::Scalar) -> ColorType
    where
        C: Camera<V> + ?Sized,
    {
        let observer = camera.ray(x, y);

        match self.geometry.intersects(&observer, self.epsilon) {
            None => self.background,
            Some(hit) => {
                emission(&observer, &hit, &self.geometry)
                    + self.light.light(&hit, &self.geometry, self.epsilon)
            }
        }
    }
}
