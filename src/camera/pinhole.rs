use crate::camera::{Camera, film_position};
use crate::geometry::Ray;
use crate::scalar::Scalar;
use crate::vector::Vector;

/// Perspective camera at the origin looking along `+z`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PinholeCamera<V: Vector> {
    film: (V::Scalar, V::Scalar),
    image: (V::Scalar, V::Scalar),
    focal_length: V::Scalar,
}

impl<V: Vector> PinholeCamera<V> {
    pub fn new(
        film_width: V::Scalar,
        film_height: V::Scalar,
        width: usize,
        height: usize,
        focal_length: V::Scalar,
    ) -> Self {
        Self {
            film: (film_width, film_height),
            image: (
                V::Scalar::from_literal(width as f64),
                V::Scalar::from_literal(height as f64),
            ),
            focal_length,
        }
    }

    pub fn focal_length(&self) -> V::Scalar {
        self.focal_length
    }
}

impl<V: Vector> Camera<V> for PinholeCamera<V> {
    fn ray(&self, x: V::Scalar, y: V::Scalar) -> Ray<V> {
        let (fx, fy) = film_position(self.film, self.image, x, y);
        Ray::new(V::zero(), V::new(fx, fy, self.focal_length))
    }
}
