mod ortho;
mod pinhole;

use crate::geometry::Ray;
use crate::scalar::Scalar;
use crate::vector::Vector;

pub use ortho::OrthoCamera;
pub use pinhole::PinholeCamera;

/// Generates the primary ray for a position on the image
///
/// Coordinates are in pixels from the top left corner and may be fractional,
/// so sampling patterns are applied by the caller.
pub trait Camera<V: Vector>: Send + Sync {
    fn ray(&self, x: V::Scalar, y: V::Scalar) -> Ray<V>;
}

impl<V: Vector, C: Camera<V> + ?Sized> Camera<V> for Box<C> {
    fn ray(&self, x: V::Scalar, y: V::Scalar) -> Ray<V> {
        (**self).ray(x, y)
    }
}

/// Size of the film plane, the shorter side is `size` and the longer one
/// follows the aspect ratio of the image
pub fn film_size<S: Scalar>(width: usize, height: usize, size: S) -> (S, S) {
    let aspect = S::from_literal(width as f64 / height as f64);

    if width > height {
        (aspect * size, size)
    } else {
        (size, size / aspect)
    }
}

/// Position on a film of `film_width` by `film_height` centred on the optical axis
#[inline(always)]
fn film_position<S: Scalar>(
    (film_width, film_height): (S, S),
    (width, height): (S, S),
    x: S,
    y: S,
) -> (S, S) {
    let half = S::from_literal(0.5);

    (
        film_width * (x / width - half),
        film_height * (half - y / height),
    )
}
