use crate::geometry::Ray;
use crate::raytracing::Intersection;
use crate::vector::Vector;

/// Trait for objects that can be intersected by rays
///
/// Both queries only consider strikes at ray parameter `t >= epsilon` and are
/// unbounded along the ray otherwise.
pub trait Intersectable<V: Vector>: Send + Sync {
    /// Nearest strike at or beyond `epsilon`
    fn intersects(&self, ray: &Ray<V>, epsilon: V::Scalar) -> Option<Intersection<V>>;

    /// Whether any strike exists at or beyond `epsilon`
    fn occludes(&self, ray: &Ray<V>, epsilon: V::Scalar) -> bool {
        self.intersects(ray, epsilon).is_some()
    }
}

/// Type erased geometry, as stored by a compound
pub type DynGeometry<V> = Box<dyn Intersectable<V>>;

impl<V, G> Intersectable<V> for Box<G>
where
    V: Vector,
    G: Intersectable<V> + ?Sized,
{
    #[inline]
    fn intersects(&self, ray: &Ray<V>, epsilon: V::Scalar) -> Option<Intersection<V>> {
        (**self).intersects(ray, epsilon)
    }

    #[inline]
    fn occludes(&self, ray: &Ray<V>, epsilon: V::Scalar) -> bool {
        (**self).occludes(ray, epsilon)
    }
}

impl<V, G> Intersectable<V> for std::sync::Arc<G>
where
    V: Vector,
    G: Intersectable<V> + ?Sized,
{
    #[inline]
    fn intersects(&self, ray: &Ray<V>, epsilon: V::Scalar) -> Option<Intersection<V>> {
        (**self).intersects(ray, epsilon)
    }

    #[inline]
    fn occludes(&self, ray: &Ray<V>, epsilon: V::Scalar) -> bool {
        (**self).occludes(ray, epsilon)
    }
}
