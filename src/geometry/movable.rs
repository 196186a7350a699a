use crate::camera::Camera;
use crate::geometry::{Ray, Transform};
use crate::raytracing::{Intersectable, Intersection};
use crate::vector::Vector;

/// Geometry or camera placed in the world by a transform
///
/// Starts out at the identity. Each `transformed` call nests its transform
/// inside the ones already given, so it acts on the instance first:
/// `.translated(v).scaled(s)` scales and then moves by `v`.
#[derive(Debug, Clone)]
pub struct Movable<V: Vector, I> {
    pub instance: I,
    transform: Transform<V>,
}

impl<V: Vector, I> Movable<V, I> {
    pub fn new(instance: I) -> Self {
        Self {
            instance,
            transform: Transform::identity(),
        }
    }

    #[must_use]
    pub fn transformed(self, by: Transform<V>) -> Self {
        Self {
            transform: by.then(&self.transform),
            instance: self.instance,
        }
    }

    #[must_use]
    pub fn translated(self, by: V) -> Self {
        self.transformed(Transform::translate(by))
    }

    #[must_use]
    pub fn scaled(self, by: V::Scalar) -> Self {
        self.transformed(Transform::uniform_scale(by))
    }

    pub fn transform(&self) -> &Transform<V> {
        &self.transform
    }
}

impl<V, G> Intersectable<V> for Movable<V, G>
where
    V: Vector,
    G: Intersectable<V>,
{
    fn intersects(&self, ray: &Ray<V>, epsilon: V::Scalar) -> Option<Intersection<V>> {
        let local = self.transform.to_local(ray);

        self.instance
            .intersects(&local, epsilon)
            .map(|hit| {
                hit.transformed(&self.transform.backward, &self.transform.normal_to_world())
            })
    }

    fn occludes(&self, ray: &Ray<V>, epsilon: V::Scalar) -> bool {
        self.instance
            .occludes(&self.transform.to_local(ray), epsilon)
    }
}

impl<V, C> Camera<V> for Movable<V, C>
where
    V: Vector,
    C: Camera<V>,
{
    fn ray(&self, x: V::Scalar, y: V::Scalar) -> Ray<V> {
        self.transform.to_world(&self.instance.ray(x, y)).normalized()
    }
}
