use crate::geometry::Ray;
use crate::raytracing::{Intersectable, Intersection};
use crate::vector::Vector;
use std::cmp::Ordering;

/// Ordered, runtime sized set of geometry of one type
///
/// Queries are a linear search over every member.
#[derive(Debug, Clone, Default)]
pub struct Collection<G> {
    instances: Vec<G>,
}

impl<G> Collection<G> {
    pub const fn new() -> Self {
        Self {
            instances: Vec::new(),
        }
    }

    pub fn insert(&mut self, geometry: G) {
        self.instances.push(geometry);
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &G> {
        self.instances.iter()
    }
}

impl<G> From<Vec<G>> for Collection<G> {
    fn from(instances: Vec<G>) -> Self {
        Self { instances }
    }
}

impl<G> FromIterator<G> for Collection<G> {
    fn from_iter<I: IntoIterator<Item = G>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<V, G> Intersectable<V> for Collection<G>
where
    V: Vector,
    G: Intersectable<V>,
{
    fn intersects(&self, ray: &Ray<V>, epsilon: V::Scalar) -> Option<Intersection<V>> {
        self.instances
            .iter()
            .filter_map(|instance| instance.intersects(ray, epsilon))
            .map(|hit| (hit.distance_sq(ray.from), hit))
            .min_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .map(|(_, hit)| hit)
    }

    fn occludes(&self, ray: &Ray<V>, epsilon: V::Scalar) -> bool {
        self.instances
            .iter()
            .any(|instance| instance.occludes(ray, epsilon))
    }
}
