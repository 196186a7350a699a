use crate::geometry::Ray;
use crate::raytracing::{DynGeometry, Intersectable, Intersection};
use crate::vector::Vector;

/// Which of two candidate hits a compound keeps
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum HitSelection {
    /// Smaller distance from the ray origin wins
    #[default]
    Nearest,
    /// Larger distance from the ray origin wins, kept for scenes built around
    /// the old selection rule
    Farthest,
}

type Candidate<V> = (<V as Vector>::Scalar, usize, Intersection<V>);

impl HitSelection {
    /// Fold step over optional candidates, ties go to the second one
    fn collapse<V: Vector>(
        self,
        first: Option<Candidate<V>>,
        second: Option<Candidate<V>>,
    ) -> Option<Candidate<V>> {
        match (first, second) {
            (None, second) => second,
            (first, None) => first,
            (Some(first), Some(second)) => {
                let keep_first = match self {
                    HitSelection::Nearest => first.0 < second.0,
                    HitSelection::Farthest => first.0 > second.0,
                };

                Some(if keep_first { first } else { second })
            }
        }
    }
}

/// Fixed, ordered set of geometry of any type
///
/// A hit is reported as `Intersection::Compound` together with the index of the
/// member that produced it.
pub struct Compound<V: Vector> {
    instances: Vec<DynGeometry<V>>,
    selection: HitSelection,
}

impl<V: Vector> Compound<V> {
    pub fn new() -> Self {
        Self {
            instances: Vec::new(),
            selection: HitSelection::default(),
        }
    }

    #[must_use]
    pub fn with<G: Intersectable<V> + 'static>(mut self, geometry: G) -> Self {
        self.instances.push(Box::new(geometry));
        self
    }

    #[must_use]
    pub fn with_selection(mut self, selection: HitSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn selection(&self) -> HitSelection {
        self.selection
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl<V: Vector> Default for Compound<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vector> From<Vec<DynGeometry<V>>> for Compound<V> {
    fn from(instances: Vec<DynGeometry<V>>) -> Self {
        Self {
            instances,
            selection: HitSelection::default(),
        }
    }
}

impl<V: Vector> std::fmt::Debug for Compound<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compound")
            .field("instances", &self.instances.len())
            .field("selection", &self.selection)
            .finish()
    }
}

impl<V: Vector> Intersectable<V> for Compound<V> {
    fn intersects(&self, ray: &Ray<V>, epsilon: V::Scalar) -> Option<Intersection<V>> {
        self.instances
            .iter()
            .enumerate()
            .map(|(index, instance)| {
                instance
                    .intersects(ray, epsilon)
                    .map(|hit| (hit.distance_sq(ray.from), index, hit))
            })
            .fold(None, |kept, candidate| self.selection.collapse(kept, candidate))
            .map(|(_, index, hit)| Intersection::compound(index, hit))
    }

    fn occludes(&self, ray: &Ray<V>, epsilon: V::Scalar) -> bool {
        self.instances
            .iter()
            .any(|instance| instance.occludes(ray, epsilon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Collection, Movable, Sphere, UnitSphere};
    use crate::raytracing::{CompoundHit, Strike};
    use ultraviolet::DVec3;

    fn along_z() -> Ray<DVec3> {
        Ray::new(DVec3::zero(), DVec3::new(0.0, 0.0, 1.0))
    }

    fn spheres_at_5_and_10() -> Compound<DVec3> {
        Compound::new()
            .with(Movable::new(UnitSphere).translated(DVec3::new(0.0, 0.0, 5.0)))
            .with(Movable::new(UnitSphere).translated(DVec3::new(0.0, 0.0, 10.0)))
    }

    #[test]
    fn nearest_hit_is_selected_by_default() {
        let hit = spheres_at_5_and_10().intersects(&along_z(), 1e-9).unwrap();

        assert_eq!(hit.from(), DVec3::new(0.0, 0.0, 4.0));
        assert!(matches!(hit, Intersection::Compound(CompoundHit { index: 0, .. })));
    }

    #[test]
    fn farthest_selection_keeps_the_old_rule() {
        let compound = spheres_at_5_and_10().with_selection(HitSelection::Farthest);
        let hit = compound.intersects(&along_z(), 1e-9).unwrap();

        assert_eq!(hit.from(), DVec3::new(0.0, 0.0, 9.0));
        assert!(matches!(hit, Intersection::Compound(CompoundHit { index: 1, .. })));
    }

    #[test]
    fn ties_go_to_the_later_member() {
        let compound = Compound::new()
            .with(Sphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0))
            .with(Sphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0));

        let hit = compound.intersects(&along_z(), 1e-9).unwrap();
        assert!(matches!(hit, Intersection::Compound(CompoundHit { index: 1, .. })));
    }

    #[test]
    fn miss_everything() {
        let compound = spheres_at_5_and_10();
        let ray = Ray::new(DVec3::zero(), DVec3::new(0.0, 1.0, 0.0));

        assert!(compound.intersects(&ray, 1e-9).is_none());
        assert!(!compound.occludes(&ray, 1e-9));
        assert!(Compound::<DVec3>::new().intersects(&along_z(), 0.0).is_none());
    }

    #[test]
    fn single_hit_matches_the_member() {
        let member = Sphere::new(DVec3::new(3.0, 0.0, 0.0), 1.0);
        let compound = Compound::new()
            .with(member)
            .with(Collection::from(vec![Sphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0)]));
        let ray = Ray::new(DVec3::zero(), DVec3::new(1.0, 0.0, 0.0));

        let hit = compound.intersects(&ray, 1e-9).unwrap();
        let direct = member.intersects(&ray, 1e-9).unwrap();

        assert_eq!(hit.strike(), direct.strike());
        assert!(compound.occludes(&ray, 1e-9));
    }

    #[test]
    fn nested_compounds_keep_their_indices() {
        let inner = Compound::new()
            .with(Sphere::new(DVec3::new(0.0, 0.0, 20.0), 1.0))
            .with(Sphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0));
        let outer = Compound::new()
            .with(Sphere::new(DVec3::new(0.0, 0.0, 30.0), 1.0))
            .with(inner);

        let hit = outer.intersects(&along_z(), 1e-9).unwrap();

        match hit {
            Intersection::Compound(CompoundHit { index: 1, inner }) => {
                assert!(matches!(
                    *inner,
                    Intersection::Compound(CompoundHit { index: 1, .. })
                ));
            }
            _ => panic!("expected the inner compound to win"),
        }
        assert_eq!(hit_point(&outer), DVec3::new(0.0, 0.0, 4.0));
    }

    fn hit_point(compound: &Compound<DVec3>) -> DVec3 {
        compound.intersects(&along_z(), 1e-9).unwrap().from()
    }
}
