use crate::geometry::Ray;
use crate::matrix::Matrix;
use crate::raytracing::Material;
use crate::vector::Vector;
use enumcapsulate::VariantDiscriminant;

/// Where and along which direction a ray struck geometry
pub trait Strike<V: Vector> {
    /// The strike point
    fn from(&self) -> V;

    /// Outward surface normal at the strike point
    fn direction(&self) -> V;
}

impl<V: Vector> Strike<V> for Ray<V> {
    #[inline(always)]
    fn from(&self) -> V {
        self.from
    }

    #[inline(always)]
    fn direction(&self) -> V {
        self.direction
    }
}

/// Hit on a geometry carrying a material
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceHit<V: Vector> {
    pub strike: Ray<V>,
    pub material: Material,
}

/// Hit on one member of a compound, tagged with the member's index
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundHit<V: Vector> {
    pub index: usize,
    pub inner: Box<Intersection<V>>,
}

/// Result of a successful `intersects` query, tagged by the kind of geometry
/// that produced it
#[derive(Debug, Clone, PartialEq, VariantDiscriminant)]
#[enumcapsulate(discriminant(name = IntersectionKind))]
pub enum Intersection<V>
where
    V: Vector,
{
    /// Bare primitive hit, `from` is the strike point and `direction` the normal
    Primitive(Ray<V>),
    Surface(SurfaceHit<V>),
    Compound(CompoundHit<V>),
}

impl<V: Vector> Intersection<V> {
    pub fn compound(index: usize, inner: Intersection<V>) -> Self {
        Intersection::Compound(CompoundHit {
            index,
            inner: Box::new(inner),
        })
    }

    pub fn surface(strike: Ray<V>, material: Material) -> Self {
        Intersection::Surface(SurfaceHit { strike, material })
    }

    /// The strike ray of whichever variant is present
    pub fn strike(&self) -> &Ray<V> {
        match self {
            Intersection::Primitive(strike) => strike,
            Intersection::Surface(hit) => &hit.strike,
            Intersection::Compound(hit) => hit.inner.strike(),
        }
    }

    /// Replace the strike ray, keeping tags and materials
    pub fn map_strike<F>(self, f: F) -> Self
    where
        F: FnOnce(Ray<V>) -> Ray<V>,
    {
        match self {
            Intersection::Primitive(strike) => Intersection::Primitive(f(strike)),
            Intersection::Surface(hit) => Intersection::Surface(SurfaceHit {
                strike: f(hit.strike),
                material: hit.material,
            }),
            Intersection::Compound(CompoundHit { index, inner }) => {
                Intersection::compound(index, inner.map_strike(f))
            }
        }
    }

    /// Map into another frame: strike point by `points`, normal by `normals`
    ///
    /// The normal is renormalised afterwards.
    pub fn transformed(self, points: &V::Matrix, normals: &V::Matrix) -> Self {
        self.map_strike(|strike| {
            Ray::new(
                points.transform_point(strike.from),
                normals.transform_direction(strike.direction),
            )
        })
    }

    /// Material of the innermost surface, if any
    pub fn material(&self) -> Option<&Material> {
        match self {
            Intersection::Primitive(_) => None,
            Intersection::Surface(hit) => Some(&hit.material),
            Intersection::Compound(hit) => hit.inner.material(),
        }
    }

    /// Squared distance of the strike point from `origin`
    #[inline]
    pub fn distance_sq(&self, origin: V) -> V::Scalar {
        (self.from() - origin).mag_sq()
    }
}

impl<V: Vector> Strike<V> for Intersection<V> {
    #[inline]
    fn from(&self) -> V {
        self.strike().from
    }

    #[inline]
    fn direction(&self) -> V {
        self.strike().direction
    }
}
