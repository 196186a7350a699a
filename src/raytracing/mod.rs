mod intersectable;
mod intersection;
mod material;
mod shading;

pub use intersectable::{DynGeometry, Intersectable};
pub use intersection::{CompoundHit, Intersection, IntersectionKind, Strike, SurfaceHit};
pub use material::Material;
pub use shading::{emission, surface_albedo};
