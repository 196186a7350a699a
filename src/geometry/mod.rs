mod collection;
mod compound;
mod movable;
mod ray;
mod sphere;
mod surface;
mod transform;

pub use collection::Collection;
pub use compound::{Compound, HitSelection};
pub use movable::Movable;
pub use ray::Ray;
pub use sphere::{Sphere, UnitSphere};
pub use surface::Surface;
pub use transform::Transform;
