use crate::helpers::grey;
use crate::scene::{AmbientLight, AreaLight, LightModel};
use rand::Rng;
use ultraviolet::DVec3;

/// Soft white light from a broad panel in front of and above the scene
///
/// Ambient 30 plus 200 photons spread over a 20 × 20 panel at `z = −30`,
/// sampled on a jittered 4 × 4 grid.
pub fn wide_block<R: Rng>(rng: &mut R) -> LightModel<DVec3> {
    let panel = AreaLight::new(
        DVec3::new(-10.0, -10.0, -30.0),
        (DVec3::new(20.0, 0.0, 0.0), DVec3::new(0.0, 20.0, 0.0)),
        (4, 4),
        grey(200.0),
        rng,
    );

    LightModel::new(AmbientLight::new(grey(30.0))).with(panel)
}
