mod lighting;
mod scene;

pub use lighting::{
    AmbientLight, AreaLight, Light, LightModel, PointLight, SceneLightSource,
    SceneLightSourceKind,
};
pub use scene::Scene;
