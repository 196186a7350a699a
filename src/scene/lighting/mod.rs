mod light;

pub use light::{
    AmbientLight, AreaLight, Light, LightModel, PointLight, SceneLightSource,
    SceneLightSourceKind,
};
