//! Application layer
//!
//! Turns a [`SceneConfig`] and a [`SceneAssets`] bundle into a populated
//! [`Scene`](skyring_scene::Scene) and drives it frame by frame:
//! - [`SceneComposer`]: one-shot construction of sun, camera, planet, rings and fleet
//! - [`App`]: per-frame animation step, node sync and camera control
//! - [`Input`]: pointer and button state forwarded by the host
//! - [`OrbitControls`]: damped orbit camera

pub mod app;
pub mod assets;
pub mod composer;
pub mod config;
pub mod input;
pub mod orbit_controls;

pub use app::App;
pub use assets::SceneAssets;
pub use composer::{ComposedScene, SceneComposer};
pub use config::{
    CameraConfig, FleetConfig, PlanetConfig, RenderSettings, RingConfig, SceneConfig, ShadowMapType, SunConfig,
    ToneMapping,
};
pub use input::Input;
pub use orbit_controls::OrbitControls;
