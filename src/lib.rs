//! # skyring
//!
//! A planet with concentric parallax rings and a fleet of aircraft on
//! randomly tilted orbits, as a headless scene graph plus animation core.
//!
//! The workspace is split by concern:
//! - [`core`]: errors, frame clock, FPS meter, colour helpers
//! - [`scene`]: nodes, transforms, meshes, lights, cameras, prefabs
//! - [`animation`]: orbiting bodies, ring parallax, pointer offsets
//! - [`app`]: configuration, scene composition and the frame driver
//!
//! Rendering and windowing belong to the host: it forwards input into
//! [`App::input_mut`], calls [`App::frame`] and draws
//! [`Scene::iter_renderables`].
//!
//! ```no_run
//! use skyring::{App, SceneAssets, SceneConfig};
//!
//! let mut app = App::new(SceneConfig::default(), &SceneAssets::builtin())?;
//! app.run_frames(60, 1.0 / 60.0)?;
//! # Ok::<(), skyring::SkyringError>(())
//! ```

pub use skyring_animation as animation;
pub use skyring_app as app;
pub use skyring_core as core;
pub use skyring_scene as scene;

pub use skyring_animation::{AnimationState, OrbitingBody, PointerOffset, RingState};
pub use skyring_app::{
    App, CameraConfig, ComposedScene, FleetConfig, Input, OrbitControls, PlanetConfig, RenderSettings, RingConfig,
    SceneAssets, SceneComposer, SceneConfig, SunConfig,
};
pub use skyring_core::{FpsCounter, FrameClock, Result, SkyringError};
pub use skyring_scene::{
    Camera, Geometry, Light, Mesh, Node, NodeHandle, NodeKind, PhysicalMaterial, Prefab, PrefabNode, Scene, Side,
    TextureRef, Transform,
};

pub mod prelude {
    pub use crate::{
        AnimationState, App, NodeHandle, OrbitingBody, PointerOffset, RingState, Scene, SceneAssets, SceneConfig,
        Transform,
    };
    pub use glam::{Quat, Vec2, Vec3};
}
