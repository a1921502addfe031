//! Frame driver.
//!
//! [`App`] owns the scene and everything mutated per frame. The host
//! (windowing + renderer) forwards input into [`App::input_mut`], calls
//! [`App::frame`] once per display refresh and then draws
//! [`Scene::iter_renderables`] with the active camera.

use skyring_animation::{AnimationState, sanitize_delta};
use skyring_core::errors::{Result, SkyringError};
use skyring_core::{FpsCounter, FrameClock};
use skyring_scene::{NodeHandle, Scene};

use crate::assets::SceneAssets;
use crate::composer::SceneComposer;
use crate::config::SceneConfig;
use crate::input::Input;
use crate::orbit_controls::OrbitControls;

pub struct App {
    pub scene: Scene,
    pub animation: AnimationState,
    pub controls: OrbitControls,
    input: Input,
    clock: FrameClock,
    fps: FpsCounter,
    camera: NodeHandle,
    config: SceneConfig,
    seed: u64,
    last_fps: Option<f32>,
}

impl App {
    /// Validates `config` and `assets` and composes the scene.
    pub fn new(config: SceneConfig, assets: &SceneAssets) -> Result<Self> {
        let mut scene = Scene::new();
        let composed = SceneComposer::new(&config).compose(&mut scene, assets)?;
        scene.update_matrix_world();

        Ok(Self {
            scene,
            animation: composed.animation,
            controls: composed.controls,
            input: Input::new(config.pointer_scale),
            clock: FrameClock::new(),
            fps: FpsCounter::new(),
            camera: composed.camera,
            config,
            seed: composed.seed,
            last_fps: None,
        })
    }

    /// Advances the scene by `delta` seconds.
    ///
    /// Steps the animation with the latest pointer offset, writes the
    /// result onto scene nodes, updates the camera controller and refreshes
    /// world matrices.
    ///
    /// A negative or non-finite `delta` runs the frame with zero elapsed time.
    pub fn frame(&mut self, delta: f32) -> Result<()> {
        let delta = sanitize_delta(delta);
        let pointer = self.input.pointer_offset();
        self.animation.step(delta, pointer);
        self.sync_scene()?;

        let (transform, camera) = self
            .scene
            .query_camera_bundle(self.camera)
            .ok_or(SkyringError::NodeNotFound)?;
        self.controls.update(transform, &self.input, camera.fov, delta);

        self.scene.update_matrix_world();
        self.input.end_frame();

        if let Some(fps) = self.fps.update(delta) {
            log::debug!("FPS: {fps:.1}");
            self.last_fps = Some(fps);
        }
        Ok(())
    }

    /// Measures the wall-clock delta and runs one frame with it.
    pub fn tick(&mut self) -> Result<()> {
        let delta = self.clock.tick();
        self.frame(delta)
    }

    /// Runs `count` frames of fixed length, for headless use.
    pub fn run_frames(&mut self, count: usize, delta: f32) -> Result<()> {
        for _ in 0..count {
            self.frame(delta)?;
        }
        Ok(())
    }

    pub fn handle_resize(&mut self, width: u32, height: u32) {
        self.input.handle_resize(width, height);
        if height == 0 {
            return;
        }
        if let Some((_, camera)) = self.scene.query_camera_bundle(self.camera) {
            camera.set_aspect(width as f32 / height as f32);
        }
    }

    /// Copies body containers and ring rotations onto their scene nodes.
    fn sync_scene(&mut self) -> Result<()> {
        for body in &self.animation.bodies {
            let Some(handle) = body.node else { continue };
            let node = self.scene.try_node_mut(handle)?;
            node.transform.position = body.container.position;
            node.transform.rotation = body.container.rotation;
        }
        for ring in &self.animation.rings {
            let Some(handle) = ring.node else { continue };
            let node = self.scene.try_node_mut(handle)?;
            node.transform.set_rotation_euler(ring.rotation.x, ring.rotation.y, 0.0);
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn input(&self) -> &Input {
        &self.input
    }

    #[inline]
    pub fn input_mut(&mut self) -> &mut Input {
        &mut self.input
    }

    #[inline]
    #[must_use]
    pub fn camera(&self) -> NodeHandle {
        self.camera
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Seed the fleet was drawn with.
    #[inline]
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Most recent once-per-second FPS sample.
    #[inline]
    #[must_use]
    pub fn last_fps(&self) -> Option<f32> {
        self.last_fps
    }

    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.animation.frame_count()
    }
}
