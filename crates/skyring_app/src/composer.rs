//! One-shot scene construction.
//!
//! Builds the static graph (sun, camera, planet, rings, aircraft fleet) and
//! returns the animation state bound to the nodes it created. Runs once at
//! startup; nothing here is touched per frame.

use glam::Vec3;
use rand::{RngExt, SeedableRng};
use rand::rngs::StdRng;

use skyring_animation::{AnimationState, OrbitingBody, RingState};
use skyring_core::color;
use skyring_core::errors::Result;
use skyring_scene::{Camera, Geometry, Light, Mesh, NodeHandle, PhysicalMaterial, Scene, ShadowConfig, Side};

use crate::assets::SceneAssets;
use crate::config::SceneConfig;
use crate::orbit_controls::OrbitControls;

/// Output of [`SceneComposer::compose`].
pub struct ComposedScene {
    pub animation: AnimationState,
    pub controls: OrbitControls,
    pub camera: NodeHandle,
    pub sun: NodeHandle,
    pub planet: NodeHandle,
    /// Seed the fleet was drawn with, for reproducing a run.
    pub seed: u64,
}

pub struct SceneComposer<'a> {
    config: &'a SceneConfig,
}

impl<'a> SceneComposer<'a> {
    #[must_use]
    pub fn new(config: &'a SceneConfig) -> Self {
        Self { config }
    }

    /// Populates `scene` from the config and asset bundle.
    pub fn compose(&self, scene: &mut Scene, assets: &SceneAssets) -> Result<ComposedScene> {
        self.config.validate()?;
        assets.validate()?;

        scene.environment.set_env_map(Some(assets.env_map.clone()));

        let sun = self.add_sun(scene)?;
        let (camera, controls) = self.add_camera(scene);
        let planet = self.add_planet(scene, assets)?;

        let mut animation = AnimationState::new(self.config.fleet.angular_speed);
        self.add_rings(scene, &mut animation)?;

        let seed = self.config.fleet.seed.unwrap_or_else(|| rand::rng().random());
        self.add_fleet(scene, assets, &mut animation, seed);

        log::info!(
            "Scene composed: {} aircraft, {} rings, {} nodes (seed {seed})",
            animation.bodies.len(),
            animation.rings.len(),
            scene.nodes.len()
        );

        Ok(ComposedScene {
            animation,
            controls,
            camera,
            sun,
            planet,
            seed,
        })
    }

    fn add_sun(&self, scene: &mut Scene) -> Result<NodeHandle> {
        let cfg = &self.config.sun;
        let extent = cfg.shadow_extent;
        let light = Light::new_directional(color::linear_from_hex(&cfg.color)?, cfg.intensity).with_shadow(
            ShadowConfig {
                map_size: cfg.shadow_map_size,
                near: cfg.shadow_near,
                far: cfg.shadow_far,
                left: -extent,
                right: extent,
                top: extent,
                bottom: -extent,
                ..ShadowConfig::default()
            },
        );

        let handle = scene.add_light(light, None);
        let node = scene.try_node_mut(handle)?;
        node.name = "Sun".into();
        node.transform.position = cfg.position;
        node.transform.look_at(Vec3::ZERO, Vec3::Y);
        log::debug!("Sun at {:?}", cfg.position);
        Ok(handle)
    }

    fn add_camera(&self, scene: &mut Scene) -> (NodeHandle, OrbitControls) {
        let cfg = &self.config.camera;
        let handle = scene.add_camera(Camera::new_perspective(cfg.fov, cfg.aspect, cfg.near, cfg.far), None);
        scene.active_camera = Some(handle);

        let mut controls = OrbitControls::from_position(cfg.target, cfg.position);
        controls.enable_damping = cfg.enable_damping;
        controls.damping_factor = cfg.damping_factor;

        if let Some(node) = scene.get_node_mut(handle) {
            node.transform.position = controls.eye();
            node.transform.look_at(cfg.target, Vec3::Y);
        }
        (handle, controls)
    }

    fn add_planet(&self, scene: &mut Scene, assets: &SceneAssets) -> Result<NodeHandle> {
        let cfg = &self.config.planet;
        let material = PhysicalMaterial {
            map: Some(assets.planet_map.clone()),
            roughness_map: Some(assets.planet_roughness.clone()),
            bump_map: Some(assets.planet_bump.clone()),
            bump_scale: cfg.bump_scale,
            env_map: Some(assets.env_map.clone()),
            env_map_intensity: cfg.env_map_intensity,
            sheen: cfg.sheen,
            sheen_roughness: cfg.sheen_roughness,
            sheen_color: color::linear_from_hex(&cfg.sheen_color)?,
            clearcoat: cfg.clearcoat,
            ..PhysicalMaterial::default()
        };
        let geometry = Geometry::Sphere {
            radius: cfg.radius,
            width_segments: cfg.width_segments,
            height_segments: cfg.height_segments,
        };

        let handle = scene.add_mesh(Mesh::new("Planet", geometry, material), None);
        let node = scene.try_node_mut(handle)?;
        node.transform.rotate_y(cfg.yaw);
        if let Some(r) = node.renderable_mut() {
            r.receive_shadow = true;
        }
        Ok(handle)
    }

    fn add_rings(&self, scene: &mut Scene, animation: &mut AnimationState) -> Result<()> {
        for (i, cfg) in self.config.rings.iter().enumerate() {
            let material = PhysicalMaterial {
                color: color::linear_from_hex(&cfg.color)?,
                opacity: cfg.opacity,
                transparent: true,
                side: Side::Double,
                ..PhysicalMaterial::default()
            };
            let geometry = Geometry::Ring {
                inner_radius: cfg.inner_radius,
                outer_radius: cfg.outer_radius,
                theta_segments: cfg.segments,
            };
            let handle = scene.add_mesh(Mesh::new(format!("Ring{i}"), geometry, material), None);
            animation.push_ring(RingState::new(cfg.sensitivity).with_node(handle));
        }
        Ok(())
    }

    fn add_fleet(&self, scene: &mut Scene, assets: &SceneAssets, animation: &mut AnimationState, seed: u64) {
        let cfg = &self.config.fleet;
        let mut rng = StdRng::seed_from_u64(seed);
        let env_map = assets.env_map.clone();

        for i in 0..cfg.count {
            let body = OrbitingBody::random(&mut rng);
            let container = scene.add_group(&format!("AircraftContainer{i}"), None);

            if let Some(instance) = scene.instantiate(&assets.aircraft, Some(container))
                && let Some(node) = scene.get_node_mut(instance)
            {
                node.transform.scale = Vec3::splat(cfg.aircraft_scale);
            }

            let meshes = scene.for_each_renderable_in(container, |renderable, mesh| {
                mesh.material.env_map = Some(env_map.clone());
                renderable.cast_shadow = true;
                renderable.receive_shadow = true;
            });
            log::debug!(
                "Aircraft {i}: tilt {:.3}, offset {:.3}, {meshes} meshes",
                body.orbit_tilt,
                body.vertical_offset
            );

            if let Some(node) = scene.get_node_mut(container) {
                node.transform.position = body.container.position;
                node.transform.rotation = body.container.rotation;
            }
            animation.bodies.push(body.with_node(container));
        }
    }
}
