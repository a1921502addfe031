//! Scene configuration.
//!
//! Every field has a default matching the reference scene, so an empty JSON
//! object (or no file at all) yields the stock setup. Loaded values are
//! checked by [`SceneConfig::validate`] before anything is built from them.

use std::f32::consts::PI;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use skyring_animation::orbit::DEFAULT_ANGULAR_SPEED;
use skyring_animation::parallax::DEFAULT_SENSITIVITIES;
use skyring_core::color;
use skyring_core::errors::{Result, SkyringError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub fleet: FleetConfig,
    pub rings: Vec<RingConfig>,
    /// Pointer offset per pixel away from the viewport centre.
    pub pointer_scale: f32,
    pub planet: PlanetConfig,
    pub sun: SunConfig,
    pub camera: CameraConfig,
    pub render: RenderSettings,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fleet: FleetConfig::default(),
            rings: RingConfig::defaults(),
            pointer_scale: 0.0003,
            planet: PlanetConfig::default(),
            sun: SunConfig::default(),
            camera: CameraConfig::default(),
            render: RenderSettings::default(),
        }
    }
}

impl SceneConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading scene config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let fleet = &self.fleet;
        if fleet.count == 0 {
            return invalid("fleet.count must be at least 1");
        }
        if !(fleet.angular_speed.is_finite() && fleet.angular_speed > 0.0) {
            return invalid(format!("fleet.angular_speed must be positive, got {}", fleet.angular_speed));
        }
        if !(fleet.aircraft_scale.is_finite() && fleet.aircraft_scale > 0.0) {
            return invalid(format!("fleet.aircraft_scale must be positive, got {}", fleet.aircraft_scale));
        }

        for (i, ring) in self.rings.iter().enumerate() {
            if !(ring.inner_radius > 0.0 && ring.inner_radius < ring.outer_radius) {
                return invalid(format!(
                    "rings[{i}]: need 0 < inner_radius < outer_radius, got {} / {}",
                    ring.inner_radius, ring.outer_radius
                ));
            }
            if !(0.0..=1.0).contains(&ring.opacity) {
                return invalid(format!("rings[{i}].opacity must be in [0, 1], got {}", ring.opacity));
            }
            if ring.segments < 3 {
                return invalid(format!("rings[{i}].segments must be at least 3"));
            }
            if !ring.sensitivity.is_finite() {
                return invalid(format!("rings[{i}].sensitivity must be finite"));
            }
            color::parse_hex(&ring.color)?;
        }

        if !(self.pointer_scale.is_finite() && self.pointer_scale != 0.0) {
            return invalid("pointer_scale must be finite and non-zero");
        }
        if self.planet.radius <= 0.0 {
            return invalid("planet.radius must be positive");
        }
        color::parse_hex(&self.planet.sheen_color)?;
        color::parse_hex(&self.sun.color)?;

        let cam = &self.camera;
        if !(cam.near > 0.0 && cam.near < cam.far) {
            return invalid("camera: need 0 < near < far");
        }
        if !(cam.fov > 0.0 && cam.fov < 180.0) {
            return invalid("camera.fov must be in (0, 180) degrees");
        }
        if !(0.0..=1.0).contains(&cam.damping_factor) {
            return invalid("camera.damping_factor must be in [0, 1]");
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> Result<()> {
    Err(SkyringError::InvalidConfig(msg.into()))
}

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    pub count: usize,
    /// Revolution speed, rad/s.
    pub angular_speed: f32,
    /// Uniform scale of each aircraft instance inside its container.
    pub aircraft_scale: f32,
    /// Fixed seed for reproducible orbits. Random when absent.
    pub seed: Option<u64>,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            count: 7,
            angular_speed: DEFAULT_ANGULAR_SPEED,
            aircraft_scale: 0.001,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub segments: u32,
    /// sRGB hex colour
    pub color: String,
    pub opacity: f32,
    /// Parallax gain; the sign flips the lean direction.
    pub sensitivity: f32,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            inner_radius: 13.5,
            outer_radius: 15.0,
            segments: 80,
            color: "#FFCB8E".into(),
            opacity: 0.35,
            sensitivity: DEFAULT_SENSITIVITIES[0],
        }
    }
}

impl RingConfig {
    /// The three concentric rings of the reference scene.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::default(),
            Self {
                inner_radius: 15.75,
                outer_radius: 16.5,
                opacity: 0.5,
                sensitivity: DEFAULT_SENSITIVITIES[1],
                ..Self::default()
            },
            Self {
                inner_radius: 17.75,
                outer_radius: 18.0,
                opacity: 0.5,
                sensitivity: DEFAULT_SENSITIVITIES[2],
                ..Self::default()
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetConfig {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    /// Initial rotation about +Y, radians.
    pub yaw: f32,
    pub env_map_intensity: f32,
    pub bump_scale: f32,
    pub sheen: f32,
    pub sheen_roughness: f32,
    pub sheen_color: String,
    pub clearcoat: f32,
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            width_segments: 70,
            height_segments: 70,
            yaw: 1.25 * PI,
            env_map_intensity: 0.4,
            bump_scale: 1.0,
            sheen: 1.0,
            sheen_roughness: 0.75,
            sheen_color: "#ff8a00".into(),
            clearcoat: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunConfig {
    pub color: String,
    pub intensity: f32,
    pub position: Vec3,
    pub shadow_map_size: u32,
    pub shadow_near: f32,
    pub shadow_far: f32,
    /// Half extent of the square shadow frustum.
    pub shadow_extent: f32,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            color: "#FFFFFF".into(),
            intensity: 3.5,
            position: Vec3::new(10.0, 20.0, 10.0),
            shadow_map_size: 512,
            shadow_near: 0.5,
            shadow_far: 100.0,
            shadow_extent: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view, degrees.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 45.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 15.0, 50.0),
            target: Vec3::ZERO,
            enable_damping: true,
            damping_factor: 0.05,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToneMapping {
    None,
    Linear,
    #[default]
    AcesFilmic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShadowMapType {
    Basic,
    Pcf,
    #[default]
    PcfSoft,
}

/// Output settings forwarded to the renderer collaborator as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub antialias: bool,
    pub tone_mapping: ToneMapping,
    pub srgb_output: bool,
    pub physically_correct_lights: bool,
    pub shadows_enabled: bool,
    pub shadow_map_type: ShadowMapType,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            antialias: true,
            tone_mapping: ToneMapping::AcesFilmic,
            srgb_output: true,
            physically_correct_lights: true,
            shadows_enabled: true,
            shadow_map_type: ShadowMapType::PcfSoft,
        }
    }
}
