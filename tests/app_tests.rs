//! Scene composition and frame driver tests
//!
//! Tests for:
//! - SceneComposer output (fleet, planet, rings, sun, camera, environment)
//! - Per-body template instancing and renderable configuration
//! - App::frame syncing animation state onto scene nodes
//! - Pointer input reaching the rings, orbit controls reaching the camera

use std::f32::consts::TAU;
use std::sync::Arc;

use glam::Vec3;

use skyring::scene::LightKind;
use skyring::{
    App, FleetConfig, Geometry, Mesh, Node, PhysicalMaterial, Prefab, SceneAssets, SceneConfig, Side, SkyringError,
};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

fn seeded_config(seed: u64) -> SceneConfig {
    SceneConfig {
        fleet: FleetConfig {
            seed: Some(seed),
            ..FleetConfig::default()
        },
        ..SceneConfig::default()
    }
}

fn build_app(seed: u64) -> App {
    match App::new(seeded_config(seed), &SceneAssets::builtin()) {
        Ok(app) => app,
        Err(e) => panic!("app failed to build: {e}"),
    }
}

fn camera_position(app: &App) -> Vec3 {
    app.scene
        .get_node(app.camera())
        .map_or(Vec3::NAN, |n| n.transform.position)
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn composes_reference_scene() {
    let app = build_app(7);
    assert_eq!(app.animation.bodies.len(), 7);
    assert_eq!(app.animation.rings.len(), 3);
    assert_eq!(app.seed(), 7);

    // planet + 3 rings + 7 aircraft x 2 parts
    assert_eq!(app.scene.meshes.len(), 18);
    assert_eq!(app.scene.iter_renderables().count(), 18);
    assert!(app.scene.environment.has_env_map());
    assert_eq!(app.scene.active_camera, Some(app.camera()));
}

#[test]
fn every_body_is_bound_to_its_own_container() {
    let app = build_app(7);
    let mut seen = Vec::new();
    for (i, body) in app.animation.bodies.iter().enumerate() {
        let Some(handle) = body.node else {
            panic!("body {i} unbound");
        };
        assert!(!seen.contains(&handle));
        seen.push(handle);

        let node = app.scene.get_node(handle);
        assert_eq!(node.map(|n| n.name.clone()), Some(format!("AircraftContainer{i}")));
        assert!(node.is_some_and(|n| n.parent().is_none()));
        assert!(node.is_some_and(|n| vec3_approx(n.transform.position, body.container.position)));
    }
}

#[test]
fn aircraft_instances_are_scaled_and_configured() {
    let assets = SceneAssets::builtin();
    let app = build_app(3);

    for body in &app.animation.bodies {
        let Some(container) = body.node.and_then(|h| app.scene.get_node(h)) else {
            panic!("container missing");
        };
        assert_eq!(container.children().len(), 1);
        let instance = container.children()[0];
        assert!(
            app.scene
                .get_node(instance)
                .is_some_and(|n| n.transform.scale == Vec3::splat(0.001))
        );

        let parts: Vec<_> = app
            .scene
            .descendants(instance)
            .into_iter()
            .filter(|h| app.scene.mesh_of(*h).is_some())
            .collect();
        assert_eq!(parts.len(), 2);
        for part in parts {
            let r = app.scene.get_node(part).and_then(Node::renderable).copied();
            assert!(r.is_some_and(|r| r.cast_shadow && r.receive_shadow));
            let env = app.scene.mesh_of(part).and_then(|m| m.material.env_map.clone());
            assert_eq!(env, Some(assets.env_map.clone()));
        }
    }
}

#[test]
fn template_is_never_mutated() {
    let assets = SceneAssets::builtin();
    let before = assets.aircraft.nodes.len();
    let app = App::new(seeded_config(1), &assets);
    assert!(app.is_ok());
    assert_eq!(assets.aircraft.nodes.len(), before);
    assert!(
        assets
            .aircraft
            .nodes
            .iter()
            .filter_map(|n| n.mesh.as_ref())
            .all(|m| m.material.env_map.is_none())
    );
}

#[test]
fn planet_rings_and_sun() {
    let app = build_app(5);
    let scene = &app.scene;

    let planet = scene.find_by_name("Planet");
    let planet_mesh = planet.and_then(|h| scene.mesh_of(h));
    assert!(matches!(
        planet_mesh.map(|m| &m.geometry),
        Some(Geometry::Sphere { radius, .. }) if approx_eq(*radius, 10.0)
    ));
    assert!(planet_mesh.is_some_and(|m| m.material.bump_map.is_some() && m.material.roughness_map.is_some()));
    assert!(
        planet
            .and_then(|h| scene.get_node(h))
            .and_then(Node::renderable)
            .is_some_and(|r| r.receive_shadow)
    );

    for ring in &app.animation.rings {
        let mesh = ring.node.and_then(|h| scene.mesh_of(h));
        assert!(mesh.is_some_and(|m| m.material.side == Side::Double && m.material.transparent));
        assert!(matches!(mesh.map(|m| &m.geometry), Some(Geometry::Ring { .. })));
    }

    let sun = scene.find_by_name("Sun");
    let light = sun.and_then(|h| scene.light_of(h));
    assert!(light.is_some_and(|l| l.kind == LightKind::Directional && approx_eq(l.intensity, 3.5)));
    assert_eq!(light.and_then(|l| l.shadow.as_ref()).map(|s| s.map_size), Some(512));
    assert!(
        sun.and_then(|h| scene.get_node(h))
            .is_some_and(|n| n.transform.position == Vec3::new(10.0, 20.0, 10.0))
    );
}

#[test]
fn configured_fleet_size_and_no_rings() {
    let mut config = seeded_config(2);
    config.fleet.count = 2;
    config.rings.clear();
    let app = App::new(config, &SceneAssets::builtin());
    assert!(app.is_ok_and(|a| a.animation.bodies.len() == 2 && a.animation.rings.is_empty()));
}

#[test]
fn empty_aircraft_template_is_rejected() {
    let mut assets = SceneAssets::builtin();
    assets.aircraft = Arc::new(Prefab::new());
    let result = App::new(seeded_config(1), &assets);
    assert!(matches!(result, Err(SkyringError::AssetMissing(_))));
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = seeded_config(1);
    config.fleet.count = 0;
    assert!(matches!(
        App::new(config, &SceneAssets::builtin()),
        Err(SkyringError::InvalidConfig(_))
    ));
}

#[test]
fn same_seed_same_scene() {
    let a = build_app(99);
    let b = build_app(99);
    for (x, y) in a.animation.bodies.iter().zip(&b.animation.bodies) {
        assert_eq!(x.container.position, y.container.position);
        assert_eq!(x.random_axis(), y.random_axis());
    }
}

// ============================================================================
// Frame driver
// ============================================================================

#[test]
fn frame_advances_bodies_and_syncs_nodes() -> anyhow::Result<()> {
    let mut app = build_app(7);
    app.frame(1.0)?;

    assert_eq!(app.frame_count(), 1);
    for body in &app.animation.bodies {
        assert_eq!(body.current_angle, TAU + 0.25);
        let Some(node) = body.node.and_then(|h| app.scene.get_node(h)) else {
            panic!("container missing");
        };
        assert_eq!(node.transform.position, body.container.position);
        assert_eq!(node.transform.rotation, body.container.rotation);

        let world = Vec3::from(node.world_matrix().translation);
        assert!(approx_eq(world.length(), body.vertical_offset));
    }
    Ok(())
}

#[test]
fn zero_delta_frame_leaves_bodies_in_place() -> anyhow::Result<()> {
    let mut app = build_app(8);
    app.frame(0.5)?;
    let before: Vec<_> = app.animation.bodies.iter().map(|b| b.container.clone()).collect();

    app.frame(0.0)?;
    for (body, old) in app.animation.bodies.iter().zip(before) {
        assert_eq!(body.container.position, old.position);
        assert_eq!(body.container.rotation, old.rotation);
    }
    Ok(())
}

#[test]
fn pointer_drives_rings() -> anyhow::Result<()> {
    let mut app = build_app(7);
    app.handle_resize(1280, 720);
    app.input_mut().handle_cursor_move(840.0, 160.0);

    let pointer = app.input().pointer_offset();
    assert!(approx_eq(pointer.x, 0.06));
    assert!(approx_eq(pointer.y, -0.06));

    app.frame(1.0 / 60.0)?;

    for ring in &app.animation.rings {
        assert!(approx_eq(ring.rotation.x, pointer.y * 0.05 * ring.sensitivity));
        assert!(approx_eq(ring.rotation.y, pointer.x * 0.05 * ring.sensitivity));

        let euler = ring
            .node
            .and_then(|h| app.scene.get_node(h))
            .map(|n| n.transform.rotation_euler());
        assert!(euler.is_some_and(|e| vec3_approx(e, Vec3::new(ring.rotation.x, ring.rotation.y, 0.0))));
    }

    app.run_frames(1000, 1.0 / 60.0)?;
    for ring in &app.animation.rings {
        assert!((ring.rotation - ring.target(pointer)).length() < 1e-5);
    }
    Ok(())
}

#[test]
fn camera_holds_still_without_input() -> anyhow::Result<()> {
    let mut app = build_app(7);
    let start = camera_position(&app);
    assert!(vec3_approx(start, Vec3::new(0.0, 15.0, 50.0)), "{start:?}");

    app.run_frames(120, 1.0 / 60.0)?;
    assert!(camera_position(&app).distance(start) < 1e-3);
    Ok(())
}

#[test]
fn drag_orbits_camera_at_constant_distance() -> anyhow::Result<()> {
    let mut app = build_app(7);
    app.handle_resize(1280, 720);
    let start = camera_position(&app);
    let radius = start.length();

    app.input_mut().handle_cursor_move(640.0, 360.0);
    app.input_mut().handle_buttons(true, false);
    app.input_mut().handle_cursor_move(700.0, 360.0);
    app.run_frames(30, 1.0 / 60.0)?;

    let end = camera_position(&app);
    assert!(end.distance(start) > 0.1);
    assert!((end.length() - radius).abs() < 1e-2);
    Ok(())
}

#[test]
fn scroll_zooms_in() -> anyhow::Result<()> {
    let mut app = build_app(7);
    let radius = app.controls.radius;
    app.input_mut().handle_scroll(0.0, 1.0);
    app.frame(1.0 / 60.0)?;
    assert!(app.controls.radius < radius);
    assert!(camera_position(&app).length() < radius);
    Ok(())
}

#[test]
fn secondary_drag_pans_target() -> anyhow::Result<()> {
    let mut app = build_app(7);
    app.handle_resize(1280, 720);
    let radius = app.controls.radius;

    app.input_mut().handle_cursor_move(640.0, 360.0);
    app.input_mut().handle_buttons(false, true);
    app.input_mut().handle_cursor_move(700.0, 360.0);
    app.frame(1.0 / 60.0)?;

    // Dragging right slides the target left; a horizontal drag keeps its height.
    let center = app.controls.center;
    assert!(center.x < 0.0, "{center:?}");
    assert!(approx_eq(center.y, 0.0));
    assert!(approx_eq(app.controls.radius, radius));
    assert!((camera_position(&app).distance(center) - radius).abs() < 1e-3);
    Ok(())
}

#[test]
fn resize_updates_camera_aspect() {
    let mut app = build_app(7);
    app.handle_resize(800, 400);
    let camera = app.camera();
    let aspect = app.scene.query_camera_bundle(camera).map(|(_, c)| c.aspect);
    assert_eq!(aspect, Some(2.0));

    // Minimised window keeps the last valid aspect.
    app.handle_resize(800, 0);
    let aspect = app.scene.query_camera_bundle(camera).map(|(_, c)| c.aspect);
    assert_eq!(aspect, Some(2.0));
}

#[test]
fn fixed_step_run_reports_fps() -> anyhow::Result<()> {
    let mut app = build_app(7);
    app.run_frames(150, 1.0 / 60.0)?;
    assert_eq!(app.frame_count(), 150);
    assert!(app.last_fps().is_some_and(|fps| (fps - 60.0).abs() < 1.0));
    Ok(())
}

#[test]
fn negative_delta_frame_is_harmless() -> anyhow::Result<()> {
    let mut app = build_app(7);
    let angles: Vec<f32> = app.animation.bodies.iter().map(|b| b.current_angle).collect();
    app.frame(-0.5)?;
    for (body, angle) in app.animation.bodies.iter().zip(angles) {
        assert_eq!(body.current_angle, angle);
    }
    Ok(())
}

#[test]
fn huge_or_infinite_delta_frame_does_not_panic() -> anyhow::Result<()> {
    let mut app = build_app(7);
    let angles: Vec<f32> = app.animation.bodies.iter().map(|b| b.current_angle).collect();

    app.frame(f32::INFINITY)?;
    for (body, angle) in app.animation.bodies.iter().zip(&angles) {
        assert_eq!(body.current_angle, *angle);
    }

    app.frame(1.0e20)?;
    assert_eq!(app.frame_count(), 2);
    for body in &app.animation.bodies {
        assert!(body.current_angle.is_finite());
        let world = body.node.and_then(|h| app.scene.get_node(h)).map(|n| n.world_matrix().translation);
        assert!(world.is_some_and(|t| t.is_finite()));
    }
    Ok(())
}

#[test]
fn cyclic_aircraft_template_is_rejected() {
    let mut looped = Prefab::from_mesh(Mesh::new(
        "Loop",
        Geometry::External(Arc::from("aircraft/loop")),
        PhysicalMaterial::default(),
    ));
    looped.nodes[0].children_indices = vec![0];

    let mut assets = SceneAssets::builtin();
    assets.aircraft = Arc::new(looped);
    assert!(matches!(assets.validate(), Err(SkyringError::InvalidPrefab(_))));
    assert!(matches!(
        App::new(seeded_config(1), &assets),
        Err(SkyringError::InvalidPrefab(_))
    ));
}

#[test]
fn out_of_range_template_links_are_rejected() {
    let mut assets = SceneAssets::builtin();
    let mut broken = (*assets.aircraft).clone();
    broken.nodes[0].children_indices.push(42);
    assets.aircraft = Arc::new(broken);
    assert!(matches!(assets.validate(), Err(SkyringError::InvalidPrefab(_))));

    let mut broken = (*SceneAssets::builtin().aircraft).clone();
    broken.root_indices = vec![7];
    assets.aircraft = Arc::new(broken);
    assert!(matches!(assets.validate(), Err(SkyringError::InvalidPrefab(_))));
}
