//! Tests for scene setup and the gas presets.

use super::*;
use approx::assert_relative_eq;

fn small_config(seed: u64) -> SceneConfig {
    SceneConfig {
        view_width: 203.0,
        view_height: 103.0,
        frame_period_ms: 42,
        seed,
    }
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn default_config_uses_constants() {
    let config = SceneConfig::default();
    assert_eq!(config.view_width, DEFAULT_VIEW_WIDTH);
    assert_eq!(config.view_height, DEFAULT_VIEW_HEIGHT);
    assert_eq!(config.frame_period(), Duration::from_millis(FRAME_PERIOD_MS));
    assert_eq!(config.seed, DEFAULT_SEED);
}

#[test]
fn box_is_trimmed_view_with_shorter_side_as_depth() {
    assert_eq!(small_config(0).box_dimensions(), (200.0, 100.0, 100.0));
    let tall = SceneConfig {
        view_width: 53.0,
        view_height: 83.0,
        ..small_config(0)
    };
    assert_eq!(tall.box_dimensions(), (50.0, 80.0, 50.0));
}

#[test]
fn tiny_view_is_an_invalid_box() {
    let config = SceneConfig {
        view_width: 2.0,
        ..small_config(0)
    };
    assert!(matches!(
        SceneBuilder::new(&config),
        Err(SceneError::InvalidBox(_))
    ));
}

// =============================================================================
// PRESETS
// =============================================================================

#[test]
fn presets_hold_one_body_per_solid() {
    assert_eq!(GasPreset::Platonic.solids().len(), GasPreset::Platonic.body_count());
    assert_eq!(
        GasPreset::Archimedean.solids().len(),
        GasPreset::Archimedean.body_count()
    );
    assert_eq!(GasPreset::Platonic.to_string(), "platonic");
    assert_eq!(GasPreset::Archimedean.to_string(), "archimedean");
}

#[test]
fn preset_radius_fills_volume_fraction() {
    let limit = Vec3::new(100.0, 50.0, 50.0);
    for preset in [GasPreset::Platonic, GasPreset::Archimedean] {
        let r = preset.radius(limit);
        let n = preset.body_count() as f64;
        let spheres = n * 4.0 / 3.0 * PI * r.powi(3);
        let box_volume = 200.0 * 100.0 * 100.0;
        assert_relative_eq!(spheres / box_volume, VOLUME_FRACTION, max_relative = 1e-12);
    }
    assert!(GasPreset::Archimedean.radius(limit) < GasPreset::Platonic.radius(limit));
}

// =============================================================================
// PLACEMENT
// =============================================================================

#[test]
fn placed_body_has_radius_and_fits() {
    let mut builder = SceneBuilder::new(&small_config(7)).unwrap();
    let limit = builder.limit();
    for _ in 0..20 {
        builder.add_solid(SolidKind::Dodecahedron, 10.0).unwrap();
    }
    assert_eq!(builder.body_count(), 20);
    let scene = builder.build();
    for body in scene.simulation().bodies() {
        assert_relative_eq!(body.polyhedron().radius(), 10.0, max_relative = 1e-12);
        for v in body.polyhedron().vertices() {
            assert!(v.abs().cmple(limit + Vec3::splat(1e-9)).all(), "{v} outside box");
        }
        assert!(body.rotation().is_some());
    }
}

#[test]
fn oversized_body_does_not_fit() {
    let mut builder = SceneBuilder::new(&small_config(0)).unwrap();
    // Half extents are (100, 50, 50).
    let err = builder.add_solid(SolidKind::Cube, 60.0).unwrap_err();
    assert_eq!(
        err,
        SceneError::DoesNotFit {
            radius: 60.0,
            limit: 50.0,
            axis: 1
        }
    );
    assert_eq!(builder.body_count(), 0);
}

#[test]
fn invalid_radius_is_a_geometry_error() {
    let mut builder = SceneBuilder::new(&small_config(0)).unwrap();
    assert!(matches!(
        builder.add_solid(SolidKind::Cube, -1.0),
        Err(SceneError::Geometry(_))
    ));
}

#[test]
fn velocities_respect_max_speed() {
    let mut builder = SceneBuilder::new(&small_config(3)).unwrap();
    for &kind in GasPreset::Archimedean.solids() {
        builder.add_solid(kind, 5.0).unwrap();
    }
    let vmax = builder.max_speed();
    let limit = builder.limit();
    assert_relative_eq!(
        vmax,
        0.042 * limit.length() / 26f64.sqrt(),
        max_relative = 1e-12
    );
    let scene = builder.build();
    for body in scene.simulation().bodies() {
        assert!(body.velocity().length() <= vmax);
        assert_eq!(body.limit(), Some(limit));
    }
}

#[test]
fn empty_builder_has_no_speed() {
    let builder = SceneBuilder::new(&small_config(0)).unwrap();
    assert_eq!(builder.max_speed(), 0.0);
    assert!(builder.build().simulation().is_empty());
}

#[test]
fn same_seed_same_scene() {
    let a = Scene::gas(GasPreset::Platonic, &small_config(42)).unwrap();
    let b = Scene::gas(GasPreset::Platonic, &small_config(42)).unwrap();
    assert_eq!(a, b);
    let c = Scene::gas(GasPreset::Platonic, &small_config(43)).unwrap();
    assert_ne!(a, c);
}

// =============================================================================
// GASES
// =============================================================================

#[test]
fn platonic_gas_places_five_solids_in_order() {
    let scene = Scene::gas(GasPreset::Platonic, &SceneConfig::default()).unwrap();
    let counts: Vec<usize> = scene
        .simulation()
        .bodies()
        .iter()
        .map(|b| b.polyhedron().vertex_count())
        .collect();
    assert_eq!(counts, vec![4, 8, 6, 20, 12]);
    assert_eq!(scene.frame_period(), Duration::from_millis(FRAME_PERIOD_MS));
}

#[test]
fn archimedean_gas_places_thirteen_solids() {
    let scene = Scene::gas(GasPreset::Archimedean, &SceneConfig::default()).unwrap();
    assert_eq!(scene.simulation().len(), 13);
    let radius = GasPreset::Archimedean.radius(scene.enclosure().extent());
    for body in scene.simulation().bodies() {
        assert_relative_eq!(body.polyhedron().radius(), radius, max_relative = 1e-12);
    }
}

#[test]
fn gas_stays_in_the_box() {
    let mut scene = Scene::gas(GasPreset::Platonic, &small_config(11)).unwrap();
    for _ in 0..1000 {
        scene.advance_one_tick();
        for body in scene.simulation().bodies() {
            assert!(scene.enclosure().contains(body.position()));
        }
    }
    assert_eq!(scene.simulation().tick(), 1000);
}
