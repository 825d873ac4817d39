use pinhole_tracer::config::RenderConfig;
use pinhole_tracer::error::{ConfigError, RenderError};
use pinhole_tracer::integrator::Shading;
use pinhole_tracer::render_scene;
use pinhole_tracer::scene::SceneKind;

fn small_config(seed: u64) -> RenderConfig {
    RenderConfig {
        image_width: 16,
        aspect_ratio: 2.0,
        samples_per_pixel: 4,
        max_depth: 8,
        seed: Some(seed),
        ..RenderConfig::default()
    }
}

fn render(config: &RenderConfig, scene: SceneKind) -> String {
    let mut out = Vec::new();
    render_scene(config, scene, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn ppm_layout() {
    let image = render(&small_config(1), SceneKind::Materials);
    let lines: Vec<&str> = image.lines().collect();

    assert_eq!(lines[0], "P3");
    assert_eq!(lines[1], "16 8");
    assert_eq!(lines[2], "255");
    assert_eq!(lines.len(), 3 + 16 * 8);

    for line in &lines[3..] {
        let channels: Vec<u32> = line.split(' ').map(|c| c.parse().unwrap()).collect();
        assert_eq!(channels.len(), 3);
        assert!(channels.iter().all(|&c| c <= 255));
    }
}

#[test]
fn seeded_renders_are_identical() {
    for scene in [SceneKind::Single, SceneKind::Materials, SceneKind::Field] {
        let config = small_config(42);
        assert_eq!(render(&config, scene), render(&config, scene));
    }
}

#[test]
fn normal_shading_is_deterministic_without_a_seed() {
    let config = RenderConfig {
        seed: None,
        samples_per_pixel: 1,
        shading: Shading::Normals,
        ..small_config(0)
    };
    assert_eq!(render(&config, SceneKind::Single), render(&config, SceneKind::Single));
}

#[test]
fn invalid_config_is_reported_before_rendering() {
    let config = RenderConfig {
        samples_per_pixel: 0,
        ..small_config(0)
    };
    let mut out = Vec::new();
    let err = render_scene(&config, SceneKind::Single, &mut out).unwrap_err();

    assert!(matches!(err, RenderError::Config(ConfigError::ZeroSamples)));
    assert!(out.is_empty());
}
