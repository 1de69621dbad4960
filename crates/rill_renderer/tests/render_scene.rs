//! End-to-end renders of a small scene using every shader and shape.

use std::f64::consts::PI;
use std::sync::Arc;

use rill_core::{parse_obj, Texture};
use rill_renderer::{
    Camera, Color, ColorSource, Cylinder, DVec3, FlatShader, ImageBuffer, Paraboloid,
    PhongShader, Plane, PointLight, ReflectiveShader, RenderConfig, Shader, Sphere,
    TransparentShader, TriangleMesh, World,
};

const QUAD: &str = "\
v -1 0 -1
v 1 0 -1
v 1 2 -1
v -1 2 -1
vt 0 0
vt 1 0
vt 1 1
vt 0 1
f 1/1 2/2 3/3 4/4
";

fn build_world(config: RenderConfig) -> World {
    let camera = Camera::new()
        .position_and_aim(DVec3::new(0.0, 1.0, 6.0), DVec3::new(0.0, 0.5, 0.0), DVec3::Y)
        .focus(1.0, 1.0, 70.0)
        .with_resolution(24, 24);

    let mut world = World::new(camera)
        .with_config(config)
        .with_background(Arc::new(FlatShader::new(Color::new(0.1, 0.2, 0.4))))
        .with_ambient(Color::ONE, 0.3);

    let checker = Texture::new(
        2,
        2,
        vec![Color::ONE, Color::ZERO, Color::ZERO, Color::ONE],
        "<checker>",
    );
    let textured: Arc<dyn Shader> = Arc::new(PhongShader::new(
        ColorSource::from(Arc::new(checker.clone())),
        ColorSource::from(Arc::new(checker)),
        Color::ZERO,
        1.0,
    ));
    let red: Arc<dyn Shader> = Arc::new(PhongShader::new(
        Color::new(0.5, 0.0, 0.0),
        Color::new(1.0, 0.0, 0.0),
        Color::ONE,
        30.0,
    ));

    world.add_object("floor", Plane::new(DVec3::ZERO, DVec3::Y), red.clone());
    world.add_object(
        "backdrop",
        TriangleMesh::new(parse_obj(QUAD).unwrap()),
        textured,
    );
    world.add_object(
        "glass",
        Sphere::new(DVec3::new(-0.6, 0.5, 1.0), 0.5),
        Arc::new(TransparentShader::new(red.clone(), 1.5, 0.2)),
    );
    world.add_object(
        "mirror",
        Sphere::new(DVec3::new(0.6, 0.5, 1.0), 0.5),
        Arc::new(ReflectiveShader::new(red.clone(), 0.5)),
    );
    world.add_object(
        "post",
        Cylinder::new(DVec3::new(1.8, 0.0, 0.0), DVec3::Y, 0.2),
        red.clone(),
    );
    world.add_object(
        "bowl",
        Paraboloid::new(1.0, 1.0, 0.05),
        Arc::new(FlatShader::new(Color::new(0.0, 1.0, 0.0))),
    );

    world.add_light(PointLight::new(
        "key",
        DVec3::new(2.0, 4.0, 4.0),
        Color::ONE,
        4.0 * PI * 30.0,
    ));
    world
}

fn render(world: &World) -> ImageBuffer {
    let mut film = world.new_film();
    world.render(&mut film);
    film
}

#[test]
fn test_parallel_render_matches_serial() {
    let world = build_world(RenderConfig::default());
    let serial = render(&world);

    let mut parallel = world.new_film();
    world.render_parallel(&mut parallel, 5);

    assert_eq!(serial, parallel);
}

#[test]
fn test_render_is_finite_and_not_flat() {
    let world = build_world(RenderConfig {
        recursion_depth_limit: 5,
        ..RenderConfig::default()
    });
    let film = render(&world);

    assert!(film
        .pixels
        .iter()
        .all(|c| c.is_finite() && c.min_element() >= 0.0));

    let first = film.pixels[0];
    assert!(film.pixels.iter().any(|&c| c != first));
}

#[test]
fn test_acceleration_does_not_change_image() {
    let plain = render(&build_world(RenderConfig::default()));
    let accelerated = render(&build_world(RenderConfig {
        enable_acceleration: true,
        ..RenderConfig::default()
    }));

    assert_eq!(plain, accelerated);
}

#[test]
fn test_debug_pixel_does_not_change_image() {
    let _ = env_logger::builder().is_test(true).try_init();

    let plain = render(&build_world(RenderConfig::default()));
    let traced = render(&build_world(RenderConfig {
        debug_pixel: Some([12, 12]),
        ..RenderConfig::default()
    }));

    assert_eq!(plain, traced);
}

#[test]
fn test_depth_limit_zero_renders_black() {
    let world = build_world(RenderConfig {
        recursion_depth_limit: 0,
        ..RenderConfig::default()
    });
    let film = render(&world);

    assert!(film.pixels.iter().all(|&c| c == Color::ZERO));
}

#[test]
fn test_png_output() {
    let world = build_world(RenderConfig::default());
    let film = render(&world);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.png");
    film.save_png(&path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (24, 24));
    assert_eq!(decoded.into_raw(), film.to_rgba());
}
