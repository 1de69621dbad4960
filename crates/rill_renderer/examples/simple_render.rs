//! Simple Whitted ray tracer example.
//!
//! Renders a glass ball and a mirror ball over a Phong floor and saves
//! the result as `output.png`.

use std::f64::consts::PI;
use std::sync::Arc;

use rill_renderer::{
    Camera, Color, DVec3, FlatShader, PhongShader, Plane, PointLight, ReflectiveShader,
    RenderConfig, Shader, Sphere, TransparentShader, World, DEFAULT_BUCKET_SIZE,
};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let start = std::time::Instant::now();
    let world = build_scene();
    println!("Scene built in {:?}", start.elapsed());

    let mut film = world.new_film();
    println!("Rendering {}x{}...", film.width, film.height);
    world.render_parallel(&mut film, DEFAULT_BUCKET_SIZE);

    let filename = "output.png";
    match film.save_png(filename) {
        Ok(()) => println!("Saved to {}", filename),
        Err(err) => eprintln!("Failed to save {}: {}", filename, err),
    }
}

fn build_scene() -> World {
    let camera = Camera::new()
        .position_and_aim(DVec3::new(0.0, 1.5, 6.0), DVec3::new(0.0, 0.5, 0.0), DVec3::Y)
        .focus(1.0, 640.0 / 480.0, 60.0)
        .with_resolution(640, 480);

    let mut world = World::new(camera)
        .with_config(RenderConfig {
            recursion_depth_limit: 6,
            ..RenderConfig::default()
        })
        .with_background(Arc::new(FlatShader::new(Color::new(0.5, 0.7, 1.0))))
        .with_ambient(Color::ONE, 0.2);

    let floor: Arc<dyn Shader> = Arc::new(PhongShader::new(
        Color::new(0.3, 0.3, 0.3),
        Color::new(0.8, 0.8, 0.8),
        Color::ZERO,
        1.0,
    ));
    let plastic: Arc<dyn Shader> = Arc::new(PhongShader::new(
        Color::new(0.6, 0.1, 0.1),
        Color::new(0.8, 0.2, 0.2),
        Color::ONE,
        50.0,
    ));

    world.add_object("floor", Plane::new(DVec3::ZERO, DVec3::Y), floor);
    world.add_object(
        "glass",
        Sphere::new(DVec3::new(-1.2, 1.0, 0.0), 1.0),
        Arc::new(TransparentShader::new(plastic.clone(), 1.5, 0.1)),
    );
    world.add_object(
        "mirror",
        Sphere::new(DVec3::new(1.2, 1.0, -0.5), 1.0),
        Arc::new(ReflectiveShader::new(plastic, 0.7)),
    );

    world.add_light(PointLight::new(
        "key",
        DVec3::new(3.0, 6.0, 4.0),
        Color::ONE,
        4.0 * PI * 60.0,
    ));

    world
}
