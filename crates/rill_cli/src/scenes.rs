//! Built-in demo scenes.

use std::f64::consts::PI;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use rill_core::{load_obj, TextureCache};
use rill_renderer::{
    Camera, Color, ColorSource, Cylinder, DVec3, FlatShader, Paraboloid, PhongShader, Plane,
    PointLight, ReflectiveShader, Shader, Sphere, TransparentShader, TriangleMesh, World,
};
use serde::{Deserialize, Serialize};

use crate::settings::RenderSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// Phong spheres on a floor, two lights, shadows
    Spheres,
    /// Mirror spheres reflecting each other
    Mirrors,
    /// A glass sphere in front of a striped wall
    Glass,
    /// Cylinder and paraboloid
    Shapes,
    /// An OBJ mesh from the settings file
    Mesh,
}

const SKY: Color = Color::new(0.4, 0.55, 0.8);

fn phong(ambient: Color, diffuse: Color, specular: Color, power: f64) -> Arc<dyn Shader> {
    Arc::new(PhongShader::new(ambient, diffuse, specular, power))
}

fn matte(color: Color) -> Arc<dyn Shader> {
    phong(color * 0.5, color, Color::ZERO, 1.0)
}

fn light(name: &str, position: DVec3, brightness: f64) -> PointLight {
    PointLight::new(name, position, Color::ONE, 4.0 * PI * brightness)
}

fn camera(settings: &RenderSettings, position: DVec3, look_at: DVec3, fov: f64) -> Camera {
    Camera::new()
        .position_and_aim(position, look_at, DVec3::Y)
        .focus(1.0, settings.aspect_ratio(), fov)
        .with_resolution(settings.width, settings.height)
}

/// Build the world selected by `settings`.
pub fn build_scene(settings: &RenderSettings) -> Result<World> {
    let world = match settings.scene {
        SceneKind::Spheres => spheres(settings),
        SceneKind::Mirrors => mirrors(settings),
        SceneKind::Glass => glass(settings),
        SceneKind::Shapes => shapes(settings),
        SceneKind::Mesh => mesh(settings)?,
    };
    log::info!(
        "Built {:?} scene: {} objects, {} lights",
        settings.scene,
        world.objects().len(),
        world.lights.len()
    );
    Ok(world)
}

fn base_world(settings: &RenderSettings, camera: Camera) -> World {
    World::new(camera)
        .with_config(settings.render.clone())
        .with_background(Arc::new(FlatShader::new(SKY)))
        .with_ambient(Color::ONE, 0.2)
}

fn spheres(settings: &RenderSettings) -> World {
    let cam = camera(settings, DVec3::new(0.0, 2.0, 8.0), DVec3::new(0.0, 0.8, 0.0), 50.0);
    let mut world = base_world(settings, cam);

    world.add_object("floor", Plane::new(DVec3::ZERO, DVec3::Y), matte(Color::splat(0.7)));
    world.add_object(
        "red",
        Sphere::new(DVec3::new(-1.5, 1.0, 0.0), 1.0),
        phong(Color::new(0.5, 0.1, 0.1), Color::new(0.9, 0.2, 0.2), Color::ONE, 50.0),
    );
    world.add_object(
        "green",
        Sphere::new(DVec3::new(1.2, 0.7, 0.8), 0.7),
        phong(Color::new(0.1, 0.4, 0.1), Color::new(0.2, 0.8, 0.2), Color::splat(0.5), 20.0),
    );

    world.add_light(light("key", DVec3::new(4.0, 6.0, 5.0), 80.0));
    world.add_light(light("fill", DVec3::new(-5.0, 3.0, 4.0), 25.0));
    world
}

fn mirrors(settings: &RenderSettings) -> World {
    let cam = camera(settings, DVec3::new(0.0, 2.5, 9.0), DVec3::new(0.0, 1.0, 0.0), 45.0);
    let mut world = base_world(settings, cam);

    let chrome: Arc<dyn Shader> = Arc::new(ReflectiveShader::new(
        phong(Color::splat(0.1), Color::splat(0.2), Color::ONE, 80.0),
        0.8,
    ));
    let floor: Arc<dyn Shader> = Arc::new(ReflectiveShader::new(matte(Color::splat(0.6)), 0.2));

    world.add_object("floor", Plane::new(DVec3::ZERO, DVec3::Y), floor);
    world.add_object("left", Sphere::new(DVec3::new(-1.1, 1.0, 0.0), 1.0), chrome.clone());
    world.add_object("right", Sphere::new(DVec3::new(1.1, 1.0, 0.0), 1.0), chrome);
    world.add_object(
        "orange",
        Sphere::new(DVec3::new(0.0, 0.5, 2.0), 0.5),
        matte(Color::new(1.0, 0.5, 0.1)),
    );

    world.add_light(light("key", DVec3::new(0.0, 8.0, 6.0), 120.0));
    world
}

fn glass(settings: &RenderSettings) -> World {
    let cam = camera(settings, DVec3::new(0.0, 1.0, 7.0), DVec3::new(0.0, 1.0, 0.0), 50.0);
    let mut world = base_world(settings, cam);

    world.add_object("floor", Plane::new(DVec3::ZERO, DVec3::Y), matte(Color::splat(0.8)));
    world.add_object(
        "wall",
        Plane::new(DVec3::new(0.0, 0.0, -3.0), DVec3::Z),
        matte(Color::new(0.2, 0.3, 0.9)),
    );
    for (i, x) in [-2.0, -0.7, 0.6, 1.9].into_iter().enumerate() {
        world.add_object(
            format!("post{}", i),
            Cylinder::new(DVec3::new(x, 0.0, -2.0), DVec3::Y, 0.15),
            matte(Color::new(0.9, 0.8, 0.2)),
        );
    }

    let tint = phong(Color::ZERO, Color::splat(0.1), Color::ONE, 100.0);
    world.add_object(
        "ball",
        Sphere::new(DVec3::new(0.0, 1.0, 0.5), 1.0),
        Arc::new(TransparentShader::new(tint, 1.5, 0.05)),
    );

    world.add_light(light("key", DVec3::new(3.0, 5.0, 5.0), 100.0));
    world
}

fn shapes(settings: &RenderSettings) -> World {
    let cam = camera(settings, DVec3::new(6.0, 4.0, 10.0), DVec3::new(0.0, 0.0, 2.0), 45.0);
    let mut world = base_world(settings, cam);

    world.add_object(
        "floor",
        Plane::new(DVec3::new(0.0, -1.5, 0.0), DVec3::Y),
        matte(Color::splat(0.6)),
    );
    world.add_object(
        "pipe",
        Cylinder::new(DVec3::new(-2.5, 0.0, 0.0), DVec3::new(0.0, 1.0, 0.3), 0.6),
        phong(Color::new(0.1, 0.3, 0.5), Color::new(0.2, 0.5, 0.9), Color::ONE, 40.0),
    );
    world.add_object(
        "dish",
        Paraboloid::new(0.5, 0.5, 1.0),
        phong(Color::new(0.5, 0.3, 0.1), Color::new(0.9, 0.6, 0.2), Color::splat(0.5), 10.0),
    );

    world.add_light(light("key", DVec3::new(5.0, 8.0, 8.0), 150.0));
    world
}

fn mesh(settings: &RenderSettings) -> Result<World> {
    let Some(path) = &settings.mesh else {
        bail!("the mesh scene needs a `mesh` path in the settings file");
    };
    let mesh = load_obj(path).with_context(|| format!("failed to load mesh {}", path.display()))?;

    let color = match &settings.texture {
        Some(texture_path) if mesh.has_uvs() => {
            let mut cache = TextureCache::new();
            let texture = cache
                .load(texture_path)
                .with_context(|| format!("failed to load texture {}", texture_path.display()))?;
            ColorSource::from(texture)
        }
        Some(texture_path) => {
            log::warn!(
                "{} has no texture coordinates; ignoring {}",
                path.display(),
                texture_path.display()
            );
            ColorSource::from(Color::splat(0.8))
        }
        None => ColorSource::from(Color::splat(0.8)),
    };

    // Frame the mesh from the front, a little above
    let bounds = mesh.bounds();
    let center = bounds.centroid();
    let extent = DVec3::new(bounds.x.size(), bounds.y.size(), bounds.z.size()).max_element();
    let eye = center + DVec3::new(0.0, 0.4, 2.0) * extent.max(1e-3);

    let cam = camera(settings, eye, center, 45.0);
    let mut world = base_world(settings, cam);

    world.add_object(
        "floor",
        Plane::new(DVec3::new(0.0, bounds.y.min, 0.0), DVec3::Y),
        matte(Color::splat(0.5)),
    );
    world.add_object(
        "mesh",
        TriangleMesh::new(mesh),
        Arc::new(PhongShader::new(color.clone(), color, Color::splat(0.3), 20.0)),
    );
    world.add_light(light("key", eye + DVec3::new(extent, 2.0 * extent, 0.0), 50.0 * extent * extent));
    Ok(world)
}
