//! Example: Load and inspect an OBJ mesh.
//!
//! Run with: cargo run --example inspect_obj -- assets/teapot.obj

use std::env;

use rill_core::load_obj;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_obj <path-to-obj-file>");
        return;
    }

    let path = &args[1];
    println!("Loading OBJ file: {}", path);

    match load_obj(path) {
        Ok(mesh) => {
            let bounds = mesh.bounds();
            println!("Vertices: {}", mesh.vertex_count());
            println!("Triangles: {}", mesh.triangle_count());
            println!("Textured: {}", mesh.has_uvs());
            println!(
                "Bounds: x [{}, {}], y [{}, {}], z [{}, {}]",
                bounds.x.min, bounds.x.max, bounds.y.min, bounds.y.max, bounds.z.min, bounds.z.max
            );
        }
        Err(e) => {
            eprintln!("Failed to load {}: {}", path, e);
            std::process::exit(1);
        }
    }
}
