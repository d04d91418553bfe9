//! Shading kernel benchmarks.

use divan::{Bencher, counter::ItemsCount};

use phongball_core::prelude::*;

const SIZES: [u32; 4] = [64, 200, 400, 800];

fn scene(size: u32) -> Scene {
    Scene::new(
        size,
        CoordSys::centered(size),
        Vec3::new(0.0, 0.0, 1000.0),
        rgb(0xFC, 0x92, 0xA8),
        Vec3::new(400.0, 400.0, 600.0),
    )
}

#[divan::bench(args = SIZES)]
fn render_sphere(b: Bencher, size: u32) {
    let radius = f64::from(size) * 0.375;
    let pixels = size as usize * size as usize;

    b.with_inputs(|| scene(size))
        .input_counter(move |_| ItemsCount::new(pixels))
        .bench_local_refs(|s| s.render_sphere(radius, rgb(0x66, 0x00, 0x99)));
}

fn main() {
    divan::main()
}
