//! Shading a sphere into a framebuffer.
//!
//! A [`Scene`][scene::Scene] owns a square color buffer, a coordinate
//! system, a point [light][light::Light] and an eye position. Each call to
//! [`render_sphere`][scene::Scene::render_sphere] casts one ray per pixel
//! straight along the z axis, tests it against a sphere centered at the
//! scene origin, and colors the hits with a Phong-style
//! [fragment shader][shader::FragmentShader].

pub mod anim;
pub mod light;
pub mod scene;
pub mod shader;
pub mod stats;

pub use scene::Scene;
pub use stats::{Stats, Throughput};
