//! 4D Mathematics for the Polychora visualizer
//!
//! This crate provides the vector, rotation, and projection primitives the
//! rest of the workspace is built on.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Vec3`] - 3D vector, the result of the first perspective divide
//! - [`Mat4`] - 4x4 rotation matrix composed from single-plane rotations
//! - [`RotationPlane`] - one of the six independent rotation planes in 4D
//!
//! ## Projection
//!
//! - [`projection::project_4d_to_3d`] - perspective divide along W
//! - [`projection::project_3d_to_2d`] - perspective divide along Z into pixels
//! - [`projection::project_polytope`] - index-aligned projection of a vertex list

mod vec3;
mod vec4;
pub mod mat4;
pub mod projection;

pub use mat4::{Mat4, RotationPlane};
pub use projection::Viewport;
pub use vec3::Vec3;
pub use vec4::Vec4;
