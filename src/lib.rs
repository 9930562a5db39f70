//! Procedural mesh generation & vertex attribute layout.
//!
//! A [Geometry] is a set of per-vertex attribute arrays, addressed by [Slot], plus an optional
//! index array and a [BoundingBox]. The [builder] module generates common primitives; [terrain]
//! builds grid meshes from height fields. Nothing here talks to a GPU directly: a [Geometry] is
//! handed to a [GraphicsDevice] when it needs to be drawn.
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod bounds;
pub mod builder;
pub mod camera;
pub mod device;
pub mod error;
pub mod geometry;
#[cfg(feature = "obj")]
pub mod obj;
pub mod tangent;
pub mod terrain;
pub mod transform;

pub use bounds::BoundingBox;
pub use device::{DeviceGeometry, GraphicsDevice, UploadError};
pub use error::Error;
pub use geometry::*;
pub use transform::Transform;

/// Colour assigned to every generated vertex that has no colour of its own.
pub const DEFAULT_COLOUR: nalgebra::Vector4<f32> = nalgebra::Vector4::new(0.7, 0.7, 0.7, 1.0);
