/// lavis Core Library - Linear algebra demos and their geometry
///
/// This library provides the stateless core of the visualizer: the demo
/// wireframes, 2-D linear maps, the homogeneous isometric rotation,
/// orthographic projection and renderer-independent plot descriptions.

pub mod error;
pub mod geometry;
pub mod parse;
pub mod projection;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use error::{Error, Result};
pub use geometry::Wireframe;
pub use projection::{ViewAngles, ViewCamera};
pub use scene::{Arrow, Bounds, Color, IsometricDemo, Plot, Segment, VectorsDemo};
pub use transform::{IsometricTransform, LinearMap2};
