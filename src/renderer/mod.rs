//! WebGPU rendering module
//!
//! CPU-built triangle lists through a single vertex-color pipeline. The
//! whole frame is three quads and a dashed net.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
