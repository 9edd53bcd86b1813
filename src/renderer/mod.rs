//! Rendering adapter
//!
//! Turns the visible scene into colored triangles. Uploading them is left to
//! whichever graphics backend the host uses.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::Scene;
pub use vertex::Vertex;
