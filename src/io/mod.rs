//! File I/O for triangle meshes.

pub mod csv;

pub use csv::{read_triangles, write_triangles};
