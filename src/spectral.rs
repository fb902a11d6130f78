pub mod eigen;
pub mod laplacian;
pub mod power;
