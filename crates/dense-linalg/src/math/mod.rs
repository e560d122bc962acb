//! Dense matrix and vector types.
//!
//! Provides `Matrix` (2D grid), `Vector` (dynamic dimension) and `Vector3D`
//! (fixed dimension with cross/triple products). All three are plain values:
//! operations allocate their result and never touch their operands.
pub mod matrix;
pub mod vector;
pub mod vector3d;

pub use matrix::Matrix;
pub use vector::Vector;
pub use vector3d::Vector3D;
