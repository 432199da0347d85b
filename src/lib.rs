//! Quaternion math for 3D rotation: algebra, normalization, conjugation,
//! inversion and conversion to rotation matrices, over f64 fields.

mod vector;
mod matrix;
mod quaternion;
pub mod error;

pub use crate::error::{VersorResult, VersorError};
pub use crate::vector::Vec3;
pub use crate::matrix::Mat3x3;
pub use crate::quaternion::Quaternion;
