use std::ops::{Neg, Add, Sub, Mul, Div};
use std::fmt;

use crate::error::{VersorResult, VersorError};
use crate::vector::Vec3;
use crate::matrix::Mat3x3;

/// A quaternion `w + xi + yj + zk` over f64 fields.
///
/// Values are immutable: every operation returns a new quaternion.
#[derive(PartialEq, Clone, Copy, Default, Debug)]
#[repr(C)]
#[derive(bytemuck::Pod, bytemuck::Zeroable)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Quaternion {
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// The multiplicative identity `1 + 0i + 0j + 0k`.
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    pub fn scalar(&self) -> f64 {
        self.w
    }

    pub fn vector(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    pub fn norm_sq(&self) -> f64 {
        self.w*self.w + self.x*self.x + self.y*self.y + self.z*self.z
    }

    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        *self / norm
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// The multiplicative inverse, `conjugate / norm²`.
    ///
    /// Fails on a zero-norm quaternion; the check happens before the
    /// division so no non-finite values leak out.
    pub fn inverse(&self) -> VersorResult<Self> {
        let norm_sq = self.norm_sq();
        if norm_sq == 0.0 {
            return Err(VersorError::ZeroNormInverse);
        }
        Ok(self.conjugate() / norm_sq)
    }

    /// Componentwise comparison within `eps`. Equality via `==` is exact.
    pub fn approx_eq(&self, other: Self, eps: f64) -> bool {
        (self.w - other.w).abs() < eps
        && (self.x - other.x).abs() < eps
        && (self.y - other.y).abs() < eps
        && (self.z - other.z).abs() < eps
    }

    /// Convert to a 3 x 3 rotation matrix.
    ///
    /// Assumes `self` is unit length and does not normalize; call
    /// [`normalized`](Self::normalized) first if the input may not be.
    pub fn to_rotation_matrix(&self) -> Mat3x3 {
        Mat3x3::from(*self)
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(
            self.w + other.w,
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
        )
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(
            self.w - other.w,
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
        )
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Hamilton product. Not commutative.
    fn mul(self, other: Self) -> Self::Output {
        Self::new(
            self.w*other.w - self.x*other.x - self.y*other.y - self.z*other.z,
            self.w*other.x + self.x*other.w + self.y*other.z - self.z*other.y,
            self.w*other.y - self.x*other.z + self.y*other.w + self.z*other.x,
            self.w*other.z + self.x*other.y - self.y*other.x + self.z*other.w,
        )
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        Self::new(self.w * other, self.x * other, self.y * other, self.z * other)
    }
}

impl Div<f64> for Quaternion {
    type Output = Self;

    fn div(self, other: f64) -> Self::Output {
        Self::new(self.w / other, self.x / other, self.y / other, self.z / other)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(arr: [f64; 4]) -> Quaternion {
        Quaternion::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(quat: Quaternion) -> [f64; 4] {
        [quat.w, quat.x, quat.y, quat.z]
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "
            \rw: {}
            \rx: {},
            \ry: {},
            \rz: {}\n",
            self.w,
            self.x,
            self.y,
            self.z
        )
    }
}


#[test]
fn add_sub_test() {
    let q1 = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let q2 = Quaternion::new(5.0, 6.0, 7.0, 8.0);

    assert!(q1 + q2 == Quaternion::new(6.0, 8.0, 10.0, 12.0));
    assert!(q1 - q2 == Quaternion::new(-4.0, -4.0, -4.0, -4.0));
}

#[test]
fn additive_identity_test() {
    let q = Quaternion::new(1.5, -2.25, 0.5, 3.75);

    assert!(q + Quaternion::zero() == q);
    assert!(q - q == Quaternion::zero());
}

#[test]
fn hamilton_product_test() {
    let q1 = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let q2 = Quaternion::new(5.0, 6.0, 7.0, 8.0);

    assert!(q1 * q2 == Quaternion::new(-60.0, 12.0, 30.0, 24.0));
}

#[test]
fn multiplicative_identity_test() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);

    assert!(q * Quaternion::identity() == q);
    assert!(Quaternion::identity() * q == q);
}

#[test]
fn non_commutative_test() {
    let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);

    assert!(i * j == Quaternion::new(0.0, 0.0, 0.0, 1.0));
    assert!(j * i == Quaternion::new(0.0, 0.0, 0.0, -1.0));
    assert!(i * j != j * i);
}

#[test]
fn norm_test() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);

    assert!(q.norm_sq() == 30.0);
    assert!(q.norm() == 30.0f64.sqrt());
    assert!(Quaternion::zero().norm() == 0.0);
    assert!(Quaternion::new(0.0, -3.0, 0.0, 0.0).norm() == 3.0);
}

#[test]
fn conjugate_test() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);

    assert!(q.conjugate() == Quaternion::new(1.0, -2.0, -3.0, -4.0));
    assert!(q.conjugate().conjugate() == q);
}

#[test]
fn inverse_round_trip_test() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let inv = q.inverse().unwrap();

    assert!((q * inv).approx_eq(Quaternion::identity(), 1e-9));
    assert!((inv * q).approx_eq(Quaternion::identity(), 1e-9));
}

#[test]
fn zero_norm_inverse_test() {
    let err = Quaternion::zero().inverse();
    assert!(err == Err(VersorError::ZeroNormInverse));
}

#[test]
fn normalized_test() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0).normalized();
    assert!((q.norm() - 1.0).abs() < 1e-12);
}

#[test]
fn cgmath_product_test() {
    let q1 = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let q2 = Quaternion::new(5.0, 6.0, 7.0, 8.0);
    let prod = q1 * q2;

    let c1 = cgmath::Quaternion::new(q1.w, q1.x, q1.y, q1.z);
    let c2 = cgmath::Quaternion::new(q2.w, q2.x, q2.y, q2.z);
    let cprod = c1 * c2;

    assert!(prod.approx_eq(
        Quaternion::new(cprod.s, cprod.v.x, cprod.v.y, cprod.v.z),
        1e-9,
    ));
}
