use crate::vector::Vec3;
use crate::quaternion::Quaternion;

/// A 3 x 3 matrix stored as three column vectors.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[repr(C)]
#[derive(bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat3x3 {
    pub c0: Vec3,
    pub c1: Vec3,
    pub c2: Vec3,
}
impl Mat3x3 {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        c0r0: f64, c0r1: f64, c0r2: f64,
        c1r0: f64, c1r1: f64, c1r2: f64,
        c2r0: f64, c2r1: f64, c2r2: f64,
    ) -> Self {
        Self::from_cols(
            Vec3::new(c0r0, c0r1, c0r2),
            Vec3::new(c1r0, c1r1, c1r2),
            Vec3::new(c2r0, c2r1, c2r2),
        )
    }

    pub fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self { c0, c1, c2 }
    }

    pub fn identity() -> Self {
        Self::new(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        )
    }

    pub fn row(&self, i: usize) -> Vec3 {
        match i {
            0 => Vec3::new(self.c0.x, self.c1.x, self.c2.x),
            1 => Vec3::new(self.c0.y, self.c1.y, self.c2.y),
            2 => Vec3::new(self.c0.z, self.c1.z, self.c2.z),
            _ => panic!("row index out of range: {i}"),
        }
    }

    pub fn determinant(&self) -> f64 {
        self.c0.dot(self.c1.cross(self.c2))
    }
}

impl From<[[f64; 3]; 3]> for Mat3x3 {
    fn from(mat: [[f64; 3]; 3]) -> Mat3x3 {
        Self::from_cols(
            Vec3::new(mat[0][0], mat[0][1], mat[0][2]),
            Vec3::new(mat[1][0], mat[1][1], mat[1][2]),
            Vec3::new(mat[2][0], mat[2][1], mat[2][2]),
        )
    }
}

impl From<Mat3x3> for [[f64; 3]; 3] {
    fn from(mat: Mat3x3) -> [[f64; 3]; 3] {
        let c0 = [mat.c0.x, mat.c0.y, mat.c0.z];
        let c1 = [mat.c1.x, mat.c1.y, mat.c1.z];
        let c2 = [mat.c2.x, mat.c2.y, mat.c2.z];

        [c0, c1, c2]
    }
}

impl From<Quaternion> for Mat3x3 {
    /// Convert the quaternion to a 3 x 3 rotation matrix.
    ///
    /// The input must be unit length for the result to be a proper
    /// rotation; no normalization is performed here.
    fn from(quat: Quaternion) -> Mat3x3 {
        let xx = quat.x * quat.x;
        let xy = quat.x * quat.y;
        let xz = quat.x * quat.z;
        let xw = quat.x * quat.w;

        let yy = quat.y * quat.y;
        let yz = quat.y * quat.z;
        let yw = quat.y * quat.w;

        let zz = quat.z * quat.z;
        let zw = quat.z * quat.w;

        Mat3x3::new(
            1.0 - 2.0*(yy + zz), 2.0*(xy + zw),       2.0*(xz - yw),
            2.0*(xy - zw),       1.0 - 2.0*(xx + zz), 2.0*(yz + xw),
            2.0*(xz + yw),       2.0*(yz - xw),       1.0 - 2.0*(xx + yy),
        )
    }
}


#[test]
fn rotation_matrix_test() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let mat = Mat3x3::from(q);

    assert!(mat.row(0) == Vec3::new(-49.0, 4.0, 22.0));
    assert!(mat.row(1) == Vec3::new(20.0, -39.0, 20.0));
    assert!(mat.row(2) == Vec3::new(10.0, 28.0, -25.0));
}

#[test]
fn identity_rotation_test() {
    assert!(Quaternion::identity().to_rotation_matrix() == Mat3x3::identity());
}

#[test]
fn unit_rotation_determinant_test() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0).normalized();
    let det = q.to_rotation_matrix().determinant();

    assert!((det - 1.0).abs() < 1e-9);
}

#[test]
fn cgmath_rotation_matrix_test() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0).normalized();
    let mat = Mat3x3::from(q);

    let cq = cgmath::Quaternion::new(q.w, q.x, q.y, q.z);
    let cmat = cgmath::Matrix3::from(cq);

    let cols = [
        (mat.c0, cmat.x),
        (mat.c1, cmat.y),
        (mat.c2, cmat.z),
    ];
    for (col, ccol) in cols {
        assert!((col.x - ccol.x).abs() < 1e-9);
        assert!((col.y - ccol.y).abs() < 1e-9);
        assert!((col.z - ccol.z).abs() < 1e-9);
    }
}
