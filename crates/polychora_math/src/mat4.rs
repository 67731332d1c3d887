//! Plane-indexed 4x4 rotation matrices
//!
//! In 4D, rotations happen in planes rather than around axes. There are six
//! independent rotation planes: XY, XZ, XW, YZ, YW, ZW. A single-plane
//! rotation embeds the familiar 2D cosine/sine block at the plane's two axis
//! indices and leaves the other two axes fixed; composing all six with
//! independently varying angles produces the characteristic 4D tumble.
//!
//! Matrices are row-major. They are only ever built as the identity or as a
//! single-plane rotation and combined by multiplication, so every rotation
//! matrix here is orthonormal by construction.

use crate::Vec4;

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationPlane {
    /// XY plane - the familiar 3D yaw
    XY,
    /// XZ plane - the familiar 3D pitch
    XZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YZ plane - the familiar 3D roll
    YZ,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    /// All six planes in the fixed composition order used throughout the
    /// engine. Reordering changes the composed rotation.
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::XW,
        RotationPlane::YZ,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// The two axis indices spanning this plane (0=X, 1=Y, 2=Z, 3=W)
    #[inline]
    pub fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (0, 1),
            RotationPlane::XZ => (0, 2),
            RotationPlane::XW => (0, 3),
            RotationPlane::YZ => (1, 2),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }

    /// Position of this plane in [`RotationPlane::ALL`]
    #[inline]
    pub fn index(self) -> usize {
        match self {
            RotationPlane::XY => 0,
            RotationPlane::XZ => 1,
            RotationPlane::XW => 2,
            RotationPlane::YZ => 3,
            RotationPlane::YW => 4,
            RotationPlane::ZW => 5,
        }
    }

    /// Lowercase label, e.g. "xw"
    pub fn label(self) -> &'static str {
        match self {
            RotationPlane::XY => "xy",
            RotationPlane::XZ => "xz",
            RotationPlane::XW => "xw",
            RotationPlane::YZ => "yz",
            RotationPlane::YW => "yw",
            RotationPlane::ZW => "zw",
        }
    }
}

/// 4x4 row-major rotation matrix
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    rows: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    /// Identity matrix
    pub const IDENTITY: Self = Self {
        rows: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Create a rotation by `angle` radians in a single plane.
    ///
    /// The result is the identity except for the 2x2 cosine/sine block over
    /// the plane's two axes - the standard 2D rotation matrix embedded in 4D.
    /// A positive angle rotates the plane's first axis toward its second.
    pub fn rotation(plane: RotationPlane, angle: f32) -> Self {
        let (a, b) = plane.axes();
        let cs = angle.cos();
        let sn = angle.sin();

        let mut m = Self::IDENTITY;
        m.rows[a][a] = cs;
        m.rows[a][b] = -sn;
        m.rows[b][a] = sn;
        m.rows[b][b] = cs;
        m
    }

    /// Transform a point: result = M * v
    #[inline]
    pub fn transform_point(&self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }

    /// Get a row as a vector
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        let r = self.rows[i];
        Vec4::new(r[0], r[1], r[2], r[3])
    }

    /// Transpose. For the orthonormal rotations built here this is the
    /// inverse.
    pub fn transpose(&self) -> Self {
        let mut rows = [[0.0f32; 4]; 4];
        for (i, row) in self.rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                rows[j][i] = v;
            }
        }
        Self { rows }
    }

    /// Raw row-major array, for handing off to GPU uniform structs
    #[inline]
    pub fn to_rows_array(&self) -> [[f32; 4]; 4] {
        self.rows
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Self;

    /// Matrix product: `a * b` applies `b` first, then `a`.
    fn mul(self, other: Self) -> Self {
        let mut rows = [[0.0f32; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                let mut sum = 0.0;
                for (k, other_row) in other.rows.iter().enumerate() {
                    sum += self.rows[i][k] * other_row[j];
                }
                rows[i][j] = sum;
            }
        }
        Self { rows }
    }
}
