use std::ops;

/// 2D Point (X,Y).
#[derive(Copy, Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

/// 3D Point (X,Y,Z).
#[derive(Copy, Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Lift into 3D at elevation `z`.
    pub fn with_z(self, z: f64) -> Point3 {
        Point3::new(self.x, self.y, z)
    }
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Scale point by multiplying all dimensions by `scalar`.
    pub fn scale(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Calculate the magnitude of the vector.
    pub fn mag(self) -> f64 {
        dot_prod(self, self).sqrt()
    }

    pub fn with_z(self, z: f64) -> Self {
        Self { z, ..self }
    }

    /// Project the point straight down onto the `z = 0` plane.
    pub fn flatten(self) -> Self {
        self.with_z(0.0)
    }

    pub fn to_p2(self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

impl ops::Add for Point3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl ops::Sub for Point3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f64; 2]> for Point2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

pub fn dot_prod(a: Point3, b: Point3) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

#[allow(clippy::many_single_char_names)]
pub fn xprod(a: Point3, b: Point3) -> Point3 {
    let x = a.y * b.z - a.z * b.y;
    let y = a.z * b.x - a.x * b.z;
    let z = a.x * b.y - a.y * b.x;
    Point3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn point_adding() {
        assert_eq!(p(0.0, 1.0, 5.0) + p(3.0, 1.0, 0.0), p(3.0, 2.0, 5.0));
        assert_eq!(p(0.0, 1.0, 5.0) + p(3.0, 1.0, 5.0), p(3.0, 2.0, 10.0));
        assert_eq!(p(0.0, 1.0, 5.0) - p(3.0, 1.0, 5.0), p(-3.0, 0.0, 0.0));
    }

    #[test]
    fn point_scaling() {
        assert_eq!(p(-2.0, 0.5, 3.0).scale(-0.5), p(1.0, -0.25, -1.5));
    }

    #[test]
    fn flattening() {
        assert_eq!(p(1.0, 2.0, 3.0).flatten(), p(1.0, 2.0, 0.0));
        assert_eq!(p(1.0, 2.0, 3.0).to_p2(), Point2::new(1.0, 2.0));
        assert_eq!(Point2::new(1.0, 2.0).with_z(4.0), p(1.0, 2.0, 4.0));
    }

    #[test]
    fn xproduct_test() {
        let v = xprod(p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        assert_eq!(v, p(0.0, 0.0, 1.0));

        let v = xprod(p(1.0, 1.0, 0.0), p(-1.0, 1.0, 0.0));
        assert_eq!(v, p(0.0, -0.0, 2.0));
    }

    #[test]
    fn mag_testing() {
        let m = p(2.0, 3.0, 6.0).mag() - 7.0;
        assert!(m.abs() < 1e-11);

        let m = p(2.0, -3.0, 6.0).mag() - 7.0;
        assert!(m.abs() < 1e-11);

        let m = p(-2.0, -3.0, -6.0).mag() - 7.0;
        assert!(m.abs() < 1e-11);
    }
}
