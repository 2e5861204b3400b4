use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn cross(&self, other: Vec3) -> Self {
        let (x1, y1, z1) = (self.x, self.y, self.z);
        let (x2, y2, z2) = (other.x, other.y, other.z);
        Vec3::new(y1 * z2 - z1 * y2, z1 * x2 - x1 * z2, x1 * y2 - x2 * y1)
    }

    pub fn norm_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    // callers must not pass a zero-length vector
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        Vec3::new(self.x / norm, self.y / norm, self.z / norm)
    }

    pub fn near_zero(&self) -> bool {
        const EPSILON: f32 = 1e-8;
        self.x.abs() < EPSILON && self.y.abs() < EPSILON && self.z.abs() < EPSILON
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Vec3::ZERO
    }
}

// dot product
impl Mul for Vec3 {
    type Output = f32;
    fn mul(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, other: f32) -> Vec3 {
        Vec3::new(self.x * other, self.y * other, self.z * other)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        other * self
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, other: f32) {
        self.x *= other;
        self.y *= other;
        self.z *= other;
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    fn div(self, other: f32) -> Vec3 {
        Vec3::new(self.x / other, self.y / other, self.z / other)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Vec3) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        self + (-other)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Vec3) {
        *self = *self - other;
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(other: [f32; 3]) -> Vec3 {
        Vec3::new(other[0], other[1], other[2])
    }
}

pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * (v * n) * n
}

pub fn refract(uv: Vec3, n: Vec3, eta_ratio: f32) -> Vec3 {
    let cos_theta = (-uv * n).min(1.0);
    let r_out_perp = eta_ratio * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.norm_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ops() {
        let a = Vec3::new(3.0, 0.0, 2.0);
        let b = Vec3::new(-1.0, 4.0, 2.0);

        assert_eq!(a.cross(b), Vec3::new(-8.0, -8.0, 12.0));
        assert_eq!(a * b, 1.0);
        assert_eq!(a + b, Vec3::new(2.0, 4.0, 4.0));
        assert_eq!(-a, Vec3::new(-3.0, -0.0, -2.0));
        assert_eq!(a * 2.0, Vec3::new(6.0, 0.0, 4.0));
        assert_eq!(a / 2.0, Vec3::new(1.5, 0.0, 1.0));
        assert_eq!(a - b, Vec3::new(4.0, -4.0, 0.0));
        assert_eq!(a.norm_squared(), 13.0);
        assert_eq!(a.norm(), (13.0f32).sqrt());
    }

    #[test]
    fn test_normalized() {
        let v = Vec3::new(0.0, 3.0, 4.0).normalized();
        assert!((v.norm() - 1.0).abs() < 1e-6);
        assert!((v.y - 0.6).abs() < 1e-6);
        assert!((v.z - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_near_zero() {
        assert!(Vec3::ZERO.near_zero());
        assert!(Vec3::new(1e-9, -1e-9, 1e-9).near_zero());
        assert!(!Vec3::new(1e-4, 0.0, 0.0).near_zero());
    }

    #[test]
    fn test_reflect_preserves_norm() {
        let n = Vec3::new(0.0, 1.0, 0.0);
        let v = Vec3::new(0.7, -0.3, 0.2);
        let r = reflect(v, n);
        assert!((r.norm() - v.norm()).abs() < 1e-6);
        assert_eq!(r, Vec3::new(0.7, 0.3, 0.2));
    }

    #[test]
    fn test_refract_straight_through() {
        // normal incidence does not bend regardless of the index ratio
        let n = Vec3::new(0.0, 0.0, 1.0);
        let uv = Vec3::new(0.0, 0.0, -1.0);
        let r = refract(uv, n, 1.5);
        assert!((r - uv).norm() < 1e-6);
    }

    #[test]
    fn test_refract_matched_indices() {
        // eta ratio of 1 leaves the direction unchanged
        let n = Vec3::new(0.0, 0.0, 1.0);
        let uv = Vec3::new(0.6, 0.0, -0.8);
        let r = refract(uv, n, 1.0);
        assert!((r - uv).norm() < 1e-6);
    }
}
