use std::f32::consts::PI;

use super::Vec3;

//----------------------------------------------------------------------
// theta = azimuthal angle
// phi = inclination, i.e. angle measured from +Z

pub fn direction_to_uv(direction: Vec3) -> (f32, f32) {
    let theta = direction.y.atan2(direction.x);
    let phi = direction.z.clamp(-1.0, 1.0).acos();
    let u = theta / 2.0 / PI + 0.5;
    let v = phi / PI;
    (u, v)
}
