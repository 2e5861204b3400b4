use std::f32::consts::PI;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::sample::{Sample1D, Sample2D};
use super::Vec3;

pub fn random_on_unit_sphere(r: Sample2D) -> Vec3 {
    let Sample2D { x, y } = r;

    let phi = x * 2.0 * PI;
    let z = y * 2.0 - 1.0;
    let r = (1.0 - z * z).sqrt();

    let (s, c) = phi.sin_cos();

    Vec3::new(r * c, r * s, z)
}

pub fn random_in_hemisphere(r: Sample2D, normal: Vec3) -> Vec3 {
    let v = random_on_unit_sphere(r);
    if v * normal > 0.0 {
        v
    } else {
        -v
    }
}

pub trait Sampler {
    fn draw_1d(&mut self) -> Sample1D;
    fn draw_2d(&mut self) -> Sample2D;
}

// One instance per render worker. Never share across threads: correlated
// streams show up as banding in the output.
pub struct RandomSampler {
    rng: SmallRng,
}

impl RandomSampler {
    pub fn new(seed: u64) -> RandomSampler {
        RandomSampler {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Sampler for RandomSampler {
    fn draw_1d(&mut self) -> Sample1D {
        Sample1D::new(self.rng.gen::<f32>())
    }
    fn draw_2d(&mut self) -> Sample2D {
        Sample2D::new(self.rng.gen::<f32>(), self.rng.gen::<f32>())
    }
}
