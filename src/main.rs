use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use pbr::ProgressBar;
use rayon::prelude::*;
use structopt::StructOpt;

pub mod camera;
pub mod film;
pub mod geometry;
pub mod integrator;
pub mod materials;
pub mod math;
pub mod parsing;
pub mod scene;
pub mod texture;
pub mod tonemap;

use camera::Camera;
use film::Film;
use geometry::{PrimitiveEnum, PrimitiveList, Sphere};
use integrator::ray_color;
use materials::{Dielectric, DiffuseLight, Lambertian, MaterialEnum, Metal};
use math::{Point3, RGBColor, RandomSampler, Sampler};
use parsing::{load_json, SceneData};
use scene::{Background, Scene};
use texture::Texture;
use tonemap::{write_png, write_ppm, Gamma2};

const VIEWPORT_HEIGHT: f32 = 2.0;
const FOCAL_LENGTH: f32 = 1.0;

#[derive(StructOpt)]
#[structopt(name = "pathlight", about = "offline path tracer")]
pub struct Opt {
    #[structopt(long, default_value = "400")]
    pub width: usize,
    #[structopt(long, default_value = "225")]
    pub height: usize,
    /// jittered camera rays averaged per pixel
    #[structopt(long, default_value = "100")]
    pub samples: usize,
    /// maximum bounces per camera ray
    #[structopt(long, default_value = "50")]
    pub bounces: u32,
    #[structopt(long, default_value = "0")]
    pub seed: u64,
    #[structopt(long)]
    pub threads: Option<usize>,
    /// scene description file; the built-in scene is rendered when omitted
    #[structopt(long, parse(from_os_str))]
    pub scene: Option<PathBuf>,
    #[structopt(short, long, parse(from_os_str), default_value = "output.ppm")]
    pub output: PathBuf,
    #[structopt(long, parse(from_os_str))]
    pub png: Option<PathBuf>,
}

pub fn render(scene: &Scene, camera: Camera, opt: &Opt) -> Film<RGBColor> {
    let (width, height) = (opt.width, opt.height);
    let mut film = Film::new(width, height, RGBColor::ZERO);
    let progress = Mutex::new(ProgressBar::on(std::io::stderr(), height as u64));

    film.buffer
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            // independent stream per row: workers never share random state
            // and a fixed seed reproduces the image under any scheduling
            let mut sampler =
                RandomSampler::new(opt.seed ^ (y as u64 + 1).wrapping_mul(0x9E3779B97F4A7C15));
            for (x, pixel) in row.iter_mut().enumerate() {
                let mut color = RGBColor::ZERO;
                for _ in 0..opt.samples {
                    let jitter = sampler.draw_2d();
                    let u = (x as f32 + jitter.x) / (width - 1) as f32;
                    let v = ((height - 1 - y) as f32 + jitter.y) / (height - 1) as f32;
                    let r = camera.get_ray((u, v), sampler.draw_1d().x);
                    color += ray_color(r, scene, opt.bounces, &mut sampler);
                }
                *pixel = color / opt.samples as f32;
            }
            progress.lock().unwrap().inc();
        });

    progress.lock().unwrap().finish();
    film
}

pub fn default_scene() -> Scene {
    let materials = vec![
        MaterialEnum::Lambertian(Lambertian::new(Texture::solid(0.8, 0.8, 0.0))),
        MaterialEnum::Lambertian(Lambertian::new(Texture::solid(0.1, 0.2, 0.5))),
        MaterialEnum::Dielectric(Dielectric::new(1.5)),
        MaterialEnum::Metal(Metal::new(Texture::solid(0.8, 0.6, 0.2), 0.1)),
        MaterialEnum::DiffuseLight(DiffuseLight::new(Texture::solid(4.0, 4.0, 4.0))),
    ];
    let mut root = PrimitiveList::new(vec![
        PrimitiveEnum::Sphere(Sphere::new(100.0, Point3::new(0.0, -100.5, -1.0), 0)),
        PrimitiveEnum::Sphere(Sphere::new(0.5, Point3::new(0.0, 0.0, -1.0), 1)),
        PrimitiveEnum::Sphere(Sphere::new(0.5, Point3::new(-1.0, 0.0, -1.0), 2)),
        PrimitiveEnum::Sphere(Sphere::new(0.5, Point3::new(1.0, 0.0, -1.0), 3)),
        // small matte sphere sharing the center sphere's material
        PrimitiveEnum::Sphere(Sphere::new(0.15, Point3::new(0.4, -0.35, -0.6), 1)),
    ]);
    root.push(PrimitiveEnum::Sphere(Sphere::new(
        0.25,
        Point3::new(0.0, 1.25, -1.0),
        4,
    )));
    Scene::new(Background::SKY, materials, root)
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();

    rayon::ThreadPoolBuilder::new()
        .num_threads(opt.threads.unwrap_or_else(num_cpus::get))
        .build_global()?;

    let scene: Scene = match opt.scene.clone() {
        Some(path) => load_json::<SceneData>(path)?.into(),
        None => default_scene(),
    };
    let aspect_ratio = opt.width as f32 / opt.height as f32;
    let camera = Camera::new(Point3::ORIGIN, aspect_ratio, VIEWPORT_HEIGHT, FOCAL_LENGTH);

    let film = render(&scene, camera, &opt);

    let mut writer = BufWriter::new(File::create(&opt.output)?);
    write_ppm(&Gamma2, &film, &mut writer)?;
    writer.flush()?;

    if let Some(path) = &opt.png {
        write_png(&Gamma2, &film, path)?;
    }

    Ok(())
}
