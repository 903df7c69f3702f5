use std::f64::consts::FRAC_PI_2;

use glam::DVec3;
use rand::{distributions::WeightedIndex, prelude::*};

use crate::{
    camera::Camera,
    material::Material,
    math::{seq, vec::DVec3Ext},
    scene::Scene,
    shape::Shape,
    texture::Texture,
};

/// Radius of the carrier sphere. At this scale the shell is flat around the
/// origin, so the tessellated spheres read as a carpet on the ground plane.
const SHELL_RADIUS: f64 = 1001.0;
const STEP: f64 = 4.0 / SHELL_RADIUS;

/// Dielectric : random Lambertian : random Metal.
const MATERIAL_WEIGHTS: [u32; 3] = [1, 4, 8];

fn camera() -> Camera {
    Camera::looking(DVec3::new(8.0, 4.0, 10.0), DVec3::ZERO)
}

/// Place unit spheres on the shell, tangent to the origin. Both angular
/// ranges are inclusive of the stop value, so the stock step yields a 3x3
/// carpet. Per point, the material kind is drawn first, then the material's
/// own parameters.
fn tessellate<R: Rng + ?Sized>(scene: &mut Scene, rng: &mut R) {
    let dist = WeightedIndex::new(MATERIAL_WEIGHTS).unwrap();

    for sigma in seq(-STEP, STEP, STEP) {
        let r = SHELL_RADIUS * sigma.cos();
        let z = sigma.sin();

        for theta in seq(-STEP, STEP, STEP).map(|a| a + FRAC_PI_2) {
            let center = (DVec3::new(theta.cos(), theta.sin(), z) * r
                + DVec3::new(0.0, 1.0 - r, 0.0))
            .round_to(4);

            let material = match dist.sample(rng) {
                0 => Material::dielectric(),
                1 => Material::random_lambertian(rng),
                _ => Material::random_metal(rng),
            };

            scene.insert_object(Shape::sphere(center, 1.0, material));
        }
    }
}

/// Shell carpet over a flat gray ground sphere, fully inline.
pub fn shell<R: Rng + ?Sized>(rng: &mut R) -> Scene {
    let mut scene = Scene::with_camera(camera());

    scene.insert_object(Shape::sphere(
        DVec3::new(0.0, -1000.0, 0.0),
        1000.0,
        Material::lambertian(Texture::SolidColor(DVec3::splat(0.25))),
    ));

    tessellate(&mut scene, rng);

    scene
}

/// Shell carpet over a checkered ground sphere, fully inline.
pub fn shell_checker<R: Rng + ?Sized>(rng: &mut R) -> Scene {
    let mut scene = Scene::with_camera(camera());

    scene.insert_object(Shape::sphere(
        DVec3::new(0.0, -1000.0, 0.0),
        1000.0,
        Material::lambertian(Texture::Checker {
            even: DVec3::new(0.9, 0.9, 0.9),
            odd: DVec3::new(0.2, 0.3, 0.1),
            scale: 128.0,
        }),
    ));

    tessellate(&mut scene, rng);

    scene
}
