use glam::DVec3;
use itertools::Itertools;
use rand::{distributions::WeightedIndex, prelude::*};

use crate::{
    camera::Camera,
    material::{Material, MaterialId},
    scene::Scene,
    shape::Shape,
    texture::Texture,
};

const SMALL_RADIUS: f64 = 0.2;
const LARGE_RADIUS: f64 = 1.0;
const GRID_JITTER: f64 = 0.9;

/// Dielectric : random Lambertian : random Metal.
const MATERIAL_WEIGHTS: [u32; 3] = [5, 80, 15];

/// Candidates this close to the metal feature sphere's spot are skipped so
/// the large spheres keep clear ground around them.
const PROTECTED_POINT: DVec3 = DVec3 {
    x: 4.0,
    y: 0.2,
    z: 0.0,
};
const PROTECTED_RADIUS: f64 = 0.9;

fn camera() -> Camera {
    Camera::looking(DVec3::new(13.0, 2.0, 3.0), DVec3::ZERO)
}

fn grid() -> impl Iterator<Item = (i32, i32)> {
    Itertools::cartesian_product(-11..=11, -11..=11)
}

fn jittered_center<R: Rng + ?Sized>(a: i32, b: i32, rng: &mut R) -> DVec3 {
    DVec3::new(
        a as f64 + GRID_JITTER * rng.gen::<f64>(),
        SMALL_RADIUS,
        b as f64 + GRID_JITTER * rng.gen::<f64>(),
    )
}

/// Random sphere field, fully inline: every sphere carries its own material.
pub fn scatter<R: Rng + ?Sized>(rng: &mut R) -> Scene {
    let mut scene = Scene::with_camera(camera());
    let dist = WeightedIndex::new(MATERIAL_WEIGHTS).unwrap();

    scene.insert_object(Shape::sphere(
        DVec3::new(0.0, -1000.0, 0.0),
        1000.0,
        Material::lambertian(Texture::SolidColor(DVec3::splat(0.5))),
    ));

    for (a, b) in grid() {
        let center = jittered_center(a, b, rng);

        let material = match dist.sample(rng) {
            0 => Material::dielectric(),
            1 => Material::random_lambertian(rng),
            _ => Material::random_metal(rng),
        };

        scene.insert_object(Shape::sphere(center, SMALL_RADIUS, material));
    }

    scene.insert_object(Shape::sphere(
        DVec3::new(0.0, 1.0, 0.0),
        LARGE_RADIUS,
        Material::dielectric(),
    ));
    scene.insert_object(Shape::sphere(
        DVec3::new(-4.0, 1.0, 0.0),
        LARGE_RADIUS,
        Material::lambertian(Texture::SolidColor(DVec3::new(0.4, 0.2, 0.1))),
    ));
    scene.insert_object(Shape::sphere(
        DVec3::new(4.0, 1.0, 0.0),
        LARGE_RADIUS,
        Material::metal(Texture::SolidColor(DVec3::new(0.7, 0.6, 0.5)), 0.0),
    ));

    scene
}

fn register_dielectric(scene: &mut Scene) -> MaterialId {
    scene.insert_material(Material::dielectric())
}

fn register_lambertian<R: Rng + ?Sized>(scene: &mut Scene, rng: &mut R) -> MaterialId {
    let texture = scene.insert_texture(Texture::random_solid(rng));
    scene.insert_material(Material::lambertian(texture))
}

fn register_metal<R: Rng + ?Sized>(scene: &mut Scene, rng: &mut R) -> MaterialId {
    let texture = scene.insert_texture(Texture::random_solid(rng));
    let fuzz = rng.gen::<f64>();
    scene.insert_material(Material::metal(texture, fuzz))
}

/// Registry-backed sphere field with motion blur and a protected region
/// around the metal feature sphere.
///
/// Per cell the draws are: center jitter, then (if the candidate survives
/// the protected region) material kind, material parameters, and the speed
/// draws. Rejected cells register nothing, so the registries only hold
/// materials that are actually referenced.
pub fn scatter_motion<R: Rng + ?Sized>(rng: &mut R) -> Scene {
    let mut scene = Scene::with_camera(camera());
    let dist = WeightedIndex::new(MATERIAL_WEIGHTS).unwrap();

    let ground_texture = scene.insert_texture(Texture::SolidColor(DVec3::splat(0.5)));
    let ground = scene.insert_material(Material::lambertian(ground_texture));
    scene.insert_object(Shape::sphere(DVec3::new(0.0, -1000.0, 0.0), 1000.0, ground));

    for (a, b) in grid() {
        let center = jittered_center(a, b, rng);

        if (center - PROTECTED_POINT).length() <= PROTECTED_RADIUS {
            continue;
        }

        let material = match dist.sample(rng) {
            0 => register_dielectric(&mut scene),
            1 => register_lambertian(&mut scene, rng),
            _ => register_metal(&mut scene, rng),
        };

        let sphere = if rng.gen::<f64>() < 0.8 {
            let speed = DVec3::new(0.0, rng.gen::<f64>() * 0.5, 0.0);
            Shape::moving_sphere(center, SMALL_RADIUS, material, speed)
        } else {
            Shape::sphere(center, SMALL_RADIUS, material)
        };
        scene.insert_object(sphere);
    }

    let glass = register_dielectric(&mut scene);
    scene.insert_object(Shape::sphere(DVec3::new(0.0, 1.0, 0.0), LARGE_RADIUS, glass));

    let brown = scene.insert_texture(Texture::SolidColor(DVec3::new(0.4, 0.2, 0.1)));
    let matte = scene.insert_material(Material::lambertian(brown));
    scene.insert_object(Shape::sphere(DVec3::new(-4.0, 1.0, 0.0), LARGE_RADIUS, matte));

    let bright = scene.insert_texture(Texture::SolidColor(DVec3::new(0.7, 0.6, 0.5)));
    let mirror = scene.insert_material(Material::metal(bright, 0.0));
    scene.insert_object(Shape::sphere(DVec3::new(4.0, 1.0, 0.0), LARGE_RADIUS, mirror));

    scene
}
