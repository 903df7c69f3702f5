use std::f64::consts::PI;

use glam::DVec3;

use crate::{
    camera::Camera,
    material::Material,
    scene::Scene,
    shape::{generate_box, Shape},
    texture::Texture,
};

const SIDE: f64 = 555.0;

/// The classic Cornell box: red/green side walls, white floor, ceiling and
/// back wall, a ceiling light, and two white boxes. Registry mode.
pub fn cornell_box() -> Scene {
    let mut scene = Scene::with_camera(Camera {
        background_color: Some(DVec3::splat(0.001)),
        look_at: Some(DVec3::new(278.0, 278.0, 0.0)),
        look_from: Some(DVec3::new(278.0, 278.0, -800.0)),
        defocus_angle: Some(0.0),
        field_of_view: Some(40.0 * PI / 180.0),
        samples_per_pixel: Some(200),
        ray_max_bounces: Some(50),
        ..Camera::default()
    });

    let red_tex = scene.insert_texture(Texture::SolidColor(DVec3::new(0.65, 0.05, 0.05)));
    let green_tex = scene.insert_texture(Texture::SolidColor(DVec3::new(0.12, 0.45, 0.15)));
    let white_tex = scene.insert_texture(Texture::SolidColor(DVec3::splat(0.73)));
    let light_tex = scene.insert_texture(Texture::SolidColor(DVec3::splat(15.0)));
    let _accent_tex = scene.insert_texture(Texture::SolidColor(DVec3::new(0.0, 0.82, 1.0)));

    let red = scene.insert_material(Material::lambertian(red_tex));
    let green = scene.insert_material(Material::lambertian(green_tex));
    let white = scene.insert_material(Material::lambertian(white_tex));
    let light = scene.insert_material(Material::diffuse_light(light_tex));

    // Left wall
    scene.insert_object(Shape::quad(
        DVec3::ZERO,
        DVec3::new(0.0, SIDE, 0.0),
        DVec3::new(0.0, 0.0, SIDE),
        red,
    ));
    // Right wall
    scene.insert_object(Shape::quad(
        DVec3::new(SIDE, 0.0, 0.0),
        DVec3::new(0.0, SIDE, 0.0),
        DVec3::new(0.0, 0.0, SIDE),
        green,
    ));
    // Floor
    scene.insert_object(Shape::quad(
        DVec3::ZERO,
        DVec3::new(SIDE, 0.0, 0.0),
        DVec3::new(0.0, 0.0, SIDE),
        white,
    ));
    // Ceiling
    scene.insert_object(Shape::quad(
        DVec3::splat(SIDE),
        DVec3::new(-SIDE, 0.0, 0.0),
        DVec3::new(0.0, 0.0, -SIDE),
        white,
    ));
    // Back wall
    scene.insert_object(Shape::quad(
        DVec3::new(0.0, 0.0, SIDE),
        DVec3::new(SIDE, 0.0, 0.0),
        DVec3::new(0.0, SIDE, 0.0),
        white,
    ));
    // Ceiling light
    scene.insert_object(Shape::quad(
        DVec3::new(343.0, 554.0, 332.0),
        DVec3::new(-130.0, 0.0, 0.0),
        DVec3::new(0.0, 0.0, -105.0),
        light,
    ));

    for face in generate_box(
        DVec3::new(130.0, 0.0, 65.0),
        DVec3::new(295.0, 165.0, 230.0),
        white,
    ) {
        scene.insert_object(face);
    }

    for face in generate_box(
        DVec3::new(265.0, 0.0, 295.0),
        DVec3::new(430.0, 330.0, 460.0),
        white,
    ) {
        scene.insert_object(face);
    }

    scene
}
