use glam::DVec3;

use crate::{
    camera::Camera, material::Material, scene::Scene, shape::Shape, texture::Texture,
};

/// A marble sphere lit by a warm quad panel and a cool overhead sphere,
/// registry mode. The background is near-black so the lights carry the
/// scene.
pub fn simple_lights() -> Scene {
    let mut scene = Scene::with_camera(Camera {
        background_color: Some(DVec3::splat(0.001)),
        look_at: Some(DVec3::new(0.0, 2.0, 0.0)),
        look_from: Some(DVec3::new(26.0, 3.0, 6.0)),
        ..Camera::default()
    });

    let gray = scene.insert_texture(Texture::SolidColor(DVec3::splat(0.4)));
    let marble = scene.insert_texture(Texture::marble(0, 0.2));
    let warm = scene.insert_texture(Texture::SolidColor(DVec3::new(4.0, 2.0, 1.0)));
    let cool = scene.insert_texture(Texture::SolidColor(DVec3::new(1.0, 2.0, 4.0)));

    let ground = scene.insert_material(Material::lambertian(gray));
    let marble = scene.insert_material(Material::lambertian(marble));
    let warm = scene.insert_material(Material::diffuse_light(warm));
    let cool = scene.insert_material(Material::diffuse_light(cool));

    scene.insert_object(Shape::sphere(
        DVec3::new(0.0, -1_000_000.0, 0.0),
        1_000_000.0,
        ground,
    ));
    scene.insert_object(Shape::sphere(DVec3::new(0.0, 2.0, 0.0), 2.0, marble));
    scene.insert_object(Shape::quad(
        DVec3::new(3.0, 1.0, -2.0),
        DVec3::new(2.0, 0.0, 0.0),
        DVec3::new(0.0, 2.0, 0.0),
        warm,
    ));
    scene.insert_object(Shape::sphere(DVec3::new(0.0, 7.0, 0.0), 1.0, cool));

    scene
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use crate::material::Material;

    use super::simple_lights;

    #[test]
    fn lights_emit_above_unit_intensity() {
        let scene = simple_lights();
        scene.validate();

        assert_eq!(scene.objects.len(), 4);
        assert_eq!(scene.camera.background_color, Some(DVec3::splat(0.001)));

        let lights = scene
            .materials
            .iter()
            .filter(|material| matches!(material, Material::DiffuseLight { .. }))
            .count();
        assert_eq!(lights, 2);
    }
}
