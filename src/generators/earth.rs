use glam::DVec3;

use crate::{
    camera::Camera, material::Material, scene::Scene, shape::Shape, texture::Texture,
};

/// Image-textured globes over a dull metal ground, registry mode.
pub fn earth() -> Scene {
    let mut scene = Scene::with_camera(Camera::looking(
        DVec3::new(60.0, 20.0, 3.0),
        DVec3::new(0.0, 10.0, 0.0),
    ));

    let gray = scene.insert_texture(Texture::SolidColor(DVec3::splat(0.4)));
    let earth = scene.insert_texture(Texture::Image {
        file: "scenes/earth.jpg".to_string(),
    });
    let moon = scene.insert_texture(Texture::Image {
        file: "scenes/moon.jpg".to_string(),
    });

    let ground = scene.insert_material(Material::metal(gray, 0.03125));
    let earth = scene.insert_material(Material::lambertian(earth));
    let moon = scene.insert_material(Material::lambertian(moon));

    scene.insert_object(Shape::sphere(
        DVec3::new(0.0, -10000.0, 0.0),
        10000.0,
        ground,
    ));
    scene.insert_object(Shape::sphere(DVec3::new(0.0, 10.0, 0.0), 10.0, earth));
    scene.insert_object(Shape::sphere(DVec3::new(-12.0, 12.0, -20.0), 3.0, moon));

    scene
}

#[cfg(test)]
mod tests {
    use crate::texture::Texture;

    use super::earth;

    #[test]
    fn registries_and_objects_line_up() {
        let scene = earth();
        scene.validate();

        assert_eq!(scene.objects.len(), 3);
        assert_eq!(scene.materials.len(), 3);
        assert_eq!(scene.textures.len(), 3);

        assert_eq!(
            scene.textures.get(1),
            Some(&Texture::Image {
                file: "scenes/earth.jpg".to_string()
            }),
        );
    }
}
