use glam::DVec3;

use crate::{
    camera::Camera, material::Material, scene::Scene, shape::Shape, texture::Texture,
};

/// Noise-texture showcase: ridged Perlin and marble globes next to rough
/// tinted metals, registry mode.
pub fn noise_spheres() -> Scene {
    let mut scene = Scene::with_camera(Camera::looking(
        DVec3::new(70.0, 30.0, 0.0),
        DVec3::new(0.0, 10.0, -2.0),
    ));

    let gray = scene.insert_texture(Texture::SolidColor(DVec3::splat(0.4)));
    let ridged = scene.insert_texture(Texture::perlin_ridged(0, 8, 0.0, 0.0, 0.2));
    let marble = scene.insert_texture(Texture::marble(0, 0.2));
    let pink = scene.insert_texture(Texture::SolidColor(DVec3::new(1.0, 0.5, 0.65)));
    let blue = scene.insert_texture(Texture::SolidColor(DVec3::new(0.23, 0.51, 0.88)));

    let ground = scene.insert_material(Material::lambertian(gray));
    let ridged = scene.insert_material(Material::metal(ridged, 0.05));
    let marble = scene.insert_material(Material::lambertian(marble));
    let pink = scene.insert_material(Material::metal(pink, 0.9));
    let blue = scene.insert_material(Material::metal(blue, 0.8));

    scene.insert_object(Shape::sphere(
        DVec3::new(0.0, -1_000_000.0, 0.0),
        1_000_000.0,
        ground,
    ));
    scene.insert_object(Shape::sphere(DVec3::new(0.0, 10.0, 0.0), 10.0, ridged));
    scene.insert_object(Shape::sphere(DVec3::new(-40.0, 10.0, 20.0), 10.0, marble));
    scene.insert_object(Shape::sphere(DVec3::new(30.0, 10.0, -20.0), 10.0, pink));
    scene.insert_object(Shape::sphere(DVec3::new(10.0, 10.0, 25.0), 10.0, blue));

    scene
}

#[cfg(test)]
mod tests {
    use crate::texture::Texture;

    use super::noise_spheres;

    #[test]
    fn noise_textures_keep_only_set_parameters() {
        let scene = noise_spheres();
        scene.validate();

        assert_eq!(scene.objects.len(), 5);
        assert_eq!(scene.materials.len(), 5);
        assert_eq!(scene.textures.len(), 5);

        let Some(Texture::PerlinRidged {
            octaves,
            lacunarity,
            persistence,
            frequency,
            ..
        }) = scene.textures.get(1)
        else {
            panic!("texture 1 should be the ridged noise");
        };

        assert_eq!(*octaves, Some(8));
        assert_eq!(*frequency, Some(0.2));
        assert_eq!(*lacunarity, None);
        assert_eq!(*persistence, None);
    }
}
