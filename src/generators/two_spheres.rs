use glam::DVec3;
use rand::Rng;

use crate::{
    camera::Camera, material::Material, scene::Scene, shape::Shape, texture::Texture,
};

/// Two stacked radius-10 spheres: fuzzy metal below, checkered Lambertian
/// above. Textures are random but inline.
pub fn two_spheres<R: Rng + ?Sized>(rng: &mut R) -> Scene {
    let mut scene = Scene::with_camera(Camera::looking(DVec3::new(13.0, 2.0, 3.0), DVec3::ZERO));

    let bottom = Texture::random_solid(rng);
    let top = Texture::random_checker(rng, 24.0);

    scene.insert_object(Shape::sphere(
        DVec3::new(0.0, -10.0, 0.0),
        10.0,
        Material::metal(bottom, 0.03125),
    ));
    scene.insert_object(Shape::sphere(
        DVec3::new(0.0, 10.0, 0.0),
        10.0,
        Material::lambertian(top),
    ));

    scene
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::{material::MaterialRef, shape::Shape, texture::TextureRef};

    use super::two_spheres;

    #[test]
    fn both_materials_are_inline() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let scene = two_spheres(&mut rng);

        assert_eq!(scene.objects.len(), 2);
        assert!(scene.materials.is_empty());

        for object in &scene.objects {
            let Shape::Sphere { material, .. } = object else {
                panic!("expected spheres");
            };
            let MaterialRef::Inline(material) = material else {
                panic!("expected inline materials");
            };
            assert!(matches!(material.texture(), Some(TextureRef::Inline(_))));
        }
    }
}
