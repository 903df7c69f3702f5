use glam::DVec3;

use crate::{
    camera::Camera, material::Material, scene::Scene, shape::Shape, texture::Texture,
};

/// Five colored quads facing the camera from five directions, registry mode.
pub fn quads() -> Scene {
    let mut scene = Scene::with_camera(Camera::looking(DVec3::new(0.0, 0.0, 9.0), DVec3::ZERO));

    let colors = [
        DVec3::new(1.0, 0.2, 0.2), // red
        DVec3::new(0.2, 1.0, 0.2), // green
        DVec3::new(0.2, 0.2, 1.0), // blue
        DVec3::new(1.0, 0.5, 0.0), // orange
        DVec3::new(0.2, 0.8, 0.8), // teal
    ];

    let materials = colors.map(|color| {
        let texture = scene.insert_texture(Texture::SolidColor(color));
        scene.insert_material(Material::lambertian(texture))
    });

    let panels = [
        // Left wall
        (
            DVec3::new(-3.0, -2.0, 5.0),
            DVec3::new(0.0, 0.0, -4.0),
            DVec3::new(0.0, 4.0, 0.0),
        ),
        // Back wall
        (
            DVec3::new(-2.0, -2.0, 0.0),
            DVec3::new(4.0, 0.0, 0.0),
            DVec3::new(0.0, 4.0, 0.0),
        ),
        // Right wall
        (
            DVec3::new(3.0, -2.0, 1.0),
            DVec3::new(0.0, 0.0, 4.0),
            DVec3::new(0.0, 4.0, 0.0),
        ),
        // Ceiling
        (
            DVec3::new(-2.0, 3.0, 1.0),
            DVec3::new(4.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, 4.0),
        ),
        // Floor
        (
            DVec3::new(-2.0, -3.0, 5.0),
            DVec3::new(4.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, -4.0),
        ),
    ];

    for ((top_left, u, v), material) in panels.into_iter().zip(materials) {
        scene.insert_object(Shape::quad(top_left, u, v, material));
    }

    scene
}

#[cfg(test)]
mod tests {
    use crate::material::{MaterialId, MaterialRef};
    use crate::shape::Shape;

    use super::quads;

    #[test]
    fn one_panel_per_color() {
        let scene = quads();
        scene.validate();

        assert_eq!(scene.objects.len(), 5);
        assert_eq!(scene.materials.len(), 5);
        assert_eq!(scene.textures.len(), 5);

        for (index, object) in scene.objects.iter().enumerate() {
            let Shape::Quad { material, .. } = object else {
                panic!("quads scene contains only quads");
            };
            assert_eq!(*material, MaterialRef::Id(MaterialId(index)));
        }
    }
}
