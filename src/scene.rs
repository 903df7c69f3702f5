use serde::{Deserialize, Serialize};

use crate::{
    camera::Camera,
    material::{Material, MaterialId, MaterialRef},
    shape::Shape,
    texture::{Texture, TextureId, TextureRef},
};

/// Append-only arena. `register` returns the 0-based slot the value now
/// occupies; sharing happens by reusing a returned index, never by
/// deduplication. There is no removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry<T>(Vec<T>);

impl<T> Registry<T> {
    pub fn register(&mut self, value: T) -> usize {
        self.0.push(value);
        self.0.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Registry(Vec::new())
    }
}

/// A scene document: camera, object list and the two entity registries.
/// Empty registries are omitted from the serialized form, which is how fully
/// inline documents look on the wire.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub camera: Camera,
    pub objects: Vec<Shape>,

    #[serde(default, skip_serializing_if = "Registry::is_empty")]
    pub materials: Registry<Material>,

    #[serde(default, skip_serializing_if = "Registry::is_empty")]
    pub textures: Registry<Texture>,
}

impl Scene {
    pub fn with_camera(camera: Camera) -> Self {
        Scene {
            camera,
            ..Scene::default()
        }
    }

    /// Insert an object in the scene.
    pub fn insert_object(&mut self, object: Shape) {
        self.objects.push(object);
    }

    /// Insert a material and return the id associated with it.
    pub fn insert_material(&mut self, material: Material) -> MaterialId {
        MaterialId(self.materials.register(material))
    }

    /// Insert a texture and return the id associated with it.
    pub fn insert_texture(&mut self, texture: Texture) -> TextureId {
        TextureId(self.textures.register(texture))
    }

    /// Check every registry index stored in the document. A dangling index is
    /// a bug in the generator that built the scene, so this panics rather
    /// than clamping or recovering.
    pub fn validate(&self) {
        for object in &self.objects {
            self.check_material_ref(object.material());
        }

        for material in self.materials.iter() {
            self.check_texture_ref(material.texture());
        }
    }

    fn check_material_ref(&self, material: &MaterialRef) {
        match material {
            MaterialRef::Id(MaterialId(index)) => assert!(
                *index < self.materials.len(),
                "material index {index} out of range ({} registered)",
                self.materials.len(),
            ),
            MaterialRef::Inline(material) => self.check_texture_ref(material.texture()),
        }
    }

    fn check_texture_ref(&self, texture: Option<&TextureRef>) {
        match texture {
            Some(TextureRef::Id(TextureId(index))) => assert!(
                *index < self.textures.len(),
                "texture index {index} out of range ({} registered)",
                self.textures.len(),
            ),
            Some(TextureRef::Inline(_)) | None => {}
        }
    }
}
