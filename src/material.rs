use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::texture::{Texture, TextureRef};

/// Handle into the material registry of a [`Scene`](crate::scene::Scene).
///
/// Serializes as a plain integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialId(pub usize);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Material {
    Dielectric {
        refraction_index: f64,
    },
    Lambertian {
        texture: TextureRef,
    },
    Metal {
        texture: TextureRef,
        /// Reflection fuzziness, in `[0, 1]` in practice.
        fuzz: f64,
    },
    DiffuseLight {
        texture: TextureRef,
    },
}

impl Material {
    /// Glass-like dielectric with the stock refraction index.
    pub fn dielectric() -> Self {
        Material::Dielectric {
            refraction_index: 1.5,
        }
    }

    pub fn lambertian(texture: impl Into<TextureRef>) -> Self {
        Material::Lambertian {
            texture: texture.into(),
        }
    }

    pub fn metal(texture: impl Into<TextureRef>, fuzz: f64) -> Self {
        Material::Metal {
            texture: texture.into(),
            fuzz,
        }
    }

    pub fn diffuse_light(texture: impl Into<TextureRef>) -> Self {
        Material::DiffuseLight {
            texture: texture.into(),
        }
    }

    /// Lambertian over a random solid color, inline form.
    pub fn random_lambertian<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Material::lambertian(Texture::random_solid(rng))
    }

    /// Metal over a random solid color with random fuzz, inline form. The
    /// color is drawn before the fuzz.
    pub fn random_metal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let texture = Texture::random_solid(rng);
        let fuzz = rng.gen::<f64>();

        Material::metal(texture, fuzz)
    }

    /// The texture slot of this material, if its variant has one.
    pub fn texture(&self) -> Option<&TextureRef> {
        match self {
            Material::Dielectric { .. } => None,
            Material::Lambertian { texture }
            | Material::Metal { texture, .. }
            | Material::DiffuseLight { texture } => Some(texture),
        }
    }
}

/// A material slot on a shape: registry index or inline material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaterialRef {
    Id(MaterialId),
    Inline(Box<Material>),
}

impl From<MaterialId> for MaterialRef {
    fn from(id: MaterialId) -> Self {
        MaterialRef::Id(id)
    }
}

impl From<Material> for MaterialRef {
    fn from(material: Material) -> Self {
        MaterialRef::Inline(Box::new(material))
    }
}
