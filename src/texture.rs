use glam::DVec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Handle into the texture registry of a [`Scene`](crate::scene::Scene).
///
/// Serializes as a plain integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureId(pub usize);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Texture {
    SolidColor(DVec3),
    Checker {
        even: DVec3,
        odd: DVec3,
        scale: f64,
    },
    Image {
        file: String,
    },
    PerlinRidged {
        #[serde(default)]
        seed: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        octaves: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lacunarity: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        persistence: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        frequency: Option<f64>,
    },
    Marble {
        #[serde(default)]
        seed: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        frequency: Option<f64>,
    },
}

fn nonzero_u32(value: u32) -> Option<u32> {
    (value != 0).then_some(value)
}

fn nonzero_f64(value: f64) -> Option<f64> {
    (value != 0.0).then_some(value)
}

impl Texture {
    /// Ridged Perlin noise. A zero parameter counts as unset and is left out
    /// of the document, so the renderer's noise builder supplies its own
    /// default for it.
    pub fn perlin_ridged(
        seed: u32,
        octaves: u32,
        lacunarity: f64,
        persistence: f64,
        frequency: f64,
    ) -> Self {
        Texture::PerlinRidged {
            seed,
            octaves: nonzero_u32(octaves),
            lacunarity: nonzero_f64(lacunarity),
            persistence: nonzero_f64(persistence),
            frequency: nonzero_f64(frequency),
        }
    }

    /// Marble noise. Zero frequency counts as unset, as for
    /// [`Texture::perlin_ridged`].
    pub fn marble(seed: u32, frequency: f64) -> Self {
        Texture::Marble {
            seed,
            frequency: nonzero_f64(frequency),
        }
    }

    pub fn random_solid<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Texture::SolidColor(rng.gen())
    }

    pub fn random_checker<R: Rng + ?Sized>(rng: &mut R, scale: f64) -> Self {
        Texture::Checker {
            even: rng.gen(),
            odd: rng.gen(),
            scale,
        }
    }
}

/// A texture slot: either an index into the scene's texture registry or an
/// inline texture. The registry form is the general one; a handful of legacy
/// generators still inline their textures, and a document uses one form
/// consistently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextureRef {
    Id(TextureId),
    Inline(Box<Texture>),
}

impl From<TextureId> for TextureRef {
    fn from(id: TextureId) -> Self {
        TextureRef::Id(id)
    }
}

impl From<Texture> for TextureRef {
    fn from(texture: Texture) -> Self {
        TextureRef::Inline(Box::new(texture))
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::{Texture, TextureId, TextureRef};

    #[test]
    fn solid_color_payload_is_a_triple() {
        let texture = Texture::SolidColor(DVec3::new(0.25, 0.5, 0.75));

        assert_eq!(
            serde_json::to_value(&texture).unwrap(),
            serde_json::json!({ "SolidColor": [0.25, 0.5, 0.75] }),
        );
    }

    #[test]
    fn zero_noise_parameters_are_left_out() {
        let texture = Texture::perlin_ridged(3, 8, 0.0, 0.0, 0.2);

        assert_eq!(
            serde_json::to_value(&texture).unwrap(),
            serde_json::json!({
                "PerlinRidged": { "seed": 3, "octaves": 8, "frequency": 0.2 }
            }),
        );
    }

    #[test]
    fn marble_with_defaults() {
        assert_eq!(
            serde_json::to_value(Texture::marble(0, 0.0)).unwrap(),
            serde_json::json!({ "Marble": { "seed": 0 } }),
        );
    }

    #[test]
    fn texture_ref_serializes_index_or_inline() {
        let by_id = TextureRef::from(TextureId(4));
        let inline = TextureRef::from(Texture::Image {
            file: "scenes/earth.jpg".to_string(),
        });

        assert_eq!(serde_json::to_value(&by_id).unwrap(), serde_json::json!(4));
        assert_eq!(
            serde_json::to_value(&inline).unwrap(),
            serde_json::json!({ "Image": { "file": "scenes/earth.jpg" } }),
        );
    }

    #[test]
    fn texture_ref_round_trips() {
        for texture_ref in [
            TextureRef::from(TextureId(0)),
            TextureRef::from(Texture::marble(1, 0.2)),
        ] {
            let json = serde_json::to_string(&texture_ref).unwrap();
            let back: TextureRef = serde_json::from_str(&json).unwrap();

            assert_eq!(texture_ref, back);
        }
    }
}
