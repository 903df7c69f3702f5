use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Sparse camera configuration. Unset fields are omitted from the serialized
/// document so the renderer keeps its own defaults for them.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<DVec3>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub look_at: Option<DVec3>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub look_from: Option<DVec3>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_up: Option<DVec3>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples_per_pixel: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ray_max_bounces: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub defocus_angle: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_dist: Option<f64>,

    /// Vertical field of view, in radians.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_of_view: Option<f64>,
}

impl Camera {
    pub fn looking(from: DVec3, at: DVec3) -> Self {
        Camera {
            look_from: Some(from),
            look_at: Some(at),
            ..Camera::default()
        }
    }
}
