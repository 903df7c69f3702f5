use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::material::MaterialRef;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Sphere {
        center: DVec3,
        radius: f64,
        material: MaterialRef,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        speed: Option<DVec3>,
    },
    /// Planar parallelogram spanned by the edge vectors `u` and `v` from
    /// `top_left`. The normal follows the right-hand rule of `u x v`.
    Quad {
        top_left: DVec3,
        u: DVec3,
        v: DVec3,
        material: MaterialRef,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        speed: Option<DVec3>,
    },
}

impl Shape {
    pub fn sphere(center: DVec3, radius: f64, material: impl Into<MaterialRef>) -> Self {
        Shape::Sphere {
            center,
            radius,
            material: material.into(),
            speed: None,
        }
    }

    pub fn moving_sphere(
        center: DVec3,
        radius: f64,
        material: impl Into<MaterialRef>,
        speed: DVec3,
    ) -> Self {
        Shape::Sphere {
            center,
            radius,
            material: material.into(),
            speed: Some(speed),
        }
    }

    pub fn quad(top_left: DVec3, u: DVec3, v: DVec3, material: impl Into<MaterialRef>) -> Self {
        Shape::Quad {
            top_left,
            u,
            v,
            material: material.into(),
            speed: None,
        }
    }

    pub fn material(&self) -> &MaterialRef {
        match self {
            Shape::Sphere { material, .. } | Shape::Quad { material, .. } => material,
        }
    }
}

/// Decompose the axis-aligned box spanned by two opposite corners (in any
/// order) into its six faces. Every face's `u x v` points outward; all six
/// share `material`.
pub fn generate_box(a: DVec3, b: DVec3, material: impl Into<MaterialRef>) -> [Shape; 6] {
    let material = material.into();

    let min = a.min(b);
    let max = a.max(b);

    let dx = (max.x - min.x) * DVec3::X;
    let dy = (max.y - min.y) * DVec3::Y;
    let dz = (max.z - min.z) * DVec3::Z;

    [
        // Front
        Shape::quad(DVec3::new(min.x, min.y, max.z), dx, dy, material.clone()),
        // Right
        Shape::quad(DVec3::new(max.x, min.y, max.z), -dz, dy, material.clone()),
        // Back
        Shape::quad(DVec3::new(max.x, min.y, min.z), -dx, dy, material.clone()),
        // Left
        Shape::quad(DVec3::new(min.x, min.y, min.z), dz, dy, material.clone()),
        // Top
        Shape::quad(DVec3::new(min.x, max.y, max.z), dx, -dz, material.clone()),
        // Bottom
        Shape::quad(DVec3::new(min.x, min.y, min.z), dx, dz, material),
    ]
}
