pub mod camera;
pub mod generators;
pub mod material;
pub mod math;
pub mod scene;
pub mod shape;
pub mod texture;
