mod bounding_box;
mod is_valid;
mod length;

pub use bounding_box::{Aabb, BoundingBox};
pub use is_valid::IsValid;
pub use length::Length;
