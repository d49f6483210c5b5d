mod numeric;
pub use numeric::*;

mod vec2;
pub use vec2::*;

mod vec3;
pub use vec3::*;

pub type Vec2f = Vec2<f32>;
pub type Vec2i = Vec2<i32>;
pub type Vec3f = Vec3<f32>;
pub type Vec3i = Vec3<i32>;
