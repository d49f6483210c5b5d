use std::fmt;

use crate::Numeric;

/// Placeholder for a 3D counterpart of [`Vec2`](crate::Vec2). Construction and copies only.
#[derive(Clone, Copy, PartialEq)]
pub struct Vec3<T: Numeric> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Numeric> fmt::Debug for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vec3")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

impl<T: Numeric> Default for Vec3<T> {
    fn default() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }
}

impl<T: Numeric> Vec3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Move the value out, leaving `(0, 0, 0)` behind.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}
