use std::{
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::Numeric;

/// A point or displacement in 2D space.
#[derive(Clone, Copy, PartialEq)]
pub struct Vec2<T: Numeric> {
    pub x: T,
    pub y: T,
}

impl<T: Numeric> fmt::Debug for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vec2")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl<T: Numeric> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(prec) => write!(f, "{{ X : {:.prec$} , Y : {:.prec$} }}", self.x, self.y),
            None => write!(f, "{{ X : {} , Y : {} }}", self.x, self.y),
        }
    }
}

impl<T: Numeric> Default for Vec2<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Numeric> Vec2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    pub fn one() -> Self {
        Self::new(T::one(), T::one())
    }

    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Move the value out, leaving `(0, 0)` behind.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    // --- In-place mutators, chainable ---

    pub fn set(&mut self, x: T, y: T) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Scale to unit length in place. A zero-length vector is left unchanged.
    ///
    /// The division happens in `f64`; integer components are truncated back.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len != 0.0 {
            self.x = T::from_f64(self.x.to_f64() / len);
            self.y = T::from_f64(self.y.to_f64() / len);
        }
        self
    }

    pub fn floor(&mut self) -> &mut Self {
        self.x = self.x.floor();
        self.y = self.y.floor();
        self
    }

    pub fn ceil(&mut self) -> &mut Self {
        self.x = self.x.ceil();
        self.y = self.y.ceil();
        self
    }

    /// Round each component to the nearest integer, ties away from zero.
    pub fn round(&mut self) -> &mut Self {
        self.x = self.x.round();
        self.y = self.y.round();
        self
    }

    // --- Queries ---

    pub fn length_squared(self) -> T {
        self.x * self.x + self.y * self.y
    }

    pub fn length(self) -> f64 {
        self.length_squared().to_f64().sqrt()
    }

    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Perpendicular dot product, the z of the 3D cross product with both z at 0.
    pub fn cross(self, rhs: Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }

    pub fn distance_to_squared(self, other: Self) -> T {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance_to(self, other: Self) -> f64 {
        self.distance_to_squared(other).to_f64().sqrt()
    }

    // --- Static utilities ---

    /// Linear interpolation computed in `f64`, so integer vectors are truncated.
    /// `amount` outside `[0, 1]` extrapolates.
    pub fn lerp(start: Self, end: Self, amount: f64) -> Self {
        let x = start.x.to_f64() + (end.x.to_f64() - start.x.to_f64()) * amount;
        let y = start.y.to_f64() + (end.y.to_f64() - start.y.to_f64()) * amount;
        Self::new(T::from_f64(x), T::from_f64(y))
    }

    /// Clamp each component of `value` between the matching components of
    /// `min` and `max`. Callers keep `min <= max` per axis; otherwise the
    /// result is some mix of the inputs, never a panic.
    pub fn clamp<U>(value: U, min: U, max: U) -> U
    where
        U: Into<Self> + From<Self>,
    {
        let (value, min, max) = (value.into(), min.into(), max.into());
        U::from(Self::new(
            clamp_axis(value.x, min.x, max.x),
            clamp_axis(value.y, min.y, max.y),
        ))
    }
}

fn clamp_axis<T: PartialOrd>(value: T, low: T, high: T) -> T {
    if value > high {
        high
    } else if value < low {
        low
    } else {
        value
    }
}

// --- Conversions ---

impl<T: Numeric> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: Numeric> From<[T; 2]> for Vec2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T: Numeric> From<Vec2<T>> for (T, T) {
    fn from(v: Vec2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T: Numeric> From<Vec2<T>> for [T; 2] {
    fn from(v: Vec2<T>) -> Self {
        [v.x, v.y]
    }
}

// --- Arithmetic operators ---

impl<T: Numeric> Add for Vec2<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Numeric> Sub for Vec2<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Numeric + Neg<Output = T>> Neg for Vec2<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

// Scalar multiply
impl<T: Numeric> Mul<T> for Vec2<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

// Scalar divide
impl<T: Numeric> Div<T> for Vec2<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

// --- Assign operators ---

impl<T: Numeric> AddAssign for Vec2<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Numeric> SubAssign for Vec2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Numeric> MulAssign<T> for Vec2<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Numeric> DivAssign<T> for Vec2<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_axis_checks_high_first() {
        assert_eq!(clamp_axis(5, 0, 10), 5);
        assert_eq!(clamp_axis(-1, 0, 10), 0);
        assert_eq!(clamp_axis(11, 0, 10), 10);
        // inverted range: value is above high and below low, high wins
        assert_eq!(clamp_axis(5, 10, 0), 0);
    }
}
