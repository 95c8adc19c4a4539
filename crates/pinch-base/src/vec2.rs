use std::{
    fmt,
    ops::{Add, Sub},
};

/// A 2D point or offset. Pixel coordinates use `Vec2<i32>`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T: fmt::Debug> fmt::Debug for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl<T: Default> Default for Vec2<T> {
    fn default() -> Self {
        Self {
            x: T::default(),
            y: T::default(),
        }
    }
}

impl<T> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Add<Output = T>> Add for Vec2<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Sub<Output = T>> Sub for Vec2<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Vec2<i32> {
    /// Euclidean distance to `other`. Defined for the whole `i32` range.
    pub fn distance(self, other: Self) -> f32 {
        let dx = other.x as f64 - self.x as f64;
        let dy = other.y as f64 - self.y as f64;
        dx.hypot(dy) as f32
    }

    /// Integer midpoint, rounding toward negative infinity on each axis.
    pub fn midpoint(self, other: Self) -> Self {
        let mid = |a: i32, b: i32| (a as i64 + b as i64).div_euclid(2) as i32;
        Self {
            x: mid(self.x, other.x),
            y: mid(self.y, other.y),
        }
    }

    pub fn to_f32(self) -> Vec2<f32> {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

impl Vec2<f32> {
    /// Round to the nearest pixel.
    pub fn round(self) -> Vec2<i32> {
        Vec2::new(self.x.round() as i32, self.y.round() as i32)
    }
}
