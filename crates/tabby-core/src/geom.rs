// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Geometry data types
//!
//! [`Coord`] and [`Size`] are 2D integer (`i32`) types, representing pixel
//! positions and extents as reported by the native toolkit. [`Rect`] combines
//! the two.
//!
//! [`Vec2`] is a 2D floating-point (`f32`) type used for normalized surface
//! coordinates and vertex emission.

use crate::cast::*;

/// A 2D coordinate, also known as a point
///
/// Positions are relative to the enclosing native window unless otherwise
/// stated.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord(pub i32, pub i32);

impl Coord {
    /// The constant `(0, 0)`
    pub const ZERO: Self = Self(0, 0);

    /// Construct
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self(x, y)
    }

    /// Construct, using the same value on all axes
    #[inline]
    pub const fn splat(n: i32) -> Self {
        Self(n, n)
    }
}

impl std::ops::Add<Size> for Coord {
    type Output = Self;

    #[inline]
    fn add(self, other: Size) -> Self {
        Coord(self.0 + other.0, self.1 + other.1)
    }
}

impl std::ops::Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, other: Self) -> Coord {
        Coord(self.0 - other.0, self.1 - other.1)
    }
}

impl std::ops::Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, other: Self) -> Coord {
        Coord(self.0 + other.0, self.1 + other.1)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Coord(x, y)
    }
}

/// A 2D size, also known as an extent
///
/// A `Size` is expected to be non-negative; [`Size::new`] checks this, but
/// only in debug mode.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size(pub i32, pub i32);

impl Size {
    /// The constant `(0, 0)`
    pub const ZERO: Self = Self(0, 0);

    /// Construct
    ///
    /// In debug mode, this asserts that components are non-negative.
    #[inline]
    pub fn new(w: i32, h: i32) -> Self {
        debug_assert!(w >= 0 && h >= 0, "Size::new({w}, {h}): negative value");
        Self(w, h)
    }

    /// Construct, using the same value on all axes
    #[inline]
    pub const fn splat(n: i32) -> Self {
        Self(n, n)
    }

    /// True if either component is zero (or negative)
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 <= 0 || self.1 <= 0
    }

    /// Grow (or with negative `n`, shrink) both components, saturating at zero
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn grow(self, n: i32) -> Self {
        Size((self.0 + n).max(0), (self.1 + n).max(0))
    }
}

impl From<(i32, i32)> for Size {
    #[inline]
    fn from((w, h): (i32, i32)) -> Self {
        Size(w, h)
    }
}

/// An axis-aligned rectangular region
///
/// The region is defined by a point `pos` and an extent `size`. It is empty
/// unless `size` is positive on both axes.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub pos: Coord,
    pub size: Size,
}

impl Rect {
    /// The empty rect (all fields zero)
    pub const ZERO: Self = Self::new(Coord::ZERO, Size::ZERO);

    /// Construct from a [`Coord`] and [`Size`]
    #[inline]
    pub const fn new(pos: Coord, size: Size) -> Self {
        Rect { pos, size }
    }

    /// Construct from components, in the toolkit's `x, y, w, h` order
    #[inline]
    pub fn xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect::new(Coord(x, y), Size::new(w, h))
    }

    /// Get the second point (pos + size)
    #[inline]
    pub fn pos2(&self) -> Coord {
        self.pos + self.size
    }

    /// Check whether the given coordinate is contained within this rect
    ///
    /// The left and top edges are inclusive, the right and bottom exclusive.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.0 >= self.pos.0
            && c.0 < self.pos.0 + (self.size.0)
            && c.1 >= self.pos.1
            && c.1 < self.pos.1 + (self.size.1)
    }

    /// Translate by `delta`
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn translate(&self, delta: Coord) -> Rect {
        Rect::new(self.pos + delta, self.size)
    }
}

/// 2D vector (single precision)
///
/// Usually used for normalized surface coordinates or vertex positions.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2(pub f32, pub f32);

impl Vec2 {
    /// Zero
    pub const ZERO: Vec2 = Vec2(0.0, 0.0);

    /// True when both components lie within the closed interval `[min, max]`
    #[inline]
    pub fn within(self, min: f32, max: f32) -> bool {
        self.0 >= min && self.0 <= max && self.1 >= min && self.1 <= max
    }
}

impl Conv<Coord> for Vec2 {
    #[inline]
    fn try_conv(c: Coord) -> Result<Self> {
        Ok(Vec2(c.0.try_cast()?, c.1.try_cast()?))
    }
}

impl Conv<Size> for Vec2 {
    #[inline]
    fn try_conv(s: Size) -> Result<Self> {
        Ok(Vec2(s.0.try_cast()?, s.1.try_cast()?))
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Vec2(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::xywh(10, 20, 30, 40);
        assert!(r.contains(Coord(10, 20)));
        assert!(r.contains(Coord(39, 59)));
        assert!(!r.contains(Coord(40, 20)));
        assert!(!r.contains(Coord(10, 60)));
        assert!(!r.contains(Coord(9, 30)));
    }

    #[test]
    fn size_grow_saturates() {
        assert_eq!(Size(10, 4).grow(-6), Size(4, 0));
        assert_eq!(Size(10, 4).grow(5), Size(15, 9));
    }
}
