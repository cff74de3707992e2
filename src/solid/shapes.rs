//! # Rectangles and Squares
//!
//! A square is a rectangle in geometry, but not in behavior: setting a
//! rectangle's height leaves its width alone, while a square has to change
//! both. Code written against "something resizable" that relies on the
//! rectangle behavior gets the wrong answer when handed a square.
//!
//! [`use_it`] is that code. It sets the height to 10 and expects the area to
//! be `width * 10`; [`AreaCheck::holds`] reports whether it was.

use serde::Serialize;
use std::fmt;

/// The height [`use_it`] assigns before checking the area.
pub const CHECK_HEIGHT: u32 = 10;

/// Something with a width and a settable height.
pub trait Resizable {
    fn width(&self) -> u32;
    fn set_height(&mut self, value: u32);
    /// Areas are `u64` so any pair of `u32` sides fits.
    fn area(&self) -> u64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_width(&mut self, value: u32) {
        self.width = value;
    }

    pub fn set_height(&mut self, value: u32) {
        self.height = value;
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Width: {}, height: {}", self.width, self.height)
    }
}

impl Resizable for Rectangle {
    fn width(&self) -> u32 {
        self.width
    }

    fn set_height(&mut self, value: u32) {
        self.height = value;
    }

    fn area(&self) -> u64 {
        Rectangle::area(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Square {
    side: u32,
}

impl Square {
    pub fn new(side: u32) -> Self {
        Self { side }
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn set_side(&mut self, value: u32) {
        self.side = value;
    }

    pub fn area(&self) -> u64 {
        u64::from(self.side) * u64::from(self.side)
    }

    /// A rectangle with the same dimensions, free to be resized on its own.
    pub fn as_rectangle(&self) -> Rectangle {
        Rectangle::new(self.side, self.side)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Width: {}, height: {}", self.side, self.side)
    }
}

// Keeping the square a square means both sides follow the height.
impl Resizable for Square {
    fn width(&self) -> u32 {
        self.side
    }

    fn set_height(&mut self, value: u32) {
        self.side = value;
    }

    fn area(&self) -> u64 {
        Square::area(self)
    }
}

/// Outcome of [`use_it`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AreaCheck {
    pub expected: u64,
    pub actual: u64,
}

impl AreaCheck {
    pub fn holds(&self) -> bool {
        self.expected == self.actual
    }
}

impl fmt::Display for AreaCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Expected an area of {}, got {}",
            self.expected, self.actual
        )
    }
}

/// Sets the height to [`CHECK_HEIGHT`] and compares the area against
/// `width * CHECK_HEIGHT`, with the width read beforehand.
pub fn use_it(shape: &mut dyn Resizable) -> AreaCheck {
    let width = shape.width();
    shape.set_height(CHECK_HEIGHT);
    AreaCheck {
        expected: u64::from(width) * u64::from(CHECK_HEIGHT),
        actual: shape.area(),
    }
}
