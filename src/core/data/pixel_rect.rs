use thiserror::Error;

use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect corners are inverted: top-left ({}, {}) is below or right of bottom-right ({}, {})", .top_left.x, .top_left.y, .bottom_right.x, .bottom_right.y)]
    InvertedCorners { top_left: Point, bottom_right: Point },
}

/// An inclusive rectangle of pixels. Used both for a whole frame grid and
/// for the tiles a frame is split into for parallel dispatch.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        if bottom_right.x < top_left.x || bottom_right.y < top_left.y {
            return Err(PixelRectError::InvertedCorners {
                top_left,
                bottom_right,
            });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// The rect covering a `width` x `height` grid anchored at the origin.
    pub fn from_size(width: usize, height: usize) -> Result<Self, PixelRectError> {
        let bottom_right = Point {
            x: width.wrapping_sub(1),
            y: height.wrapping_sub(1),
        };

        if width == 0 || height == 0 {
            return Err(PixelRectError::InvertedCorners {
                top_left: Point { x: 0, y: 0 },
                bottom_right,
            });
        }

        Self::new(Point { x: 0, y: 0 }, bottom_right)
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.bottom_right.x - self.top_left.x + 1
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.bottom_right.y - self.top_left.y + 1
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width() * self.height()
    }

    /// Row-major iterator over every pixel in the rect.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let Point { x: left, y: top } = self.top_left;
        let Point { x: right, y: bottom } = self.bottom_right;

        (top..=bottom).flat_map(move |y| (left..=right).map(move |x| Point { x, y }))
    }
}
