//! Layout primitives. All values are logical pixels.

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Shrink by padding, never going negative.
    pub fn shrink(self, padding: Padding) -> Self {
        Self {
            width: (self.width - padding.horizontal()).max(0.0),
            height: (self.height - padding.vertical()).max(0.0),
        }
    }

    /// Grow by padding.
    pub fn expand(self, padding: Padding) -> Self {
        Self {
            width: self.width + padding.horizontal(),
            height: self.height + padding.vertical(),
        }
    }
}

/// Axis-aligned rectangle (position + size).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if a point is inside the bounds (right/bottom edges exclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Inner bounds after removing padding.
    pub fn shrink(&self, padding: Padding) -> Self {
        Self {
            x: self.x + padding.left,
            y: self.y + padding.top,
            width: (self.width - padding.horizontal()).max(0.0),
            height: (self.height - padding.vertical()).max(0.0),
        }
    }
}

/// Padding around content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Vertical and horizontal padding.
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl From<f32> for Padding {
    fn from(value: f32) -> Self {
        Self::all(value)
    }
}

impl From<[f32; 2]> for Padding {
    fn from([vertical, horizontal]: [f32; 2]) -> Self {
        Self::symmetric(vertical, horizontal)
    }
}

/// How a widget sizes itself along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Length {
    /// Size to content.
    #[default]
    Shrink,
    /// Take a share of the remaining space (weight 1.0 = equal share).
    Fill(f32),
    /// Exact size.
    Fixed(f32),
}

impl Length {
    pub const FILL: Length = Length::Fill(1.0);

    /// Resolve against the available space and the content size.
    pub fn resolve(self, available: f32, content: f32) -> f32 {
        match self {
            Length::Shrink => content.min(available),
            Length::Fill(_) => {
                if available.is_finite() {
                    available
                } else {
                    content
                }
            }
            Length::Fixed(value) => value,
        }
    }

    /// Fill weight, or `None` when not filling.
    pub fn fill_weight(self) -> Option<f32> {
        match self {
            Length::Fill(weight) => Some(weight.max(0.0)),
            _ => None,
        }
    }
}

impl From<f32> for Length {
    fn from(value: f32) -> Self {
        Length::Fixed(value)
    }
}

/// Cross-axis alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
}

impl Alignment {
    /// Offset of an item of `content` size inside `space`.
    pub fn offset(self, space: f32, content: f32) -> f32 {
        let free = (space - content).max(0.0);
        match self {
            Alignment::Start => 0.0,
            Alignment::Center => free / 2.0,
            Alignment::End => free,
        }
    }
}

/// Main-axis distribution of children in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    /// Pack children at the start, separated by the spacing.
    #[default]
    Start,
    /// First child at the start, last at the end, free space between.
    SpaceBetween,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contains_excludes_far_edges() {
        let bounds = Bounds::new(10.0, 10.0, 20.0, 10.0);
        assert!(bounds.contains(Point::new(10.0, 10.0)));
        assert!(bounds.contains(Point::new(29.9, 19.9)));
        assert!(!bounds.contains(Point::new(30.0, 15.0)));
        assert!(!bounds.contains(Point::new(15.0, 20.0)));
        assert!(!bounds.contains(Point::new(9.9, 15.0)));
    }

    #[test]
    fn test_shrink_by_padding() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 50.0).shrink(Padding::symmetric(5.0, 10.0));
        assert_eq!(bounds, Bounds::new(10.0, 5.0, 80.0, 40.0));

        let tiny = Size::new(4.0, 4.0).shrink(Padding::all(5.0));
        assert_eq!(tiny, Size::ZERO);
    }

    #[test]
    fn test_length_resolve() {
        assert_eq!(Length::Shrink.resolve(100.0, 40.0), 40.0);
        assert_eq!(Length::Shrink.resolve(30.0, 40.0), 30.0);
        assert_eq!(Length::FILL.resolve(100.0, 40.0), 100.0);
        assert_eq!(Length::FILL.resolve(f32::INFINITY, 40.0), 40.0);
        assert_eq!(Length::Fixed(12.0).resolve(100.0, 40.0), 12.0);
    }

    #[test]
    fn test_alignment_offset() {
        assert_eq!(Alignment::Start.offset(100.0, 40.0), 0.0);
        assert_eq!(Alignment::Center.offset(100.0, 40.0), 30.0);
        assert_eq!(Alignment::End.offset(100.0, 40.0), 60.0);
        assert_eq!(Alignment::Center.offset(10.0, 40.0), 0.0);
    }
}
