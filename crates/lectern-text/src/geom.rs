//! Minimal 2D value types used by the box layout (y-down coordinates).

/// A position in 2D space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair without a location.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Dimensions {
    pub x: f32,
    pub y: f32,
}

impl Dimensions {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Place these dimensions at `start`, producing a bounding box.
    pub fn aabb(self, start: Point) -> Aabb {
        Aabb {
            min: start,
            max: Point::new(start.x + self.x, start.y + self.y),
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aabb {
    pub min: Point,
    pub max: Point,
}

impl Aabb {
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    pub fn dx(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn dy(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn dim(&self) -> Dimensions {
        Dimensions::new(self.dx(), self.dy())
    }
}
