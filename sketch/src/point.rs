use std::ops::{Add, Mul};

/// A position in normalised device coordinates, i.e. [-1, 1] on each axis
/// with +y pointing up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }

    /// Given an angle, returns a Point with the cos and sin of the angle.
    pub fn trig(theta: f32) -> Point {
        Point::new(theta.cos(), theta.sin())
    }

    pub fn dist(&self, other: Self) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Self::Output {
        Point {
            x: rhs * self.x,
            y: rhs * self.y,
        }
    }
}

/// A position on the canvas in pixels, measured from the top left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasPoint {
    pub x: f32,
    pub y: f32,
}

impl CanvasPoint {
    pub fn new(x: i32, y: i32) -> Self {
        CanvasPoint {
            x: x as f32,
            y: y as f32,
        }
    }
}

/// Dimensions of the canvas drawing buffer, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Surface {
            width: width as f32,
            height: height as f32,
        }
    }

    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Convert a canvas pixel position to normalised device coordinates. The
    /// y axis is flipped as canvas y grows downwards.
    pub fn ndc(&self, at: CanvasPoint) -> Point {
        Point {
            x: (at.x / self.width) * 2.0 - 1.0,
            y: -((at.y / self.height) * 2.0 - 1.0),
        }
    }
}

/// Flat `x, y` vertex data, laid out the way it is uploaded to a buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct PointVector {
    pub data: Vec<f32>,
}

impl PointVector {
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    pub fn from(data: Vec<f32>) -> Self {
        Self { data }
    }

    pub fn sized(n: u32) -> Self {
        Self::from(Vec::with_capacity((n * 2) as usize))
    }

    pub fn n(&self) -> usize {
        self.data.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.data.chunks_exact(2).map(|c| Point::new(c[0], c[1]))
    }

    pub fn add(&mut self, point: Point) {
        self.data.push(point.x);
        self.data.push(point.y);
    }
}

impl Default for PointVector {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Point> for PointVector {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        let mut points = PointVector::new();
        for point in iter {
            points.add(point);
        }
        points
    }
}
