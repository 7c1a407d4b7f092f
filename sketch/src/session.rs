use std::str::FromStr;

use serde_derive::Deserialize;

use crate::{CanvasPoint, Colour, ParseError, Point, PointVector, Surface};

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DrawingMode {
    #[default]
    Point,
    Triangle,
    Circle,
}

impl FromStr for DrawingMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "point" | "points" => Ok(Self::Point),
            "triangle" | "triangles" => Ok(Self::Triangle),
            "circle" | "circles" => Ok(Self::Circle),
            _ => Err(ParseError::new("drawing mode", s)),
        }
    }
}

/// Where the session is in building the current shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthoringState {
    IdlePoint,
    IdleTriangle,
    TrianglePending1,
    TrianglePending2,
    IdleCircle,
    CirclePendingCenter,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle(pub [Point; 3]);

impl Triangle {
    pub fn vertices(&self) -> &[Point; 3] {
        &self.0
    }
}

/// A circle approximated as a closed triangle fan: the centre followed by
/// `SEGMENTS + 1` perimeter samples, the last of which repeats the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
    fan: PointVector,
}

impl Circle {
    pub const SEGMENTS: u32 = 40;

    /// Number of vertices in the fan, centre included.
    pub const VERTICES: usize = Self::SEGMENTS as usize + 2;

    pub fn new(center: Point, radius: f32) -> Self {
        let mut fan = PointVector::sized(Self::VERTICES as u32);
        fan.add(center);

        let dt = 2.0 * std::f32::consts::PI / Self::SEGMENTS as f32;
        for i in 0..=Self::SEGMENTS {
            fan.add(center + Point::trig(i as f32 * dt) * radius);
        }

        Circle {
            center,
            radius,
            fan,
        }
    }

    /// Build a circle centred on `center` whose perimeter passes through
    /// `edge`.
    pub fn through(center: Point, edge: Point) -> Self {
        Self::new(center, center.dist(edge))
    }

    pub fn fan(&self) -> &PointVector {
        &self.fan
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    Points,
    Triangles,
    TriangleFan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Batch {
    pub primitive: Primitive,
    pub vertices: PointVector,
}

/// Everything needed to repaint the canvas: clear to `clear`, then draw each
/// batch in order using `colour`.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub clear: Colour,
    pub colour: Colour,
    pub batches: Vec<Batch>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Click(CanvasPoint, Surface),
    SetMode(DrawingMode),
    SetColour(Colour),
    SetBackground(Colour),
    Clear,
}

/// State of the point / triangle / circle authoring tool. Input arrives as
/// `Command`s and each mutation hands back the `Frame` to draw.
#[derive(Clone, Debug)]
pub struct Session {
    mode: DrawingMode,

    // Foreground colour, shared by every shape.
    colour: Colour,

    // Value of the background picker. Only becomes the clear colour when the
    // canvas is next cleared.
    background: Colour,
    clear_colour: Colour,

    // Drawn as point markers. Holds standalone points and the vertices of
    // unfinished shapes, in click order.
    points: Vec<Point>,
    triangles: Vec<Triangle>,
    circles: Vec<Circle>,

    pending_triangle: Vec<Point>,
    pending_center: Option<Point>,
}

impl Session {
    pub fn new(colour: Colour, background: Colour) -> Self {
        Session {
            mode: DrawingMode::Point,
            colour,
            background,
            clear_colour: background,
            points: Vec::new(),
            triangles: Vec::new(),
            circles: Vec::new(),
            pending_triangle: Vec::new(),
            pending_center: None,
        }
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// Everything drawn as a point: standalone points and the vertices of
    /// unfinished shapes.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn pending_triangle(&self) -> &[Point] {
        &self.pending_triangle
    }

    pub fn pending_center(&self) -> Option<Point> {
        self.pending_center
    }

    pub fn state(&self) -> AuthoringState {
        match self.mode {
            DrawingMode::Point => AuthoringState::IdlePoint,
            DrawingMode::Triangle => match self.pending_triangle.len() {
                0 => AuthoringState::IdleTriangle,
                1 => AuthoringState::TrianglePending1,
                _ => AuthoringState::TrianglePending2,
            },
            DrawingMode::Circle => match self.pending_center {
                None => AuthoringState::IdleCircle,
                Some(_) => AuthoringState::CirclePendingCenter,
            },
        }
    }

    /// Apply a command, returning the frame to draw if the canvas needs to be
    /// repainted.
    pub fn apply(&mut self, command: Command) -> Option<Frame> {
        match command {
            Command::Click(at, surface) => Some(self.click(surface.ndc(at))),
            Command::SetMode(mode) => {
                self.set_mode(mode);
                None
            }
            Command::SetColour(colour) => {
                self.colour = colour;
                Some(self.frame())
            }
            Command::SetBackground(colour) => {
                self.background = colour;
                None
            }
            Command::Clear => Some(self.clear()),
        }
    }

    /// Switching modes leaves any half-built shape in place. It stays visible
    /// and is picked up again when its mode is next selected. Finishing it
    /// after clicks in another mode removes the newest markers, not
    /// necessarily its own vertices.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        let from = self.mode;
        self.mode = mode;
        if mode != from {
            log::debug!("Drawing mode {from:?} -> {mode:?}, now {:?}.", self.state());
        }
    }

    /// Handle a click at a point in normalised device coordinates.
    pub fn click(&mut self, at: Point) -> Frame {
        match self.mode {
            DrawingMode::Point => self.points.push(at),
            DrawingMode::Triangle => {
                self.pending_triangle.push(at);
                self.points.push(at);
                if let [a, b, c] = self.pending_triangle[..] {
                    self.triangles.push(Triangle([a, b, c]));
                    self.pending_triangle.clear();
                    self.drop_markers(3);
                }
            }
            DrawingMode::Circle => match self.pending_center.take() {
                Some(center) => {
                    self.circles.push(Circle::through(center, at));
                    self.drop_markers(1);
                }
                None => {
                    self.pending_center = Some(at);
                    self.points.push(at);
                }
            },
        }

        self.frame()
    }

    // A committed shape removes the newest `n` markers. After a mode switch
    // mid-shape these may be standalone points rather than the shape's own
    // vertices, in which case the stale vertices stay on screen.
    fn drop_markers(&mut self, n: usize) {
        let keep = self.points.len().saturating_sub(n);
        self.points.truncate(keep);
    }

    /// Drop every shape, finished or not, and paint the canvas with the
    /// current background colour.
    pub fn clear(&mut self) -> Frame {
        self.points.clear();
        self.triangles.clear();
        self.circles.clear();
        self.pending_triangle.clear();
        self.pending_center = None;
        self.clear_colour = self.background;

        self.frame()
    }

    /// Describe the full scene.
    pub fn frame(&self) -> Frame {
        let mut batches = Vec::with_capacity(2 + self.circles.len());

        if !self.points.is_empty() {
            batches.push(Batch {
                primitive: Primitive::Points,
                vertices: self.points.iter().copied().collect(),
            });
        }

        if !self.triangles.is_empty() {
            batches.push(Batch {
                primitive: Primitive::Triangles,
                vertices: self
                    .triangles
                    .iter()
                    .flat_map(|t| t.vertices().iter().copied())
                    .collect(),
            });
        }

        for circle in &self.circles {
            batches.push(Batch {
                primitive: Primitive::TriangleFan,
                vertices: circle.fan().clone(),
            });
        }

        Frame {
            clear: self.clear_colour,
            colour: self.colour,
            batches,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(Colour::RED, Colour::TRANSPARENT)
    }
}
