pub mod animation;
pub mod config;
pub mod geometry;
pub mod program;
pub mod session;

mod colour;
mod point;

#[cfg(test)]
mod tests;

pub use colour::{Colour, ColourError};
pub use point::{CanvasPoint, Point, PointVector, Surface};
pub use session::{Command, DrawingMode, Frame, Primitive, Session};

/// A name from the page didn't match any known option.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} {value:?}")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        ParseError {
            kind,
            value: value.to_string(),
        }
    }
}
