use std::rc::Rc;

use sketch::config::SketchConfig;
use sketch::{Command, Frame, Session, Surface};

use super::{Control, Demo};
use crate::bridge::event::InputEvent;
use crate::render::{Gl, SolidRenderer};

pub struct Sketchpad {
    renderer: SolidRenderer,
    session: Session,

    // Waiting to be drawn at the next animation frame.
    frame: Option<Frame>,
}

impl Sketchpad {
    pub fn new(gl: Rc<Gl>, config: &SketchConfig) -> anyhow::Result<Self> {
        let mut session = Session::new(config.colour, config.background);
        session.set_mode(config.mode);
        Ok(Sketchpad {
            renderer: SolidRenderer::new(gl, config.point_size)?,
            frame: Some(session.frame()),
            session,
        })
    }

    fn apply(&mut self, command: Command) {
        if let Some(frame) = self.session.apply(command) {
            self.frame = Some(frame);
        }
    }
}

impl Demo for Sketchpad {
    fn handle(&mut self, event: &InputEvent, surface: Surface) {
        if let InputEvent::Click(at) = *event {
            self.apply(Command::Click(at, surface));
        }
    }

    fn control(&mut self, control: Control) {
        let command = match control {
            Control::Mode(mode) => Command::SetMode(mode),
            Control::Colour(colour) => Command::SetColour(colour),
            Control::Background(colour) => Command::SetBackground(colour),
            Control::Clear => Command::Clear,
            Control::Projection(_) => return,
        };
        self.apply(command);
    }

    fn update(&mut self) -> bool {
        self.frame.is_some()
    }

    fn render(&mut self, _surface: Surface) {
        if let Some(frame) = self.frame.take() {
            self.renderer.draw_frame(&frame);
        }
    }
}
