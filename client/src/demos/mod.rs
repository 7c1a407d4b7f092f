use std::rc::Rc;

use sketch::animation::Projection;
use sketch::config::{Config, DemoKind};
use sketch::{Colour, DrawingMode, Surface};

use crate::bridge::event::InputEvent;
use crate::render::Gl;

mod chest;
mod letters;
mod lit_cube;
mod sketchpad;
mod spinning_cube;
mod texture_swap;
mod textured_shape;

/// Settings changed through the controls on the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Control {
    Mode(DrawingMode),
    Colour(Colour),
    Background(Colour),
    Clear,
    Projection(Projection),
}

pub trait Demo {
    /// React to a click or key press. Demos without input ignore it.
    fn handle(&mut self, _event: &InputEvent, _surface: Surface) {}

    /// Apply a page control. Demos ignore controls they don't have.
    fn control(&mut self, _control: Control) {}

    /// Advance one animation frame, returning `true` if the canvas needs to
    /// be drawn again.
    fn update(&mut self) -> bool;

    fn render(&mut self, surface: Surface);
}

pub fn build(config: &Config, gl: Rc<Gl>) -> anyhow::Result<Box<dyn Demo>> {
    log::info!("Starting {} demo.", config.demo.name());

    Ok(match config.demo {
        DemoKind::Letters => Box::new(letters::Letters::new(gl)?),
        DemoKind::Sketchpad => Box::new(sketchpad::Sketchpad::new(gl, &config.sketch)?),
        DemoKind::SpinningCube => {
            Box::new(spinning_cube::SpinningCube::new(gl, config.projection)?)
        }
        DemoKind::Chest => Box::new(chest::ChestDemo::new(gl)?),
        DemoKind::LitCube => Box::new(lit_cube::LitCube::new(gl)?),
        DemoKind::TexturedShape => {
            Box::new(textured_shape::TexturedShape::new(gl, &config.texture_urls())?)
        }
        DemoKind::TextureSwap => {
            Box::new(texture_swap::TextureSwap::new(gl, &config.texture_urls())?)
        }
    })
}
