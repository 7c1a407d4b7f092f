use std::rc::Rc;

use sketch::animation::{perspective, Chest};
use sketch::{Colour, Surface};
use web_sys::{WebGlProgram, WebGlUniformLocation};

use super::spinning_cube::coloured_cube;
use super::Demo;
use crate::bridge::event::InputEvent;
use crate::render::{self, create_program, get_uniform_location, Gl, Mesh};

const BACKGROUND: Colour = Colour::rgba(0.8, 0.8, 0.8, 1.0);

pub struct ChestDemo {
    gl: Rc<Gl>,
    program: WebGlProgram,
    matrix_location: WebGlUniformLocation,

    // Both the box and the lid are this cube, transformed differently.
    cube: Mesh,
    chest: Chest,
    dirty: bool,
}

impl ChestDemo {
    pub fn new(gl: Rc<Gl>) -> anyhow::Result<Self> {
        let program = create_program(
            &gl,
            include_str!("../render/webgl/shaders/coloured.vert"),
            include_str!("../render/webgl/shaders/coloured.frag"),
        )?;

        Ok(ChestDemo {
            matrix_location: get_uniform_location(&gl, &program, "u_matrix")?,
            cube: coloured_cube(&gl, &program)?,
            gl,
            program,
            chest: Chest::default(),
            dirty: true,
        })
    }
}

impl Demo for ChestDemo {
    fn handle(&mut self, event: &InputEvent, _surface: Surface) {
        if let InputEvent::Key(key) = *event {
            self.chest.press(key);
            self.dirty = true;
        }
    }

    fn update(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn render(&mut self, surface: Surface) {
        let gl = &self.gl;
        render::clear(gl, BACKGROUND, true);

        gl.use_program(Some(&self.program));
        let projection = perspective(surface.aspect());
        for model in [self.chest.box_model(), self.chest.lid_model()] {
            render::set_matrix(gl, &self.matrix_location, projection * model);
            self.cube.draw(gl);
        }
    }
}
