use std::rc::Rc;

use sketch::animation::{Projection, Spin};
use sketch::geometry::{CUBE_COLOURS, CUBE_INDICES, CUBE_POSITIONS};
use sketch::{Colour, Surface};
use web_sys::{WebGlProgram, WebGlUniformLocation};

use super::{Control, Demo};
use crate::render::{self, create_program, get_uniform_location, Attribute, Gl, Mesh};

const BACKGROUND: Colour = Colour::rgba(0.0, 0.0, 0.0, 0.1);

pub struct SpinningCube {
    gl: Rc<Gl>,
    program: WebGlProgram,
    matrix_location: WebGlUniformLocation,
    cube: Mesh,
    spin: Spin,
}

impl SpinningCube {
    pub fn new(gl: Rc<Gl>, projection: Projection) -> anyhow::Result<Self> {
        let program = create_program(
            &gl,
            include_str!("../render/webgl/shaders/coloured.vert"),
            include_str!("../render/webgl/shaders/coloured.frag"),
        )?;

        Ok(SpinningCube {
            matrix_location: get_uniform_location(&gl, &program, "u_matrix")?,
            cube: coloured_cube(&gl, &program)?,
            gl,
            program,
            spin: Spin {
                angle: 0.0,
                projection,
            },
        })
    }
}

/// The vertex coloured cube shared by the cube demos.
pub(super) fn coloured_cube(gl: &Gl, program: &WebGlProgram) -> anyhow::Result<Mesh> {
    Mesh::indexed(
        gl,
        vec![
            Attribute::new(gl, program, "a_position", &CUBE_POSITIONS, 3)?,
            Attribute::new(gl, program, "a_colour", &CUBE_COLOURS, 4)?,
        ],
        Gl::TRIANGLES,
        &CUBE_INDICES,
    )
}

impl Demo for SpinningCube {
    fn control(&mut self, control: Control) {
        if let Control::Projection(projection) = control {
            log::debug!("Projection set to {projection:?}.");
            self.spin.projection = projection;
        }
    }

    fn update(&mut self) -> bool {
        self.spin.advance();
        true
    }

    fn render(&mut self, surface: Surface) {
        let gl = &self.gl;
        render::clear(gl, BACKGROUND, true);

        gl.use_program(Some(&self.program));
        render::set_matrix(gl, &self.matrix_location, self.spin.matrix(surface.aspect()));
        self.cube.draw(gl);
    }
}
