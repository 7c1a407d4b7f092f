use std::rc::Rc;

use sketch::animation::Fall;
use sketch::geometry::{LETTERS, LETTER_FANS};
use sketch::{Colour, Surface};
use web_sys::{WebGlProgram, WebGlUniformLocation};

use super::Demo;
use crate::render::{self, create_program, get_uniform_location, Attribute, Gl, Mesh};

const BACKGROUND: Colour = Colour::rgba(1.0, 0.97, 0.79, 1.0);
const INK: Colour = Colour::rgba(0.258, 0.443, 1.0, 1.0);

pub struct Letters {
    gl: Rc<Gl>,
    program: WebGlProgram,
    matrix_location: WebGlUniformLocation,
    glyphs: Mesh,
    fall: Fall,
}

impl Letters {
    pub fn new(gl: Rc<Gl>) -> anyhow::Result<Self> {
        let program = create_program(
            &gl,
            include_str!("../render/webgl/shaders/translate.vert"),
            include_str!("../render/webgl/shaders/single.frag"),
        )?;

        let matrix_location = get_uniform_location(&gl, &program, "u_matrix")?;
        let colour_location = get_uniform_location(&gl, &program, "u_colour")?;
        let glyphs = Mesh::new(
            vec![Attribute::new(&gl, &program, "a_position", &LETTERS, 2)?],
            Gl::TRIANGLE_FAN,
            (LETTERS.len() / 2) as i32,
        );

        gl.use_program(Some(&program));
        gl.uniform4fv_with_f32_array(Some(&colour_location), INK.arr());

        Ok(Letters {
            gl,
            program,
            matrix_location,
            glyphs,
            fall: Fall::new(),
        })
    }
}

impl Demo for Letters {
    fn update(&mut self) -> bool {
        self.fall.advance();
        true
    }

    fn render(&mut self, _surface: Surface) {
        let gl = &self.gl;
        render::clear(gl, BACKGROUND, false);

        gl.use_program(Some(&self.program));
        render::set_matrix(gl, &self.matrix_location, self.fall.matrix());

        self.glyphs.bind(gl);
        for (first, count) in LETTER_FANS {
            self.glyphs.draw_range(gl, first, count);
        }
    }
}
