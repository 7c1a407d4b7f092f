use std::rc::Rc;

use sketch::animation::Orbit;
use sketch::geometry::{CUBE_COLOURS, CUBE_INDICES, CUBE_NORMALS, CUBE_POSITIONS};
use sketch::{Colour, Surface};
use web_sys::{WebGlProgram, WebGlUniformLocation};

use super::Demo;
use crate::render::{self, create_program, get_uniform_location, Attribute, Gl, Mesh};

const BACKGROUND: Colour = Colour::rgba(0.8, 0.8, 0.8, 1.0);

struct Locations {
    matrix: WebGlUniformLocation,
    normal_matrix: WebGlUniformLocation,
    light_position: WebGlUniformLocation,
    view_position: WebGlUniformLocation,
}

impl Locations {
    fn new(gl: &Gl, program: &WebGlProgram) -> anyhow::Result<Self> {
        Ok(Locations {
            matrix: get_uniform_location(gl, program, "u_matrix")?,
            normal_matrix: get_uniform_location(gl, program, "u_normal_matrix")?,
            light_position: get_uniform_location(gl, program, "u_light_position")?,
            view_position: get_uniform_location(gl, program, "u_view_position")?,
        })
    }
}

pub struct LitCube {
    gl: Rc<Gl>,
    program: WebGlProgram,
    locations: Locations,
    cube: Mesh,
    orbit: Orbit,
}

impl LitCube {
    pub fn new(gl: Rc<Gl>) -> anyhow::Result<Self> {
        let program = create_program(
            &gl,
            include_str!("../render/webgl/shaders/phong.vert"),
            include_str!("../render/webgl/shaders/phong.frag"),
        )?;

        let cube = Mesh::indexed(
            &gl,
            vec![
                Attribute::new(&gl, &program, "a_position", &CUBE_POSITIONS, 3)?,
                Attribute::new(&gl, &program, "a_colour", &CUBE_COLOURS, 4)?,
                Attribute::new(&gl, &program, "a_normal", &CUBE_NORMALS, 3)?,
            ],
            Gl::TRIANGLES,
            &CUBE_INDICES,
        )?;

        // Constant for the life of the demo.
        gl.use_program(Some(&program));
        render::set_vec3(
            &gl,
            &get_uniform_location(&gl, &program, "u_light_colour")?,
            Orbit::LIGHT_COLOUR,
        );
        gl.uniform1f(
            Some(&get_uniform_location(&gl, &program, "u_shininess")?),
            Orbit::SHININESS,
        );

        Ok(LitCube {
            locations: Locations::new(&gl, &program)?,
            gl,
            program,
            cube,
            orbit: Orbit::default(),
        })
    }
}

impl Demo for LitCube {
    fn update(&mut self) -> bool {
        self.orbit.advance();
        true
    }

    fn render(&mut self, surface: Surface) {
        let gl = &self.gl;
        render::clear(gl, BACKGROUND, true);

        let lighting = self.orbit.lighting(surface.aspect());
        gl.use_program(Some(&self.program));
        render::set_matrix(gl, &self.locations.matrix, lighting.matrix);
        render::set_matrix(gl, &self.locations.normal_matrix, lighting.normal_matrix);
        render::set_vec3(gl, &self.locations.light_position, lighting.light_position);
        render::set_vec3(gl, &self.locations.view_position, lighting.view_position);
        self.cube.draw(gl);
    }
}
