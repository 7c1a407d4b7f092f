use std::rc::Rc;

use sketch::animation::{emblem_matrix, EMBLEM_EYE, EMBLEM_LIGHT};
use sketch::geometry::{
    EMBLEM_COLOURS, EMBLEM_POSITIONS, EMBLEM_TEXCOORDS, EMBLEM_VERTEX_COUNT,
};
use sketch::{Colour, Surface};
use web_sys::{WebGlProgram, WebGlUniformLocation};

use super::Demo;
use crate::render::{
    self, create_program, get_uniform_location, Attribute, Gl, Mesh, Texture, TextureQueue,
};

pub struct TexturedShape {
    gl: Rc<Gl>,
    program: WebGlProgram,
    texture_location: WebGlUniformLocation,
    emblem: Mesh,
    queue: TextureQueue,
    texture: Option<Texture>,
    drawn: bool,
}

impl TexturedShape {
    pub fn new(gl: Rc<Gl>, urls: &[String]) -> anyhow::Result<Self> {
        let program = create_program(
            &gl,
            include_str!("../render/webgl/shaders/emblem.vert"),
            include_str!("../render/webgl/shaders/emblem.frag"),
        )?;

        let emblem = Mesh::new(
            vec![
                Attribute::new(&gl, &program, "a_position", &EMBLEM_POSITIONS, 2)?,
                Attribute::new(&gl, &program, "a_colour", &EMBLEM_COLOURS, 3)?,
                Attribute::new(&gl, &program, "a_texcoord", &EMBLEM_TEXCOORDS, 2)?,
            ],
            Gl::TRIANGLES,
            EMBLEM_VERTEX_COUNT,
        );

        gl.use_program(Some(&program));
        render::set_matrix(
            &gl,
            &get_uniform_location(&gl, &program, "u_matrix")?,
            emblem_matrix(),
        );
        render::set_vec3(
            &gl,
            &get_uniform_location(&gl, &program, "u_light_position")?,
            EMBLEM_LIGHT,
        );
        render::set_vec3(
            &gl,
            &get_uniform_location(&gl, &program, "u_view_position")?,
            EMBLEM_EYE,
        );

        // Only the first image is ever shown.
        let queue = TextureQueue::new();
        match urls.first() {
            Some(url) => queue.load(url)?,
            None => log::warn!("No texture configured, nothing will be drawn."),
        }

        Ok(TexturedShape {
            texture_location: get_uniform_location(&gl, &program, "u_texture")?,
            gl,
            program,
            emblem,
            queue,
            texture: None,
            drawn: false,
        })
    }
}

impl Demo for TexturedShape {
    fn update(&mut self) -> bool {
        if self.texture.is_none() {
            self.texture = self.queue.upload(&self.gl).into_iter().next();
        }
        self.texture.is_some() && !self.drawn
    }

    fn render(&mut self, _surface: Surface) {
        let Some(texture) = &self.texture else {
            return;
        };

        let gl = &self.gl;
        render::clear(gl, Colour::TRANSPARENT, true);

        gl.use_program(Some(&self.program));
        texture.bind(gl);
        gl.uniform1i(Some(&self.texture_location), 0);
        self.emblem.draw(gl);
        self.drawn = true;
    }
}
