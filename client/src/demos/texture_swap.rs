use std::rc::Rc;

use sketch::animation::TextureCycle;
use sketch::geometry::{QUAD, QUAD_INDICES, QUAD_STRIDE, QUAD_TEXCOORD_OFFSET};
use sketch::{Colour, Surface};
use web_sys::{WebGlProgram, WebGlUniformLocation};

use super::Demo;
use crate::bridge::event::InputEvent;
use crate::render::{
    self, create_program, get_uniform_location, Attribute, Gl, Mesh, Texture, TextureQueue,
};

const BACKGROUND: Colour = Colour::rgba(0.8, 0.8, 0.8, 1.0);

pub struct TextureSwap {
    gl: Rc<Gl>,
    program: WebGlProgram,
    texture_location: WebGlUniformLocation,
    quad: Mesh,
    queue: TextureQueue,

    // In the order they finished loading.
    textures: Vec<Texture>,
    cycle: TextureCycle,
    dirty: bool,
}

impl TextureSwap {
    pub fn new(gl: Rc<Gl>, urls: &[String]) -> anyhow::Result<Self> {
        let program = create_program(
            &gl,
            include_str!("../render/webgl/shaders/image.vert"),
            include_str!("../render/webgl/shaders/image.frag"),
        )?;

        let buffer = render::create_buffer(&gl, Some(&QUAD))?;
        let quad = Mesh::indexed(
            &gl,
            vec![
                Attribute::interleaved(&gl, &program, "a_position", &buffer, 2, QUAD_STRIDE, 0)?,
                Attribute::interleaved(
                    &gl,
                    &program,
                    "a_texcoord",
                    &buffer,
                    2,
                    QUAD_STRIDE,
                    QUAD_TEXCOORD_OFFSET,
                )?,
            ],
            Gl::TRIANGLES,
            &QUAD_INDICES,
        )?;

        let queue = TextureQueue::new();
        for url in urls {
            queue.load(url)?;
        }

        Ok(TextureSwap {
            texture_location: get_uniform_location(&gl, &program, "u_texture")?,
            gl,
            program,
            quad,
            queue,
            textures: Vec::new(),
            cycle: TextureCycle::default(),
            dirty: false,
        })
    }
}

impl Demo for TextureSwap {
    fn handle(&mut self, event: &InputEvent, _surface: Surface) {
        if let InputEvent::Click(_) = event {
            self.cycle.next(self.textures.len());
            self.dirty = !self.textures.is_empty();
        }
    }

    fn update(&mut self) -> bool {
        let first = self.textures.is_empty();
        for texture in self.queue.upload(&self.gl) {
            log::debug!("Texture {} is {}x{}.", self.textures.len(), texture.width, texture.height);
            self.textures.push(texture);
        }

        if first && !self.textures.is_empty() {
            self.dirty = true;
        }
        std::mem::take(&mut self.dirty)
    }

    fn render(&mut self, _surface: Surface) {
        let Some(texture) = self.textures.get(self.cycle.index()) else {
            return;
        };

        let gl = &self.gl;
        render::clear(gl, BACKGROUND, false);

        gl.use_program(Some(&self.program));
        texture.bind(gl);
        gl.uniform1i(Some(&self.texture_location), 0);
        self.quad.draw(gl);
    }
}
