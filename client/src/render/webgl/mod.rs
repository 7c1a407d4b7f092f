use js_sys::{Float32Array, Uint16Array};
use sketch::program::{build_program, ProgramBackend, Stage};
use web_sys::{
    WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlShader, WebGlUniformLocation,
};

mod mesh;
mod solid;
mod texture;

pub type Gl = WebGl2RenderingContext;

pub use {
    mesh::{Attribute, Mesh},
    solid::SolidRenderer,
    texture::{Texture, TextureQueue},
};

pub fn get_uniform_location(
    gl: &Gl,
    program: &WebGlProgram,
    location: &str,
) -> anyhow::Result<WebGlUniformLocation> {
    match gl.get_uniform_location(program, location) {
        Some(l) => Ok(l),
        None => Err(anyhow::anyhow!(
            "Failed to get WebGlUniformLocation {location}."
        )),
    }
}

pub fn get_attrib_location(gl: &Gl, program: &WebGlProgram, name: &str) -> anyhow::Result<u32> {
    let location = gl.get_attrib_location(program, name);
    if location < 0 {
        Err(anyhow::anyhow!("Failed to get attribute location {name}."))
    } else {
        Ok(location as u32)
    }
}

pub fn create_buffer(gl: &Gl, data_opt: Option<&[f32]>) -> anyhow::Result<WebGlBuffer> {
    let buffer = match gl.create_buffer() {
        Some(b) => b,
        None => return Err(anyhow::anyhow!("Failed to create WebGL buffer.")),
    };

    if let Some(data) = data_opt {
        let array = Float32Array::new_with_length(data.len() as u32);
        array.copy_from(data);

        gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer));
        gl.buffer_data_with_opt_array_buffer(
            Gl::ARRAY_BUFFER,
            Some(&array.buffer()),
            Gl::STATIC_DRAW,
        );
    }

    Ok(buffer)
}

pub fn create_index_buffer(gl: &Gl, indices: &[u16]) -> anyhow::Result<WebGlBuffer> {
    let buffer = match gl.create_buffer() {
        Some(b) => b,
        None => return Err(anyhow::anyhow!("Failed to create WebGL index buffer.")),
    };

    let array = Uint16Array::new_with_length(indices.len() as u32);
    array.copy_from(indices);

    gl.bind_buffer(Gl::ELEMENT_ARRAY_BUFFER, Some(&buffer));
    gl.buffer_data_with_opt_array_buffer(
        Gl::ELEMENT_ARRAY_BUFFER,
        Some(&array.buffer()),
        Gl::STATIC_DRAW,
    );

    Ok(buffer)
}

/// Lets the program builder drive a WebGL context.
struct GlBackend<'a>(&'a Gl);

impl ProgramBackend for GlBackend<'_> {
    type Shader = WebGlShader;
    type Program = WebGlProgram;

    fn create_shader(&self, stage: Stage) -> Option<WebGlShader> {
        self.0.create_shader(match stage {
            Stage::Vertex => Gl::VERTEX_SHADER,
            Stage::Fragment => Gl::FRAGMENT_SHADER,
        })
    }

    fn compile_shader(&self, shader: &WebGlShader, source: &str) -> bool {
        self.0.shader_source(shader, source);
        self.0.compile_shader(shader);
        self.0
            .get_shader_parameter(shader, Gl::COMPILE_STATUS)
            .is_truthy()
    }

    fn shader_log(&self, shader: &WebGlShader) -> Option<String> {
        self.0.get_shader_info_log(shader)
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        self.0.delete_shader(Some(shader));
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        self.0.create_program()
    }

    fn link_program(
        &self,
        program: &WebGlProgram,
        vertex: &WebGlShader,
        fragment: &WebGlShader,
    ) -> bool {
        self.0.attach_shader(program, vertex);
        self.0.attach_shader(program, fragment);
        self.0.link_program(program);
        self.0
            .get_program_parameter(program, Gl::LINK_STATUS)
            .is_truthy()
    }

    fn program_log(&self, program: &WebGlProgram) -> Option<String> {
        self.0.get_program_info_log(program)
    }

    fn delete_program(&self, program: &WebGlProgram) {
        self.0.delete_program(Some(program));
    }
}

pub fn create_program(gl: &Gl, vert: &str, frag: &str) -> anyhow::Result<WebGlProgram> {
    build_program(&GlBackend(gl), vert, frag).map_err(|e| {
        log::error!("{e}");
        anyhow::Error::new(e)
    })
}
