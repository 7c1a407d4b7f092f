use web_sys::{WebGlBuffer, WebGlProgram};

use super::{create_buffer, create_index_buffer, get_attrib_location, Gl};

/// A float vertex attribute read from a buffer.
pub struct Attribute {
    buffer: WebGlBuffer,
    location: u32,
    size: i32,
    stride: i32,
    offset: i32,
}

impl Attribute {
    /// Upload tightly packed `data` with `size` floats per vertex and bind it
    /// to the attribute `name` of `program`.
    pub fn new(
        gl: &Gl,
        program: &WebGlProgram,
        name: &str,
        data: &[f32],
        size: i32,
    ) -> anyhow::Result<Self> {
        Ok(Attribute {
            buffer: create_buffer(gl, Some(data))?,
            location: get_attrib_location(gl, program, name)?,
            size,
            stride: 0,
            offset: 0,
        })
    }

    /// Read `size` floats per vertex out of a shared, interleaved buffer.
    pub fn interleaved(
        gl: &Gl,
        program: &WebGlProgram,
        name: &str,
        buffer: &WebGlBuffer,
        size: i32,
        stride: i32,
        offset: i32,
    ) -> anyhow::Result<Self> {
        Ok(Attribute {
            buffer: buffer.clone(),
            location: get_attrib_location(gl, program, name)?,
            size,
            stride,
            offset,
        })
    }

    pub fn bind(&self, gl: &Gl) {
        gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&self.buffer));
        gl.enable_vertex_attrib_array(self.location);
        gl.vertex_attrib_pointer_with_i32(
            self.location,
            self.size,
            Gl::FLOAT,
            false,
            self.stride,
            self.offset,
        );
    }
}

/// Static geometry: a set of attributes, optionally drawn through an index
/// buffer.
pub struct Mesh {
    attributes: Vec<Attribute>,
    indices: Option<WebGlBuffer>,
    count: i32,
    mode: u32,
}

impl Mesh {
    pub fn new(attributes: Vec<Attribute>, mode: u32, count: i32) -> Self {
        Mesh {
            attributes,
            indices: None,
            count,
            mode,
        }
    }

    pub fn indexed(
        gl: &Gl,
        attributes: Vec<Attribute>,
        mode: u32,
        indices: &[u16],
    ) -> anyhow::Result<Self> {
        Ok(Mesh {
            attributes,
            indices: Some(create_index_buffer(gl, indices)?),
            count: indices.len() as i32,
            mode,
        })
    }

    // Should be called after using a program.
    pub fn bind(&self, gl: &Gl) {
        for attribute in &self.attributes {
            attribute.bind(gl);
        }

        if let Some(indices) = &self.indices {
            gl.bind_buffer(Gl::ELEMENT_ARRAY_BUFFER, Some(indices));
        }
    }

    pub fn draw(&self, gl: &Gl) {
        self.bind(gl);
        if self.indices.is_some() {
            gl.draw_elements_with_i32(self.mode, self.count, Gl::UNSIGNED_SHORT, 0);
        } else {
            gl.draw_arrays(self.mode, 0, self.count);
        }
    }

    /// Draw `count` vertices starting from `first`, ignoring any index
    /// buffer. Assumes `bind` has been called.
    pub fn draw_range(&self, gl: &Gl, first: i32, count: i32) {
        gl.draw_arrays(self.mode, first, count);
    }
}
