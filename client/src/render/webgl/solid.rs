use std::rc::Rc;

use js_sys::Float32Array;
use sketch::{Colour, Frame, Primitive};
use web_sys::{WebGlBuffer, WebGlProgram, WebGlUniformLocation};

use super::{create_buffer, create_program, get_attrib_location, get_uniform_location, Gl};

/// Draws flat coloured 2D geometry whose vertices change from frame to frame.
pub struct SolidRenderer {
    gl: Rc<Gl>,
    program: WebGlProgram,
    colour_location: WebGlUniformLocation,
    position_location: u32,
    position_buffer: WebGlBuffer,
}

impl SolidRenderer {
    pub fn new(gl: Rc<Gl>, point_size: f32) -> anyhow::Result<Self> {
        let program = create_program(
            &gl,
            include_str!("shaders/sketch.vert"),
            include_str!("shaders/single.frag"),
        )?;

        let colour_location = get_uniform_location(&gl, &program, "u_colour")?;
        let point_size_location = get_uniform_location(&gl, &program, "u_point_size")?;
        let position_location = get_attrib_location(&gl, &program, "a_position")?;
        let position_buffer = create_buffer(&gl, None)?;

        gl.use_program(Some(&program));
        gl.uniform1f(Some(&point_size_location), point_size);

        Ok(SolidRenderer {
            gl,
            program,
            colour_location,
            position_location,
            position_buffer,
        })
    }

    fn prepare_draw(&self, colour: Colour) {
        self.gl.use_program(Some(&self.program));
        self.gl
            .uniform4fv_with_f32_array(Some(&self.colour_location), colour.arr());
        self.gl
            .bind_buffer(Gl::ARRAY_BUFFER, Some(&self.position_buffer));
        self.gl.enable_vertex_attrib_array(self.position_location);
        self.gl
            .vertex_attrib_pointer_with_i32(self.position_location, 2, Gl::FLOAT, false, 0, 0);
    }

    fn upload(&self, data: &[f32]) {
        let array = Float32Array::new_with_length(data.len() as u32);
        array.copy_from(data);
        self.gl.buffer_data_with_opt_array_buffer(
            Gl::ARRAY_BUFFER,
            Some(&array.buffer()),
            Gl::DYNAMIC_DRAW,
        );
    }

    /// Clear the canvas and draw every batch of the frame.
    pub fn draw_frame(&self, frame: &Frame) {
        let [r, g, b, a] = frame.clear.raw();
        self.gl.clear_color(r, g, b, a);
        self.gl.clear(Gl::COLOR_BUFFER_BIT);

        self.prepare_draw(frame.colour);
        for batch in &frame.batches {
            if batch.vertices.is_empty() {
                continue;
            }

            self.upload(&batch.vertices.data);
            let mode = match batch.primitive {
                Primitive::Points => Gl::POINTS,
                Primitive::Triangles => Gl::TRIANGLES,
                Primitive::TriangleFan => Gl::TRIANGLE_FAN,
            };
            self.gl.draw_arrays(mode, 0, batch.vertices.n() as i32);
        }
    }
}
