use glam::{Mat4, Vec3};
use sketch::Colour;
use web_sys::WebGlUniformLocation;

mod webgl;

pub use webgl::{
    create_buffer, create_program, get_uniform_location, Attribute, Gl, Mesh, SolidRenderer,
    Texture, TextureQueue,
};

/// Clear the canvas to `colour`. With `depth` set, depth testing is switched
/// on and the depth buffer cleared too.
pub fn clear(gl: &Gl, colour: Colour, depth: bool) {
    let [r, g, b, a] = colour.raw();
    gl.clear_color(r, g, b, a);
    if depth {
        gl.enable(Gl::DEPTH_TEST);
        gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);
    } else {
        gl.clear(Gl::COLOR_BUFFER_BIT);
    }
}

pub fn set_matrix(gl: &Gl, location: &WebGlUniformLocation, matrix: Mat4) {
    gl.uniform_matrix4fv_with_f32_array(Some(location), false, &matrix.to_cols_array());
}

pub fn set_vec3(gl: &Gl, location: &WebGlUniformLocation, v: Vec3) {
    gl.uniform3fv_with_f32_array(Some(location), &v.to_array());
}
