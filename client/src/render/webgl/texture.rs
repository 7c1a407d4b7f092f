use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{HtmlImageElement, WebGlTexture};

use super::Gl;

pub struct Texture {
    pub width: u32,
    pub height: u32,
    texture: WebGlTexture,
}

impl Texture {
    // 0 is the default and what is used here
    const GL_TEXTURE_DETAIL_LEVEL: i32 = 0;

    fn create_gl_texture(gl: &Gl) -> anyhow::Result<WebGlTexture> {
        match gl.create_texture() {
            Some(t) => Ok(t),
            None => Err(anyhow::anyhow!("Unable to create texture.")),
        }
    }

    pub fn from_html_image(gl: &Gl, image: &HtmlImageElement) -> anyhow::Result<Texture> {
        let texture = Texture::create_gl_texture(gl)?;
        gl.bind_texture(Gl::TEXTURE_2D, Some(&texture));

        if gl
            .tex_image_2d_with_u32_and_u32_and_html_image_element(
                Gl::TEXTURE_2D,
                Self::GL_TEXTURE_DETAIL_LEVEL,
                Gl::RGBA as i32,
                Gl::RGBA,
                Gl::UNSIGNED_BYTE,
                image,
            )
            .is_err()
        {
            gl.delete_texture(Some(&texture));
            return Err(anyhow::anyhow!("Failed to create WebGL image."));
        }

        let texture = Texture {
            width: image.natural_width(),
            height: image.natural_height(),
            texture,
        };
        texture.gen_mipmap(gl);

        Ok(texture)
    }

    fn gen_mipmap(&self, gl: &Gl) {
        gl.generate_mipmap(Gl::TEXTURE_2D);
        gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_WRAP_S, Gl::CLAMP_TO_EDGE as i32);
        gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_WRAP_T, Gl::CLAMP_TO_EDGE as i32);
        gl.tex_parameteri(
            Gl::TEXTURE_2D,
            Gl::TEXTURE_MIN_FILTER,
            Gl::LINEAR_MIPMAP_LINEAR as i32,
        );
    }

    /// Bind to texture unit 0.
    pub fn bind(&self, gl: &Gl) {
        gl.active_texture(Gl::TEXTURE0);
        gl.bind_texture(Gl::TEXTURE_2D, Some(&self.texture));
    }
}

/// Images requested by URL, handed over to the frame loop in the order they
/// finish loading.
pub struct TextureQueue {
    loaded: Rc<Array>,
}

impl TextureQueue {
    pub fn new() -> Self {
        TextureQueue {
            loaded: Rc::new(Array::new()),
        }
    }

    pub fn load(&self, url: &str) -> anyhow::Result<()> {
        // Create HTML image to load image from url
        let image = match HtmlImageElement::new() {
            Ok(i) => Rc::new(i),
            Err(_) => return Err(anyhow::anyhow!("Unable to create image element.")),
        };

        // This leaks the closure, one per image requested.
        {
            let loaded = self.loaded.clone();
            let image_ref = image.clone();
            let url = url.to_string();
            let closure = Closure::wrap(Box::new(move || {
                log::debug!("Loaded texture {url}.");
                loaded.push(&image_ref);
            }) as Box<dyn FnMut()>);
            image.set_onload(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        }
        {
            let url = url.to_string();
            let closure = Closure::wrap(Box::new(move || {
                log::error!("Failed to load texture {url}.");
            }) as Box<dyn FnMut()>);
            image.set_onerror(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        }

        image.set_src(url);

        Ok(())
    }

    /// Upload every image that has finished loading since the last call.
    pub fn upload(&self, gl: &Gl) -> Vec<Texture> {
        let mut textures = Vec::new();
        while self.loaded.length() > 0 {
            let image = self.loaded.shift();
            match Texture::from_html_image(gl, image.unchecked_ref::<HtmlImageElement>()) {
                Ok(texture) => textures.push(texture),
                Err(e) => log::error!("{e}"),
            }
        }
        textures
    }
}

impl Default for TextureQueue {
    fn default() -> Self {
        Self::new()
    }
}
