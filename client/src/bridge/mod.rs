use std::rc::Rc;

use anyhow::anyhow;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

use sketch::Surface;

use crate::render::Gl;

pub mod event;
mod logger;

pub use logger::init_logging;

#[wasm_bindgen]
extern "C" {
    // Returns the JSON configuration for the demo on this page, if the page
    // provides one.
    fn get_demo_config() -> Option<String>;

    // Expose closures
    #[wasm_bindgen]
    pub fn expose_closure(name: &str, closure: &Closure<dyn FnMut()>);

    #[wasm_bindgen(js_name = expose_closure)]
    pub fn expose_closure_string_in(name: &str, closure: &Closure<dyn FnMut(String)>);

    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(s: &str);
}

pub fn demo_config() -> Option<String> {
    get_demo_config()
}

struct Canvas {
    element: Rc<HtmlCanvasElement>,
    gl: Rc<Gl>,

    // Array where input events are stored to be handled by the core loop.
    events: Rc<Array>,
}

impl Canvas {
    fn new(element: HtmlCanvasElement) -> anyhow::Result<Canvas> {
        let gl = Rc::new(create_context(&element)?);

        let canvas = Canvas {
            element: Rc::new(element),
            gl,
            events: Rc::new(Array::new()),
        };
        canvas.configure_events()?;

        Ok(canvas)
    }

    fn by_id(id: &str) -> anyhow::Result<Canvas> {
        let element = match get_document()?.get_element_by_id(id) {
            Some(e) => e,
            None => return Err(anyhow!("No element with id \"{id}\".")),
        };

        match element.dyn_into::<HtmlCanvasElement>() {
            Ok(c) => Canvas::new(c),
            Err(_) => Err(anyhow!("Element \"{id}\" is not a canvas.")),
        }
    }

    fn queue_events(
        &self,
        target: &web_sys::EventTarget,
        event_name: &'static str,
    ) -> anyhow::Result<()> {
        let events = self.events.clone();
        let listener = Closure::wrap(Box::new(move |event: web_sys::UiEvent| {
            events.push(&event);
        }) as Box<dyn FnMut(web_sys::UiEvent)>);

        let result =
            target.add_event_listener_with_callback(event_name, listener.as_ref().unchecked_ref());
        listener.forget();
        result.map_err(|e| anyhow!("Failed to add {event_name} listener: {e:?}."))
    }

    /// Clicks are taken from the canvas, key presses from the whole page so
    /// that the canvas needn't have focus.
    fn configure_events(&self) -> anyhow::Result<()> {
        self.queue_events(&self.element, "click")?;
        let document = get_document()?;
        self.queue_events(&document, "keydown")
    }
}

pub struct Context {
    // WebGL context. Wrapped in Rc because various structs and closures want
    // for references to it.
    gl: Rc<Gl>,

    // Holds information about the HTML canvas associated with the WebGL
    // context.
    canvas: Canvas,
}

impl Context {
    pub fn new(canvas_id: &str) -> anyhow::Result<Context> {
        let canvas = Canvas::by_id(canvas_id)?;
        Ok(Context {
            gl: canvas.gl.clone(),
            canvas,
        })
    }

    pub fn gl(&self) -> Rc<Gl> {
        self.gl.clone()
    }

    pub fn surface(&self) -> Surface {
        Surface::new(self.canvas.element.width(), self.canvas.element.height())
    }

    /// Drain queued input, oldest first.
    pub fn events(&self) -> Vec<event::InputEvent> {
        let mut events = Vec::new();
        while self.canvas.events.length() > 0 {
            let event = self.canvas.events.shift();
            let event = event.unchecked_ref::<web_sys::UiEvent>();
            if let Some(e) = event::InputEvent::from_web_sys(event) {
                events.push(e);
            };
        }
        events
    }
}

fn create_context(element: &HtmlCanvasElement) -> anyhow::Result<Gl> {
    match element.get_context("webgl2") {
        Ok(Some(ctx)) => ctx
            .dyn_into::<Gl>()
            .map_err(|_| anyhow!("Canvas context is not WebGL2.")),
        _ => Err(anyhow!("WebGL2 not supported.")),
    }
}

fn window() -> anyhow::Result<Window> {
    match web_sys::window() {
        Some(w) => Ok(w),
        None => Err(anyhow!("No Window.")),
    }
}

pub fn get_document() -> anyhow::Result<Document> {
    match window()?.document() {
        Some(d) => Ok(d),
        None => Err(anyhow!("No Document.")),
    }
}

pub fn request_animation_frame(f: &Closure<dyn FnMut()>) -> anyhow::Result<()> {
    match window()?.request_animation_frame(f.as_ref().unchecked_ref()) {
        Ok(_) => Ok(()),
        Err(_) => Err(anyhow!("Failed to get animation frame.")),
    }
}
