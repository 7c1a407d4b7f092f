// The #[wasm_bindgen(start)] call is needed but Clippy doesn't see that.
#![allow(clippy::unused_unit)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Mutex;

use sketch::animation::Projection;
use sketch::config::Config;
use sketch::{Colour, DrawingMode};
use wasm_bindgen::prelude::*;

use crate::bridge::{
    demo_config, expose_closure, expose_closure_string_in, init_logging, request_animation_frame,
    Context,
};
use crate::demos::{self, Control, Demo};

/// A demo and the canvas it draws on.
pub struct Stage {
    context: Context,
    demo: Box<dyn Demo>,
}

impl Stage {
    fn new(config: &Config) -> anyhow::Result<Self> {
        let context = Context::new(&config.canvas)?;
        let demo = demos::build(config, context.gl())?;
        Ok(Stage { context, demo })
    }

    fn animation_frame(&mut self) {
        let surface = self.context.surface();
        for event in self.context.events() {
            self.demo.handle(&event, surface);
        }

        if self.demo.update() {
            self.demo.render(surface);
        }
    }
}

pub type StageRef = Rc<Mutex<Stage>>;

fn lock_and<T: FnOnce(&mut Stage)>(stage: &StageRef, action: T) {
    if let Ok(mut lock) = stage.try_lock() {
        action(&mut lock);
    } else {
        log::warn!("Failed to lock for handler.");
    }
}

fn logged_error<T>(error_message: &str) -> Result<T, JsValue> {
    log::error!("{error_message}");
    Err(JsValue::from_str(error_message))
}

fn load_config() -> anyhow::Result<Config> {
    match demo_config() {
        Some(json) => Ok(Config::from_json(&json)?),
        None => Err(anyhow::anyhow!("Page provided no demo config.")),
    }
}

/// Expose a control taking a string argument from the page. Input that
/// doesn't parse is logged and dropped.
fn expose_control<F>(stage: &StageRef, name: &'static str, parse: F)
where
    F: Fn(&str) -> anyhow::Result<Control> + 'static,
{
    let stage = stage.clone();
    let closure = Closure::wrap(Box::new(move |value: String| match parse(&value) {
        Ok(control) => lock_and(&stage, |s| s.demo.control(control)),
        Err(e) => log::warn!("Ignoring {name}: {e}."),
    }) as Box<dyn FnMut(String)>);
    expose_closure_string_in(name, &closure);
    closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_logging(log::LevelFilter::Info);

    let config = match load_config() {
        Ok(c) => c,
        Err(e) => return logged_error(&format!("Failed to load config: {e}")),
    };
    init_logging(config.log_level);

    let stage = match Stage::new(&config) {
        Ok(s) => Rc::new(Mutex::new(s)),
        Err(e) => return logged_error(&format!("Failed to start demo: {e}")),
    };

    expose_control(&stage, "set_mode", |s| {
        Ok(Control::Mode(s.parse::<DrawingMode>()?))
    });
    expose_control(&stage, "set_colour", |s| {
        Ok(Control::Colour(s.parse::<Colour>()?))
    });
    expose_control(&stage, "set_background", |s| {
        Ok(Control::Background(s.parse::<Colour>()?))
    });
    expose_control(&stage, "set_projection", |s| {
        Ok(Control::Projection(s.parse::<Projection>()?))
    });

    let stage_ref = stage.clone();
    let clear_closure = Closure::wrap(Box::new(move || {
        lock_and(&stage_ref, |s| s.demo.control(Control::Clear));
    }) as Box<dyn FnMut()>);
    expose_closure("clear", &clear_closure);
    clear_closure.forget();

    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        lock_and(&stage, Stage::animation_frame);
        if let Some(closure) = f.borrow().as_ref() {
            if let Err(e) = request_animation_frame(closure) {
                log::error!("{e}");
            }
        }
    }) as Box<dyn FnMut()>));

    let started = match g.borrow().as_ref() {
        Some(closure) => request_animation_frame(closure),
        None => Ok(()),
    };
    started.or_else(|e| logged_error(&format!("Failed to start animation: {e}")))
}
