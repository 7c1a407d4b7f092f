use wasm_bindgen::JsCast;

use sketch::animation::ArrowKey;
use sketch::CanvasPoint;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    // A primary button click on the canvas
    Click(CanvasPoint),
    Key(ArrowKey),
}

impl InputEvent {
    pub fn from_web_sys(event: &web_sys::UiEvent) -> Option<InputEvent> {
        match event.type_().as_str() {
            "keydown" => Self::from_keyboard(event.unchecked_ref::<web_sys::KeyboardEvent>()),
            "click" => Self::from_mouse(event.unchecked_ref::<web_sys::MouseEvent>()),
            _ => None,
        }
    }

    fn from_mouse(event: &web_sys::MouseEvent) -> Option<InputEvent> {
        // Reference:
        // https://developer.mozilla.org/en-US/docs/Web/API/MouseEvent/button
        if event.button() != 0 {
            return None;
        }

        // Offsets are relative to the canvas' top left corner.
        Some(InputEvent::Click(CanvasPoint::new(
            event.offset_x(),
            event.offset_y(),
        )))
    }

    fn from_keyboard(event: &web_sys::KeyboardEvent) -> Option<InputEvent> {
        ArrowKey::from_key(&event.key()).map(InputEvent::Key)
    }
}
