use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, MouseEvent};

/// `KeyboardEvent.key` value that submits the amount input.
pub const SUBMIT_KEY: &str = "Enter";

pub fn is_submit_key(key: &str) -> bool {
    key == SUBMIT_KEY
}

/// Attach pointer move/leave handlers to `target`. Handlers receive the
/// pointer offset within the target. Dropping the returned listeners
/// detaches them.
pub fn pointer_listeners(
    target: &EventTarget,
    mut on_move: impl FnMut(f64, f64) + 'static,
    mut on_leave: impl FnMut() + 'static,
) -> Vec<EventListener> {
    let moved = EventListener::new(target, "mousemove", move |event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            on_move(mouse.offset_x() as f64, mouse.offset_y() as f64);
        }
    });
    let left = EventListener::new(target, "mouseleave", move |_| on_leave());
    vec![moved, left]
}
