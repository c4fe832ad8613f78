//! Global keyboard shortcuts: Space toggles the first audio item, arrow keys
//! nudge the viewport by a fixed step.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, EventTarget, HtmlElement, KeyboardEvent, Window};

/// Vertical distance one arrow-key press scrolls the viewport.
pub const SCROLL_STEP_PX: f64 = 100.0;

/// Action bound to a key. Resolved through a fixed dispatch table; the first
/// match wins and unbound keys fall through to the browser default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shortcut {
    /// Activate the first play/pause control on the page.
    ToggleFirstPlayer,
    /// Scroll the viewport vertically by the given amount.
    ScrollBy(f64),
}

/// `body_focused` gates Space so that typing in a form control never hijacks
/// the key. No modifier combinations are considered.
pub fn shortcut_for(code: &str, body_focused: bool) -> Option<Shortcut> {
    match code {
        "Space" if body_focused => Some(Shortcut::ToggleFirstPlayer),
        "ArrowDown" => Some(Shortcut::ScrollBy(SCROLL_STEP_PX)),
        "ArrowUp" => Some(Shortcut::ScrollBy(-SCROLL_STEP_PX)),
        _ => None,
    }
}

pub(crate) fn init_keyboard_shortcuts(win: &Window, doc: &Document) -> Result<(), JsValue> {
    let win_cb = win.clone();
    let doc_cb = doc.clone();
    let cb = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
        let body_focused = match (evt.target(), doc_cb.body()) {
            (Some(target), Some(body)) => {
                let body: &EventTarget = body.as_ref();
                target == *body
            }
            _ => false,
        };
        match shortcut_for(&evt.code(), body_focused) {
            Some(Shortcut::ToggleFirstPlayer) => {
                evt.prevent_default();
                if let Ok(Some(btn)) = doc_cb.query_selector(".play-btn-mini") {
                    if let Ok(btn) = btn.dyn_into::<HtmlElement>() {
                        btn.click();
                    }
                }
            }
            Some(Shortcut::ScrollBy(dy)) => {
                evt.prevent_default();
                win_cb.scroll_by_with_x_and_y(0.0, dy);
            }
            None => {}
        }
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
