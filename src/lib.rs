//! Audiopage interaction crate.
//!
//! Client-side behavior for the single-page audio showcase site: smooth
//! in-page scrolling, simulated per-item playback with a timer-driven
//! progress bar, reveal-on-scroll animation, navbar restyling past a scroll
//! threshold, a lazily injected mobile hamburger menu, and a handful of
//! keyboard shortcuts. The host page loads the wasm module and calls
//! `init_page()`; everything else is event-driven from there.
//!
//! Each component keeps its decision logic (state machines, thresholds,
//! dispatch tables) as plain Rust next to its DOM glue, so the logic runs
//! under native `cargo test` without a browser.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

mod keys;
mod menu;
mod nav;
mod navbar;
mod player;
mod reveal;

pub use keys::{SCROLL_STEP_PX, Shortcut, shortcut_for};
pub use menu::{MOBILE_BREAKPOINT_PX, needs_menu_toggle};
pub use nav::{HEADER_OFFSET_PX, scroll_destination};
pub use navbar::{NAVBAR_SOLID_THRESHOLD_PX, NavbarStyle};
pub use player::{Playback, PlayerState, TICK_PERIOD_MS, TRACK_DURATION_SECS, Tick, Transport};
pub use reveal::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, hidden_style, revealed_style};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Entry point called from the host page's loader script.
///
/// Wires all page behaviors. If the document is still parsing, wiring is
/// deferred to `DOMContentLoaded`; otherwise it happens immediately.
#[wasm_bindgen]
pub fn init_page() -> Result<(), JsValue> {
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win.document().ok_or_else(|| JsValue::from_str("no document"))?;

    if doc.ready_state() == "loading" {
        let cb = Closure::once(move || {
            let _ = wire_page();
        });
        doc.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())?;
        cb.forget();
    } else {
        wire_page()?;
    }
    Ok(())
}

// Components are independent; the order here is cosmetic, not a dependency.
fn wire_page() -> Result<(), JsValue> {
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win.document().ok_or_else(|| JsValue::from_str("no document"))?;

    nav::init_smooth_scrolling(&win, &doc)?;
    player::init_audio_players(&win, &doc)?;
    reveal::init_scroll_reveals(&doc)?;
    navbar::init_navbar_scroll(&win, &doc)?;
    menu::init_mobile_menu(&win, &doc)?;
    keys::init_keyboard_shortcuts(&win, &doc)?;
    Ok(())
}
