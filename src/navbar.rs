//! Navbar restyle on scroll: gradient while near the top of the page, flat
//! translucent color over a backdrop blur once scrolled past the threshold.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

/// Scroll offset past which the navbar switches to its solid style.
pub const NAVBAR_SOLID_THRESHOLD_PX: f64 = 100.0;

/// The two navbar presentations, derived purely from the scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarStyle {
    Gradient,
    Solid,
}

impl NavbarStyle {
    /// Threshold is strict: an offset of exactly 100 keeps the gradient.
    pub fn for_offset(offset: f64) -> Self {
        if offset > NAVBAR_SOLID_THRESHOLD_PX {
            NavbarStyle::Solid
        } else {
            NavbarStyle::Gradient
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NavbarStyle::Gradient => "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            NavbarStyle::Solid => "rgba(102, 126, 234, 0.95)",
        }
    }

    pub fn backdrop_filter(self) -> &'static str {
        match self {
            NavbarStyle::Gradient => "none",
            NavbarStyle::Solid => "blur(10px)",
        }
    }
}

// Restyles on every scroll event at native rate; the style write is two
// property assignments, cheap enough to skip debouncing.
pub(crate) fn init_navbar_scroll(win: &Window, doc: &Document) -> Result<(), JsValue> {
    let Some(navbar) = doc.query_selector(".navbar")? else {
        return Ok(());
    };
    let Ok(navbar) = navbar.dyn_into::<HtmlElement>() else {
        return Ok(());
    };

    let win_cb = win.clone();
    let cb = Closure::wrap(Box::new(move || {
        let offset = win_cb.page_y_offset().unwrap_or(0.0);
        let style = NavbarStyle::for_offset(offset);
        let _ = navbar.style().set_property("background", style.background());
        let _ = navbar
            .style()
            .set_property("backdrop-filter", style.backdrop_filter());
    }) as Box<dyn FnMut()>);
    win.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
