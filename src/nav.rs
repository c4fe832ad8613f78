//! Smooth-scroll navigation for the in-page anchor links of the primary menu.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

/// Height of the fixed navbar; scroll destinations leave room for it.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Document-relative scroll destination for a section whose top sits at
/// `target_top`. May go negative for sections above the fold; the browser
/// clamps that to zero.
pub fn scroll_destination(target_top: f64) -> f64 {
    target_top - HEADER_OFFSET_PX
}

pub(crate) fn init_smooth_scrolling(win: &Window, doc: &Document) -> Result<(), JsValue> {
    let links = doc.query_selector_all(r##".nav-menu a[href^="#"]"##)?;
    for i in 0..links.length() {
        let Some(node) = links.item(i) else { continue };
        let link: Element = node.dyn_into()?;

        let win = win.clone();
        let doc = doc.clone();
        let anchor = link.clone();
        // href is read at click time so late attribute edits still resolve.
        let cb = Closure::wrap(Box::new(move |evt: web_sys::Event| {
            evt.prevent_default();
            let Some(href) = anchor.get_attribute("href") else { return };
            let Ok(Some(target)) = doc.query_selector(&href) else { return };
            let Ok(target) = target.dyn_into::<HtmlElement>() else { return };

            let opts = ScrollToOptions::new();
            opts.set_top(scroll_destination(f64::from(target.offset_top())));
            opts.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&opts);
        }) as Box<dyn FnMut(_)>);
        link.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}
