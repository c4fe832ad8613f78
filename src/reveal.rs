//! Reveal-on-scroll animation: observed elements start hidden and fade/slide
//! in the first time they intersect the viewport. One-shot per element; the
//! observer keeps watching, but re-applying the final style is idempotent.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

/// Fraction of an element that must be visible to count as intersecting.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the observation box at the bottom so elements reveal slightly
/// before they reach the viewport edge.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Initial presentation applied to every observed element.
pub fn hidden_style() -> [(&'static str, &'static str); 3] {
    [
        ("opacity", "0"),
        ("transform", "translateY(30px)"),
        ("transition", REVEAL_TRANSITION),
    ]
}

/// Final presentation applied on intersection. Re-applying it on repeated
/// intersection reports has no visible effect.
pub fn revealed_style() -> [(&'static str, &'static str); 2] {
    [("opacity", "1"), ("transform", "translateY(0)")]
}

pub(crate) fn init_scroll_reveals(doc: &Document) -> Result<(), JsValue> {
    let opts = IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
    opts.set_root_margin(REVEAL_ROOT_MARGIN);

    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            if let Ok(el) = entry.target().dyn_into::<HtmlElement>() {
                apply_style(&el, &revealed_style());
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts)?;
    cb.forget();

    let targets = doc.query_selector_all(".audio-item-compact, .abstract-content")?;
    for i in 0..targets.length() {
        let Some(node) = targets.item(i) else { continue };
        let el: Element = node.dyn_into()?;
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            apply_style(html, &hidden_style());
        }
        observer.observe(&el);
    }
    Ok(())
}

fn apply_style(el: &HtmlElement, props: &[(&str, &str)]) {
    for (name, value) in props {
        let _ = el.style().set_property(name, value);
    }
}
