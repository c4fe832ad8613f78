//! Mobile hamburger menu: a toggle control injected lazily on narrow
//! viewports and re-checked on resize, never duplicated.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

/// Widest viewport (inclusive) that gets the hamburger menu.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Whether a hamburger toggle should be injected for the given viewport
/// width, given whether one is already in the document.
pub fn needs_menu_toggle(viewport_width: f64, toggle_exists: bool) -> bool {
    viewport_width <= MOBILE_BREAKPOINT_PX && !toggle_exists
}

pub(crate) fn init_mobile_menu(win: &Window, doc: &Document) -> Result<(), JsValue> {
    maybe_build_toggle(win, doc)?;

    let win_cb = win.clone();
    let doc_cb = doc.clone();
    let cb = Closure::wrap(Box::new(move || {
        let _ = maybe_build_toggle(&win_cb, &doc_cb);
    }) as Box<dyn FnMut()>);
    win.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn maybe_build_toggle(win: &Window, doc: &Document) -> Result<(), JsValue> {
    let width = win.inner_width()?.as_f64().unwrap_or(0.0);
    let exists = doc.query_selector(".hamburger")?.is_some();
    if !needs_menu_toggle(width, exists) {
        return Ok(());
    }
    build_toggle(doc)
}

fn build_toggle(doc: &Document) -> Result<(), JsValue> {
    // Both containers are expected on the real page, but their absence only
    // skips the menu rather than aborting the rest of the wiring.
    let Some(nav_menu) = doc.query_selector(".nav-menu")? else {
        return Ok(());
    };
    let Some(container) = doc.query_selector(".nav-container")? else {
        return Ok(());
    };

    let hamburger = doc.create_element("div")?;
    hamburger.set_class_name("hamburger");
    hamburger.set_text_content(Some("☰"));
    container.append_child(&hamburger)?;

    let menu_cl = nav_menu.class_list();
    let toggle_cl = hamburger.class_list();
    let cb = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
        let _ = menu_cl.toggle("active");
        let _ = toggle_cl.toggle("active");
    }) as Box<dyn FnMut(_)>);
    hamburger.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();

    // Any menu link closes the menu, whether or not it is open.
    let links = doc.query_selector_all(".nav-menu a")?;
    for i in 0..links.length() {
        let Some(node) = links.item(i) else { continue };
        let link: Element = node.dyn_into()?;
        let menu_cl = nav_menu.class_list();
        let toggle_cl = hamburger.class_list();
        let cb = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            let _ = menu_cl.remove_1("active");
            let _ = toggle_cl.remove_1("active");
        }) as Box<dyn FnMut(_)>);
        link.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}
