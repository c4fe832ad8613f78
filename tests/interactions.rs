// Native tests for the pure decision logic behind the DOM glue: scroll
// offsets, navbar styling, keyboard dispatch, the mobile menu guard, and the
// reveal style tables. No wasm/browser APIs involved.

use audiopage::{
    HEADER_OFFSET_PX, MOBILE_BREAKPOINT_PX, NAVBAR_SOLID_THRESHOLD_PX, NavbarStyle, SCROLL_STEP_PX,
    Shortcut, hidden_style, needs_menu_toggle, revealed_style, scroll_destination, shortcut_for,
};

#[test]
fn scroll_destination_accounts_for_fixed_header() {
    assert_eq!(scroll_destination(500.0), 420.0);
    assert_eq!(scroll_destination(HEADER_OFFSET_PX), 0.0);
    // Sections above the fold produce a negative target; the browser clamps it.
    assert_eq!(scroll_destination(0.0), -80.0);
}

#[test]
fn navbar_threshold_is_exclusive_at_100() {
    assert_eq!(NavbarStyle::for_offset(0.0), NavbarStyle::Gradient);
    assert_eq!(
        NavbarStyle::for_offset(NAVBAR_SOLID_THRESHOLD_PX),
        NavbarStyle::Gradient
    );
    assert_eq!(NavbarStyle::for_offset(100.5), NavbarStyle::Solid);
    assert_eq!(NavbarStyle::for_offset(150.0), NavbarStyle::Solid);
}

#[test]
fn navbar_styles_swap_background_and_blur_together() {
    assert!(NavbarStyle::Gradient.background().starts_with("linear-gradient"));
    assert_eq!(NavbarStyle::Gradient.backdrop_filter(), "none");
    assert!(NavbarStyle::Solid.background().starts_with("rgba"));
    assert_eq!(NavbarStyle::Solid.backdrop_filter(), "blur(10px)");
}

#[test]
fn space_only_fires_with_body_focus() {
    assert_eq!(shortcut_for("Space", true), Some(Shortcut::ToggleFirstPlayer));
    assert_eq!(shortcut_for("Space", false), None);
}

#[test]
fn arrows_scroll_by_fixed_step_regardless_of_focus() {
    assert_eq!(
        shortcut_for("ArrowDown", false),
        Some(Shortcut::ScrollBy(SCROLL_STEP_PX))
    );
    assert_eq!(
        shortcut_for("ArrowUp", true),
        Some(Shortcut::ScrollBy(-SCROLL_STEP_PX))
    );
}

#[test]
fn unbound_keys_fall_through_to_browser_default() {
    for code in ["Enter", "Escape", "ArrowLeft", "ArrowRight", "KeyA", "Tab"] {
        assert_eq!(shortcut_for(code, true), None, "'{code}' should be unbound");
    }
}

#[test]
fn menu_toggle_injected_once_at_or_below_breakpoint() {
    assert!(needs_menu_toggle(480.0, false));
    // Breakpoint itself is mobile.
    assert!(needs_menu_toggle(MOBILE_BREAKPOINT_PX, false));
    assert!(!needs_menu_toggle(MOBILE_BREAKPOINT_PX + 1.0, false));
    // Repeated resize events with the toggle already present never duplicate it.
    assert!(!needs_menu_toggle(480.0, true));
    assert!(!needs_menu_toggle(MOBILE_BREAKPOINT_PX, true));
}

#[test]
fn reveal_styles_hide_then_show() {
    let hidden = hidden_style();
    assert!(hidden.contains(&("opacity", "0")));
    assert!(hidden.contains(&("transform", "translateY(30px)")));
    assert!(
        hidden
            .iter()
            .any(|(name, value)| *name == "transition" && value.contains("0.6s")),
        "hidden elements must carry the reveal transition"
    );

    let shown = revealed_style();
    assert!(shown.contains(&("opacity", "1")));
    assert!(shown.contains(&("transform", "translateY(0)")));
}
