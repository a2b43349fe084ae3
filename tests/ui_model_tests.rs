// Host-side tests for the page models behind theme, navigation, sliders and
// the contact form.

use portfolio_core::slider::{initial_pct, key_command};
use portfolio_core::*;

#[test]
fn theme_preference_round_trip() {
    // first visit on a light-preferring system, then two toggles
    let mut theme = Theme::resolve_initial(None, true);
    assert_eq!(theme, Theme::Light);
    theme = theme.toggled();
    let stored = theme.as_str().to_string();
    assert_eq!(Theme::resolve_initial(Some(&stored), true), Theme::Dark);
}

#[test]
fn corrupted_storage_falls_back_to_media_query() {
    assert_eq!(Theme::resolve_initial(Some(""), false), Theme::Dark);
    assert_eq!(Theme::resolve_initial(Some("null"), true), Theme::Light);
    let err = "null".parse::<Theme>().unwrap_err();
    assert!(err.to_string().contains("null"));
}

#[test]
fn nav_follows_scroll_through_page() {
    let tops = [Some(0.0), Some(720.0), None, Some(2100.0)];
    let visited: Vec<usize> = [0.0, 599.0, 600.0, 1500.0, 1979.0, 1980.0, 9000.0]
        .iter()
        .map(|y| active_index(*y, &tops))
        .collect();
    assert_eq!(visited, vec![0, 0, 1, 1, 1, 3, 3]);
}

#[test]
fn slider_keyboard_walk_stays_in_range() {
    let mut s = Slider::new(
        initial_pct(Some("95")),
        Span {
            left: 0.0,
            width: 200.0,
        },
    );
    for _ in 0..3 {
        let cmd = key_command("ArrowRight", false).unwrap();
        s.apply_key(cmd);
    }
    assert_eq!(s.pct(), 100.0);
    assert_eq!(s.offset_px(), 200.0);
    s.apply_key(key_command("Home", false).unwrap());
    assert_eq!(s.offset_px(), 0.0);
    s.apply_key(key_command("ArrowRight", true).unwrap());
    assert_eq!(s.pct(), 10.0);
}

#[test]
fn slider_drag_session() {
    let mut s = Slider::new(
        50.0,
        Span {
            left: 20.0,
            width: 500.0,
        },
    );
    assert_eq!(s.drag(100.0), None, "moves before a press are ignored");
    s.press(145.0);
    assert!(s.is_dragging());
    assert_eq!(s.pct(), 25.0);
    assert_eq!(s.drag(395.0), Some(375.0));
    assert!(s.release());
    assert!(!s.is_dragging());
    assert_eq!(s.pct(), 75.0);
}

#[test]
fn mobile_menu_closes_after_navigation() {
    let mut menu = MobileMenu::default();
    menu.toggle();
    assert_eq!(menu.aria_expanded(), "true");
    menu.close();
    menu.close();
    assert_eq!(menu.aria_expanded(), "false");
}

#[test]
fn contact_form_builds_mailto_for_multiline_message() {
    let form = ContactForm::new("Grace Hopper", "grace@navy.mil", "Line one\nLine two & more");
    let href = form.mailto("hello@example.com").unwrap();
    assert!(href.starts_with("mailto:hello@example.com?subject=Portfolio%20Contact&body="));
    assert!(href.contains("Name%3A%20Grace%20Hopper"));
    assert!(href.ends_with("Line%20one%0ALine%20two%20%26%20more"));
}

#[test]
fn contact_form_rejects_whitespace_only_fields() {
    let form = ContactForm::new(" ", "a@b.c", "hi");
    assert_eq!(
        form.mailto("hello@example.com"),
        Err(ContactError::MissingFields(vec!["name"]))
    );
}
