//! Before/after comparison slider state.
//!
//! The slider is a percentage in `[0, 100]` of the root element's width. The
//! web layer feeds pointer and key input in and applies the resulting pixel
//! offset to the clip and handle elements.

use crate::constants::*;

#[inline]
pub fn clamp_pct(v: f64) -> f64 {
    v.clamp(0.0, 100.0)
}

/// Starting percentage from a `data-initial` attribute.
///
/// Missing, unparsable and zero values all fall back to 50. Like
/// `parseFloat`, a numeric prefix such as `"30%"` is accepted.
pub fn initial_pct(attr: Option<&str>) -> f64 {
    let parsed = attr.and_then(parse_float_prefix).unwrap_or(0.0);
    if parsed == 0.0 || parsed.is_nan() {
        clamp_pct(SLIDER_DEFAULT_PCT)
    } else {
        clamp_pct(parsed)
    }
}

fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    if rest.starts_with("Infinity") {
        return Some(sign * f64::INFINITY);
    }
    // only digits and exponent syntax, so Rust's "inf"/"nan" spellings never parse
    let numeric = s
        .char_indices()
        .find(|(_, c)| !matches!(c, '0'..='9' | '.' | 'e' | 'E' | '+' | '-'))
        .map_or(s.len(), |(i, _)| i);
    // longest prefix that parses as a float
    (1..=numeric)
        .rev()
        .find_map(|end| s[..end].parse::<f64>().ok())
}

/// What a key press on the handle asks for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyCommand {
    Nudge(f64),
    Set(f64),
}

pub fn key_command(key: &str, shift: bool) -> Option<KeyCommand> {
    let step = if shift {
        SLIDER_KEY_STEP_SHIFT
    } else {
        SLIDER_KEY_STEP
    };
    match key {
        "ArrowLeft" => Some(KeyCommand::Nudge(-step)),
        "ArrowRight" => Some(KeyCommand::Nudge(step)),
        "Home" => Some(KeyCommand::Set(0.0)),
        "End" => Some(KeyCommand::Set(100.0)),
        _ => None,
    }
}

/// Horizontal extent of the slider root in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Span {
    pub left: f64,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    pct: f64,
    span: Span,
    dragging: bool,
}

impl Slider {
    pub fn new(initial: f64, span: Span) -> Self {
        Self {
            pct: clamp_pct(initial),
            span,
            dragging: false,
        }
    }

    #[inline]
    pub fn pct(&self) -> f64 {
        self.pct
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Set the percentage (clamped) and return the new pixel offset.
    pub fn set_pct(&mut self, v: f64) -> f64 {
        self.pct = clamp_pct(v);
        self.offset_px()
    }

    /// Pixel offset of the handle from the left edge.
    #[inline]
    pub fn offset_px(&self) -> f64 {
        self.pct / 100.0 * self.span.width
    }

    /// Adopt a new bounding box, keeping the percentage.
    pub fn set_span(&mut self, span: Span) -> f64 {
        self.span = span;
        self.offset_px()
    }

    pub fn pointer_to_pct(&self, client_x: f64) -> f64 {
        if self.span.width > 0.0 {
            (client_x - self.span.left) / self.span.width * 100.0
        } else {
            self.pct
        }
    }

    pub fn press(&mut self, client_x: f64) -> f64 {
        self.dragging = true;
        self.set_pct(self.pointer_to_pct(client_x))
    }

    /// Follow the pointer while dragging; `None` when not dragging.
    pub fn drag(&mut self, client_x: f64) -> Option<f64> {
        self.dragging
            .then(|| self.pointer_to_pct(client_x))
            .map(|pct| self.set_pct(pct))
    }

    /// End a drag; returns whether one was in progress.
    pub fn release(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }

    pub fn apply_key(&mut self, cmd: KeyCommand) -> f64 {
        match cmd {
            KeyCommand::Nudge(d) => self.set_pct(self.pct + d),
            KeyCommand::Set(v) => self.set_pct(v),
        }
    }
}

/// CSS `transition` values used when the handle animates to a new spot.
pub fn transition_css() -> (String, String) {
    (
        format!("width {}ms {}", SLIDER_TRANSITION_MS, SLIDER_TRANSITION_EASING),
        format!(
            "transform {}ms {}",
            SLIDER_TRANSITION_MS, SLIDER_TRANSITION_EASING
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span() -> Span {
        Span {
            left: 100.0,
            width: 400.0,
        }
    }

    #[test]
    fn initial_pct_falls_back_to_default() {
        assert_eq!(initial_pct(None), 50.0);
        assert_eq!(initial_pct(Some("abc")), 50.0);
        assert_eq!(initial_pct(Some("0")), 50.0);
        assert_eq!(initial_pct(Some("30")), 30.0);
        assert_eq!(initial_pct(Some(" 42.5%")), 42.5);
        assert_eq!(initial_pct(Some("140")), 100.0);
        assert_eq!(initial_pct(Some("-5")), 0.0);
    }

    #[test]
    fn initial_pct_follows_js_infinity_spelling() {
        assert_eq!(initial_pct(Some("Infinity")), 100.0);
        assert_eq!(initial_pct(Some(" -Infinity")), 0.0);
        assert_eq!(initial_pct(Some("+Infinity%")), 100.0);
        assert_eq!(initial_pct(Some("inf")), 50.0);
        assert_eq!(initial_pct(Some("infinity")), 50.0);
        assert_eq!(initial_pct(Some("NaN")), 50.0);
        assert_eq!(initial_pct(Some("1e1px")), 10.0);
    }

    #[test]
    fn pointer_maps_to_clamped_pct() {
        let mut s = Slider::new(50.0, span());
        assert_eq!(s.offset_px(), 200.0);
        assert_eq!(s.press(200.0), 100.0);
        assert_eq!(s.pct(), 25.0);
        assert_eq!(s.drag(50.0), Some(0.0));
        assert_eq!(s.drag(900.0), Some(400.0));
        assert!(s.release());
        assert_eq!(s.drag(300.0), None);
        assert!(!s.release());
    }

    #[test]
    fn keys_nudge_and_jump() {
        let mut s = Slider::new(50.0, span());
        assert_eq!(key_command("ArrowLeft", false), Some(KeyCommand::Nudge(-3.0)));
        assert_eq!(key_command("ArrowRight", true), Some(KeyCommand::Nudge(10.0)));
        assert_eq!(key_command("a", false), None);
        s.apply_key(KeyCommand::Nudge(10.0));
        assert_eq!(s.pct(), 60.0);
        s.apply_key(KeyCommand::Set(100.0));
        s.apply_key(KeyCommand::Nudge(3.0));
        assert_eq!(s.pct(), 100.0);
        assert_eq!(key_command("Home", false), Some(KeyCommand::Set(0.0)));
    }

    #[test]
    fn resize_keeps_percentage() {
        let mut s = Slider::new(25.0, span());
        let x = s.set_span(Span {
            left: 0.0,
            width: 800.0,
        });
        assert_eq!(x, 200.0);
        assert_eq!(s.pct(), 25.0);
    }

    #[test]
    fn zero_width_span_keeps_pct() {
        let mut s = Slider::new(40.0, Span::default());
        assert_eq!(s.press(10.0), 0.0);
        assert_eq!(s.pct(), 40.0);
    }

    #[test]
    fn transitions_name_both_properties() {
        let (clip, handle) = transition_css();
        assert_eq!(clip, "width 500ms cubic-bezier(.4,0,.2,1)");
        assert!(handle.starts_with("transform 500ms"));
    }
}
