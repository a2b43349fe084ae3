use crate::constants::*;

/// Selector for elements that fade in the first time they scroll into view.
pub const REVEAL_SELECTOR: &str = ".card, .tile, .tool-card";

/// One keyframe of the entrance animation.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe {
    pub transform: String,
    pub opacity: f32,
}

/// Timing passed alongside the keyframes to `Element.animate`.
#[derive(Clone, Debug, PartialEq)]
pub struct Timing {
    pub duration_ms: f64,
    pub easing: &'static str,
    pub fill: &'static str,
}

pub fn keyframes() -> [Keyframe; 2] {
    [
        Keyframe {
            transform: format!("translateY({}px)", REVEAL_OFFSET_PX),
            opacity: 0.0,
        },
        Keyframe {
            transform: "translateY(0)".to_string(),
            opacity: 1.0,
        },
    ]
}

pub fn timing() -> Timing {
    Timing {
        duration_ms: REVEAL_DURATION_MS,
        easing: REVEAL_EASING,
        fill: "both",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyframes_slide_up_and_fade_in() {
        let [from, to] = keyframes();
        assert_eq!(from.transform, "translateY(12px)");
        assert_eq!(from.opacity, 0.0);
        assert_eq!(to.transform, "translateY(0)");
        assert_eq!(to.opacity, 1.0);
    }

    #[test]
    fn timing_holds_final_frame() {
        let t = timing();
        assert_eq!(t.duration_ms, 600.0);
        assert_eq!(t.fill, "both");
    }
}
