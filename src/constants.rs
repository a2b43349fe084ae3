/// Page hooks and browser-side settings for the portfolio front-end.
///
/// Element ids and selectors mirror the markup of the site; keeping them here
/// lets the wiring modules stay free of string literals.
// Particle background
pub const CANVAS_ID: &str = "bg-canvas";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Theme
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

// Navigation
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAV_SELECTOR: &str = ".nav";
pub const NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
pub const NAV_OPEN_CLASS: &str = "open";
pub const ACTIVE_CLASS: &str = "active";

// Before/after sliders
pub const SLIDER_ROOT_SELECTOR: &str = ".before-after";
pub const SLIDER_CLIP_SELECTOR: &str = ".ba-after-clip";
pub const SLIDER_HANDLE_SELECTOR: &str = ".ba-handle";
pub const SLIDER_SHEEN_SELECTOR: &str = ".ba-sheen";
pub const SLIDER_INITIAL_ATTRIBUTE: &str = "data-initial";
pub const DRAGGING_CLASS: &str = "dragging";
pub const SHEEN_ANIMATE_CLASS: &str = "animate-[glassSheen_1.6s_ease-in-out]";
pub const SHEEN_VISIBLE_CLASS: &str = "opacity-100";

// Contact form
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const CONTACT_RECIPIENT: &str = "hello@example.com";

// Footer
pub const YEAR_ID: &str = "year";
