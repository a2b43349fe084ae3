// Shared visual and interaction tuning constants used by the web frontend.

// Particle field sizing
pub const MAX_PARTICLES: usize = 120;
pub const AREA_PER_PARTICLE: f32 = 14_000.0; // css px² per particle

// Particle sampling ranges (half-open, css px and px/frame)
pub const SPEED_RANGE: (f32, f32) = (-0.25, 0.25);
pub const RADIUS_RANGE: (f32, f32) = (1.0, 2.2);
pub const ALPHA_RANGE: (f32, f32) = (0.3, 0.9);

// Hues in degrees
pub const COOL_HUE: u16 = 195; // blue
pub const WARM_HUE: u16 = 45; // gold
pub const HUE_SATURATION: u8 = 90;
pub const LINE_LIGHTNESS: u8 = 65;
pub const GLOW_LIGHTNESS: u8 = 60;

// Connections
pub const LINK_DISTANCE: f32 = 120.0;
pub const LINK_ALPHA_DARK: f32 = 0.35;
pub const LINK_ALPHA_LIGHT: f32 = 0.28;

// Glow sizing relative to particle radius
pub const GLOW_FILL_SCALE: f32 = 2.0;
pub const GLOW_FADE_SCALE: f32 = 5.0;

// Background grid
pub const GRID_SPACING: f32 = 28.0;
pub const GRID_GLOBAL_ALPHA: f32 = 0.07;
pub const GRID_RGBA_DARK: [f32; 4] = [255.0, 255.0, 255.0, 0.06];
pub const GRID_RGBA_LIGHT: [f32; 4] = [0.0, 0.0, 0.0, 0.08];

// Backing store scaling
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Navigation
pub const NAV_SCROLL_PROBE_OFFSET: f64 = 120.0; // px below the top edge that counts as "in" a section

// Before/after slider
pub const SLIDER_DEFAULT_PCT: f64 = 50.0;
pub const SLIDER_KEY_STEP: f64 = 3.0;
pub const SLIDER_KEY_STEP_SHIFT: f64 = 10.0;
pub const SLIDER_TRANSITION_MS: u32 = 500;
pub const SLIDER_TRANSITION_CLEAR_MS: i32 = 520;
pub const SLIDER_TRANSITION_EASING: &str = "cubic-bezier(.4,0,.2,1)";
pub const SHEEN_FADE_MS: i32 = 200;

// Reveal animation
pub const REVEAL_THRESHOLD: f64 = 0.14;
pub const REVEAL_DURATION_MS: f64 = 600.0;
pub const REVEAL_OFFSET_PX: f32 = 12.0;
pub const REVEAL_EASING: &str = "cubic-bezier(.2,.7,.2,1)";

// Frame statistics
pub const FRAME_STATS_WINDOW: u32 = 600;
