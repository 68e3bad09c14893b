use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Viewports narrower than this render the compact (carousel) layout.
pub const COMPACT_BREAKPOINT: f64 = 1024.0;

/// Distance a single carousel arrow press scrolls, in CSS pixels.
pub const CAROUSEL_SCROLL_STEP: f64 = 300.0;

/// Slack before the right edge counts as reached, absorbs sub-pixel rounding.
pub const SCROLL_EDGE_EPSILON: f64 = 10.0;

pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

pub const CONTACT_PHONE_DISPLAY: &str = "+94 70 707 4470";
pub const CONTACT_PHONE_LINK: &str = "tel:+94707074470";
pub const CONTACT_EMAIL: &str = "info@rainbowapartments.lk";
pub const WHATSAPP_LINK: &str = "https://wa.me/94707074470";
