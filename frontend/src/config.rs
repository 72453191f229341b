use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose when running locally with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const BRAND_NAME: &str = "Bus by AllRides";

// Navbar gets its shadow once the page has scrolled past this many pixels
pub const NAV_SCROLL_THRESHOLD: f64 = 10.0;

pub const PHONE_DIGITS: usize = 10;
pub const FORM_NOTE_RESET_MS: u32 = 5_000;
pub const NOTE_ERROR_COLOR: &str = "#f87171";
pub const NOTE_SUCCESS_COLOR: &str = "#86efac";

pub const REVEAL_SELECTOR: &str = ".feature-card, .pricing-card, .contact-item, .section-header";
pub const REVEAL_THRESHOLD: f64 = 0.12;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";
pub const REVEAL_STAGGER_SECS: f64 = 0.06;
pub const REVEAL_OFFSET_PX: u32 = 24;
