use log::Level;

// Notification timings (ms)
pub const TOAST_ENTER_DELAY_MS: u32 = 100;
pub const TOAST_LIFETIME_MS: u32 = 5_000;
pub const TOAST_EXIT_MS: u32 = 300;

pub const COUNTER_DURATION_MS: u32 = 2_000;
/// One animation frame at ~60fps.
pub const FRAME_MS: f64 = 16.0;

pub const NAVBAR_SCROLLED_OFFSET: f64 = 100.0;
pub const BACK_TO_TOP_OFFSET: f64 = 300.0;

/// Fake round trip for the contact form, there is no backend behind it.
pub const SUBMIT_DELAY_MS: u32 = 2_000;

pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const IMAGE_THRESHOLD: f64 = 0.1;
pub const IMAGE_RESTING_OPACITY: f64 = 0.8;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
