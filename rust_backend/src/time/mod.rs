pub mod clock;

// Re-export the clock/calendar helpers used throughout the pipeline
pub use clock::{hour_from_clock, month_start, pad_clock, parse_calendar_date};
