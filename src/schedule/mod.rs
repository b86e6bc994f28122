/// Time computations over a day's timings.
///
/// Everything here is pure: the current time is always an injected
/// parameter, never an ambient read, so the selection logic is
/// deterministic in tests.
///
/// Submodules:
/// - `next` — determines the next upcoming prayer.
/// - `format` — 24-hour to 12-hour display conversion.

pub mod format;
pub mod next;
