/// Remote data ingestion for the prayer times service.
///
/// Submodules:
/// - `aladhan` — client for the AlAdhan timings API.

pub mod aladhan;
