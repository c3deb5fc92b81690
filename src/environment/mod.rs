//! Host environment probing.
//!
//! Everything here is best-effort: probes degrade to a sentinel value
//! instead of returning errors.

pub mod os_release;

pub use os_release::{os_release_id, os_release_id_from, parse_os_release_id, UNKNOWN_OS};
