//! Application configuration.
//!
//! Centralized configuration for the Titulación frontend.
//! The file policy values mirror what the school's server enforces;
//! they live here once so no component duplicates them.

/// Maximum accepted document size, in bytes.
///
/// 2.5 MiB (2.5 × 1024 × 1024). The server rejects anything larger,
/// so the widgets pre-check against the same limit.
pub const MAX_DOCUMENT_SIZE_BYTES: u64 = 2_621_440;

/// The only MIME type the portal accepts for uploaded documents.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Delay before the identification form returns to the login view
/// after a successful (simulated) submission, in milliseconds.
pub const LOGIN_RETURN_DELAY_MS: u32 = 2_000;

/// Form target for the egresado documents page.
pub const EGRESADO_SUBMIT_PATH: &str = "/egresado/";

/// Form target for the servicios escolares review page.
pub const REVISION_SUBMIT_PATH: &str = "/servicios_escolares/";
