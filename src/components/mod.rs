//! UI Components for the Titulación portal.
//!
//! Each page controller is a Leptos component; its state lives in
//! signals created per instance, so nothing leaks through globals.
//!
//! # Pages
//! - [`LoginPage`] - login tabs plus the identity-verification view
//! - [`DocumentsPage`] - the egresado's pending-document upload widgets
//! - [`ReviewPage`] - servicios escolares bulk selection and decisions
//!
//! # Feature Components
//! - [`IdentificationForm`] - identity verification with quick file picker
//! - [`DocumentUploadWidget`] - drag & drop uploader bound to one document
//! - [`DocumentDecisionRow`] - decision radios driving note enablement

mod identification;
mod login;
mod review;
mod upload;

pub use identification::*;
pub use login::*;
pub use review::*;
pub use upload::*;
