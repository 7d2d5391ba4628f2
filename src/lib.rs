//! Titulación - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for the school's degree-processing portal:
//! login and identity verification, per-document PDF uploads, and the
//! servicios escolares review page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App (router)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /                    LoginPage                              │
//! │                       ├── login tabs + forms                 │
//! │                       └── IdentificationForm                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /egresado            DocumentsPage                          │
//! │                       └── DocumentUploadWidget (per doc)     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /servicios-escolares ReviewPage                             │
//! │                       └── DocumentDecisionRow (per doc)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pages are independent: each listens only to events on its own
//! surface and mutates its own signals plus native form-input state.
//! Form submissions target the external server; nothing here talks to
//! the network.
//!
//! # Modules
//!
//! - [`config`] - policy constants (file size limit, MIME type, paths)
//! - [`types`] - common types (tabs, document rows, selected file)
//! - [`validation`] - pure client-side pre-validation helpers
//! - [`components`] - UI components (pages and widgets)

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Login panel
    LoginTab, LoginView,
    // Documents
    DocumentRow, DocumentStatus, EgresadoRow, ReviewDocument,
    // Files
    SelectedFile,
};

// Validation
pub use validation::{
    exceeds_size_limit, format_file_size, is_pdf, notes_enabled, validate_identification,
    FileMeta, RequiredField,
};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🎓 Titulación - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=LoginPage/>
                    <Route path="/egresado" view=DocumentsPage/>
                    <Route path="/servicios-escolares" view=ReviewPage/>
                </Routes>
            </main>
        </Router>
    }
}
