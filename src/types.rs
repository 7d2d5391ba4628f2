//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Login Types** - tab and view-mode enumeration for the login panel
//! - **Document Types** - per-document rows and review states
//! - **File Types** - the transient "currently selected file" record

// =============================================================================
// Login Types
// =============================================================================

/// One tab of the login panel.
///
/// Mirrors the server's `form_type` discriminator: each tab shows
/// exactly one form, and exactly one tab is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginTab {
    /// Egresado (student) login - the default tab.
    Student,
    /// First-time account creation for egresados.
    CreateAccount,
    /// Servicios Escolares staff login.
    StaffServices,
}

impl LoginTab {
    /// All tabs, in display order.
    pub const ALL: [LoginTab; 3] = [
        LoginTab::Student,
        LoginTab::CreateAccount,
        LoginTab::StaffServices,
    ];

    /// The tab selected on page load.
    pub const DEFAULT: LoginTab = LoginTab::Student;

    /// The `form_type` value the server expects for this tab's form.
    pub fn form_type(&self) -> &'static str {
        match self {
            LoginTab::Student => "egresados",
            LoginTab::CreateAccount => "crear_egresado",
            LoginTab::StaffServices => "servicios_escolares",
        }
    }

    /// Tab label shown in the tab bar.
    pub fn label(&self) -> &'static str {
        match self {
            LoginTab::Student => "Egresados",
            LoginTab::CreateAccount => "Crear cuenta",
            LoginTab::StaffServices => "Servicios Escolares",
        }
    }
}

/// Which surface the login panel is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginView {
    /// Tab bar plus the active login form.
    Login,
    /// The identity-verification form, with the login surface hidden.
    Identification,
}

// =============================================================================
// Document Types
// =============================================================================

/// Review state of an uploaded document, as stored by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentStatus {
    Pendiente,
    Revisado,
    Aceptado,
    Rechazado,
}

impl DocumentStatus {
    /// The literal value the server stores and the radios post.
    pub fn as_value(&self) -> &'static str {
        match self {
            DocumentStatus::Pendiente => "pendiente",
            DocumentStatus::Revisado => "revisado",
            DocumentStatus::Aceptado => "aceptado",
            DocumentStatus::Rechazado => "rechazado",
        }
    }

    /// Display label for the estado badge.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Pendiente => "Pendiente",
            DocumentStatus::Revisado => "Revisado",
            DocumentStatus::Aceptado => "Aceptado",
            DocumentStatus::Rechazado => "Rechazado",
        }
    }

    /// Accepted documents expose no upload region.
    pub fn is_accepted(&self) -> bool {
        matches!(self, DocumentStatus::Aceptado)
    }
}

/// One required document row on the egresado page.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentRow {
    /// Server-side identifier, used in input names (`subir_<clave>`).
    pub clave: &'static str,
    /// Human-readable document title.
    pub titulo: &'static str,
    /// Current review state, as rendered by the server.
    pub estado: DocumentStatus,
}

/// One document under review on the servicios escolares page.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewDocument {
    /// Database id, used in input names (`estado_<id>`, `notas_<id>`).
    pub id: u32,
    pub titulo: &'static str,
    /// Decision already recorded server-side, if any.
    pub estado: DocumentStatus,
}

/// One egresado row in the bulk-selection table.
#[derive(Clone, Debug, PartialEq)]
pub struct EgresadoRow {
    pub numero_control: &'static str,
    pub nombre: &'static str,
}

// =============================================================================
// File Types
// =============================================================================

/// The file currently held by an upload widget.
///
/// Transient: created on selection or drop, replaced by the next
/// selection, cleared on removal or validation failure.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    /// Byte size as reported by the browser (`Blob.size`).
    pub size: f64,
}

impl SelectedFile {
    pub fn from_web_file(file: &web_sys::File) -> Self {
        SelectedFile {
            name: file.name(),
            size: file.size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tab_is_student() {
        assert_eq!(LoginTab::DEFAULT, LoginTab::Student);
        assert!(LoginTab::ALL.contains(&LoginTab::DEFAULT));
    }

    #[test]
    fn form_types_match_server_discriminators() {
        assert_eq!(LoginTab::Student.form_type(), "egresados");
        assert_eq!(LoginTab::CreateAccount.form_type(), "crear_egresado");
        assert_eq!(LoginTab::StaffServices.form_type(), "servicios_escolares");
    }

    #[test]
    fn only_aceptado_hides_the_upload_region() {
        assert!(DocumentStatus::Aceptado.is_accepted());
        assert!(!DocumentStatus::Pendiente.is_accepted());
        assert!(!DocumentStatus::Revisado.is_accepted());
        assert!(!DocumentStatus::Rechazado.is_accepted());
    }

    #[test]
    fn estado_values_are_the_stored_literals() {
        assert_eq!(DocumentStatus::Aceptado.as_value(), "aceptado");
        assert_eq!(DocumentStatus::Rechazado.as_value(), "rechazado");
    }
}
