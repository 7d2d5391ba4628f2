//! Client-side pre-validation helpers.
//!
//! Everything here is pure and synchronous: the components gather values
//! from the DOM, call into this module, and surface the returned
//! violations via a blocking alert. Authoritative validation happens
//! server-side; these checks exist only so users get immediate feedback.

use crate::config::{MAX_DOCUMENT_SIZE_BYTES, PDF_MIME_TYPE};

/// Alert shown when a non-PDF file is dropped or picked.
pub const PDF_ONLY_MESSAGE: &str = "Por favor, sube solo archivos PDF.";

/// Quick-picker label when the chosen file is over the size limit.
pub const FILE_TOO_LARGE_MESSAGE: &str = "Archivo demasiado grande (Máx 2.5MB)";

// =============================================================================
// File policy
// =============================================================================

/// Metadata of a browser `File`, detached from the DOM for validation.
#[derive(Clone, Debug, PartialEq)]
pub struct FileMeta {
    pub name: String,
    /// Byte size (`Blob.size` is a double in the DOM).
    pub size: f64,
    /// MIME type (`Blob.type`), empty when the browser cannot tell.
    pub mime: String,
}

impl FileMeta {
    pub fn from_web_file(file: &web_sys::File) -> Self {
        FileMeta {
            name: file.name(),
            size: file.size(),
            mime: file.type_(),
        }
    }
}

/// Whether the MIME type is the one accepted document type.
pub fn is_pdf(mime: &str) -> bool {
    mime == PDF_MIME_TYPE
}

/// Whether a file is over the server's size limit. The limit itself
/// is acceptable (the check is strictly greater-than).
pub fn exceeds_size_limit(size: f64) -> bool {
    size > MAX_DOCUMENT_SIZE_BYTES as f64
}

// =============================================================================
// Size formatting
// =============================================================================

/// Human-readable size in binary units, two decimals, trailing zeros
/// trimmed: `1048576 → "1 MB"`, `1500 → "1.46 KB"`, `0 → "0 Bytes"`.
pub fn format_file_size(bytes: f64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0.0 {
        return "0 Bytes".to_string();
    }
    let exponent = (bytes.ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let scaled = bytes / 1024_f64.powi(exponent as i32);
    let formatted = format!("{:.2}", scaled);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[exponent])
}

// =============================================================================
// Identification form
// =============================================================================

/// A required text field of the identification form, as read from the DOM.
#[derive(Clone, Debug)]
pub struct RequiredField<'a> {
    pub label: &'a str,
    pub value: &'a str,
}

/// Validate the identification form, aggregating every violation.
///
/// Order matches the form: empty required fields first, then the
/// attached file (missing, non-PDF, over-size). An empty result means
/// the submission may proceed.
pub fn validate_identification(fields: &[RequiredField<'_>], file: Option<&FileMeta>) -> Vec<String> {
    let mut errors = Vec::new();

    // Igual que en producción: solo se rechaza la cadena vacía, un valor
    // de puros espacios cuenta como presente.
    for field in fields {
        if field.value.is_empty() {
            errors.push(format!("{} es requerido", field.label));
        }
    }

    match file {
        None => errors.push("Documento de identificación es requerido".to_string()),
        Some(meta) => {
            if !is_pdf(&meta.mime) {
                errors.push("Solo se permiten archivos PDF".to_string());
            }
            if exceeds_size_limit(meta.size) {
                errors.push("El archivo excede el tamaño máximo de 2.5MB".to_string());
            }
        }
    }

    errors
}

// =============================================================================
// Review notes rule
// =============================================================================

/// Whether a document's note checkboxes are interactive.
///
/// La regla compara contra el literal "rechazado": cualquier otro valor
/// (aceptado, pendiente, revisado) deja las notas bloqueadas. Esto se
/// conserva tal cual del comportamiento en producción, aunque los
/// comentarios originales lo describían como "aceptar bloquea notas".
pub fn notes_enabled(decision_value: &str) -> bool {
    decision_value == "rechazado"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(size: f64) -> FileMeta {
        FileMeta {
            name: "acta.pdf".to_string(),
            size,
            mime: "application/pdf".to_string(),
        }
    }

    #[test]
    fn size_formatting_matches_display_contract() {
        assert_eq!(format_file_size(0.0), "0 Bytes");
        assert_eq!(format_file_size(500.0), "500 Bytes");
        assert_eq!(format_file_size(1_500.0), "1.46 KB");
        assert_eq!(format_file_size(1_048_576.0), "1 MB");
        assert_eq!(format_file_size(2_621_440.0), "2.5 MB");
        assert_eq!(format_file_size(3.5 * 1024.0 * 1024.0 * 1024.0), "3.5 GB");
    }

    #[test]
    fn size_formatting_at_unit_boundaries() {
        assert_eq!(format_file_size(1_023.0), "1023 Bytes");
        assert_eq!(format_file_size(1_024.0), "1 KB");
        assert_eq!(format_file_size(1_048_575.0), "1024 KB");
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert!(!exceeds_size_limit(2_621_440.0));
        assert!(exceeds_size_limit(2_621_441.0));
        assert!(!exceeds_size_limit(0.0));
    }

    #[test]
    fn only_exact_pdf_mime_passes() {
        assert!(is_pdf("application/pdf"));
        assert!(!is_pdf("application/PDF"));
        assert!(!is_pdf("image/png"));
        assert!(!is_pdf(""));
    }

    #[test]
    fn valid_identification_has_no_errors() {
        let fields = [
            RequiredField { label: "CURP", value: "GOMC950101HDFRRL09" },
            RequiredField { label: "Nombre completo", value: "Carlos Gómez" },
        ];
        assert!(validate_identification(&fields, Some(&pdf(1_000.0))).is_empty());
    }

    #[test]
    fn whitespace_only_field_counts_as_present() {
        let fields = [RequiredField { label: "CURP", value: "   " }];
        assert!(validate_identification(&fields, Some(&pdf(1_000.0))).is_empty());
    }

    #[test]
    fn every_violation_is_aggregated() {
        let fields = [
            RequiredField { label: "CURP", value: "" },
            RequiredField { label: "Nombre completo", value: "" },
        ];
        let file = FileMeta {
            name: "foto.png".to_string(),
            size: 3_000_000.0,
            mime: "image/png".to_string(),
        };
        let errors = validate_identification(&fields, Some(&file));
        assert_eq!(
            errors,
            vec![
                "CURP es requerido",
                "Nombre completo es requerido",
                "Solo se permiten archivos PDF",
                "El archivo excede el tamaño máximo de 2.5MB",
            ]
        );
    }

    #[test]
    fn missing_file_is_its_own_violation() {
        let fields = [RequiredField { label: "CURP", value: "X" }];
        let errors = validate_identification(&fields, None);
        assert_eq!(errors, vec!["Documento de identificación es requerido"]);
    }

    #[test]
    fn oversize_pdf_reports_only_the_size() {
        let fields: [RequiredField<'_>; 0] = [];
        let errors = validate_identification(&fields, Some(&pdf(2_621_441.0)));
        assert_eq!(errors, vec!["El archivo excede el tamaño máximo de 2.5MB"]);
    }

    #[test]
    fn notes_follow_the_literal_rechazado_value() {
        assert!(notes_enabled("rechazado"));
        assert!(!notes_enabled("aceptado"));
        assert!(!notes_enabled("pendiente"));
        assert!(!notes_enabled("revisado"));
        assert!(!notes_enabled(""));
        // case-sensitive, igual que en producción
        assert!(!notes_enabled("Rechazado"));
    }
}
