//! # Error Types Module
//!
//! Questo modulo definisce tutti i tipi di errore custom dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce `CompressError` enum per categorizzare tutti gli errori possibili
//! - Fornisce messaggi di errore descrittivi e strutturati
//! - Integra con `thiserror` per automatic error conversion
//!
//! ## Categorie di errori:
//! - `Io`: Errori di I/O (permessi, cancellazioni fallite, etc.)
//! - `Image`: Errori di decodifica/codifica durante la conversione JPEG -> PNG
//! - `InputNotFound`: Il path non punta a un file regolare esistente
//! - `UnsupportedFormat`: Estensione fuori da .jpg/.jpeg/.png
//! - `Pngquant`: Il processo esterno è fallito o non è stato avviato
//! - `Validation`: Errori di validazione della configurazione
//!
//! Ogni errore è isolato al file corrente: il batch continua sempre con il
//! file successivo.

/// Custom error types for batch compression
#[derive(thiserror::Error, Debug)]
pub enum CompressError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JPEG to PNG conversion failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("File not found: {}", .0.display())]
    InputNotFound(std::path::PathBuf),

    #[error("Unsupported extension: {0:?} (only .jpg, .jpeg and .png are supported)")]
    UnsupportedFormat(String),

    #[error("pngquant failed (exit code {code:?}): {output}")]
    Pngquant {
        /// Exit code of the external process, `None` when it could not be launched
        code: Option<i32>,
        /// Captured stdout/stderr diagnostics from the process
        output: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}
