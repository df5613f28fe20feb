//! # Format Classification Module
//!
//! Questo modulo classifica i file di input in base all'estensione e deriva
//! i path di output e dei file temporanei.
//!
//! ## Responsabilità:
//! - Classificazione case-insensitive dell'estensione in una variante chiusa
//! - Derivazione deterministica del path di output (`base.png`)
//! - Derivazione del path temporaneo per la conversione JPEG (`base_tmp.png`)
//!
//! ## Formati supportati:
//! - **PNG**: compresso direttamente, nessun file temporaneo
//! - **JPEG** (.jpg/.jpeg): convertito in PNG temporaneo prima della compressione
//! - **Altri**: rifiutati con errore, nessun file viene toccato

use std::path::{Path, PathBuf};

/// Closed classification of an input path by extension.
///
/// Produced once per file by [`ImageKind::classify`] and matched exhaustively
/// by the batch workflow, instead of scattering string comparisons through
/// the control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageKind {
    /// `.png` - used as the compression source directly
    Png,
    /// `.jpg` / `.jpeg` - needs PNG normalization before compression
    Jpeg,
    /// Anything else; carries the offending extension for error reporting
    Unsupported(String),
}

impl ImageKind {
    /// Classify a path by its extension, case-insensitively.
    pub fn classify(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "png" => ImageKind::Png,
            "jpg" | "jpeg" => ImageKind::Jpeg,
            other => ImageKind::Unsupported(other.to_string()),
        }
    }

    /// Check if this is a JPEG input (drives original-file cleanup)
    pub fn is_jpeg(&self) -> bool {
        matches!(self, ImageKind::Jpeg)
    }
}

/// Derive the compressed output path: same base name, `.png` extension.
///
/// For a `.png` input this is the input path itself, so compression happens
/// in place (pngquant is invoked with `--force`).
pub fn png_output_path(input: &Path) -> PathBuf {
    input.with_extension("png")
}

/// Derive the transient PNG path used for JPEG normalization: `base_tmp.png`.
pub fn temp_png_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("{}_tmp.png", stem))
}
