//! # JPEG Conversion Module
//!
//! Questo modulo gestisce la pre-conversione JPEG -> PNG e il cleanup
//! garantito del file temporaneo.
//!
//! ## Responsabilità:
//! - Decodifica la JPEG con la crate `image` e la ri-codifica come PNG
//!   temporaneo (`base_tmp.png`)
//! - Fornisce `TempArtifact`, una guardia RAII che cancella il temporaneo
//!   su ogni percorso di uscita dell'operazione per-file (equivalente a un
//!   blocco finally)
//!
//! ## Garanzie:
//! - La guardia viene creata PRIMA della codifica, quindi anche una scrittura
//!   parziale viene rimossa
//! - Il file originale non viene mai toccato da questo modulo

use crate::error::CompressError;
use crate::format::temp_png_path;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Scoped guard owning a transient file.
///
/// Dropping the guard removes the file if it exists; failures to remove are
/// logged but never propagated, since the guard typically runs during error
/// unwinding.
#[derive(Debug)]
pub struct TempArtifact {
    path: PathBuf,
}

impl TempArtifact {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        if self.path.exists() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                warn!("Failed to remove temporary file {}: {}", self.path.display(), e);
            } else {
                debug!("Removed temporary file: {}", self.path.display());
            }
        }
    }
}

/// Decode a JPEG and re-encode it losslessly as a temporary PNG.
///
/// The temporary file lives at `base_tmp.png` next to the input and is owned
/// by the returned [`TempArtifact`]. On decode or encode failure the error is
/// returned with its underlying cause and no temporary file is leaked.
pub fn jpeg_to_temp_png(input: &Path) -> Result<TempArtifact, CompressError> {
    let tmp = TempArtifact::new(temp_png_path(input));
    debug!("Converting {} -> {}", input.display(), tmp.path().display());

    let img = image::open(input)?;
    img.save_with_format(tmp.path(), image::ImageFormat::Png)?;

    Ok(tmp)
}
