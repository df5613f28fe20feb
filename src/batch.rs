//! # Batch Compressor Orchestrator Module
//!
//! Questo è il modulo principale che orchestra il workflow di compressione.
//!
//! ## Responsabilità:
//! - Coordinamento di tutti gli altri moduli
//! - Procedura per-file: validazione → conversione opzionale → pngquant →
//!   cleanup dei temporanei e dell'originale JPEG
//! - Loop sequenziale sul batch con isolamento degli errori per-file
//! - Progress tracking e report finale con statistiche
//!
//! ## Pipeline per file:
//! 1. **Existence check**: il path deve puntare a un file regolare esistente
//! 2. **Extension dispatch**: classificazione chiusa `Png` / `Jpeg` /
//!    `Unsupported` (case-insensitive)
//! 3. **JPEG**: conversione in PNG temporaneo `base_tmp.png`; in caso di
//!    errore pngquant non viene invocato e l'originale resta intatto
//! 4. **Compressione**: pngquant scrive `base.png` sovrascrivendo
//!    incondizionatamente (`--force`)
//! 5. **Cleanup**: l'originale `.jpg`/`.jpeg` viene cancellato solo se la
//!    compressione è riuscita; il PNG temporaneo viene cancellato su ogni
//!    percorso di uscita (guardia RAII)
//!
//! ## Error handling:
//! - Gli errori dei singoli file non bloccano mai il batch
//! - Ogni esito produce una riga distinta di output
//! - L'unico errore fatale è l'assenza di argomenti, gestita dalla CLI
//!
//! ## Esempio:
//! ```rust,no_run
//! use pngquant_batch::{BatchCompressor, Config};
//!
//! # async fn demo(files: Vec<std::path::PathBuf>) -> anyhow::Result<()> {
//! let compressor = BatchCompressor::new(Config::default())?;
//! let stats = compressor.run(&files).await;
//! println!("{}", stats.format_summary());
//! # Ok(())
//! # }
//! ```

use crate::compressor::Pngquant;
use crate::config::Config;
use crate::convert::{jpeg_to_temp_png, TempArtifact};
use crate::error::CompressError;
use crate::format::{png_output_path, ImageKind};
use crate::progress::{BatchStats, ProgressManager};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, warn};

/// Outcome of a successful per-file compression
#[derive(Debug)]
pub struct CompressReport {
    /// Path of the compressed PNG
    pub output: PathBuf,
    /// Size of the input file before compression
    pub original_size: u64,
    /// Size of the compressed output
    pub new_size: u64,
}

/// Main batch compression orchestrator
pub struct BatchCompressor {
    pngquant: Pngquant,
}

impl BatchCompressor {
    /// Create a new batch compressor instance
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            pngquant: Pngquant::new(config),
        })
    }

    /// Run the compression batch over an ordered list of files.
    ///
    /// Files are processed strictly sequentially; a failure on one file is
    /// reported and the batch moves on to the next. Never returns an error:
    /// per-file outcomes are reflected only in the returned [`BatchStats`].
    pub async fn run(&self, files: &[PathBuf]) -> BatchStats {
        info!("Compressing {} file(s) with pngquant", files.len());

        if !self.pngquant.is_available().await {
            warn!("pngquant not found; every compression will fail until it is installed");
        }

        let progress = ProgressManager::new(files.len() as u64);
        let mut stats = BatchStats::new();

        for path in files {
            match self.compress_one(path).await {
                Ok(report) => {
                    info!(
                        "✅ Compressed {} ({} -> {})",
                        report.output.display(),
                        crate::utils::format_size(report.original_size),
                        crate::utils::format_size(report.new_size),
                    );
                    stats.add_compressed(report.original_size, report.new_size);
                }
                Err(e) => {
                    error!("❌ {}: {}", path.display(), e);
                    stats.add_error();
                }
            }
            progress.update(&path.display().to_string());
        }

        progress.finish(&stats.format_summary());
        info!("{}", stats.format_summary());

        stats
    }

    /// Compress a single file.
    ///
    /// Workflow:
    /// - `.png` inputs are handed to pngquant directly and compressed in
    ///   place (`base.png` is the input itself)
    /// - `.jpg`/`.jpeg` inputs are first re-encoded as a temporary
    ///   `base_tmp.png`; after a successful compression the original JPEG is
    ///   deleted, on failure it is preserved
    /// - any other extension is rejected without touching the filesystem
    ///
    /// The temporary PNG, when created, is removed on every exit path out of
    /// this method.
    pub async fn compress_one(&self, path: &Path) -> Result<CompressReport, CompressError> {
        if !path.is_file() {
            return Err(CompressError::InputNotFound(path.to_path_buf()));
        }

        let original_size = fs::metadata(path).await?.len();
        let kind = ImageKind::classify(path);
        let output = png_output_path(path);

        // The guard owns base_tmp.png for the JPEG case and deletes it when
        // this function returns, on success and on every error path alike.
        let temp: Option<TempArtifact> = match &kind {
            ImageKind::Png => None,
            ImageKind::Jpeg => Some(jpeg_to_temp_png(path)?),
            ImageKind::Unsupported(ext) => {
                return Err(CompressError::UnsupportedFormat(ext.clone()));
            }
        };

        let source = temp
            .as_ref()
            .map(|t| t.path().to_path_buf())
            .unwrap_or_else(|| path.to_path_buf());

        self.pngquant.compress(&source, &output).await?;

        // Deletion of the original is conditioned on compression success, so
        // a failed run leaves the JPEG in place.
        if kind.is_jpeg() {
            fs::remove_file(path).await?;
            info!("🗑 Removed original: {}", path.display());
        }

        let new_size = fs::metadata(&output).await?.len();

        Ok(CompressReport {
            output,
            original_size,
            new_size,
        })
    }
}
