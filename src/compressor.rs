//! # External Compressor Module
//!
//! Questo modulo incapsula l'invocazione del tool esterno `pngquant`, che
//! esegue tutta la compressione lossy vera e propria.
//!
//! ## Responsabilità:
//! - Costruzione degli argomenti della command line di pngquant
//! - Esecuzione sincrona (bloccante per il chiamante) del processo esterno
//!   con `tokio::process::Command`
//! - Cattura di exit status, stdout e stderr per la diagnostica
//! - Probe di disponibilità del tool per il warning all'avvio
//!
//! ## Invocazione:
//! ```text
//! pngquant --quality=<low>-<high> --output <out> --force --speed <n> <src>
//! ```
//!
//! `--force` garantisce la sovrascrittura incondizionata dell'output.
//! Exit code 0 = successo; qualsiasi altro valore, incluso il fallimento di
//! avvio del processo, diventa un unico errore `Pngquant` con la diagnostica
//! catturata. Nessun timeout: il processo gira fino al completamento.

use crate::config::Config;
use crate::error::CompressError;
use crate::platform::PlatformCommands;
use crate::utils::to_string_vec;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

/// Wrapper around the external pngquant process
#[derive(Debug, Clone)]
pub struct Pngquant {
    config: Config,
}

impl Pngquant {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Build the pngquant argument vector for a source/output pair.
    pub fn build_args(&self, source: &str, output: &str) -> Vec<String> {
        let quality = format!(
            "--quality={}-{}",
            self.config.quality_low, self.config.quality_high
        );
        let speed = self.config.speed.to_string();

        to_string_vec([
            quality.as_str(),
            "--output",
            output,
            "--force",
            "--speed",
            &speed,
            source,
        ])
    }

    /// Compress `source` into `output`, overwriting it if present.
    ///
    /// Blocks (awaits) until pngquant exits. A non-zero exit status or a
    /// launch failure is reported as [`CompressError::Pngquant`] carrying
    /// whatever diagnostic text the process produced.
    pub async fn compress(&self, source: &Path, output: &Path) -> Result<(), CompressError> {
        let source_str = source
            .to_str()
            .ok_or_else(|| CompressError::Validation(format!("Invalid source path: {:?}", source)))?;
        let output_str = output
            .to_str()
            .ok_or_else(|| CompressError::Validation(format!("Invalid output path: {:?}", output)))?;

        let args = self.build_args(source_str, output_str);
        debug!("Running {:?} {:?}", self.config.pngquant_bin, args);

        let result = Command::new(&self.config.pngquant_bin)
            .args(&args)
            .output()
            .await
            .map_err(|e| CompressError::Pngquant {
                code: None,
                output: format!(
                    "could not launch {}: {}",
                    self.config.pngquant_bin.display(),
                    e
                ),
            })?;

        if result.status.success() {
            debug!("pngquant succeeded for {}", source.display());
            Ok(())
        } else {
            let mut diagnostics = String::from_utf8_lossy(&result.stderr).trim().to_string();
            let stdout = String::from_utf8_lossy(&result.stdout);
            let stdout = stdout.trim();
            if !stdout.is_empty() {
                if !diagnostics.is_empty() {
                    diagnostics.push('\n');
                }
                diagnostics.push_str(stdout);
            }

            Err(CompressError::Pngquant {
                code: result.status.code(),
                output: diagnostics,
            })
        }
    }

    /// Check whether the configured pngquant executable can be found.
    pub async fn is_available(&self) -> bool {
        PlatformCommands::instance()
            .is_command_available(&self.config.pngquant_bin)
            .await
    }
}
