//! # Configuration Management Module
//!
//! Questo modulo gestisce tutta la configurazione dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce la struct `Config` con tutti i parametri di compressione
//! - Fornisce validazione dei parametri di input
//! - Fornisce valori di default sensati per tutti i parametri
//!
//! ## Parametri di configurazione:
//! - `quality_low`: Limite inferiore qualità pngquant (0-100, default: 60)
//! - `quality_high`: Limite superiore qualità pngquant (0-100, default: 80)
//! - `speed`: Tradeoff velocità/qualità di pngquant (1-11, default: 1 = migliore)
//! - `pngquant_bin`: Eseguibile pngquant da invocare (default: nome di piattaforma)
//!
//! ## Validazione:
//! - Controlla che i limiti di qualità siano 0-100
//! - Controlla che speed sia 1-11
//! - L'ordinamento relativo dei due limiti di qualità NON viene controllato:
//!   la coppia è passata a pngquant così com'è
//!
//! ## Esempio:
//! ```rust
//! use pngquant_batch::Config;
//!
//! let config = Config {
//!     quality_low: 50,
//!     quality_high: 90,
//!     ..Default::default()
//! };
//! config.validate().unwrap();
//! ```

use crate::platform::PlatformCommands;
use anyhow::Result;
use std::path::PathBuf;

/// Configuration for batch compression
#[derive(Debug, Clone)]
pub struct Config {
    /// Lower bound of the pngquant quality range (0-100)
    pub quality_low: u8,
    /// Upper bound of the pngquant quality range (0-100)
    pub quality_high: u8,
    /// pngquant speed setting (1 = slowest/best, 11 = fastest/worst)
    pub speed: u8,
    /// pngquant executable to invoke (name on PATH or explicit path)
    pub pngquant_bin: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quality_low: 60,
            quality_high: 80,
            speed: 1,
            pngquant_bin: PathBuf::from(PlatformCommands::instance().get_command("pngquant")),
        }
    }
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.quality_low > 100 {
            return Err(anyhow::anyhow!("Quality lower bound must be between 0 and 100"));
        }

        if self.quality_high > 100 {
            return Err(anyhow::anyhow!("Quality upper bound must be between 0 and 100"));
        }

        if self.speed == 0 || self.speed > 11 {
            return Err(anyhow::anyhow!("Speed must be between 1 and 11"));
        }

        if self.pngquant_bin.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("pngquant executable name must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.quality_low, 60);
        assert_eq!(config.quality_high, 80);
        assert_eq!(config.speed, 1);
        assert!(!config.pngquant_bin.as_os_str().is_empty());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.quality_low = 101;
        assert!(config.validate().is_err());

        config.quality_low = 60;
        config.speed = 0;
        assert!(config.validate().is_err());

        config.speed = 12;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_quality_range_is_passed_through() {
        // pngquant receives the pair as-is, so an inverted range is not
        // rejected here
        let config = Config {
            quality_low: 90,
            quality_high: 40,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
