//! # Pngquant Batch Library
//!
//! Questo è il modulo principale della libreria che espone tutte le API pubbliche.
//!
//! ## Responsabilità:
//! - Definisce la struttura modulare dell'applicazione
//! - Espone i tipi e le funzioni principali tramite re-exports
//! - Fornisce un'interfaccia pulita per il main.rs e per altri consumatori
//!
//! ## Architettura dei moduli:
//! - `config`: Gestione configurazione e validazione parametri
//! - `error`: Tipi di errore custom per le diverse operazioni
//! - `format`: Classificazione estensioni e derivazione dei path di output
//! - `convert`: Pre-conversione JPEG -> PNG con cleanup garantito del file temporaneo
//! - `compressor`: Invocazione del tool esterno `pngquant`
//! - `batch`: Orchestratore del processo per-file e del batch
//! - `platform`: Gestione cross-platform dei comandi esterni
//! - `progress`: Progress tracking e statistiche
//!
//! ## Utilizzo:
//! ```rust,no_run
//! use pngquant_batch::{BatchCompressor, Config};
//!
//! # async fn demo(files: Vec<std::path::PathBuf>) -> anyhow::Result<()> {
//! let compressor = BatchCompressor::new(Config::default())?;
//! compressor.run(&files).await;
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod compressor;
pub mod config;
pub mod convert;
pub mod error;
pub mod format;
pub mod platform;
pub mod progress;
pub mod utils;

pub use batch::{BatchCompressor, CompressReport};
pub use config::Config;
pub use error::CompressError;
pub use format::ImageKind;
