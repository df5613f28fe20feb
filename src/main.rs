//! # Pngquant Batch - Main Entry Point
//!
//! Questo è il punto di ingresso principale dell'applicazione.
//!
//! ## Responsabilità:
//! - Parsing degli argomenti della command line con `clap`
//! - Inizializzazione del sistema di logging con `tracing`
//! - Creazione della configurazione e avvio del batch
//!
//! ## Flusso di esecuzione:
//! 1. Parsa gli argomenti CLI (lista file, quality range, speed, etc.);
//!    zero file è un errore d'uso con exit status non-zero
//! 2. Configura il logging (INFO o DEBUG a seconda del flag verbose)
//! 3. Crea un oggetto Config e istanzia BatchCompressor
//! 4. Processa ogni file in ordine; gli errori per-file non cambiano
//!    l'exit status, che resta 0 dopo aver tentato tutti i file
//!
//! ## Esempio di utilizzo:
//! ```bash
//! pngquant-batch photo1.png photo2.jpg --quality-low 50 --quality-high 90
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use pngquant_batch::{BatchCompressor, Config};

#[derive(Parser)]
#[command(name = "pngquant-batch")]
#[command(about = "Batch-compress PNG and JPEG images with pngquant")]
struct Args {
    /// Image files to compress (.png, .jpg, .jpeg)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Lower bound of the pngquant quality range (0-100)
    #[arg(long, default_value = "60")]
    quality_low: u8,

    /// Upper bound of the pngquant quality range (0-100)
    #[arg(long, default_value = "80")]
    quality_high: u8,

    /// pngquant speed setting (1 = slowest/best quality, 11 = fastest)
    #[arg(long, default_value = "1")]
    speed: u8,

    /// Path to the pngquant executable (defaults to pngquant on PATH)
    #[arg(long)]
    pngquant_bin: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = Config {
        quality_low: args.quality_low,
        quality_high: args.quality_high,
        speed: args.speed,
        ..Default::default()
    };
    if let Some(bin) = args.pngquant_bin {
        config.pngquant_bin = bin;
    }

    let compressor = BatchCompressor::new(config)?;

    // Per-file failures are reported inside the loop and never fail the
    // batch: after attempting every file the process exits 0.
    compressor.run(&args.files).await;

    Ok(())
}
