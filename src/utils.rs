//! # Utility Functions Module
//!
//! Questo modulo fornisce piccole funzioni di supporto usate dal resto
//! dell'applicazione: costruzione degli argomenti per i comandi esterni e
//! formattazione human-readable delle dimensioni.

/// Converts an iterable of string-like items to `Vec<String>`.
///
/// Eliminates repetitive `.to_string()` calls when building argument vectors
/// for external commands.
///
/// # Example
/// ```rust
/// use pngquant_batch::utils::to_string_vec;
///
/// let args = to_string_vec(["--force", "--speed", "1"]);
/// assert_eq!(args.len(), 3);
/// ```
pub fn to_string_vec<T, I>(items: I) -> Vec<String>
where
    T: ToString,
    I: IntoIterator<Item = T>,
{
    items.into_iter().map(|item| item.to_string()).collect()
}

/// Get human-readable file size
pub fn format_size(size: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = size as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", size as u64, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}
