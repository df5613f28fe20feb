//! # Platform-specific utilities
//!
//! Questo modulo centralizza la logica cross-platform per la gestione dei
//! comandi esterni: mapping dei nomi eseguibile (`.exe` su Windows) e
//! verifica della disponibilità di un tool.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// Platform-specific command manager
pub struct PlatformCommands {
    commands: HashMap<&'static str, &'static str>,
    which_command: &'static str,
}

impl PlatformCommands {
    /// Get the singleton instance
    pub fn instance() -> &'static Self {
        static INSTANCE: OnceLock<PlatformCommands> = OnceLock::new();
        INSTANCE.get_or_init(Self::new)
    }

    /// Initialize platform-specific commands
    fn new() -> Self {
        let (commands, which_command) = if cfg!(windows) {
            let mut commands = HashMap::new();
            commands.insert("pngquant", "pngquant.exe");
            (commands, "where")
        } else {
            let mut commands = HashMap::new();
            commands.insert("pngquant", "pngquant");
            (commands, "which")
        };

        Self {
            commands,
            which_command,
        }
    }

    /// Get the platform-specific command name
    pub fn get_command<'a>(&self, base_name: &'a str) -> &'a str {
        self.commands.get(base_name).unwrap_or(&base_name)
    }

    /// Get the command used to check if a program exists
    pub fn which_command(&self) -> &str {
        self.which_command
    }

    /// Check if a command is available.
    ///
    /// An explicit path (anything with a directory component) is checked for
    /// existence directly; a bare name is probed through `which`/`where`.
    pub async fn is_command_available(&self, command: &Path) -> bool {
        if command.components().count() > 1 {
            return command.is_file();
        }

        let result = tokio::process::Command::new(self.which_command)
            .arg(command)
            .output()
            .await;

        match result {
            Ok(output) => output.status.success(),
            Err(_) => false,
        }
    }
}
