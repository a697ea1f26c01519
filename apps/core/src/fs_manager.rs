use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Resolves the portable data layout next to the executable.
pub struct PortablePathManager;

impl PortablePathManager {
    /// Application root directory (where the executable lives).
    pub fn root_dir() -> PathBuf {
        let exe_dir = std::env::current_exe().ok().map(|mut path| {
            path.pop(); // executable name
            path
        });

        #[cfg(debug_assertions)]
        if let Some(dir) = &exe_dir {
            // target/debug -> workspace root -> apps/core
            if let Some(workspace) = dir.parent().and_then(|p| p.parent()) {
                let core_path = workspace.join("apps").join("core");
                if core_path.exists() {
                    return core_path;
                }
            }
        }

        match exe_dir {
            Some(dir) => dir,
            None => {
                warn!("Failed to get current exe path. Falling back to current_dir.");
                std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
            }
        }
    }

    /// Main data directory (./data).
    pub fn data_dir() -> PathBuf {
        Self::root_dir().join("data")
    }

    /// Database directory (./data/db).
    pub fn db_dir() -> PathBuf {
        Self::data_dir().join("db")
    }

    /// Default SQLite location for chat history.
    pub fn default_db_path() -> PathBuf {
        Self::db_dir().join("meetcode-chat.sqlite")
    }

    /// Creates the data and db directories if they don't exist.
    pub fn init() -> Result<(), std::io::Error> {
        let db_path = Self::db_dir();

        if !db_path.exists() {
            info!("Creating db directory: {:?}", db_path);
            fs::create_dir_all(&db_path)?;
        }

        Ok(())
    }
}
