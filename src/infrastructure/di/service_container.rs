//! Service container for dependency injection
//!
//! Wires up settings and the filesystem for the library service.

use std::sync::Arc;

use crate::application::services::{Library, TreeOptions};
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding settings and I/O dependencies.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, fs }
    }

    /// Scan the configured library root.
    pub fn library(&self) -> ApplicationResult<Library> {
        Library::open(&self.settings.root, Arc::clone(&self.fs))
    }

    /// Tree formatting taken from settings.
    pub fn tree_options(&self) -> TreeOptions {
        TreeOptions {
            indent_width: self.settings.indent_width,
            use_tabs: self.settings.use_tabs,
            print_files: self.settings.show_files,
        }
    }
}
