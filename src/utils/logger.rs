//! Logger utility for application-wide logging
//!
//! A `log::Log` implementation that writes every record to a file and echoes
//! it to the console.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use log::{Log, Record, Level, Metadata, LevelFilter};

use crate::raster::RasterEntry;
use crate::utils::format_utils::{format_scene_point, CoordinateFormat};

/// File-backed logger
///
/// Clones share one file handle, so a clone installed as the global logger
/// and the original can both write without clobbering each other.
#[derive(Clone)]
pub struct Logger {
    /// File handle for log output
    file: Arc<Mutex<Option<File>>>,
}

impl Logger {
    /// Creates a new logger writing to `log_file`
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Arc::new(Mutex::new(Some(file))),
        })
    }

    /// Logs a message to the log file
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs the loaded rasters as a table
    ///
    /// One row per raster: id, name, size, scene origin and whether it
    /// carries a geotransform.
    pub fn print_raster_table(&self, entries: &[RasterEntry]) -> io::Result<()> {
        self.log("Loaded rasters:")?;

        for entry in entries {
            let message = format!(
                "  {} {:<24} {}x{}  origin {}  {}",
                entry.id(),
                entry.name(),
                entry.pixel_width(),
                entry.pixel_height(),
                format_scene_point(&entry.scene_origin(), CoordinateFormat::Compact),
                if entry.has_transform() { "georeferenced" } else { "plain image" }
            );
            self.log(&message)?;
        }

        Ok(())
    }

    /// Install a clone of this logger as the global `log` backend
    pub fn install_global(&self) {
        if log::set_boxed_logger(Box::new(self.clone())).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(LevelFilter::Debug);
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.log(&message);

            println!("{}", message);
        }
    }

    fn flush(&self) {}
}
