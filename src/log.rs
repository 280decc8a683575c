// src/log.rs
//
// Thin layer over the `log` facade. The GUI writes to `.store/debug.log`,
// the CLI writes to stderr. Level comes from RUST_LOG (default: info).

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;
use env_logger::{Builder, Env, Target};

pub use ::log as facade;

pub const LOG_FILE: &str = ".store/debug.log";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

/// Install the global logger. Safe to call more than once; later calls are ignored.
pub fn init(target: LogTarget) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{}][{}] {}",
            Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.args()
        )
    });

    if target == LogTarget::File {
        match open_log_file(Path::new(LOG_FILE)) {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("Could not open {LOG_FILE} ({e}); logging to stderr"),
        }
    }

    let _ = builder.try_init();
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::facade::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::facade::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::facade::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::facade::error!($($arg)*)
    };
}
