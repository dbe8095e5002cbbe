use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::describe;

/// The seam between [`MathOperations`] and wherever its lines end up.
pub trait Logger {
    fn log(&self, message: &str);
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, message: &str) {
        (**self).log(message)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, message: &str) {
        (**self).log(message)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ScreenLogger;

impl Logger for ScreenLogger {
    fn log(&self, message: &str) {
        println!("{message}");
    }
}

/// Appends one line per message. The file is opened and closed on every call.
#[derive(Debug, Clone)]
pub struct FileLogger {
    file_path: PathBuf,
}

impl FileLogger {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn try_log(&self, message: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)?;
        writeln!(file, "{message}")
    }
}

impl Logger for FileLogger {
    /// Write failures are dropped.
    fn log(&self, message: &str) {
        let _ = self.try_log(message);
    }
}

/// Keeps every message in memory, in call order.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: RefCell<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, message: &str) {
        self.lines.borrow_mut().push(message.to_string());
    }
}

pub struct MathOperations<L> {
    logger: L,
}

impl<L: Logger> MathOperations<L> {
    pub fn new(logger: L) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        let result = a + b;
        self.logger.log(&describe(a, '+', b, result));
        result
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        let result = a - b;
        self.logger.log(&describe(a, '-', b, result));
        result
    }
}
