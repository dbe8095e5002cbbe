use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use super::describe;

pub struct ScreenLogger;

impl ScreenLogger {
    pub fn log(&self, message: &str) {
        println!("{message}");
    }
}

/// Exists, but [`MathOperations`] has no way to use it.
pub struct FileLogger {
    file_path: PathBuf,
}

impl FileLogger {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn log(&self, message: &str) {
        let _ = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)
            .and_then(|mut file| writeln!(file, "{message}"));
    }
}

/// Hard-wired to the screen.
pub struct MathOperations {
    logger: ScreenLogger,
}

impl MathOperations {
    pub fn new(logger: ScreenLogger) -> Self {
        Self { logger }
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_results() {
        let ops = MathOperations::new(ScreenLogger);
        let sum = ops.add(3.0, 5.0);
        assert_eq!(sum, 8.0);
        assert_eq!(ops.subtract(sum, 12.0), -4.0);
    }

    #[test]
    fn test_file_logger_stands_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("today.log");
        let logger = FileLogger::new(&path);
        logger.log("3 + 5 = 8");
        assert_eq!(fs::read_to_string(&path).unwrap(), "3 + 5 = 8\n");
    }
}
