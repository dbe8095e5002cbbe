use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("No widget named '{name}'")]
    WidgetNotFound { name: String },

    #[error("No record with id {id}")]
    RecordNotFound { id: i32 },

    #[error("Area is not defined for shape '{shape}'")]
    AreaUndefined { shape: String },

    #[error("Invalid config file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl SolidError {
    pub fn widget_not_found(name: impl Into<String>) -> Self {
        Self::WidgetNotFound { name: name.into() }
    }

    pub fn area_undefined(shape: impl Into<String>) -> Self {
        Self::AreaUndefined {
            shape: shape.into(),
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// True for the lookup failures raised when a key is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::WidgetNotFound { .. } | Self::RecordNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;
