use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GplError {
    #[error("'{}' is not a .gpl file", .path.display())]
    UnsupportedExtension { path: PathBuf },

    #[error("Cannot access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
