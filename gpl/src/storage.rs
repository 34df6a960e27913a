use std::fs;
use std::path::Path;

use log::info;

use crate::error::GplError;

pub const EXTENSION: &str = "gpl";

fn check_extension(path: &Path) -> Result<(), GplError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case(EXTENSION) => Ok(()),
        _ => Err(GplError::UnsupportedExtension { path: path.to_path_buf() }),
    }
}

/// Reads program text from a `.gpl` file.
pub fn load_program(path: impl AsRef<Path>) -> Result<String, GplError> {
    let path = path.as_ref();
    check_extension(path)?;
    let text = fs::read_to_string(path)
        .map_err(|source| GplError::Io { path: path.to_path_buf(), source })?;
    info!("loaded {} ({} lines)", path.display(), text.lines().count());
    Ok(text)
}

pub fn save_program(path: impl AsRef<Path>, program: &str) -> Result<(), GplError> {
    let path = path.as_ref();
    check_extension(path)?;
    fs::write(path, program).map_err(|source| GplError::Io { path: path.to_path_buf(), source })?;
    info!("saved {}", path.display());
    Ok(())
}
