// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Check whether the output file may be created or overwritten.
///
/// - missing file → Ok
/// - existing file with `force` → Ok
/// - existing file without `force` → ask on `input`
pub(crate) fn ensure_writable<R: BufRead>(path: &Path, force: bool, input: &mut R) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::Export(
            "cancelled: existing file not overwritten".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn declined_overwrite_is_an_error() {
        let path = std::env::temp_dir().join("hostelog_fs_utils_decline.csv");
        fs::write(&path, "x").unwrap();

        let mut no = io::Cursor::new(b"n\n".to_vec());
        assert!(ensure_writable(&path, false, &mut no).is_err());

        let mut yes = io::Cursor::new(b"yes\n".to_vec());
        assert!(ensure_writable(&path, false, &mut yes).is_ok());
        assert!(ensure_writable(&path, true, &mut io::empty()).is_ok());

        fs::remove_file(&path).ok();
    }
}
