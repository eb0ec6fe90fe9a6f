use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

const STDIN: &str = "-";

/// Read a whole text input; `-` means stdin.
pub(crate) fn read_text(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Default text id for an input: the file stem, or `stdin`.
pub(crate) fn text_id(path: &Path) -> String {
    if path.as_os_str() == STDIN {
        return "stdin".to_string();
    }
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
