use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::DashResult;

/// Pretty JSON to `path` (parent directories created) or to stdout.
pub fn write_json<T: Serialize + ?Sized>(path: Option<&Path>, value: &T) -> DashResult<()> {
    let bytes = serde_json::to_vec_pretty(value)?;
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &bytes)?;
            info!(path = %path.display(), bytes = bytes.len(), "wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
