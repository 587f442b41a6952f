use crate::error::{DigestError, Result};
use serde_json::Value;
use std::fs::{self, create_dir_all, File};
use std::io::{BufReader, Read};
use std::path::Path;

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> DigestError + '_ {
    move |source| DigestError::Io { path: path.to_path_buf(), source }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dir_all(dir).map_err(io_err(dir))?;
    }
    Ok(())
}

/// Read and parse a JSON document. A missing file is reported as `NotFound`
/// rather than a bare I/O error.
pub fn load_json(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(DigestError::NotFound { path: path.to_path_buf() });
    }
    let f = File::open(path).map_err(io_err(path))?;
    let value = serde_json::from_reader(BufReader::new(f))
        .map_err(|source| DigestError::Malformed { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), "loaded JSON document");
    Ok(value)
}

/// Serialize `value` and write it to `path` in one call, replacing any
/// existing content. Nothing is written if serialization fails.
pub fn save_json(path: &Path, value: &Value) -> Result<()> {
    let bytes = serde_json::to_vec(value)
        .map_err(|source| DigestError::Malformed { path: path.to_path_buf(), source })?;
    ensure_parent(path)?;
    let len = bytes.len();
    fs::write(path, bytes).map_err(io_err(path))?;
    tracing::debug!(path = %path.display(), bytes = len, "saved JSON document");
    Ok(())
}

pub fn save_text(path: &Path, text: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, text).map_err(io_err(path))?;
    Ok(())
}

pub fn load_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(DigestError::NotFound { path: path.to_path_buf() });
    }
    let mut f = File::open(path).map_err(io_err(path))?;
    let mut buf = String::new();
    f.read_to_string(&mut buf).map_err(io_err(path))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn save_then_load_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/data.json");
        let doc = json!([{"userId": 1, "id": 1, "title": "t", "body": "b"}]);
        save_json(&path, &doc).unwrap();
        assert_eq!(load_json(&path).unwrap(), doc);
    }

    #[test]
    fn load_reports_missing_and_malformed() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(load_json(&missing), Err(DigestError::NotFound { .. })));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{not json").unwrap();
        assert!(matches!(load_json(&bad), Err(DigestError::Malformed { .. })));
    }

    #[test]
    fn save_json_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "old content that is longer than the new one").unwrap();
        save_json(&path, &json!([])).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
