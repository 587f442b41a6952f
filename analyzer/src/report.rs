use digest_core::persist::{load_text, save_text};
use digest_core::{DigestError, Result, Summary};
use std::path::Path;

/// Write the three-line summary report to `path`, replacing any previous one.
pub fn write_report(summary: &Summary, path: &Path) -> Result<()> {
    save_text(path, &summary.to_string()).inspect_err(|err| {
        tracing::error!(error = %err, "error writing summary file");
    })?;
    tracing::info!(path = %path.display(), "summary saved");
    Ok(())
}

/// Read a report written by [`write_report`]. The average comes back rounded
/// to two decimals.
pub fn read_report(path: &Path) -> Result<Summary> {
    let text = load_text(path)?;
    text.parse::<Summary>().map_err(|e| DigestError::InvalidShape {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
