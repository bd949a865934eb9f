use std::path::Path;

use anyhow::Context;
use dotpe_core::ResultMapping;

/// Write the mapping to `path` as 4-space-indented JSON, replacing any
/// existing file. Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub(crate) async fn write_output(path: &Path, mapping: &ResultMapping) -> anyhow::Result<()> {
    let rendered = mapping
        .to_pretty_json()
        .context("failed to serialize ongoing items")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    tokio::fs::write(path, rendered)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), entries = mapping.len(), "wrote output file");
    Ok(())
}
