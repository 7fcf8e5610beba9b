//! File I/O for records, configs and generated documents

use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Read and parse a JSON file
#[cfg(feature = "serde")]
pub(crate) async fn read_json<T>(path: impl AsRef<Path>) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Serialize as pretty JSON and write to a file
#[cfg(feature = "serde")]
pub(crate) async fn write_json<T>(value: &T, path: impl AsRef<Path>) -> Result<()>
where
    T: serde::Serialize,
{
    let json = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

/// Save a generated PDF document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, ImposeError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

/// Write an SVG document
pub async fn save_svg(svg: &str, path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path.as_ref(), svg).await?;
    log::info!("Wrote {}", path.as_ref().display());
    Ok(())
}
