//! Writes each page's initial view, plus the load report, as JSON.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::catalog::ContentCatalog;
use crate::error::ContentError;

/// File written for the albums page.
pub const ALBUMS_FILE: &str = "albums.json";
/// File written for the photocards page.
pub const PHOTOCARDS_FILE: &str = "photocards.json";
/// File written for the fan-sign map page.
pub const FANSIGN_FILE: &str = "fansign.json";
/// File written for the lightsticks page.
pub const LIGHTSTICKS_FILE: &str = "lightsticks.json";
/// File written for the birthday page.
pub const BIRTHDAY_FILE: &str = "birthday.json";
/// File written for the load report.
pub const REPORT_FILE: &str = "report.json";

/// Writes every page view of `catalog` into `out_dir`, creating the
/// directory if needed. Returns the written paths in write order.
///
/// # Errors
///
/// Returns [`ContentError::Io`] if the directory or a file cannot be
/// written, or [`ContentError::Json`] if a view fails to serialize.
pub fn write_page_views(
    catalog: &ContentCatalog,
    out_dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>, ContentError> {
    let out_dir = out_dir.as_ref();
    std::fs::create_dir_all(out_dir).map_err(|source| ContentError::io(out_dir, source))?;

    let albums = catalog.albums_page();
    let photocards = catalog.photocards_page();
    let fansign = catalog.fansign_page();
    let lightsticks = catalog.lightsticks_page();
    let birthday = catalog.birthday_page();

    let written = vec![
        write_json(out_dir, ALBUMS_FILE, &albums.view())?,
        write_json(out_dir, PHOTOCARDS_FILE, &photocards.view())?,
        write_json(out_dir, FANSIGN_FILE, &fansign.view())?,
        write_json(out_dir, LIGHTSTICKS_FILE, &lightsticks.view())?,
        write_json(out_dir, BIRTHDAY_FILE, &birthday.view())?,
        write_json(out_dir, REPORT_FILE, catalog.report())?,
    ];

    tracing::info!(dir = %out_dir.display(), files = written.len(), "page views written");
    Ok(written)
}

fn write_json<T: Serialize + ?Sized>(
    dir: &Path,
    name: &str,
    value: &T,
) -> Result<PathBuf, ContentError> {
    let path = dir.join(name);
    let bytes = serde_json::to_vec_pretty(value)?;
    std::fs::write(&path, bytes).map_err(|source| ContentError::io(&path, source))?;
    tracing::debug!(path = %path.display(), "view written");
    Ok(path)
}
