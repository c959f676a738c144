//! All six datasets, loaded once, plus the load report.
//!
//! [`ContentCatalog`] reads every dataset through a [`ContentSource`]
//! and hands typed records to the page controllers. A source that cannot
//! be read is an error; rows that cannot be parsed are only diagnostics.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{
    AlbumRecord, BirthdayEvent, BirthdayMember, Dataset, FanSignLocation, IdolProfile,
    PhotocardRecord,
};
use crate::error::ContentError;
use crate::loader::{Diagnostic, Loaded, Record, load};
use crate::page::{AlbumsPage, BirthdayPage, FanSignPage, LightsticksPage, PhotocardsPage};

/// Where dataset text comes from.
pub trait ContentSource {
    /// Returns the raw CSV text of `dataset`.
    ///
    /// # Errors
    ///
    /// Returns a [`ContentError`] if the text cannot be obtained.
    fn read(&self, dataset: Dataset) -> Result<String, ContentError>;
}

/// Reads `<dir>/<dataset file name>`.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    /// Creates a source rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of `dataset` inside the directory.
    #[must_use]
    pub fn path_of(&self, dataset: Dataset) -> PathBuf {
        self.dir.join(dataset.file_name())
    }
}

impl ContentSource for DirSource {
    fn read(&self, dataset: Dataset) -> Result<String, ContentError> {
        let path = self.path_of(dataset);
        std::fs::read_to_string(&path).map_err(|source| ContentError::io(path, source))
    }
}

/// In-memory sources, e.g. text embedded with `include_str!`. A dataset
/// with no entry reads as empty text.
impl ContentSource for HashMap<Dataset, String> {
    fn read(&self, dataset: Dataset) -> Result<String, ContentError> {
        Ok(self.get(&dataset).cloned().unwrap_or_default())
    }
}

/// Load outcome of one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetReport {
    /// Dataset loaded.
    pub dataset: Dataset,
    /// Records kept.
    pub records: usize,
    /// Rows excluded.
    pub dropped: usize,
    /// All diagnostics, in source order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Load outcome of the whole catalog.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    /// When the catalog finished loading.
    pub loaded_at: DateTime<Utc>,
    /// One entry per dataset, in [`Dataset::ALL`] order.
    pub datasets: Vec<DatasetReport>,
}

impl LoadReport {
    /// Total diagnostics across all datasets.
    #[must_use]
    pub fn diagnostic_count(&self) -> usize {
        self.datasets.iter().map(|d| d.diagnostics.len()).sum()
    }

    /// Total records across all datasets.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.datasets.iter().map(|d| d.records).sum()
    }

    /// Report entry of `dataset`.
    #[must_use]
    pub fn dataset(&self, dataset: Dataset) -> Option<&DatasetReport> {
        self.datasets.iter().find(|d| d.dataset == dataset)
    }
}

/// Typed records of every dataset.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    /// Album timeline entries.
    pub albums: Vec<AlbumRecord>,
    /// Photocards.
    pub photocards: Vec<PhotocardRecord>,
    /// Fan-sign locations.
    pub locations: Vec<FanSignLocation>,
    /// Idol profiles.
    pub idols: Vec<IdolProfile>,
    /// Birthday member bar entries.
    pub members: Vec<BirthdayMember>,
    /// Birthday events.
    pub events: Vec<BirthdayEvent>,
    report: LoadReport,
}

impl ContentCatalog {
    /// Loads every dataset from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Io`] if any dataset file cannot be read.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, ContentError> {
        Self::load(&DirSource::new(dir.as_ref()))
    }

    /// Loads every dataset from `source`.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `source`.
    pub fn load(source: &impl ContentSource) -> Result<Self, ContentError> {
        let mut datasets = Vec::with_capacity(Dataset::ALL.len());

        let albums = load_one::<AlbumRecord>(source, &mut datasets)?;
        let photocards = load_one::<PhotocardRecord>(source, &mut datasets)?;
        let locations = load_one::<FanSignLocation>(source, &mut datasets)?;
        let idols = load_one::<IdolProfile>(source, &mut datasets)?;
        let members = load_one::<BirthdayMember>(source, &mut datasets)?;
        let events = load_one::<BirthdayEvent>(source, &mut datasets)?;

        let report = LoadReport {
            loaded_at: Utc::now(),
            datasets,
        };
        tracing::info!(
            records = report.record_count(),
            diagnostics = report.diagnostic_count(),
            "content catalog loaded"
        );

        Ok(Self {
            albums,
            photocards,
            locations,
            idols,
            members,
            events,
            report,
        })
    }

    /// Load report.
    #[must_use]
    pub const fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Fresh albums page.
    #[must_use]
    pub fn albums_page(&self) -> AlbumsPage {
        AlbumsPage::new(self.albums.clone())
    }

    /// Fresh photocards page.
    #[must_use]
    pub fn photocards_page(&self) -> PhotocardsPage {
        PhotocardsPage::new(self.photocards.clone())
    }

    /// Fresh fan-sign map page.
    #[must_use]
    pub fn fansign_page(&self) -> FanSignPage {
        FanSignPage::new(&self.locations)
    }

    /// Fresh lightsticks page.
    #[must_use]
    pub fn lightsticks_page(&self) -> LightsticksPage {
        LightsticksPage::new(self.idols.clone())
    }

    /// Fresh birthday page.
    #[must_use]
    pub fn birthday_page(&self) -> BirthdayPage {
        BirthdayPage::new(self.members.clone(), self.events.clone())
    }
}

fn load_one<T: Record>(
    source: &impl ContentSource,
    reports: &mut Vec<DatasetReport>,
) -> Result<Vec<T>, ContentError> {
    let text = source.read(T::DATASET)?;
    let loaded: Loaded<T> = load(&text);
    reports.push(DatasetReport {
        dataset: T::DATASET,
        records: loaded.records.len(),
        dropped: loaded.dropped(),
        diagnostics: loaded.diagnostics,
    });
    Ok(loaded.records)
}
