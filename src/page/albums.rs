//! Album timeline page.

use serde::Serialize;

use crate::domain::AlbumRecord;
use crate::view::group_by;

/// One year section of the timeline.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineYear<'a> {
    /// Year label.
    pub year: &'a str,
    /// Albums released that year, in source order.
    pub albums: Vec<&'a AlbumRecord>,
}

/// Serializable snapshot of the albums page.
#[derive(Debug, Clone, Serialize)]
pub struct AlbumsView<'a> {
    /// `true` while no album is available.
    pub loading: bool,
    /// Year sections in first-seen order.
    pub years: Vec<TimelineYear<'a>>,
}

/// Controller of the album timeline.
#[derive(Debug, Clone, Default)]
pub struct AlbumsPage {
    albums: Vec<AlbumRecord>,
}

impl AlbumsPage {
    /// Creates the page over loaded albums.
    #[must_use]
    pub fn new(albums: Vec<AlbumRecord>) -> Self {
        Self { albums }
    }

    /// All albums in source order.
    #[must_use]
    pub fn albums(&self) -> &[AlbumRecord] {
        &self.albums
    }

    /// Returns `true` while there is nothing to show.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.albums.is_empty()
    }

    /// Albums grouped by year, years in first-seen order.
    #[must_use]
    pub fn timeline(&self) -> Vec<TimelineYear<'_>> {
        group_by(&self.albums, |a| a.year.as_str())
            .into_iter()
            .map(|g| TimelineYear {
                year: g.key,
                albums: g.items,
            })
            .collect()
    }

    /// Snapshot for export.
    #[must_use]
    pub fn view(&self) -> AlbumsView<'_> {
        AlbumsView {
            loading: self.is_loading(),
            years: self.timeline(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load;

    #[test]
    fn groups_by_year_in_first_seen_order() {
        let loaded = load::<AlbumRecord>(
            "year,title,type,moments,img,desc\n2020,Debut,Single,1,/a,x\n2021,Comeback,EP,2,/b,y\n2020,Special,Single,3,/c,z\n",
        );
        let page = AlbumsPage::new(loaded.records);
        let timeline = page.timeline();

        let years: Vec<_> = timeline.iter().map(|y| y.year).collect();
        assert_eq!(years, vec!["2020", "2021"]);

        let titles: Vec<Vec<&str>> = timeline
            .iter()
            .map(|y| y.albums.iter().map(|a| a.title.as_str()).collect())
            .collect();
        assert_eq!(titles, vec![vec!["Debut", "Special"], vec!["Comeback"]]);
    }

    #[test]
    fn empty_page_is_loading() {
        let page = AlbumsPage::default();
        assert!(page.is_loading());
        assert!(page.view().years.is_empty());
    }
}
