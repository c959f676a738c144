//! Lightstick / idol profile carousel page.

use serde::Serialize;

use crate::domain::IdolProfile;
use crate::view::Carousel;

/// What the page can render right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightstickState<'a> {
    /// No profile loaded yet.
    Loading,
    /// A profile is under the cursor.
    Ready {
        /// Profile shown.
        idol: &'a IdolProfile,
        /// 1-based position, shown as `STAR #n`.
        star: usize,
    },
}

/// One profile in the exported view.
#[derive(Debug, Clone, Serialize)]
pub struct IdolView<'a> {
    /// The profile record.
    #[serde(flatten)]
    pub idol: &'a IdolProfile,
    /// 1-based position.
    pub star: usize,
    /// Wiki panel text with fallback applied.
    pub wiki_text: &'a str,
}

/// Serializable snapshot of the carousel page.
#[derive(Debug, Clone, Serialize)]
pub struct LightsticksView<'a> {
    /// `true` while no profile is available.
    pub loading: bool,
    /// Index under the cursor.
    pub active: Option<usize>,
    /// Profiles in carousel order.
    pub idols: Vec<IdolView<'a>>,
}

/// Controller of the idol profile carousel and its wiki panel.
#[derive(Debug, Clone, Default)]
pub struct LightsticksPage {
    idols: Vec<IdolProfile>,
    carousel: Option<Carousel>,
    wiki_open: bool,
}

impl LightsticksPage {
    /// Creates the page with the cursor on the first profile.
    #[must_use]
    pub fn new(idols: Vec<IdolProfile>) -> Self {
        let carousel = Carousel::new(idols.len());
        Self {
            idols,
            carousel,
            wiki_open: false,
        }
    }

    /// Current render state.
    #[must_use]
    pub fn state(&self) -> LightstickState<'_> {
        let Some(carousel) = self.carousel else {
            return LightstickState::Loading;
        };
        match carousel.current(&self.idols) {
            Some(idol) => LightstickState::Ready {
                idol,
                star: carousel.index() + 1,
            },
            None => LightstickState::Loading,
        }
    }

    /// Moves to the next profile. `None` while loading.
    pub fn advance(&mut self) -> Option<usize> {
        self.carousel.as_mut().map(Carousel::advance)
    }

    /// Moves to the previous profile. `None` while loading.
    pub fn retreat(&mut self) -> Option<usize> {
        self.carousel.as_mut().map(Carousel::retreat)
    }

    /// Jumps to `index`, wrapped. `None` while loading.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        self.carousel.as_mut().map(|c| c.select(index))
    }

    /// Opens the wiki panel of the current profile.
    pub fn open_wiki(&mut self) {
        self.wiki_open = true;
    }

    /// Closes the wiki panel.
    pub fn close_wiki(&mut self) {
        self.wiki_open = false;
    }

    /// Returns `true` while the wiki panel is open.
    #[must_use]
    pub const fn is_wiki_open(&self) -> bool {
        self.wiki_open
    }

    /// Wiki text of the current profile. `None` while loading.
    #[must_use]
    pub fn wiki_text(&self) -> Option<&str> {
        match self.state() {
            LightstickState::Ready { idol, .. } => Some(idol.wiki_text()),
            LightstickState::Loading => None,
        }
    }

    /// Snapshot for export.
    #[must_use]
    pub fn view(&self) -> LightsticksView<'_> {
        LightsticksView {
            loading: self.carousel.is_none(),
            active: self.carousel.map(|c| c.index()),
            idols: self
                .idols
                .iter()
                .enumerate()
                .map(|(i, idol)| IdolView {
                    idol,
                    star: i + 1,
                    wiki_text: idol.wiki_text(),
                })
                .collect(),
        }
    }
}
