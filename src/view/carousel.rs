//! Wrapping cursor over a non-empty sequence.
//!
//! Shared by the idol profile carousel and by multi-entry fan-sign
//! markers. An empty sequence has no carousel at all, so callers render
//! their loading state instead of indexing into nothing.

use std::num::NonZeroUsize;

use serde::Serialize;

/// Zero-based index into a sequence of fixed, non-zero length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Carousel {
    index: usize,
    len: NonZeroUsize,
}

impl Carousel {
    /// Creates a carousel at index 0. Returns `None` for `len == 0`.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        NonZeroUsize::new(len).map(|len| Self { index: 0, len })
    }

    /// Current index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Length of the underlying sequence.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len.get()
    }

    /// Always `false`: a carousel is never built over an empty sequence.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Advances by one, wrapping from the last item to the first.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    /// Steps back by one, wrapping from the first item to the last.
    pub fn retreat(&mut self) -> usize {
        let len = self.len.get();
        self.index = (self.index + len - 1) % len;
        self.index
    }

    /// Jumps to `index`, wrapped modulo the length.
    pub fn select(&mut self, index: usize) -> usize {
        self.index = index % self.len;
        self.index
    }

    /// Item under the cursor.
    ///
    /// `None` only if `items` is shorter than the carousel, which means the
    /// caller passed a different sequence than it was built for.
    #[must_use]
    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }

    /// Position label, e.g. `"2 / 3"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }

    /// Returns `true` when there is more than one item to navigate.
    #[must_use]
    pub const fn is_navigable(&self) -> bool {
        self.len.get() > 1
    }
}
