//! Hero slider over a handful of featured products.
//!
//! The slider is a bounded cursor. Advancing wraps in both directions and a
//! timer (owned by the caller) drives it forward at a fixed interval.

use pixalara_core::ProductId;
use thiserror::Error;

use crate::catalog::{Catalog, Product};

/// Products featured in the slider by default.
pub const DEFAULT_SLIDE_IDS: [ProductId; 3] =
    [ProductId::new(2), ProductId::new(6), ProductId::new(8)];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SliderError {
    #[error("slide {index} out of range (slider has {len} slides)")]
    OutOfRange { index: usize, len: usize },
}

/// A rotating set of product slides.
#[derive(Debug, Clone)]
pub struct Slider {
    slides: Vec<Product>,
    current: usize,
}

impl Slider {
    /// Build a slider from catalog products whose id is in `ids`.
    ///
    /// Slides keep catalog order; ids missing from the catalog are skipped.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog, ids: &[ProductId]) -> Self {
        let slides = catalog
            .products()
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect();
        Self { slides, current: 0 }
    }

    /// Step by `dir` slides (negative steps go backwards), wrapping around.
    /// Does nothing on an empty slider.
    pub fn advance(&mut self, dir: i32) {
        let Ok(len) = i64::try_from(self.slides.len()) else {
            return;
        };
        if len == 0 {
            return;
        }
        let current = i64::try_from(self.current).unwrap_or(0);
        let next = (current + i64::from(dir)).rem_euclid(len);
        self.current = usize::try_from(next).unwrap_or(0);
    }

    /// Jump to a slide.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::OutOfRange`] if `index` is not a valid slide.
    pub fn go_to(&mut self, index: usize) -> Result<(), SliderError> {
        if index >= self.slides.len() {
            return Err(SliderError::OutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// The slide being shown.
    #[must_use]
    pub fn current(&self) -> Option<&Product> {
        self.slides.get(self.current)
    }

    #[must_use]
    pub fn slides(&self) -> &[Product] {
        &self.slides
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Horizontal offset of the slide track, in percent of one slide.
    #[must_use]
    pub const fn offset_percent(&self) -> usize {
        self.current * 100
    }
}
