//! Index cursor over a fixed, non-empty list

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Start at index 0 of a list with `len` items
    pub fn new(len: usize) -> CoreResult<Self> {
        if len == 0 {
            return Err(CoreError::invalid_carousel("carousel needs at least one item"));
        }
        Ok(Self { index: 0, len })
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Advance one item, wrapping from the last back to the first
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.len,
            len: self.len,
        }
    }

    /// Go back one item, wrapping from the first to the last
    #[must_use]
    pub const fn previous(self) -> Self {
        Self {
            index: (self.index + self.len - 1) % self.len,
            len: self.len,
        }
    }

    /// Jump straight to `index`
    pub fn select(self, index: usize) -> CoreResult<Self> {
        if index >= self.len {
            return Err(CoreError::invalid_carousel(format!(
                "index {index} out of range for {} items",
                self.len
            )));
        }
        Ok(Self {
            index,
            len: self.len,
        })
    }

    #[must_use]
    pub const fn is_current(&self, index: usize) -> bool {
        self.index == index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_rejected() {
        assert!(matches!(
            Carousel::new(0),
            Err(CoreError::InvalidCarousel { .. })
        ));
    }

    #[test]
    fn test_next_wraps_to_start() {
        let carousel = Carousel::new(4).unwrap().select(3).unwrap();
        assert_eq!(carousel.next().index(), 0);
    }

    #[test]
    fn test_previous_wraps_to_end() {
        let carousel = Carousel::new(4).unwrap();
        assert_eq!(carousel.previous().index(), 3);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let start = Carousel::new(4).unwrap();
        let mut carousel = start;
        for _ in 0..4 {
            carousel = carousel.next();
        }
        assert_eq!(carousel, start);
    }

    #[test]
    fn test_select_out_of_range_keeps_cursor() {
        let carousel = Carousel::new(4).unwrap().next();
        assert!(carousel.select(4).is_err());
        assert_eq!(carousel.index(), 1);
        assert!(carousel.is_current(1));
    }

    #[test]
    fn test_single_item_stays_put() {
        let carousel = Carousel::new(1).unwrap();
        assert_eq!(carousel.next().index(), 0);
        assert_eq!(carousel.previous().index(), 0);
    }
}
