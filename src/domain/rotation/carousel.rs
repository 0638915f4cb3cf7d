use serde::Serialize;

/// A slide index that wraps modulo its slide count.
///
/// Timer ticks and manual pagination write the same slot, so a tick always
/// continues from wherever the index currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// `len` of zero is treated as a single slide.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slide_count(&self) -> usize {
        self.len
    }

    /// One timer tick: `(index + 1) % len`.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    /// Manual override from the pagination dots.
    pub fn select(&mut self, index: usize) -> usize {
        self.index = index % self.len;
        self.index
    }
}
