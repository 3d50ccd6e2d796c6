use crate::utils::error::{DeskError, Result};

/// Cyclic cursor over a fixed, non-empty list.
///
/// Holds nothing but the index, so any number of carousels can share the
/// same item slice.
#[derive(Debug, Clone, Copy)]
pub struct Carousel<'a, T> {
    items: &'a [T],
    current_index: usize,
}

/// One navigation dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

impl<'a, T> Carousel<'a, T> {
    pub fn new(items: &'a [T]) -> Result<Self> {
        if items.is_empty() {
            return Err(DeskError::EmptyCarousel);
        }
        Ok(Self {
            items,
            current_index: 0,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> &'a T {
        &self.items[self.current_index]
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn next(&mut self) -> usize {
        self.current_index = (self.current_index + 1) % self.len();
        tracing::trace!("carousel next -> {}", self.current_index);
        self.current_index
    }

    pub fn previous(&mut self) -> usize {
        self.current_index = (self.current_index + self.len() - 1) % self.len();
        tracing::trace!("carousel previous -> {}", self.current_index);
        self.current_index
    }

    /// Jumps to `index`; out-of-range requests leave the position untouched.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(DeskError::IndexOutOfRange {
                requested: index,
                length: self.len(),
            });
        }
        self.current_index = index;
        tracing::trace!("carousel goto -> {}", index);
        Ok(())
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.current_index
    }

    pub fn indicators(&self) -> Vec<Indicator> {
        (0..self.len())
            .map(|index| Indicator {
                index,
                active: self.is_active(index),
            })
            .collect()
    }
}
