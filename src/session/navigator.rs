//! Bounded bidirectional cursor over an ordered collection
//!
//! Used for keyboard page navigation and for sequencing the menu view out of
//! the page list once play starts. Stepping saturates at the ends; there is
//! no wraparound.

/// Ordered items with a movable cursor
#[derive(Debug, Clone)]
pub struct Navigator<T> {
    items: Vec<T>,
    cursor: usize,
}

impl<T: PartialEq> Navigator<T> {
    /// A navigator over `items`, cursor at the first element
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self { items, cursor: 0 }
    }

    /// Append an item at the end
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove the first item equal to `item`
    ///
    /// Removing the element under the cursor leaves the cursor on the next
    /// element, or the previous one when no next element exists. Returns
    /// `false` when the item is not present.
    pub fn remove(&mut self, item: &T) -> bool {
        let Some(index) = self.items.iter().position(|i| i == item) else {
            return false;
        };
        self.items.remove(index);

        if index < self.cursor || self.cursor >= self.items.len() {
            self.cursor = self.cursor.saturating_sub(1);
        }
        true
    }

    /// The item under the cursor, if any
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.cursor)
    }

    /// True iff a step backwards is possible
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.cursor > 0 && !self.items.is_empty()
    }

    /// True iff a step forwards is possible
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.items.len()
    }

    /// Step backwards one position, saturating at the first element
    pub fn previous(&mut self) -> Option<&T> {
        if self.has_previous() {
            self.cursor -= 1;
        }
        self.current()
    }

    /// Step forwards one position, saturating at the last element
    pub fn next(&mut self) -> Option<&T> {
        if self.has_next() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True iff there are no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
