//! Index arithmetic for the achievements carousel.

use std::time::Duration;

/// Autoplay advances one card per interval.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(4000);

/// Where a card sits relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPosition {
    Center,
    Left,
    Right,
    Hidden,
}

/// A wrapping carousel over `len` cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    /// Creates a carousel showing the first card.
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the centered card.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Advances one card, wrapping to the first.
    pub fn next(&mut self) -> usize {
        if !self.is_empty() {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    /// Goes back one card, wrapping to the last.
    pub fn prev(&mut self) -> usize {
        if !self.is_empty() {
            self.current = if self.current == 0 {
                self.len - 1
            } else {
                self.current - 1
            };
        }
        self.current
    }

    /// Jumps to `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> usize {
        if index < self.len {
            self.current = index;
        }
        self.current
    }

    /// Position of the card at `index`. Neighbours wrap around the ends.
    pub fn position_of(&self, index: usize) -> CardPosition {
        if index >= self.len {
            return CardPosition::Hidden;
        }
        if index == self.current {
            return CardPosition::Center;
        }
        if index == (self.current + 1) % self.len {
            return CardPosition::Right;
        }
        if index == (self.current + self.len - 1) % self.len {
            return CardPosition::Left;
        }
        CardPosition::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_wrap() {
        let mut carousel = Carousel::new(4);
        assert_eq!(carousel.prev(), 3);
        assert_eq!(carousel.next(), 0);
        carousel.go_to(3);
        assert_eq!(carousel.next(), 0);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut carousel = Carousel::new(4);
        assert_eq!(carousel.go_to(2), 2);
        assert_eq!(carousel.go_to(9), 2);
    }

    #[test]
    fn positions_around_current() {
        let carousel = Carousel::new(4);
        assert_eq!(carousel.position_of(0), CardPosition::Center);
        assert_eq!(carousel.position_of(1), CardPosition::Right);
        assert_eq!(carousel.position_of(2), CardPosition::Hidden);
        assert_eq!(carousel.position_of(3), CardPosition::Left);
    }

    #[test]
    fn two_cards_prefer_right() {
        let carousel = Carousel::new(2);
        assert_eq!(carousel.position_of(1), CardPosition::Right);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
        assert_eq!(carousel.position_of(0), CardPosition::Hidden);
    }
}
