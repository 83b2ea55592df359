//! Deterministic color assignment for note cards.
//!
//! Cards are painted from a fixed nine-pair palette, handed out in call
//! order by a cyclic counter. Colors are a property of the card, not of the
//! note: reloading the page or re-rendering the board reshuffles them.

/// A `(background, foreground)` CSS color pair.
pub type ColorPair = (&'static str, &'static str);

pub const PALETTE: [ColorPair; 9] = [
    ("#45938B", "#000000"),
    ("#77CCBB", "#000000"),
    ("#A8F7ED", "#000000"),
    ("#BBBBBB", "#000000"),
    ("#EEEEEE", "#000000"),
    ("#EEAA66", "#000000"),
    ("#BB7733", "#000000"),
    ("#FF0000", "#000000"),
    ("#FFFF00", "#000000"),
];

/// Cyclic allocator over [`PALETTE`]. Each board owns its own wheel, so two
/// boards (or two tests) never interleave their color sequences.
#[derive(Debug, Default)]
pub struct ColorWheel {
    counter: usize,
}

impl ColorWheel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pair for the current counter value, then advances.
    pub fn next_pair(&mut self) -> ColorPair {
        let pair = PALETTE[self.counter % PALETTE.len()];
        self.counter += 1;
        pair
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nth_allocation_is_palette_of_n_mod_nine() {
        let mut wheel = ColorWheel::new();
        for n in 0..30 {
            assert_eq!(wheel.next_pair(), PALETTE[n % PALETTE.len()], "allocation {n}");
        }
    }

    #[test]
    fn wheels_do_not_share_state() {
        let mut first = ColorWheel::new();
        first.next_pair();
        first.next_pair();

        let mut second = ColorWheel::new();
        assert_eq!(second.next_pair(), PALETTE[0]);
        assert_eq!(first.next_pair(), PALETTE[2]);
    }
}
