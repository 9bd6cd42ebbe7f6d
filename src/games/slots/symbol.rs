//! Reel symbols and their payouts.

use serde::{Deserialize, Serialize};

/// A symbol on a slot reel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Cherry,
    Watermelon,
    Lemon,
    Bell,
    Star,
}

impl Symbol {
    /// Every symbol, in reel order. Config weights follow this order.
    pub const ALL: [Symbol; 5] = [
        Symbol::Cherry,
        Symbol::Watermelon,
        Symbol::Lemon,
        Symbol::Bell,
        Symbol::Star,
    ];

    /// Largest multiplier on any symbol.
    pub const MAX_MULTIPLIER: u64 = 20;

    /// Bet multiplier for three of a kind.
    #[must_use]
    pub const fn multiplier(self) -> u64 {
        match self {
            Symbol::Cherry => 3,
            Symbol::Watermelon => 4,
            Symbol::Lemon => 5,
            Symbol::Bell => 10,
            Symbol::Star => 20,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Symbol::Cherry => "🍒",
            Symbol::Watermelon => "🍉",
            Symbol::Lemon => "🍋",
            Symbol::Bell => "🔔",
            Symbol::Star => "⭐",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.emoji())
    }
}
