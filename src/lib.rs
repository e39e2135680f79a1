//! A standard 52-card deck engine with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type with positional insert and deal
//! operations, shuffling, and a JSON interchange format, plus a pluggable
//! [`Ranking`] strategy for comparing two cards under ace-high or ace-low
//! rules.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, PipOnlyRanking, Ranking};
//!
//! let mut deck = Deck::full();
//! deck.shuffle_seeded(42);
//!
//! if let (Ok(first), Ok(second)) = (deck.deal(), deck.deal()) {
//!     let ranking = PipOnlyRanking::default();
//!     let _winner = ranking.winner(&first, &second);
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod codec;
pub mod deck;
pub mod error;
pub mod ranking;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, PIPS, Suit};
pub use deck::Deck;
pub use error::{CodecError, DeckError, UnknownSuitError};
pub use ranking::{PipOnlyRanking, Ranking};
