//! Balón de Oro voting.
//!
//! Each voter gets one ballot per year. Casting again replaces the earlier
//! ballot; only the last one counts.

pub mod tally;

pub use tally::{load_votes, parse_votes, tally_votes, winner, Vote, VoteTally};
