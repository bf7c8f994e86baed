//! # Site Client
//!
//! The visitor-side behavior of the voting site, usable from Rust.
//!
//! ## Listing
//! - Dropdowns for type, sub, special and sort
//! - Any change navigates to a new listing URL, see [`filter`]
//!
//! ## Ranking
//! - Rows arrive 100 at a time, see [`ranking`]
//! - Top three get medals
//!
//! ## Voting
//! - 10 votes per day, counted locally, see [`vote`]
//! - Every vote needs the listing page's CSRF token
//! - A failed request surfaces one error and is not retried
pub mod error;
pub mod filter;
pub mod ranking;
pub mod vote;

pub use error::ClientError;
pub use filter::FilterSelection;
pub use ranking::{Page, RankedEntry, RankingPager};
pub use vote::{VoteClient, VoteLedger, VoteOutcome};
