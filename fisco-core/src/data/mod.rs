//! Static reference tables.
//!
//! Loaded once on first access and immutable for the process lifetime;
//! safe to share across concurrent calculations without locking. Table
//! ordering is significant: lookups are first-match-wins.

pub mod funds;
pub mod territorial;
