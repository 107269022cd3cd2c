//! API routes

pub mod groupbuys;
pub mod groups;
pub mod health;
pub mod impact;
pub mod leaderboard;
pub mod orders;
pub mod products;
