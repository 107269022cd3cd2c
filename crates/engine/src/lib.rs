//! EcoImpact computation core
//!
//! Pure scoring, tier and forecast functions, plus the stateful ledger and
//! group-buy coordination built on the store crate.

pub mod forecast;
pub mod groupbuy;
pub mod handler;
pub mod ledger;
pub mod rewards;
pub mod score;
pub mod tiers;

pub use groupbuy::GroupBuyCoordinator;
pub use handler::OrderEventHandler;
pub use ledger::ImpactLedger;

#[cfg(test)]
mod ledger_test;
#[cfg(test)]
mod rewards_test;
#[cfg(test)]
mod score_test;
#[cfg(test)]
mod tiers_test;
