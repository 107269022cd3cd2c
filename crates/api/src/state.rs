//! Application state

use std::sync::Arc;

use common::models::FulfillmentEvent;
use common::Config;
use engine::{GroupBuyCoordinator, ImpactLedger, OrderEventHandler};
use store::{CampaignStore, GroupStore, LedgerStore, LockBounds, ProductStore};
use tokio::sync::mpsc;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub products: Arc<ProductStore>,
    pub groups: Arc<GroupStore>,
    pub ledger: ImpactLedger,
    pub coordinator: GroupBuyCoordinator,
    pub handler: OrderEventHandler,
}

impl AppState {
    /// Build the state plus the receiver the fulfillment consumer drains.
    pub fn new(config: Config) -> (Self, mpsc::UnboundedReceiver<FulfillmentEvent>) {
        let bounds = LockBounds::new(config.lock_wait_ms, config.lock_retries);
        let ledgers = Arc::new(LedgerStore::new(bounds));
        let campaigns = Arc::new(CampaignStore::new(bounds));
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let ledger = ImpactLedger::new(ledgers);
        let state = Self {
            config,
            products: Arc::new(ProductStore::new()),
            groups: Arc::new(GroupStore::new()),
            coordinator: GroupBuyCoordinator::new(campaigns, events_tx),
            handler: OrderEventHandler::new(ledger.clone()),
            ledger,
        };
        (state, events_rx)
    }
}
