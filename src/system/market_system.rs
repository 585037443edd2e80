use tracing::{error, info};

use crate::clients::{CatalogClient, PurchaseClient, UserClient};
use crate::stores::{CatalogStore, PurchaseLedger, UserStore};

/// The main application system that orchestrates all store actors.
///
/// Responsible for starting the actors, wiring them together, and handling
/// shutdown.
pub struct MarketSystem {
    pub user_client: UserClient,
    pub catalog_client: CatalogClient,
    pub purchase_client: PurchaseClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for MarketSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketSystem {
    /// Create and start the entire actor system.
    ///
    /// Leaf stores start first; the purchase ledger starts last with the
    /// other stores' clients injected.
    pub fn new() -> Self {
        let mut handles = Vec::new();

        info!("Starting market system");

        let (user_store, user_client) = UserStore::new(32);
        handles.push(tokio::spawn(user_store.run()));

        let (catalog_store, catalog_client) = CatalogStore::new(32);
        handles.push(tokio::spawn(catalog_store.run()));

        let (purchase_ledger, purchase_client) =
            PurchaseLedger::new(32, user_client.clone(), catalog_client.clone());
        handles.push(tokio::spawn(purchase_ledger.run()));

        info!("Market system started");

        Self {
            user_client,
            catalog_client,
            purchase_client,
            handles,
        }
    }

    /// Gracefully shut down the actor system.
    ///
    /// The ledger goes first since it depends on the other two stores; errors
    /// are logged but shutdown continues so it cannot hang.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down market system");

        let _ = self.purchase_client.shutdown().await;
        let _ = self.user_client.shutdown().await;
        let _ = self.catalog_client.shutdown().await;

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Store task failed during shutdown");
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("Market system shutdown complete");
        Ok(())
    }
}
