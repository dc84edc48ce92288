//! Top-level client pairing the game service with a frontend.
//!
//! ```text
//! Client
//!   ├─→ GameService (rules, data source, persistence)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! Both halves are built independently and injected through
//! [`ClientBuilder`]; the client only hands one to the other and reports how
//! the session ended.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use runtime::GameService;

/// Top-level client container.
pub struct Client {
    service: GameService,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Transfers the service to the frontend and waits until the player quits.
    pub async fn run(self) -> Result<()> {
        let Client {
            service,
            mut frontend,
        } = self;

        tracing::info!(
            "Handing session to frontend: attempts={}, best={:?}",
            service.session().attempts(),
            service.session().best()
        );

        let result = frontend.run(service).await;
        if let Err(e) = &result {
            tracing::error!("Frontend error: {:#}", e);
        }
        result
    }
}
