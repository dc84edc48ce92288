//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use runtime::GameService;

/// Builder for constructing a Client with proper validation.
///
/// Both the service and the frontend are required; `build()` fails fast when
/// either is missing.
#[derive(Default)]
pub struct ClientBuilder {
    service: Option<GameService>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the game service (required).
    ///
    /// It should be constructed and rehydrated via `ServiceBuilder` from the
    /// `client-bootstrap` crate.
    pub fn service(mut self, service: GameService) -> Self {
        self.service = Some(service);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    pub fn build(self) -> Result<Client> {
        let service = self
            .service
            .context("Game service is required. Use .service() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { service, frontend })
    }
}
