//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::GameService;

/// Frontend abstraction for UI layers.
///
/// A frontend takes ownership of the [`GameService`] for the lifetime of the
/// UI and drives it only through its public operations (`submit_guess_by_name`,
/// `start_new_game`, `suggest`); it holds no game logic of its own.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    async fn run(&mut self, service: GameService) -> Result<()>;
}
