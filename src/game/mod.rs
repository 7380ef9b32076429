mod controller;
mod session;
mod state;

pub use controller::{GameController, GameError};
pub use session::GameSession;
pub use state::GameState;
