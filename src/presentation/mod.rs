mod log_sink;

use crate::domain::events::GameEvent;

pub use log_sink::LogSink;

/// Receives the events the game emits, for rendering.
pub trait PresentationSink: Send {
    fn emit(&mut self, event: GameEvent);
}

impl PresentationSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}
