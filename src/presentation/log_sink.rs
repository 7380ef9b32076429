use crate::domain::Grade;
use crate::domain::events::GameEvent;
use crate::presentation::PresentationSink;
use tracing::{info, warn};

/// Renders game events as log lines, for playing from a terminal.
#[derive(Debug, Default)]
pub struct LogSink;

impl PresentationSink for LogSink {
    fn emit(&mut self, event: GameEvent) {
        match event {
            GameEvent::Loaded { name, total } if total == 0 => warn!("🗺️ Loaded '{}', it contains no points", name),
            GameEvent::Loaded { name, total } => info!("🗺️ Loaded '{}' with {} point(s), looking for your location...", name, total),
            GameEvent::LoadFailed(reason) => warn!("❌ Could not load the points: {}", reason),
            GameEvent::TargetChanged { point, distance_km } => {
                info!(target_id = %point.id, "🎯 Next target '{}' at {} meters", point.title, to_meters(distance_km))
            }
            GameEvent::DistanceUpdated { distance_km, trend } => info!("📍 {} meters, {}", to_meters(distance_km), trend),
            GameEvent::QuizOpened(quiz) => {
                info!("❓ {}", quiz.question().prompt);
                for (number, answer) in quiz.shuffled_answers().iter().enumerate() {
                    info!("   {}. {}", number + 1, answer.text);
                }
                info!("   Answer with 'select <n>' followed by 'submit'");
            }
            GameEvent::QuizGraded(Grade::Correct) => info!("✅ Correct answer!"),
            GameEvent::QuizGraded(Grade::Incorrect) => info!("✖️ Wrong answer, try again"),
            GameEvent::PointCompleted { id, completed, remaining } => {
                info!(point_id = %id, "🏁 Point completed, {} done, {} to go", completed, remaining)
            }
            GameEvent::AllComplete => info!("🏆 You have completed all points!"),
            GameEvent::PositionUnavailable(reason) => warn!("📡 Location unavailable: {}", reason),
            GameEvent::PositionOverdue { waited } => info!("⏳ No position for {} seconds, still waiting...", waited.as_secs()),
            GameEvent::InputRejected(reason) => warn!("⚠️ {}", reason),
        }
    }
}

fn to_meters(distance_km: f64) -> i64 {
    (distance_km * 1000.0).round() as i64
}
