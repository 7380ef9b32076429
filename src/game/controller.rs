use crate::domain::events::GameEvent;
use crate::domain::{Coordinate, Grade, PointId, PointSet};
use crate::game::{GameSession, GameState};
use crate::geo::distance_km;
use crate::position::PositionUnavailableError;
use crate::presentation::PresentationSink;
use crate::progress::ProgressError;
use crate::proximity::{DistanceTrend, ProximityOutcome, ProximityTrigger};
use crate::quiz::{QuizError, QuizState};
use crate::target_resolver::resolve;
use rand_chacha::ChaCha20Rng;
use std::fmt::Display;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Drives a game session from position samples and player input.
///
/// All mutation goes through the intake methods, one call at a time. Every call leaves the
/// controller in a well-defined [`GameState`] and reports what happened through the sink.
#[derive(Debug)]
pub struct GameController<S>
where
    S: PresentationSink,
{
    state: GameState,
    session: Option<GameSession>,
    trigger: ProximityTrigger,
    rng: ChaCha20Rng,
    sink: S,
}

impl<S> GameController<S>
where
    S: PresentationSink,
{
    pub fn new(trigger: ProximityTrigger, rng: ChaCha20Rng, sink: S) -> Self {
        GameController {
            state: GameState::Idle,
            session: None,
            trigger,
            rng,
            sink,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Drops the current session, if any, and waits for new point data.
    pub fn begin_loading(&mut self) {
        if let Some(session) = self.session.take() {
            info!(
                "🔄 Discarding session '{}' with {} of {} point(s) completed",
                session.points().name(),
                session.progress().completed_count(),
                session.progress().total()
            );
        }
        self.state = GameState::Loading;
    }

    pub fn finish_loading<E>(&mut self, result: Result<PointSet, E>)
    where
        E: Display,
    {
        if self.state != GameState::Loading {
            warn!(state = %self.state, "⚠️ Received point data without loading, replacing the session");
            self.session = None;
        }

        match result {
            Ok(points) => {
                let name = points.name().to_string();
                let total = points.len();
                self.session = Some(GameSession::new(points));
                self.state = GameState::Tracking;
                info!("🟢 Session '{}' started with {} point(s)", name, total);
                self.sink.emit(GameEvent::Loaded { name, total });
            }
            Err(err) => {
                self.state = GameState::Idle;
                warn!("⚠️ Loading points failed: {}", err);
                self.sink.emit(GameEvent::LoadFailed(err.to_string()));
            }
        }
    }

    /// Drops the session and waits for the point data to be loaded again.
    pub fn reload(&mut self) {
        self.begin_loading();
    }

    #[instrument(skip(self), fields(state = %self.state))]
    pub fn on_position_sample(&mut self, position: Coordinate) {
        match self.state {
            GameState::Idle | GameState::Loading => debug!("Ignoring position sample, no points loaded"),
            GameState::Tracking => {
                self.state = GameState::Targeting;
                self.track(position);
            }
            GameState::Targeting => self.track(position),
            GameState::Quizzing => self.follow_quiz_target(position),
            GameState::AllComplete => {
                if let Some(session) = self.session.as_mut() {
                    session.last_known_player_position = Some(position);
                }
            }
        }
    }

    pub fn on_position_unavailable(&mut self, error: &PositionUnavailableError) {
        warn!(state = %self.state, "📡 Position unavailable: {}", error);
        self.sink.emit(GameEvent::PositionUnavailable(error.to_string()));
    }

    /// Selects an answer of the open quiz. A rejected selection is also reported to the sink.
    pub fn on_answer_selected(&mut self, index: usize) -> Result<(), GameError> {
        let result = self.select_answer(index);
        self.report_rejection(result)
    }

    /// Grades the selected answer. A rejected submit is also reported to the sink.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn on_submit(&mut self) -> Result<Grade, GameError> {
        let result = self.submit_answer();
        self.report_rejection(result)
    }

    fn select_answer(&mut self, index: usize) -> Result<(), GameError> {
        let quiz = self
            .session
            .as_mut()
            .and_then(|session| session.active_quiz.as_mut())
            .ok_or(GameError::NoActiveQuiz)?;

        quiz.select(index)?;
        debug!("Selected answer {}", index);
        Ok(())
    }

    fn submit_answer(&mut self) -> Result<Grade, GameError> {
        let session = self.session.as_mut().ok_or(GameError::NoActiveQuiz)?;
        let quiz = session.active_quiz.as_mut().ok_or(GameError::NoActiveQuiz)?;

        let grade = quiz.submit()?;
        let point_id = quiz.point_id();
        self.sink.emit(GameEvent::QuizGraded(grade));

        match grade {
            Grade::Correct => {
                info!(point_id = %point_id, "✅ Correct answer");
                self.state = GameState::Targeting;
                self.complete_point(point_id)?;

                if let Some(position) = self.session.as_ref().and_then(GameSession::last_known_player_position) {
                    self.track(position);
                }
            }
            Grade::Incorrect => {
                info!(point_id = %point_id, "✖️ Incorrect answer, keeping the quiz for another attempt");
                self.state = GameState::Targeting;
            }
        }

        Ok(grade)
    }

    // Resolves the target for `position` and triggers its quiz. Points without questions are completed on
    // arrival, after which the next target is resolved from the same position.
    fn track(&mut self, position: Coordinate) {
        loop {
            let Some(session) = self.session.as_mut() else {
                return;
            };
            session.last_known_player_position = Some(position);

            let Some(resolution) = resolve(position, &session.points, &session.progress, session.current_target_id) else {
                session.current_target_id = None;
                session.last_measured_distance_km = None;
                if self.state != GameState::AllComplete {
                    self.state = GameState::AllComplete;
                    info!("🏆 All {} point(s) completed", session.progress.total());
                    self.sink.emit(GameEvent::AllComplete);
                }
                return;
            };
            let target_id = resolution.target_id;
            let distance_km = resolution.distance_km;

            if resolution.changed {
                session.current_target_id = Some(target_id);
                session.last_measured_distance_km = Some(distance_km);
                session.within_range = false;
                if session.active_quiz.as_ref().is_some_and(|quiz| quiz.point_id() != target_id) {
                    debug!("Dropping the dismissed quiz of a previous target");
                    session.active_quiz = None;
                }

                if let Some(target) = session.points.get(target_id) {
                    info!(target_id = %target_id, "🎯 New target '{}' at {:.3} km", target.title, distance_km);
                    self.sink.emit(GameEvent::TargetChanged {
                        point: target.clone(),
                        distance_km,
                    });
                }
            } else {
                let trend = DistanceTrend::between(distance_km, session.last_measured_distance_km);
                session.last_measured_distance_km = Some(distance_km);
                self.sink.emit(GameEvent::DistanceUpdated { distance_km, trend });
            }

            match self.trigger.evaluate(distance_km) {
                ProximityOutcome::NoAction => {
                    session.within_range = false;
                    return;
                }
                ProximityOutcome::Fired if session.within_range => return,
                ProximityOutcome::Fired => session.within_range = true,
            }

            if let Some(quiz) = session.active_quiz.as_ref() {
                info!(target_id = %target_id, "❓ Back at the target, showing the quiz again");
                self.state = GameState::Quizzing;
                self.sink.emit(GameEvent::QuizOpened(quiz.clone()));
                return;
            }

            let Some(target) = session.points.get(target_id) else {
                return;
            };
            match QuizState::begin(target, &mut self.rng) {
                Some(quiz) => {
                    info!(target_id = %target_id, "❓ Reached '{}', opening quiz", target.title);
                    session.active_quiz = Some(quiz.clone());
                    self.state = GameState::Quizzing;
                    self.sink.emit(GameEvent::QuizOpened(quiz));
                    return;
                }
                None => {
                    info!(target_id = %target_id, "Reached '{}', it has no questions", target.title);
                    if let Err(err) = self.complete_point(target_id) {
                        warn!("⚠️ Could not complete point {}: {}", target_id, err);
                        return;
                    }
                }
            }
        }
    }

    // Positions are recorded while a quiz is open, but the target stays fixed
    fn follow_quiz_target(&mut self, position: Coordinate) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.last_known_player_position = Some(position);

        let Some(quiz_point) = session.active_quiz.as_ref().and_then(|quiz| session.points.get(quiz.point_id())) else {
            return;
        };

        let distance_km = distance_km(position, quiz_point.coordinate);
        let trend = DistanceTrend::between(distance_km, session.last_measured_distance_km);
        session.last_measured_distance_km = Some(distance_km);
        session.within_range = self.trigger.evaluate(distance_km) == ProximityOutcome::Fired;
        self.sink.emit(GameEvent::DistanceUpdated { distance_km, trend });
    }

    fn report_rejection<T>(&mut self, result: Result<T, GameError>) -> Result<T, GameError> {
        if let Err(err) = &result {
            debug!(state = %self.state, "Rejected player input: {}", err);
            self.sink.emit(GameEvent::InputRejected(err.to_string()));
        }
        result
    }

    fn complete_point(&mut self, id: PointId) -> Result<(), ProgressError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        if session.complete(id)? {
            let completed = session.progress.completed_count();
            let remaining = session.progress.remaining_count();
            info!(point_id = %id, "🏁 Point completed, {} done, {} remaining", completed, remaining);
            self.sink.emit(GameEvent::PointCompleted { id, completed, remaining });
        }
        Ok(())
    }
}

#[derive(Error, PartialEq, Debug)]
pub enum GameError {
    #[error("there is no quiz to answer")]
    NoActiveQuiz,
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
}
