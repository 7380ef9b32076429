use crate::domain::commands::PlayerCommand;
use crate::domain::events::GameEvent;
use crate::game::{GameController, GameState};
use crate::point_loader::load_point_set_from;
use crate::position::LatestSample;
use crate::presentation::PresentationSink;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc::Receiver;
use tokio::sync::watch::Receiver as WatchReceiver;
use tokio::time::{Instant, sleep};
use tracing::{debug, info, instrument};

/// Owns the game controller and feeds it one event at a time.
#[derive(Debug)]
pub struct GameRunner<S>
where
    S: PresentationSink,
{
    controller: GameController<S>,
    positions: WatchReceiver<LatestSample>,
    commands: Receiver<PlayerCommand>,
    points_file: PathBuf,
    idle_notice: Duration,
}

impl<S> GameRunner<S>
where
    S: PresentationSink,
{
    pub fn new(
        controller: GameController<S>,
        positions: WatchReceiver<LatestSample>,
        commands: Receiver<PlayerCommand>,
        points_file: PathBuf,
        idle_notice: Duration,
    ) -> Self {
        GameRunner {
            controller,
            positions,
            commands,
            points_file,
            idle_notice,
        }
    }

    /// Loads the points and processes events until the player quits or the command channel closes.
    ///
    /// Returns the controller so the final state can be inspected. Dropping the position receiver on return
    /// unsubscribes from the position feed.
    #[instrument(skip_all, fields(points_file = %self.points_file.display()))]
    pub async fn run(mut self) -> GameController<S> {
        self.load().await;

        // Only a position sample restarts the idle timer
        let idle = sleep(self.idle_notice);
        tokio::pin!(idle);

        let mut feed_open = true;
        loop {
            tokio::select! {
                biased;

                changed = self.positions.changed(), if feed_open => match changed {
                    Ok(()) => {
                        self.apply_latest_sample();
                        idle.as_mut().reset(Instant::now() + self.idle_notice);
                    }
                    Err(_) => {
                        info!("📡 Position feed closed");
                        feed_open = false;
                    }
                },
                () = &mut idle => {
                    self.controller.sink_mut().emit(GameEvent::PositionOverdue { waited: self.idle_notice });
                    idle.as_mut().reset(Instant::now() + self.idle_notice);
                },
                command = self.commands.recv() => match command {
                    Some(PlayerCommand::Quit) | None => break,
                    Some(command) => self.handle_command(command).await,
                },
            }
        }

        info!(state = %self.controller.state(), "👋 Stopping game");
        self.controller
    }

    async fn load(&mut self) {
        self.controller.begin_loading();
        let result = load_point_set_from(&self.points_file).await;
        self.controller.finish_loading(result);

        // The feed does not repeat a sample the loop has already seen
        if self.controller.state() == GameState::Tracking {
            self.apply_latest_sample();
        }
    }

    fn apply_latest_sample(&mut self) {
        // Intermediate samples that arrived while the previous one was processed are skipped
        let sample = self.positions.borrow_and_update().clone();
        match sample {
            Some(Ok(position)) => self.controller.on_position_sample(position),
            Some(Err(error)) => self.controller.on_position_unavailable(&error),
            None => debug!("Position feed has no sample yet"),
        }
    }

    async fn handle_command(&mut self, command: PlayerCommand) {
        debug!(command = ?command, "Received player command");
        match command {
            PlayerCommand::Select(index) => {
                if let Err(err) = self.controller.on_answer_selected(index) {
                    debug!("Selecting answer {} failed: {}", index + 1, err);
                }
            }
            PlayerCommand::Submit => {
                if let Err(err) = self.controller.on_submit() {
                    debug!("Submitting failed: {}", err);
                }
            }
            PlayerCommand::Reload => {
                info!("🔄 Reloading points...");
                self.load().await;
            }
            PlayerCommand::Quit => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::domain::{Coordinate, PointId};
    use crate::fixtures::north_of;
    use crate::position::PositionUnavailableError;
    use crate::proximity::ProximityTrigger;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use test_log::test;
    use tokio::sync::{mpsc, watch};

    const CHURCH: Coordinate = Coordinate::new(38.7895, 0.1667);

    fn create_runner(
        points_file: PathBuf,
        idle_notice: Duration,
    ) -> (GameRunner<Vec<GameEvent>>, watch::Sender<LatestSample>, mpsc::Sender<PlayerCommand>) {
        let controller = GameController::new(ProximityTrigger::default(), ChaCha20Rng::seed_from_u64(1), Vec::new());
        let (position_tx, position_rx) = watch::channel::<LatestSample>(None);
        let (command_tx, command_rx) = mpsc::channel(8);
        let runner = GameRunner::new(controller, position_rx, command_rx, points_file, idle_notice);
        (runner, position_tx, command_tx)
    }

    fn default_runner() -> (GameRunner<Vec<GameEvent>>, watch::Sender<LatestSample>, mpsc::Sender<PlayerCommand>) {
        let config = AppConfigBuilder::new().build();
        create_runner(config.game().points_file().to_path_buf(), config.feed().idle_notice())
    }

    #[test(tokio::test)]
    async fn stops_when_the_player_quits() {
        let (runner, _position_tx, command_tx) = default_runner();
        command_tx.send(PlayerCommand::Quit).await.unwrap();

        let controller = runner.run().await;

        assert_eq!(controller.state(), GameState::Tracking);
        assert!(matches!(controller.sink()[0], GameEvent::Loaded { total: 3, .. }));
    }

    #[test(tokio::test)]
    async fn opens_the_quiz_when_a_sample_arrives_close_to_a_point() {
        let (runner, position_tx, command_tx) = default_runner();
        position_tx.send(Some(Ok(north_of(CHURCH, 20.0)))).unwrap();
        command_tx.send(PlayerCommand::Submit).await.unwrap();
        command_tx.send(PlayerCommand::Quit).await.unwrap();

        let controller = runner.run().await;

        assert_eq!(controller.state(), GameState::Quizzing);
        assert_eq!(controller.session().and_then(|s| s.current_target_id()), Some(PointId(0)));
        assert!(controller.sink().iter().any(|e| matches!(e, GameEvent::QuizOpened(_))));
        assert!(!controller.sink().iter().any(|e| matches!(e, GameEvent::QuizGraded(_))));
    }

    #[test(tokio::test)]
    async fn reports_an_unavailable_position() {
        let (runner, position_tx, command_tx) = default_runner();
        position_tx.send(Some(Err(PositionUnavailableError::new("no fix")))).unwrap();
        command_tx.send(PlayerCommand::Quit).await.unwrap();

        let controller = runner.run().await;

        assert_eq!(controller.state(), GameState::Tracking);
        assert_eq!(controller.sink().last(), Some(&GameEvent::PositionUnavailable("no fix".to_string())));
    }

    fn events_after_last_load(controller: &GameController<Vec<GameEvent>>) -> Vec<GameEvent> {
        let events = controller.sink();
        let last_load = events.iter().rposition(|e| matches!(e, GameEvent::Loaded { .. })).unwrap();
        events[last_load + 1..].to_vec()
    }

    #[test(tokio::test)]
    async fn reload_resets_the_session_and_targets_the_known_position() {
        let (runner, position_tx, command_tx) = default_runner();
        position_tx.send(Some(Ok(north_of(CHURCH, 500.0)))).unwrap();
        command_tx.send(PlayerCommand::Reload).await.unwrap();
        command_tx.send(PlayerCommand::Quit).await.unwrap();

        let controller = runner.run().await;

        assert_eq!(controller.state(), GameState::Targeting);
        let loads = controller.sink().iter().filter(|e| matches!(e, GameEvent::Loaded { .. })).count();
        assert_eq!(loads, 2);
        let events = events_after_last_load(&controller);
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], GameEvent::TargetChanged { point, .. } if point.id == PointId(2)));
    }

    #[test(tokio::test)]
    async fn reload_targets_the_known_position_after_the_feed_closed() {
        let (runner, position_tx, command_tx) = default_runner();
        position_tx.send(Some(Ok(north_of(CHURCH, 500.0)))).unwrap();
        drop(position_tx);

        let handle = tokio::spawn(runner.run());
        tokio::time::sleep(Duration::from_millis(20)).await;
        command_tx.send(PlayerCommand::Reload).await.unwrap();
        command_tx.send(PlayerCommand::Quit).await.unwrap();

        let controller = handle.await.unwrap();

        assert_eq!(controller.state(), GameState::Targeting);
        assert_eq!(controller.session().and_then(|s| s.current_target_id()), Some(PointId(2)));
        assert!(matches!(
            events_after_last_load(&controller).first(),
            Some(GameEvent::TargetChanged { .. })
        ));
    }

    #[test(tokio::test)]
    async fn reports_rejected_input_to_the_sink() {
        let (runner, _position_tx, command_tx) = default_runner();
        command_tx.send(PlayerCommand::Submit).await.unwrap();
        command_tx.send(PlayerCommand::Quit).await.unwrap();

        let controller = runner.run().await;

        assert_eq!(
            controller.sink().last(),
            Some(&GameEvent::InputRejected("there is no quiz to answer".to_string()))
        );
    }

    #[test(tokio::test)]
    async fn reports_a_missing_point_file() {
        let (runner, _position_tx, command_tx) = create_runner(PathBuf::from("does/not/exist.json"), Duration::from_secs(30));
        command_tx.send(PlayerCommand::Quit).await.unwrap();

        let controller = runner.run().await;

        assert_eq!(controller.state(), GameState::Idle);
        assert!(matches!(controller.sink()[0], GameEvent::LoadFailed(_)));
    }

    #[test(tokio::test)]
    async fn keeps_waiting_through_gaps_in_the_feed() {
        let config = AppConfigBuilder::new().idle_notice(Duration::from_millis(5)).build();
        let (runner, position_tx, command_tx) = create_runner(config.game().points_file().to_path_buf(), config.feed().idle_notice());

        let handle = tokio::spawn(runner.run());
        tokio::time::sleep(Duration::from_millis(50)).await;
        position_tx.send(Some(Ok(north_of(CHURCH, 500.0)))).unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;
        drop(position_tx);
        tokio::time::sleep(Duration::from_millis(30)).await;
        drop(command_tx);

        let controller = handle.await.unwrap();

        assert_eq!(controller.state(), GameState::Targeting);
        let events = controller.sink();
        let target = events.iter().position(|e| matches!(e, GameEvent::TargetChanged { .. })).unwrap();
        assert!(events[..target].iter().any(|e| matches!(e, GameEvent::PositionOverdue { .. })));
        assert!(events[target..].iter().any(|e| matches!(e, GameEvent::PositionOverdue { .. })));
    }

    #[test(tokio::test(start_paused = true))]
    async fn player_commands_do_not_postpone_the_idle_notice() {
        let (runner, _position_tx, command_tx) = create_runner(
            AppConfigBuilder::new().build().game().points_file().to_path_buf(),
            Duration::from_secs(10),
        );

        let handle = tokio::spawn(runner.run());
        for _ in 0..4 {
            tokio::time::sleep(Duration::from_secs(4)).await;
            command_tx.send(PlayerCommand::Select(0)).await.unwrap();
        }
        command_tx.send(PlayerCommand::Quit).await.unwrap();

        let controller = handle.await.unwrap();

        let notices = controller.sink().iter().filter(|e| matches!(e, GameEvent::PositionOverdue { .. })).count();
        assert_eq!(notices, 1);
    }
}
