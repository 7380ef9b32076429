use geoquiz::app_config::AppConfig;
use geoquiz::console::read_commands;
use geoquiz::domain::commands::PlayerCommand;
use geoquiz::game::GameController;
use geoquiz::position::{LatestSample, TrackReplay, pump};
use geoquiz::presentation::LogSink;
use geoquiz::proximity::ProximityTrigger;
use geoquiz::runner::GameRunner;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tokio::io::{BufReader, stdin};
use tokio::sync::{mpsc, watch};
use tokio::task;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let rng = match config.game().shuffle_seed() {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };
    let trigger = ProximityTrigger::new(config.game().proximity_threshold_km());
    info!("🎯 Quizzes open within {} km of a point", trigger.threshold_km());
    let controller = GameController::new(trigger, rng, LogSink);

    let track = TrackReplay::load(config.feed().track_file()).await?;
    let (position_tx, position_rx) = watch::channel::<LatestSample>(None);
    task::spawn(async move {
        pump(track, position_tx).await;
    });
    info!("✅  Initialized position feed");

    let (command_tx, command_rx) = mpsc::channel::<PlayerCommand>(config.core().command_buffer_size());
    task::spawn(async move {
        read_commands(BufReader::new(stdin()), command_tx).await;
    });
    info!("✅  Initialized console input");

    let runner = GameRunner::new(
        controller,
        position_rx,
        command_rx,
        config.game().points_file().to_path_buf(),
        config.feed().idle_notice(),
    );

    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));
    let controller = runner.run().await;

    if let Some(session) = controller.session() {
        if session.progress().all_complete() {
            info!("🏆 Finished '{}'", session.points().name());
        }
        info!(
            "📊 Completed {} of {} point(s)",
            session.progress().completed_count(),
            session.progress().total()
        );
    }

    Ok(())
}
