use crate::domain::commands::PlayerCommand;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::Sender;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;
use tracing::{info, instrument, warn};

/// Forwards player commands read line by line from `input` until it ends, the player quits or the game stops.
#[instrument(skip_all)]
pub async fn read_commands<R>(input: R, tx: Sender<PlayerCommand>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = LinesStream::new(input.lines());

    while let Some(line) = lines.next().await {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("⚠️ Could not read input: {}", err);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<PlayerCommand>() {
            Ok(command) => {
                if tx.send(command).await.is_err() {
                    return;
                }
                if command == PlayerCommand::Quit {
                    return;
                }
            }
            Err(err) => warn!("⚠️ {}", err),
        }
    }

    info!("⌨️ Input closed, quitting");
    tx.send(PlayerCommand::Quit).await.unwrap_or_default();
}
