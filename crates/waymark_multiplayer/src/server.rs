//! Line-oriented TCP transport.
//!
//! One task per connection reads lines and takes the coordinator lock for
//! each; a second task per connection drains the session's outbox to the
//! socket, so nothing waits on a slow client while the lock is held.

use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::{Mutex, mpsc};
use tracing::{info, warn};
use waymark_foundation::Result;

use crate::config::ServerConfig;
use crate::coordinator::BroadcastCoordinator;
use crate::line::LineReader;
use crate::session::{Outbox, SessionId};

/// The coordinator as shared between connections.
pub type SharedCoordinator = Arc<Mutex<BroadcastCoordinator>>;

/// Accepts connections forever.
///
/// # Errors
///
/// Returns an error if accepting fails. Errors on a single connection are
/// logged and do not stop the server.
pub async fn serve(
    listener: TcpListener,
    coordinator: SharedCoordinator,
    config: Arc<ServerConfig>,
) -> Result<()> {
    info!(bind = ?listener.local_addr().ok(), "waymark listening");

    loop {
        let (stream, peer) = listener.accept().await?;
        let coordinator = coordinator.clone();
        let config = config.clone();
        tokio::spawn(async move {
            info!(%peer, "connected");
            match handle_connection(stream, coordinator, config).await {
                Ok(()) => info!(%peer, "disconnected"),
                Err(err) => warn!(%peer, error = %err, "connection ended with error"),
            }
        });
    }
}

/// Runs one client over any byte stream.
///
/// Greets, reads the display name, joins, then feeds every line to the
/// coordinator until the client quits or goes away.
///
/// # Errors
///
/// Returns an error on a read failure, an overlong line, or when joining
/// fails. The session is removed in every case.
pub async fn handle_connection<S>(
    stream: S,
    coordinator: SharedCoordinator,
    config: Arc<ServerConfig>,
) -> Result<()>
where
    S: AsyncRead + AsyncWrite + Send + 'static,
{
    let (rd, mut wr) = tokio::io::split(stream);
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    let writer = tokio::spawn(async move {
        while let Some(text) = rx.recv().await {
            if wr.write_all(text.as_bytes()).await.is_err() || wr.write_all(b"\r\n").await.is_err()
            {
                break;
            }
        }
        let _ = wr.shutdown().await;
    });

    let mut lines = LineReader::new(rd).max_line_len(config.max_line_len);
    let result = run_session(&mut lines, &coordinator, &config, tx).await;

    // The roster's copy of the sender is gone once the session is removed,
    // so the writer drains what is queued and stops.
    let _ = writer.await;
    result
}

async fn run_session<R>(
    lines: &mut LineReader<R>,
    coordinator: &SharedCoordinator,
    config: &ServerConfig,
    tx: Outbox,
) -> Result<()>
where
    R: AsyncRead + Unpin,
{
    let _ = tx.send(config.greeting.clone());

    let name = loop {
        match lines.read_text().await? {
            None => return Ok(()),
            Some(line) if line.trim().is_empty() => {}
            Some(line) => break line.trim().to_string(),
        }
    };

    let (session, description) = coordinator
        .lock()
        .await
        .join(&name, &config.start_room, tx.clone())?;
    let _ = tx.send(description);

    match command_loop(lines, coordinator, config, session, &tx).await {
        Ok(true) => Ok(()),
        Ok(false) => coordinator.lock().await.leave(session),
        Err(err) => {
            let _ = coordinator.lock().await.leave(session);
            Err(err)
        }
    }
}

/// Returns `Ok(true)` if the session ended itself by quitting.
async fn command_loop<R>(
    lines: &mut LineReader<R>,
    coordinator: &SharedCoordinator,
    config: &ServerConfig,
    session: SessionId,
    tx: &Outbox,
) -> Result<bool>
where
    R: AsyncRead + Unpin,
{
    while let Some(line) = lines.read_text().await? {
        let outcome = coordinator.lock().await.handle_line(session, &line)?;
        let _ = tx.send(outcome.reply);
        if outcome.close {
            if !config.farewell.is_empty() {
                let _ = tx.send(config.farewell.clone());
            }
            return Ok(true);
        }
    }
    Ok(false)
}
