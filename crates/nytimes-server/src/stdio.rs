use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinSet};

use nytimes_mcp::JsonRpcResponse;

use crate::app_state::AppState;
use crate::dispatch;

/// Serve MCP over a line-delimited JSON-RPC stream (stdin/stdout in
/// production).
///
/// Each request runs on its own task, so slow upstream calls do not hold up
/// later requests; responses are written in completion order by a single
/// writer. Returns once the input closes and every in-flight call has
/// answered.
pub async fn serve<R, W>(state: AppState, reader: R, writer: W) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel::<JsonRpcResponse>();
    let writer_task = tokio::spawn(write_responses(writer, rx));

    let mut lines = BufReader::new(reader).lines();
    let mut in_flight = JoinSet::new();

    // Finished calls are reaped as they complete, so a long session only
    // holds the calls still running.
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                dispatch_line(&state, &tx, &mut in_flight, &line);
            }
            Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                log_join(joined);
            }
        }
    }

    tracing::info!("Input closed, waiting for {} in-flight calls", in_flight.len());
    while let Some(joined) = in_flight.join_next().await {
        log_join(joined);
    }

    drop(tx);
    writer_task.await.map_err(std::io::Error::other)?
}

/// Parse one input line and start its call. Parse failures are answered
/// directly.
fn dispatch_line(
    state: &AppState,
    tx: &mpsc::UnboundedSender<JsonRpcResponse>,
    in_flight: &mut JoinSet<()>,
    line: &str,
) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }

    let req = match dispatch::parse_message(line) {
        Ok(req) => req,
        Err(resp) => {
            // Writer only stops once every sender is gone.
            let _ = tx.send(resp);
            return;
        }
    };

    let tools = state.tools.clone();
    let tx = tx.clone();
    in_flight.spawn(async move {
        if let Some(resp) = dispatch::handle_request(&tools, req).await {
            let _ = tx.send(resp);
        }
    });
}

fn log_join(joined: Result<(), JoinError>) {
    if let Err(err) = joined {
        tracing::error!("Tool call task failed: {err}");
    }
}

async fn write_responses<W>(
    mut writer: W,
    mut rx: mpsc::UnboundedReceiver<JsonRpcResponse>,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(resp) = rx.recv().await {
        let mut line = serde_json::to_vec(&resp)?;
        line.push(b'\n');
        writer.write_all(&line).await?;
        writer.flush().await?;
    }
    Ok(())
}
