//! Line-oriented chat session: every input line is one inbound message.

use anyhow::Result;
use chrono::NaiveDate;
use duit_store::TransactionStore;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

use crate::handler::MessageHandler;

/// Typed at the prompt to end the session; never reaches the handler.
const QUIT: &str = "/quit";

/// Feed lines from `input` to `handler` until EOF or `/quit`, writing each
/// reply to `output`. `today` is sampled once per message.
pub async fn run_session<S, R, W>(
    handler: &MessageHandler<S>,
    user_id: &str,
    today: impl Fn() -> NaiveDate,
    input: R,
    mut output: W,
) -> Result<usize>
where
    S: TransactionStore,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut handled = 0;

    while let Some(line) = lines.next_line().await? {
        if line.trim().eq_ignore_ascii_case(QUIT) {
            break;
        }
        let Some(reply) = handler.handle(user_id, &line, today()) else {
            continue;
        };
        handled += 1;
        output.write_all(reply.as_bytes()).await?;
        output.write_all(b"\n\n").await?;
        output.flush().await?;
    }

    info!(user_id, handled, "chat session ended");
    Ok(handled)
}
