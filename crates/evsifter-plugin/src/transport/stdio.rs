//! Line loop between the relay and a sifter.
//!
//! Responsibilities:
//! - Read one JSON input per line until EOF
//! - Evaluate it with the configured sifter
//! - Write one JSON output line per input that names an event, flush it immediately
//!
//! A line that fails to decode but still carries `event.id` is rejected with
//! [`MALFORMED_MSG`] so the relay is not left waiting. Lines with no readable
//! id have nobody to answer; they are logged and skipped.
//! Evaluation errors are answered with a plain reject: the relay waits for a
//! reply per event, and accepting an event we could not judge is not an option.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use evsifter_core::error::{Result, SiftError};
use evsifter_core::protocol::{decode_input, encode_output, peek_event_id, Output};

use crate::sifters::Sifter;

/// Message sent back when the sifter could not judge an event.
pub const EVAL_ERROR_MSG: &str = "error: failed to evaluate event";

/// Message sent back for an event line that could not be decoded.
pub const MALFORMED_MSG: &str = "invalid: malformed input";

/// Counters for one run of the loop.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub accepted: u64,
    pub rejected: u64,
    pub decode_errors: u64,
    pub eval_errors: u64,
}

/// How a decoded line was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected,
    EvalError,
    /// Undecodable, but answered by id.
    Malformed,
}

/// Judge one input line. `Ok(None)` means the line was blank; `Err` means
/// it could not be decoded and had no event id to answer.
pub fn sift_line(sifter: &dyn Sifter, line: &str) -> Result<Option<(Output, Outcome)>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let input = match decode_input(line) {
        Ok(input) => input,
        Err(e) => {
            let Some(id) = peek_event_id(line) else {
                return Err(e);
            };
            tracing::warn!(id = %id, code = e.code().as_str(), error = %e, "rejecting malformed input line");
            return Ok(Some((Output::reject(id, MALFORMED_MSG), Outcome::Malformed)));
        }
    };
    let answered = match sifter.evaluate(&input) {
        Ok(verdict) => {
            let outcome = if verdict.is_accept() { Outcome::Accepted } else { Outcome::Rejected };
            (verdict.into_output(input.event.id), outcome)
        }
        Err(e) => {
            tracing::error!(id = %input.event.id, code = e.code().as_str(), error = %e, "sifter failed to evaluate event");
            (Output::reject(input.event.id, EVAL_ERROR_MSG), Outcome::EvalError)
        }
    };
    Ok(Some(answered))
}

/// Run the loop until `reader` hits EOF.
pub async fn run<R, W>(sifter: Arc<dyn Sifter>, reader: R, mut writer: W) -> Result<RunStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut stats = RunStats::default();
    let mut lines = reader.lines();

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| SiftError::Internal(format!("read input failed: {e}")))?
    {
        let (out, outcome) = match sift_line(sifter.as_ref(), &line) {
            Ok(Some(answered)) => answered,
            Ok(None) => continue,
            Err(e) => {
                stats.decode_errors += 1;
                tracing::warn!(code = e.code().as_str(), error = %e, "skipping undecodable input line");
                continue;
            }
        };

        match outcome {
            Outcome::Accepted => stats.accepted += 1,
            Outcome::Rejected => stats.rejected += 1,
            Outcome::EvalError => stats.eval_errors += 1,
            Outcome::Malformed => stats.decode_errors += 1,
        }
        tracing::debug!(id = %out.id, action = ?out.action, msg = %out.msg, "verdict");

        let mut encoded = encode_output(&out)?;
        encoded.push('\n');
        writer
            .write_all(encoded.as_bytes())
            .await
            .map_err(|e| SiftError::Internal(format!("write output failed: {e}")))?;
        writer
            .flush()
            .await
            .map_err(|e| SiftError::Internal(format!("flush output failed: {e}")))?;
    }

    Ok(stats)
}
