//! The single-pass evaluator.
//!
//! Opens the source's iteration session once, feeds every element to every
//! consumer in lock-step, releases the session, then finishes each consumer
//! in registration order.

use std::time::Instant;

use lockstep_config::EvaluationConfig;
use lockstep_core::{Result, Source};
use tracing::{debug, info, trace, warn};

use crate::set::ConsumerSet;

/// Evaluates `consumers` over `source` in exactly one pass.
///
/// All-or-nothing: the first failure (opening the session, any `accept`,
/// any `finish`) is returned as-is, the remaining consumers are not driven,
/// and no partial results are reported. The iteration session is always
/// dropped before this function returns, including when a consumer panics.
pub fn evaluate<S, C>(source: S, mut consumers: C, config: &EvaluationConfig) -> Result<C::Output>
where
    S: Source,
    C: ConsumerSet<S::Item>,
{
    let name = config.label();
    let start = Instant::now();

    info!(
        event = "evaluation_start",
        name = name,
        arity = C::ARITY as u64,
    );

    let result = drive(source, &mut consumers, config)
        .and_then(|elements| consumers.finish_all().map(|output| (output, elements)));

    match result {
        Ok((output, elements)) => {
            let elapsed = start.elapsed();
            info!(
                event = "evaluation_end",
                name = name,
                arity = C::ARITY as u64,
                elements = elements,
                duration_ms = elapsed.as_millis() as u64,
            );
            if let Some(threshold) = config.slow_threshold() {
                if elapsed > threshold {
                    warn!(
                        event = "slow_evaluation",
                        name = name,
                        elements = elements,
                        duration_ms = elapsed.as_millis() as u64,
                        threshold_ms = threshold.as_millis() as u64,
                    );
                }
            }
            Ok(output)
        }
        Err(err) => {
            warn!(
                event = "evaluation_failed",
                name = name,
                error_kind = err.kind(),
                error = %err,
            );
            Err(err)
        }
    }
}

// Runs the shared pass and returns the number of elements enumerated.
//
// The session lives only inside this function, so it is released before
// any consumer is finished.
fn drive<S, C>(source: S, consumers: &mut C, config: &EvaluationConfig) -> Result<u64>
where
    S: Source,
    C: ConsumerSet<S::Item>,
{
    let session = source.open()?;
    let mut elements = 0u64;

    for element in session {
        consumers.accept_all(&element)?;
        elements += 1;
        trace!(event = "element", index = elements - 1);

        if let Some(interval) = config.progress_interval {
            if interval > 0 && elements % interval == 0 {
                debug!(
                    event = "evaluation_progress",
                    name = config.label(),
                    elements = elements,
                    satisfied = consumers.satisfied_count() as u64,
                );
            }
        }
    }

    Ok(elements)
}
