// src/application/bulk.rs
//! Concurrent fan-out for bulk article operations.
//!
//! [`fan_out`] runs one blocking worker per input, writes each result into
//! the slot matching its input position and fails the whole batch on the
//! first worker error. Workers that have not started, or finish after that
//! error, observe a shared cancellation flag and drop their work.

use crate::application::error::{ApplicationError, ApplicationResult};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinSet;

/// One unit of bulk work: the input position and its payload.
#[derive(Debug)]
pub struct WorkItem<P> {
    pub index: usize,
    pub payload: P,
}

/// What a worker reports back to the coordinator.
enum Signal<T> {
    Done(usize, T),
    Failed(usize, ApplicationError),
    Abandoned(usize),
}

/// Read side of the batch cancellation flag. Raised at most once.
struct Cancellation(watch::Receiver<bool>);

impl Cancellation {
    fn is_raised(&self) -> bool {
        *self.0.borrow()
    }
}

/// Run `unit` once per payload on the blocking pool and return the results
/// in input order.
///
/// An empty input returns immediately without dispatching anything. The
/// first failing unit decides the batch's error; no partial results are
/// returned and later errors are discarded.
pub async fn fan_out<P, T, F>(payloads: Vec<P>, unit: F) -> ApplicationResult<Vec<T>>
where
    P: Send + 'static,
    T: Send + 'static,
    F: Fn(P) -> ApplicationResult<T> + Send + Sync + 'static,
{
    let total = payloads.len();
    if total == 0 {
        return Ok(Vec::new());
    }

    let unit = Arc::new(unit);
    let (cancel_tx, cancel_rx) = watch::channel(false);
    let mut workers = JoinSet::new();

    for (index, payload) in payloads.into_iter().enumerate() {
        let item = WorkItem { index, payload };
        let unit = Arc::clone(&unit);
        let cancellation = Cancellation(cancel_rx.clone());
        workers.spawn_blocking(move || run_unit(item, unit.as_ref(), &cancellation));
    }
    tracing::debug!(units = total, "bulk fan-out dispatched");

    let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(total).collect();
    let mut signals = 0usize;

    while let Some(joined) = workers.join_next().await {
        signals += 1;
        let outcome = match joined {
            Ok(Signal::Done(index, value)) => fill_slot(&mut slots, index, value),
            Ok(Signal::Failed(index, err)) => {
                tracing::warn!(index, error = %err, "bulk unit failed, cancelling batch");
                Err(err)
            }
            Ok(Signal::Abandoned(index)) => Err(ApplicationError::aggregation(format!(
                "unit {index} abandoned before the batch was cancelled"
            ))),
            Err(join_err) => Err(ApplicationError::aggregation(format!(
                "bulk worker could not be joined: {join_err}"
            ))),
        };

        if let Err(err) = outcome {
            cancel_tx.send_replace(true);
            workers.abort_all();
            return Err(err);
        }
    }

    if signals != total {
        return Err(ApplicationError::aggregation(format!(
            "expected {total} completion signals, received {signals}"
        )));
    }
    collect_slots(slots)
}

fn run_unit<P, T, F>(item: WorkItem<P>, unit: &F, cancellation: &Cancellation) -> Signal<T>
where
    F: Fn(P) -> ApplicationResult<T>,
{
    let WorkItem { index, payload } = item;
    if cancellation.is_raised() {
        return Signal::Abandoned(index);
    }

    let outcome = unit(payload);

    // The coordinator may already have returned; the result is discarded then.
    if cancellation.is_raised() {
        return Signal::Abandoned(index);
    }
    match outcome {
        Ok(value) => Signal::Done(index, value),
        Err(err) => Signal::Failed(index, err),
    }
}

fn fill_slot<T>(slots: &mut [Option<T>], index: usize, value: T) -> ApplicationResult<()> {
    match slots.get_mut(index) {
        Some(slot) if slot.is_none() => {
            *slot = Some(value);
            Ok(())
        }
        Some(_) => Err(ApplicationError::aggregation(format!(
            "slot {index} written twice"
        ))),
        None => Err(ApplicationError::aggregation(format!(
            "slot {index} out of range"
        ))),
    }
}

fn collect_slots<T>(slots: Vec<Option<T>>) -> ApplicationResult<Vec<T>> {
    let total = slots.len();
    let filled = slots.iter().filter(|slot| slot.is_some()).count();
    if filled != total {
        return Err(ApplicationError::aggregation(format!(
            "bulk result has {filled} of {total} slots filled"
        )));
    }
    Ok(slots.into_iter().flatten().collect())
}
