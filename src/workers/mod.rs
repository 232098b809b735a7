//! Fan-out demonstration workers joined by a counted barrier.
//!
//! Three workers start concurrently, each sleeps a random number of delay units per step and then
//! emits one value. [`run`] returns only after every worker signalled completion.

use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rand::prelude::*;
use thiserror::Error;

mod barrier;
mod sink;

pub use barrier::{Completion, JoinBarrier};
pub use sink::{CollectSink, Item, Sink, StdoutSink, Value};

/// Number of steps each worker runs by default.
pub const DEFAULT_STEPS: usize = 5;

const WORDS: [&str; DEFAULT_STEPS] = ["one", "two", "three", "four", "five"];

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("failed to spawn worker `{worker}`")]
    Spawn {
        worker: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("worker `{worker}` panicked")]
    Panicked { worker: &'static str },
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorkerConfig {
    /// Values emitted per worker.
    pub steps: usize,
    /// Each step sleeps `1 + uniform(0..=max_extra_delay)` of these.
    pub delay_unit: Duration,
    pub max_extra_delay: u32,
    /// Seeds the per-worker delay generators. Random if `None`.
    pub seed: Option<u64>,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            delay_unit: Duration::from_secs(1),
            max_extra_delay: 2,
            seed: None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WorkerKind {
    Words,
    Ints,
    Floats,
}

impl WorkerKind {
    pub const ALL: [WorkerKind; 3] = [WorkerKind::Words, WorkerKind::Ints, WorkerKind::Floats];

    pub fn name(self) -> &'static str {
        match self {
            WorkerKind::Words => "words",
            WorkerKind::Ints => "ints",
            WorkerKind::Floats => "floats",
        }
    }

    /// The value this worker emits at `step`.
    pub fn value(self, step: usize) -> Value {
        match self {
            WorkerKind::Words => Value::Text(
                WORDS
                    .get(step)
                    .map(|word| word.to_string())
                    .unwrap_or_else(|| (step + 1).to_string()),
            ),
            WorkerKind::Ints => Value::Int(step as i64),
            WorkerKind::Floats => Value::Float((step * step) as f64 + 0.5),
        }
    }
}

/// How many items each worker emitted, in [`WorkerKind::ALL`] order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub emitted: Vec<(&'static str, usize)>,
}

impl RunReport {
    pub fn total(&self) -> usize {
        self.emitted.iter().map(|(_, count)| count).sum()
    }
}

/// Starts one thread per [`WorkerKind`], blocks until all of them signalled completion and
/// reports how much each emitted.
///
/// Every spawned worker is waited for, even if spawning a later one failed or one of them
/// panicked. The first such failure is returned.
pub fn run<K>(config: &WorkerConfig, sink: Arc<K>) -> Result<RunReport, WorkerError>
where
    K: Sink + 'static,
{
    let base_seed = config.seed.unwrap_or_else(|| thread_rng().gen());

    let barrier = Arc::new(JoinBarrier::new());
    barrier.add(WorkerKind::ALL.len());

    // Every registered worker gets its guard before anything is spawned. Guards of workers that
    // never start are dropped with the iterator below, which keeps the count balanced.
    let completions = WorkerKind::ALL
        .iter()
        .map(|_| barrier.completion())
        .collect::<Vec<_>>();

    let mut handles = Vec::with_capacity(WorkerKind::ALL.len());
    let mut first_err = None;

    for (i, (kind, completion)) in WorkerKind::ALL.into_iter().zip(completions).enumerate() {
        let sink = Arc::clone(&sink);
        let config = config.clone();
        let seed = base_seed.wrapping_add(i as u64);

        let spawned = thread::Builder::new()
            .name(kind.name().into())
            .spawn(move || {
                let _completion = completion;
                emit_steps(kind, &config, seed, &*sink)
            });

        match spawned {
            Ok(handle) => handles.push((kind, handle)),
            Err(source) => {
                first_err = Some(WorkerError::Spawn {
                    worker: kind.name(),
                    source,
                });
                break;
            }
        }
    }

    barrier.wait();

    let mut emitted = Vec::with_capacity(handles.len());
    for (kind, handle) in handles {
        match handle.join() {
            Ok(count) => emitted.push((kind.name(), count)),
            Err(_) if first_err.is_none() => {
                first_err = Some(WorkerError::Panicked {
                    worker: kind.name(),
                });
            }
            Err(_) => {}
        }
    }

    match first_err {
        Some(err) => Err(err),
        None => Ok(RunReport { emitted }),
    }
}

fn emit_steps(kind: WorkerKind, config: &WorkerConfig, seed: u64, sink: &dyn Sink) -> usize {
    let mut rng = StdRng::seed_from_u64(seed);

    for step in 0..config.steps {
        thread::sleep(step_delay(config, &mut rng));

        sink.emit(Item {
            worker: kind.name(),
            step,
            value: kind.value(step),
        });
    }

    config.steps
}

/// `1 + uniform(0..=max_extra_delay)` delay units, saturating instead of overflowing.
fn step_delay(config: &WorkerConfig, rng: &mut StdRng) -> Duration {
    let units = rng.gen_range(0..=config.max_extra_delay).saturating_add(1);
    config.delay_unit.saturating_mul(units)
}
