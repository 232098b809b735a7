use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use sort_kit::workers::{self, CollectSink, Item, JoinBarrier, Value, WorkerConfig, WorkerKind};

fn fast_config(seed: u64) -> WorkerConfig {
    WorkerConfig {
        delay_unit: Duration::from_millis(2),
        seed: Some(seed),
        ..WorkerConfig::default()
    }
}

fn values_of(items: &[Item], worker: &str) -> Vec<Value> {
    items
        .iter()
        .filter(|item| item.worker == worker)
        .map(|item| item.value.clone())
        .collect()
}

#[test]
fn every_worker_emits_its_sequence() {
    let sink = Arc::new(CollectSink::new());
    let report = workers::run(&fast_config(7), Arc::clone(&sink)).unwrap();

    let items = sink.items();
    assert_eq!(items.len(), 15);
    assert_eq!(report.total(), 15);
    assert_eq!(
        report.emitted,
        [("words", 5), ("ints", 5), ("floats", 5)]
    );

    let words = ["one", "two", "three", "four", "five"]
        .iter()
        .map(|w| Value::Text(w.to_string()))
        .collect::<Vec<_>>();
    assert_eq!(values_of(&items, "words"), words);

    let ints = (0..5).map(Value::Int).collect::<Vec<_>>();
    assert_eq!(values_of(&items, "ints"), ints);

    let floats = [0.5, 1.5, 4.5, 9.5, 16.5].map(Value::Float).to_vec();
    assert_eq!(values_of(&items, "floats"), floats);
}

#[test]
fn steps_are_ordered_per_worker() {
    let sink = Arc::new(CollectSink::new());
    workers::run(&fast_config(1234), Arc::clone(&sink)).unwrap();

    for kind in WorkerKind::ALL {
        let steps = sink
            .items()
            .into_iter()
            .filter(|item| item.worker == kind.name())
            .map(|item| item.step)
            .collect::<Vec<_>>();
        assert_eq!(steps, [0, 1, 2, 3, 4]);
    }
}

#[test]
fn run_returns_after_all_output() {
    let config = WorkerConfig {
        steps: 3,
        max_extra_delay: 0,
        ..fast_config(3)
    };
    let sink = Arc::new(CollectSink::new());

    let start = Instant::now();
    workers::run(&config, Arc::clone(&sink)).unwrap();

    // Each worker sleeps exactly one unit per step, and they run concurrently.
    assert!(start.elapsed() >= config.delay_unit * 3);
    assert_eq!(Arc::try_unwrap(sink).unwrap().into_items().len(), 9);
}

#[test]
fn zero_steps_emits_nothing() {
    let config = WorkerConfig {
        steps: 0,
        ..fast_config(0)
    };
    let sink = Arc::new(CollectSink::new());

    let report = workers::run(&config, Arc::clone(&sink)).unwrap();

    assert_eq!(report.total(), 0);
    assert!(sink.items().is_empty());
}

#[test]
fn longer_runs_continue_counting_words() {
    let config = WorkerConfig {
        steps: 7,
        max_extra_delay: 0,
        ..fast_config(9)
    };
    let sink = Arc::new(CollectSink::new());

    workers::run(&config, Arc::clone(&sink)).unwrap();

    let words = values_of(&sink.items(), "words");
    assert_eq!(words[4], Value::Text("five".into()));
    assert_eq!(words[5], Value::Text("6".into()));
    assert_eq!(words[6], Value::Text("7".into()));
}

#[test]
fn barrier_counts_down_across_threads() {
    let barrier = Arc::new(JoinBarrier::new());
    barrier.add(2);
    barrier.add(1);
    assert_eq!(barrier.outstanding(), 3);

    let handles = (0..3)
        .map(|_| {
            let completion = barrier.completion();
            thread::spawn(move || drop(completion))
        })
        .collect::<Vec<_>>();

    barrier.wait();
    assert_eq!(barrier.outstanding(), 0);

    for handle in handles {
        handle.join().unwrap();
    }

    // Reusable once it reached zero.
    barrier.add(1);
    barrier.done();
    barrier.wait();
}
