use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Int(val) => write!(f, "{val}"),
            Value::Float(val) => write!(f, "{val}"),
        }
    }
}

/// One value emitted by a worker at a given step.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub worker: &'static str,
    pub step: usize,
    pub value: Value,
}

/// Destination of emitted items. Shared by all workers, so implementations must tolerate
/// concurrent calls. The order in which concurrent items arrive is unspecified.
pub trait Sink: Send + Sync {
    fn emit(&self, item: Item);
}

/// Prints each value on its own line.
#[derive(Copy, Clone, Debug, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn emit(&self, item: Item) {
        if let Err(err) = write_value(&mut io::stdout().lock(), &item.value) {
            eprintln!("Failed to write output of worker `{}`: {err}", item.worker);
        }
    }
}

/// Writes `value` and a newline. A closed reader (broken pipe) is not an error, there is nobody
/// left to tell.
fn write_value(out: &mut impl Write, value: &Value) -> io::Result<()> {
    match writeln!(out, "{value}") {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        res => res,
    }
}

/// Keeps every emitted item in arrival order.
#[derive(Debug, Default)]
pub struct CollectSink {
    items: Mutex<Vec<Item>>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> Vec<Item> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for CollectSink {
    fn emit(&self, item: Item) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(item);
    }
}
