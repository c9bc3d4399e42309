use serde_derive::{Deserialize, Serialize};
use std::{
    fmt,
    fs::File,
    io::{self, Write},
    sync::Mutex,
};
use tracing::*;

/// Thread safe json logger that writes a [`ConvertRecord`] for every conversion event into
/// a given log file, one record per line.
pub struct JsonLogger {
    log_file: Mutex<File>,
}

impl JsonLogger {
    pub fn new(log_file: File) -> Self {
        Self {
            log_file: Mutex::new(log_file),
        }
    }

    fn write_record(&self, record: &ConvertRecord) -> io::Result<()> {
        let json = serde_json::to_string(record)?;
        // a panic while holding the lock leaves the file usable
        let mut file = self
            .log_file
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(file, "{}", json)?;
        file.flush()
    }
}

impl subscriber::Subscriber for JsonLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn new_span(&self, _span: &span::Attributes) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &span::Record) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event) {
        let mut recorder = Recorder::new();
        event.record(&mut recorder);

        if recorder.event.as_deref() != Some(super::CONVERT) {
            return;
        }
        if let Some(record) = ConvertRecord::try_from(recorder) {
            if let Err(e) = self.write_record(&record) {
                eprintln!("failed to write to the log file: {}", e);
            }
        }
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

/// A record, containing the basis of a conversion together with its input and output.
#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct ConvertRecord {
    pub event: String,
    pub basis: String,
    pub input: String,
    pub output: String,
}

impl ConvertRecord {
    fn try_from(value: Recorder) -> Option<Self> {
        Some(ConvertRecord {
            event: value.event?,
            basis: value.basis?,
            input: value.input?,
            output: value.output?,
        })
    }
}

/// Trace visitor that collects the fields of a conversion event.
struct Recorder {
    event: Option<String>,
    basis: Option<String>,
    input: Option<String>,
    output: Option<String>,
}

impl Recorder {
    fn new() -> Recorder {
        Recorder {
            event: None,
            basis: None,
            input: None,
            output: None,
        }
    }
}

impl field::Visit for Recorder {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        match field.name() {
            super::EVENT_FIELD => self.event = Some(value.to_owned()),
            super::BASIS_FIELD => self.basis = Some(value.to_owned()),
            _ => (),
        }
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn fmt::Debug) {
        match field.name() {
            super::EVENT_FIELD => self.event = Some(format!("{:?}", value)),
            super::BASIS_FIELD => self.basis = Some(format!("{:?}", value)),
            super::INPUT_FIELD => self.input = Some(format!("{:?}", value)),
            super::OUTPUT_FIELD => self.output = Some(format!("{:?}", value)),
            _ => (),
        }
    }
}
