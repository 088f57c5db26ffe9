use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use serde::Serialize;
use serde_json::{json, Value};

/// Emits every record as one JSON object per line; errors go to stderr.
struct JsonLogger;

static LOGGER: JsonLogger = JsonLogger;

#[derive(Serialize)]
struct LogEvent<'a> {
    level: &'a str,
    event: &'a str,
    message: &'a str,
    timestamp_ms: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Value>,
}

/// Install the JSON logger as the `log` backend.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

impl Log for JsonLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = level_name(record.level());
        let message = record.args().to_string();
        let metadata = record.module_path().map(|module| {
            json!({
                "module": module,
                "line": record.line(),
            })
        });

        match render(level, record.target(), &message, metadata) {
            Ok(payload) => {
                if record.level() == Level::Error {
                    eprintln!("{payload}");
                } else {
                    println!("{payload}");
                }
            }
            Err(err) => eprintln!(
                "{{\"level\":\"error\",\"event\":\"logging_failure\",\"message\":\"failed to serialise log\",\"error\":\"{err}\"}}"
            ),
        }
    }

    fn flush(&self) {}
}

fn render(
    level: &str,
    event: &str,
    message: &str,
    metadata: Option<Value>,
) -> serde_json::Result<String> {
    serde_json::to_string(&LogEvent {
        level,
        event,
        message,
        timestamp_ms: current_timestamp_ms(),
        metadata,
    })
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "error",
        Level::Warn => "warn",
        Level::Info => "info",
        Level::Debug => "debug",
        Level::Trace => "trace",
    }
}

fn current_timestamp_ms() -> u128 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}
