use colored::Colorize;
use lazy_static::lazy_static;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub enum Level {
    Info,
    Success,
    Warn,
    Error,
    Debug,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Success => "success",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Debug => "debug",
        }
    }

    fn paint(self, message: &str) -> String {
        match self {
            Level::Info => message.normal().to_string(),
            Level::Success => message.green().bold().to_string(),
            Level::Warn => message.yellow().bold().to_string(),
            Level::Error => message.red().bold().to_string(),
            Level::Debug => message.cyan().to_string(),
        }
    }

    fn routes_to_stderr(self) -> bool {
        matches!(self, Level::Warn | Level::Error)
    }
}

#[derive(Debug, Clone, Copy)]
struct Renderer {
    format: OutputFormat,
    color: bool,
}

lazy_static! {
    static ref RENDERER: RwLock<Renderer> = RwLock::new(Renderer {
        format: OutputFormat::Text,
        color: true,
    });
}

static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat, color: bool) {
    if let Ok(mut renderer) = RENDERER.write() {
        renderer.format = format;
        renderer.color = color;
    }
}

pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::Relaxed);
}

pub fn is_debug_enabled() -> bool {
    DEBUG_MODE.load(Ordering::Relaxed)
}

#[derive(Serialize)]
struct Event<'a> {
    level: &'a str,
    code: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,
}

/// Emit one user-facing event. Text mode colorizes by level; JSON mode writes
/// one event object per line with ANSI sequences stripped.
pub fn emit(level: Level, code: &str, message: &str, data: Option<serde_json::Value>) {
    if matches!(level, Level::Debug) && !is_debug_enabled() {
        return;
    }

    let renderer = match RENDERER.read() {
        Ok(renderer) => *renderer,
        Err(_) => return,
    };

    let mut out: Box<dyn Write> = if level.routes_to_stderr() {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };

    match renderer.format {
        OutputFormat::Text => {
            let line = if renderer.color {
                level.paint(message)
            } else {
                message.to_string()
            };
            let _ = writeln!(out, "{line}");
        }
        OutputFormat::Json => {
            let clean = strip_ansi(message);
            let event = Event {
                level: level.as_str(),
                code,
                message: &clean,
                data,
            };
            if let Ok(serialized) = serde_json::to_string(&event) {
                let _ = writeln!(out, "{serialized}");
            }
        }
    }
}

pub fn get_output_format() -> OutputFormat {
    RENDERER
        .read()
        .map(|renderer| renderer.format)
        .unwrap_or(OutputFormat::Text)
}

fn strip_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // Skip the CSI body up to and including its final byte
            if chars.peek() == Some(&'[') {
                chars.next();
                for body in chars.by_ref() {
                    if ('@'..='~').contains(&body) {
                        break;
                    }
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

pub mod prelude {
    pub use super::{Level, OutputFormat, emit};
}
