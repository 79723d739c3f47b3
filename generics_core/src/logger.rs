use std::fmt::{self, Debug, Display, Formatter, Write};
use std::io::IsTerminal;
use std::sync::Arc;

use chrono::Local;
use parking_lot::RwLock;
use tracing::field::{Field, Visit};
use tracing::metadata::LevelFilter;
use tracing::span::Id;
use tracing::subscriber::{set_global_default, Interest};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Installs the console [`Logger`] as the global subscriber.
///
/// The initial level is taken from `RUST_LOG`, falling back to `INFO`. The
/// returned [`LevelHandle`] can change the level afterwards, e.g. once the
/// config file has been read.
///
/// # Panics
///
/// Panics if a global subscriber was already installed.
pub fn init() -> LevelHandle {
    let logger = Logger::new();
    let handle = logger.handle();

    let subscriber = tracing_subscriber::registry().with(logger);
    set_global_default(subscriber).unwrap();

    handle
}

/// Parses a level name as accepted by `RUST_LOG`.
///
/// Names are matched case-insensitively. Returns `None` for unknown names.
pub fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.trim().to_ascii_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        "off" => Some(LevelFilter::OFF),
        _ => None,
    }
}

/// Returns the level set through `RUST_LOG`, if any.
pub fn level_from_env() -> Option<LevelFilter> {
    std::env::var("RUST_LOG").ok().and_then(|v| parse_level(&v))
}

/// Shared handle to the maximum level of a [`Logger`].
#[derive(Clone, Debug)]
pub struct LevelHandle {
    level: Arc<RwLock<LevelFilter>>,
}

impl LevelHandle {
    pub fn get(&self) -> LevelFilter {
        *self.level.read()
    }

    pub fn set(&self, level: LevelFilter) {
        *self.level.write() = level;
    }
}

/// A [`Layer`] printing events to stdout, one line per event.
#[derive(Debug)]
pub struct Logger {
    level: Arc<RwLock<LevelFilter>>,
    is_tty: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_level(level_from_env().unwrap_or(LevelFilter::INFO))
    }

    pub fn with_level(level: LevelFilter) -> Self {
        Self {
            level: Arc::new(RwLock::new(level)),
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    pub fn handle(&self) -> LevelHandle {
        LevelHandle {
            level: self.level.clone(),
        }
    }

    fn is_enabled(&self, level: &Level) -> bool {
        *level <= *self.level.read()
    }

    fn log<T>(&self, level: &Level, target: &str, content: T)
    where
        T: Display,
    {
        if !self.is_enabled(level) {
            return;
        }

        println!("{}", self.format_line(level, target, content));
    }

    fn format_line<T>(&self, level: &Level, target: &str, content: T) -> String
    where
        T: Display,
    {
        let now = Local::now().format("%Y-%m-%d %H:%M:%S:%f");

        let (name, color) = match *level {
            Level::ERROR => ("ERROR", Color::RED),
            Level::WARN => ("WARN", Color::YELLOW),
            Level::INFO => ("INFO", Color::GREEN),
            Level::DEBUG => ("DEBUG", Color::LIGHT_GRAY_BOLD),
            Level::TRACE => ("TRACE", Color::LIGHT_GRAY_BOLD),
        };

        if self.is_tty {
            format!(
                "{} {} {} {}",
                ColorText::new(format!("[{}]", now), Color::LIGHT_GRAY),
                ColorText::new(name, color),
                ColorText::new(target, Color::LIGHT_GRAY),
                content
            )
        } else {
            format!("[{}] {} {} {}", now, name, target, content)
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for Logger
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    // The level can change at runtime so callsites must never be cached
    // as disabled.
    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        Interest::sometimes()
    }

    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.is_enabled(metadata.level())
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = Visitor::new();
        event.record(&mut visitor);

        let meta = event.metadata();
        self.log(meta.level(), meta.target(), visitor);
    }

    fn on_enter(&self, id: &Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            let meta = span.metadata();
            self.log(
                meta.level(),
                meta.target(),
                format!("--> {} ({})", meta.name(), id.into_u64()),
            );
        }
    }

    fn on_exit(&self, id: &Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            let meta = span.metadata();
            self.log(
                meta.level(),
                meta.target(),
                format!("<-- {} ({})", meta.name(), id.into_u64()),
            );
        }
    }
}

struct Visitor {
    buf: String,
}

impl Visitor {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(32),
        }
    }
}

impl Visit for Visitor {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }

        let _ = match field.name() {
            "message" => write!(self.buf, "{:?}", value),
            _ => write!(self.buf, "{} = {:?}", field, value),
        };
    }
}

impl Display for Visitor {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.buf, f)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct Color([u8; 2]);

impl Color {
    // Bold
    pub const RED: Self = Self([1, 31]);
    pub const YELLOW: Self = Self([1, 33]);
    pub const GREEN: Self = Self([1, 32]);
    pub const LIGHT_GRAY_BOLD: Self = Self([1, 37]);

    pub const LIGHT_GRAY: Self = Self([2, 37]);
}

struct ColorText<T>
where
    T: Display,
{
    text: T,
    color: Color,
}

impl<T> ColorText<T>
where
    T: Display,
{
    fn new(text: T, color: Color) -> Self {
        Self { text, color }
    }
}

impl<T> Display for ColorText<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\x1b[{};{}m{}\x1b[0m",
            self.color.0[0], self.color.0[1], self.text
        )
    }
}
