//! Toast notifications

use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

/// How a toast is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Something the user asked for happened
    Success,
    /// Neutral information
    Info,
    /// The action did not take, but nothing is broken
    Warning,
    /// Destructive: an operation failed
    Error,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tone::Success => write!(f, "Success"),
            Tone::Info => write!(f, "Info"),
            Tone::Warning => write!(f, "Warning"),
            Tone::Error => write!(f, "Error"),
        }
    }
}

/// One notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    title: String,
    description: Option<String>,
    tone: Tone,
    created: Instant,
}

impl Toast {
    /// Toast with a title and tone, stamped now
    #[must_use]
    pub fn new(title: impl Into<String>, tone: Tone) -> Self {
        Self {
            title: title.into(),
            description: None,
            tone,
            created: Instant::now(),
        }
    }

    /// Success toast
    #[must_use]
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, Tone::Success)
    }

    /// Warning toast
    #[must_use]
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(title, Tone::Warning)
    }

    /// Destructive toast
    #[must_use]
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title, Tone::Error)
    }

    /// Add a second line
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Headline
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Second line, if any
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Styling
    #[must_use]
    pub fn tone(&self) -> Tone {
        self.tone
    }

    fn expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created) >= ttl
    }
}

/// Toasts currently on screen, oldest first
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl: Duration,
    capacity: usize,
}

impl ToastQueue {
    /// Most toasts shown at once; older ones are pushed out
    pub const DEFAULT_CAPACITY: usize = 3;

    /// Queue whose toasts expire after `ttl`
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
            capacity: Self::DEFAULT_CAPACITY,
        }
    }

    /// Show `toast`, dropping the oldest if full
    pub fn push(&mut self, toast: Toast) {
        if self.toasts.len() == self.capacity {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }

    /// Drop every toast older than the lifetime, as of `now`
    pub fn expire_at(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts.retain(|toast| !toast.expired(now, ttl));
    }

    /// Drop expired toasts as of now
    pub fn expire(&mut self) {
        self.expire_at(Instant::now());
    }

    /// Toasts on screen, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Newest toast
    #[must_use]
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    /// Number of toasts on screen
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether nothing is on screen
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
