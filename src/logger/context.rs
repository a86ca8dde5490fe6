//! Execution-context identification.
//!
//! The logger asks a [`ContextProvider`] which concurrent unit issued a
//! call. Providers return `None` when they cannot tell, and the
//! annotation is then left out of the line.

use std::borrow::Cow;
use std::fmt;

/// Identifies the execution unit (thread, task, ...) that issued a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextId {
    kind: Cow<'static, str>,
    id: String,
}

impl ContextId {
    /// Create an identifier such as `thread 7` or `task 12`.
    pub fn new(kind: impl Into<Cow<'static, str>>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// The kind of execution unit.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The identifier within that kind.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.id)
    }
}

/// Source of the current execution-context identifier.
pub trait ContextProvider: Send + Sync {
    /// Identify the calling execution unit, if possible.
    fn current(&self) -> Option<ContextId>;
}

impl<F> ContextProvider for F
where
    F: Fn() -> Option<ContextId> + Send + Sync,
{
    fn current(&self) -> Option<ContextId> {
        self()
    }
}

/// Identifies OS threads by their numeric id.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadContext;

impl ContextProvider for ThreadContext {
    fn current(&self) -> Option<ContextId> {
        let raw = format!("{:?}", std::thread::current().id());
        thread_number(&raw).map(|n| ContextId::new("thread", n))
    }
}

/// Never resolves a context.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoContext;

impl ContextProvider for NoContext {
    fn current(&self) -> Option<ContextId> {
        None
    }
}

// `ThreadId` only exposes its number through `Debug` ("ThreadId(N)").
fn thread_number(raw: &str) -> Option<String> {
    let inner = raw.strip_prefix("ThreadId(")?.strip_suffix(')')?;
    if inner.is_empty() || !inner.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(inner.to_string())
}
