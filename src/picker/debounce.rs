use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingCommit {
    value: String,
    due_at: Instant,
}

/// Trailing-edge debounce for the committed query.
///
/// At most one commit is pending at a time: `schedule` replaces any armed
/// commit with the newest value and a fresh deadline, so a stale wakeup in
/// the event loop finds nothing due. The deadline is plain data; the event
/// loop sleeps until [`Debouncer::deadline`] and then calls
/// [`Debouncer::fire_if_due`].
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<PendingCommit>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Arms (or re-arms) the pending commit with `value`, due after the
    /// quiet period counted from `now`.
    pub fn schedule(&mut self, value: String, now: Instant) {
        self.pending = Some(PendingCommit {
            value,
            due_at: now + self.delay,
        });
    }

    /// Discards any pending commit. Called when a selection supersedes the
    /// typed query and on teardown.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.due_at)
    }

    /// Takes the pending value if its quiet period has elapsed.
    pub fn fire_if_due(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref()?.due_at > now {
            return None;
        }
        self.pending.take().map(|pending| pending.value)
    }
}
