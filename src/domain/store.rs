// Page store - Fetch lifecycle state, reducer, and staleness policy
use parking_lot::Mutex;
use serde::Serialize;

/// Observable view state of one dashboard page.
///
/// Updates are whole-object replacements produced by [`reduce`]; after a
/// terminal event exactly one of `data`/`error` is populated and
/// `loading` is false.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageState<T> {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<T>,
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            data: None,
        }
    }
}

/// Fetch lifecycle messages. Each fetch carries the sequence number the
/// store assigned when it started.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent<T> {
    Started { seq: u64 },
    Succeeded { seq: u64, payload: T },
    Failed { seq: u64, message: String },
}

impl<T> FetchEvent<T> {
    pub fn seq(&self) -> u64 {
        match self {
            FetchEvent::Started { seq }
            | FetchEvent::Succeeded { seq, .. }
            | FetchEvent::Failed { seq, .. } => *seq,
        }
    }
}

/// The single state-transition function for every page store.
///
/// `Started` keeps the previous data visible while the fetch is pending;
/// the terminal events replace the whole state.
pub fn reduce<T>(state: PageState<T>, event: FetchEvent<T>) -> PageState<T> {
    match event {
        FetchEvent::Started { .. } => PageState {
            loading: true,
            error: None,
            data: state.data,
        },
        FetchEvent::Succeeded { payload, .. } => PageState {
            loading: false,
            error: None,
            data: Some(payload),
        },
        FetchEvent::Failed { message, .. } => PageState {
            loading: false,
            error: Some(message),
            data: None,
        },
    }
}

/// What to do with a completion event from a superseded fetch.
///
/// The source dashboard never cancelled in-flight requests, so a stale
/// response could overwrite newer state; `LastWriteWins` preserves that
/// behavior and `DropStale` is the opt-in sequencing guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    #[default]
    LastWriteWins,
    DropStale,
}

struct StoreInner<T> {
    state: PageState<T>,
    next_seq: u64,
    newest_started: u64,
}

/// Per-page state holder. One writer (the fetch completion path) per
/// store; the lock is held only across the state swap, never across an
/// await point.
pub struct PageStore<T> {
    inner: Mutex<StoreInner<T>>,
    policy: StalePolicy,
}

impl<T: Clone> PageStore<T> {
    pub fn new(policy: StalePolicy) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                state: PageState::default(),
                next_seq: 0,
                newest_started: 0,
            }),
            policy,
        }
    }

    /// Record the start of a fetch and return its sequence number.
    pub fn begin(&self) -> u64 {
        let mut inner = self.inner.lock();
        inner.next_seq += 1;
        let seq = inner.next_seq;
        inner.newest_started = seq;
        let state = std::mem::take(&mut inner.state);
        inner.state = reduce(state, FetchEvent::Started { seq });
        seq
    }

    /// Apply a terminal event. Under `DropStale` a completion from any
    /// fetch older than the newest started one is discarded.
    pub fn complete(&self, event: FetchEvent<T>) {
        let mut inner = self.inner.lock();
        if self.policy == StalePolicy::DropStale && event.seq() < inner.newest_started {
            tracing::debug!(seq = event.seq(), newest = inner.newest_started, "dropping stale fetch result");
            return;
        }
        let state = std::mem::take(&mut inner.state);
        inner.state = reduce(state, event);
    }

    pub fn snapshot(&self) -> PageState<T> {
        self.inner.lock().state.clone()
    }
}
