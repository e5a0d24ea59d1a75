//! Concurrent identity probe.
//!
//! [`probe`] starts a batch of threads, holds them behind a start gate
//! until all of them exist, then lets each call an accessor exactly once
//! and counts how many distinct instances came back. A correct holder
//! always yields one.
//!
//! If a thread cannot be started the gate is aborted instead of opened:
//! the callers already running return without touching the accessor, are
//! joined, and the failure is reported as an error.

use std::collections::HashSet;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;

use cp_core::{ensure, fail, Result};

use crate::holder::Accessor;

/// Upper bound on concurrent callers accepted by [`probe`].
pub const MAX_CALLERS: usize = 4096;

/// Outcome of one probe run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeReport {
    /// Number of threads that called the accessor.
    pub callers: usize,
    /// Number of distinct instance addresses they observed.
    pub distinct_instances: usize,
}

impl ProbeReport {
    /// `true` when every caller saw the same instance.
    pub fn is_singleton(&self) -> bool {
        self.distinct_instances == 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Closed,
    Open,
    Aborted,
}

/// One-shot start signal that, unlike a `Barrier`, can be released without
/// every party arriving.
struct StartGate {
    state: Mutex<GateState>,
    changed: Condvar,
}

impl StartGate {
    fn new() -> Self {
        Self {
            state: Mutex::new(GateState::Closed),
            changed: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GateState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Block until the gate leaves `Closed`; `true` if callers may proceed.
    fn wait(&self) -> bool {
        let mut state = self.lock();
        while *state == GateState::Closed {
            state = self
                .changed
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
        *state == GateState::Open
    }

    fn release(&self, to: GateState) {
        *self.lock() = to;
        self.changed.notify_all();
    }
}

/// Call `accessor` once from each of `callers` threads, all released
/// together, and report how many distinct instances were returned.
///
/// # Errors
/// [`cp_core::Error::Precondition`] if `callers` is zero or above
/// [`MAX_CALLERS`], [`cp_core::Error::Runtime`] if a caller thread could
/// not be started or panicked.
///
/// # Example
/// ```
/// use cp_singleton::{probe, InstanceHolder};
///
/// let holder = InstanceHolder::new(|| vec![0u8; 16]);
/// let report = probe::probe(8, || holder.get_instance()).unwrap();
/// assert!(report.is_singleton());
/// ```
pub fn probe<'a, T, F>(callers: usize, accessor: F) -> Result<ProbeReport>
where
    T: 'a,
    F: Fn() -> &'a T + Sync,
{
    run_callers(callers, accessor, |_| None)
}

// `stack_size` picks an explicit stack size per caller index.
fn run_callers<'a, T, F, S>(callers: usize, accessor: F, stack_size: S) -> Result<ProbeReport>
where
    T: 'a,
    F: Fn() -> &'a T + Sync,
    S: Fn(usize) -> Option<usize>,
{
    ensure!(callers > 0, "a probe needs at least one caller");
    ensure!(
        callers <= MAX_CALLERS,
        "a probe supports at most {MAX_CALLERS} callers, got {callers}"
    );

    let gate = &StartGate::new();
    let accessor = &accessor;
    let addresses = thread::scope(|scope| -> Result<HashSet<usize>> {
        let mut handles = Vec::with_capacity(callers);
        let mut spawn_failure = None;
        for index in 0..callers {
            let mut builder = thread::Builder::new().name(format!("caller-{index}"));
            if let Some(size) = stack_size(index) {
                builder = builder.stack_size(size);
            }
            let spawned = builder.spawn_scoped(scope, move || {
                gate.wait().then(|| accessor() as *const T as usize)
            });
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    spawn_failure = Some((index, err));
                    break;
                }
            }
        }

        if spawn_failure.is_some() {
            gate.release(GateState::Aborted);
        } else {
            gate.release(GateState::Open);
        }

        let mut addresses = HashSet::with_capacity(1);
        let mut panicked = 0usize;
        for handle in handles {
            match handle.join() {
                Ok(Some(address)) => {
                    addresses.insert(address);
                }
                Ok(None) => {}
                Err(_) => panicked += 1,
            }
        }

        if let Some((index, err)) = spawn_failure {
            tracing::warn!(index, callers, error = %err, "could not start caller thread");
            fail!("could not start caller {index} of {callers}: {err}");
        }
        if panicked > 0 {
            fail!("{panicked} caller thread(s) panicked");
        }
        Ok(addresses)
    })?;

    let report = ProbeReport {
        callers,
        distinct_instances: addresses.len(),
    };
    tracing::debug!(
        callers = report.callers,
        distinct_instances = report.distinct_instances,
        "probe finished"
    );
    Ok(report)
}

/// [`probe`] any holder through its [`Accessor`] implementation.
pub fn probe_holder<T, H>(holder: &H, callers: usize) -> Result<ProbeReport>
where
    H: Accessor<T> + Sync,
{
    probe(callers, || holder.get_instance())
}
