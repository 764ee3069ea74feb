use std::cell::Cell;
use std::rc::Rc;

use crate::{Host, Result};

/// Work a host runs later, against itself.
pub type Task = Box<dyn FnOnce(&mut dyn Host) -> Result<()>>;

/// Handle to a task scheduled with [`Host::defer`].
///
/// Creating a handle inside [`Scope::run`](crate::Scope::run) ties it to that
/// scope: disposing the scope cancels the task if it has not fired yet.
#[derive(Clone, Debug, Default)]
pub struct Deferred {
    cancelled: Rc<Cell<bool>>,
    fired: Rc<Cell<bool>>,
}

impl Deferred {
    pub fn new() -> Self {
        let handle = Self::default();
        if let Some(scope) = crate::scope::current_scope() {
            let h = handle.clone();
            scope.add_disposer(move || h.cancel());
        }
        handle
    }

    /// No-op once the task has fired or was already cancelled.
    pub fn cancel(&self) {
        if !self.fired.get() && !self.cancelled.replace(true) {
            log::trace!("deferred task cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    pub fn is_pending(&self) -> bool {
        !self.fired.get() && !self.cancelled.get()
    }

    /// Wraps `task` so it is skipped if this handle was cancelled first.
    pub fn guard(&self, task: Task) -> Task {
        let cancelled = self.cancelled.clone();
        let fired = self.fired.clone();
        Box::new(move |host| {
            if cancelled.get() {
                return Ok(());
            }
            fired.set(true);
            task(host)
        })
    }
}
