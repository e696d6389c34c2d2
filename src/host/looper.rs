//! Single-threaded control loop.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

type Task = Box<dyn FnOnce()>;

/// Cooperative task queue standing in for the host's control loop.
///
/// Work posted from a callback runs on a later turn, after the callback
/// stack has fully unwound. Cloning a looper yields another handle to the
/// same queue.
///
/// # Example
///
/// ```rust
/// use viewnav::host::Looper;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let looper = Looper::new();
/// let ran = Rc::new(Cell::new(false));
///
/// let flag = Rc::clone(&ran);
/// looper.post(move || flag.set(true));
/// assert!(!ran.get());
///
/// looper.run_until_idle();
/// assert!(ran.get());
/// ```
#[derive(Clone, Default)]
pub struct Looper {
    queue: Rc<RefCell<VecDeque<Task>>>,
}

impl Looper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` for a later turn.
    pub fn post(&self, task: impl FnOnce() + 'static) {
        self.queue.borrow_mut().push_back(Box::new(task));
    }

    /// Run the tasks queued before this turn began.
    ///
    /// Tasks posted while the turn runs wait for the next one. Returns the
    /// number of tasks executed.
    pub fn run_turn(&self) -> usize {
        let batch = self.queue.borrow().len();
        for _ in 0..batch {
            // Released before running so the task may post again.
            let task = self.queue.borrow_mut().pop_front();
            match task {
                Some(task) => task(),
                None => return batch,
            }
        }
        batch
    }

    /// Run turns until the queue is empty. Returns the total tasks executed.
    pub fn run_until_idle(&self) -> usize {
        let mut total = 0;
        while !self.is_idle() {
            total += self.run_turn();
        }
        total
    }

    /// Tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

impl fmt::Debug for Looper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Looper")
            .field("pending", &self.pending())
            .finish()
    }
}
