use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;

pub type Task = Box<dyn FnOnce()>;

/// Runs a task once after a delay. Scheduled tasks cannot be cancelled.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task);
}

/// Browser timers (`setTimeout` through gloo-timers)
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            task();
        });
    }
}

struct PendingTask {
    deadline: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct VirtualClock {
    now: Duration,
    next_seq: u64,
    pending: Vec<PendingTask>,
}

/// Deterministic clock for tests.
///
/// Time moves only through [`VirtualScheduler::advance`]; tasks with equal
/// deadlines run in the order they were scheduled.
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    clock: Rc<RefCell<VirtualClock>>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Moves time forward, running every task that falls due, including ones
    /// scheduled by tasks run during this call.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        while let Some(task) = self.pop_due(target) {
            task();
        }
        self.clock.borrow_mut().now = target;
    }

    /// Runs everything still pending, however far in the future
    pub fn run_until_idle(&self) {
        loop {
            let next = {
                let clock = self.clock.borrow();
                clock.pending.iter().map(|p| p.deadline).min()
            };
            match next {
                Some(deadline) => {
                    let by = deadline.saturating_sub(self.now());
                    self.advance(by);
                }
                None => break,
            }
        }
    }

    fn pop_due(&self, target: Duration) -> Option<Task> {
        let mut clock = self.clock.borrow_mut();
        let index = clock
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.deadline <= target)
            .min_by_key(|(_, p)| (p.deadline, p.seq))
            .map(|(i, _)| i)?;
        let due = clock.pending.swap_remove(index);
        clock.now = due.deadline;
        Some(due.task)
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut clock = self.clock.borrow_mut();
        let seq = clock.next_seq;
        clock.next_seq += 1;
        let deadline = clock.now + delay;
        clock.pending.push(PendingTask {
            deadline,
            seq,
            task,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let make = {
            let log = log.clone();
            move |name: &'static str| -> Task {
                let log = log.clone();
                Box::new(move || log.borrow_mut().push(name))
            }
        };
        (log, make)
    }

    #[test]
    fn test_runs_only_due_tasks() {
        let scheduler = VirtualScheduler::new();
        let (log, task) = recorder();

        scheduler.schedule(Duration::from_millis(300), task("late"));
        scheduler.schedule(Duration::from_millis(100), task("early"));

        scheduler.advance(Duration::from_millis(150));
        assert_eq!(*log.borrow(), vec!["early"]);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.now(), Duration::from_millis(150));

        scheduler.advance(Duration::from_millis(150));
        assert_eq!(*log.borrow(), vec!["early", "late"]);
    }

    #[test]
    fn test_equal_deadlines_are_fifo() {
        let scheduler = VirtualScheduler::new();
        let (log, task) = recorder();

        scheduler.schedule(Duration::from_millis(300), task("settle"));
        scheduler.schedule(Duration::from_millis(300), task("cleanup"));
        scheduler.advance(Duration::from_millis(300));

        assert_eq!(*log.borrow(), vec!["settle", "cleanup"]);
    }

    #[test]
    fn test_tasks_scheduled_while_advancing() {
        let scheduler = VirtualScheduler::new();
        let (log, task) = recorder();

        let inner = scheduler.clone();
        let follow_up = task("follow-up");
        scheduler.schedule(
            Duration::from_millis(100),
            Box::new(move || inner.schedule(Duration::from_millis(100), follow_up)),
        );

        scheduler.advance(Duration::from_millis(250));
        assert_eq!(*log.borrow(), vec!["follow-up"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_run_until_idle() {
        let scheduler = VirtualScheduler::new();
        let (log, task) = recorder();

        scheduler.schedule(Duration::from_secs(4), task("toast"));
        scheduler.run_until_idle();

        assert_eq!(*log.borrow(), vec!["toast"]);
        assert_eq!(scheduler.now(), Duration::from_secs(4));
    }
}
