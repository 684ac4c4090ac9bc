use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use super::machine::{DialogMachine, DialogSnapshot, SettleTicket};
use super::payload::{DialogId, DialogPayload};
use super::scheduler::Scheduler;
use super::{CLEANUP_DELAY, SETTLE_DELAY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogTiming {
    pub settle: Duration,
    pub cleanup: Duration,
}

impl Default for DialogTiming {
    fn default() -> Self {
        Self {
            settle: SETTLE_DELAY,
            cleanup: CLEANUP_DELAY,
        }
    }
}

type Subscriber = Rc<dyn Fn(&DialogSnapshot)>;
type IdleHook = Rc<dyn Fn()>;

#[derive(Default)]
struct Shared {
    machine: RefCell<DialogMachine>,
    subscribers: RefCell<Vec<Subscriber>>,
    idle_hook: RefCell<Option<IdleHook>>,
    idle_generation: Cell<u64>,
    disposed: Cell<bool>,
}

/// Single writer for dialog state.
///
/// Drives [`DialogMachine`] with timers from `S`, publishes a snapshot to
/// subscribers after every mutation and runs the idle hook once no dialog
/// has been active for `timing.cleanup`.
pub struct Coordinator<S: Scheduler> {
    shared: Rc<Shared>,
    scheduler: S,
    timing: DialogTiming,
}

impl<S: Scheduler + Clone> Clone for Coordinator<S> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
            scheduler: self.scheduler.clone(),
            timing: self.timing,
        }
    }
}

impl<S: Scheduler + Clone + 'static> Coordinator<S> {
    pub fn new(scheduler: S) -> Self {
        Self::with_timing(scheduler, DialogTiming::default())
    }

    pub fn with_timing(scheduler: S, timing: DialogTiming) -> Self {
        Self {
            shared: Rc::new(Shared::default()),
            scheduler,
            timing,
        }
    }

    pub fn snapshot(&self) -> DialogSnapshot {
        self.shared.machine.borrow().snapshot()
    }

    pub fn active(&self) -> Option<DialogId> {
        self.shared.machine.borrow().active()
    }

    pub fn is_transitioning(&self) -> bool {
        self.shared.machine.borrow().is_transitioning()
    }

    pub fn data(&self) -> DialogPayload {
        self.shared.machine.borrow().data().clone()
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.disposed.get()
    }

    /// Called synchronously after every state change
    pub fn subscribe(&self, subscriber: impl Fn(&DialogSnapshot) + 'static) {
        self.shared
            .subscribers
            .borrow_mut()
            .push(Rc::new(subscriber));
    }

    /// Hook run when the coordinator has been idle for the cleanup delay, and once on teardown
    pub fn on_idle(&self, hook: impl Fn() + 'static) {
        *self.shared.idle_hook.borrow_mut() = Some(Rc::new(hook));
    }

    pub fn set_data(&self, data: DialogPayload) {
        if self.is_disposed() {
            return;
        }
        self.shared.machine.borrow_mut().set_data(data);
        self.notify();
    }

    /// Shows `id`, closing the current dialog first. Returns `false` if dropped.
    pub fn open(&self, id: DialogId) -> bool {
        if self.is_disposed() {
            return false;
        }
        let (ticket, was_active) = {
            let mut machine = self.shared.machine.borrow_mut();
            let was_active = machine.active().is_some();
            (machine.open(id), was_active)
        };
        let Some(ticket) = ticket else {
            log::debug!("dialog: open({}) dropped, transition in progress", id);
            return false;
        };
        self.notify();
        self.schedule_settle(ticket);
        if was_active {
            self.schedule_idle_cleanup();
        }
        true
    }

    /// Hides the active dialog; data is cleared once the transition settles.
    /// Returns `false` if dropped.
    pub fn close(&self) -> bool {
        if self.is_disposed() {
            return false;
        }
        let ticket = self.shared.machine.borrow_mut().close();
        let Some(ticket) = ticket else {
            log::debug!("dialog: close() dropped, transition in progress");
            return false;
        };
        self.notify();
        self.schedule_settle(ticket);
        self.schedule_idle_cleanup();
        true
    }

    /// Stops reacting to timers and runs the idle hook one last time
    pub fn teardown(&self) {
        if self.shared.disposed.replace(true) {
            return;
        }
        self.run_idle_hook();
        self.shared.subscribers.borrow_mut().clear();
    }

    fn settle(&self, ticket: SettleTicket) {
        if self.is_disposed() {
            return;
        }
        let settled = self.shared.machine.borrow_mut().settle(ticket);
        if settled {
            self.notify();
        }
    }

    fn schedule_settle(&self, ticket: SettleTicket) {
        let this = self.clone();
        self.scheduler
            .schedule(self.timing.settle, Box::new(move || this.settle(ticket)));
    }

    fn schedule_idle_cleanup(&self) {
        let generation = self.shared.idle_generation.get() + 1;
        self.shared.idle_generation.set(generation);

        let this = self.clone();
        self.scheduler.schedule(
            self.timing.cleanup,
            Box::new(move || {
                let current = this.shared.idle_generation.get() == generation;
                if current && !this.is_disposed() && this.active().is_none() {
                    this.run_idle_hook();
                }
            }),
        );
    }

    fn run_idle_hook(&self) {
        let hook = self.shared.idle_hook.borrow().clone();
        if let Some(hook) = hook {
            hook();
        }
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        let subscribers = self.shared.subscribers.borrow().clone();
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dialog::payload::fixtures::item;
    use crate::shared::dialog::payload::FormPayload;
    use crate::shared::dialog::scheduler::VirtualScheduler;

    const SETTLE: Duration = Duration::from_millis(300);

    struct Harness {
        scheduler: VirtualScheduler,
        coordinator: Coordinator<VirtualScheduler>,
        frames: Rc<RefCell<Vec<DialogSnapshot>>>,
        idle_runs: Rc<Cell<usize>>,
    }

    fn harness() -> Harness {
        let scheduler = VirtualScheduler::new();
        let coordinator = Coordinator::new(scheduler.clone());

        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = frames.clone();
        coordinator.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));

        let idle_runs = Rc::new(Cell::new(0));
        let counter = idle_runs.clone();
        coordinator.on_idle(move || counter.set(counter.get() + 1));

        Harness {
            scheduler,
            coordinator,
            frames,
            idle_runs,
        }
    }

    fn camera_form() -> DialogPayload {
        DialogPayload::Item(FormPayload::edit(item(42, "Camera")))
    }

    #[test]
    fn test_locked_open_is_dropped_then_fresh_open_succeeds() {
        let h = harness();
        h.coordinator.set_data(camera_form());
        assert!(h.coordinator.open(DialogId::ItemForm));

        h.scheduler.advance(Duration::from_millis(100));
        assert!(!h.coordinator.open(DialogId::DeleteConfirmation));
        assert_eq!(h.coordinator.active(), Some(DialogId::ItemForm));

        h.scheduler.advance(Duration::from_millis(200));
        assert!(!h.coordinator.is_transitioning());

        assert!(h.coordinator.open(DialogId::DeleteConfirmation));
        assert_eq!(h.coordinator.active(), None);
        h.scheduler.advance(SETTLE);
        assert_eq!(h.coordinator.active(), Some(DialogId::DeleteConfirmation));
    }

    #[test]
    fn test_switching_never_shows_two_dialogs() {
        let h = harness();
        h.coordinator.open(DialogId::ItemDetail);
        h.scheduler.advance(SETTLE);
        h.frames.borrow_mut().clear();

        h.coordinator.open(DialogId::ItemForm);
        h.scheduler.advance(SETTLE);

        let actives: Vec<_> = h.frames.borrow().iter().map(|f| f.active).collect();
        assert_eq!(actives, vec![None, Some(DialogId::ItemForm)]);
    }

    #[test]
    fn test_data_is_published_before_open() {
        let h = harness();
        h.coordinator.set_data(camera_form());
        h.coordinator.open(DialogId::ItemForm);

        let frames = h.frames.borrow();
        let first_active = frames
            .iter()
            .find(|f| f.active == Some(DialogId::ItemForm))
            .unwrap();
        assert_eq!(first_active.data.target(), Some(DialogId::ItemForm));
        assert!(frames[0].active.is_none());
        assert!(!frames[0].data.is_empty());
    }

    #[test]
    fn test_close_retains_data_during_exit_window() {
        let h = harness();
        h.coordinator.set_data(camera_form());
        h.coordinator.open(DialogId::ItemForm);
        h.scheduler.advance(SETTLE);

        assert!(h.coordinator.close());
        assert_eq!(h.coordinator.active(), None);
        h.scheduler.advance(Duration::from_millis(299));
        assert!(!h.coordinator.data().is_empty());
        assert!(!h.coordinator.close());

        h.scheduler.advance(Duration::from_millis(1));
        assert!(h.coordinator.data().is_empty());
        assert!(!h.coordinator.is_transitioning());
    }

    #[test]
    fn test_close_during_opening_dismisses_dialog() {
        let h = harness();
        h.coordinator.set_data(camera_form());
        assert!(h.coordinator.open(DialogId::ItemForm));

        h.scheduler.advance(Duration::from_millis(50));
        assert!(h.coordinator.close());
        assert_eq!(h.coordinator.active(), None);

        // The open timer fires first and must not bring the dialog back.
        h.scheduler.advance(Duration::from_millis(250));
        assert_eq!(h.coordinator.active(), None);
        assert!(h.coordinator.is_transitioning());

        h.scheduler.advance(Duration::from_millis(50));
        assert!(h.coordinator.data().is_empty());
        assert!(!h.coordinator.is_transitioning());
        assert_eq!(h.idle_runs.get(), 1);
    }

    #[test]
    fn test_rapid_double_open_only_first_wins() {
        let h = harness();
        assert!(h.coordinator.open(DialogId::CategoryForm));
        assert!(!h.coordinator.open(DialogId::CustomerForm));
        h.scheduler.advance(SETTLE);
        assert_eq!(h.coordinator.active(), Some(DialogId::CategoryForm));
    }

    #[test]
    fn test_idle_hook_runs_after_close_only_when_nothing_is_active() {
        let h = harness();
        h.coordinator.open(DialogId::ItemDetail);
        h.scheduler.advance(SETTLE);

        h.coordinator.open(DialogId::ItemForm);
        h.scheduler.advance(SETTLE);
        assert_eq!(h.idle_runs.get(), 0);

        h.coordinator.close();
        h.scheduler.advance(SETTLE);
        assert_eq!(h.idle_runs.get(), 1);
    }

    #[test]
    fn test_teardown_disarms_pending_timers() {
        let h = harness();
        h.coordinator.set_data(camera_form());
        h.coordinator.open(DialogId::ItemForm);
        h.scheduler.advance(SETTLE);
        h.coordinator.close();

        h.coordinator.teardown();
        assert_eq!(h.idle_runs.get(), 1);

        h.scheduler.run_until_idle();
        assert_eq!(h.idle_runs.get(), 1);
        assert!(h.coordinator.is_transitioning());
        assert!(!h.coordinator.open(DialogId::Logout));

        h.coordinator.teardown();
        assert_eq!(h.idle_runs.get(), 1);
    }

    #[test]
    fn test_set_data_during_transition_is_kept() {
        let h = harness();
        h.coordinator.open(DialogId::ItemDetail);
        h.coordinator.set_data(DialogPayload::ItemDetail(FormPayload::edit(item(5, "Tenda"))));
        h.scheduler.advance(SETTLE);

        assert!(matches!(
            h.coordinator.data(),
            DialogPayload::ItemDetail(p) if p.record.as_ref().map(|i| i.id) == Some(5)
        ));
    }
}
