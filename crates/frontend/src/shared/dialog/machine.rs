//! Phase machine behind the dialog coordinator.
//!
//! Pure and synchronous: every honored request returns a [`SettleTicket`]
//! and the caller decides when the transition settles.

use super::payload::{DialogId, DialogPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Visible, but the open transition still holds the lock
    Opening(DialogId),
    Open(DialogId),
    /// Previous dialog already hidden, `DialogId` shows once settled
    Switching(DialogId),
    /// Hidden, data cleared once settled
    Closing,
}

/// Token for one pending transition. Settling a ticket from an older epoch does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTicket {
    epoch: u64,
}

impl SettleTicket {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Snapshot handed to subscribers after each mutation
#[derive(Debug, Clone)]
pub struct DialogSnapshot {
    pub phase: Phase,
    pub active: Option<DialogId>,
    pub is_transitioning: bool,
    pub data: DialogPayload,
    pub data_revision: u64,
}

#[derive(Debug, Default)]
pub struct DialogMachine {
    phase: Phase,
    epoch: u64,
    data: DialogPayload,
    data_revision: u64,
}

impl DialogMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active(&self) -> Option<DialogId> {
        match self.phase {
            Phase::Opening(id) | Phase::Open(id) => Some(id),
            Phase::Idle | Phase::Switching(_) | Phase::Closing => None,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(
            self.phase,
            Phase::Opening(_) | Phase::Switching(_) | Phase::Closing
        )
    }

    pub fn data(&self) -> &DialogPayload {
        &self.data
    }

    /// Bumped on every data write, including the clear after a close
    pub fn data_revision(&self) -> u64 {
        self.data_revision
    }

    pub fn snapshot(&self) -> DialogSnapshot {
        DialogSnapshot {
            phase: self.phase,
            active: self.active(),
            is_transitioning: self.is_transitioning(),
            data: self.data.clone(),
            data_revision: self.data_revision,
        }
    }

    /// `None` when the request is dropped because a transition holds the lock.
    pub fn open(&mut self, id: DialogId) -> Option<SettleTicket> {
        self.phase = match self.phase {
            Phase::Idle => Phase::Opening(id),
            Phase::Open(_) => Phase::Switching(id),
            Phase::Opening(_) | Phase::Switching(_) | Phase::Closing => return None,
        };
        Some(self.issue_ticket())
    }

    /// `None` when the request is dropped because a transition holds the lock.
    ///
    /// Closing from `Idle` is honored so stale data still gets cleared. A dialog
    /// that is still `Opening` can be dismissed; the open ticket goes stale.
    pub fn close(&mut self) -> Option<SettleTicket> {
        match self.phase {
            Phase::Idle | Phase::Opening(_) | Phase::Open(_) => {
                self.phase = Phase::Closing;
                Some(self.issue_ticket())
            }
            Phase::Switching(_) | Phase::Closing => None,
        }
    }

    /// Unconditional overwrite, honored even mid-transition.
    pub fn set_data(&mut self, data: DialogPayload) {
        self.data = data;
        self.data_revision += 1;
    }

    /// Completes the pending transition. Returns `false` for a stale ticket.
    pub fn settle(&mut self, ticket: SettleTicket) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }
        match self.phase {
            Phase::Opening(id) | Phase::Switching(id) => {
                self.phase = Phase::Open(id);
            }
            Phase::Closing => {
                self.phase = Phase::Idle;
                self.data = DialogPayload::Empty;
                self.data_revision += 1;
            }
            Phase::Idle | Phase::Open(_) => return false,
        }
        true
    }

    fn issue_ticket(&mut self) -> SettleTicket {
        self.epoch += 1;
        SettleTicket { epoch: self.epoch }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dialog::payload::fixtures::item;
    use crate::shared::dialog::payload::FormPayload;

    fn open_settled(machine: &mut DialogMachine, id: DialogId) {
        let ticket = machine.open(id).unwrap();
        assert!(machine.settle(ticket));
    }

    #[test]
    fn test_open_from_idle_is_visible_but_locked() {
        let mut machine = DialogMachine::new();
        let ticket = machine.open(DialogId::ItemForm).unwrap();

        assert_eq!(machine.active(), Some(DialogId::ItemForm));
        assert!(machine.is_transitioning());
        assert!(machine.open(DialogId::DeleteConfirmation).is_none());

        assert!(machine.settle(ticket));
        assert_eq!(machine.phase(), Phase::Open(DialogId::ItemForm));
        assert!(!machine.is_transitioning());
    }

    #[test]
    fn test_close_while_opening_is_honored() {
        let mut machine = DialogMachine::new();
        let open = machine.open(DialogId::ItemForm).unwrap();

        let close = machine.close().unwrap();
        assert_eq!(machine.phase(), Phase::Closing);
        assert_eq!(machine.active(), None);

        assert!(!machine.settle(open));
        assert_eq!(machine.phase(), Phase::Closing);
        assert!(machine.settle(close));
        assert_eq!(machine.phase(), Phase::Idle);
    }

    #[test]
    fn test_close_dropped_while_switching() {
        let mut machine = DialogMachine::new();
        open_settled(&mut machine, DialogId::ItemDetail);
        machine.open(DialogId::ItemForm).unwrap();
        assert!(machine.close().is_none());
    }

    #[test]
    fn test_switch_passes_through_none() {
        let mut machine = DialogMachine::new();
        open_settled(&mut machine, DialogId::ItemDetail);

        let ticket = machine.open(DialogId::ItemForm).unwrap();
        assert_eq!(machine.phase(), Phase::Switching(DialogId::ItemForm));
        assert_eq!(machine.active(), None);

        machine.settle(ticket);
        assert_eq!(machine.active(), Some(DialogId::ItemForm));
    }

    #[test]
    fn test_reopening_same_dialog_also_switches() {
        let mut machine = DialogMachine::new();
        open_settled(&mut machine, DialogId::Logout);

        assert!(machine.open(DialogId::Logout).is_some());
        assert_eq!(machine.active(), None);
    }

    #[test]
    fn test_close_keeps_data_until_settled() {
        let mut machine = DialogMachine::new();
        machine.set_data(DialogPayload::ItemDetail(FormPayload::edit(item(42, "Camera"))));
        open_settled(&mut machine, DialogId::ItemDetail);

        let ticket = machine.close().unwrap();
        assert_eq!(machine.active(), None);
        assert!(matches!(
            machine.data(),
            DialogPayload::ItemDetail(p) if p.record.as_ref().map(|i| i.id) == Some(42)
        ));

        machine.settle(ticket);
        assert!(machine.data().is_empty());
        assert_eq!(machine.phase(), Phase::Idle);
    }

    #[test]
    fn test_requests_dropped_while_closing() {
        let mut machine = DialogMachine::new();
        open_settled(&mut machine, DialogId::CategoryForm);
        let ticket = machine.close().unwrap();

        assert!(machine.open(DialogId::CustomerForm).is_none());
        assert!(machine.close().is_none());

        machine.settle(ticket);
        assert!(machine.open(DialogId::CustomerForm).is_some());
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut machine = DialogMachine::new();
        let first = machine.open(DialogId::FineForm).unwrap();
        assert!(machine.settle(first));
        assert!(!machine.settle(first));

        let close = machine.close().unwrap();
        assert!(!machine.settle(first));
        assert_eq!(machine.phase(), Phase::Closing);
        assert!(machine.settle(close));
    }

    #[test]
    fn test_set_data_overwrites_mid_transition() {
        let mut machine = DialogMachine::new();
        machine.open(DialogId::ItemForm).unwrap();
        let before = machine.data_revision();

        machine.set_data(DialogPayload::Item(FormPayload::edit(item(1, "Tenda"))));
        assert_eq!(machine.data_revision(), before + 1);
        assert_eq!(machine.data().target(), Some(DialogId::ItemForm));
    }
}
