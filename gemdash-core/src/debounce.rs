/// Single-slot cancel-and-reschedule handle.
///
/// Holds at most one pending unit of work. Arming while something is
/// pending hands the superseded handle back to the caller, whose drop
/// cancels it when the handle is a live timer. Last arm wins.
#[derive(Debug, Default)]
pub struct DebounceSlot<T> {
    pending: Option<T>,
}

impl<T> DebounceSlot<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Replace the pending handle, returning the superseded one.
    pub fn arm(&mut self, handle: T) -> Option<T> {
        self.pending.replace(handle)
    }

    /// Consume the pending handle, leaving the slot empty.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arm_supersedes_previous_handle() {
        let mut slot = DebounceSlot::new();
        assert_eq!(slot.arm(1), None);
        assert_eq!(slot.arm(2), Some(1));
        assert!(slot.is_armed());
        assert_eq!(slot.take(), Some(2));
        assert!(!slot.is_armed());
        assert_eq!(slot.take(), None);
    }
}
