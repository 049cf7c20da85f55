//! Per-form submission guard
//!
//! A form holds one guard; while a token is alive further submissions are
//! refused. Dropping the token clears the flag, on success and failure alike.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct SubmissionGuard {
    busy: Rc<Cell<bool>>,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns None if a submission is already in flight
    pub fn try_begin(&self) -> Option<SubmissionToken> {
        if self.busy.replace(true) {
            return None;
        }
        Some(SubmissionToken { busy: self.busy.clone() })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

/// Held for the lifetime of one submission
#[derive(Debug)]
pub struct SubmissionToken {
    busy: Rc<Cell<bool>>,
}

impl Drop for SubmissionToken {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_refused_until_drop() {
        let guard = SubmissionGuard::new();
        let token = guard.try_begin().expect("first begin");
        assert!(guard.is_busy());
        assert!(guard.try_begin().is_none());
        drop(token);
        assert!(!guard.is_busy());
        assert!(guard.try_begin().is_some());
    }

    #[test]
    fn test_clones_share_state() {
        let guard = SubmissionGuard::new();
        let other = guard.clone();
        let _token = guard.try_begin().unwrap();
        assert!(other.is_busy());
        assert!(other.try_begin().is_none());
    }
}
