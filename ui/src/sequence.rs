//! Ordering for overlapping fetches.
//!
//! A hook may start a new fetch while an older one is still in flight
//! (deps changed, the user paged again, a manual refetch). Completions
//! must not race: only the newest call may write state. `FetchSequence`
//! hands out a ticket to each fetch as it starts and lets a completion
//! check whether its ticket is still the newest.

use std::cell::RefCell;

#[derive(Debug, Default)]
pub struct FetchSequence {
    current: RefCell<u64>,
}

impl FetchSequence {
    /// Claim a ticket for a fetch that is about to go out. Supersedes
    /// every ticket claimed before it.
    pub fn begin(&self) -> u64 {
        let mut current = self.current.borrow_mut();
        *current += 1;
        *current
    }

    /// Whether the holder of `ticket` may apply its result. False means
    /// a newer fetch has started since; the completion must be dropped.
    pub fn should_apply(&self, ticket: u64) -> bool {
        *self.current.borrow() == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sole_fetch_applies() {
        let seq = FetchSequence::default();
        let ticket = seq.begin();
        assert!(seq.should_apply(ticket));
    }

    #[test]
    fn stale_completion_is_discarded() {
        // An older fetch completing after a newer one started loses,
        // even though it finishes last.
        let seq = FetchSequence::default();
        let older = seq.begin();
        let newer = seq.begin();

        let mut data = None;
        if seq.should_apply(newer) {
            data = Some("newer");
        }
        if seq.should_apply(older) {
            data = Some("older");
        }
        assert_eq!(data, Some("newer"));
    }

    #[test]
    fn sequential_fetches_each_apply() {
        let seq = FetchSequence::default();
        for _ in 0..3 {
            let ticket = seq.begin();
            assert!(seq.should_apply(ticket));
        }
    }

    #[test]
    fn refetching_the_same_payload_is_idempotent() {
        // Two refetches that both succeed with the same body leave the
        // stored data exactly as after the first.
        let seq = FetchSequence::default();
        let mut data = None;
        for _ in 0..2 {
            let ticket = seq.begin();
            if seq.should_apply(ticket) {
                data = Some(vec!["42", "43"]);
            }
        }
        assert_eq!(data, Some(vec!["42", "43"]));
    }
}
