//! Contiguous identifier sequences.

use crate::error::GeneratorError;

/// Hands out consecutive ids starting from a fixed value.
///
/// The sequence is a plain value threaded through a generation loop, so the
/// caller always knows which id comes next and no state outlives the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Return the current id and advance.
    ///
    /// Fails instead of wrapping once the id space is used up, so emitted ids
    /// stay contiguous.
    pub fn next_id(&mut self) -> Result<u64, GeneratorError> {
        let id = self.next;
        self.next = id
            .checked_add(1)
            .ok_or(GeneratorError::SequenceExhausted { last: id })?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_contiguous() {
        let mut ids = IdSequence::starting_at(1000);
        let drawn: Vec<u64> = (0..5).map(|_| ids.next_id().unwrap()).collect();

        assert_eq!(drawn, vec![1000, 1001, 1002, 1003, 1004]);
        assert_eq!(ids.next_id().unwrap(), 1005);
    }

    #[test]
    fn test_copy_does_not_share_state() {
        let mut ids = IdSequence::starting_at(1);
        let mut snapshot = ids;
        ids.next_id().unwrap();

        assert_eq!(snapshot.next_id().unwrap(), 1);
        assert_eq!(ids.next_id().unwrap(), 2);
    }

    #[test]
    fn test_exhausted_sequence_is_an_error() {
        let mut ids = IdSequence::starting_at(u64::MAX - 1);

        assert_eq!(ids.next_id().unwrap(), u64::MAX - 1);
        assert!(matches!(
            ids.next_id(),
            Err(GeneratorError::SequenceExhausted { last }) if last == u64::MAX
        ));
    }
}
