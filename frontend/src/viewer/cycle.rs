//! Wrap-around index arithmetic over a fixed, non-empty collection.

use crate::error::ViewerError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Index after `current`, wrapping from the last item to the first.
pub fn next(current: usize, len: usize) -> Result<usize, ViewerError> {
    step(current, len, Direction::Next)
}

/// Index before `current`, wrapping from the first item to the last.
pub fn previous(current: usize, len: usize) -> Result<usize, ViewerError> {
    step(current, len, Direction::Previous)
}

pub fn step(current: usize, len: usize, direction: Direction) -> Result<usize, ViewerError> {
    if len == 0 {
        return Err(ViewerError::InvalidState("cannot cycle an empty collection"));
    }
    if current >= len {
        return Err(ViewerError::IndexOutOfRange { index: current, len });
    }
    Ok(match direction {
        Direction::Next => (current + 1) % len,
        Direction::Previous => (current + len - 1) % len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_both_ends() {
        assert_eq!(next(4, 5), Ok(0));
        assert_eq!(previous(0, 5), Ok(4));
        assert_eq!(next(1, 5), Ok(2));
        assert_eq!(previous(3, 5), Ok(2));
    }

    #[test]
    fn next_and_previous_are_inverse() {
        for len in 1..=12 {
            for i in 0..len {
                let forward = next(i, len).unwrap();
                let back = previous(i, len).unwrap();
                assert!(forward < len && back < len);
                assert_eq!(previous(forward, len), Ok(i));
                assert_eq!(next(back, len), Ok(i));
            }
        }
    }

    #[test]
    fn single_item_cycles_onto_itself() {
        assert_eq!(next(0, 1), Ok(0));
        assert_eq!(previous(0, 1), Ok(0));
    }

    #[test]
    fn empty_collection_is_invalid_state() {
        assert!(matches!(next(0, 0), Err(ViewerError::InvalidState(_))));
        assert!(matches!(previous(0, 0), Err(ViewerError::InvalidState(_))));
    }

    #[test]
    fn out_of_range_start_is_rejected() {
        assert_eq!(
            step(5, 5, Direction::Next),
            Err(ViewerError::IndexOutOfRange { index: 5, len: 5 })
        );
    }
}
