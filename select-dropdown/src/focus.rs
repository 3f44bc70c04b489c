/// Keyboard-highlighted position in the filtered sequence.
///
/// `None` is "no focus": the value whenever the dropdown is closed or the
/// filtered sequence is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusCursor {
    index: Option<usize>,
}

impl FocusCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// The cursor as a signed index, `-1` meaning no focus.
    pub fn as_signed(&self) -> isize {
        self.index.map_or(-1, |i| i as isize)
    }

    /// Move by `delta` rows, wrapping at both ends.
    ///
    /// With `len == 0` the cursor stays unfocused. An unfocused cursor moves
    /// as if it sat at `-1`, so `+1` lands on the first row.
    pub fn move_by(&mut self, delta: isize, len: usize) -> Option<usize> {
        if len == 0 {
            self.index = None;
            return None;
        }
        let len = len as isize;
        // Reduce first so the sum stays within [-1, 2 * len).
        let next = (self.as_signed() + delta.rem_euclid(len)).rem_euclid(len);
        self.index = Some(next as usize);
        self.index
    }

    /// Focus the first row, or nothing when there are no rows.
    pub fn reset_to(&mut self, len: usize) -> Option<usize> {
        self.index = if len > 0 { Some(0) } else { None };
        self.index
    }

    pub fn clear(&mut self) {
        self.index = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unfocused() {
        let cursor = FocusCursor::new();
        assert_eq!(cursor.index(), None);
        assert_eq!(cursor.as_signed(), -1);
    }

    #[test]
    fn test_reset_to_nonempty_focuses_first() {
        let mut cursor = FocusCursor::new();
        assert_eq!(cursor.reset_to(3), Some(0));
    }

    #[test]
    fn test_reset_to_empty_unfocuses() {
        let mut cursor = FocusCursor::new();
        cursor.reset_to(3);
        assert_eq!(cursor.reset_to(0), None);
    }

    #[test]
    fn test_move_down_wraps_to_first() {
        let mut cursor = FocusCursor::new();
        cursor.reset_to(3);
        cursor.move_by(1, 3);
        cursor.move_by(1, 3);
        assert_eq!(cursor.index(), Some(2));
        assert_eq!(cursor.move_by(1, 3), Some(0));
    }

    #[test]
    fn test_move_up_wraps_to_last() {
        let mut cursor = FocusCursor::new();
        cursor.reset_to(4);
        assert_eq!(cursor.move_by(-1, 4), Some(3));
    }

    #[test]
    fn test_move_with_no_rows_is_noop() {
        let mut cursor = FocusCursor::new();
        assert_eq!(cursor.move_by(1, 0), None);
        assert_eq!(cursor.move_by(-1, 0), None);
    }

    #[test]
    fn test_unfocused_moves_from_minus_one() {
        let mut cursor = FocusCursor::new();
        assert_eq!(cursor.move_by(1, 3), Some(0));
        let mut cursor = FocusCursor::new();
        assert_eq!(cursor.move_by(-1, 3), Some(1));
    }

    #[test]
    fn test_extreme_deltas_wrap_without_overflow() {
        let mut cursor = FocusCursor::new();
        cursor.reset_to(9);
        cursor.move_by(2, 9);
        // isize::MAX = 9 * 1024819115206086200 + 7
        assert_eq!(cursor.move_by(isize::MAX, 9), Some(0));
        assert_eq!(cursor.move_by(isize::MIN, 9), Some(1));

        let mut unfocused = FocusCursor::new();
        assert_eq!(unfocused.move_by(isize::MAX, 9), Some(6));
    }

    #[test]
    fn test_single_row_stays_put() {
        let mut cursor = FocusCursor::new();
        cursor.reset_to(1);
        assert_eq!(cursor.move_by(1, 1), Some(0));
        assert_eq!(cursor.move_by(-1, 1), Some(0));
    }
}
