// Chunk: docs/chunks/gap_buffer_core - Row/column positions and redraw damage

/// Position in the buffer as (line, column), both 0-indexed.
///
/// Columns count bytes from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Which lines a command changed, reported to the render collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirtyLines {
    /// Nothing visible changed.
    #[default]
    None,
    /// One line changed (typing within a line, cursor moving on a line).
    Single(usize),
    /// Lines `[from, to)` changed.
    Range { from: usize, to: usize },
    /// Every line from this one to the end changed (a split or a join shifts
    /// everything below).
    FromLineToEnd(usize),
}

impl DirtyLines {
    pub fn is_none(&self) -> bool {
        matches!(self, DirtyLines::None)
    }

    /// Returns the first dirty line, if any.
    pub fn start_line(&self) -> Option<usize> {
        match *self {
            DirtyLines::None => None,
            DirtyLines::Single(line) | DirtyLines::FromLineToEnd(line) => Some(line),
            DirtyLines::Range { from, .. } => Some(from),
        }
    }

    /// Returns whether `line` is covered.
    pub fn contains(&self, line: usize) -> bool {
        match *self {
            DirtyLines::None => false,
            DirtyLines::Single(l) => l == line,
            DirtyLines::Range { from, to } => (from..to).contains(&line),
            DirtyLines::FromLineToEnd(from) => line >= from,
        }
    }

    /// Grows `self` to the smallest region covering both `self` and `other`.
    pub fn merge(&mut self, other: DirtyLines) {
        let (a_from, a_to) = match self.bounds() {
            Some(bounds) => bounds,
            None => {
                *self = other;
                return;
            }
        };
        let Some((b_from, b_to)) = other.bounds() else {
            return;
        };

        let from = a_from.min(b_from);
        let to = match (a_to, b_to) {
            (Some(a), Some(b)) => Some(a.max(b)),
            _ => None,
        };
        *self = match to {
            None => DirtyLines::FromLineToEnd(from),
            Some(to) if to == from + 1 => DirtyLines::Single(from),
            Some(to) => DirtyLines::Range { from, to },
        };
    }

    /// Half-open bounds; `None` as upper bound means "to the end".
    fn bounds(&self) -> Option<(usize, Option<usize>)> {
        match *self {
            DirtyLines::None => None,
            DirtyLines::Single(line) => Some((line, Some(line + 1))),
            DirtyLines::Range { from, to } => Some((from, Some(to))),
            DirtyLines::FromLineToEnd(from) => Some((from, None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_orders_by_line_then_col() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 3));
    }

    #[test]
    fn merge_none_is_identity() {
        let mut d = DirtyLines::None;
        d.merge(DirtyLines::Single(5));
        assert_eq!(d, DirtyLines::Single(5));

        d.merge(DirtyLines::None);
        assert_eq!(d, DirtyLines::Single(5));
    }

    #[test]
    fn merge_same_single() {
        let mut d = DirtyLines::Single(3);
        d.merge(DirtyLines::Single(3));
        assert_eq!(d, DirtyLines::Single(3));
    }

    #[test]
    fn merge_distant_singles_in_either_order() {
        let mut d = DirtyLines::Single(10);
        d.merge(DirtyLines::Single(3));
        assert_eq!(d, DirtyLines::Range { from: 3, to: 11 });
    }

    #[test]
    fn merge_single_extends_range() {
        let mut d = DirtyLines::Range { from: 5, to: 10 };
        d.merge(DirtyLines::Single(15));
        assert_eq!(d, DirtyLines::Range { from: 5, to: 16 });
    }

    #[test]
    fn merge_from_line_to_end_absorbs_earlier_start() {
        let mut d = DirtyLines::Range { from: 3, to: 7 };
        d.merge(DirtyLines::FromLineToEnd(5));
        assert_eq!(d, DirtyLines::FromLineToEnd(3));

        let mut d = DirtyLines::FromLineToEnd(5);
        d.merge(DirtyLines::Single(8));
        assert_eq!(d, DirtyLines::FromLineToEnd(5));
    }

    #[test]
    fn contains_respects_bounds() {
        assert!(!DirtyLines::None.contains(0));
        assert!(DirtyLines::Single(2).contains(2));
        assert!(!DirtyLines::Range { from: 1, to: 3 }.contains(3));
        assert!(DirtyLines::FromLineToEnd(4).contains(400));
    }
}
