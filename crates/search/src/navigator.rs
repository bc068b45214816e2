/// Wraparound cursor over a fixed-size match list.
///
/// Holds indices only; the match list itself lives with whoever ran the
/// search. Both directions wrap modularly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    total: usize,
    index: usize,
}

impl Navigator {
    pub fn new(total: usize) -> Self {
        Self { total, index: 0 }
    }

    pub fn current(&self) -> Option<usize> {
        if self.total == 0 {
            None
        } else {
            Some(self.index)
        }
    }

    pub fn next(&mut self) -> Option<usize> {
        if self.total == 0 {
            return None;
        }
        self.index = (self.index + 1) % self.total;
        Some(self.index)
    }

    pub fn prev(&mut self) -> Option<usize> {
        if self.total == 0 {
            return None;
        }
        self.index = (self.index + self.total - 1) % self.total;
        Some(self.index)
    }

    /// 1-based position for "match i of n" display; 0 when there are no
    /// matches.
    pub fn position(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.index + 1
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_past_the_end() {
        let mut nav = Navigator::new(3);
        assert_eq!(nav.current(), Some(0));
        assert_eq!(nav.next(), Some(1));
        assert_eq!(nav.next(), Some(2));
        assert_eq!(nav.next(), Some(0));
    }

    #[test]
    fn prev_wraps_before_the_start() {
        let mut nav = Navigator::new(3);
        assert_eq!(nav.prev(), Some(2));
        assert_eq!(nav.prev(), Some(1));
    }

    #[test]
    fn empty_list_never_yields_a_position() {
        let mut nav = Navigator::new(0);
        assert_eq!(nav.current(), None);
        assert_eq!(nav.next(), None);
        assert_eq!(nav.prev(), None);
        assert_eq!(nav.position(), 0);
    }

    #[test]
    fn position_and_total_are_display_ready() {
        let mut nav = Navigator::new(2);
        assert_eq!((nav.position(), nav.total()), (1, 2));
        nav.next();
        assert_eq!((nav.position(), nav.total()), (2, 2));
    }
}
