//! Minimum-spacing filter for switch edges.

/// Accepts an edge only when it lands at least `window_ms` after the last
/// accepted one. Contact bounce shows up as a burst of edges inside the
/// window; the first edge wins and the rest are dropped.
pub struct Debounce {
    window_ms: u64,
    last_ms: Option<u64>,
}

impl Debounce {
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_ms: None,
        }
    }

    /// Report an edge seen at `now_ms` (monotonic). Returns whether it
    /// should be acted on.
    pub fn accept(&mut self, now_ms: u64) -> bool {
        match self.last_ms {
            Some(last) if now_ms.wrapping_sub(last) < self.window_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_edge_is_accepted() {
        let mut filter = Debounce::new(50);
        assert!(filter.accept(0));
    }

    #[test]
    fn bounce_inside_the_window_is_dropped() {
        let mut filter = Debounce::new(50);
        assert!(filter.accept(100));
        assert!(!filter.accept(101));
        assert!(!filter.accept(149));
        assert!(filter.accept(150));
    }

    #[test]
    fn window_restarts_from_the_accepted_edge_not_the_bounce() {
        let mut filter = Debounce::new(50);
        assert!(filter.accept(100));
        assert!(!filter.accept(140));
        // 160 is 60ms after the accepted edge at 100, not 20ms after 140.
        assert!(filter.accept(160));
    }

    #[test]
    fn spaced_edges_each_toggle_once() {
        let mut filter = Debounce::new(50);
        let accepted = [0u64, 80, 160, 240]
            .iter()
            .filter(|&&t| filter.accept(t))
            .count();
        assert_eq!(accepted, 4);
    }
}
