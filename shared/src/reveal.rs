//! reveal-on-scroll helpers: stagger delays and the one-shot latch

use std::collections::HashSet;
use std::hash::Hash;

/// css `transition-delay` for the `index`-th child of a stagger container
///
/// computed in tenths so the output never carries float noise (`0.3s`).
pub fn stagger_delay(index: usize, step_tenths: u32) -> String {
    let tenths = index as u64 * step_tenths as u64;
    if tenths % 10 == 0 {
        format!("{}s", tenths / 10)
    } else {
        format!("{}.{}s", tenths / 10, tenths % 10)
    }
}

/// remembers which elements already fired
///
/// the browser unobserves an element after its first intersection, but a
/// single observer batch can still carry several entries for it.
#[derive(Debug)]
pub struct OneShot<K> {
    fired: HashSet<K>,
}

impl<K: Eq + Hash> OneShot<K> {
    pub fn new() -> Self {
        Self { fired: HashSet::new() }
    }

    /// true exactly once per key
    pub fn fire(&mut self, key: K) -> bool {
        self.fired.insert(key)
    }

    pub fn has_fired(&self, key: &K) -> bool {
        self.fired.contains(key)
    }

    pub fn len(&self) -> usize {
        self.fired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }
}

impl<K: Eq + Hash> Default for OneShot<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_formatting() {
        assert_eq!(stagger_delay(0, 1), "0s");
        assert_eq!(stagger_delay(1, 1), "0.1s");
        assert_eq!(stagger_delay(3, 1), "0.3s");
        assert_eq!(stagger_delay(10, 1), "1s");
        assert_eq!(stagger_delay(12, 1), "1.2s");
    }

    #[test]
    fn test_stagger_delay_custom_step() {
        assert_eq!(stagger_delay(2, 2), "0.4s");
        assert_eq!(stagger_delay(5, 2), "1s");
    }

    #[test]
    fn test_one_shot_fires_once() {
        let mut latch = OneShot::new();
        assert!(latch.fire(7u32));
        assert!(!latch.fire(7));
        assert!(!latch.fire(7));
        assert!(latch.has_fired(&7));
        assert_eq!(latch.len(), 1);
    }

    #[test]
    fn test_one_shot_independent_keys() {
        let mut latch = OneShot::default();
        let fired: Vec<bool> = [1, 2, 1, 3, 2].iter().map(|k| latch.fire(*k)).collect();
        assert_eq!(fired, vec![true, true, false, true, false]);
        assert!(!latch.has_fired(&4));
    }
}
