/*!
This crate tracks signature matches discovered in a byte buffer.

The scanner records each hit as a [`MatchRange`]: an inclusive byte span in
file-global coordinates, tagged with the matched bytes and a human-readable
label. A [`RangeSet`] holds the hits of the most recent scan pass and
answers the two queries the viewer needs: classifying a single byte offset
(is it the begin, middle or end of a highlighted region?) and finding the
ranges that fully contain a selection span.

A `RangeSet` is replaced, never mutated: every scan pass builds a fresh set
reflecting exactly the window that was scanned. Bytes outside that window
are absent from the set even if they would also match — rescanning only the
visible window is the deliberate performance trade-off of the viewer.

# Example

```rust
use sigscope_ranges::{Decoration, MatchRange, RangeSet};

// One four-byte hit at offsets 2..=5.
let set = RangeSet::new(vec![MatchRange::new(
    2,
    5,
    vec![0xB8, 0xB5, 0xF5, 0xE4],
    "PlugSet 3837243320",
)]);

assert_eq!(set.classify(2), Decoration::Begin);
assert_eq!(set.classify(3), Decoration::Middle);
assert_eq!(set.classify(5), Decoration::End);
assert_eq!(set.classify(6), Decoration::None);

// The selection must sit entirely inside a range to report it.
assert_eq!(set.find_containing(2, 5).len(), 1);
assert!(set.find_containing(2, 6).is_empty());
```
*/

mod range;
mod set;

pub use range::MatchRange;
pub use set::{Decoration, RangeSet};

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: usize, end: usize, label: &str) -> MatchRange {
        MatchRange::new(start, end, vec![0xAA; end - start + 1], label)
    }

    #[test]
    fn test_range_contains_boundaries() {
        let r = range(100, 200, "r");

        assert!(!r.contains(99));
        assert!(r.contains(100));
        assert!(r.contains(150));
        assert!(r.contains(200));
        assert!(!r.contains(201));
    }

    #[test]
    fn test_range_len() {
        assert_eq!(range(100, 200, "r").len(), 101);
        assert_eq!(range(0, 0, "r").len(), 1);
        assert_eq!(range(10, 13, "r").len(), 4);
    }

    #[test]
    fn test_range_display() {
        let r = range(2, 5, "PlugSet 1234");
        assert_eq!(r.to_string(), "PlugSet 1234 @ 0x2..0x5");
    }

    #[test]
    fn test_invalid_ranges_are_dropped() {
        let set = RangeSet::new(vec![
            range(0, 3, "ok"),
            MatchRange::new(10, 5, vec![0xAA], "backwards"),
            range(20, 23, "ok too"),
        ]);

        assert_eq!(set.len(), 2);
        assert_eq!(set.ranges()[0].start, 0);
        assert_eq!(set.ranges()[1].start, 20);
    }

    #[test]
    fn test_classify_no_match() {
        let set = RangeSet::new(vec![range(10, 20, "r")]);

        assert_eq!(set.classify(0), Decoration::None);
        assert_eq!(set.classify(9), Decoration::None);
        assert_eq!(set.classify(21), Decoration::None);
        assert_eq!(RangeSet::empty().classify(10), Decoration::None);
    }

    #[test]
    fn test_classify_boundaries() {
        let set = RangeSet::new(vec![range(10, 20, "r")]);

        assert_eq!(set.classify(10), Decoration::Begin);
        assert_eq!(set.classify(11), Decoration::Middle);
        assert_eq!(set.classify(19), Decoration::Middle);
        assert_eq!(set.classify(20), Decoration::End);
    }

    #[test]
    fn test_classify_single_byte_range_is_begin() {
        // Begin takes priority over End when both bounds coincide.
        let set = RangeSet::new(vec![range(5, 5, "r")]);

        assert_eq!(set.classify(5), Decoration::Begin);
    }

    #[test]
    fn test_classify_overlap_first_discovered_wins() {
        // Two overlapping ranges: the byte at 12 is the *end* of the first
        // range and the *middle* of the second. Discovery order breaks the
        // tie, so the first range's view wins.
        let set = RangeSet::new(vec![range(8, 12, "first"), range(10, 15, "second")]);

        assert_eq!(set.classify(12), Decoration::End);
        // 13 is only covered by the second range.
        assert_eq!(set.classify(13), Decoration::Middle);
        assert_eq!(set.classify(10), Decoration::Middle);
    }

    #[test]
    fn test_discovery_order_is_preserved() {
        let set = RangeSet::new(vec![
            range(200, 210, "late"),
            range(0, 10, "early"),
            range(100, 110, "mid"),
        ]);

        let labels: Vec<&str> =
            set.ranges().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["late", "early", "mid"]);
    }

    #[test]
    fn test_find_containing_exact_and_inner() {
        let set = RangeSet::new(vec![range(10, 20, "r")]);

        assert_eq!(set.find_containing(10, 20).len(), 1);
        assert_eq!(set.find_containing(12, 18).len(), 1);
        assert_eq!(set.find_containing(15, 15).len(), 1);
    }

    #[test]
    fn test_find_containing_is_asymmetric() {
        let set = RangeSet::new(vec![range(10, 20, "r")]);

        // Poking past either boundary disqualifies the range, as does a
        // selection that covers the range entirely.
        assert!(set.find_containing(5, 20).is_empty());
        assert!(set.find_containing(10, 25).is_empty());
        assert!(set.find_containing(5, 25).is_empty());
    }

    #[test]
    fn test_find_containing_reports_all_overlapping_containers() {
        // Unlike classify, containment reports every qualifying range.
        let set = RangeSet::new(vec![range(0, 100, "outer"), range(40, 60, "inner")]);

        let hits = set.find_containing(45, 55);
        assert_eq!(hits.len(), 2);

        let hits = set.find_containing(20, 30);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].label, "outer");
    }

    #[test]
    fn test_empty_set() {
        let set = RangeSet::empty();

        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.find_containing(0, 100).is_empty());
    }
}
