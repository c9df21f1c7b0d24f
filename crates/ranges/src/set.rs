use crate::MatchRange;

/// Classification of a single byte offset against the current range set.
///
/// Consumed by the rendering collaborator to pick a visual style for each
/// byte of the visible window.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Decoration {
    /// The offset is not covered by any discovered range.
    None,
    /// The offset is the first byte of its covering range.
    Begin,
    /// The offset is strictly inside its covering range.
    Middle,
    /// The offset is the last byte of its covering range.
    End,
}

/// The set of ranges discovered by the most recent scan pass.
///
/// A `RangeSet` is immutable once built. A new scan pass produces a brand
/// new set that replaces the old one outright, so readers never observe a
/// partially updated set. Ranges are not required to be disjoint:
/// signatures of different length or content can overlap, and queries
/// resolve overlap instead of assuming a partition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RangeSet {
    ranges: Vec<MatchRange>,
}

impl RangeSet {
    /// Builds a set from ranges in discovery order.
    ///
    /// Discovery order is significant: it is the tie-break rule used by
    /// [`RangeSet::classify`] when several ranges cover the same byte.
    /// Ranges with `start > end` are silently dropped.
    pub fn new(mut ranges: Vec<MatchRange>) -> RangeSet {
        ranges.retain(|r| r.start <= r.end);
        RangeSet { ranges }
    }

    /// Returns a set containing no ranges.
    ///
    /// This is the state before any scan has run, and the state while
    /// prerequisite data (the byte buffer or the signature list) is still
    /// missing.
    pub fn empty() -> RangeSet {
        RangeSet { ranges: Vec::new() }
    }

    /// Returns all ranges in discovery order.
    pub fn ranges(&self) -> &[MatchRange] {
        &self.ranges
    }

    /// Returns the number of ranges in the set.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns true if the set contains no ranges.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Classifies a single byte offset against the set.
    ///
    /// When several ranges cover the offset, the first one in discovery
    /// order wins and the others are not surfaced; only one range ever
    /// decorates a byte. For a single-byte range (`start == end`) the
    /// begin check takes priority, so the result is `Begin`, never `End`.
    pub fn classify(&self, offset: usize) -> Decoration {
        let range = match self.ranges.iter().find(|r| r.contains(offset)) {
            None => return Decoration::None,
            Some(range) => range,
        };
        if offset == range.start {
            Decoration::Begin
        } else if offset == range.end {
            Decoration::End
        } else {
            Decoration::Middle
        }
    }

    /// Returns every range that fully contains the selection span.
    ///
    /// The selection must lie entirely inside a range for that range to be
    /// reported. A selection spanning two adjacent ranges, or poking past a
    /// range's boundary on either side, matches neither — including the
    /// case of a selection strictly larger than every range, which returns
    /// an empty result even when it covers one completely.
    pub fn find_containing(
        &self,
        sel_start: usize,
        sel_end: usize,
    ) -> Vec<&MatchRange> {
        self.ranges
            .iter()
            .filter(|r| r.contains_span(sel_start, sel_end))
            .collect()
    }
}
