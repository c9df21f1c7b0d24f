use std::fmt;

/// A single discovered occurrence of a signature, in file-global coordinates.
///
/// Both bounds are inclusive: a match of an `n`-byte signature at offset `s`
/// covers `s..=s + n - 1`. Ranges are derived data — they are recomputed
/// wholesale on every scan pass and never patched incrementally.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchRange {
    /// First byte offset covered by the match (inclusive).
    pub start: usize,
    /// Last byte offset covered by the match (inclusive).
    pub end: usize,
    /// The signature bytes that matched at `start`.
    pub bytes: Vec<u8>,
    /// Human-readable label of the originating signature.
    pub label: String,
}

impl MatchRange {
    /// Creates a new match range.
    pub fn new(
        start: usize,
        end: usize,
        bytes: Vec<u8>,
        label: impl Into<String>,
    ) -> MatchRange {
        MatchRange { start, end, bytes, label: label.into() }
    }

    /// Returns true if the given offset falls within this range.
    ///
    /// Both bounds are inclusive, so a single-byte range contains exactly
    /// its own start offset.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// Returns true if the span `[sel_start, sel_end]` lies entirely inside
    /// this range.
    ///
    /// Containment is asymmetric: the span must fit inside the range, not
    /// merely overlap it. A span that crosses either boundary of the range
    /// is not contained, even if it covers the range completely.
    pub fn contains_span(&self, sel_start: usize, sel_end: usize) -> bool {
        sel_start >= self.start && sel_end <= self.end
    }

    /// Returns the number of bytes covered by this range.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }
}

impl fmt::Display for MatchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {:#x}..{:#x}", self.label, self.start, self.end)
    }
}
