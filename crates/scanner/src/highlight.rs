use log::{debug, warn};

use sigscope_ranges::{MatchRange, RangeSet};

use crate::{scan, Signature};

/// A contiguous run of realized display rows, `[start, end)`.
///
/// Row indices come straight from the virtualized grid on every scroll or
/// resize event; they are converted to byte offsets using the grid's fixed
/// column count. The half-open form mirrors what the grid reports: `end` is
/// the first row not realized.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RowWindow {
    /// First realized row (inclusive).
    pub start: usize,
    /// First row past the realized run (exclusive).
    pub end: usize,
}

impl RowWindow {
    /// Creates a new row window.
    pub fn new(start: usize, end: usize) -> RowWindow {
        RowWindow { start, end }
    }

    /// Translates this row window into global byte bounds `[start, end)`,
    /// clamped to the buffer.
    ///
    /// Upstream viewport math is expected to hand us sane values, but
    /// clamping here is cheaper than propagating a slicing panic out of a
    /// scroll handler.
    pub fn byte_bounds(&self, columns: usize, buffer_len: usize) -> (usize, usize) {
        let start = (self.start * columns).min(buffer_len);
        let end = (self.end * columns).min(buffer_len).max(start);
        (start, end)
    }
}

/// Drives the scan-on-scroll policy for a display with a fixed column count.
///
/// On every viewport event, [`Highlighter::rebuild`] rescans exactly the
/// visible byte window and produces a fresh [`RangeSet`]. The previous set
/// is replaced outright — no stale ranges from an earlier window survive,
/// and nothing outside the window is fabricated. Matches whose bytes lie
/// beyond the window are simply not found until the window moves over them;
/// that is the viewer's deliberate trade-off against rescanning the whole
/// file on every scroll.
#[derive(Clone, Copy, Debug)]
pub struct Highlighter {
    columns: usize,
}

impl Highlighter {
    /// The conventional hex-view width of 16 bytes per row.
    pub const DEFAULT_COLUMNS: usize = 16;

    /// Creates a highlighter for a display `columns` bytes wide.
    pub fn new(columns: usize) -> Highlighter {
        Highlighter { columns: columns.max(1) }
    }

    /// Returns the display width this highlighter translates rows with.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Rescans the visible window and returns the replacement range set.
    ///
    /// All returned ranges are in file-global coordinates: local match
    /// indices are shifted by the window's global start offset before they
    /// are stored, since downstream classification and selection queries
    /// operate on global offsets.
    ///
    /// An empty buffer or an empty signature list is a normal transient
    /// state during startup, not an error; both yield an empty set.
    /// Zero-length signatures are skipped with a diagnostic.
    pub fn rebuild(
        &self,
        window: RowWindow,
        buffer: &[u8],
        signatures: &[Signature],
    ) -> RangeSet {
        if buffer.is_empty() || signatures.is_empty() {
            return RangeSet::empty();
        }
        let (start, end) = window.byte_bounds(self.columns, buffer.len());
        let haystack = &buffer[start..end];
        debug!(
            "rebuild: rows {}..{} -> bytes {:#x}..{:#x}",
            window.start, window.end, start, end,
        );

        let mut ranges = Vec::new();
        for sig in signatures {
            if sig.bytes.is_empty() {
                warn!("skipping zero-length signature {:?}", sig.label);
                continue;
            }
            for (local_start, local_end) in scan::find_all(haystack, &sig.bytes) {
                ranges.push(MatchRange::new(
                    start + local_start,
                    start + local_end,
                    sig.bytes.clone(),
                    sig.label.clone(),
                ));
            }
        }
        debug!("rebuild: {} range(s) discovered", ranges.len());
        RangeSet::new(ranges)
    }
}

impl Default for Highlighter {
    fn default() -> Highlighter {
        Highlighter::new(Highlighter::DEFAULT_COLUMNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_bounds_scale_rows_by_columns() {
        let window = RowWindow::new(2, 5);
        assert_eq!(window.byte_bounds(16, 1000), (32, 80));
        assert_eq!(window.byte_bounds(8, 1000), (16, 40));
    }

    #[test]
    fn byte_bounds_clamp_to_buffer() {
        let window = RowWindow::new(0, 10);
        assert_eq!(window.byte_bounds(16, 20), (0, 20));

        // Window entirely past the end of the buffer.
        let window = RowWindow::new(100, 200);
        assert_eq!(window.byte_bounds(16, 20), (20, 20));
    }

    #[test]
    fn rebuild_without_prerequisites_is_empty() {
        let hl = Highlighter::new(16);
        let sigs = vec![Signature::new(vec![1, 2], "x")];

        assert!(hl.rebuild(RowWindow::new(0, 4), &[], &sigs).is_empty());
        assert!(hl.rebuild(RowWindow::new(0, 4), &[1, 2, 3], &[]).is_empty());
    }

    #[test]
    fn rebuild_skips_zero_length_signatures() {
        let hl = Highlighter::new(16);
        let sigs = vec![
            Signature::new(vec![], "empty"),
            Signature::new(vec![3], "real"),
        ];
        let set = hl.rebuild(RowWindow::new(0, 1), &[0, 3, 0], &sigs);

        assert_eq!(set.len(), 1);
        assert_eq!(set.ranges()[0].label, "real");
    }
}
