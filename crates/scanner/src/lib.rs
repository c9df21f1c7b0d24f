/*!
Windowed multi-signature scanning over byte buffers.

This crate implements the search side of sigscope: given the full contents
of a loaded file, a list of [`Signature`]s to look for, and the window of
display rows currently realized by the virtualized grid, it finds every
occurrence of every signature inside that window and reports the hits as a
fresh [`sigscope_ranges::RangeSet`] in file-global coordinates.

Scanning is restricted to the visible window on purpose. Signature lists
can be large and files larger, and the viewer reruns the scan on every
scroll and resize event; rescanning the whole file each time would make
scrolling crawl. The cost of the restriction is that matches outside the
window stay undiscovered until the window moves over them.

Signatures are matched byte-for-byte and independently of each other, and
overlapping occurrences of the same signature are all reported.

# Example

```rust
use sigscope_ranges::Decoration;
use sigscope_scanner::{Highlighter, RowWindow, Signature};

let buffer: Vec<u8> = {
    let mut b = vec![0u8; 20];
    b[2..6].copy_from_slice(&[0xB8, 0xB5, 0xF5, 0xE4]);
    b
};
let signatures = vec![Signature::from_u32_le(0xE4F5B5B8, "PlugSet 3837243320")];

let highlighter = Highlighter::new(16);
// Rows 0..2 at 16 columns cover the whole 20-byte buffer.
let ranges = highlighter.rebuild(RowWindow::new(0, 2), &buffer, &signatures);

assert_eq!(ranges.len(), 1);
assert_eq!((ranges.ranges()[0].start, ranges.ranges()[0].end), (2, 5));
assert_eq!(ranges.classify(2), Decoration::Begin);
```
*/

mod highlight;
mod scan;
mod signature;

pub use crate::highlight::{Highlighter, RowWindow};
pub use crate::scan::find_all;
pub use crate::signature::{Signature, SignatureError};
