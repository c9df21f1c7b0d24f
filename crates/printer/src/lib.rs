/*!
Terminal output for sigscope's discovered ranges.

This crate is the rendering collaborator of the viewer core. It consumes
the `RangeSet` produced by a scan pass and turns it into something a human
can look at: a hex dump of the visible window with each byte styled by its
classification ([`HexDump`]), and a report of the ranges fully containing
the current selection ([`write_selection_report`], or
[`write_selection_json`] when the `serde` feature is enabled, which it is
by default).

All colored output goes through `termcolor`, so it degrades cleanly to
plain text on non-tty streams.
*/

mod hex;
mod report;

pub use crate::hex::HexDump;
#[cfg(feature = "serde")]
pub use crate::report::write_selection_json;
pub use crate::report::write_selection_report;
