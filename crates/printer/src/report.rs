use std::io;

use bstr::ByteSlice;
use log::debug;
use termcolor::{ColorSpec, WriteColor};

use sigscope_ranges::MatchRange;

/// Writes a human-readable report of the ranges fully containing the
/// current selection.
///
/// The caller supplies exactly what `RangeSet::find_containing` returned
/// for the selection span `[sel_start, sel_end]`; an empty slice prints a
/// one-line "no containing ranges" notice. Each reported range shows its
/// label, its global bounds, the signature bytes in hex and an escaped
/// byte-string preview of those bytes.
pub fn write_selection_report<W: WriteColor>(
    wtr: &mut W,
    sel_start: usize,
    sel_end: usize,
    ranges: &[&MatchRange],
) -> io::Result<()> {
    debug!(
        "selection {:#x}..{:#x} contained in {} range(s)",
        sel_start,
        sel_end,
        ranges.len(),
    );
    if ranges.is_empty() {
        writeln!(
            wtr,
            "selection {:#x}..{:#x}: no containing ranges",
            sel_start, sel_end,
        )?;
        return Ok(());
    }
    writeln!(
        wtr,
        "selection {:#x}..{:#x} is contained in {} range(s):",
        sel_start,
        sel_end,
        ranges.len(),
    )?;
    for range in ranges {
        wtr.set_color(ColorSpec::new().set_bold(true))?;
        write!(wtr, "  {}", range.label)?;
        wtr.reset()?;
        writeln!(
            wtr,
            "  {:#x}..{:#x}  {}  {:?}",
            range.start,
            range.end,
            hex_bytes(&range.bytes),
            range.bytes.as_bstr(),
        )?;
    }
    Ok(())
}

/// Writes the containing ranges as a JSON array.
///
/// Shape per entry: `{"label", "start", "end", "bytes"}` with `bytes` as a
/// lowercase hex string. Offsets are plain integers.
#[cfg(feature = "serde")]
pub fn write_selection_json<W: io::Write>(
    mut wtr: W,
    ranges: &[&MatchRange],
) -> io::Result<()> {
    let entries: Vec<json::RangeEntry<'_>> =
        ranges.iter().map(|&r| json::RangeEntry(r)).collect();
    serde_json::to_writer_pretty(&mut wtr, &entries)
        .map_err(io::Error::other)?;
    writeln!(wtr)
}

pub(crate) fn hex_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push_str(&format!("{:02x}", byte));
    }
    out
}

#[cfg(feature = "serde")]
mod json {
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    use sigscope_ranges::MatchRange;

    pub(crate) struct RangeEntry<'a>(pub(crate) &'a MatchRange);

    impl Serialize for RangeEntry<'_> {
        fn serialize<S: Serializer>(
            &self,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("MatchRange", 4)?;
            state.serialize_field("label", &self.0.label)?;
            state.serialize_field("start", &self.0.start)?;
            state.serialize_field("end", &self.0.end)?;
            state.serialize_field("bytes", &super::hex_bytes(&self.0.bytes))?;
            state.end()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sigscope_ranges::MatchRange;

    fn sample_range() -> MatchRange {
        MatchRange::new(2, 5, vec![0xB8, 0xB5, 0xF5, 0xE4], "PlugSet 3837243320")
    }

    fn report_to_string(
        sel: (usize, usize),
        ranges: &[&MatchRange],
    ) -> String {
        let mut wtr = termcolor::Buffer::no_color();
        write_selection_report(&mut wtr, sel.0, sel.1, ranges).unwrap();
        String::from_utf8(wtr.into_inner()).unwrap()
    }

    #[test]
    fn report_lists_label_bounds_and_bytes() {
        let range = sample_range();
        let out = report_to_string((2, 5), &[&range]);

        assert!(out.contains("selection 0x2..0x5 is contained in 1 range(s):"));
        assert!(out.contains("PlugSet 3837243320"));
        assert!(out.contains("0x2..0x5"));
        assert!(out.contains("b8b5f5e4"));
    }

    #[test]
    fn empty_report_prints_notice() {
        let out = report_to_string((10, 20), &[]);
        assert_eq!(out, "selection 0xa..0x14: no containing ranges\n");
    }

    #[test]
    fn hex_bytes_is_lowercase_unseparated() {
        assert_eq!(hex_bytes(&[0xB8, 0x05, 0xFF]), "b805ff");
        assert_eq!(hex_bytes(&[]), "");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_report_round_trips_through_serde_json() {
        let range = sample_range();
        let mut out = Vec::new();
        write_selection_json(&mut out, &[&range]).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["label"], "PlugSet 3837243320");
        assert_eq!(entries[0]["start"], 2);
        assert_eq!(entries[0]["end"], 5);
        assert_eq!(entries[0]["bytes"], "b8b5f5e4");
    }
}
