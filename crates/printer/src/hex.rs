use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

use sigscope_ranges::{Decoration, RangeSet};
use sigscope_scanner::RowWindow;

/// Renders a window of a byte buffer as a classic hex dump.
///
/// Each line shows the global offset, the hex bytes of one display row and
/// an ASCII gutter. Bytes covered by a discovered range are colored by
/// their classification: green for the first byte of a range, yellow for
/// interior bytes, red for the last byte. The color split makes adjacent
/// matches visually separable even when they abut.
#[derive(Clone, Debug)]
pub struct HexDump {
    columns: usize,
}

impl HexDump {
    /// Creates a hex dump renderer `columns` bytes wide.
    ///
    /// The column count must match the one the ranges were scanned with,
    /// or rows and highlights will disagree about where bytes live.
    pub fn new(columns: usize) -> HexDump {
        HexDump { columns: columns.max(1) }
    }

    /// Writes the bytes of `window` to `wtr`, decorated against `ranges`.
    pub fn dump<W: WriteColor>(
        &self,
        wtr: &mut W,
        buffer: &[u8],
        window: RowWindow,
        ranges: &RangeSet,
    ) -> io::Result<()> {
        let (start, end) = window.byte_bounds(self.columns, buffer.len());
        let mut row_start = start;
        while row_start < end {
            let row_end = (row_start + self.columns).min(end);
            write!(wtr, "{:08x}  ", row_start)?;
            for offset in row_start..row_start + self.columns {
                if offset < row_end {
                    self.write_byte(wtr, buffer[offset], ranges.classify(offset))?;
                } else {
                    // Pad short final rows so the gutter stays aligned.
                    write!(wtr, "   ")?;
                }
            }
            write!(wtr, " ")?;
            for &byte in &buffer[row_start..row_end] {
                let c = if byte.is_ascii_graphic() || byte == b' ' {
                    byte as char
                } else {
                    '.'
                };
                write!(wtr, "{}", c)?;
            }
            writeln!(wtr)?;
            row_start = row_end;
        }
        Ok(())
    }

    fn write_byte<W: WriteColor>(
        &self,
        wtr: &mut W,
        byte: u8,
        decoration: Decoration,
    ) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        match decoration {
            Decoration::None => {}
            Decoration::Begin => {
                spec.set_fg(Some(Color::Green)).set_bold(true);
            }
            Decoration::Middle => {
                spec.set_fg(Some(Color::Yellow));
            }
            Decoration::End => {
                spec.set_fg(Some(Color::Red)).set_bold(true);
            }
        }
        if decoration != Decoration::None {
            wtr.set_color(&spec)?;
        }
        write!(wtr, "{:02x}", byte)?;
        if decoration != Decoration::None {
            wtr.reset()?;
        }
        write!(wtr, " ")
    }
}
