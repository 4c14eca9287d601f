//! Finding a vendor block by binary search over registry text.
//!
//! The registry is not an array of fixed-size records, so the search works on
//! byte offsets: every probe is snapped back to the start of its line and
//! then walked backwards to the nearest vendor line, whose ID decides which
//! half to discard.
//!
//! Correctness relies on vendor lines appearing in ascending ID order, which
//! holds for the public `pci.ids` but is never verified here. An out-of-order
//! file can make the search miss a vendor that is present.

use super::hexid::vendor_line_id;
use super::Hex;
use tracing::trace;

/// Offset of the first byte of `target`'s vendor line, or `None`.
pub fn find_vendor(buf: &[u8], target: u16) -> Option<usize> {
    let mut low = 0;
    let mut high = buf.len();
    let mut probes = 0u32;

    while low < high {
        let mid = low + (high - low) / 2;
        probes += 1;

        match vendor_at_or_before(buf, mid) {
            Some((offset, id)) if id == target => {
                trace!(vendor = %Hex(target), offset, probes, "vendor located");
                return Some(offset);
            }
            Some((_, id)) if id < target => low = mid + 1,
            Some((offset, _)) => high = offset,
            // Probe landed in the header before any vendor line.
            None => low = mid + 1,
        }
    }

    trace!(vendor = %Hex(target), probes, "vendor not in registry");
    None
}

/// Nearest vendor line starting at or before the line containing `pos`.
fn vendor_at_or_before(buf: &[u8], pos: usize) -> Option<(usize, u16)> {
    let mut start = line_start(buf, pos);
    loop {
        if let Some(id) = vendor_line_id(line_at(buf, start)) {
            return Some((start, id));
        }
        if start == 0 {
            return None;
        }
        start = line_start(buf, start - 1);
    }
}

/// Start of the line containing `pos`.
pub(crate) fn line_start(buf: &[u8], pos: usize) -> usize {
    buf[..pos.min(buf.len())]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |nl| nl + 1)
}

/// The line beginning at `start`, without its newline.
pub(crate) fn line_at(buf: &[u8], start: usize) -> &[u8] {
    let rest = &buf[start..];
    let end = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
    &rest[..end]
}
