//! Device lookup inside a located vendor block.

use super::hexid::{device_line_id, is_filler, line_name};
use super::locate::line_at;

/// Vendor name on the vendor line starting at `vendor_offset`.
pub fn vendor_name(buf: &[u8], vendor_offset: usize) -> &[u8] {
    line_name(line_at(buf, vendor_offset), 0)
}

/// Scan the block after the vendor line at `vendor_offset` for `device`.
///
/// Stops at the end of the buffer or at the first unindented line that is
/// not a comment: either the next vendor or the trailing class section.
pub fn find_device(buf: &[u8], vendor_offset: usize, device: u16) -> Option<&[u8]> {
    let mut lines = buf[vendor_offset..].split(|&b| b == b'\n');
    // Skip the vendor line itself.
    lines.next()?;

    for line in lines {
        if is_filler(line) {
            continue;
        }
        if line[0] != b'\t' {
            return None;
        }
        if device_line_id(line) == Some(device) {
            return Some(line_name(line, 1));
        }
    }
    None
}

/// Prefer the bracketed marketing name when a device description has one:
/// `"GA104 [GeForce RTX 3070 Ti]"` becomes `"GeForce RTX 3070 Ti"`.
///
/// Only the first bracket group counts.
pub fn marketing_name(description: &str) -> &str {
    description
        .find('[')
        .and_then(|start| {
            let rest = &description[start + 1..];
            let inner = rest[..rest.find(']')?].trim();
            (!inner.is_empty()).then_some(inner)
        })
        .unwrap_or(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: &[u8] = b"10de  NVIDIA Corporation\n\
\t1b80  GP104 [GeForce GTX 1080]\n\
\t\t1043 8591  GeForce GTX 1080\n\
# a comment inside the block\n\
\t2482  GA104 [GeForce RTX 3070 Ti]\n\
\t2489  GA104 [GeForce RTX 3060 Ti Lite Hash Rate]\n\
10df  Emulex Corporation\n\
\tf100  Saturn-X: LightPulse Fibre Channel Host Adapter\n";

    #[test]
    fn test_find_device_in_block() {
        assert_eq!(find_device(BLOCK, 0, 0x2482), Some(&b"GA104 [GeForce RTX 3070 Ti]"[..]));
        assert_eq!(find_device(BLOCK, 0, 0x1b80), Some(&b"GP104 [GeForce GTX 1080]"[..]));
    }

    #[test]
    fn test_subsystem_lines_are_not_devices() {
        // 1043 only appears as a subsystem vendor two tabs deep.
        assert_eq!(find_device(BLOCK, 0, 0x1043), None);
    }

    #[test]
    fn test_stops_at_next_vendor() {
        assert_eq!(find_device(BLOCK, 0, 0xf100), None);
    }

    #[test]
    fn test_stops_at_class_section() {
        let buf = b"ffff  Illegal Vendor ID\n\nC 03  Display controller\n\t00  VGA compatible controller\n";
        assert_eq!(find_device(buf, 0, 0x0000), None);
    }

    #[test]
    fn test_end_of_buffer_without_newline() {
        let buf = b"10de  NVIDIA Corporation\n\t2482  GA104";
        assert_eq!(find_device(buf, 0, 0x2482), Some(&b"GA104"[..]));
        assert_eq!(find_device(buf, 0, 0x2483), None);
    }

    #[test]
    fn test_vendor_name() {
        assert_eq!(vendor_name(BLOCK, 0), b"NVIDIA Corporation");
    }

    #[test]
    fn test_marketing_name() {
        assert_eq!(marketing_name("GK104 [GeForce GTX 680]"), "GeForce GTX 680");
        assert_eq!(
            marketing_name("Navi 21 [Radeon RX 6800/6800 XT / 6900 XT]"),
            "Radeon RX 6800/6800 XT / 6900 XT"
        );
        assert_eq!(marketing_name("Starship/Matisse Root Complex"), "Starship/Matisse Root Complex");
        assert_eq!(marketing_name("Broken [ ]"), "Broken [ ]");
        assert_eq!(marketing_name("Odd ] [order"), "Odd ] [order");
    }

    #[test]
    fn test_marketing_name_takes_first_bracket_group() {
        assert_eq!(marketing_name("Foo [GeForce A] rev [OEM]"), "GeForce A");
        assert_eq!(
            marketing_name("TU106 [GeForce RTX 2060 Rev. A] [OEM]"),
            "GeForce RTX 2060 Rev. A"
        );
        assert_eq!(marketing_name("Bar [] [Radeon]"), "Bar [] [Radeon]");
    }
}
