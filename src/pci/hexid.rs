//! Registry line grammar.
//!
//! `pci.ids` is a flat text file with three line shapes we care about:
//!
//! ```text
//! 10de  NVIDIA Corporation               vendor:     XXXX<sp><sp>name
//! \t2482  GA104 [GeForce RTX 3070 Ti]    device:  \tXXXX<sp><sp>name
//! \t\t1043 8870  ROG Strix ...           subsystem (ignored)
//! # comment                              comment (ignored)
//! ```
//!
//! Everything here works on raw bytes so lookups can run directly over a
//! memory-mapped file without UTF-8 validation of the whole buffer.

/// Parse exactly four ASCII hex digits into a `u16`.
pub fn parse_hex4(token: &[u8]) -> Option<u16> {
    if token.len() != 4 {
        return None;
    }
    token.iter().try_fold(0u16, |acc, &b| {
        let digit = (b as char).to_digit(16)? as u16;
        Some((acc << 4) | digit)
    })
}

/// Vendor ID of a vendor-shaped line: four hex digits at column 0 followed
/// by exactly two spaces.
pub fn vendor_line_id(line: &[u8]) -> Option<u16> {
    id_with_separator(line)
}

/// Device ID of a device-shaped line: one tab, four hex digits, two spaces.
/// Lines indented by two tabs (subsystems) are not device lines.
pub fn device_line_id(line: &[u8]) -> Option<u16> {
    match line.split_first() {
        Some((b'\t', rest)) if rest.first() != Some(&b'\t') => id_with_separator(rest),
        _ => None,
    }
}

/// Name text following the `XXXX  ` prefix of a vendor or device line
/// (`indent` is the number of leading tabs), without the line terminator.
pub fn line_name(line: &[u8], indent: usize) -> &[u8] {
    let name = line.get(indent + 6..).unwrap_or(&[]);
    trim_ascii_end(name)
}

/// Comment or blank line.
pub fn is_filler(line: &[u8]) -> bool {
    matches!(line.first(), None | Some(b'#') | Some(b'\r'))
}

fn id_with_separator(s: &[u8]) -> Option<u16> {
    if s.len() < 6 || s[4] != b' ' || s[5] != b' ' {
        return None;
    }
    parse_hex4(&s[..4])
}

fn trim_ascii_end(mut s: &[u8]) -> &[u8] {
    while let Some((last, rest)) = s.split_last() {
        if last.is_ascii_whitespace() {
            s = rest;
        } else {
            break;
        }
    }
    s
}
