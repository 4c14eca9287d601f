//! String parsing utilities

use std::collections::HashMap;

/// Extract value after the first colon, trimmed
pub fn extract_after_colon(line: &str) -> Option<String> {
    line.split_once(':')
        .map(|(_, value)| value.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse `KEY=value` files such as `/etc/os-release`.
///
/// Surrounding single or double quotes are removed; comments and malformed
/// lines are skipped.
pub fn parse_key_values(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), unquote(value.trim()).to_string()))
        .collect()
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value.strip_prefix(quote).and_then(|v| v.strip_suffix(quote)) {
            return inner;
        }
    }
    value.trim_matches(|c| c == '"' || c == '\'')
}

/// Collapse runs of whitespace into single spaces
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("{} {}", n, unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

/// Format uptime from seconds: "2 days, 3 hours, 1 minute"
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3600;
    let minutes = (seconds % 3600) / 60;

    let mut parts = Vec::with_capacity(3);
    if days > 0 {
        parts.push(plural(days, "day"));
    }
    if hours > 0 {
        parts.push(plural(hours, "hour"));
    }
    parts.push(plural(minutes, "minute"));
    parts.join(", ")
}

/// Format used/total memory given in KiB.
///
/// Whole GiB once the machine has at least 1 GiB, MiB below that.
pub fn format_memory(used_kib: u64, total_kib: u64) -> String {
    const KIB_PER_GIB: u64 = 1024 * 1024;
    if total_kib >= KIB_PER_GIB {
        format!(
            "{:.0}Gi / {:.0}Gi",
            used_kib as f64 / KIB_PER_GIB as f64,
            total_kib as f64 / KIB_PER_GIB as f64
        )
    } else {
        format!("{}Mi / {}Mi", used_kib / 1024, total_kib / 1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_after_colon() {
        assert_eq!(
            extract_after_colon("model name\t: AMD Ryzen 5 3600 6-Core Processor\n"),
            Some("AMD Ryzen 5 3600 6-Core Processor".to_string())
        );
        assert_eq!(extract_after_colon("flags\t:"), None);
        assert_eq!(extract_after_colon("no colon"), None);
    }

    #[test]
    fn test_parse_key_values() {
        let parsed = parse_key_values(
            "NAME=\"Gentoo\"\nID=gentoo\n# comment\nPRETTY_NAME='Gentoo Linux'\nbroken line\nVERSION_ID=\"2.17\"\n",
        );
        assert_eq!(parsed["NAME"], "Gentoo");
        assert_eq!(parsed["ID"], "gentoo");
        assert_eq!(parsed["PRETTY_NAME"], "Gentoo Linux");
        assert_eq!(parsed["VERSION_ID"], "2.17");
        assert_eq!(parsed.len(), 4);
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0), "0 minutes");
        assert_eq!(format_uptime(60), "1 minute");
        assert_eq!(format_uptime(59 * 60), "59 minutes");
        assert_eq!(format_uptime(3600 + 120), "1 hour, 2 minutes");
        assert_eq!(format_uptime(86_400 + 60), "1 day, 1 minute");
        assert_eq!(format_uptime(2 * 86_400 + 3 * 3600 + 60), "2 days, 3 hours, 1 minute");
    }

    #[test]
    fn test_format_memory() {
        // 3.9 GiB used of 15.6 GiB
        assert_eq!(format_memory(4_089_446, 16_357_786), "4Gi / 16Gi");
        assert_eq!(format_memory(262_144, 524_288), "256Mi / 512Mi");
        assert_eq!(format_memory(0, 1_048_576), "0Gi / 1Gi");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            collapse_whitespace("Intel(R) Core(TM)   i7-8700K CPU @ 3.70GHz "),
            "Intel(R) Core(TM) i7-8700K CPU @ 3.70GHz"
        );
    }
}
