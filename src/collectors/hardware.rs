//! Hardware information collection (CPU, memory)

use crate::data::MemoryInfo;
use crate::error::{FetchError, Result};
use crate::utils::file::SysRoot;
use crate::utils::parsing::{collapse_whitespace, extract_after_colon, format_memory};
use std::fs::File;
use std::io::{BufRead, BufReader};

/// CPU model from the first `model name` entry in /proc/cpuinfo
pub fn read_cpu_info(root: &SysRoot) -> Result<String> {
    // Read line by line to find model name early (stops after first CPU)
    let file = File::open(root.path("/proc/cpuinfo"))?;
    let mut reader = BufReader::new(file);
    let mut line = String::with_capacity(128);

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        if line.starts_with("model name") {
            if let Some(model) = extract_after_colon(&line) {
                return Ok(collapse_whitespace(&model));
            }
        }
    }
    Err(FetchError::Detection("CPU info not found".to_string()))
}

/// Used (`MemTotal - MemAvailable`) and total memory from /proc/meminfo
pub fn read_memory_info(root: &SysRoot) -> Result<MemoryInfo> {
    let file = File::open(root.path("/proc/meminfo"))?;
    let mut reader = BufReader::new(file);
    let mut line = String::with_capacity(64);

    let mut total: Option<u64> = None;
    let mut available: Option<u64> = None;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        if line.starts_with("MemTotal:") {
            total = parse_kib(&line);
        } else if line.starts_with("MemAvailable:") {
            available = parse_kib(&line);
        }

        // Early exit if we found both
        if total.is_some() && available.is_some() {
            break;
        }
    }

    match (total, available) {
        (Some(total_kib), Some(available_kib)) if total_kib > 0 => {
            let used_kib = total_kib.saturating_sub(available_kib);
            Ok(MemoryInfo {
                used_kib,
                total_kib,
                formatted: format_memory(used_kib, total_kib),
            })
        }
        _ => Err(FetchError::Detection("Memory totals not found".to_string())),
    }
}

/// "MemTotal:       16357786 kB" -> 16357786
fn parse_kib(line: &str) -> Option<u64> {
    line.split_once(':')?.1.split_whitespace().next()?.parse().ok()
}
