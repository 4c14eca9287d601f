//! Rendering of the banner and info column.
//!
//! Everything is appended to a caller-owned [`Output`]; nothing is printed
//! here. The binary writes the finished buffer to stdout in one go.

pub mod art;
pub mod palette;

use crate::config::Config;
use crate::data::SystemInfo;
use crate::distro::Distro;
use crate::error::Result;
use art::{seg, Banner, Segment};
use palette::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::Path;
use std::{fmt, fs};
use tracing::{debug, warn};
use unicode_width::UnicodeWidthStr;

/// One row of the info column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Os,
    Kernel,
    Uptime,
    Wm,
    Packages,
    Terminal,
    Memory,
    Shell,
    Cpu,
    Gpu,
}

impl Field {
    pub const DEFAULT_ORDER: [Field; 10] = [
        Field::Os,
        Field::Kernel,
        Field::Uptime,
        Field::Wm,
        Field::Packages,
        Field::Terminal,
        Field::Memory,
        Field::Shell,
        Field::Cpu,
        Field::Gpu,
    ];

    /// Name used in the config file.
    pub fn key(self) -> &'static str {
        match self {
            Field::Os => "os",
            Field::Kernel => "kernel",
            Field::Uptime => "uptime",
            Field::Wm => "wm",
            Field::Packages => "packages",
            Field::Terminal => "terminal",
            Field::Memory => "memory",
            Field::Shell => "shell",
            Field::Cpu => "cpu",
            Field::Gpu => "gpu",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        let key = key.trim().to_lowercase();
        Field::DEFAULT_ORDER.into_iter().find(|f| f.key() == key)
    }

    pub fn label(self, distro: Distro) -> &'static str {
        match self {
            // Bedrock's release string is not an OS name of its own
            Field::Os if distro == Distro::Bedrock => "Version",
            Field::Os => "OS",
            Field::Kernel => "Kernel",
            Field::Uptime => "Uptime",
            Field::Wm => "WM",
            Field::Packages => "Packages",
            Field::Terminal => "Terminal",
            Field::Memory => "Memory",
            Field::Shell => "Shell",
            Field::Cpu => "CPU",
            Field::Gpu => "GPU",
        }
    }

    pub fn default_color(self) -> &'static str {
        match self {
            Field::Os | Field::Kernel => NORD12,
            Field::Uptime | Field::Wm | Field::Packages => NORD15,
            Field::Terminal | Field::Memory | Field::Shell => NORD13,
            Field::Cpu | Field::Gpu => NORD9,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Text buffer that drops escape codes when color is off.
#[derive(Debug, Default)]
pub struct Output {
    buf: String,
    color: bool,
}

impl Output {
    pub fn new(color: bool) -> Self {
        Output {
            buf: String::with_capacity(2048),
            color,
        }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Append an escape sequence, if color is enabled.
    pub fn paint(&mut self, code: &str) -> &mut Self {
        if self.color {
            self.buf.push_str(code);
        }
        self
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self
    }

    pub fn pad(&mut self, columns: usize) -> &mut Self {
        self.buf.extend(std::iter::repeat(' ').take(columns));
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    /// Write the whole buffer with a single call.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.buf.as_bytes())?;
        writer.flush()
    }
}

/// The banner drawn to the left of the info column.
#[derive(Debug)]
pub enum Art {
    Builtin(&'static Banner),
    /// Plain lines from a user file, drawn in one color
    Custom { lines: Vec<String>, color: &'static str },
}

impl Art {
    /// Custom art when `custom` is set and readable, the distro banner otherwise.
    pub fn select(distro: Distro, custom: Option<&Path>) -> Art {
        let banner = Banner::for_distro(distro);
        let Some(path) = custom else {
            return Art::Builtin(banner);
        };
        match load_custom_art(path) {
            Ok(lines) => Art::Custom {
                lines,
                color: banner.accent,
            },
            Err(err) => {
                warn!(path = %path.display(), error = %err, "cannot read custom art, using built-in banner");
                Art::Builtin(banner)
            }
        }
    }

    pub fn rows(&self) -> Vec<Vec<Segment<'_>>> {
        match self {
            Art::Builtin(banner) => banner.rows.iter().map(|row| row.to_vec()).collect(),
            Art::Custom { lines, color } => {
                lines.iter().map(|line| vec![seg(color, line.as_str())]).collect()
            }
        }
    }
}

/// Read a banner file. Tabs are expanded so widths can be measured.
pub fn load_custom_art(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(|line| line.trim_end().replace('\t', "    "))
        .collect())
}

/// Which rows to show and how.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub items: Vec<Field>,
    pub separator: String,
    pub show_all_gpus: bool,
    /// Escape codes replacing a field's default label color
    pub label_colors: HashMap<Field, String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            items: Field::DEFAULT_ORDER.to_vec(),
            separator: ": ".to_string(),
            show_all_gpus: false,
            label_colors: HashMap::new(),
        }
    }
}

impl RenderOptions {
    pub fn from_config(config: &Config) -> Self {
        let mut label_colors = HashMap::new();
        for (key, color) in &config.colors {
            let Some(field) = Field::from_key(key) else {
                warn!(key = %key, "color set for unknown field");
                continue;
            };
            if let Some(code) = color_code_or_warn(color) {
                label_colors.insert(field, code);
            }
        }

        RenderOptions {
            items: config.display.items.clone(),
            separator: config.display.separator.clone(),
            show_all_gpus: config.display.show_all_gpus,
            label_colors,
        }
    }

    fn label_color(&self, field: Field) -> &str {
        self.label_colors
            .get(&field)
            .map(String::as_str)
            .unwrap_or_else(|| field.default_color())
    }
}

#[derive(Debug, Clone, PartialEq)]
struct InfoRow<'a> {
    label: String,
    color: &'a str,
    value: String,
}

fn info_rows<'a>(info: &SystemInfo, opts: &'a RenderOptions) -> Vec<InfoRow<'a>> {
    let mut rows = Vec::with_capacity(opts.items.len() + info.gpu.all.len());
    for &field in &opts.items {
        let label = field.label(info.distro);
        let color = opts.label_color(field);

        if field == Field::Gpu && opts.show_all_gpus && info.gpu.all.len() > 1 {
            for (i, gpu) in info.gpu.all.iter().enumerate() {
                rows.push(InfoRow {
                    label: format!("{} {}", label, i + 1),
                    color,
                    value: gpu.clone(),
                });
            }
            continue;
        }

        rows.push(InfoRow {
            label: label.to_string(),
            color,
            value: field_value(field, info),
        });
    }
    rows
}

fn field_value(field: Field, info: &SystemInfo) -> String {
    match field {
        Field::Os => info.os.to_string(),
        Field::Kernel => info.kernel.clone(),
        Field::Uptime => info.uptime.formatted.clone(),
        Field::Wm => info.wm.clone(),
        Field::Packages => info.packages.to_string(),
        Field::Terminal => info.terminal.clone(),
        Field::Memory => info.memory.formatted.clone(),
        Field::Shell => info.shell.clone(),
        Field::Cpu => info.cpu.clone(),
        Field::Gpu => info.gpu.primary.clone(),
    }
}

fn row_width(row: &[Segment]) -> usize {
    row.iter().map(|s| UnicodeWidthStr::width(s.text)).sum()
}

/// Append the art and info column side by side.
pub fn render(out: &mut Output, art: &Art, info: &SystemInfo, opts: &RenderOptions) {
    let art_rows = art.rows();
    let rows = info_rows(info, opts);
    let art_width = art_rows.iter().map(|r| row_width(r)).max().unwrap_or(0);
    let height = art_rows.len().max(rows.len());
    debug!(art_width, art_rows = art_rows.len(), info_rows = rows.len(), "rendering");

    for i in 0..height {
        let mut used = 0;
        if let Some(art_row) = art_rows.get(i) {
            for segment in art_row {
                out.paint(segment.color).text(segment.text);
            }
            used = row_width(art_row);
        }

        if let Some(row) = rows.get(i) {
            out.paint(RESET);
            if art_width > 0 {
                out.pad(art_width - used).text("  ");
            }
            out.paint(BOLD)
                .paint(row.color)
                .text(&row.label)
                .text(&opts.separator)
                .paint(RESET)
                .paint(NORD4)
                .text(&row.value)
                .paint(RESET);
        }
        out.newline();
    }
    out.paint(RESET);
}
