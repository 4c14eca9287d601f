//! Built-in banners.
//!
//! Each banner is a list of rows, each row a list of colored segments, so
//! multi-colored art can be padded by its visible width.

use super::palette::*;
use crate::distro::Distro;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub color: &'a str,
    pub text: &'a str,
}

pub const fn seg<'a>(color: &'a str, text: &'a str) -> Segment<'a> {
    Segment { color, text }
}

#[derive(Debug)]
pub struct Banner {
    pub rows: &'static [&'static [Segment<'static>]],
    /// Color for custom art loaded in place of this banner
    pub accent: &'static str,
}

impl Banner {
    pub fn for_distro(distro: Distro) -> &'static Banner {
        match distro {
            Distro::Bedrock => &BEDROCK,
            Distro::Gentoo => &GENTOO,
            Distro::CachyOs => &CACHYOS,
            Distro::Generic => &GENERIC,
        }
    }
}

pub static BEDROCK: Banner = Banner {
    accent: NORD1,
    rows: &[
        &[seg(NORD1, "┌──────────────────────────────────┐ "), seg(NORD11, "┌────┐")],
        &[
            seg(NORD1, "│─"),
            seg(NORD4, r"\\\\\\\\\\\\\"),
            seg(NORD1, "────────────────────│ "),
            seg(NORD11, "│ 境 │"),
        ],
        &[
            seg(NORD1, "│──"),
            seg(NORD4, r"\\\      \\\"),
            seg(NORD1, "────────────────────│ "),
            seg(NORD11, "│    │"),
        ],
        &[
            seg(NORD1, "│───"),
            seg(NORD4, r"\\\      \\\"),
            seg(NORD1, "───────────────────│ "),
            seg(NORD11, "│ 界 │"),
        ],
        &[
            seg(NORD1, "│────"),
            seg(NORD4, r"\\\      \\\\\\\\\\\\\\\\\"),
            seg(NORD1, "────│ "),
            seg(NORD11, "└────┘"),
        ],
        &[seg(NORD1, "│─────"), seg(NORD4, r"\\\                    \\\"), seg(NORD1, "───│")],
        &[seg(NORD1, "│──────"), seg(NORD4, r"\\\                    \\\"), seg(NORD1, "──│")],
        &[seg(NORD1, "│───────"), seg(NORD4, r"\\\        ──────      \\\"), seg(NORD1, "─│")],
        &[seg(NORD1, "│────────"), seg(NORD4, r"\\\                   ///"), seg(NORD1, "─│")],
        &[seg(NORD1, "│─────────"), seg(NORD4, r"\\\                 ///"), seg(NORD1, "──│")],
        &[seg(NORD1, "│──────────"), seg(NORD4, r"\\\               ///"), seg(NORD1, "───│")],
        &[seg(NORD1, "│───────────"), seg(NORD4, r"\\\////////////////"), seg(NORD1, "────│")],
        &[seg(NORD1, "└──────────────────────────────────┘")],
    ],
};

pub static GENTOO: Banner = Banner {
    accent: NORD15,
    rows: &[
        &[seg(NORD15, "   _-----_")],
        &[seg(NORD15, "  (       \\")],
        &[seg(NORD15, "  \\    "), seg(NORD4, "0"), seg(NORD15, "   \\")],
        &[seg(NORD4, "   \\        )")],
        &[seg(NORD4, "   /      _/")],
        &[seg(NORD4, "  (     _-")],
        &[seg(NORD4, "  \\____-")],
    ],
};

pub static CACHYOS: Banner = Banner {
    accent: NORD8,
    rows: &[
        &[seg(NORD8, "     /''''''''''''/"), seg(NORD14, "   o")],
        &[seg(NORD8, "    /''''''''''''/")],
        &[seg(NORD8, "   /''''''/"), seg(NORD14, "        O")],
        &[seg(NORD8, "  /''''''/")],
        &[seg(NORD7, "  \\......\\"), seg(NORD14, "     o")],
        &[seg(NORD7, "   \\......\\")],
        &[seg(NORD7, "    \\.............../")],
        &[seg(NORD7, "     \\............./")],
    ],
};

pub static GENERIC: Banner = Banner {
    accent: NORD4,
    rows: &[
        &[seg(NORD4, "     .--.")],
        &[seg(NORD4, "    |o_o |")],
        &[seg(NORD4, "    |"), seg(NORD13, ":_/"), seg(NORD4, " |")],
        &[seg(NORD4, "   //   \\ \\")],
        &[seg(NORD4, "  (|     | )")],
        &[seg(NORD13, " /'\\_   _/`\\")],
        &[seg(NORD13, " \\___)=(___/")],
    ],
};
