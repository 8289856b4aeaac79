// src/color.rs

//! Color-coded console text for diagnostics.
//!
//! Peripheral helper: the exec core never depends on it. Each [`Variant`]
//! maps to a fixed truecolor value; [`paint`] applies the variant plus
//! optional bold/italic/underline flags.

use std::str::FromStr;

use colored::Colorize;

/// Named style variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Primary,
    Secondary,
    Success,
    Warn,
    Danger,
    Info,
    Debug,
    Stdout,
    Stderr,
}

impl Variant {
    /// Truecolor value of this variant.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Variant::Primary => (0x00, 0x91, 0xff),
            Variant::Secondary => (0x00, 0xf7, 0xff),
            Variant::Success => (0x00, 0xff, 0x6e),
            Variant::Warn => (0xff, 0xc3, 0x00),
            Variant::Danger => (0xff, 0x1a, 0x00),
            Variant::Info => (0xa1, 0x00, 0xff),
            Variant::Debug => (0x8e, 0x5e, 0x92),
            Variant::Stdout => (0x87, 0x8f, 0x87),
            Variant::Stderr => (0xa0, 0x65, 0x5e),
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "primary" => Ok(Variant::Primary),
            "secondary" => Ok(Variant::Secondary),
            "success" => Ok(Variant::Success),
            "warn" | "warning" => Ok(Variant::Warn),
            "danger" => Ok(Variant::Danger),
            "info" => Ok(Variant::Info),
            "debug" => Ok(Variant::Debug),
            "stdout" => Ok(Variant::Stdout),
            "stderr" => Ok(Variant::Stderr),
            other => Err(format!("unknown color variant: {other}")),
        }
    }
}

/// Boolean style flags applied on top of the variant color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleFlags {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

/// Style `text` with the given variant and flags.
///
/// Whether ANSI codes are actually emitted follows the `colored` crate's
/// global detection (tty, `NO_COLOR`, forced overrides).
pub fn paint(variant: Variant, text: &str, flags: StyleFlags) -> String {
    let (r, g, b) = variant.rgb();
    let mut styled = text.truecolor(r, g, b);
    if flags.bold {
        styled = styled.bold();
    }
    if flags.italic {
        styled = styled.italic();
    }
    if flags.underline {
        styled = styled.underline();
    }
    styled.to_string()
}
