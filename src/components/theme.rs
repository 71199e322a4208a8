// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Color palette.
//!
//! The scheme is resolved once at startup and handed to every view model
//! as a [`Theme`]; nothing reads the device scheme at render time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    #[default]
    Dark,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Some(ColorScheme::Light),
            "dark" => Some(ColorScheme::Dark),
            _ => None,
        }
    }
}

/// A named color ramp, lightest shade first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRamp {
    shades: &'static [(u16, &'static str)],
}

impl ColorRamp {
    /// Hex value for a shade level such as 50, 500 or 900.
    pub fn shade(&self, level: u16) -> Option<&'static str> {
        self.shades
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, hex)| *hex)
    }

    /// Shade at `level`, or the main shade if the ramp lacks that level.
    pub fn at(&self, level: u16) -> &'static str {
        self.shade(level).unwrap_or_else(|| self.base())
    }

    /// The ramp's main shade (500).
    pub fn base(&self) -> &'static str {
        self.shade(500).unwrap_or("#000000")
    }
}

pub const PRIMARY: ColorRamp = ColorRamp {
    shades: &[
        (50, "#EAFFF0"),
        (100, "#CEFFD9"),
        (200, "#A9FFC0"),
        (300, "#7FFF9F"),
        (400, "#5AFF7E"),
        (500, "#39FF14"),
        (600, "#30DD10"),
        (700, "#26B80C"),
        (800, "#1C9408"),
        (900, "#147006"),
    ],
};

pub const SECONDARY: ColorRamp = ColorRamp {
    shades: &[
        (50, "#EBF8FF"),
        (100, "#D1EEFF"),
        (200, "#A8DDFF"),
        (300, "#7CC7FF"),
        (400, "#56B0FF"),
        (500, "#3B95FF"),
        (600, "#2F78DB"),
        (700, "#245DB7"),
        (800, "#1A4493"),
        (900, "#102D70"),
    ],
};

pub const ACCENT: ColorRamp = ColorRamp {
    shades: &[
        (50, "#F5EBFF"),
        (100, "#E7D1FF"),
        (200, "#D0A8FF"),
        (300, "#B87CFF"),
        (400, "#A156FF"),
        (500, "#893BFF"),
        (600, "#702FDB"),
        (700, "#5824B7"),
        (800, "#411A93"),
        (900, "#2B1070"),
    ],
};

pub const SUCCESS: ColorRamp = ColorRamp {
    shades: &[
        (50, "#E6F9EC"),
        (100, "#C3F0D3"),
        (200, "#9CE6B9"),
        (300, "#75DC9F"),
        (400, "#4ED285"),
        (500, "#27C86B"),
        (600, "#20AC59"),
        (700, "#198F48"),
        (800, "#117236"),
        (900, "#0A5525"),
    ],
};

pub const WARNING: ColorRamp = ColorRamp {
    shades: &[
        (50, "#FFF8E6"),
        (100, "#FFEEC3"),
        (200, "#FFE39C"),
        (300, "#FFD875"),
        (400, "#FFCD4E"),
        (500, "#FFC127"),
        (600, "#DBA520"),
        (700, "#B78819"),
        (800, "#936C12"),
        (900, "#70500A"),
    ],
};

pub const ERROR: ColorRamp = ColorRamp {
    shades: &[
        (50, "#FEEBEB"),
        (100, "#FCD0D0"),
        (200, "#F9A8A8"),
        (300, "#F67F7F"),
        (400, "#F35757"),
        (500, "#F03030"),
        (600, "#CE2828"),
        (700, "#AC2121"),
        (800, "#8A1A1A"),
        (900, "#681313"),
    ],
};

pub const NEUTRAL: ColorRamp = ColorRamp {
    shades: &[
        (10, "#FFFFFF"),
        (50, "#F9FAFB"),
        (100, "#F3F4F6"),
        (200, "#E5E7EB"),
        (300, "#D1D5DB"),
        (400, "#9CA3AF"),
        (500, "#6B7280"),
        (600, "#4B5563"),
        (700, "#374151"),
        (800, "#1F2937"),
        (900, "#111827"),
        (950, "#030712"),
    ],
};

/// Surface colors for one scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub scheme: ColorScheme,
    pub background: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        scheme: ColorScheme::Light,
        background: "#FFFFFF",
        card: "#F9FAFB",
        text: "#111827",
        border: "#E5E7EB",
    };

    pub const DARK: Theme = Theme {
        scheme: ColorScheme::Dark,
        background: "#111827",
        card: "#1F2937",
        text: "#F9FAFB",
        border: "#374151",
    };

    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::LIGHT,
            ColorScheme::Dark => Self::DARK,
        }
    }

    /// Secondary text: a mid-grey readable on either background.
    pub fn muted_text(&self) -> &'static str {
        match self.scheme {
            ColorScheme::Light => NEUTRAL.at(500),
            ColorScheme::Dark => NEUTRAL.at(400),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_scheme(ColorScheme::default())
    }
}
