// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use serde::Serialize;

use crate::components::theme::{ColorScheme, Theme, PRIMARY};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsBadge {
    pub label: String,
    pub icon_color: &'static str,
    pub text_color: &'static str,
    pub background: &'static str,
    pub border: &'static str,
}

/// "1250" → "1,250"
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Brand green in both schemes; dark mode flips to a deep fill with
/// light text.
pub fn points_badge(points: u64, theme: &Theme) -> PointsBadge {
    let (text_color, background, border) = match theme.scheme {
        ColorScheme::Light => (PRIMARY.at(700), PRIMARY.at(100), PRIMARY.at(200)),
        ColorScheme::Dark => (PRIMARY.at(100), PRIMARY.at(900), PRIMARY.at(700)),
    };
    PointsBadge {
        label: format!("{} POINTS", format_thousands(points)),
        icon_color: PRIMARY.base(),
        text_color,
        background,
        border,
    }
}
