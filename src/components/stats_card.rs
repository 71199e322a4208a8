// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use serde::Serialize;

use crate::components::theme::{Theme, ERROR, NEUTRAL, SUCCESS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeIndicator {
    /// "↑", "↓" or empty
    pub symbol: &'static str,
    pub color: &'static str,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsCard {
    pub title: String,
    pub value: String,
    pub unit: Option<String>,
    pub change: Option<ChangeIndicator>,
    pub background: &'static str,
    pub title_color: &'static str,
    pub value_color: &'static str,
}

/// Whole numbers print without decimals, others with one.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn change_indicator(change: f64) -> ChangeIndicator {
    let (symbol, color) = if change > 0.0 {
        ("↑", SUCCESS.base())
    } else if change < 0.0 {
        ("↓", ERROR.base())
    } else {
        ("", NEUTRAL.base())
    };
    let amount = format!("{}% Na ultima semana", format_number(change.abs()));
    let label = if symbol.is_empty() {
        amount
    } else {
        format!("{} {}", symbol, amount)
    };
    ChangeIndicator {
        symbol,
        color,
        label,
    }
}

/// `change` is a percentage; `None` hides the change line.
pub fn stats_card(
    title: &str,
    value: impl Into<String>,
    unit: Option<&str>,
    change: Option<f64>,
    theme: &Theme,
) -> StatsCard {
    StatsCard {
        title: title.to_string(),
        value: value.into(),
        unit: unit.map(str::to_string),
        change: change.filter(|c| c.is_finite()).map(change_indicator),
        background: theme.card,
        title_color: NEUTRAL.base(),
        value_color: theme.text,
    }
}
