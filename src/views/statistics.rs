// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Statistics screen: period selector, activity series, transport breakdown.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::components::stats_card::format_number;
use crate::components::theme::{ACCENT, NEUTRAL, PRIMARY, SECONDARY, SUCCESS};
use crate::components::{stats_card, transport_label, StatsCard, Theme};
use crate::models::stats::{day_key, month_key};
use crate::models::{TransportType, User, UserStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    #[default]
    Week,
    Month,
    Year,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 3] = [TimePeriod::Week, TimePeriod::Month, TimePeriod::Year];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimePeriod::Week => "week",
            TimePeriod::Month => "month",
            TimePeriod::Year => "year",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimePeriod::Week => "Week",
            TimePeriod::Month => "Month",
            TimePeriod::Year => "Year",
        }
    }
}

/// One bucket of the activity chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportBar {
    pub transport: TransportType,
    pub label: &'static str,
    pub points: u64,
    pub color: &'static str,
}

fn transport_color(transport: TransportType) -> &'static str {
    match transport {
        TransportType::Walking => SUCCESS.base(),
        TransportType::Cycling => PRIMARY.base(),
        TransportType::Bus => SECONDARY.base(),
        TransportType::Carpool => ACCENT.base(),
        _ => NEUTRAL.base(),
    }
}

fn points_on(stats: &UserStats, day: NaiveDate) -> u64 {
    stats.points_by_day.get(&day_key(day)).copied().unwrap_or(0)
}

/// The `count` days ending at `today`, oldest first.
fn trailing_days(today: NaiveDate, count: u64) -> impl Iterator<Item = NaiveDate> {
    (0..count)
        .rev()
        .filter_map(move |back| today.checked_sub_days(Days::new(back)))
}

/// Points in the last 7 days compared with the 7 before, in percent.
/// `None` when the earlier week has no points to compare against.
pub fn weekly_points_change(stats: &UserStats, today: NaiveDate) -> Option<f64> {
    let current: u64 = trailing_days(today, 7).map(|d| points_on(stats, d)).sum();
    let previous_end = today.checked_sub_days(Days::new(7))?;
    let previous: u64 = trailing_days(previous_end, 7)
        .map(|d| points_on(stats, d))
        .sum();
    if previous == 0 {
        return None;
    }
    let change = (current as f64 - previous as f64) / previous as f64 * 100.0;
    Some(change.round())
}

/// Serializable snapshot of the whole screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsView {
    pub period: TimePeriod,
    pub cards: Vec<StatsCard>,
    pub breakdown: Vec<TransportBar>,
    pub series: Vec<SeriesPoint>,
    pub current_streak: u32,
    pub best_streak: u32,
}

#[derive(Debug, Clone, Default)]
pub struct StatisticsScreen {
    period: TimePeriod,
}

impl StatisticsScreen {
    pub fn new(period: TimePeriod) -> Self {
        Self { period }
    }

    pub fn period(&self) -> TimePeriod {
        self.period
    }

    pub fn select_period(&mut self, period: TimePeriod) {
        self.period = period;
    }

    /// Chart buckets for the selected period: daily points for week and
    /// month, monthly CO₂ saved for year.
    pub fn series(&self, stats: &UserStats, now: DateTime<Utc>) -> Vec<SeriesPoint> {
        let today = now.date_naive();
        match self.period {
            TimePeriod::Week => trailing_days(today, 7)
                .map(|d| SeriesPoint {
                    label: d.format("%a").to_string(),
                    value: points_on(stats, d) as f64,
                })
                .collect(),
            TimePeriod::Month => trailing_days(today, 30)
                .map(|d| SeriesPoint {
                    label: d.format("%b %-d").to_string(),
                    value: points_on(stats, d) as f64,
                })
                .collect(),
            TimePeriod::Year => {
                let first_of_month = today.with_day(1).unwrap_or(today);
                (0..12u32)
                    .rev()
                    .filter_map(|back| first_of_month.checked_sub_months(Months::new(back)))
                    .map(|m| SeriesPoint {
                        label: m.format("%b").to_string(),
                        value: stats.co2_by_month.get(&month_key(m)).copied().unwrap_or(0.0),
                    })
                    .collect()
            }
        }
    }

    /// Points per transport mode, for modes with any trips.
    pub fn breakdown(&self, stats: &UserStats) -> Vec<TransportBar> {
        stats
            .points_by_transport
            .iter()
            .map(|(&transport, &points)| TransportBar {
                transport,
                label: transport_label(transport),
                points,
                color: transport_color(transport),
            })
            .collect()
    }

    /// The four headline cards.
    pub fn summary_cards(
        &self,
        user: &User,
        stats: &UserStats,
        theme: &Theme,
        now: DateTime<Utc>,
    ) -> Vec<StatsCard> {
        let change = weekly_points_change(stats, now.date_naive());
        vec![
            stats_card("Pontos totais", user.points.to_string(), None, change, theme),
            stats_card("CO₂ Saved", format_number(user.co2_saved), Some("kg"), None, theme),
            stats_card(
                "Calories Burned",
                format_number(user.calories_burned),
                Some("kcal"),
                None,
                theme,
            ),
            stats_card(
                "Money Saved",
                format_number(user.money_saved),
                Some("R$"),
                None,
                theme,
            ),
        ]
    }

    pub fn view(
        &self,
        user: &User,
        stats: &UserStats,
        theme: &Theme,
        now: DateTime<Utc>,
    ) -> StatisticsView {
        StatisticsView {
            period: self.period,
            cards: self.summary_cards(user, stats, theme, now),
            breakdown: self.breakdown(stats),
            series: self.series(stats, now),
            current_streak: stats.streak.current,
            best_streak: stats.streak.best,
        }
    }
}
