// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use serde::Serialize;

use crate::components::theme::{Theme, PRIMARY};
use crate::models::TransportType;

/// Modes offered on the home screen, in display order.
pub const SELECTABLE: [TransportType; 5] = [
    TransportType::Walking,
    TransportType::Cycling,
    TransportType::Bus,
    TransportType::Car,
    TransportType::Motorcycle,
];

pub fn transport_label(transport: TransportType) -> &'static str {
    match transport {
        TransportType::Walking => "Caminhando",
        TransportType::Cycling => "Pedalando",
        TransportType::Bus => "Ônibus",
        TransportType::Carpool => "Carona",
        TransportType::Car => "Carro",
        TransportType::Motorcycle => "Moto",
        TransportType::Other => "Outro",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportOption {
    pub transport: TransportType,
    pub label: &'static str,
    pub selected: bool,
    pub background: &'static str,
    pub border: &'static str,
    pub text_color: &'static str,
    pub icon_color: &'static str,
}

/// The selected chip is brand green; the others sit on the theme's card
/// surface.
pub fn transport_selector(selected: Option<TransportType>, theme: &Theme) -> Vec<TransportOption> {
    SELECTABLE
        .into_iter()
        .map(|transport| {
            let is_selected = selected == Some(transport);
            TransportOption {
                transport,
                label: transport_label(transport),
                selected: is_selected,
                background: if is_selected {
                    PRIMARY.at(100)
                } else {
                    theme.card
                },
                border: if is_selected {
                    PRIMARY.base()
                } else {
                    theme.border
                },
                text_color: if is_selected {
                    PRIMARY.at(700)
                } else {
                    theme.muted_text()
                },
                icon_color: PRIMARY.base(),
            }
        })
        .collect()
}
