// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map screen: layer filters and the element detail sheet.

use std::collections::BTreeSet;

use crate::components::theme::{NEUTRAL, PRIMARY};
use crate::models::{MapElement, MapElementType, MapError, MapFilter};

/// Active map layers. Starts with every layer on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapFilterSet {
    active: BTreeSet<MapFilter>,
}

impl Default for MapFilterSet {
    fn default() -> Self {
        Self {
            active: MapFilter::ALL.into_iter().collect(),
        }
    }
}

impl MapFilterSet {
    /// Every layer off.
    pub fn empty() -> Self {
        Self {
            active: BTreeSet::new(),
        }
    }

    /// Parse a comma-separated list such as `bike_lanes,reports`.
    pub fn parse_list(raw: &str) -> Result<Self, MapError> {
        let mut set = Self::empty();
        for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let filter =
                MapFilter::parse(part).ok_or_else(|| MapError::UnknownFilter(part.to_string()))?;
            set.active.insert(filter);
        }
        Ok(set)
    }

    pub fn toggle(&mut self, filter: MapFilter) {
        if !self.active.remove(&filter) {
            self.active.insert(filter);
        }
    }

    pub fn is_active(&self, filter: MapFilter) -> bool {
        self.active.contains(&filter)
    }

    pub fn is_visible(&self, element_type: MapElementType) -> bool {
        self.is_active(element_type.filter())
    }

    pub fn active(&self) -> impl Iterator<Item = MapFilter> + '_ {
        self.active.iter().copied()
    }
}

/// One toggle in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub filter: MapFilter,
    pub active: bool,
    pub icon_color: &'static str,
}

/// Map screen state.
#[derive(Debug, Clone, Default)]
pub struct MapScreen {
    filters: MapFilterSet,
    selected: Option<MapElement>,
}

impl MapScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &MapFilterSet {
        &self.filters
    }

    pub fn toggle_filter(&mut self, filter: MapFilter) {
        self.filters.toggle(filter);
    }

    /// Open the detail sheet for `element`, replacing any open one.
    pub fn select(&mut self, element: MapElement) {
        self.selected = Some(element);
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&MapElement> {
        self.selected.as_ref()
    }

    /// Elements drawn under the current filters.
    pub fn visible<'a>(&self, elements: &'a [MapElement]) -> Vec<&'a MapElement> {
        elements
            .iter()
            .filter(|e| self.filters.is_visible(e.element_type))
            .collect()
    }

    pub fn filter_bar(&self) -> Vec<FilterButton> {
        MapFilter::ALL
            .into_iter()
            .map(|filter| {
                let active = self.filters.is_active(filter);
                FilterButton {
                    filter,
                    active,
                    icon_color: if active {
                        PRIMARY.at(700)
                    } else {
                        NEUTRAL.base()
                    },
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed;

    #[test]
    fn test_all_layers_start_visible() {
        let screen = MapScreen::new();
        let elements = seed::map_elements();
        assert_eq!(screen.visible(&elements).len(), elements.len());
        assert!(screen.filter_bar().iter().all(|b| b.active));
    }

    #[test]
    fn test_toggle_twice_restores_set() {
        let mut filters = MapFilterSet::default();
        filters.toggle(MapFilter::BusRoutes);
        assert!(!filters.is_visible(MapElementType::BusRoute));
        assert!(filters.is_visible(MapElementType::BikeLane));
        filters.toggle(MapFilter::BusRoutes);
        assert_eq!(filters, MapFilterSet::default());
    }

    #[test]
    fn test_toggles_commute() {
        let mut a = MapFilterSet::default();
        a.toggle(MapFilter::Reports);
        a.toggle(MapFilter::BikeLanes);

        let mut b = MapFilterSet::default();
        b.toggle(MapFilter::BikeLanes);
        b.toggle(MapFilter::Reports);

        assert_eq!(a, b);
    }

    fn permutations(items: &[MapFilter]) -> Vec<Vec<MapFilter>> {
        if items.is_empty() {
            return vec![vec![]];
        }
        let mut out = vec![];
        for (i, &first) in items.iter().enumerate() {
            let mut rest = items.to_vec();
            rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, first);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn test_toggle_order_never_matters() {
        // Every subset of layers, toggled in every order, lands on the
        // same set: exactly the untouched layers stay on.
        for mask in 0u32..(1 << MapFilter::ALL.len()) {
            let subset: Vec<MapFilter> = MapFilter::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, f)| f)
                .collect();

            let mut expected = MapFilterSet::default();
            for &filter in &subset {
                expected.toggle(filter);
            }
            for filter in MapFilter::ALL {
                assert_eq!(expected.is_active(filter), !subset.contains(&filter));
            }

            for order in permutations(&subset) {
                let mut set = MapFilterSet::default();
                for filter in order.iter().copied() {
                    set.toggle(filter);
                }
                assert_eq!(set, expected, "order {:?}", order);
            }
        }

        let mut all_off = MapFilterSet::default();
        for filter in MapFilter::ALL {
            all_off.toggle(filter);
        }
        assert_eq!(all_off, MapFilterSet::empty());
    }

    #[test]
    fn test_visibility_depends_only_on_type_and_set() {
        let elements = seed::map_elements();
        for filter in MapFilter::ALL {
            let mut screen = MapScreen::new();
            screen.toggle_filter(filter);
            for element in screen.visible(&elements) {
                assert!(screen.filters().is_visible(element.element_type));
            }
            let hidden = elements
                .iter()
                .filter(|e| !screen.filters().is_visible(e.element_type))
                .count();
            assert_eq!(screen.visible(&elements).len() + hidden, elements.len());
        }
    }

    #[test]
    fn test_reports_off_hides_hotspots() {
        let mut screen = MapScreen::new();
        screen.toggle_filter(MapFilter::Reports);
        let elements = seed::map_elements();
        let visible = screen.visible(&elements);
        assert_eq!(visible.len(), 5);
        assert!(visible
            .iter()
            .all(|e| e.element_type != MapElementType::ReportHotspot));
    }

    #[test]
    fn test_selection_replaces_and_closes() {
        let mut screen = MapScreen::new();
        let elements = seed::map_elements();

        screen.select(elements[0].clone());
        screen.select(elements[1].clone());
        assert_eq!(screen.selected().map(|e| e.id.as_str()), Some(elements[1].id.as_str()));

        screen.close_details();
        assert!(screen.selected().is_none());
    }

    #[test]
    fn test_parse_list() {
        let set = MapFilterSet::parse_list("bike_lanes, reports").unwrap();
        assert_eq!(
            set.active().collect::<Vec<_>>(),
            [MapFilter::BikeLanes, MapFilter::Reports]
        );
        assert!(MapFilterSet::parse_list("").unwrap().active().next().is_none());
        assert_eq!(
            MapFilterSet::parse_list("bike_lanes,ufo"),
            Err(MapError::UnknownFilter("ufo".to_string()))
        );
    }
}
