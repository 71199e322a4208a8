// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map data query and rendering.
//!
//! The renderer is a capability picked once at startup. Hosts with a
//! native map get GeoJSON layers; everything else gets a placeholder.

use std::sync::Arc;

use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject};
use serde::Serialize;
use serde_json::json;

use crate::components::theme::{Theme, ERROR, PRIMARY, SECONDARY, SUCCESS};
use crate::db::Repository;
use crate::error::Result;
use crate::models::trip::to_line_string;
use crate::models::{BoundingBox, MapElement, MapElementType, MapShape};
use crate::views::map::MapFilterSet;

/// Stroke width for line layers, in device pixels.
const LINE_STROKE_WIDTH: u32 = 4;

pub const UNSUPPORTED_MESSAGE: &str =
    "The map feature is currently only available on mobile devices.";
pub const UNSUPPORTED_DETAIL: &str =
    "Please use our mobile app to access the full mapping functionality.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapRendererKind {
    #[default]
    Native,
    Unsupported,
}

impl MapRendererKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapRendererKind::Native => "native",
            MapRendererKind::Unsupported => "unsupported",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "native" => Some(MapRendererKind::Native),
            "unsupported" => Some(MapRendererKind::Unsupported),
            _ => None,
        }
    }

    /// Build the renderer for this kind.
    pub fn renderer(&self) -> Arc<dyn MapRenderer> {
        match self {
            MapRendererKind::Native => Arc::new(NativeMapRenderer),
            MapRendererKind::Unsupported => Arc::new(UnsupportedMapRenderer),
        }
    }
}

/// What the map screen draws.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MapRendering {
    Layers { layers: FeatureCollection },
    Placeholder { message: String, detail: String },
}

pub trait MapRenderer: Send + Sync {
    fn kind(&self) -> MapRendererKind;

    fn render(&self, elements: &[MapElement], theme: &Theme) -> MapRendering;
}

/// Line stroke color by element type.
pub fn line_color(element_type: MapElementType) -> &'static str {
    match element_type {
        MapElementType::BusRoute => SECONDARY.base(),
        MapElementType::SafeSidewalk => SUCCESS.base(),
        _ => PRIMARY.base(),
    }
}

/// Marker fill color by element type.
pub fn marker_color(element_type: MapElementType) -> &'static str {
    match element_type {
        MapElementType::ReportHotspot => ERROR.base(),
        MapElementType::BusinessLocation => SECONDARY.base(),
        _ => PRIMARY.base(),
    }
}

pub struct NativeMapRenderer;

impl NativeMapRenderer {
    fn feature(element: &MapElement, theme: &Theme) -> Feature {
        let mut properties: JsonObject = element.properties.clone();
        properties.insert("name".to_string(), json!(element.name));
        properties.insert("elementType".to_string(), json!(element.element_type.as_str()));
        if let Some(description) = &element.description {
            properties.insert("description".to_string(), json!(description));
        }

        let value = match element.shape() {
            MapShape::Line(points) => {
                properties.insert("stroke".to_string(), json!(line_color(element.element_type)));
                properties.insert("strokeWidth".to_string(), json!(LINE_STROKE_WIDTH));
                geojson::Value::from(&to_line_string(points))
            }
            MapShape::Point(p) => {
                properties.insert(
                    "markerColor".to_string(),
                    json!(marker_color(element.element_type)),
                );
                properties.insert("iconColor".to_string(), json!(Theme::LIGHT.background));
                geojson::Value::from(&geo::Point::new(p.longitude, p.latitude))
            }
        };
        properties.insert("labelColor".to_string(), json!(theme.text));

        Feature {
            bbox: None,
            geometry: Some(Geometry::new(value)),
            id: Some(Id::String(element.id.clone())),
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

impl MapRenderer for NativeMapRenderer {
    fn kind(&self) -> MapRendererKind {
        MapRendererKind::Native
    }

    fn render(&self, elements: &[MapElement], theme: &Theme) -> MapRendering {
        // Lines first so markers draw on top.
        let (lines, points): (Vec<&MapElement>, Vec<&MapElement>) =
            elements.iter().partition(|e| e.element_type.is_line());
        let features = lines
            .into_iter()
            .chain(points)
            .map(|e| Self::feature(e, theme))
            .collect();

        MapRendering::Layers {
            layers: FeatureCollection {
                bbox: None,
                features,
                foreign_members: None,
            },
        }
    }
}

pub struct UnsupportedMapRenderer;

impl MapRenderer for UnsupportedMapRenderer {
    fn kind(&self) -> MapRendererKind {
        MapRendererKind::Unsupported
    }

    fn render(&self, _elements: &[MapElement], _theme: &Theme) -> MapRendering {
        MapRendering::Placeholder {
            message: UNSUPPORTED_MESSAGE.to_string(),
            detail: UNSUPPORTED_DETAIL.to_string(),
        }
    }
}

/// Bounding-box query plus filter visibility over the repository.
#[derive(Clone)]
pub struct MapService {
    repo: Arc<dyn Repository>,
    renderer: Arc<dyn MapRenderer>,
}

impl MapService {
    pub fn new(repo: Arc<dyn Repository>, renderer: Arc<dyn MapRenderer>) -> Self {
        Self { repo, renderer }
    }

    pub fn renderer_kind(&self) -> MapRendererKind {
        self.renderer.kind()
    }

    /// Elements inside `bounds` whose layer is switched on.
    pub fn query(
        &self,
        bounds: Option<&BoundingBox>,
        filters: &MapFilterSet,
    ) -> Result<Vec<MapElement>> {
        let elements: Vec<MapElement> = self
            .repo
            .query_map_elements(bounds)?
            .into_iter()
            .filter(|e| filters.is_visible(e.element_type))
            .collect();

        tracing::debug!(
            bounded = bounds.is_some(),
            count = elements.len(),
            "Map elements queried"
        );
        Ok(elements)
    }

    pub fn render(&self, elements: &[MapElement], theme: &Theme) -> MapRendering {
        self.renderer.render(elements, theme)
    }
}
