// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map elements and their geometry handling.

use geo::{coord, Intersects, LineString, Point, Rect};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::trip::to_line_string;
use crate::models::GeoPoint;

/// Kind of feature drawn on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum MapElementType {
    BikeLane,
    SafeSidewalk,
    BusRoute,
    BusinessLocation,
    ReportHotspot,
}

impl MapElementType {
    pub const ALL: [MapElementType; 5] = [
        MapElementType::BikeLane,
        MapElementType::SafeSidewalk,
        MapElementType::BusRoute,
        MapElementType::BusinessLocation,
        MapElementType::ReportHotspot,
    ];

    /// Line-shaped kinds carry a geometry; the others a single location.
    pub fn is_line(&self) -> bool {
        matches!(
            self,
            MapElementType::BikeLane | MapElementType::SafeSidewalk | MapElementType::BusRoute
        )
    }

    /// Filter tag gating this kind's visibility.
    pub fn filter(&self) -> MapFilter {
        match self {
            MapElementType::BikeLane => MapFilter::BikeLanes,
            MapElementType::SafeSidewalk => MapFilter::SafeSidewalks,
            MapElementType::BusRoute => MapFilter::BusRoutes,
            MapElementType::BusinessLocation => MapFilter::Businesses,
            MapElementType::ReportHotspot => MapFilter::Reports,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MapElementType::BikeLane => "bike_lane",
            MapElementType::SafeSidewalk => "safe_sidewalk",
            MapElementType::BusRoute => "bus_route",
            MapElementType::BusinessLocation => "business_location",
            MapElementType::ReportHotspot => "report_hotspot",
        }
    }
}

/// Map layer toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapFilter {
    BikeLanes,
    BusRoutes,
    SafeSidewalks,
    Reports,
    Businesses,
}

impl MapFilter {
    pub const ALL: [MapFilter; 5] = [
        MapFilter::BikeLanes,
        MapFilter::BusRoutes,
        MapFilter::SafeSidewalks,
        MapFilter::Reports,
        MapFilter::Businesses,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MapFilter::BikeLanes => "bike_lanes",
            MapFilter::BusRoutes => "bus_routes",
            MapFilter::SafeSidewalks => "safe_sidewalks",
            MapFilter::Reports => "reports",
            MapFilter::Businesses => "businesses",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }
}

/// Element shape. The variant is fixed by the element type.
#[derive(Debug, Clone, PartialEq)]
pub enum MapShape {
    Line(Vec<GeoPoint>),
    Point(GeoPoint),
}

impl MapShape {
    /// Check if this shape touches a bounding box.
    pub fn intersects(&self, rect: &Rect<f64>) -> bool {
        match self {
            MapShape::Line(points) => {
                let line: LineString<f64> = to_line_string(points);
                line.intersects(rect)
            }
            MapShape::Point(p) => Point::new(p.longitude, p.latitude).intersects(rect),
        }
    }
}

/// A renderable geographic feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MapElementRecord", into = "MapElementRecord")]
pub struct MapElement {
    pub id: String,
    pub element_type: MapElementType,
    pub name: String,
    pub description: Option<String>,
    shape: MapShape,
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl MapElement {
    /// Build a line-shaped element (bike lane, bus route, sidewalk).
    pub fn line(
        id: impl Into<String>,
        element_type: MapElementType,
        name: impl Into<String>,
        geometry: Vec<GeoPoint>,
    ) -> Result<Self, MapError> {
        if !element_type.is_line() {
            return Err(MapError::ShapeMismatch(element_type));
        }
        if geometry.len() < 2 {
            return Err(MapError::EmptyGeometry);
        }
        Ok(Self {
            id: id.into(),
            element_type,
            name: name.into(),
            description: None,
            shape: MapShape::Line(geometry),
            properties: Default::default(),
        })
    }

    /// Build a point element (report hotspot, business location).
    pub fn point(
        id: impl Into<String>,
        element_type: MapElementType,
        name: impl Into<String>,
        location: GeoPoint,
    ) -> Result<Self, MapError> {
        if element_type.is_line() {
            return Err(MapError::ShapeMismatch(element_type));
        }
        Ok(Self {
            id: id.into(),
            element_type,
            name: name.into(),
            description: None,
            shape: MapShape::Point(location),
            properties: Default::default(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Fixed at construction; lines always have at least two vertices.
    pub fn shape(&self) -> &MapShape {
        &self.shape
    }

    /// Anchor point: the location, or the first vertex of a line.
    pub fn location(&self) -> Option<GeoPoint> {
        match &self.shape {
            MapShape::Point(p) => Some(*p),
            MapShape::Line(points) => points.first().copied(),
        }
    }
}

/// Wire shape matching the mobile client's `MapElement` declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapElementRecord {
    id: String,
    #[serde(rename = "type")]
    element_type: MapElementType,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    location: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    geometry: Option<Vec<GeoPoint>>,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    properties: serde_json::Map<String, serde_json::Value>,
}

impl TryFrom<MapElementRecord> for MapElement {
    type Error = MapError;

    fn try_from(r: MapElementRecord) -> Result<Self, Self::Error> {
        let element = if r.element_type.is_line() {
            MapElement::line(r.id, r.element_type, r.name, r.geometry.unwrap_or_default())?
        } else {
            let location = r.location.ok_or(MapError::MissingLocation)?;
            MapElement::point(r.id, r.element_type, r.name, location)?
        };
        Ok(MapElement {
            description: r.description,
            properties: r.properties,
            ..element
        })
    }
}

impl From<MapElement> for MapElementRecord {
    fn from(e: MapElement) -> Self {
        let location = e.location();
        let geometry = match e.shape {
            MapShape::Line(points) => Some(points),
            MapShape::Point(_) => None,
        };
        MapElementRecord {
            id: e.id,
            element_type: e.element_type,
            name: e.name,
            description: e.description,
            location,
            geometry,
            properties: e.properties,
        }
    }
}

/// Viewport bounds in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Parse `minLon,minLat,maxLon,maxLat`.
    pub fn parse(raw: &str) -> Result<Self, MapError> {
        let parts: Vec<f64> = raw
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| MapError::InvalidBounds(raw.to_string()))?;

        let [min_lon, min_lat, max_lon, max_lat] = parts[..] else {
            return Err(MapError::InvalidBounds(raw.to_string()));
        };

        let bbox = Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        };
        if min_lon > max_lon
            || min_lat > max_lat
            || !GeoPoint::new(min_lat, min_lon).is_valid()
            || !GeoPoint::new(max_lat, max_lon).is_valid()
        {
            return Err(MapError::InvalidBounds(raw.to_string()));
        }
        Ok(bbox)
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min_lon, y: self.min_lat },
            coord! { x: self.max_lon, y: self.max_lat },
        )
    }
}

/// Errors from map element construction and queries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MapError {
    #[error("{} elements have the other shape", .0.as_str())]
    ShapeMismatch(MapElementType),

    #[error("Line elements need at least two points")]
    EmptyGeometry,

    #[error("Point elements need a location")]
    MissingLocation,

    #[error("Invalid bounding box: {0}")]
    InvalidBounds(String),

    #[error("Unknown map filter: {0}")]
    UnknownFilter(String),
}
