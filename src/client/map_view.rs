use crate::models::itinerary::Coordinates;

pub const INITIAL_ZOOM: f64 = 2.0;
pub const DESTINATION_ZOOM: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub position: Coordinates,
}

/// State handed to the map widget: camera plus at most one marker.
#[derive(Debug, Clone)]
pub struct MapView {
    access_token: String,
    center: Coordinates,
    zoom: f64,
    marker: Option<Marker>,
}

impl MapView {
    /// Centered on (0, 0), zoomed out, no marker.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            center: Coordinates::from((0.0, 0.0)),
            zoom: INITIAL_ZOOM,
            marker: None,
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn center(&self) -> Coordinates {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    pub fn fly_to(&mut self, center: Coordinates, zoom: f64) {
        self.center = center;
        self.zoom = zoom;
    }

    /// Fly to the destination and put the single marker on it.
    pub fn show_destination(&mut self, position: Coordinates) {
        self.fly_to(position, DESTINATION_ZOOM);
        self.marker = Some(Marker { position });
    }
}
