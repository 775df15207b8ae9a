use crate::client::{
    api_client::PlannerClient,
    banner::ErrorBanner,
    form::TripForm,
    map_view::MapView,
    render::render_html,
};
use crate::models::itinerary::{GenerationOutcome, Itinerary};
use crate::services::template_itinerary;

/// Where the rendered itinerary came from.
#[derive(Debug, Clone, PartialEq)]
pub enum TripSource {
    Generated,
    /// The backend answered with a degraded result.
    ServerFallback(String),
    /// The backend could not be reached; built locally.
    LocalFallback(String),
}

#[derive(Debug, Clone)]
pub struct RenderedTrip {
    pub itinerary: Itinerary,
    pub source: TripSource,
    pub html: String,
}

/// Drives one page: form in, rendered itinerary and map state out.
pub struct FormController {
    api: PlannerClient,
    map: MapView,
    banner: ErrorBanner,
    debug_info: Option<String>,
}

impl FormController {
    /// Fetch the map token and set up an empty map. A token failure is
    /// logged and leaves the map without a token.
    pub async fn bootstrap(api: PlannerClient) -> Self {
        let token = match api.fetch_map_token().await {
            Ok(token) => token.unwrap_or_default(),
            Err(e) => {
                log::error!("Failed to fetch Mapbox token: {}", e);
                String::new()
            }
        };

        Self::with_map(api, MapView::new(token))
    }

    pub fn with_map(api: PlannerClient, map: MapView) -> Self {
        Self {
            api,
            map,
            banner: ErrorBanner::default(),
            debug_info: None,
        }
    }

    pub fn map(&self) -> &MapView {
        &self.map
    }

    pub fn banner(&self) -> &ErrorBanner {
        &self.banner
    }

    /// Last error worth showing in the debug area, if any.
    pub fn debug_info(&self) -> Option<&str> {
        self.debug_info.as_deref()
    }

    /// Validate and submit the form. `None` means the form was rejected
    /// locally and the banner holds the reason; otherwise something is always
    /// rendered, locally synthesized if the backend is unreachable.
    pub async fn submit(&mut self, form: &TripForm) -> Option<RenderedTrip> {
        let body = match form.submission() {
            Ok(body) => body,
            Err(e) => {
                self.banner.show(e.to_string());
                return None;
            }
        };
        self.debug_info = None;

        let (itinerary, source) = match self.api.generate(&body).await {
            Ok(GenerationOutcome::Ok(itinerary)) => (itinerary, TripSource::Generated),
            Ok(GenerationOutcome::Degraded { itinerary, reason }) => {
                log::warn!("Backend returned a fallback itinerary: {}", reason);
                self.debug_info = Some(reason.clone());
                (itinerary, TripSource::ServerFallback(reason))
            }
            Err(e) => {
                let message = e.to_string();
                log::error!("Itinerary request failed, building one locally: {}", message);
                self.banner.show(message.clone());
                self.debug_info = Some(message.clone());

                let itinerary = template_itinerary::synthesize(
                    body.city.as_deref().unwrap_or_default(),
                    body.budget.unwrap_or(0),
                    body.days.and_then(|d| u32::try_from(d).ok()).unwrap_or(0),
                );
                (itinerary, TripSource::LocalFallback(message))
            }
        };

        Some(self.display(itinerary, source))
    }

    fn display(&mut self, itinerary: Itinerary, source: TripSource) -> RenderedTrip {
        if let Some(coordinates) = itinerary.city_coordinates {
            self.map.show_destination(coordinates);
        }

        RenderedTrip {
            html: render_html(&itinerary),
            itinerary,
            source,
        }
    }
}
