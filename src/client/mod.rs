//! The form side of the planner: validates input, calls the backend, and
//! renders whatever comes back, or a locally built itinerary when the backend
//! is unreachable.

pub mod api_client;
pub mod banner;
pub mod controller;
pub mod form;
pub mod map_view;
pub mod render;

pub use api_client::{ClientError, PlannerClient};
pub use controller::{FormController, RenderedTrip, TripSource};
pub use form::TripForm;
