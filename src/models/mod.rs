pub mod itinerary;
pub mod lenient;
pub mod trip;
