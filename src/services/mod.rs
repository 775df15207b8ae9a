pub mod budget_normalizer;
pub mod geocoding_service;
pub mod itinerary_generation_service;
pub mod itinerary_parser;
pub mod template_itinerary;
pub mod text_generation_service;
