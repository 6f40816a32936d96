pub mod wellness_service;

pub use wellness_service::WellnessService;
