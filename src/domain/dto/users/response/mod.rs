pub mod user_response;

pub use user_response::{AvailabilityResponse, MessageResponse, UserActionResponse, UserResponse};
