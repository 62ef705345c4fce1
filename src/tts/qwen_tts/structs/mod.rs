pub mod error_response;
pub mod synthesis_input;
pub mod synthesis_parameters;
pub mod synthesize_request;
pub mod synthesize_response;
