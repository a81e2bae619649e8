pub mod error_response;
pub mod suggestions_request;
