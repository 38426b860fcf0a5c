/// Data transfer objects for the application layer
pub mod release_check_request;
pub mod requirements_request;

pub use release_check_request::ReleaseCheckRequest;
pub use requirements_request::RequirementsRequest;
