/// Dependency analysis - Domain models and pure services
///
/// Everything under this module is free of I/O; external collaborators are
/// reached only through the ports layer.
pub mod domain;
pub mod services;
