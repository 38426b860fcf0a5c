/// Ports layer - Interface definitions between the core and infrastructure
pub mod outbound;
