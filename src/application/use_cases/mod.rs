/// Application use cases - orchestration over ports and domain services
pub mod check_release;
pub mod extract_dependencies;
pub mod generate_requirements;

pub use check_release::CheckReleaseUseCase;
pub use extract_dependencies::ExtractDependenciesUseCase;
pub use generate_requirements::GenerateRequirementsUseCase;
