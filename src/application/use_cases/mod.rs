/// Use cases module containing application business logic orchestration
mod check_dependencies;

pub use check_dependencies::CheckDependenciesUseCase;
