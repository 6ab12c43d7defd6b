/// Use cases module containing application business logic orchestration
mod explore_dependencies;
mod explorer_session;

pub use explore_dependencies::ExploreDependenciesUseCase;
pub use explorer_session::ExplorerSession;
