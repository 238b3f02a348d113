/// Use cases module containing application business logic orchestration
mod analyze_dependencies;
mod load_corpus;

pub use analyze_dependencies::AnalyzeDependenciesUseCase;
pub use load_corpus::LoadCorpusUseCase;
