pub mod parser;
pub mod summarizer;
pub mod enricher;

pub use enricher::ArticleEnricher;
pub use parser::ParsedArticle;
pub use summarizer::Summarizer;
