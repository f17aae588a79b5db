mod language;
mod query;

pub use language::{qid_for_code, LanguageQid};
pub use query::{LanguageScope, QueryDefinition, QueryGroup, QueryOption, QueryOptionGroup};
