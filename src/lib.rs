pub mod catalog;
pub mod domain;

pub use catalog::{Catalog, QueryTemplate};
pub use domain::{
    qid_for_code, LanguageQid, LanguageScope, QueryDefinition, QueryGroup, QueryOption,
    QueryOptionGroup,
};
