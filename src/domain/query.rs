use serde::Serialize;
use std::collections::BTreeSet;

use super::language::LanguageQid;
use crate::catalog::QueryTemplate;

/// Which languages a query is relevant for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageScope {
    /// Applicable to every language.
    AllLanguages,
    /// Applicable only to the listed languages.
    Only(BTreeSet<LanguageQid>),
}

impl LanguageScope {
    pub fn only(languages: impl IntoIterator<Item = LanguageQid>) -> Self {
        Self::Only(languages.into_iter().collect())
    }

    pub fn matches(&self, language: &LanguageQid) -> bool {
        match self {
            LanguageScope::AllLanguages => true,
            LanguageScope::Only(languages) => languages.contains(language),
        }
    }
}

/// One improvable-data check: an identity key, a display label, the languages
/// it applies to, and the template that generates its SPARQL text.
///
/// `value` and `label` are distinct fields even though the builtin catalog
/// currently sets them equal: `value` is the stable identity key, `label` is
/// what a UI shows.
#[derive(Debug, Clone)]
pub struct QueryDefinition {
    pub value: String,
    pub label: String,
    pub scope: LanguageScope,
    pub template: QueryTemplate,
}

impl QueryDefinition {
    pub fn new(value: impl Into<String>, scope: LanguageScope, template: QueryTemplate) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
            scope,
            template,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn option(&self) -> QueryOption {
        QueryOption {
            value: self.value.clone(),
            label: self.label.clone(),
        }
    }
}

/// A named bucket of query definitions; order is display order.
#[derive(Debug, Clone)]
pub struct QueryGroup {
    pub name: String,
    pub queries: Vec<QueryDefinition>,
}

impl QueryGroup {
    pub fn new(name: impl Into<String>, queries: Vec<QueryDefinition>) -> Self {
        Self {
            name: name.into(),
            queries,
        }
    }
}

/// A `{value, label}` pair shaped for a selection widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryOption {
    pub value: String,
    pub label: String,
}

/// A group of options, shaped for a grouped selection widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryOptionGroup {
    pub label: String,
    pub items: Vec<QueryOption>,
}
