mod builtin;
mod template;

pub use template::QueryTemplate;

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::domain::{LanguageQid, QueryDefinition, QueryGroup, QueryOptionGroup};

static BUILTIN: Lazy<Catalog> =
    Lazy::new(|| Catalog::new(builtin::builtin_groups()).expect("builtin catalog is valid"));

/// The ordered, immutable set of known data-quality checks.
pub struct Catalog {
    groups: Vec<QueryGroup>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate query values. Lookup is
    /// first-match-wins, so a duplicate would make later entries unreachable.
    pub fn new(groups: Vec<QueryGroup>) -> Result<Self> {
        let mut seen = HashSet::new();
        for group in &groups {
            for query in &group.queries {
                if !seen.insert(query.value.clone()) {
                    bail!("duplicate query value in catalog: {:?}", query.value);
                }
            }
        }
        Ok(Self { groups })
    }

    /// The catalog shipped with the crate, built once per process.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn groups(&self) -> impl Iterator<Item = &QueryGroup> {
        self.groups.iter()
    }

    /// Grouped `{value, label}` options for a selection widget, keeping only
    /// the queries applicable to `language`. Groups left without queries are
    /// dropped; group and query order is preserved. `None` means no language
    /// has been selected yet and yields no options.
    pub fn options_for_language(&self, language: Option<&LanguageQid>) -> Vec<QueryOptionGroup> {
        let Some(language) = language else {
            return Vec::new();
        };

        self.groups
            .iter()
            .map(|group| QueryOptionGroup {
                label: group.name.clone(),
                items: group
                    .queries
                    .iter()
                    .filter(|query| query.scope.matches(language))
                    .map(QueryDefinition::option)
                    .collect(),
            })
            .filter(|group| !group.items.is_empty())
            .collect()
    }

    /// SPARQL text for the query identified by `value`, or `None` if the
    /// catalog holds no such query.
    pub fn sparql_for(&self, value: &str, language: &LanguageQid) -> Option<String> {
        self.groups
            .iter()
            .flat_map(|group| group.queries.iter())
            .find(|query| query.value == value)
            .map(|query| query.template.render(language))
    }

    /// Every query value in catalog order, for validating that a stored
    /// selection still refers to a known query.
    pub fn all_query_values(&self) -> Vec<&str> {
        self.groups
            .iter()
            .flat_map(|group| group.queries.iter().map(|query| query.value.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LanguageScope;

    fn english() -> LanguageQid {
        "Q1860".parse().unwrap()
    }

    #[test]
    fn builtin_catalog_lists_the_expected_groups() {
        let names: Vec<&str> = Catalog::builtin()
            .groups()
            .map(|group| group.name.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "General",
                "Senses",
                "Forms",
                "Misplacements",
                "Language-specific"
            ]
        );
    }

    #[test]
    fn options_start_with_general_and_include_is_empty() {
        let options = Catalog::builtin().options_for_language(Some(&english()));
        assert!(!options.is_empty());
        assert_eq!(options[0].label, "General");
        assert!(options[0].items.iter().any(|item| item.value == "is empty"));
    }

    #[test]
    fn options_without_a_language_are_empty() {
        let options = Catalog::builtin().options_for_language(None);
        assert!(options.is_empty());
    }

    #[test]
    fn options_never_contain_empty_groups() {
        // The builtin Language-specific group has no queries yet.
        let options = Catalog::builtin().options_for_language(Some(&english()));
        assert!(options.iter().all(|group| !group.items.is_empty()));
        assert!(options.iter().all(|group| group.label != "Language-specific"));
    }

    #[test]
    fn options_respect_language_scope() {
        let french: LanguageQid = "Q150".parse().unwrap();
        let catalog = Catalog::new(vec![QueryGroup::new(
            "General",
            vec![
                QueryDefinition::new(
                    "is empty",
                    LanguageScope::AllLanguages,
                    QueryTemplate::EmptyLexeme,
                ),
                QueryDefinition::new(
                    "has no Senses",
                    LanguageScope::only([french.clone()]),
                    QueryTemplate::MissingSenses,
                ),
            ],
        )])
        .unwrap();

        let english_options = catalog.options_for_language(Some(&english()));
        assert_eq!(english_options.len(), 1);
        assert_eq!(english_options[0].items.len(), 1);
        assert_eq!(english_options[0].items[0].value, "is empty");

        let french_options = catalog.options_for_language(Some(&french));
        assert_eq!(french_options[0].items.len(), 2);
    }

    #[test]
    fn is_empty_query_resolves_for_english() {
        let sparql = Catalog::builtin()
            .sparql_for("is empty", &english())
            .expect("query should exist");
        assert!(sparql.contains("wd:Q1860"));
        assert!(sparql.contains("?lexeme wikibase:statements 0"));
    }

    #[test]
    fn every_value_resolves_to_sparql_with_the_language() {
        let catalog = Catalog::builtin();
        let language = english();
        for value in catalog.all_query_values() {
            let sparql = catalog
                .sparql_for(value, &language)
                .unwrap_or_else(|| panic!("{value:?} did not resolve"));
            assert!(!sparql.is_empty());
            assert!(sparql.contains("wd:Q1860"), "{value:?} lacks the language");
        }
    }

    #[test]
    fn unknown_values_resolve_to_none() {
        assert!(Catalog::builtin()
            .sparql_for("no such query", &english())
            .is_none());
    }

    #[test]
    fn all_query_values_match_catalog_traversal_order() {
        let catalog = Catalog::builtin();
        let values = catalog.all_query_values();
        let expected: Vec<&str> = catalog
            .groups()
            .flat_map(|group| group.queries.iter().map(|query| query.value.as_str()))
            .collect();
        assert_eq!(values, expected);
        assert_eq!(
            values.len(),
            catalog.groups().map(|group| group.queries.len()).sum::<usize>()
        );
        assert_eq!(values.first(), Some(&"is empty"));
    }

    #[test]
    fn accessors_are_idempotent() {
        let catalog = Catalog::builtin();
        let language = english();
        assert_eq!(
            catalog.options_for_language(Some(&language)),
            catalog.options_for_language(Some(&language))
        );
        assert_eq!(
            catalog.sparql_for("has no Forms", &language),
            catalog.sparql_for("has no Forms", &language)
        );
        assert_eq!(catalog.all_query_values(), catalog.all_query_values());
    }

    #[test]
    fn construction_rejects_duplicate_values() {
        let duplicate = || {
            QueryDefinition::new(
                "is empty",
                LanguageScope::AllLanguages,
                QueryTemplate::EmptyLexeme,
            )
        };
        let result = Catalog::new(vec![
            QueryGroup::new("General", vec![duplicate()]),
            QueryGroup::new("Also general", vec![duplicate()]),
        ]);
        let err = result.err().expect("duplicate values should be rejected");
        assert!(err.to_string().contains("is empty"));
    }
}
