use super::template::QueryTemplate;
use crate::domain::{LanguageScope, QueryDefinition, QueryGroup};

/// The shipped set of improvable-data checks, in display order.
pub(super) fn builtin_groups() -> Vec<QueryGroup> {
    use LanguageScope::AllLanguages;

    vec![
        QueryGroup::new(
            "General",
            vec![
                QueryDefinition::new("is empty", AllLanguages, QueryTemplate::EmptyLexeme),
                QueryDefinition::new("has no Senses", AllLanguages, QueryTemplate::MissingSenses),
                QueryDefinition::new("has no Forms", AllLanguages, QueryTemplate::MissingForms),
                QueryDefinition::new(
                    "has no external identifiers",
                    AllLanguages,
                    QueryTemplate::MissingExternalIdentifiers,
                ),
                QueryDefinition::new(
                    "is missing usage example (P5831)",
                    AllLanguages,
                    QueryTemplate::MissingUsageExample,
                ),
            ],
        ),
        QueryGroup::new(
            "Senses",
            vec![
                QueryDefinition::new(
                    "is missing item for this sense (P5137), demonym of (P6271), or hyperonym (P6593)",
                    AllLanguages,
                    QueryTemplate::MissingSenseItemForNouns,
                ),
                QueryDefinition::new(
                    "is missing predicate for (P9970) or troponym of (P5975)",
                    AllLanguages,
                    QueryTemplate::MissingPredicateForVerbs,
                ),
            ],
        ),
        QueryGroup::new(
            "Forms",
            vec![
                QueryDefinition::new(
                    "has no grammatical features",
                    AllLanguages,
                    QueryTemplate::MissingGrammaticalFeatures,
                ),
                QueryDefinition::new(
                    "is missing IPA transcription (P898)",
                    AllLanguages,
                    QueryTemplate::MissingIpaTranscription,
                ),
                QueryDefinition::new(
                    "is missing pronunciation audio (P443)",
                    AllLanguages,
                    QueryTemplate::MissingPronunciationAudio,
                ),
            ],
        ),
        QueryGroup::new(
            "Misplacements",
            vec![QueryDefinition::new(
                "misplaced the item for this sense (P5137) at the Lexeme level instead of on the Senses level",
                AllLanguages,
                QueryTemplate::MisplacedSenseItem,
            )],
        ),
        // Awaiting contributed per-language checks.
        QueryGroup::new("Language-specific", Vec::new()),
    ]
}
