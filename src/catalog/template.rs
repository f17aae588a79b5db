use crate::domain::LanguageQid;

const LABEL_SERVICE: &str =
    r#"SERVICE wikibase:label { bd:serviceParam wikibase:language "[AUTO_LANGUAGE],mul,en". }"#;

/// Noun as a lexical category.
const NOUN_QID: &str = "Q1084";
/// Verb as a lexical category.
const VERB_QID: &str = "Q24905";

/// Identifies the SPARQL text a query generates, independently of the
/// catalog entry that carries it.
///
/// Every variant renders a query over Lexemes of one language, selecting
/// `?lexeme ?lemma ?lexicalCategory ?lexicalCategoryLabel` so results share a
/// common shape downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryTemplate {
    /// Lexemes with no forms, no senses, and no statements at all.
    EmptyLexeme,
    /// Lexemes without any sense.
    MissingSenses,
    /// Lexemes without any form.
    MissingForms,
    /// Lexemes carrying no external-identifier statement.
    MissingExternalIdentifiers,
    /// Lexemes without a usage example (P5831).
    MissingUsageExample,
    /// Nouns whose senses lack item for this sense (P5137), demonym of
    /// (P6271), and hyperonym (P6593).
    MissingSenseItemForNouns,
    /// Verbs whose senses lack predicate for (P9970) and troponym of (P5975).
    MissingPredicateForVerbs,
    /// Forms without grammatical features.
    MissingGrammaticalFeatures,
    /// Lexemes with forms but no IPA transcription (P898) on any of them.
    MissingIpaTranscription,
    /// Lexemes with forms but no pronunciation audio (P443) on any of them.
    MissingPronunciationAudio,
    /// Item for this sense (P5137) stated on the Lexeme instead of a sense.
    MisplacedSenseItem,
}

impl QueryTemplate {
    /// Renders the query text for one language. Pure: same input, same
    /// output, no I/O.
    pub fn render(&self, language: &LanguageQid) -> String {
        match self {
            QueryTemplate::EmptyLexeme => format!(
                r#"SELECT ?lexeme ?lemma ?lexicalCategory ?lexicalCategoryLabel WHERE {{
  ?lexeme dct:language wd:{qid} ;
          wikibase:lemma ?lemma ;
          wikibase:lexicalCategory ?lexicalCategory .
  FILTER NOT EXISTS {{ ?lexeme ontolex:lexicalForm ?form }}
  FILTER NOT EXISTS {{ ?lexeme ontolex:sense ?sense }}
  ?lexeme wikibase:statements 0 .
  {label_service}
}}"#,
                qid = language,
                label_service = LABEL_SERVICE,
            ),
            QueryTemplate::MissingSenses => format!(
                r#"SELECT ?lexeme ?lemma ?lexicalCategory ?lexicalCategoryLabel WHERE {{
  ?lexeme dct:language wd:{qid} ;
          wikibase:lemma ?lemma ;
          wikibase:lexicalCategory ?lexicalCategory .
  FILTER NOT EXISTS {{ ?lexeme ontolex:sense ?sense }}
  {label_service}
}}"#,
                qid = language,
                label_service = LABEL_SERVICE,
            ),
            QueryTemplate::MissingForms => format!(
                r#"SELECT ?lexeme ?lemma ?lexicalCategory ?lexicalCategoryLabel WHERE {{
  ?lexeme dct:language wd:{qid} ;
          wikibase:lemma ?lemma ;
          wikibase:lexicalCategory ?lexicalCategory .
  FILTER NOT EXISTS {{ ?lexeme ontolex:lexicalForm ?form }}
  {label_service}
}}"#,
                qid = language,
                label_service = LABEL_SERVICE,
            ),
            QueryTemplate::MissingExternalIdentifiers => format!(
                r#"SELECT ?lexeme ?lemma ?lexicalCategory ?lexicalCategoryLabel WHERE {{
  ?lexeme dct:language wd:{qid} ;
          wikibase:lemma ?lemma ;
          wikibase:lexicalCategory ?lexicalCategory .
  FILTER NOT EXISTS {{
    ?lexeme ?p ?val .
    ?prop wikibase:directClaim ?p ;
          wikibase:propertyType wikibase:ExternalId .
  }}
  {label_service}
}}"#,
                qid = language,
                label_service = LABEL_SERVICE,
            ),
            QueryTemplate::MissingUsageExample => format!(
                r#"SELECT ?lexeme ?lemma ?lexicalCategory ?lexicalCategoryLabel WHERE {{
  ?lexeme dct:language wd:{qid} ;
          wikibase:lemma ?lemma ;
          wikibase:lexicalCategory ?lexicalCategory .
  FILTER NOT EXISTS {{ ?lexeme wdt:P5831 ?example }}
  {label_service}
}}"#,
                qid = language,
                label_service = LABEL_SERVICE,
            ),
            QueryTemplate::MissingSenseItemForNouns => {
                missing_sense_property(language, NOUN_QID, &["P5137", "P6271", "P6593"])
            }
            QueryTemplate::MissingPredicateForVerbs => {
                missing_sense_property(language, VERB_QID, &["P9970", "P5975"])
            }
            QueryTemplate::MissingGrammaticalFeatures => format!(
                r#"SELECT ?lexeme ?lemma ?lexicalCategory ?lexicalCategoryLabel WHERE {{
  ?lexeme dct:language wd:{qid} ;
          wikibase:lemma ?lemma ;
          wikibase:lexicalCategory ?lexicalCategory ;
          ontolex:lexicalForm ?form .
  FILTER NOT EXISTS {{ ?form wikibase:grammaticalFeature ?feature }}
  {label_service}
}}"#,
                qid = language,
                label_service = LABEL_SERVICE,
            ),
            QueryTemplate::MissingIpaTranscription => missing_form_property(language, "P898"),
            QueryTemplate::MissingPronunciationAudio => missing_form_property(language, "P443"),
            QueryTemplate::MisplacedSenseItem => format!(
                r#"SELECT ?lexeme ?lemma ?lexicalCategory ?lexicalCategoryLabel WHERE {{
  ?lexeme dct:language wd:{qid} ;
          wikibase:lemma ?lemma ;
          wikibase:lexicalCategory ?lexicalCategory ;
          wdt:P5137 ?senseItem .
  FILTER NOT EXISTS {{
    ?lexeme ontolex:sense ?sense .
    ?sense wdt:P5137 ?validUse .
  }}
  {label_service}
}}"#,
                qid = language,
                label_service = LABEL_SERVICE,
            ),
        }
    }
}

/// Lexemes that have forms, none of which carries `property`.
fn missing_form_property(language: &LanguageQid, property: &str) -> String {
    format!(
        r#"SELECT DISTINCT ?lexeme ?lemma ?lexicalCategory ?lexicalCategoryLabel WHERE {{
  ?lexeme dct:language wd:{qid} ;
          wikibase:lemma ?lemma ;
          wikibase:lexicalCategory ?lexicalCategory ;
          ontolex:lexicalForm ?form .
  FILTER NOT EXISTS {{
    ?lexeme ontolex:lexicalForm ?form2 .
    ?form2 wdt:{property} ?value .
  }}
  {label_service}
}}"#,
        qid = language,
        property = property,
        label_service = LABEL_SERVICE,
    )
}

/// Lexemes of one lexical category that have senses, none of which carries
/// any of `properties`.
fn missing_sense_property(language: &LanguageQid, category: &str, properties: &[&str]) -> String {
    let alternation = properties
        .iter()
        .map(|id| format!("wdt:{}", id))
        .collect::<Vec<_>>()
        .join("|");
    format!(
        r#"SELECT ?lexeme ?lemma ?lexicalCategory ?lexicalCategoryLabel WHERE {{
  ?lexeme dct:language wd:{qid} ;
          wikibase:lemma ?lemma ;
          wikibase:lexicalCategory wd:{category} ;
          ontolex:sense ?sense .
  BIND(wd:{category} AS ?lexicalCategory)
  FILTER NOT EXISTS {{
    ?lexeme ontolex:sense ?sense2 .
    ?sense2 {alternation} ?target .
  }}
  {label_service}
}}"#,
        qid = language,
        category = category,
        alternation = alternation,
        label_service = LABEL_SERVICE,
    )
}
