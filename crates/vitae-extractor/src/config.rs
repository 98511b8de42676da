//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Element and attribute names the extractors navigate by
///
/// The default carries the English names. Real curriculum documents use the
/// Portuguese names of [`Vocabulary::lattes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Section holding general data about the person
    pub general_data: String,
    /// Awards section inside general data
    pub awards_and_titles: String,
    /// Repeated award element
    pub award_or_title: String,
    /// Award name attribute
    pub award_name: String,
    /// Award year attribute
    pub award_year: String,
    /// Summary element inside general data
    pub summary_cv: String,
    /// Portuguese summary text attribute
    pub summary_text: String,
    /// English summary text attribute
    pub summary_text_en: String,
    /// Section holding bibliographic production
    pub bibliographic_production: String,
    /// Published articles section
    pub published_articles: String,
    /// Repeated article element
    pub published_article: String,
    /// Integer ordering attribute of an article
    pub production_sequence: String,
    /// Basic data child of an article
    pub article_basic_data: String,
    /// Detailing child of an article
    pub article_detailing: String,
    /// Title attribute (basic data)
    pub article_title: String,
    /// Year attribute (basic data)
    pub article_year: String,
    /// Journal title attribute (detailing)
    pub journal_title: String,
    /// Volume attribute (detailing)
    pub volume: String,
    /// First page attribute (detailing)
    pub initial_page: String,
    /// Last page attribute (detailing)
    pub final_page: String,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            general_data: "GENERAL-DATA".to_string(),
            awards_and_titles: "AWARDS-AND-TITLES".to_string(),
            award_or_title: "AWARD-OR-TITLE".to_string(),
            award_name: "NAME-OF-AWARD-OR-TITLE".to_string(),
            award_year: "YEAR-OF-AWARD".to_string(),
            summary_cv: "SUMMARY-CV".to_string(),
            summary_text: "TEXT-SUMMARY-CV-RH".to_string(),
            summary_text_en: "TEXT-SUMMARY-CV-RH-EN".to_string(),
            bibliographic_production: "BIBLIOGRAPHIC-PRODUCTION".to_string(),
            published_articles: "PUBLISHED-ARTICLES".to_string(),
            published_article: "PUBLISHED-ARTICLE".to_string(),
            production_sequence: "PRODUCTION-SEQUENCE".to_string(),
            article_basic_data: "BASIC-DATA-OF-ARTICLE".to_string(),
            article_detailing: "DETAILING-OF-ARTICLE".to_string(),
            article_title: "TITLE-OF-ARTICLE".to_string(),
            article_year: "YEAR-OF-ARTICLE".to_string(),
            journal_title: "TITLE-OF-JOURNAL-OR-MAGAZINE".to_string(),
            volume: "VOLUME".to_string(),
            initial_page: "INITIAL-PAGE".to_string(),
            final_page: "FINAL-PAGE".to_string(),
        }
    }
}

impl Vocabulary {
    /// Names used by Lattes curriculum documents
    pub fn lattes() -> Self {
        Self {
            general_data: "DADOS-GERAIS".to_string(),
            awards_and_titles: "PREMIOS-TITULOS".to_string(),
            award_or_title: "PREMIO-TITULO".to_string(),
            award_name: "NOME-DO-PREMIO-OU-TITULO".to_string(),
            award_year: "ANO-DA-PREMIACAO".to_string(),
            summary_cv: "RESUMO-CV".to_string(),
            summary_text: "TEXTO-RESUMO-CV-RH".to_string(),
            summary_text_en: "TEXTO-RESUMO-CV-RH-EN".to_string(),
            bibliographic_production: "PRODUCAO-BIBLIOGRAFICA".to_string(),
            published_articles: "ARTIGOS-PUBLICADOS".to_string(),
            published_article: "ARTIGO-PUBLICADO".to_string(),
            production_sequence: "SEQUENCIA-PRODUCAO".to_string(),
            article_basic_data: "DADOS-BASICOS-DO-ARTIGO".to_string(),
            article_detailing: "DETALHAMENTO-DO-ARTIGO".to_string(),
            article_title: "TITULO-DO-ARTIGO".to_string(),
            article_year: "ANO-DO-ARTIGO".to_string(),
            journal_title: "TITULO-DO-PERIODICO-OU-REVISTA".to_string(),
            volume: "VOLUME".to_string(),
            initial_page: "PAGINA-INICIAL".to_string(),
            final_page: "PAGINA-FINAL".to_string(),
        }
    }

    fn names(&self) -> [(&'static str, &str); 20] {
        [
            ("general_data", self.general_data.as_str()),
            ("awards_and_titles", self.awards_and_titles.as_str()),
            ("award_or_title", self.award_or_title.as_str()),
            ("award_name", self.award_name.as_str()),
            ("award_year", self.award_year.as_str()),
            ("summary_cv", self.summary_cv.as_str()),
            ("summary_text", self.summary_text.as_str()),
            ("summary_text_en", self.summary_text_en.as_str()),
            ("bibliographic_production", self.bibliographic_production.as_str()),
            ("published_articles", self.published_articles.as_str()),
            ("published_article", self.published_article.as_str()),
            ("production_sequence", self.production_sequence.as_str()),
            ("article_basic_data", self.article_basic_data.as_str()),
            ("article_detailing", self.article_detailing.as_str()),
            ("article_title", self.article_title.as_str()),
            ("article_year", self.article_year.as_str()),
            ("journal_title", self.journal_title.as_str()),
            ("volume", self.volume.as_str()),
            ("initial_page", self.initial_page.as_str()),
            ("final_page", self.final_page.as_str()),
        ]
    }

    /// Validate that every name is usable
    pub fn validate(&self) -> Result<(), String> {
        for (field, name) in self.names() {
            if name.trim().is_empty() {
                return Err(format!("{} must not be empty", field));
            }
        }
        Ok(())
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Language code used when the caller does not pick one
    pub default_language: String,

    /// Maximum articles returned when the caller does not pick a limit (-1 for all)
    pub publication_limit: i64,

    /// Element and attribute names
    pub vocabulary: Vocabulary,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.vocabulary.validate()?;
        if self.default_language.trim().is_empty() {
            return Err("default_language must not be empty".to_string());
        }
        if self.publication_limit < -1 {
            return Err(format!(
                "publication_limit must be -1 or non-negative, got {}",
                self.publication_limit
            ));
        }
        Ok(())
    }

    /// Preset for Lattes curriculum documents
    pub fn lattes() -> Self {
        Self {
            vocabulary: Vocabulary::lattes(),
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    /// English vocabulary, Portuguese summaries, five articles
    fn default() -> Self {
        Self {
            default_language: "pt".to_string(),
            publication_limit: 5,
            vocabulary: Vocabulary::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lattes_config_is_valid() {
        let config = ExtractorConfig::lattes();
        assert!(config.validate().is_ok());
        assert_eq!(config.vocabulary.general_data, "DADOS-GERAIS");
        assert_eq!(config.publication_limit, 5);
    }

    #[test]
    fn test_empty_name_is_invalid() {
        let mut config = ExtractorConfig::default();
        config.vocabulary.production_sequence = "  ".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.contains("production_sequence"));
    }

    #[test]
    fn test_invalid_publication_limit() {
        let mut config = ExtractorConfig::default();
        config.publication_limit = -2;
        assert!(config.validate().is_err());

        config.publication_limit = -1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::lattes();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
            publication_limit = -1

            [vocabulary]
            general_data = "DADOS-GERAIS"
        "#;
        let config = ExtractorConfig::from_toml(toml_str).unwrap();

        assert_eq!(config.publication_limit, -1);
        assert_eq!(config.default_language, "pt");
        assert_eq!(config.vocabulary.general_data, "DADOS-GERAIS");
        assert_eq!(config.vocabulary.award_name, "NAME-OF-AWARD-OR-TITLE");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(ExtractorConfig::from_toml("publication_limit = \"many\"").is_err());
    }
}
