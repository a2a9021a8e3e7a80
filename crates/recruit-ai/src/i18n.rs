//! Client-facing message catalog for the analysis endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fr" | "fr-fr" | "french" => Some(Self::Fr),
            "en" | "en-us" | "en-gb" | "english" => Some(Self::En),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    OfferNotFound,
    NoApplicationsForOffer,
    PredictionCompleted,
    ModelUnavailable,
}

impl MessageKey {
    pub const fn key(self) -> &'static str {
        match self {
            MessageKey::OfferNotFound => "offer-not-found",
            MessageKey::NoApplicationsForOffer => "no-applications-found-for-this-job-offer",
            MessageKey::PredictionCompleted => "prediction-completed",
            MessageKey::ModelUnavailable => "model-unavailable",
        }
    }
}

pub fn translate(locale: Locale, key: MessageKey) -> &'static str {
    match (locale, key) {
        (Locale::Fr, MessageKey::OfferNotFound) => "Offre introuvable",
        (Locale::Fr, MessageKey::NoApplicationsForOffer) => {
            "Aucune candidature trouvée pour cette offre d'emploi"
        }
        (Locale::Fr, MessageKey::PredictionCompleted) => "La prédiction est complète",
        (Locale::Fr, MessageKey::ModelUnavailable) => "Le modèle ML n'a pas été trouvé",
        (Locale::En, MessageKey::OfferNotFound) => "Job offer not found",
        (Locale::En, MessageKey::NoApplicationsForOffer) => {
            "No applications found for this job offer"
        }
        (Locale::En, MessageKey::PredictionCompleted) => "Prediction completed",
        (Locale::En, MessageKey::ModelUnavailable) => "The ML model could not be found",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_locale_aliases() {
        assert_eq!(Locale::parse(" FR "), Some(Locale::Fr));
        assert_eq!(Locale::parse("en-US"), Some(Locale::En));
        assert_eq!(Locale::parse("de"), None);
    }

    #[test]
    fn every_key_has_a_message_in_each_locale() {
        for key in [
            MessageKey::OfferNotFound,
            MessageKey::NoApplicationsForOffer,
            MessageKey::PredictionCompleted,
            MessageKey::ModelUnavailable,
        ] {
            assert!(!translate(Locale::Fr, key).is_empty(), "{}", key.key());
            assert!(!translate(Locale::En, key).is_empty(), "{}", key.key());
        }
    }
}
