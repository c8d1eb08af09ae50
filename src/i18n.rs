use crate::config::Config;

/// Display language of prompts and report lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    French,
}

/// Every user-facing string, one table per language.
#[derive(Debug)]
pub struct Messages {
    pub title: &'static str,
    pub binary_name_question: &'static str,
    pub custom_init_question: &'static str,
    pub epitech_header_question: &'static str,
    pub unit_tests_question: &'static str,
    pub lib_question: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub classic: &'static str,
    pub custom: &'static str,
    pub binary_name_error: &'static str,
    pub text_hint: &'static str,
    pub choice_hint: &'static str,
    pub cancelled: &'static str,
    pub created: &'static str,
    pub exists: &'static str,
    pub written: &'static str,
    pub kept: &'static str,
    pub done: &'static str,
}

static ENGLISH: Messages = Messages {
    title: "Epitech C project init",
    binary_name_question: "Enter your binary file name :",
    custom_init_question: "Do you want to use a custom init ?",
    epitech_header_question: "Do you want an Epitech Header for your files ?",
    unit_tests_question: "Do you want a tests directory with a Makefile for unit tests ?",
    lib_question: "Do you want a lib directory and a lib.h file ?",
    yes: "Yes",
    no: "No",
    classic: "Classic",
    custom: "Custom",
    binary_name_error: "Please enter a valid binary file name, you can't leave it blank.",
    text_hint: "Type the name, ENTER to confirm, ESC to quit",
    choice_hint: "UP/DOWN to move, ENTER to confirm, ESC to quit",
    cancelled: "Aborted, nothing was written.",
    created: "created",
    exists: "exists",
    written: "written",
    kept: "kept",
    done: "Project ready.",
};

static FRENCH: Messages = Messages {
    title: "Init de projet C Epitech",
    binary_name_question: "Entrez le nom de votre fichier binaire :",
    custom_init_question: "Voulez-vous utiliser un init personnalisé ?",
    epitech_header_question: "Voulez-vous un header Epitech pour vos fichiers ?",
    unit_tests_question: "Voulez-vous un dossier tests avec un Makefile pour les tests unitaires ?",
    lib_question: "Voulez-vous un dossier lib et un fichier lib.h ?",
    yes: "Oui",
    no: "Non",
    classic: "Classique",
    custom: "Personnalisé",
    binary_name_error: "Veuillez entrer un nom de fichier binaire valide, vous ne pouvez pas le laisser vide.",
    text_hint: "Tapez le nom, ENTRÉE pour valider, ÉCHAP pour quitter",
    choice_hint: "HAUT/BAS pour choisir, ENTRÉE pour valider, ÉCHAP pour quitter",
    cancelled: "Annulé, aucun fichier n'a été écrit.",
    created: "créé",
    exists: "existe",
    written: "écrit",
    kept: "conservé",
    done: "Projet prêt.",
};

impl Language {
    /// Picks the language from the config file first, then the OS locale.
    /// Anything that is not French ends up English.
    pub fn resolve(config: &Config, os_locale: Option<String>) -> Self {
        if let Some(lang) = config.language.as_deref().and_then(Self::parse) {
            return lang;
        }
        os_locale
            .as_deref()
            .and_then(Self::parse)
            .unwrap_or(Language::English)
    }

    /// Accepts locale tags (`fr-FR`, `fr_BE.UTF-8`) and plain names (`french`).
    fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        let primary = value.split(['-', '_', '.']).next().unwrap_or_default();
        match primary {
            "fr" | "french" => Some(Language::French),
            "en" | "english" => Some(Language::English),
            _ => None,
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Language::English => &ENGLISH,
            Language::French => &FRENCH,
        }
    }
}
