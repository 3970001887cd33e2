// Month names, language selection and the fixed wording of each language.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Month used when no date in the batch could be parsed.
pub const FALLBACK_MONTH: u32 = 5;

/// Consultant that has always received the English variant.
pub const ENGLISH_CONSULTANT: &str = "De Castro Abreu, Silvia";

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

// Only these three months have an English rendering; others pass through.
const MONTHS_ES_TO_EN: [(&str, &str); 3] = [
    ("abril", "april"),
    ("mayo", "may"),
    ("junio", "june"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn is_english(self) -> bool {
        self == Language::En
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Language::Es => &SPANISH,
            Language::En => &ENGLISH,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }
}

/// Fixed wording of an email in one language.
#[derive(Debug)]
pub struct Labels {
    pub project: &'static str,
    pub hours_unit: &'static str,
    pub rate_unit: &'static str,
    pub total: &'static str,
    pub reminder_heading: &'static str,
    pub upload_reminder: &'static str,
    pub codes_reminder: &'static str,
    pub sign_off: &'static str,
}

pub const UPLOAD_FORM_URL: &str = "https://form.jotform.com/243515805505656";

static SPANISH: Labels = Labels {
    project: "Proyecto",
    hours_unit: "horas",
    rate_unit: "hora",
    total: "TOTAL A FACTURAR",
    reminder_heading: "Por favor recuerda:",
    upload_reminder: "Subir tu factura al formulario de AFN Support",
    codes_reminder: "Incluir los códigos de proyecto en tu factura",
    sign_off: "Saludos!",
};

static ENGLISH: Labels = Labels {
    project: "Project",
    hours_unit: "hours",
    rate_unit: "hour",
    total: "TOTAL TO INVOICE",
    reminder_heading: "Please remember:",
    upload_reminder: "Upload your invoice to AFN Support form",
    codes_reminder: "Include the project codes in your invoice",
    sign_off: "Best regards!",
};

/// Spanish month name for `1..=12`; anything else falls back to May.
pub fn month_name(month: u32) -> &'static str {
    let idx = if (1..=12).contains(&month) {
        month
    } else {
        FALLBACK_MONTH
    };
    MONTHS_ES[(idx - 1) as usize]
}

/// Month name as it should appear in an email written in `language`.
pub fn localized_month(month: &str, language: Language) -> &str {
    match language {
        Language::Es => month,
        Language::En => MONTHS_ES_TO_EN
            .iter()
            .find(|(es, _)| *es == month)
            .map(|(_, en)| *en)
            .unwrap_or(month),
    }
}

pub fn default_language_overrides() -> IndexMap<String, Language> {
    IndexMap::from([(ENGLISH_CONSULTANT.to_string(), Language::En)])
}

/// Language for a consultant: an explicit override, otherwise Spanish.
pub fn resolve_language(consultant: &str, overrides: &IndexMap<String, Language>) -> Language {
    overrides.get(consultant).copied().unwrap_or_default()
}
