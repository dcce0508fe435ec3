use pulse_core::ComparativeReport;
use std::collections::HashMap;
use tracing::warn;

pub const DEFAULT_LOCALE: &str = "hi";

// Authored template, not machine translation. Slots: {company}, {total},
// {positive}, {negative}, {neutral}, {final_sentiment}.
const HINDI_TEMPLATE: &str = "{company} के बारे में समाचार विश्लेषण।\n\
हमने {total} समाचार लेख खोजे।\n\
इनमें से, {positive} सकारात्मक, {negative} नकारात्मक, और {neutral} तटस्थ थे।\n\
समग्र विश्लेषण: {final_sentiment}";

/// Renders the comparative report as a templated paragraph in a target
/// locale. Templates are data; adding a locale means adding a template.
pub struct SummaryRenderer {
    default_locale: String,
    default_template: String,
    templates: HashMap<String, String>,
}

impl SummaryRenderer {
    pub fn new() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            default_template: HINDI_TEMPLATE.to_string(),
            templates: HashMap::new(),
        }
    }

    pub fn with_template(mut self, locale: &str, template: &str) -> Self {
        self.templates
            .insert(locale.to_string(), template.to_string());
        self
    }

    pub fn render(&self, company_name: &str, report: &ComparativeReport, locale: &str) -> String {
        let template = if locale == self.default_locale {
            self.default_template.as_str()
        } else {
            match self.templates.get(locale) {
                Some(template) => template.as_str(),
                None => {
                    warn!(
                        "No summary template for locale '{}', falling back to '{}'",
                        locale, self.default_locale
                    );
                    self.default_template.as_str()
                }
            }
        };

        let distribution = &report.sentiment_distribution;
        template
            .replace("{company}", company_name)
            .replace("{total}", &distribution.total().to_string())
            .replace("{positive}", &distribution.positive.to_string())
            .replace("{negative}", &distribution.negative.to_string())
            .replace("{neutral}", &distribution.neutral.to_string())
            .replace("{final_sentiment}", &report.final_sentiment)
    }
}

impl Default for SummaryRenderer {
    fn default() -> Self {
        Self::new()
    }
}
