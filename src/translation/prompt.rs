use crate::language_utils::get_language_name;

/// System prompt template with `{source_language}` and `{target_language}` placeholders
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Render the template with language names, falling back to the raw codes
    pub fn render(&self, source_language: &str, target_language: &str) -> String {
        let source = get_language_name(source_language).unwrap_or_else(|_| source_language.to_string());
        let target = get_language_name(target_language).unwrap_or_else(|_| target_language.to_string());
        self.template
            .replace("{source_language}", &source)
            .replace("{target_language}", &target)
    }
}
