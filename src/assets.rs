use rust_embed::RustEmbed;

/// Embedded rule definitions, loaded once at pipeline construction
#[derive(RustEmbed)]
#[folder = "rules/"]
pub struct RuleAssets;

impl RuleAssets {
    /// Get a rule file by name
    pub fn get_rules(name: &str) -> Option<rust_embed::EmbeddedFile> {
        Self::get(name)
    }

    /// List all bundled rule files
    pub fn list_rules() -> impl Iterator<Item = std::borrow::Cow<'static, str>> {
        Self::iter()
    }
}
