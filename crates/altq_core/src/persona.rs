use std::collections::HashMap;

/// The fixed author voice applied to every generated post, plus the lookup
/// tables derived from it. Passed into the pipeline stages explicitly so they
/// stay independently testable instead of reading module-level globals.
#[derive(Debug, Clone)]
pub struct Persona {
    /// Display name written into every post and manifest entry.
    pub author: String,
    /// Short description of the voice, spliced into the generation prompt.
    pub voice: String,
    /// Tone and structure constraints for the generation prompt, one per line.
    pub style_notes: Vec<String>,
    /// Completion model identifier sent to the endpoint.
    pub model: String,
    /// Target word count range for generated prose.
    pub word_range: (u32, u32),
    /// Feed tag to post category; unknown tags map to `fallback_category`.
    pub categories: HashMap<String, String>,
    pub fallback_category: String,
    /// Constant tags appended to every post after the source tag.
    pub extra_tags: Vec<String>,
    /// Category to candidate hashtags for announcements.
    pub category_hashtags: HashMap<String, Vec<String>>,
    /// Source tag to a single extra hashtag.
    pub tag_hashtags: HashMap<String, String>,
    /// Hashtags used when a category has no entry of its own.
    pub default_hashtags: Vec<String>,
    /// Site root used to build post permalinks.
    pub base_url: String,
}

impl Persona {
    pub fn category_for_tag(&self, tag: &str) -> &str {
        self.categories
            .get(tag)
            .unwrap_or(&self.fallback_category)
    }
}

impl Default for Persona {
    fn default() -> Self {
        let categories = [
            ("ai", "Tutorial"),
            ("ml", "Tutorial"),
            ("dev", "Tutorial"),
            ("github", "Career"),
            ("javascript", "Tutorial"),
            ("webdev", "Tutorial"),
            ("career", "Career"),
            ("personal", "Personal"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let category_hashtags = [
            ("Tutorial", vec!["#WebDev", "#Tutorial", "#Coding"]),
            ("Career", vec!["#TechCareer", "#Developer", "#Growth"]),
            ("Personal", vec!["#TechLife", "#Developer", "#Journey"]),
            ("Philosophy", vec!["#TechPhilosophy", "#Developer", "#Thoughts"]),
            ("Literature", vec!["#Books", "#Reading", "#TechLife"]),
        ]
        .into_iter()
        .map(|(k, v)| {
            (
                k.to_string(),
                v.into_iter().map(str::to_string).collect::<Vec<_>>(),
            )
        })
        .collect();

        let tag_hashtags = [
            ("ai", "#AI"),
            ("ml", "#MachineLearning"),
            ("javascript", "#JavaScript"),
            ("webdev", "#WebDev"),
            ("github", "#GitHub"),
            ("career", "#TechCareer"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            author: "Jeremy (CtrlAltQ)".to_string(),
            voice: "a former chef turned developer who loves punk rock and has a cyberpunk aesthetic"
                .to_string(),
            style_notes: vec![
                "A punk rock/cyberpunk attitude but stay professional".to_string(),
                "Connect technical concepts to cooking/chef experience when relevant".to_string(),
                "Use clear, engaging language".to_string(),
                "Include practical takeaways".to_string(),
                "Keep it authentic to someone who went from StarCraft clan leader → chef → developer"
                    .to_string(),
                "End with a call to action".to_string(),
            ],
            model: "gpt-4o-mini".to_string(),
            word_range: (400, 600),
            categories,
            fallback_category: "Tutorial".to_string(),
            extra_tags: vec!["automated".to_string(), "tech-insights".to_string()],
            category_hashtags,
            tag_hashtags,
            default_hashtags: vec!["#Tech".to_string(), "#Developer".to_string()],
            base_url: "https://jeremyclegg.dev".to_string(),
        }
    }
}
