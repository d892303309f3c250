use crate::engine::assets::scene_settings::SceneSettings;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Overlay content for one formation marker.
/// A non-empty `words` list renders the section as a word cloud with achievement tooltips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionContent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub words: Vec<String>,
}

impl SectionContent {
    pub fn has_word_cloud(&self) -> bool {
        !self.words.is_empty()
    }

    /// Placeholder used when a marker has no manifest entry.
    pub fn fallback(id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: constants::section::get_section_title(id),
            body: String::new(),
            words: Vec::new(),
        }
    }
}

/// Tooltip entry for a word-cloud item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub word: String,
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

/// Portfolio manifest as a Bevy asset, loaded from `*.portfolio.json`.
#[derive(Asset, Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypePath)]
pub struct PortfolioManifest {
    #[serde(default)]
    pub settings: SceneSettings,
    #[serde(default)]
    pub sections: Vec<SectionContent>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

impl PortfolioManifest {
    pub fn section(&self, id: &str) -> Option<&SectionContent> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Section content, or a titled placeholder when the manifest has none.
    pub fn section_or_fallback(&self, id: &str) -> SectionContent {
        match self.section(id) {
            Some(section) => section.clone(),
            None => {
                warn!("No manifest content for {id}, using fallback");
                SectionContent::fallback(id)
            }
        }
    }

    /// Look up tooltip content by word. Matching ignores surrounding whitespace.
    pub fn achievement(&self, word: &str) -> Option<&Achievement> {
        let word = word.trim();
        self.achievements.iter().find(|a| a.word == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "settings": { "show_wip_notice": false },
        "sections": [
            { "id": "section-0", "title": "About", "body": "Hello" },
            { "id": "section-3", "title": "Achievements", "words": ["Bell", "HACKUTD"] }
        ],
        "achievements": [
            { "word": "HACKUTD", "desc": "IoT water tool", "img": "images/hackutd.png" },
            { "word": "Bell", "desc": "Drone bootcamp" }
        ]
    }"#;

    #[test]
    fn parses_manifest_with_partial_settings() {
        let manifest: PortfolioManifest = serde_json::from_str(MANIFEST).unwrap();
        assert!(!manifest.settings.show_wip_notice);
        assert_eq!(manifest.settings.idle_period_ms, 2000.0);
        assert_eq!(manifest.sections.len(), 2);
    }

    #[test]
    fn word_cloud_sections_are_flagged() {
        let manifest: PortfolioManifest = serde_json::from_str(MANIFEST).unwrap();
        assert!(!manifest.section("section-0").unwrap().has_word_cloud());
        assert!(manifest.section("section-3").unwrap().has_word_cloud());
    }

    #[test]
    fn achievement_lookup() {
        let manifest: PortfolioManifest = serde_json::from_str(MANIFEST).unwrap();
        let hack = manifest.achievement(" HACKUTD ").unwrap();
        assert_eq!(hack.img.as_deref(), Some("images/hackutd.png"));
        assert!(manifest.achievement("Bell").unwrap().img.is_none());
        assert!(manifest.achievement("Unknown").is_none());
    }

    #[test]
    fn missing_section_gets_table_title() {
        let manifest = PortfolioManifest::default();
        let section = manifest.section_or_fallback("section-4");
        assert_eq!(section.title, "Contact");
        assert!(section.body.is_empty());
    }

    #[test]
    fn bundled_manifest_parses() {
        let bundled = include_str!("../../../assets/site.portfolio.json");
        let manifest: PortfolioManifest = serde_json::from_str(bundled).unwrap();
        assert_eq!(manifest.sections.len(), constants::section::SECTION_MAP.len());
        let cloud = manifest.section("section-3").unwrap();
        for word in &cloud.words {
            assert!(manifest.achievement(word).is_some(), "no tooltip for {word}");
        }
    }

    #[test]
    fn bundled_tooltip_images_are_shipped() {
        let bundled = include_str!("../../../assets/site.portfolio.json");
        let manifest: PortfolioManifest = serde_json::from_str(bundled).unwrap();
        let assets = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        for achievement in &manifest.achievements {
            if let Some(img) = &achievement.img {
                assert!(assets.join(img).is_file(), "missing tooltip image {img}");
            }
        }
    }
}
