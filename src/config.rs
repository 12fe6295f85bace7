//! Element ids and data attributes the DOM glue binds to.

/// Defaults match the promo page markup.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SiteConfig {
    /// Overlay wrapping the whole modal; clicks landing on it directly close the modal.
    pub overlay_id: String,
    pub title_id: String,
    pub body_id: String,
    /// Attribute carrying the fighter id on character cards.
    pub character_attr: String,
    pub close_attr: String,
    pub roster_attr: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            overlay_id: "movesModal".into(),
            title_id: "modalCharacterName".into(),
            body_id: "characterMoves".into(),
            character_attr: "data-character".into(),
            close_attr: "data-modal-close".into(),
            roster_attr: "data-show-roster".into(),
        }
    }
}

impl SiteConfig {
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, crate::error::SiteError> {
        serde_json::from_str(json).map_err(|e| crate::error::SiteError::Config(e.to_string()))
    }

    /// CSS selector matching any element carrying `attr`.
    pub(crate) fn attr_selector(attr: &str) -> String {
        format!("[{attr}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_markup() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.overlay_id, "movesModal");
        assert_eq!(cfg.title_id, "modalCharacterName");
        assert_eq!(cfg.body_id, "characterMoves");
        assert_eq!(SiteConfig::attr_selector(&cfg.character_attr), "[data-character]");
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_overrides_keep_unset_defaults() {
        let cfg = SiteConfig::from_json(r#"{"overlayId":"fighterModal"}"#).unwrap();
        assert_eq!(cfg.overlay_id, "fighterModal");
        assert_eq!(cfg.body_id, "characterMoves");
        assert!(SiteConfig::from_json("not json").is_err());
    }
}
