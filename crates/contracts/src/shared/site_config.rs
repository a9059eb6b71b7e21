use serde::{Deserialize, Serialize};

/// Selectors, attributes and class names shared with the site's markup.
///
/// Every field is optional in the JSON form; missing ones keep the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    // Focus ring
    pub tabbing_class: String,

    // Lightbox
    pub lightbox_attr: String,
    pub default_group: String,
    pub overlay_class: String,
    pub image_class: String,
    pub close_class: String,
    pub prev_class: String,
    pub next_class: String,
    pub open_class: String,

    // Portfolio filter
    pub grid_item_selector: String,
    pub filter_bar_selector: String,
    pub filter_attr: String,
    pub categories_attr: String,
    pub hidden_class: String,
    pub active_class: String,

    // Hero carousel
    pub hero_selector: String,
    pub hero_slide_selector: String,
    pub representative_attr: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            tabbing_class: "user-is-tabbing".into(),
            lightbox_attr: "data-lightbox".into(),
            default_group: "default".into(),
            overlay_class: "lb-backdrop".into(),
            image_class: "lb-img".into(),
            close_class: "lb-close".into(),
            prev_class: "lb-prev".into(),
            next_class: "lb-next".into(),
            open_class: "is-open".into(),
            grid_item_selector: ".mh-grid > .col".into(),
            filter_bar_selector: ".filter-bar".into(),
            filter_attr: "data-filter".into(),
            categories_attr: "data-cats".into(),
            hidden_class: "d-none".into(),
            active_class: "active".into(),
            hero_selector: "#hero".into(),
            hero_slide_selector: ".carousel-item".into(),
            representative_attr: "data-rep".into(),
        }
    }
}

impl SiteConfig {
    /// Parse overrides from a JSON object.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// `[attr]` selector for an attribute name.
    pub fn attr_selector(attr: &str) -> String {
        format!("[{}]", attr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            SiteConfig::from_json(r##"{ "hidden_class": "is-hidden", "hero_selector": "#top" }"##)
                .unwrap();
        assert_eq!(config.hidden_class, "is-hidden");
        assert_eq!(config.hero_selector, "#top");
        assert_eq!(config.filter_attr, "data-filter");
    }

    #[test]
    fn test_rejects_unknown_and_malformed() {
        assert!(SiteConfig::from_json(r#"{ "hiden_class": "x" }"#).is_err());
        assert!(SiteConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_attr_selector() {
        assert_eq!(SiteConfig::attr_selector("data-lightbox"), "[data-lightbox]");
    }
}
