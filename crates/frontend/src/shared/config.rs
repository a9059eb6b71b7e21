use contracts::shared::site_config::SiteConfig;
use wasm_bindgen::JsValue;

/// `<script type="application/json" id="folio-config">` holding overrides.
pub const CONFIG_SCRIPT_ID: &str = "folio-config";
/// Global object holding overrides when no config script is present.
pub const CONFIG_GLOBAL: &str = "folioConfig";

/// Site configuration for this page.
///
/// Search order:
/// 1. The JSON config script
/// 2. `window.folioConfig`
/// 3. Built-in defaults
///
/// A broken source is logged and the defaults are used instead.
pub fn load_site_config() -> SiteConfig {
    match read_site_config() {
        Ok(Some(config)) => {
            log::debug!("site config loaded from page");
            config
        }
        Ok(None) => SiteConfig::default(),
        Err(err) => {
            log::warn!("site config ignored, using defaults: {}", err);
            SiteConfig::default()
        }
    }
}

fn read_site_config() -> Result<Option<SiteConfig>, String> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };

    let script = window
        .document()
        .and_then(|d| d.get_element_by_id(CONFIG_SCRIPT_ID));
    if let Some(script) = script {
        let json = script.text_content().unwrap_or_default();
        return SiteConfig::from_json(&json)
            .map(Some)
            .map_err(|e| format!("#{}: {}", CONFIG_SCRIPT_ID, e));
    }

    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| format!("window.{}: {:?}", CONFIG_GLOBAL, e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| format!("window.{}: {}", CONFIG_GLOBAL, e))
}
