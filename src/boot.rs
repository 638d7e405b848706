//! Boot Payload
//!
//! Reads the `__DATA__` global injected by the host page and turns it into an
//! explicit startup parameter. The global is read exactly once; nothing here
//! writes it back or watches it for changes.

use wasm_bindgen::JsValue;

use crate::model::Payload;

/// Name of the global the host page populates before load
const DATA_GLOBAL: &str = "__DATA__";

/// Decode a payload from its JSON text form.
pub fn parse_payload(json: &str) -> Result<Payload, serde_json::Error> {
    serde_json::from_str(json)
}

/// Read the boot payload from the page, if the host populated it.
///
/// Returns `None` when there is no window, the global is absent, or the value
/// does not decode to the expected shape. A decode failure is logged to the
/// console and otherwise treated the same as an absent payload, so no
/// exception ever escapes to the page.
pub fn read_boot_payload() -> Option<Payload> {
    let window = web_sys::window()?;

    let raw = js_sys::Reflect::get(&window, &JsValue::from_str(DATA_GLOBAL)).ok()?;
    if raw.is_undefined() || raw.is_null() {
        return None;
    }

    // The global is a plain JS object; round-trip through JSON text so the
    // shape check lives in one serde decode.
    let json = js_sys::JSON::stringify(&raw).ok()?;
    let text = String::from(json);

    match parse_payload(&text) {
        Ok(payload) => Some(payload),
        Err(e) => {
            web_sys::console::error_1(&format!("AiHub: malformed __DATA__ payload: {}", e).into());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "user": {"name": "Ada", "avatar": "https://example.com/a.png"},
        "llmModels": [{"id": "meta-llama/Llama-3"}],
        "embeddingModels": [],
        "genaiNews": [{"title": "Story", "story_url": "https://hn.example/1"}],
        "aiNews": [{"title": "Other", "url": "https://news.example/2"}],
        "repos": [{"full_name": "rust-lang/rust", "html_url": "https://github.com/rust-lang/rust"}],
        "papers": [{"title": "Attention", "url": "https://arxiv.org/abs/1706.03762"}],
        "videos": []
    }"#;

    #[test]
    fn parses_camel_case_payload() {
        let payload = parse_payload(FULL).unwrap();
        assert_eq!(payload.user.name, "Ada");
        assert_eq!(payload.llm_models.len(), 1);
        assert_eq!(payload.genai_news[0].url, None);
        assert_eq!(
            payload.genai_news[0].story_url.as_deref(),
            Some("https://hn.example/1")
        );
        assert!(payload.videos.is_empty());
    }

    #[test]
    fn missing_required_list_fails_decode() {
        // The original aborted the whole render on a missing list; here the
        // decode fails and the mount is skipped instead.
        let json = r#"{"user": {"name": "Ada", "avatar": "x"}}"#;
        assert!(parse_payload(json).is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut value: serde_json::Value = serde_json::from_str(FULL).unwrap();
        value["extra"] = serde_json::json!({"anything": 1});
        assert!(parse_payload(&value.to_string()).is_ok());
    }
}
