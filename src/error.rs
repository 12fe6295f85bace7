//! Error type shared by the catalog, renderer and DOM glue.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures that indicate a broken host integration. A catalog lookup miss is
/// not one of them: unknown fighters render the fallback panel instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    #[error("no global window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("missing element #{id}")]
    MissingElement { id: String },
    #[error("site not started; call start_site() first")]
    NotStarted,
    #[error("duplicate character id '{id}' in catalog")]
    DuplicateCharacter { id: &'static str },
    #[error("invalid site config: {0}")]
    Config(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<SiteError> for JsValue {
    fn from(err: SiteError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        let err = SiteError::MissingElement { id: "movesModal".into() };
        assert_eq!(err.to_string(), "missing element #movesModal");
        assert_eq!(
            SiteError::DuplicateCharacter { id: "mario" }.to_string(),
            "duplicate character id 'mario' in catalog"
        );
    }
}
