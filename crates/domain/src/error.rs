//! Common error types used across the workspace.

use crate::media_type::MediaTypeError;

/// Opaque failure reported by a config adapter.
///
/// Adapters live outside this workspace, so their errors are boxed at the
/// port boundary.
pub type AdapterError = Box<dyn std::error::Error + Send + Sync>;

/// Reasons a configuration document could not be adapted.
///
/// Every variant stems from caller-supplied input.
#[derive(Debug, thiserror::Error)]
pub enum AdaptError {
    /// The `Content-Type` value is not a valid media type.
    #[error("invalid Content-Type: {0}")]
    InvalidContentType(#[from] MediaTypeError),

    /// The media type has no subtype to use as an adapter name.
    #[error("malformed Content-Type")]
    MalformedContentType,

    /// No adapter is registered under the requested name.
    #[error("unrecognized config adapter '{0}'")]
    UnrecognizedAdapter(String),

    /// The adapter rejected the document.
    #[error("adapting config using {adapter} adapter: {source}")]
    Adapter {
        /// Name the adapter was looked up by.
        adapter: String,
        source: AdapterError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_media_type_error_message() {
        let err = AdaptError::from(MediaTypeError::NoMediaType);
        assert_eq!(err.to_string(), "invalid Content-Type: no media type");
    }

    #[test]
    fn should_quote_unrecognized_adapter_name() {
        let err = AdaptError::UnrecognizedAdapter("toml".to_string());
        assert_eq!(err.to_string(), "unrecognized config adapter 'toml'");
    }

    #[test]
    fn should_embed_adapter_name_and_cause() {
        let err = AdaptError::Adapter {
            adapter: "yaml".to_string(),
            source: "line 3: mapping values are not allowed here".into(),
        };
        assert_eq!(
            err.to_string(),
            "adapting config using yaml adapter: line 3: mapping values are not allowed here"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn should_display_malformed_content_type() {
        assert_eq!(
            AdaptError::MalformedContentType.to_string(),
            "malformed Content-Type"
        );
    }
}
