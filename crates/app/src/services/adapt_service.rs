//! Adapt service — picks a config adapter from a `Content-Type` and runs it.

use std::borrow::Cow;

use confadapt_domain::adaptation::Adaptation;
use confadapt_domain::error::AdaptError;
use confadapt_domain::media_type::MediaType;
use confadapt_domain::warning::Warning;

use crate::ports::AdapterOptions;
use crate::registry::AdapterRegistry;

/// Result of [`AdaptService::adapt_by_content_type`].
///
/// `config` borrows the input when no adaptation was needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adapted<'a> {
    /// Canonical JSON bytes.
    pub config: Cow<'a, [u8]>,
    /// Warnings emitted by the adapter, unmodified.
    pub warnings: Vec<Warning>,
}

impl<'a> Adapted<'a> {
    fn passthrough(body: &'a [u8]) -> Self {
        Self {
            config: Cow::Borrowed(body),
            warnings: Vec::new(),
        }
    }

    /// Whether the input was returned untouched.
    #[must_use]
    pub fn is_passthrough(&self) -> bool {
        matches!(self.config, Cow::Borrowed(_))
    }
}

/// Application service dispatching documents to registered adapters.
#[derive(Debug, Default)]
pub struct AdaptService {
    registry: AdapterRegistry,
}

impl AdaptService {
    /// Create a new service over a fully populated registry.
    #[must_use]
    pub fn new(registry: AdapterRegistry) -> Self {
        Self { registry }
    }

    /// The registry adapters are looked up in.
    #[must_use]
    pub fn registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    /// Adapt `body` to canonical JSON according to `content_type`.
    ///
    /// An empty content type, or one whose subtype ends in `json`, returns
    /// `body` unchanged. Otherwise the subtype names the adapter to run.
    ///
    /// # Errors
    ///
    /// - [`AdaptError::InvalidContentType`] if `content_type` does not parse
    /// - [`AdaptError::MalformedContentType`] if it has no subtype
    /// - [`AdaptError::UnrecognizedAdapter`] if no adapter has that name
    /// - [`AdaptError::Adapter`] if the adapter rejects the document
    #[tracing::instrument(skip(self, body), fields(body_len = body.len()))]
    pub fn adapt_by_content_type<'a>(
        &self,
        content_type: &str,
        body: &'a [u8],
    ) -> Result<Adapted<'a>, AdaptError> {
        if content_type.is_empty() {
            return Ok(Adapted::passthrough(body));
        }

        let media_type = MediaType::parse(content_type)?;
        if media_type.is_json() {
            return Ok(Adapted::passthrough(body));
        }

        let name = media_type
            .subtype()
            .ok_or(AdaptError::MalformedContentType)?;
        let adapter = self
            .registry
            .get(name)
            .ok_or_else(|| AdaptError::UnrecognizedAdapter(name.to_string()))?;

        let Adaptation { config, warnings } = adapter
            .adapt(body, &AdapterOptions::new())
            .map_err(|source| AdaptError::Adapter {
                adapter: name.to_string(),
                source,
            })?;

        tracing::debug!(
            adapter = name,
            output_len = config.len(),
            warnings = warnings.len(),
            "config adapted"
        );
        Ok(Adapted {
            config: Cow::Owned(config),
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confadapt_domain::error::AdapterError;
    use confadapt_domain::media_type::MediaTypeError;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn yaml(body: &[u8], options: &AdapterOptions) -> Result<Adaptation, AdapterError> {
        assert!(options.is_empty());
        match body {
            b"a: 1" => Ok(Adaptation::new(r#"{"a":1}"#)
                .with_warning(Warning::new("implicit string").at("config.yaml", 1))),
            _ => Err("could not find expected ':'".into()),
        }
    }

    fn make_service() -> AdaptService {
        let mut registry = AdapterRegistry::new();
        registry.register("yaml", yaml).unwrap();
        AdaptService::new(registry)
    }

    #[test]
    fn should_pass_through_when_content_type_empty() {
        let svc = make_service();
        let bodies: [&[u8]; 3] = [b"", b"a: 1", b"\xff\x00 not even utf-8"];
        for body in bodies {
            let adapted = svc.adapt_by_content_type("", body).unwrap();
            assert!(adapted.is_passthrough());
            assert_eq!(&*adapted.config, body);
            assert!(adapted.warnings.is_empty());
        }
    }

    #[test]
    fn should_pass_through_json_subtypes() {
        let svc = make_service();
        for content_type in [
            "application/json",
            "application/vnd.api+json",
            "TEXT/JSON; charset=utf-8",
        ] {
            let adapted = svc
                .adapt_by_content_type(content_type, b"{not json at all")
                .unwrap();
            assert!(adapted.is_passthrough(), "{content_type}");
            assert_eq!(&*adapted.config, b"{not json at all");
        }
    }

    #[test]
    fn should_fail_when_content_type_unparseable() {
        let err = make_service()
            .adapt_by_content_type("application/", b"")
            .unwrap_err();
        assert!(matches!(
            err,
            AdaptError::InvalidContentType(MediaTypeError::ExpectedSubtype)
        ));
        assert_eq!(
            err.to_string(),
            "invalid Content-Type: expected token after slash"
        );
    }

    #[test]
    fn should_fail_when_content_type_has_no_slash() {
        let err = make_service()
            .adapt_by_content_type("yaml", b"a: 1")
            .unwrap_err();
        assert!(matches!(err, AdaptError::MalformedContentType));
    }

    #[test]
    fn should_fail_when_adapter_unknown() {
        let err = make_service()
            .adapt_by_content_type("application/toml", b"a = 1")
            .unwrap_err();
        assert_eq!(err.to_string(), "unrecognized config adapter 'toml'");
    }

    #[test]
    fn should_return_adapter_output_and_warnings() {
        let adapted = make_service()
            .adapt_by_content_type("application/yaml; charset=utf-8", b"a: 1")
            .unwrap();
        assert!(!adapted.is_passthrough());
        assert_eq!(&*adapted.config, br#"{"a":1}"#);
        assert_eq!(
            adapted.warnings,
            [Warning::new("implicit string").at("config.yaml", 1)]
        );
    }

    #[test]
    fn should_wrap_adapter_failure_with_name() {
        let err = make_service()
            .adapt_by_content_type("application/yaml", b"oops")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "adapting config using yaml adapter: could not find expected ':'"
        );
    }

    #[test]
    fn should_invoke_adapter_exactly_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut registry = AdapterRegistry::new();
        registry
            .register(
                "caddyfile",
                move |_: &[u8], _: &AdapterOptions| -> Result<Adaptation, AdapterError> {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(Adaptation::new("{}"))
                },
            )
            .unwrap();
        let svc = AdaptService::new(registry);

        svc.adapt_by_content_type("text/caddyfile", b":80").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        svc.adapt_by_content_type("application/json", b"{}").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
