//! Media type parsing for `Content-Type` header values.
//!
//! Follows the RFC 2045 grammar: a `type/subtype` pair made of tokens,
//! followed by `; name=value` parameters whose values are tokens or quoted
//! strings. The type and subtype are case-insensitive and stored lowercased.
//! A bare `type` without a subtype is accepted here; whether that is usable
//! is up to the caller.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Characters that may not appear inside a token.
const TSPECIALS: &str = "()<>@,;:\\\"/[]?=";

/// A parsed media type such as `application/yaml; charset=utf-8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    kind: String,
    subtype: Option<String>,
    params: BTreeMap<String, String>,
}

/// Reasons a media type string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaTypeError {
    #[error("no media type")]
    NoMediaType,
    #[error("expected slash after first token")]
    ExpectedSlash,
    #[error("expected token after slash")]
    ExpectedSubtype,
    #[error("unexpected content after media subtype")]
    TrailingContent,
    #[error("invalid media parameter")]
    InvalidParameter,
    #[error("duplicate parameter name '{0}'")]
    DuplicateParameter(String),
}

impl MediaType {
    /// Parse a `Content-Type` value.
    ///
    /// # Errors
    ///
    /// Returns a [`MediaTypeError`] describing the first grammar violation.
    pub fn parse(input: &str) -> Result<Self, MediaTypeError> {
        let (base, rest) = input.split_at(input.find(';').unwrap_or(input.len()));
        let base = base.trim().to_ascii_lowercase();

        let (kind, after_kind) = consume_token(&base);
        if kind.is_empty() {
            return Err(MediaTypeError::NoMediaType);
        }

        let subtype = if after_kind.is_empty() {
            None
        } else {
            let after_slash = after_kind
                .strip_prefix('/')
                .ok_or(MediaTypeError::ExpectedSlash)?;
            let (subtype, trailing) = consume_token(after_slash);
            if subtype.is_empty() {
                return Err(MediaTypeError::ExpectedSubtype);
            }
            if !trailing.is_empty() {
                return Err(MediaTypeError::TrailingContent);
            }
            Some(subtype.to_string())
        };

        Ok(Self {
            kind: kind.to_string(),
            subtype,
            params: parse_params(rest)?,
        })
    }

    /// The top-level type, e.g. `application`.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The subtype, e.g. `yaml`, if the value had one.
    #[must_use]
    pub fn subtype(&self) -> Option<&str> {
        self.subtype.as_deref()
    }

    /// Look up a parameter by (case-insensitive) name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The `type/subtype` pair without parameters.
    #[must_use]
    pub fn essence(&self) -> String {
        match &self.subtype {
            Some(subtype) => format!("{}/{subtype}", self.kind),
            None => self.kind.clone(),
        }
    }

    /// Whether the document is already JSON and needs no adaptation.
    ///
    /// Covers `application/json` as well as structured suffixes such as
    /// `application/vnd.api+json`.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.subtype
            .as_deref()
            .is_some_and(|subtype| subtype.ends_with("json"))
    }
}

impl FromStr for MediaType {
    type Err = MediaTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.essence())
    }
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_graphic() && !TSPECIALS.contains(c)
}

/// Split `input` into its leading token and the remainder.
fn consume_token(input: &str) -> (&str, &str) {
    input.split_at(input.find(|c| !is_token_char(c)).unwrap_or(input.len()))
}

/// Consume a parameter value (token or quoted string).
fn consume_value(input: &str) -> Option<(String, &str)> {
    let Some(quoted) = input.strip_prefix('"') else {
        let (token, rest) = consume_token(input);
        return (!token.is_empty()).then(|| (token.to_string(), rest));
    };

    let mut value = String::new();
    let mut chars = quoted.char_indices();
    while let Some((idx, c)) = chars.next() {
        match c {
            '"' => return Some((value, &quoted[idx + 1..])),
            '\\' => value.push(chars.next()?.1),
            _ => value.push(c),
        }
    }
    None
}

fn parse_params(mut rest: &str) -> Result<BTreeMap<String, String>, MediaTypeError> {
    let mut params = BTreeMap::new();
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }
        let after_semicolon = rest
            .strip_prefix(';')
            .ok_or(MediaTypeError::InvalidParameter)?
            .trim_start();
        // trailing semicolon
        if after_semicolon.is_empty() {
            break;
        }

        let (name, after_name) = consume_token(after_semicolon);
        if name.is_empty() {
            return Err(MediaTypeError::InvalidParameter);
        }
        let after_equals = after_name
            .trim_start()
            .strip_prefix('=')
            .ok_or(MediaTypeError::InvalidParameter)?
            .trim_start();
        let (value, tail) = consume_value(after_equals).ok_or(MediaTypeError::InvalidParameter)?;

        let name = name.to_ascii_lowercase();
        if params.contains_key(&name) {
            return Err(MediaTypeError::DuplicateParameter(name));
        }
        params.insert(name, value);
        rest = tail;
    }
    Ok(params)
}
