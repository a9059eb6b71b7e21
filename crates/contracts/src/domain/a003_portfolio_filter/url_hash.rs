//! `#filter=<token>` is the serialized form of the active filter.

use thiserror::Error;

use super::filter_token::FilterToken;

pub const FILTER_PARAM: &str = "filter";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterHashError {
    #[error("filter value {raw:?} does not decode to UTF-8")]
    Decode { raw: String },
}

/// Read the filter out of `location.hash` (leading `#` optional).
///
/// `filter=` is found anywhere in the fragment, case-insensitively, so
/// `#/work?filter=photo` works too. The value runs to the next `&`.
/// Returns `Ok(None)` when no non-empty `filter=` value exists.
pub fn decode_filter_hash(hash: &str) -> Result<Option<FilterToken>, FilterHashError> {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    let needle = format!("{}=", FILTER_PARAM);

    // ASCII lowercasing keeps byte offsets valid for `fragment`
    let lowered = fragment.to_ascii_lowercase();
    let raw = lowered.match_indices(&needle).find_map(|(start, _)| {
        let rest = &fragment[start + needle.len()..];
        let value = rest.split('&').next().unwrap_or_default();
        (!value.is_empty()).then_some(value)
    });
    let Some(raw) = raw else {
        return Ok(None);
    };

    let decoded = urlencoding::decode(raw).map_err(|_| FilterHashError::Decode {
        raw: raw.to_string(),
    })?;
    Ok(Some(FilterToken::new(Some(&decoded))))
}

/// Fragment for `token`, including the `#`. Empty for [`FilterToken::all`].
pub fn encode_filter_hash(token: &FilterToken) -> String {
    if token.is_all() {
        return String::new();
    }
    format!("#{}={}", FILTER_PARAM, urlencoding::encode(token.as_str()))
}

/// URL handed to `history.replaceState` for `token`.
pub fn replacement_url(pathname: &str, search: &str, token: &FilterToken) -> String {
    format!("{}{}{}", pathname, search, encode_filter_hash(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_absent() {
        assert_eq!(decode_filter_hash(""), Ok(None));
        assert_eq!(decode_filter_hash("#"), Ok(None));
        assert_eq!(decode_filter_hash("#top"), Ok(None));
        assert_eq!(decode_filter_hash("#filter="), Ok(None));
    }

    #[test]
    fn test_decode_present() {
        assert_eq!(decode_filter_hash("#filter=photo"), Ok(Some(FilterToken::from("photo"))));
        assert_eq!(decode_filter_hash("#FILTER=Photo"), Ok(Some(FilterToken::from("photo"))));
        assert_eq!(
            decode_filter_hash("#x=1&filter=street%20art&y=2"),
            Ok(Some(FilterToken::from("street art")))
        );
        assert_eq!(decode_filter_hash("filter=all"), Ok(Some(FilterToken::all())));
        assert_eq!(
            decode_filter_hash("#/work?filter=photo"),
            Ok(Some(FilterToken::from("photo")))
        );
        assert_eq!(
            decode_filter_hash("#/work?Filter=Event&page=2"),
            Ok(Some(FilterToken::from("event")))
        );
        assert_eq!(
            decode_filter_hash("#filter=&filter=video"),
            Ok(Some(FilterToken::from("video")))
        );
    }

    #[test]
    fn test_decode_malformed() {
        assert_eq!(
            decode_filter_hash("#filter=%FF"),
            Err(FilterHashError::Decode { raw: "%FF".to_string() })
        );
    }

    #[test]
    fn test_all_has_no_fragment() {
        assert_eq!(encode_filter_hash(&FilterToken::all()), "");
        assert_eq!(
            replacement_url("/work/", "?lang=de", &FilterToken::all()),
            "/work/?lang=de"
        );
    }

    #[test]
    fn test_round_trip() {
        for raw in ["photo", "street art", "ü-design", "a&b=c", "50%"] {
            let token = FilterToken::from(raw);
            let hash = encode_filter_hash(&token);
            assert!(hash.starts_with("#filter="));
            assert_eq!(decode_filter_hash(&hash), Ok(Some(token)));
        }
    }

    #[test]
    fn test_replacement_url() {
        assert_eq!(
            replacement_url("/", "", &FilterToken::from("Event")),
            "/#filter=event"
        );
    }
}
