//! Query-string handling with `URLSearchParams` semantics
//! (`application/x-www-form-urlencoded`, `+` for spaces, first value wins).

use url::form_urlencoded;

/// First value of `name` in a `location.search` string. A leading `?` is ignored.
pub fn get_param(search: &str, name: &str) -> Option<String> {
    let raw = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(raw.as_bytes())
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

/// Serialize `pairs` in order, the way `URLSearchParams.toString()` does.
pub fn serialize<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// `pathname?query` for a blank placement. Only the three given parameters are
/// emitted; nothing from the previous query survives.
pub fn placement_href(
    pathname: &str,
    params: [(&str, &str); 3],
) -> String {
    format!("{}?{}", pathname, serialize(params))
}
