use url::Url;

use crate::Error;

/// Normalise `url` so method names can be appended as path segments.
///
/// Fails for urls that cannot carry a path, e.g. `mailto:`.
pub fn base_url(mut url: Url) -> Result<Url, Error> {
    if url.cannot_be_a_base() {
        return Err(Error::Custom(format!(
            "{} cannot be used as a base url",
            url
        )));
    }

    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push("");
    }

    Ok(url)
}

/// Append `method` as the last path segment of a url built by [`base_url`].
pub fn method_url(base: &Url, method: &str) -> Url {
    let mut url = base.clone();

    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(method);
    }

    url
}
