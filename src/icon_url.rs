// Icon URL scanner - Spot a PNG download URL in a descriptor line
use crate::extract::between;

/// Does this line look like it downloads a PNG over http?
pub fn has_icon_url(line: &str) -> bool {
    line.contains("http://") && line.contains(".png")
}

/// URL spanning the first `h` to the last `g` of the line, with `$pkgname` and
/// `${pkgname}` filled in from `package`.
///
/// Returns `None` if any other `$` placeholder is left, since the URL could not
/// be fetched as written.
pub fn icon_url(line: &str, package: Option<&str>) -> Option<String> {
    if !has_icon_url(line) {
        return None;
    }
    let inner = between(line, "h", "g");
    if inner.is_empty() {
        return None;
    }
    let mut url = format!("h{}g", inner);
    if let Some(package) = package {
        url = url
            .replace("${pkgname}", package)
            .replace("$pkgname", package);
    }
    if url.contains('$') {
        return None;
    }
    Some(url)
}
