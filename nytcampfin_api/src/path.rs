//! Resource path templates with positional `%s` slots.

use url::Url;

use crate::Error;

const SLOT: &str = "%s";

/// Number of positional slots in a template.
pub fn slot_count(template: &str) -> usize {
    template.matches(SLOT).count()
}

/// Percent-encodes one positional value so it stays a single path segment.
///
/// Empty values and the dot segments `.` and `..` can't be expressed as a
/// segment of their own and are rejected.
fn segment(value: &str) -> Result<String, Error> {
    if value.is_empty() || value == "." || value == ".." {
        return Err(Error::PathValue(value.to_string()));
    }
    Ok(urlencoding::encode(value).into_owned())
}

/// Substitutes `args` into the `%s` slots of `template`, in order.
///
/// The number of values must match the number of slots exactly. Each value
/// is percent-encoded, so `/`, `?` and `#` can't escape their segment.
pub fn render<S: AsRef<str>>(template: &str, args: &[S]) -> Result<String, Error> {
    let expected = slot_count(template);
    if expected != args.len() {
        return Err(Error::Template {
            expected,
            given: args.len(),
        });
    }

    let mut rendered = String::with_capacity(template.len() + args.len() * 8);
    let mut pieces = template.split(SLOT);
    if let Some(head) = pieces.next() {
        rendered.push_str(head);
    }
    for (piece, arg) in pieces.zip(args) {
        rendered.push_str(&segment(arg.as_ref())?);
        rendered.push_str(piece);
    }
    Ok(rendered)
}

/// Whether `path` is already a full URL under `base_uri`, as found in
/// follow-up links of earlier responses.
///
/// Scheme, host and port must match exactly and the link's path must sit
/// below the base path at a `/` boundary. Anything that doesn't parse as an
/// absolute URL (a template, say) is not under the base.
pub fn is_absolute_under(path: &str, base_uri: &str) -> bool {
    let (Ok(link), Ok(base)) = (Url::parse(path), Url::parse(base_uri)) else {
        return false;
    };
    if link.scheme() != base.scheme()
        || link.host() != base.host()
        || link.port_or_known_default() != base.port_or_known_default()
    {
        return false;
    }

    let base_path = base.path().trim_end_matches('/');
    match link.path().strip_prefix(base_path) {
        Some(rest) => base_path.is_empty() || rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://api.nytimes.com/svc/elections/us/v3/finances";

    #[test]
    fn render_substitutes_in_declaration_order() {
        let path = render("/%s/filings/%s/%s/%s", &["2012", "2012", "07", "04"]).unwrap();
        assert_eq!(path, "/2012/filings/2012/07/04");
    }

    #[test]
    fn render_without_slots() {
        assert_eq!(render::<&str>("/filings", &[]).unwrap(), "/filings");
    }

    #[test]
    fn render_trailing_text_after_last_slot() {
        let path = render("/%s/committees/%s/48hour", &["2010", "C00000042"]).unwrap();
        assert_eq!(path, "/2010/committees/C00000042/48hour");
    }

    #[test]
    fn render_rejects_too_few_values() {
        let err = render("/%s/candidates/%s", &["2012"]).unwrap_err();
        assert!(matches!(
            err,
            Error::Template {
                expected: 2,
                given: 1
            }
        ));
    }

    #[test]
    fn render_rejects_too_many_values() {
        let err = render("/%s/candidates/new", &["2012", "extra"]).unwrap_err();
        assert!(matches!(
            err,
            Error::Template {
                expected: 1,
                given: 2
            }
        ));
    }

    #[test]
    fn absolute_detection() {
        assert!(is_absolute_under(
            &format!("{}/2012/candidates/new.json", BASE),
            BASE
        ));
        assert!(is_absolute_under(
            "HTTP://API.NYTIMES.COM/svc/elections/us/v3/finances/2012/filings.json",
            BASE
        ));
        assert!(!is_absolute_under("/%s/candidates/new", BASE));
        assert!(!is_absolute_under("http://example.com/2012/filings.json", BASE));
    }

    #[test]
    fn absolute_detection_compares_host_not_prefix() {
        let base = "http://localhost";
        assert!(is_absolute_under("http://localhost/2012/filings.json", base));
        assert!(!is_absolute_under(
            "http://localhost.evil.example/2012/filings.json",
            base
        ));
        assert!(!is_absolute_under("http://localhost:8080/2012/filings.json", base));
        assert!(!is_absolute_under("https://localhost/2012/filings.json", base));
        assert!(!is_absolute_under("http://user@localhost.evil.example/", base));
    }

    #[test]
    fn absolute_detection_requires_segment_boundary() {
        assert!(!is_absolute_under(
            "http://api.nytimes.com/svc/elections/us/v3/financesX/2012/filings.json",
            BASE
        ));
        assert!(!is_absolute_under("http://api.nytimes.com/svc/elections/2012.json", BASE));
        assert!(is_absolute_under(
            "http://api.nytimes.com:80/svc/elections/us/v3/finances/2012/filings.json",
            BASE
        ));
    }

    #[test]
    fn render_keeps_each_value_in_its_segment() {
        let path = render("/%s/candidates/%s", &["2012", "P80?x"]).unwrap();
        assert_eq!(path, "/2012/candidates/P80%3Fx");

        let path = render("/%s/candidates/%s", &["2012", "../committees/C001"]).unwrap();
        assert_eq!(path, "/2012/candidates/..%2Fcommittees%2FC001");

        let path = render("/%s/committees/%s", &["2012", "A B#1"]).unwrap();
        assert_eq!(path, "/2012/committees/A%20B%231");
    }

    #[test]
    fn render_rejects_dot_and_empty_segments() {
        for bad in ["", ".", ".."] {
            let err = render("/%s/candidates/%s", &["2012", bad]).unwrap_err();
            assert!(matches!(err, Error::PathValue(ref v) if v == bad));
        }
    }
}
