/// Funnelback search URL detection and rewriting
use regex::{Captures, NoExpand, Regex};
use std::sync::LazyLock;

/// Suffix marking the preview variant of a profile
pub const PREVIEW_SUFFIX: &str = "_preview";

/// Profile every collection falls back to
pub const DEFAULT_PROFILE: &str = "_default";

/// Matches the search endpoint and captures the rendering format
static SEARCH_PAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/search\.(html|json|xml)").expect("Invalid search page regex")
});

/// Matches the profile query parameter, capturing its separator and value
static PROFILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([&?])profile=([^&]+)").expect("Invalid profile regex")
});

/// Rendering format of a search results page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Html,
    Json,
    Xml,
}

impl View {
    pub const ALL: [View; 3] = [View::Html, View::Json, View::Xml];

    pub fn from_token(token: &str) -> Option<View> {
        match token {
            "html" => Some(View::Html),
            "json" => Some(View::Json),
            "xml" => Some(View::Xml),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Html => "html",
            View::Json => "json",
            View::Xml => "xml",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Html => "HTML",
            View::Json => "JSON",
            View::Xml => "XML",
        }
    }
}

/// Profile parsed from the `profile` query parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub preview: bool,
}

impl Profile {
    /// Split a raw parameter value into name and preview flag
    ///
    /// - `foo` → name `foo`, live
    /// - `foo_preview` → name `foo`, preview
    pub fn parse(raw: &str) -> Profile {
        match raw.strip_suffix(PREVIEW_SUFFIX) {
            Some(name) => Profile {
                name: name.to_string(),
                preview: true,
            },
            None => Profile {
                name: raw.to_string(),
                preview: false,
            },
        }
    }

    /// Raw parameter value for this profile
    pub fn value(&self) -> String {
        if self.preview {
            format!("{}{}", self.name, PREVIEW_SUFFIX)
        } else {
            self.name.clone()
        }
    }

    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_PROFILE
    }
}

/// What was recognised in a search results URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    pub view: View,
    pub profile: Option<Profile>,
}

/// Detect a Funnelback search results URL
///
/// Returns `None` when the URL has no `/search.(html|json|xml)` segment.
/// The profile is only present when the URL carries a `profile` parameter.
pub fn detect(url: &str) -> Option<SearchPage> {
    let view = SEARCH_PAGE_RE
        .captures(url)
        .and_then(|caps| View::from_token(&caps[1]))?;

    let profile = PROFILE_RE
        .captures(url)
        .map(|caps| Profile::parse(&caps[2]));

    Some(SearchPage { view, profile })
}

/// Rewrite the search endpoint to render with another view
pub fn switch_view(url: &str, view: View) -> String {
    let replacement = format!("/search.{}", view.as_str());
    SEARCH_PAGE_RE
        .replace(url, NoExpand(&replacement))
        .into_owned()
}

/// Rewrite (or append) the `profile` parameter
///
/// The parameter is appended with `&` when the rewritten URL still has no
/// profile, even if the URL has no query string yet. `$` in `profile` is
/// inserted literally, never expanded as a capture group reference.
pub fn switch_profile(url: &str, profile: &str) -> String {
    let mut rewritten = PROFILE_RE
        .replace(url, |caps: &Captures| format!("{}profile={}", &caps[1], profile))
        .into_owned();

    if !PROFILE_RE.is_match(&rewritten) {
        rewritten.push_str("&profile=");
        rewritten.push_str(profile);
    }

    rewritten
}
