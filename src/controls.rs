/// Button state for the view and profile switchers

use crate::search_url::{switch_profile, switch_view, Profile, View, DEFAULT_PROFILE, PREVIEW_SUFFIX};

/// A navigation requested from the popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Switch {
    View(View),
    Profile(String),
}

impl Switch {
    pub fn reset() -> Switch {
        Switch::Profile(DEFAULT_PROFILE.to_string())
    }

    /// URL the tab should navigate to
    pub fn apply(&self, url: &str) -> String {
        match self {
            Switch::View(view) => switch_view(url, *view),
            Switch::Profile(profile) => switch_profile(url, profile),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewControl {
    pub view: View,
    pub disabled: bool,
}

/// One control per view, the current one disabled
pub fn view_controls(current: View) -> Vec<ViewControl> {
    View::ALL
        .iter()
        .map(|&view| ViewControl {
            view,
            disabled: view == current,
        })
        .collect()
}

/// Live or preview button for the current profile
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileControl {
    pub label: &'static str,
    /// Appended to the profile name, rendered as `data-profile`
    pub suffix: &'static str,
    pub target: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileControls {
    pub name: Option<String>,
    /// Empty when the URL has no profile parameter
    pub variants: Vec<ProfileControl>,
    pub show_reset: bool,
}

pub fn profile_controls(profile: Option<&Profile>) -> ProfileControls {
    // `profile=_preview` leaves an empty name, treated as no profile
    let Some(profile) = profile.filter(|p| !p.name.is_empty()) else {
        return ProfileControls {
            name: None,
            variants: Vec::new(),
            show_reset: true,
        };
    };

    let variants = [("Live", ""), ("Preview", PREVIEW_SUFFIX)]
        .into_iter()
        .map(|(label, suffix)| ProfileControl {
            label,
            suffix,
            target: format!("{}{}", profile.name, suffix),
            disabled: profile.preview == !suffix.is_empty(),
        })
        .collect();

    ProfileControls {
        name: Some(profile.name.clone()),
        variants,
        // `_default_preview` has already been stripped to `_default`
        show_reset: !profile.is_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_url::detect;

    fn disabled_views(controls: &[ViewControl]) -> Vec<View> {
        controls.iter().filter(|c| c.disabled).map(|c| c.view).collect()
    }

    #[test]
    fn test_view_controls_disable_current() {
        for current in View::ALL {
            let controls = view_controls(current);
            assert_eq!(controls.len(), 3);
            assert_eq!(disabled_views(&controls), vec![current]);
        }
    }

    #[test]
    fn test_view_controls_order() {
        let views: Vec<View> = view_controls(View::Xml).iter().map(|c| c.view).collect();
        assert_eq!(views, vec![View::Html, View::Json, View::Xml]);
    }

    #[test]
    fn test_profile_controls_without_profile() {
        let controls = profile_controls(None);
        assert_eq!(controls.name, None);
        assert!(controls.variants.is_empty());
        assert!(controls.show_reset);
    }

    #[test]
    fn test_profile_controls_live() {
        let profile = Profile::parse("foo");
        let controls = profile_controls(Some(&profile));

        assert_eq!(controls.name.as_deref(), Some("foo"));
        assert_eq!(controls.variants.len(), 2);

        let live = &controls.variants[0];
        assert_eq!(live.suffix, "");
        assert_eq!(live.target, "foo");
        assert!(live.disabled);

        let preview = &controls.variants[1];
        assert_eq!(preview.suffix, "_preview");
        assert_eq!(preview.target, "foo_preview");
        assert!(!preview.disabled);

        assert!(controls.show_reset);
    }

    #[test]
    fn test_profile_controls_preview() {
        let page = detect("https://search.example.com/s/search.html?profile=foo_preview").unwrap();
        let controls = profile_controls(page.profile.as_ref());

        assert!(!controls.variants[0].disabled);
        assert!(controls.variants[1].disabled);
    }

    #[test]
    fn test_profile_controls_empty_name() {
        let page = detect("https://search.example.com/s/search.html?profile=_preview").unwrap();
        let controls = profile_controls(page.profile.as_ref());

        assert_eq!(controls.name, None);
        assert!(controls.variants.is_empty());
        assert!(controls.show_reset);
    }

    #[test]
    fn test_reset_hidden_on_default_profiles() {
        assert!(!profile_controls(Some(&Profile::parse("_default"))).show_reset);
        assert!(!profile_controls(Some(&Profile::parse("_default_preview"))).show_reset);
        assert!(profile_controls(Some(&Profile::parse("_defaults"))).show_reset);
    }

    #[test]
    fn test_switch_apply() {
        let url = "https://search.example.com/s/search.html?collection=web&profile=foo";

        assert_eq!(
            Switch::View(View::Json).apply(url),
            "https://search.example.com/s/search.json?collection=web&profile=foo"
        );
        assert_eq!(
            Switch::Profile("foo_preview".to_string()).apply(url),
            "https://search.example.com/s/search.html?collection=web&profile=foo_preview"
        );
        assert_eq!(
            Switch::reset().apply(url),
            "https://search.example.com/s/search.html?collection=web&profile=_default"
        );
    }

    #[test]
    fn test_preview_button_target_round_trips_through_detect() {
        let url = "https://search.example.com/s/search.html?profile=foo";
        let page = detect(url).unwrap();
        let controls = profile_controls(page.profile.as_ref());

        let switched = Switch::Profile(controls.variants[1].target.clone()).apply(url);
        let reparsed = detect(&switched).unwrap().profile.unwrap();
        assert_eq!(reparsed, Profile::parse("foo_preview"));
    }
}
