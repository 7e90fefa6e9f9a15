/// Popup UI for the search switcher extension

use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use patternfly_yew::prelude::*;
use crate::controls::Switch;
use crate::search_url::{detect, Profile, SearchPage};
use crate::tab_data::TabInfo;
use crate::ui::components::{NotDetected, ProfileSwitcher, ViewSwitcher};

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getCurrentTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn updateTabUrl(tab_id: i32, url: &str) -> Result<(), JsValue>;
}

#[derive(Clone, PartialEq)]
enum PopupState {
    Loading,
    NotDetected,
    Detected(SearchPage),
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| PopupState::Loading);

    // Inspect the active tab on mount
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let detected = match get_current_tab().await {
                    Ok(tab) => detect(&tab.url),
                    Err(e) => {
                        log::warn!("{}", e);
                        None
                    }
                };

                match detected {
                    Some(page) => {
                        log::debug!(
                            "Detected {} view, profile {:?}",
                            page.view.as_str(),
                            page.profile.as_ref().map(Profile::value)
                        );
                        state.set(PopupState::Detected(page));
                    }
                    None => state.set(PopupState::NotDetected),
                }
            });
            || ()
        });
    }

    let on_switch = Callback::from(move |switch: Switch| {
        spawn_local(async move {
            if let Err(e) = navigate(&switch).await {
                log::error!("{}", e);
            }
            close_popup();
        });
    });

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Funnelback Switcher"}</h1>

            {match &*state {
                PopupState::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                    </div>
                },
                PopupState::NotDetected => html! {
                    <NotDetected />
                },
                PopupState::Detected(page) => html! {
                    <div id="funnelback-controls" class="flex-column-gap">
                        <ViewSwitcher current={page.view} on_switch={on_switch.clone()} />
                        <ProfileSwitcher profile={page.profile.clone()} on_switch={on_switch.clone()} />
                    </div>
                },
            }}
        </div>
    }
}

// Helper functions

async fn get_current_tab() -> Result<TabInfo, String> {
    let tab_js = getCurrentTab()
        .await
        .map_err(|e| format!("Failed to query active tab: {:?}", e))?;

    let tab: Option<TabInfo> = serde_wasm_bindgen::from_value(tab_js)
        .map_err(|e| format!("Failed to parse tab: {:?}", e))?;

    tab.ok_or_else(|| "No active tab".to_string())
}

async fn navigate(switch: &Switch) -> Result<(), String> {
    // Re-read the tab: it may have navigated since the popup opened
    let tab = get_current_tab().await?;
    let url = switch.apply(&tab.url);

    log::info!("Navigating tab {} to {}", tab.id, url);

    updateTabUrl(tab.id, &url)
        .await
        .map_err(|e| format!("Failed to update tab: {:?}", e))
}

fn close_popup() {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.close() {
                log::warn!("Failed to close popup: {:?}", e);
            }
        }
        None => log::warn!("No window to close"),
    }
}
