/// Switcher components for the popup

use yew::prelude::*;
use crate::controls::{profile_controls, view_controls, Switch};
use crate::search_url::{Profile, View};

#[derive(Properties, PartialEq)]
pub struct ViewSwitcherProps {
    pub current: View,
    pub on_switch: Callback<Switch>,
}

#[function_component(ViewSwitcher)]
pub fn view_switcher(props: &ViewSwitcherProps) -> Html {
    html! {
        <div class="switcher-row">
            <span class="switcher-label">{"View"}</span>
            {for view_controls(props.current).into_iter().map(|control| {
                let view = control.view;
                let onclick = props.on_switch.reform(move |_: MouseEvent| Switch::View(view));
                html! {
                    <button
                        class="pf-v5-c-button pf-m-secondary pf-m-small view-switch"
                        data-view={view.as_str()}
                        disabled={control.disabled}
                        {onclick}
                    >
                        {view.label()}
                    </button>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProfileSwitcherProps {
    pub profile: Option<Profile>,
    pub on_switch: Callback<Switch>,
}

#[function_component(ProfileSwitcher)]
pub fn profile_switcher(props: &ProfileSwitcherProps) -> Html {
    let controls = profile_controls(props.profile.as_ref());
    let on_reset = props.on_switch.reform(|_: MouseEvent| Switch::reset());

    html! {
        <div class="switcher-row">
            <span class="switcher-label">{"Profile"}</span>

            if let Some(name) = &controls.name {
                <code id="profile-name">{name}</code>
                <span class="profile-variants">
                    {for controls.variants.iter().map(|variant| {
                        let target = variant.target.clone();
                        let onclick = props.on_switch.reform(move |_: MouseEvent| Switch::Profile(target.clone()));
                        html! {
                            <button
                                class="pf-v5-c-button pf-m-secondary pf-m-small profile-switch"
                                data-profile={variant.suffix}
                                disabled={variant.disabled}
                                {onclick}
                            >
                                {variant.label}
                            </button>
                        }
                    })}
                </span>
            }

            if controls.show_reset {
                <span class="profile-reset-container">
                    <button id="profile-reset" class="pf-v5-c-button pf-m-link pf-m-small" onclick={on_reset}>
                        {"Reset to _default"}
                    </button>
                </span>
            }
        </div>
    }
}

#[function_component(NotDetected)]
pub fn not_detected() -> Html {
    html! {
        <div id="funnelback-not-detected">
            <p class="message-paragraph">{"This tab is not showing Funnelback search results."}</p>
        </div>
    }
}
