//! Sticky header with the brand mark, section menu, and session greeting.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::{Section, UiState};

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let items = Section::ALL
        .into_iter()
        .map(|section| {
            let class = move || {
                if ui.with(|u| u.section == section) { "nav__item nav__item--active" } else { "nav__item" }
            };
            view! {
                <button
                    class=class
                    on:click=move |_| {
                        ui.update(|u| {
                            u.navigate(section);
                        });
                    }
                >
                    {section.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <header class="header">
            <div class="header__brand">
                <img src="/flame-icon.svg" alt="logo" class="header__logo"/>
                <span class="header__title">"DevLearn Pro"</span>
            </div>
            <nav class="nav">{items}</nav>
            <span class="header__session">{move || auth.with(AuthState::greeting).unwrap_or_default()}</span>
        </header>
    }
}
