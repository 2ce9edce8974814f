//! "Get Started" card: sign up or log in with name and email.
//!
//! The form state is local to the card; a successful response writes the
//! returned user into the app-wide [`AuthState`].

use leptos::prelude::*;

use crate::state::auth::{AuthAction, AuthForm, AuthState};

#[component]
pub fn AuthCard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let form = RwSignal::new(AuthForm::default());

    let submit = move |action: AuthAction| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::flows::authenticate(&form, &auth, action, &crate::net::api::backend()).await;
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = action;
    };

    view! {
        <div class="card auth-card">
            <h3 class="card__title">"Get Started"</h3>
            <div class="auth-card__fields">
                <label class="field">
                    <span class="field__label">"Name"</span>
                    <input
                        class="input"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Email"</span>
                    <input
                        class="input"
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <div class="auth-card__actions">
                    <button class="btn btn--primary" on:click=move |_| submit(AuthAction::SignUp)>
                        "Sign up"
                    </button>
                    <button class="btn btn--secondary" on:click=move |_| submit(AuthAction::LogIn)>
                        "Log in"
                    </button>
                </div>
            </div>
            <p class="status">{move || form.with(AuthForm::status_text)}</p>
            <Show when=move || auth.with(AuthState::is_signed_in)>
                <p class="status status--ok">{move || auth.with(AuthState::greeting).unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
