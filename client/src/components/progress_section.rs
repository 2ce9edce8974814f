//! Progress tracker: completed lesson count, rank, and the intro lesson.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::progress::{ProgressPanel, SIGN_IN_PROMPT};

#[component]
pub fn ProgressSection() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let panel = RwSignal::new(ProgressPanel::default());

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let session = auth.with(|a| a.user.clone());
        leptos::task::spawn_local(async move {
            crate::net::flows::load_progress(&panel, session.as_ref(), &crate::net::api::backend()).await;
        });
    });

    let on_complete = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let session = auth.get_untracked().user;
            crate::net::flows::complete_intro(&panel, session.as_ref(), &crate::net::api::backend()).await;
        });
    };

    view! {
        <h2 class="section__title">"Your Progress"</h2>
        <Show
            when=move || auth.with(AuthState::is_signed_in)
            fallback=|| view! { <p class="prompt">{SIGN_IN_PROMPT}</p> }
        >
            <div class="card progress">
                <p class="progress__stat">{move || panel.with(ProgressPanel::completed_label)}</p>
                <p class="progress__stat">{move || panel.with(ProgressPanel::rank_label)}</p>
                <button
                    class="btn btn--success"
                    disabled=move || panel.with(|p| p.update.is_pending())
                    on:click=on_complete
                >
                    "Mark Intro Complete"
                </button>
                <p class="status">{move || panel.with(ProgressPanel::error_message).unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
