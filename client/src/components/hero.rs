//! Landing hero with the "Start Learning" call to action.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn Hero() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="hero">
            <h1 class="hero__title">"Learn, Code, and Grow, all in one place"</h1>
            <p class="hero__lede">
                "Curated videos from top creators, smart notes, a built-in code converter, plus an AI mentor to guide your journey. Track progress and earn ranks."
            </p>
            <div class="hero__actions">
                <button
                    class="btn btn--primary"
                    on:click=move |_| {
                        ui.update(|u| {
                            u.start_learning();
                        });
                    }
                >
                    "Start Learning"
                </button>
            </div>
        </div>
    }
}
