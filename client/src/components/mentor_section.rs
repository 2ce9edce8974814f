//! AI mentor: ask a question at a chosen level and show the answer.

use leptos::prelude::*;
use wire::MentorLevel;

use crate::state::mentor::MentorPanel;

#[component]
pub fn MentorSection() -> impl IntoView {
    let panel = RwSignal::new(MentorPanel::default());

    let on_ask = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::flows::ask_mentor(&panel, &crate::net::api::backend()).await;
        });
    };

    let levels = MentorLevel::ALL
        .into_iter()
        .map(|level| {
            view! {
                <option value=level.as_str() selected=move || panel.with(|p| p.level == level)>
                    {level.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <h2 class="section__title">"AI Mentor"</h2>
        <div class="card mentor">
            <input
                class="input"
                prop:value=move || panel.with(|p| p.question.clone())
                on:input=move |ev| panel.update(|p| p.question = event_target_value(&ev))
            />
            <div class="mentor__controls">
                <input
                    class="input"
                    placeholder="Language (optional)"
                    prop:value=move || panel.with(|p| p.language.clone())
                    on:input=move |ev| panel.update(|p| p.language = event_target_value(&ev))
                />
                <select
                    class="input"
                    on:change=move |ev| {
                        if let Some(level) = MentorLevel::parse(&event_target_value(&ev)) {
                            panel.update(|p| p.level = level);
                        }
                    }
                >
                    {levels}
                </select>
                <button class="btn btn--primary" on:click=on_ask>
                    "Ask"
                </button>
            </div>
            <pre class="output">{move || panel.with(MentorPanel::display)}</pre>
        </div>
    }
}
