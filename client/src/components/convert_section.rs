//! Code converter: translate a snippet between two languages.

use leptos::prelude::*;

use crate::state::convert::ConvertPanel;

#[component]
pub fn ConvertSection() -> impl IntoView {
    let panel = RwSignal::new(ConvertPanel::default());

    let on_convert = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::flows::convert_code(&panel, &crate::net::api::backend()).await;
        });
    };

    view! {
        <h2 class="section__title">"Code Converter"</h2>
        <div class="converter">
            <div class="card converter__input">
                <div class="converter__languages">
                    <input
                        class="input"
                        prop:value=move || panel.with(|p| p.source_language.clone())
                        on:input=move |ev| panel.update(|p| p.source_language = event_target_value(&ev))
                    />
                    <input
                        class="input"
                        prop:value=move || panel.with(|p| p.target_language.clone())
                        on:input=move |ev| panel.update(|p| p.target_language = event_target_value(&ev))
                    />
                </div>
                <textarea
                    class="input input--code"
                    rows="10"
                    prop:value=move || panel.with(|p| p.code.clone())
                    on:input=move |ev| panel.update(|p| p.code = event_target_value(&ev))
                ></textarea>
                <div class="card__actions">
                    <button class="btn btn--primary" on:click=on_convert>
                        "Convert"
                    </button>
                </div>
            </div>
            <pre class="card output">{move || panel.with(ConvertPanel::display)}</pre>
        </div>
    }
}
