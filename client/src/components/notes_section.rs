//! Personal notes: a draft form beside the signed-in user's note list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is fetched when the section mounts and again whenever the
//! session changes while it is open. Saving goes through
//! [`crate::net::flows::save_note`], which reloads the list after a
//! successful create.

use leptos::prelude::*;
use wire::Note;

use crate::state::auth::AuthState;
use crate::state::notes::{NotesPanel, SIGN_IN_PROMPT};

#[component]
pub fn NotesSection() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let panel = RwSignal::new(NotesPanel::default());

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let session = auth.with(|a| a.user.clone());
        leptos::task::spawn_local(async move {
            crate::net::flows::load_notes(&panel, session.as_ref(), &crate::net::api::backend()).await;
        });
    });

    let on_save = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let session = auth.get_untracked().user;
            crate::net::flows::save_note(&panel, session.as_ref(), &crate::net::api::backend()).await;
        });
    };

    view! {
        <h2 class="section__title">"Your Notes"</h2>
        <Show
            when=move || auth.with(AuthState::is_signed_in)
            fallback=|| view! { <p class="prompt">{SIGN_IN_PROMPT}</p> }
        >
            <div class="notes">
                <div class="card notes__form">
                    <input
                        class="input"
                        placeholder="Title"
                        prop:value=move || panel.with(|p| p.title.clone())
                        on:input=move |ev| panel.update(|p| p.title = event_target_value(&ev))
                    />
                    <textarea
                        class="input"
                        placeholder="Write your notes here..."
                        rows="8"
                        prop:value=move || panel.with(|p| p.content.clone())
                        on:input=move |ev| panel.update(|p| p.content = event_target_value(&ev))
                    ></textarea>
                    <div class="card__actions">
                        <button
                            class="btn btn--primary"
                            disabled=move || panel.with(|p| p.save.is_pending())
                            on:click=on_save
                        >
                            "Save"
                        </button>
                    </div>
                    <p class="status">{move || panel.with(NotesPanel::save_message).unwrap_or_default()}</p>
                </div>
                <div class="notes__list">
                    {move || {
                        panel
                            .with(|p| p.notes().to_vec())
                            .into_iter()
                            .map(|note| view! { <NoteCard note/> })
                            .collect_view()
                    }}
                    {move || panel.with(NotesPanel::list_message).map(|text| view! { <p class="prompt">{text}</p> })}
                </div>
            </div>
        </Show>
    }
}

#[component]
fn NoteCard(note: Note) -> impl IntoView {
    view! {
        <div class="card note">
            <h4 class="note__title">{note.title}</h4>
            <p class="note__content">{note.content}</p>
        </div>
    }
}
