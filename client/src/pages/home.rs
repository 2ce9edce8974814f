//! Single-page shell: header, the active section, and the footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the selected section is mounted. Switching sections disposes the
//! previous section's reactive owner, which drops its panel signals, so a
//! response that lands afterwards finds no panel and is ignored.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::auth_card::AuthCard;
use crate::components::convert_section::ConvertSection;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::mentor_section::MentorSection;
use crate::components::notes_section::NotesSection;
use crate::components::progress_section::ProgressSection;
use crate::components::videos_section::VideosSection;
use crate::state::ui::{Section, UiState};

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let section = Memo::new(move |_| ui.with(|u| u.section));

    view! {
        <div class="app">
            <Header/>
            {move || section_view(section.get())}
            <footer class="footer">"Built for learners • Uses your backend for data and AI helpers"</footer>
        </div>
    }
}

fn section_view(section: Section) -> impl IntoView {
    let body = match section {
        Section::Home => view! {
            <Hero/>
            <AuthCard/>
        }
        .into_any(),
        Section::Videos => view! { <VideosSection/> }.into_any(),
        Section::Notes => view! { <NotesSection/> }.into_any(),
        Section::Mentor => view! { <MentorSection/> }.into_any(),
        Section::Convert => view! { <ConvertSection/> }.into_any(),
        Section::Progress => view! { <ProgressSection/> }.into_any(),
    };
    view! { <main class=section.root_class()>{body}</main> }
}
