//! Async panel actions: begin a request, await the backend, apply the result.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components spawn these on the browser's single-threaded executor with
//! their panel signal as the [`PanelCell`]. Each flow takes its ticket
//! before the first await and resolves with it afterward, so overlapping
//! triggers settle by sequence rather than by completion order, and a flow
//! whose panel has unmounted drops its result.
//!
//! Identity-gated flows (notes, progress) take the session by reference and
//! return `false` without touching the network when there is no identity.

#[cfg(test)]
#[path = "flows_test.rs"]
mod flows_test;

use leptos::logging::{debug_warn, warn};
use wire::{ApiClient, ApiError, ProgressUpdate, SessionUser, Transport};

use crate::state::auth::{AuthAction, AuthForm, AuthState};
use crate::state::convert::ConvertPanel;
use crate::state::mentor::MentorPanel;
use crate::state::notes::NotesPanel;
use crate::state::panel::PanelCell;
use crate::state::progress::ProgressPanel;
use crate::state::videos::VideosPanel;

fn identity(session: Option<&SessionUser>) -> Option<String> {
    session.and_then(SessionUser::user_id)
}

fn report<T>(action: &str, result: &Result<T, ApiError>) {
    if let Err(e) = result {
        warn!("{action} failed: {e}");
    }
}

fn settle(action: &str, applied: Option<bool>) {
    match applied {
        Some(true) => {}
        Some(false) => debug_warn!("{action}: discarded stale response"),
        None => debug_warn!("{action}: panel gone, response dropped"),
    }
}

/// Fetch the curated catalog into the videos panel.
pub async fn load_videos<C, T>(panel: &C, api: &ApiClient<T>)
where
    C: PanelCell<VideosPanel>,
    T: Transport,
{
    let Some(ticket) = panel.with_mut(|p| p.catalog.begin()) else {
        return;
    };
    let result = api.list_videos().await;
    report("videos:list", &result);
    settle("videos:list", panel.with_mut(|p| p.catalog.resolve(ticket, result)));
}

/// Fetch the signed-in user's notes. Returns whether a request was issued.
pub async fn load_notes<C, T>(panel: &C, session: Option<&SessionUser>, api: &ApiClient<T>) -> bool
where
    C: PanelCell<NotesPanel>,
    T: Transport,
{
    let Some(user_id) = identity(session) else {
        return false;
    };
    let Some(ticket) = panel.with_mut(|p| p.list.begin()) else {
        return false;
    };
    let result = api.list_notes(&user_id).await;
    report("notes:list", &result);
    settle("notes:list", panel.with_mut(|p| p.list.resolve(ticket, result)));
    true
}

/// Create a note from the draft, then reload the list once on success.
/// Returns whether a request was issued.
pub async fn save_note<C, T>(panel: &C, session: Option<&SessionUser>, api: &ApiClient<T>) -> bool
where
    C: PanelCell<NotesPanel>,
    T: Transport,
{
    let Some(user_id) = identity(session) else {
        return false;
    };
    let Some((ticket, draft)) = panel.with_mut(|p| (p.save.begin(), p.draft(&user_id))) else {
        return false;
    };
    let result = api.create_note(&draft).await;
    report("notes:create", &result);
    let created = result.is_ok();
    let applied = panel.with_mut(|p| {
        let applied = p.save.resolve(ticket, result);
        if applied && created {
            p.clear_draft();
        }
        applied
    });
    settle("notes:create", applied);
    if created && applied.is_some() {
        load_notes(panel, session, api).await;
    }
    true
}

/// Ask the mentor the current question.
pub async fn ask_mentor<C, T>(panel: &C, api: &ApiClient<T>)
where
    C: PanelCell<MentorPanel>,
    T: Transport,
{
    let Some((ticket, request)) = panel.with_mut(MentorPanel::submit) else {
        return;
    };
    let result = api.ask_mentor(&request).await;
    report("mentor:ask", &result);
    settle("mentor:ask", panel.with_mut(|p| p.answer.resolve(ticket, result)));
}

/// Convert the current code snippet.
pub async fn convert_code<C, T>(panel: &C, api: &ApiClient<T>)
where
    C: PanelCell<ConvertPanel>,
    T: Transport,
{
    let Some((ticket, request)) = panel.with_mut(ConvertPanel::submit) else {
        return;
    };
    let result = api.convert_code(&request).await;
    report("convert:code", &result);
    settle("convert:code", panel.with_mut(|p| p.result.resolve(ticket, result)));
}

/// Fetch the signed-in user's progress. Returns whether a request was issued.
pub async fn load_progress<C, T>(panel: &C, session: Option<&SessionUser>, api: &ApiClient<T>) -> bool
where
    C: PanelCell<ProgressPanel>,
    T: Transport,
{
    let Some(user_id) = identity(session) else {
        return false;
    };
    let Some(ticket) = panel.with_mut(|p| p.record.begin()) else {
        return false;
    };
    let result = api.fetch_progress(&user_id).await;
    report("progress:get", &result);
    settle("progress:get", panel.with_mut(|p| p.record.resolve(ticket, result)));
    true
}

/// Record the intro lesson as complete, then reload progress on success.
/// Returns whether a request was issued.
pub async fn complete_intro<C, T>(panel: &C, session: Option<&SessionUser>, api: &ApiClient<T>) -> bool
where
    C: PanelCell<ProgressPanel>,
    T: Transport,
{
    let Some(user_id) = identity(session) else {
        return false;
    };
    let Some(ticket) = panel.with_mut(|p| p.update.begin()) else {
        return false;
    };
    let result = api.record_progress(&ProgressUpdate::intro_complete(&user_id)).await;
    report("progress:record", &result);
    let recorded = result.is_ok();
    let applied = panel.with_mut(|p| p.update.resolve(ticket, result));
    settle("progress:record", applied);
    if recorded && applied.is_some() {
        load_progress(panel, session, api).await;
    }
    true
}

/// Sign up or log in with the form's fields and store the returned user.
///
/// A success that lands after the form unmounted still signs the user in;
/// one that is stale relative to a newer submission does not.
pub async fn authenticate<F, A, T>(form: &F, auth: &A, action: AuthAction, api: &ApiClient<T>)
where
    F: PanelCell<AuthForm>,
    A: PanelCell<AuthState>,
    T: Transport,
{
    let Some((ticket, signup, login)) = form.with_mut(|f| (f.request.begin(), f.signup_request(), f.login_request()))
    else {
        return;
    };
    let result = match action {
        AuthAction::SignUp => api.sign_up(&signup).await,
        AuthAction::LogIn => api.log_in(&login).await,
    };
    report("auth", &result);
    let (status, user) = match result {
        Ok(user) => (Ok(()), Some(user)),
        Err(e) => (Err(e), None),
    };
    let applied = form.with_mut(|f| f.request.resolve(ticket, status));
    settle("auth", applied);
    if applied != Some(false)
        && let Some(user) = user
    {
        auth.with_mut(|a| a.sign_in(user));
    }
}
