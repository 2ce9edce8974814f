use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::oneshot;
use wire::api::testing::{RecordedCall, ScriptedTransport};
use wire::{ApiRequest, ConvertResult, ErrorKind, Method, RawResponse, SessionUser};

use super::*;
use crate::state::panel::PanelState;

const ORIGIN: &str = "http://backend.test";

fn api(transport: ScriptedTransport) -> ApiClient<ScriptedTransport> {
    ApiClient::new(ORIGIN, transport)
}

fn user(id: &str) -> SessionUser {
    SessionUser(serde_json::json!({ "user_id": id, "name": "Ada", "email": "ada@example.com" }))
}

fn note_json(id: &str, title: &str, content: &str) -> serde_json::Value {
    serde_json::json!({ "id": id, "user_id": "u1", "title": title, "content": content })
}

/// Transport whose replies are released by the test through oneshot gates,
/// one gate per call in issue order.
struct GatedTransport {
    gates: RefCell<VecDeque<oneshot::Receiver<RawResponse>>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl GatedTransport {
    fn new(gates: Vec<oneshot::Receiver<RawResponse>>) -> Self {
        Self { gates: RefCell::new(gates.into()), calls: RefCell::new(Vec::new()) }
    }
}

#[async_trait(?Send)]
impl Transport for GatedTransport {
    async fn execute(&self, url: &str, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        self.calls.borrow_mut().push(RecordedCall {
            method: request.method,
            url: url.to_owned(),
            body: request.body.clone(),
        });
        let gate = self.gates.borrow_mut().pop_front();
        let Some(gate) = gate else {
            return Err(ApiError::Network("no gate".to_owned()));
        };
        gate.await.map_err(|_| ApiError::Network("gate dropped".to_owned()))
    }
}

/// Cell that can be emptied mid-request, like a panel unmounting.
struct Detachable<P>(RefCell<Option<P>>);

impl<P> Detachable<P> {
    fn new(panel: P) -> Self {
        Self(RefCell::new(Some(panel)))
    }

    fn detach(&self) {
        self.0.borrow_mut().take();
    }
}

impl<P> PanelCell<P> for Detachable<P> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut P) -> R) -> Option<R> {
        self.0.borrow_mut().as_mut().map(f)
    }
}

fn answer(text: &str) -> RawResponse {
    RawResponse::new(200, serde_json::json!({ "answer": text }).to_string())
}

// =============================================================
// Videos
// =============================================================

#[tokio::test]
async fn load_videos_fetches_catalog_once() {
    let api = api(ScriptedTransport::new().reply(
        200,
        &serde_json::json!({ "channels": [{ "name": "c", "url": "u", "topics": [], "videos": [] }] }),
    ));
    let panel = RefCell::new(VideosPanel::default());

    load_videos(&panel, &api).await;

    assert_eq!(panel.borrow().channels().len(), 1);
    let calls = api.transport().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, Method::Get);
    assert_eq!(calls[0].url, "http://backend.test/api/videos");
}

#[tokio::test]
async fn load_videos_malformed_body_fails_panel() {
    let api = api(ScriptedTransport::new().reply_text(200, "not json"));
    let panel = RefCell::new(VideosPanel::default());

    load_videos(&panel, &api).await;

    let error = panel.borrow().catalog.error().cloned().expect("failed");
    assert_eq!(error.kind(), ErrorKind::MalformedResponse);
}

// =============================================================
// Identity gating
// =============================================================

#[tokio::test]
async fn notes_without_session_issue_no_requests() {
    let api = api(ScriptedTransport::new());
    let panel = RefCell::new(NotesPanel { title: "T".to_owned(), content: "C".to_owned(), ..NotesPanel::default() });

    assert!(!load_notes(&panel, None, &api).await);
    assert!(!save_note(&panel, None, &api).await);

    assert!(api.transport().calls().is_empty());
    assert_eq!(panel.borrow().save.state(), &PanelState::Idle);
    assert_eq!(panel.borrow().title, "T");
}

#[tokio::test]
async fn progress_without_session_issues_no_requests() {
    let api = api(ScriptedTransport::new());
    let panel = RefCell::new(ProgressPanel::default());

    assert!(!complete_intro(&panel, None, &api).await);
    assert!(!load_progress(&panel, None, &api).await);

    assert!(api.transport().calls().is_empty());
    assert_eq!(panel.borrow().error_message(), None);
}

#[tokio::test]
async fn session_without_user_id_counts_as_signed_out() {
    let api = api(ScriptedTransport::new());
    let panel = RefCell::new(NotesPanel::default());
    let partial = SessionUser(serde_json::json!({ "name": "Ada" }));

    assert!(!save_note(&panel, Some(&partial), &api).await);
    assert!(api.transport().calls().is_empty());
}

// =============================================================
// Notes
// =============================================================

#[tokio::test]
async fn opening_notes_issues_one_get_before_showing_list() {
    let (tx, rx) = oneshot::channel();
    let api = ApiClient::new(ORIGIN, GatedTransport::new(vec![rx]));
    let panel = RefCell::new(NotesPanel::default());
    let session = user("u1");

    let release = async {
        tokio::task::yield_now().await;
        assert!(panel.borrow().list.is_pending());
        assert!(panel.borrow().notes().is_empty());
        let _ = tx.send(RawResponse::new(200, serde_json::json!([note_json("n1", "T", "C")]).to_string()));
    };
    let (issued, ()) = tokio::join!(load_notes(&panel, Some(&session), &api), release);

    assert!(issued);
    let calls = api.transport().calls.borrow().clone();
    assert_eq!(
        calls,
        vec![RecordedCall { method: Method::Get, url: "http://backend.test/api/notes?user_id=u1".to_owned(), body: None }]
    );
    assert_eq!(panel.borrow().notes()[0].id, "n1");
}

#[tokio::test]
async fn save_note_posts_then_reloads_once() {
    let api = api(
        ScriptedTransport::new()
            .reply(200, &note_json("n9", "T", "C"))
            .reply(200, &serde_json::json!([note_json("n9", "T", "C"), note_json("n1", "older", "x")])),
    );
    let panel = RefCell::new(NotesPanel { title: "T".to_owned(), content: "C".to_owned(), ..NotesPanel::default() });
    let session = user("u1");

    assert!(save_note(&panel, Some(&session), &api).await);

    let calls = api.transport().calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].method, Method::Post);
    assert_eq!(calls[0].url, "http://backend.test/api/notes");
    assert_eq!(calls[0].body, Some(serde_json::json!({ "user_id": "u1", "title": "T", "content": "C" })));
    assert_eq!(calls[1].method, Method::Get);
    assert_eq!(calls[1].url, "http://backend.test/api/notes?user_id=u1");

    let panel = panel.borrow();
    let titles: Vec<_> = panel.notes().iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, ["T", "older"]);
    assert!(panel.title.is_empty());
    assert!(panel.content.is_empty());
}

#[tokio::test]
async fn failed_save_keeps_draft_and_skips_reload() {
    let api = api(ScriptedTransport::new().reply(500, &serde_json::json!({ "detail": "db down" })));
    let panel = RefCell::new(NotesPanel { title: "T".to_owned(), content: "C".to_owned(), ..NotesPanel::default() });
    let session = user("u1");

    assert!(save_note(&panel, Some(&session), &api).await);

    assert_eq!(api.transport().calls().len(), 1);
    let panel = panel.borrow();
    assert_eq!(panel.title, "T");
    assert_eq!(panel.content, "C");
    assert_eq!(panel.save.error().map(ApiError::kind), Some(ErrorKind::Backend));
}

// =============================================================
// Mentor
// =============================================================

#[tokio::test]
async fn ask_mentor_posts_form_and_displays_answer() {
    let api = api(ScriptedTransport::new().reply(200, &serde_json::json!({ "answer": "Start with factorial." })));
    let panel = RefCell::new(MentorPanel::default());

    ask_mentor(&panel, &api).await;

    let calls = api.transport().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].url, "http://backend.test/api/ai/mentor");
    assert_eq!(
        calls[0].body,
        Some(serde_json::json!({ "question": "How do I learn recursion?", "language": "", "level": "beginner" }))
    );
    assert_eq!(panel.borrow().display(), "Start with factorial.");
}

#[tokio::test]
async fn overlapping_asks_keep_last_issued_answer_when_it_arrives_first() {
    let (tx1, rx1) = oneshot::channel();
    let (tx2, rx2) = oneshot::channel();
    let api = ApiClient::new(ORIGIN, GatedTransport::new(vec![rx1, rx2]));
    let panel = RefCell::new(MentorPanel::default());

    let release = async {
        tokio::task::yield_now().await;
        let _ = tx2.send(answer("second"));
        while panel.borrow().display() != "second" {
            tokio::task::yield_now().await;
        }
        let _ = tx1.send(answer("first"));
    };
    tokio::join!(ask_mentor(&panel, &api), ask_mentor(&panel, &api), release);

    assert_eq!(api.transport().calls.borrow().len(), 2);
    assert_eq!(panel.borrow().display(), "second");
    assert!(!panel.borrow().answer.in_flight());
}

#[tokio::test]
async fn overlapping_asks_in_order_end_on_last_issued_answer() {
    let (tx1, rx1) = oneshot::channel();
    let (tx2, rx2) = oneshot::channel();
    let api = ApiClient::new(ORIGIN, GatedTransport::new(vec![rx1, rx2]));
    let panel = RefCell::new(MentorPanel::default());

    let release = async {
        tokio::task::yield_now().await;
        let _ = tx1.send(answer("first"));
        while panel.borrow().display() != "first" {
            tokio::task::yield_now().await;
        }
        let _ = tx2.send(answer("second"));
    };
    tokio::join!(ask_mentor(&panel, &api), ask_mentor(&panel, &api), release);

    assert_eq!(panel.borrow().display(), "second");
}

#[tokio::test]
async fn late_answer_after_unmount_is_dropped() {
    let (tx, rx) = oneshot::channel();
    let api = ApiClient::new(ORIGIN, GatedTransport::new(vec![rx]));
    let panel = Detachable::new(MentorPanel::default());

    let unmount = async {
        tokio::task::yield_now().await;
        panel.detach();
        let _ = tx.send(answer("too late"));
    };
    tokio::join!(ask_mentor(&panel, &api), unmount);

    assert_eq!(api.transport().calls.borrow().len(), 1);
    assert!(panel.0.borrow().is_none());
}

// =============================================================
// Converter
// =============================================================

#[tokio::test]
async fn convert_code_posts_fields_and_formats_notes() {
    let api = api(ScriptedTransport::new().reply(
        200,
        &serde_json::json!({ "converted": "print(\"Hello\")", "notes": "print replaces console.log" }),
    ));
    let panel = RefCell::new(ConvertPanel::default());

    convert_code(&panel, &api).await;

    let calls = api.transport().calls();
    assert_eq!(calls[0].url, "http://backend.test/api/ai/convert");
    assert_eq!(
        calls[0].body,
        Some(serde_json::json!({
            "source_language": "javascript",
            "target_language": "python",
            "code": "console.log(\"Hello\")"
        }))
    );
    assert_eq!(panel.borrow().display(), "print(\"Hello\")\n\nNotes: print replaces console.log");
    assert_eq!(
        panel.borrow().result.value(),
        Some(&ConvertResult { converted: "print(\"Hello\")".to_owned(), notes: Some("print replaces console.log".to_owned()) })
    );
}

#[tokio::test]
async fn convert_network_failure_shows_message_not_placeholder() {
    let api = api(ScriptedTransport::new().fail(ApiError::Network("refused".to_owned())));
    let panel = RefCell::new(ConvertPanel::default());

    convert_code(&panel, &api).await;

    assert_eq!(panel.borrow().display(), ApiError::Network(String::new()).user_message());
}

// =============================================================
// Progress
// =============================================================

#[tokio::test]
async fn complete_intro_posts_then_reloads_progress() {
    let api = api(
        ScriptedTransport::new()
            .reply(200, &serde_json::json!({ "ok": true }))
            .reply(200, &serde_json::json!({ "completed": 1, "rank": "Novice" })),
    );
    let panel = RefCell::new(ProgressPanel::default());
    let session = user("u1");

    assert!(complete_intro(&panel, Some(&session), &api).await);

    let calls = api.transport().calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].url, "http://backend.test/api/progress");
    assert_eq!(
        calls[0].body,
        Some(serde_json::json!({ "user_id": "u1", "course": "Foundations", "lesson": "Intro", "completed": true }))
    );
    assert_eq!(calls[1].method, Method::Get);
    assert_eq!(calls[1].url, "http://backend.test/api/progress/u1");
    assert_eq!(panel.borrow().completed_label(), "Completed: 1");
    assert_eq!(panel.borrow().rank_label(), "Rank: Novice");
}

// =============================================================
// Auth
// =============================================================

#[tokio::test]
async fn sign_up_stores_returned_user_verbatim() {
    let payload = serde_json::json!({ "user_id": "u7", "name": "Student", "email": "student@example.com", "rank": "Novice" });
    let api = api(ScriptedTransport::new().reply(200, &payload));
    let form = RefCell::new(AuthForm::default());
    let auth = RefCell::new(AuthState::default());

    authenticate(&form, &auth, AuthAction::SignUp, &api).await;

    assert_eq!(api.transport().calls()[0].url, "http://backend.test/api/auth/signup");
    assert_eq!(auth.borrow().user.as_ref().map(SessionUser::raw), Some(&payload));
    assert_eq!(auth.borrow().identity().as_deref(), Some("u7"));
    assert_eq!(form.borrow().status_text(), "");
}

#[tokio::test]
async fn failed_login_leaves_session_untouched() {
    let api = api(ScriptedTransport::new().reply(404, &serde_json::json!({ "detail": "no such user" })));
    let form = RefCell::new(AuthForm::default());
    let auth = RefCell::new(AuthState::default());

    authenticate(&form, &auth, AuthAction::LogIn, &api).await;

    assert_eq!(
        api.transport().calls()[0].body,
        Some(serde_json::json!({ "email": "student@example.com" }))
    );
    assert!(auth.borrow().user.is_none());
    assert_eq!(form.borrow().status_text(), "The server returned an error (HTTP 404).");
}

#[tokio::test]
async fn login_completing_after_form_unmount_still_signs_in() {
    let (tx, rx) = oneshot::channel();
    let api = ApiClient::new(ORIGIN, GatedTransport::new(vec![rx]));
    let form = Detachable::new(AuthForm::default());
    let auth = RefCell::new(AuthState::default());

    let navigate_away = async {
        tokio::task::yield_now().await;
        form.detach();
        let _ = tx.send(RawResponse::new(200, serde_json::json!({ "user_id": "u1" }).to_string()));
    };
    tokio::join!(authenticate(&form, &auth, AuthAction::LogIn, &api), navigate_away);

    assert_eq!(auth.borrow().identity().as_deref(), Some("u1"));
}
