use wire::Method;
use wire::api::testing::ScriptedTransport;

use super::*;

fn api(transport: ScriptedTransport) -> ApiClient<ScriptedTransport> {
    ApiClient::new("http://backend.test", transport)
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("devlearn-cli").chain(args.iter().copied())).expect("parse")
}

async fn run_to_string(api: &ApiClient<ScriptedTransport>, args: &[&str]) -> Result<String, CliError> {
    let mut out = Vec::new();
    run(api, parse(args).command, &mut out).await?;
    Ok(String::from_utf8(out).expect("utf8"))
}

// =============================================================
// Argument parsing
// =============================================================

#[test]
fn defaults_apply_without_flags() {
    let cli = parse(&["videos"]);
    assert_eq!(cli.timeout_secs, 30);
    assert!(matches!(cli.command, Command::Videos));
}

#[test]
fn base_url_flag_overrides_default() {
    let cli = parse(&["--base-url", "https://api.example.test/", "videos"]);
    assert_eq!(cli.base_url, "https://api.example.test/");
}

#[test]
fn mentor_level_is_validated() {
    let err = Cli::try_parse_from(["devlearn-cli", "mentor", "q", "--level", "expert"]).expect_err("rejects");
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

    let cli = parse(&["mentor", "q", "--level", "advanced"]);
    assert!(matches!(cli.command, Command::Mentor { level: MentorLevel::Advanced, .. }));
}

#[test]
fn convert_requires_code_or_file() {
    assert!(Cli::try_parse_from(["devlearn-cli", "convert"]).is_err());
    assert!(Cli::try_parse_from(["devlearn-cli", "convert", "--code", "x", "--file", "a.js"]).is_err());
}

#[test]
fn notes_require_user_id() {
    assert!(Cli::try_parse_from(["devlearn-cli", "notes", "list"]).is_err());
}

// =============================================================
// Command execution
// =============================================================

#[tokio::test]
async fn videos_prints_catalog() {
    let api = api(ScriptedTransport::new().reply(
        200,
        &serde_json::json!({ "channels": [{ "name": "c", "url": "u", "topics": ["Rust"], "videos": [] }] }),
    ));
    let out = run_to_string(&api, &["videos"]).await.expect("run");
    assert_eq!(out, "c <u>\n  Topics: Rust\n");
}

#[tokio::test]
async fn notes_create_posts_then_reloads() {
    let api = api(
        ScriptedTransport::new()
            .reply(200, &serde_json::json!({ "id": "n1" }))
            .reply(200, &serde_json::json!([{ "id": "n1", "title": "T", "content": "C" }])),
    );
    let out = run_to_string(&api, &["notes", "--user-id", "u1", "create", "--title", "T", "--content", "C"])
        .await
        .expect("run");

    let calls = api.transport().calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].method, Method::Post);
    assert_eq!(calls[0].body, Some(serde_json::json!({ "user_id": "u1", "title": "T", "content": "C" })));
    assert_eq!(calls[1].url, "http://backend.test/api/notes?user_id=u1");
    assert_eq!(out, "[n1] T\n    C\n");
}

#[tokio::test]
async fn failed_create_skips_reload() {
    let api = api(ScriptedTransport::new().reply(422, &serde_json::json!({ "detail": "bad" })));
    let err = run_to_string(&api, &["notes", "--user-id", "u1", "create", "--title", "T"]).await.expect_err("fails");

    assert!(matches!(err, CliError::Api(ApiError::Backend { status: 422, .. })));
    assert_eq!(api.transport().calls().len(), 1);
}

#[tokio::test]
async fn mentor_prints_answer_only() {
    let api = api(ScriptedTransport::new().reply(200, &serde_json::json!({ "answer": "Use a base case." })));
    let out = run_to_string(&api, &["mentor", "How do I learn recursion?"]).await.expect("run");

    assert_eq!(
        api.transport().calls()[0].body,
        Some(serde_json::json!({ "question": "How do I learn recursion?", "language": "", "level": "beginner" }))
    );
    assert_eq!(out, "Use a base case.\n");
}

#[tokio::test]
async fn convert_appends_notes() {
    let api = api(ScriptedTransport::new().reply(200, &serde_json::json!({ "converted": "print(1)", "notes": "n" })));
    let out = run_to_string(&api, &["convert", "--code", "console.log(1)"]).await.expect("run");
    assert_eq!(out, "print(1)\n\nNotes: n\n");
}

#[tokio::test]
async fn convert_reports_unreadable_file() {
    let api = api(ScriptedTransport::new());
    let err = run_to_string(&api, &["convert", "--file", "/nonexistent/devlearn/snippet.js"])
        .await
        .expect_err("fails");

    assert!(matches!(err, CliError::ReadSource { .. }));
    assert!(api.transport().calls().is_empty());
}

#[tokio::test]
async fn progress_complete_records_then_reloads() {
    let api = api(
        ScriptedTransport::new()
            .reply(200, &serde_json::json!({}))
            .reply(200, &serde_json::json!({ "completed": 1, "rank": "Novice" })),
    );
    let out = run_to_string(&api, &["progress", "--user-id", "u1", "complete"]).await.expect("run");

    let calls = api.transport().calls();
    assert_eq!(calls[0].url, "http://backend.test/api/progress");
    assert_eq!(calls[1].url, "http://backend.test/api/progress/u1");
    assert_eq!(out, "Completed: 1\nRank: Novice\n");
}

#[tokio::test]
async fn signup_prints_session_verbatim() {
    let api = api(ScriptedTransport::new().reply(200, &serde_json::json!({ "user_id": 7 })));
    let out = run_to_string(&api, &["signup"]).await.expect("run");

    assert_eq!(
        api.transport().calls()[0].body,
        Some(serde_json::json!({ "name": "Student", "email": "student@example.com", "provider": "email" }))
    );
    assert_eq!(out, "{\n  \"user_id\": 7\n}\n");
}

#[tokio::test]
async fn malformed_login_response_is_reported() {
    let api = api(ScriptedTransport::new().reply_text(200, "<html>"));
    let err = run_to_string(&api, &["login"]).await.expect_err("fails");
    assert!(matches!(err, CliError::Api(ApiError::MalformedResponse(_))));
}
