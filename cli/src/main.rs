mod render;
mod transport;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use wire::{
    ApiClient, ApiError, ConvertRequest, LoginRequest, MentorLevel, MentorRequest, NoteDraft, ProgressUpdate,
    SignupRequest, Transport,
};

use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http client setup failed: {0}")]
    Client(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("failed to read {path}: {source}")]
    ReadSource { path: PathBuf, source: io::Error },
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "devlearn-cli", about = "DevLearn Pro backend CLI")]
struct Cli {
    #[arg(long, env = "DEVLEARN_BACKEND_URL", default_value = wire::DEFAULT_BACKEND_URL)]
    base_url: String,

    #[arg(long, default_value_t = 30, help = "Per-request timeout in seconds")]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List curated video channels.
    Videos,
    Notes(NotesCommand),
    /// Ask the AI mentor a question.
    Mentor {
        question: String,
        #[arg(long, default_value = "")]
        language: String,
        #[arg(long, default_value = "beginner", value_parser = parse_level)]
        level: MentorLevel,
    },
    /// Convert a code snippet between languages.
    Convert {
        #[arg(long, default_value = "javascript")]
        from: String,
        #[arg(long, default_value = "python")]
        to: String,
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        code: Option<String>,
        #[arg(long, help = "Read the snippet from a file instead of --code")]
        file: Option<PathBuf>,
    },
    Progress(ProgressCommand),
    /// Create an account with the email provider.
    Signup {
        #[arg(long, default_value = "Student")]
        name: String,
        #[arg(long, default_value = "student@example.com")]
        email: String,
    },
    /// Log in by email.
    Login {
        #[arg(long, default_value = "student@example.com")]
        email: String,
    },
}

#[derive(Args, Debug)]
struct NotesCommand {
    #[arg(long, env = "DEVLEARN_USER_ID")]
    user_id: String,

    #[command(subcommand)]
    command: NotesSubcommand,
}

#[derive(Subcommand, Debug)]
enum NotesSubcommand {
    List,
    /// Create a note, then print the reloaded list.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
    },
}

#[derive(Args, Debug)]
struct ProgressCommand {
    #[arg(long, env = "DEVLEARN_USER_ID")]
    user_id: String,

    #[command(subcommand)]
    command: ProgressSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProgressSubcommand {
    Show,
    /// Mark the intro lesson complete, then print the reloaded progress.
    Complete,
}

fn parse_level(raw: &str) -> Result<MentorLevel, String> {
    MentorLevel::parse(raw).ok_or_else(|| "expected one of: beginner, intermediate, advanced".to_owned())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let transport = ReqwestTransport::new(Duration::from_secs(cli.timeout_secs))?;
    let api = ApiClient::new(&cli.base_url, transport);
    tracing::debug!(origin = api.origin(), "using backend");

    let mut stdout = io::stdout().lock();
    run(&api, cli.command, &mut stdout).await
}

async fn run<T: Transport>(api: &ApiClient<T>, command: Command, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::Videos => {
            let catalog = api.list_videos().await?;
            write!(out, "{}", render::catalog(&catalog))?;
        }
        Command::Notes(notes) => run_notes(api, notes, out).await?,
        Command::Mentor { question, language, level } => {
            let answer = api.ask_mentor(&MentorRequest { question, language, level }).await?;
            writeln!(out, "{answer}")?;
        }
        Command::Convert { from, to, code, file } => {
            let code = match (code, file) {
                (Some(code), _) => code,
                (None, Some(path)) => {
                    std::fs::read_to_string(&path).map_err(|source| CliError::ReadSource { path, source })?
                }
                (None, None) => String::new(),
            };
            let request = ConvertRequest { source_language: from, target_language: to, code };
            let result = api.convert_code(&request).await?;
            writeln!(out, "{}", result.display_text())?;
        }
        Command::Progress(progress) => run_progress(api, progress, out).await?,
        Command::Signup { name, email } => {
            let user = api.sign_up(&SignupRequest::email(&name, &email)).await?;
            write!(out, "{}", render::session(&user)?)?;
        }
        Command::Login { email } => {
            let user = api.log_in(&LoginRequest { email }).await?;
            write!(out, "{}", render::session(&user)?)?;
        }
    }
    Ok(())
}

async fn run_notes<T: Transport>(api: &ApiClient<T>, notes: NotesCommand, out: &mut impl Write) -> Result<(), CliError> {
    let user_id = notes.user_id;
    if let NotesSubcommand::Create { title, content } = notes.command {
        api.create_note(&NoteDraft { user_id: user_id.clone(), title, content }).await?;
        tracing::info!(%user_id, "note created");
    }
    let list = api.list_notes(&user_id).await?;
    write!(out, "{}", render::notes(&list))?;
    Ok(())
}

async fn run_progress<T: Transport>(
    api: &ApiClient<T>,
    progress: ProgressCommand,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let user_id = progress.user_id;
    if matches!(progress.command, ProgressSubcommand::Complete) {
        api.record_progress(&ProgressUpdate::intro_complete(&user_id)).await?;
        tracing::info!(%user_id, "intro lesson recorded");
    }
    let record = api.fetch_progress(&user_id).await?;
    write!(out, "{}", render::progress(&record))?;
    Ok(())
}
