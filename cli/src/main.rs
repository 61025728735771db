mod shell;

use std::io;

use clap::{Args, Parser, Subcommand};
use client::state::form::{self, DraftError, DraftId, FormMode, QuizDraft};
use client::state::solve::SolveSession;
use client::{ApiClient, ApiError};
use models::Question;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{0}")]
    Draft(#[from] DraftError),
    #[error("invalid question spec `{0}`; expected `QUESTION :: ANSWER`")]
    InvalidQuestionSpec(String),
    #[error("question {0} is not in the bank")]
    UnknownQuestion(i64),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "quizdeck", about = "Quiz management CLI")]
struct Cli {
    #[arg(long, env = "QUIZDECK_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is up.
    Ping,
    /// Quiz CRUD.
    Quiz(QuizCommand),
    /// Question bank.
    Question(QuestionCommand),
    /// Step through a quiz's questions interactively.
    Solve { quiz_id: i64 },
    /// Interactive shell: overview, form, and solve pages.
    Shell,
}

#[derive(Args, Debug)]
struct QuizCommand {
    #[command(subcommand)]
    command: QuizSubcommand,
}

#[derive(Subcommand, Debug)]
enum QuizSubcommand {
    List,
    Read {
        quiz_id: i64,
    },
    Create {
        #[arg(long)]
        name: String,
        /// New question as `QUESTION :: ANSWER`; repeatable.
        #[arg(long = "question")]
        questions: Vec<String>,
        /// Reuse an existing bank question by ID; repeatable.
        #[arg(long = "use")]
        use_ids: Vec<i64>,
    },
    Update {
        quiz_id: i64,
        #[arg(long)]
        name: Option<String>,
        /// New question as `QUESTION :: ANSWER`; repeatable.
        #[arg(long = "add")]
        add: Vec<String>,
        /// Reuse an existing bank question by ID; repeatable.
        #[arg(long = "use")]
        use_ids: Vec<i64>,
        /// Drop a question from the quiz by ID; repeatable.
        #[arg(long = "drop")]
        drop_ids: Vec<i64>,
    },
    Delete {
        quiz_id: i64,
    },
}

#[derive(Args, Debug)]
struct QuestionCommand {
    #[command(subcommand)]
    command: QuestionSubcommand,
}

#[derive(Subcommand, Debug)]
enum QuestionSubcommand {
    List,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let api = ApiClient::new(cli.base_url);

    if let Err(error) = run(&api, cli.command).await {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

async fn run(api: &ApiClient, command: Command) -> Result<(), CliError> {
    match command {
        Command::Ping => {
            api.ping().await?;
            println!("ok");
            Ok(())
        }
        Command::Quiz(quiz) => run_quiz(api, quiz).await,
        Command::Question(question) => run_question(api, question).await,
        Command::Solve { quiz_id } => run_solve(api, quiz_id).await,
        Command::Shell => shell::run(api).await,
    }
}

async fn run_quiz(api: &ApiClient, quiz: QuizCommand) -> Result<(), CliError> {
    match quiz.command {
        QuizSubcommand::List => print_json(&api.list_quizzes().await?),
        QuizSubcommand::Read { quiz_id } => print_json(&api.get_quiz(quiz_id).await?),
        QuizSubcommand::Create { name, questions, use_ids } => {
            let mut draft = QuizDraft::new();
            draft.set_name(name);
            let bank = if use_ids.is_empty() { Vec::new() } else { api.list_questions().await? };
            for id in use_ids {
                let question = find_in_bank(&bank, id)?;
                draft.add_existing(question);
            }
            for spec in &questions {
                let (question, answer) = shell::parse_question_spec(spec)
                    .ok_or_else(|| CliError::InvalidQuestionSpec(spec.clone()))?;
                draft.add_new(&question, &answer)?;
            }
            let created = api.create_quiz(&draft.payload()?).await?;
            print_json(&created)
        }
        QuizSubcommand::Update { quiz_id, name, add, use_ids, drop_ids } => {
            let form = form::load(api, FormMode::Edit(quiz_id)).await?;
            let mut draft = form.draft;
            if let Some(name) = name {
                draft.set_name(name);
            }
            for id in drop_ids {
                draft.remove(DraftId::Persisted(id));
            }
            for id in use_ids {
                let question = find_in_bank(&form.bank, id)?;
                draft.add_existing(question);
            }
            for spec in &add {
                let (question, answer) = shell::parse_question_spec(spec)
                    .ok_or_else(|| CliError::InvalidQuestionSpec(spec.clone()))?;
                draft.add_new(&question, &answer)?;
            }
            let updated = api.update_quiz(quiz_id, &draft.payload()?).await?;
            print_json(&updated)
        }
        QuizSubcommand::Delete { quiz_id } => print_json(&api.delete_quiz(quiz_id).await?),
    }
}

async fn run_question(api: &ApiClient, question: QuestionCommand) -> Result<(), CliError> {
    match question.command {
        QuestionSubcommand::List => print_json(&api.list_questions().await?),
    }
}

async fn run_solve(api: &ApiClient, quiz_id: i64) -> Result<(), CliError> {
    let quiz = api.get_quiz(quiz_id).await?;
    println!("{}", quiz.name);
    let mut session = SolveSession::new(quiz.questions);
    shell::solve_loop(&mut session)?;
    Ok(())
}

fn find_in_bank(bank: &[Question], id: i64) -> Result<&Question, CliError> {
    bank.iter()
        .find(|question| question.id == id)
        .ok_or(CliError::UnknownQuestion(id))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
