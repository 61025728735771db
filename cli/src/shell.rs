//! Interactive shell: the three quiz pages in terminal form.
//!
//! DESIGN
//! ======
//! The shell starts on the overview page and enters the form or solve
//! pages on demand. Command parsing is kept in pure functions so each
//! page loop stays a thin dispatcher. API failures never exit the shell;
//! they surface as transient status messages, exactly like the page
//! notifications they stand in for.

use std::io::{self, Write};

use client::ApiClient;
use client::state::form::{self, DraftId, FormMode, QuizDraft};
use client::state::overview::QuizListCache;
use client::state::solve::SolveSession;
use client::state::ui::StatusLine;
use models::Question;

use crate::CliError;

// =============================================================================
// COMMAND PARSING
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum OverviewCommand {
    List,
    Refresh,
    New,
    Edit(i64),
    Solve(i64),
    Remove(i64),
    Help,
    Quit,
}

pub(crate) fn parse_overview(line: &str) -> Option<OverviewCommand> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;
    let arg = parts.next();
    if parts.next().is_some() {
        return None;
    }
    match (head, arg) {
        ("ls" | "list", None) => Some(OverviewCommand::List),
        ("refresh", None) => Some(OverviewCommand::Refresh),
        ("new", None) => Some(OverviewCommand::New),
        ("edit", Some(id)) => id.parse().ok().map(OverviewCommand::Edit),
        ("solve", Some(id)) => id.parse().ok().map(OverviewCommand::Solve),
        ("rm" | "delete", Some(id)) => id.parse().ok().map(OverviewCommand::Remove),
        ("help" | "?", None) => Some(OverviewCommand::Help),
        ("quit" | "exit" | "q", None) => Some(OverviewCommand::Quit),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum FormCommand {
    Name(String),
    Add { question: String, answer: String },
    Use(i64),
    Bank,
    List,
    /// 1-based row number in the draft listing.
    Remove(usize),
    Save,
    Back,
    Help,
}

pub(crate) fn parse_form(line: &str) -> Option<FormCommand> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    match head {
        "name" if !rest.is_empty() => Some(FormCommand::Name(rest.to_owned())),
        "add" => {
            parse_question_spec(rest).map(|(question, answer)| FormCommand::Add { question, answer })
        }
        "use" => rest.parse().ok().map(FormCommand::Use),
        "bank" if rest.is_empty() => Some(FormCommand::Bank),
        "ls" | "list" if rest.is_empty() => Some(FormCommand::List),
        "rm" => rest.parse().ok().map(FormCommand::Remove),
        "save" if rest.is_empty() => Some(FormCommand::Save),
        "back" if rest.is_empty() => Some(FormCommand::Back),
        "help" | "?" if rest.is_empty() => Some(FormCommand::Help),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SolveCommand {
    Next,
    Prev,
    Answer,
    Back,
    Help,
}

pub(crate) fn parse_solve(line: &str) -> Option<SolveCommand> {
    match line.trim() {
        "n" | "next" => Some(SolveCommand::Next),
        "p" | "prev" => Some(SolveCommand::Prev),
        "a" | "answer" => Some(SolveCommand::Answer),
        "b" | "back" | "q" => Some(SolveCommand::Back),
        "help" | "?" => Some(SolveCommand::Help),
        _ => None,
    }
}

/// Split `QUESTION :: ANSWER` into its two required parts.
pub(crate) fn parse_question_spec(spec: &str) -> Option<(String, String)> {
    let (question, answer) = spec.split_once("::")?;
    let question = question.trim();
    let answer = answer.trim();
    if question.is_empty() || answer.is_empty() {
        return None;
    }
    Some((question.to_owned(), answer.to_owned()))
}

// =============================================================================
// PAGE LOOPS
// =============================================================================

/// Run the shell until `quit` or end of input.
pub(crate) async fn run(api: &ApiClient) -> Result<(), CliError> {
    let mut cache = QuizListCache::new();
    let mut status = StatusLine::new();

    println!("quizdeck shell — type `help` for commands");
    loop {
        if let Some(message) = status.message() {
            println!("* {message}");
        }
        status.clear();

        let Some(line) = read_line("quiz> ")? else {
            return Ok(());
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_overview(&line) {
            Some(OverviewCommand::List) => show_overview(api, &mut cache, &mut status).await,
            Some(OverviewCommand::Refresh) => {
                cache.invalidate();
                show_overview(api, &mut cache, &mut status).await;
            }
            Some(OverviewCommand::New) => {
                if form_page(api, FormMode::Create, &mut status).await? {
                    cache.invalidate();
                }
            }
            Some(OverviewCommand::Edit(id)) => {
                if form_page(api, FormMode::Edit(id), &mut status).await? {
                    cache.invalidate();
                }
            }
            Some(OverviewCommand::Solve(id)) => match api.get_quiz(id).await {
                Ok(quiz) => {
                    println!("{}", quiz.name);
                    let mut session = SolveSession::new(quiz.questions);
                    solve_loop(&mut session)?;
                }
                Err(error) => status.set(error.to_string()),
            },
            Some(OverviewCommand::Remove(id)) => match api.delete_quiz(id).await {
                Ok(_) => {
                    cache.invalidate();
                    status.set("Quiz deleted.");
                }
                Err(error) => status.set(error.to_string()),
            },
            Some(OverviewCommand::Quit) => return Ok(()),
            Some(OverviewCommand::Help) | None => {
                println!(
                    "commands: ls | refresh | new | edit <id> | solve <id> | rm <id> | quit"
                );
            }
        }
    }
}

async fn show_overview(api: &ApiClient, cache: &mut QuizListCache, status: &mut StatusLine) {
    if !cache.is_warm() {
        match api.list_quizzes().await {
            Ok(quizzes) => cache.fill(quizzes),
            Err(error) => {
                status.set(error.to_string());
                return;
            }
        }
    }
    let Some(quizzes) = cache.get() else {
        return;
    };
    if quizzes.is_empty() {
        println!("no quizzes yet — try `new`");
    }
    for quiz in quizzes {
        println!("  [{}] {} ({} questions)", quiz.id, quiz.name, quiz.questions.len());
    }
}

/// The form page. Returns whether a save happened.
async fn form_page(
    api: &ApiClient,
    mode: FormMode,
    status: &mut StatusLine,
) -> Result<bool, CliError> {
    let form = match form::load(api, mode).await {
        Ok(form) => form,
        Err(error) => {
            status.set(error.to_string());
            return Ok(false);
        }
    };
    let mut draft = form.draft;
    let bank = form.bank;

    match mode {
        FormMode::Create => println!("Create a new Quiz"),
        FormMode::Edit(_) => println!("Edit {}", draft.name),
    }

    loop {
        let Some(line) = read_line("form> ")? else {
            return Ok(false);
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_form(&line) {
            Some(FormCommand::Name(name)) => {
                draft.set_name(name);
                println!("Name set.");
            }
            Some(FormCommand::Add { question, answer }) => {
                match draft.add_new(&question, &answer) {
                    Ok(_) => println!("Question added."),
                    Err(error) => println!("{error}"),
                }
            }
            Some(FormCommand::Use(id)) => match bank.iter().find(|q| q.id == id) {
                Some(question) => {
                    if draft.add_existing(question) {
                        println!("Question added.");
                    } else {
                        println!("Question {id} is already in the quiz.");
                    }
                }
                None => println!("question {id} is not in the bank"),
            },
            Some(FormCommand::Bank) => print_bank(&bank),
            Some(FormCommand::List) => print_draft(&draft),
            Some(FormCommand::Remove(row)) => {
                match draft.questions().get(row.wrapping_sub(1)).map(|q| q.id) {
                    Some(id) => {
                        draft.remove(id);
                        println!("Question removed.");
                    }
                    None => println!("no row {row}"),
                }
            }
            Some(FormCommand::Save) => {
                let payload = match draft.payload() {
                    Ok(payload) => payload,
                    Err(error) => {
                        println!("{error}");
                        continue;
                    }
                };
                let result = match mode {
                    FormMode::Create => api.create_quiz(&payload).await,
                    FormMode::Edit(id) => api.update_quiz(id, &payload).await,
                };
                match result {
                    Ok(_) => {
                        status.set(match mode {
                            FormMode::Create => "Quiz successfully created.",
                            FormMode::Edit(_) => "Quiz successfully updated.",
                        });
                        return Ok(true);
                    }
                    Err(error) => println!("{error}"),
                }
            }
            Some(FormCommand::Back) => return Ok(false),
            Some(FormCommand::Help) | None => {
                println!(
                    "commands: name <text> | add <question> :: <answer> | use <id> | bank | ls | rm <row> | save | back"
                );
            }
        }
    }
}

/// The solve page: step through questions until `back` or end of input.
pub(crate) fn solve_loop(session: &mut SolveSession) -> io::Result<()> {
    if session.is_empty() {
        println!("This quiz has no questions.");
        return Ok(());
    }
    print_question(session);
    loop {
        let Some(line) = read_line("solve> ")? else {
            return Ok(());
        };
        match parse_solve(&line) {
            Some(SolveCommand::Next) => {
                if session.next() {
                    print_question(session);
                } else {
                    println!("Already at the last question.");
                }
            }
            Some(SolveCommand::Prev) => {
                if session.prev() {
                    print_question(session);
                } else {
                    println!("Already at the first question.");
                }
            }
            Some(SolveCommand::Answer) => {
                if session.toggle_answer() {
                    println!("Answer: {}", session.visible_answer().unwrap_or_default());
                } else {
                    println!("Answer hidden.");
                }
            }
            Some(SolveCommand::Back) => return Ok(()),
            Some(SolveCommand::Help) | None => {
                println!("commands: n(ext) | p(rev) | a(nswer) | b(ack)");
            }
        }
    }
}

// =============================================================================
// RENDERING
// =============================================================================

fn print_question(session: &SolveSession) {
    if let Some(question) = session.current_question() {
        println!(
            "Question {}/{}: {}",
            session.current_index() + 1,
            session.len(),
            question.question
        );
    }
}

fn print_draft(draft: &QuizDraft) {
    println!("Quiz: {}", if draft.name.is_empty() { "(unnamed)" } else { &draft.name });
    for (row, question) in draft.questions().iter().enumerate() {
        let marker = match question.id {
            DraftId::Pending(_) => "*",
            DraftId::Persisted(_) => " ",
        };
        println!("  {}{} {} :: {}", row + 1, marker, question.question, question.answer);
    }
}

fn print_bank(bank: &[Question]) {
    if bank.is_empty() {
        println!("the question bank is empty");
    }
    for question in bank {
        println!("  [{}] {}", question.id, question.question);
    }
}

fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end().to_owned()))
}

#[cfg(test)]
#[path = "shell_test.rs"]
mod tests;
