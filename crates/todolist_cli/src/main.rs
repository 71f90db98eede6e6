//! Line-oriented presentation driver for `todolist_core`.
//!
//! # Responsibility
//! - Turn stdin commands into list intents.
//! - Render the cached list after every change.
//! - Report store errors without exiting; stop quietly once stdout is gone.

use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use todolist_core::db::open_db;
use todolist_core::{
    init_logging, AppConfig, Intent, ListManager, ListOutcome, SqliteTodoRepository, Todo,
    TodoFilter, TodoRepository, TodoSort,
};

const HELP: &str = "commands:
  add <text>                  add a to-do
  toggle <n>                  flip completion of row n
  delete <n>                  delete row n
  filter all|incomplete       change which rows are shown
  sort completion|title       change row order
  list                        print the list
  help                        show this help
  quit                        exit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    List(ListCommand),
    Help,
    Quit,
}

/// Commands that act on the list and map onto an [`Intent`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum ListCommand {
    Add(String),
    Toggle(usize),
    Delete(usize),
    Filter(TodoFilter),
    Sort(TodoSort),
    Show,
}

fn main() -> ExitCode {
    let mut config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(path) = std::env::args().nth(1) {
        config.db_path = path.into();
    }

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let conn = match open_db(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("cannot open `{}`: {err}", config.db_path.display());
            return ExitCode::FAILURE;
        }
    };
    let repo = match SqliteTodoRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("store not usable: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        "event=cli_start module=cli status=ok version={}",
        todolist_core::core_version()
    );

    let mut list = ListManager::detached(repo, Default::default());
    if let Err(err) = list.refresh() {
        eprintln!("could not load to-dos: {err}");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match repl(&mut list, stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            info!("event=cli_stop module=cli status=ok reason=broken_pipe");
            ExitCode::SUCCESS
        }
        Err(err) => {
            warn!("event=cli_stop module=cli status=error error={err}");
            eprintln!("terminal error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Reads commands until `quit`, end of input, or the first I/O error.
fn repl<R, I, O>(list: &mut ListManager<R>, input: I, out: &mut O) -> io::Result<()>
where
    R: TodoRepository,
    I: BufRead,
    O: Write,
{
    render(out, list)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(out, "{HELP}")?,
            Ok(Command::List(command)) => run(out, list, command)?,
            Err(message) => writeln!(out, "{message}")?,
        }
        out.flush()?;
    }
    Ok(())
}

fn run<R: TodoRepository>(
    out: &mut impl Write,
    list: &mut ListManager<R>,
    command: ListCommand,
) -> io::Result<()> {
    let intent = match to_intent(list, command) {
        Ok(intent) => intent,
        Err(message) => return writeln!(out, "{message}"),
    };

    match list.handle(intent) {
        Ok(ListOutcome::Ignored) => writeln!(out, "nothing to add"),
        Ok(_) => {
            render(out, list)?;
            if list.is_stale() {
                writeln!(out, "warning: saved, but the list is out of date; type `list`")?;
            }
            Ok(())
        }
        Err(err) => writeln!(out, "error: {err}"),
    }
}

fn to_intent<R: TodoRepository>(
    list: &ListManager<R>,
    command: ListCommand,
) -> Result<Intent, String> {
    let row_id = |row: usize| {
        row.checked_sub(1)
            .and_then(|index| list.todo_at(index))
            .map(|todo| todo.id)
            .ok_or_else(|| format!("no row {row}"))
    };

    match command {
        ListCommand::Add(text) => Ok(Intent::AddRequested(text)),
        ListCommand::Toggle(row) => row_id(row).map(Intent::RowSelected),
        ListCommand::Delete(row) => row_id(row).map(Intent::RowDeleted),
        ListCommand::Filter(filter) => Ok(Intent::FilterChanged(filter)),
        ListCommand::Sort(sort) => Ok(Intent::SortChanged(sort)),
        ListCommand::Show => Ok(Intent::Refresh),
    }
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let row = |value: &str| {
        value
            .parse::<usize>()
            .map_err(|_| format!("expected a row number, got `{value}`"))
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" => ListCommand::Add(rest.to_string()),
        "toggle" | "t" => ListCommand::Toggle(row(rest)?),
        "delete" | "rm" => ListCommand::Delete(row(rest)?),
        "filter" => ListCommand::Filter(rest.parse::<TodoFilter>().map_err(|err| err.to_string())?),
        "sort" => ListCommand::Sort(rest.parse::<TodoSort>().map_err(|err| err.to_string())?),
        "list" | "ls" => ListCommand::Show,
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        other => return Err(format!("unknown command `{other}`; type `help`")),
    };
    Ok(Command::List(command))
}

fn render<R: TodoRepository>(out: &mut impl Write, list: &ListManager<R>) -> io::Result<()> {
    let view = list.view();
    writeln!(
        out,
        "-- to-do list (filter={}, sort={}) --",
        view.filter.as_str(),
        view.sort.as_str()
    )?;
    if list.is_empty() {
        writeln!(out, "   (empty)")?;
    }
    for (index, todo) in list.items().iter().enumerate() {
        writeln!(out, "{}", format_row(index + 1, todo))?;
    }
    Ok(())
}

fn format_row(row: usize, todo: &Todo) -> String {
    let mark = if todo.completed { 'x' } else { ' ' };
    format!("{row:>3}. [{mark}] {}", todo.title)
}
