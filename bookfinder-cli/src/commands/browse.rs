//! Browse command implementation

use super::catalog;
use crate::render;
use anyhow::Result;
use bookfinder_core::{Config, Session, Tab, Update};
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Type a title to search. Commands:
  :go <title>    search immediately
  :open <n>      show details for result n
  :close         close the details
  :fav <n>       toggle favorite for result n
  :tab <name>    switch to 'search' or 'favorites'
  :help          show this help
  :quit          exit";

/// One parsed input line
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Query(String),
    Submit(String),
    Open(usize),
    Close,
    Favorite(usize),
    SwitchTab(Tab),
    Help,
    Quit,
}

fn parse_action(line: &str) -> Result<Action, String> {
    let Some(command) = line.strip_prefix(':') else {
        return Ok(Action::Query(line.to_string()));
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command.trim(), ""),
    };
    let index = || -> Result<usize, String> {
        match arg.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n - 1),
            _ => Err(format!("'{}' is not a result number", arg)),
        }
    };

    match name {
        "go" => Ok(Action::Submit(arg.to_string())),
        "open" => index().map(Action::Open),
        "close" => Ok(Action::Close),
        "fav" => index().map(Action::Favorite),
        "tab" => arg.parse().map(Action::SwitchTab),
        "help" => Ok(Action::Help),
        "quit" | "q" => Ok(Action::Quit),
        other => Err(format!("unknown command ':{}' (try :help)", other)),
    }
}

/// Key of the n-th book on the active tab
fn key_at(session: &Session, index: usize) -> Option<String> {
    session.visible().get(index).map(|book| book.key.clone())
}

/// Apply an action. Returns `false` when the session should end.
fn apply(session: &mut Session, action: Action) -> bool {
    match action {
        Action::Query(text) => session.set_query(text),
        Action::Submit(text) => session.submit(text),
        Action::Open(index) => match key_at(session, index) {
            Some(key) => session.open_detail(&key),
            None => println!("No result number {}", index + 1),
        },
        Action::Close => session.close_detail(),
        Action::Favorite(index) => match key_at(session, index) {
            Some(key) => {
                session.toggle_favorite(&key);
            }
            None => println!("No result number {}", index + 1),
        },
        Action::SwitchTab(tab) => session.set_tab(tab),
        Action::Help => println!("{}", HELP),
        Action::Quit => return false,
    }
    true
}

enum Input {
    Line(Option<String>),
    Update(Option<Update>),
}

/// Run an interactive session over stdin
pub async fn browse(config: &Config) -> Result<()> {
    let mut session = Session::new(catalog(config)?, config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP);

    loop {
        let busy = !session.is_idle();
        let input = tokio::select! {
            line = lines.next_line() => Input::Line(line?),
            update = session.step(), if busy => Input::Update(update),
        };

        match input {
            Input::Line(None) => {
                // End of input: let pending work finish before exiting
                session.settle().await;
                render::print_session(&session);
                break;
            }
            Input::Line(Some(line)) => match parse_action(line.trim_end()) {
                Ok(action) => {
                    // Non-blank queries redraw once the debounced search is issued
                    let deferred = matches!(&action, Action::Query(text) if !text.trim().is_empty());
                    if !apply(&mut session, action) {
                        break;
                    }
                    if !deferred {
                        render::print_session(&session);
                    }
                }
                Err(message) => println!("{}", message),
            },
            Input::Update(Some(Update::SearchIssued(_))) => render::print_session(&session),
            Input::Update(Some(
                Update::SearchCompleted { applied: true }
                | Update::DetailCompleted { applied: true },
            )) => render::print_session(&session),
            Input::Update(_) => {}
        }
    }

    session.shutdown();
    Ok(())
}
