//! Interactive CLI for the todo list client.
//!
//! Hydrates the list from the remote fixture once on startup, then reads
//! commands from stdin. Every command dispatches an action to the store,
//! waits for its network effect to settle, and re-renders from state.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use todo_sync_app::{TodoAction, TodosEnvironment, TodosReducer, TodosState};
use todo_sync_client::TodoClient;
use todo_sync_core::TodoId;
use todo_sync_runtime::Store;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

type TodoStore = Store<TodosState, TodoAction, TodosEnvironment, TodosReducer>;

/// How long a dispatched command waits for its network effect before the
/// prompt comes back anyway. There is no cancellation; a late response still
/// applies when it arrives.
const SYNC_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let env = TodosEnvironment::new(Arc::new(TodoClient::from_env()));
    let store = Store::new(TodosState::new(), TodosReducer::new(), env);

    // Hydrate exactly once on startup.
    dispatch(&store, TodoAction::FetchRequested).await?;
    render(&store).await;
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        let (command, rest) = match input.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "" => {}
            "quit" | "exit" | "q" => break,
            "list" | "ls" => render(&store).await,
            "help" => print_help(),
            "add" => {
                // Whitespace-only drafts are discarded without a request.
                if rest.trim().is_empty() {
                    continue;
                }
                dispatch(&store, TodoAction::AddRequested {
                    title: rest.to_string(),
                })
                .await?;
                render(&store).await;
            }
            "toggle" => match resolve_row(&store, rest).await {
                Some(id) => {
                    dispatch(&store, TodoAction::ToggleRequested { id }).await?;
                    render(&store).await;
                }
                None => println!("no such row: {rest}"),
            },
            "delete" | "rm" => match resolve_row(&store, rest).await {
                Some(id) => {
                    dispatch(&store, TodoAction::DeleteRequested { id }).await?;
                    render(&store).await;
                }
                None => println!("no such row: {rest}"),
            },
            other => println!("unknown command: {other} (try 'help')"),
        }
    }

    if store.shutdown(Duration::from_secs(5)).await.is_err() {
        tracing::warn!("Exiting with effects still in flight");
    }
    Ok(())
}

/// Send an action and wait for its effects to settle
async fn dispatch(store: &TodoStore, action: TodoAction) -> anyhow::Result<()> {
    let mut handle = store.send(action).await?;
    if handle.wait_with_timeout(SYNC_TIMEOUT).await.is_err() {
        println!("still waiting for the server...");
    }
    Ok(())
}

/// Map a 1-based row number to the record id at that position
async fn resolve_row(store: &TodoStore, raw: &str) -> Option<TodoId> {
    let row: usize = raw.parse().ok()?;
    store
        .state(|state| state.list.get(row.checked_sub(1)?).map(|todo| todo.id.clone()))
        .await
}

/// Render the current list, loading indicator, and error message
async fn render(store: &TodoStore) {
    let state = store.state(Clone::clone).await;

    if state.loading {
        println!("Loading...");
    }
    if let Some(error) = &state.error {
        println!("! {error}");
    }

    if state.is_empty() {
        println!("(no todos)");
        return;
    }
    for (row, todo) in state.list.iter().enumerate() {
        let mark = if todo.completed { "x" } else { " " };
        println!("{:>3}. [{mark}] {} (#{})", row + 1, todo.title, todo.id);
    }
    println!("{}/{} completed", state.completed_count(), state.len());
}

fn print_help() {
    println!("commands: add <title> | toggle <n> | delete <n> | list | help | quit");
}
