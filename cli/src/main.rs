//! Terminal front-end for the tasks API.
//!
//! Reads the base URL from `TASKS_API_URL` (falling back to the default
//! endpoint) and prints either the task list or the error message, the same
//! contract the original page rendered.

use std::process::ExitCode;

use tasks_core::{ApiClient, ApiError, Config, CreateTask, Transport, UreqTransport};
use uuid::Uuid;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_env();
    println!("API: {}", config.base_url);
    let client = ApiClient::new(config, UreqTransport::new());

    let result = match args.split_first() {
        Some((cmd, rest)) if cmd == "list" && rest.is_empty() => list(&client),
        Some((cmd, rest)) if cmd == "add" && !rest.is_empty() => add(&client, rest),
        Some((cmd, [id])) if cmd == "remove" => match id.parse::<Uuid>() {
            Ok(id) => remove(&client, id),
            Err(_) => {
                eprintln!("invalid task id: {id}");
                return ExitCode::from(2);
            }
        },
        _ => {
            eprintln!("usage: tasks <list | add TITLE [DESCRIPTION] | remove ID>");
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn list<T: Transport>(client: &ApiClient<T>) -> Result<(), ApiError> {
    let tasks = client.list_tasks()?;
    if tasks.is_empty() {
        println!("no tasks");
        return Ok(());
    }
    for task in tasks {
        if task.description.is_empty() {
            println!("{}  {}", task.id, task.title);
        } else {
            println!("{}  {} ({})", task.id, task.title, task.description);
        }
    }
    Ok(())
}

fn add<T: Transport>(client: &ApiClient<T>, args: &[String]) -> Result<(), ApiError> {
    let input = CreateTask {
        title: args[0].clone(),
        description: args.get(1).cloned().unwrap_or_default(),
    };
    let task = client.create_task(&input)?;
    println!("created {}", task.id);
    Ok(())
}

fn remove<T: Transport>(client: &ApiClient<T>, id: Uuid) -> Result<(), ApiError> {
    client.delete_task(id)?;
    println!("removed {id}");
    Ok(())
}
