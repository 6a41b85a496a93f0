use std::io::{BufRead, Write};

use strum::IntoEnumIterator;

use crate::api::Field;
use crate::cli::Command;
use crate::context::AppContext;
use crate::form;
use crate::prompt::{AssumeYes, Prompt, Terminal};
use crate::view::{FormInputs, RosterView};

const HELP: &str = r#"Available commands:
 - l | list: show the roster.
 - a | add: fill in a new monitor field by field and submit it.
 - d | del <#>: delete the monitor in row <#> of the list.
 - h | help: show this help message.
 - q | quit: leave."#;

/// Runs the command picked on the command line. `false` when a one-shot
/// command was refused or found nothing to act on.
pub fn dispatch<R: BufRead, W: Write>(
    ctx: &AppContext,
    command: Command,
    terminal: &mut Terminal<R, W>,
) -> anyhow::Result<bool> {
    match command {
        Command::Shell => {
            run(ctx, terminal)?;
            Ok(true)
        }
        Command::List => {
            let mut view = RosterView::new();
            view.load(ctx.remote.list_records());
            terminal.say(&view.render())?;
            Ok(true)
        }
        Command::Add {
            name,
            email,
            skill,
            day,
            hour,
        } => {
            let inputs = FormInputs {
                name,
                email,
                skill,
                day,
                hour,
            };
            Ok(add_record(ctx, inputs, terminal))
        }
        Command::Delete { email, yes } => Ok(if yes {
            delete_by_email(ctx, &email, &mut AssumeYes(terminal))
        } else {
            delete_by_email(ctx, &email, terminal)
        }),
    }
}

pub fn add_record(ctx: &AppContext, inputs: FormInputs, prompt: &mut dyn Prompt) -> bool {
    let mut view = RosterView::new();
    view.inputs = inputs;
    form::submit_new_record(&mut view, prompt, &ctx.remote).is_ok()
}

/// Lists first, then deletes through the matching row like a click would.
pub fn delete_by_email(ctx: &AppContext, email: &str, prompt: &mut dyn Prompt) -> bool {
    let mut view = RosterView::new();
    view.load(ctx.remote.list_records());

    match view.row_with_email(email) {
        Some(row) => view.click_delete(row, prompt, &ctx.remote),
        None => {
            prompt.alert(&format!("No monitor with email {email}"));
            false
        }
    }
}

/// Interactive session: loads the roster once, then runs commands until
/// `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    ctx: &AppContext,
    terminal: &mut Terminal<R, W>,
) -> anyhow::Result<()> {
    let mut view = RosterView::new();
    view.load(ctx.remote.list_records());

    terminal.say(&format!("Monitor roster at {}", ctx.config.api.base_url.0))?;
    terminal.say(&view.render())?;

    while let Some(line) = terminal.read_line("> ")? {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };

        match command {
            "l" | "list" => terminal.say(&view.render())?,
            "a" | "add" => {
                for field in Field::iter() {
                    let Some(value) = terminal.read_line(&format!("{field}: "))? else {
                        return Ok(());
                    };
                    view.inputs.set(field, value.trim());
                }
                if form::submit_new_record(&mut view, terminal, &ctx.remote).is_ok() {
                    terminal.say(&view.render())?;
                }
            }
            "d" | "del" => {
                let row = words
                    .next()
                    .and_then(|position| position.parse::<usize>().ok())
                    .and_then(|position| view.row_at(position));

                match row {
                    Some(row) => {
                        if view.click_delete(row, terminal, &ctx.remote) {
                            terminal.say(&view.render())?;
                        }
                    }
                    None => terminal.say("Expected the # of a row in the list")?,
                }
            }
            "h" | "help" => terminal.say(HELP)?,
            "q" | "quit" => break,
            _ => {
                terminal.say(&format!("Error: unrecognized command {command}\n"))?;
                terminal.say(HELP)?;
            }
        }
    }

    Ok(())
}
