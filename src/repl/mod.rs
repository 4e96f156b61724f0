pub mod commands;
pub mod prompt;

pub use commands::{Flow, MenuCommand};
pub use prompt::Prompter;

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use crate::storage::{Inventory, LoadSummary, PersistError};
use commands::MENU;

/// Starts an inventory menu session on the terminal
pub fn start_repl(path: PathBuf) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    run_session(path, Prompter::new(stdin.lock(), stdout.lock()))
}

/// Loads the inventory at `path` and serves menu choices until the operator
/// exits or the input runs out.
pub fn run_session<R: BufRead, W: Write>(
    path: PathBuf,
    mut prompter: Prompter<R, W>,
) -> io::Result<()> {
    let (mut inventory, status) = Inventory::open(path);
    report_load(&mut prompter, &inventory, status)?;

    loop {
        prompter.say(MENU)?;
        let Some(choice) = prompter.ask("Select option: ")? else {
            break;
        };

        match MenuCommand::try_from(choice.as_str()) {
            Ok(command) => {
                if command.execute(&mut inventory, &mut prompter)? == Flow::Exit {
                    break;
                }
            }
            Err(err) => prompter.say(format!("error: {err}"))?,
        }
    }

    Ok(())
}

fn report_load<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    inventory: &Inventory,
    status: Result<LoadSummary, PersistError>,
) -> io::Result<()> {
    let summary = match status {
        Ok(summary) => summary,
        Err(err) => return prompter.say(format!("error: {err}")),
    };

    if summary.created {
        return prompter.say(format!(
            "Inventory file created: {}",
            inventory.path().display()
        ));
    }

    for skipped in &summary.skipped {
        prompter.say(format!(
            "warning: skipped corrupt line {} `{}`: {}",
            skipped.number, skipped.content, skipped.reason
        ))?;
    }
    prompter.say(format!("Inventory loaded: {} products.", summary.loaded))
}
