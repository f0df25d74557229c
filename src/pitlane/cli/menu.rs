//! The interactive menu.
//!
//! Every action goes through the same API calls as the one-shot subcommands.
//! Errors are shown and the loop continues; end of input behaves like
//! "Save and exit".

use super::commands::{ask_delete, handle_list, handle_search, handle_standings};
use super::render::print_messages;
use colored::Colorize;
use console::Term;
use pitlane::api::{CmdMessage, PitlaneApi};
use pitlane::error::{PitlaneError, Result};
use pitlane::model::{Driver, RawFieldError};
use pitlane::schema::{EditableField, Field, Value};
use pitlane::store::DataStore;
use std::io::{self, BufRead, Write};

const OPTIONS: [&str; 7] = [
    "Show all drivers",
    "Add driver",
    "Search driver",
    "Driver standings",
    "Edit driver",
    "Delete driver",
    "Save and exit",
];

pub fn run<S: DataStore>(api: &mut PitlaneApi<S>) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_with(api, &mut input)?;

    let term = Term::stdout();
    if term.is_term() {
        term.clear_screen()?;
    }
    let result = api.save_now()?;
    print_messages(&result.messages);
    println!("Program closed!");
    Ok(())
}

/// The menu loop without the exit step, so it can run on any input.
fn run_with<S: DataStore, R: BufRead>(api: &mut PitlaneApi<S>, input: &mut R) -> Result<()> {
    loop {
        print_menu();
        let Some(choice) = prompt(input, "Select an option: ")? else {
            return Ok(());
        };
        let outcome = match choice.as_str() {
            "1" => handle_list(api),
            "2" => add(api, input),
            "3" => search(api, input),
            "4" => standings(api, input),
            "5" => edit(api, input),
            "6" => delete(api, input),
            "7" => return Ok(()),
            _ => {
                println!("{}", "Invalid choice. Please select a valid option.".yellow());
                Ok(())
            }
        };
        if let Err(e) = outcome {
            match e {
                PitlaneError::Io(_) => return Err(e),
                _ => print_messages(&[CmdMessage::error(format!("Error: {}", e))]),
            }
        }
    }
}

fn print_menu() {
    println!();
    println!("{}", "F1 DRIVERS".bold());
    for (i, option) in OPTIONS.iter().enumerate() {
        println!("{}. {}", i + 1, option);
    }
}

/// One trimmed line of input, or `None` at end of input.
fn prompt<R: BufRead>(input: &mut R, label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_number<R: BufRead>(input: &mut R) -> Result<Option<i64>> {
    let Some(raw) = prompt(input, "Racing number: ")? else {
        return Ok(None);
    };
    match Field::Number.parse(&raw)? {
        Value::Integer(n) => Ok(Some(n)),
        _ => Ok(None),
    }
}

fn add<S: DataStore, R: BufRead>(api: &mut PitlaneApi<S>, input: &mut R) -> Result<()> {
    let mut answers: Vec<(Field, String)> = Vec::with_capacity(Field::ALL.len());
    for field in Field::ALL {
        let Some(answer) = prompt(input, &format!("{}: ", field))? else {
            return Ok(());
        };
        answers.push((field, answer));
    }

    let driver = Driver::from_raw(|field| {
        answers
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    });
    match driver {
        Ok(driver) => {
            let result = api.add_driver(driver)?;
            print_messages(&result.messages);
        }
        Err(err @ RawFieldError::Unparsable { .. }) => print_messages(&[CmdMessage::error(
            format!("ERROR: {}. Please enter numbers for Age, Points, etc.", err),
        )]),
        Err(err) => print_messages(&[CmdMessage::error(format!("ERROR: {}", err))]),
    }
    Ok(())
}

fn search<S: DataStore, R: BufRead>(api: &PitlaneApi<S>, input: &mut R) -> Result<()> {
    match prompt(input, "Search by name or team: ")? {
        Some(term) => handle_search(api, &term),
        None => Ok(()),
    }
}

fn standings<S: DataStore, R: BufRead>(api: &PitlaneApi<S>, input: &mut R) -> Result<()> {
    let label = format!("How many drivers? [{}]: ", api.standings_size());
    let Some(raw) = prompt(input, &label)? else {
        return Ok(());
    };
    let top = if raw.is_empty() {
        None
    } else {
        Some(raw.parse::<usize>().map_err(|_| PitlaneError::InvalidValue {
            field: "standings size",
            value: raw.clone(),
        })?)
    };
    handle_standings(api, top)
}

fn edit<S: DataStore, R: BufRead>(api: &mut PitlaneApi<S>, input: &mut R) -> Result<()> {
    let Some(number) = prompt_number(input)? else {
        return Ok(());
    };
    let driver = api
        .find_driver(number)
        .ok_or(PitlaneError::NotFound(number))?;

    println!("Editing #{} {}", driver.number, driver.name);
    for (i, field) in EditableField::ALL.iter().enumerate() {
        println!(
            "{}. {} ({})",
            i + 1,
            field,
            driver.value(field.field()).to_string().dimmed()
        );
    }

    let Some(selector) = prompt(input, "Field to change: ")? else {
        return Ok(());
    };
    let Some(value) = prompt(input, "New value: ")? else {
        return Ok(());
    };
    let result = api.edit_driver(number, &selector, &value)?;
    print_messages(&result.messages);
    Ok(())
}

fn delete<S: DataStore, R: BufRead>(api: &mut PitlaneApi<S>, input: &mut R) -> Result<()> {
    let Some(number) = prompt_number(input)? else {
        return Ok(());
    };
    let mut confirm = |driver: &Driver| ask_delete(&mut *input, driver);
    let result = api.delete_driver(number, &mut confirm)?;
    print_messages(&result.messages);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitlane::config::PitlaneConfig;
    use pitlane::store::memory::InMemoryStore;
    use std::io::Cursor;

    fn api() -> PitlaneApi<InMemoryStore> {
        PitlaneApi::open(InMemoryStore::new(), PitlaneConfig::default())
            .unwrap()
            .0
    }

    fn feed(api: &mut PitlaneApi<InMemoryStore>, script: &str) {
        colored::control::set_override(false);
        let mut input = Cursor::new(script.to_string());
        run_with(api, &mut input).unwrap();
    }

    const ADD_HAMILTON: &str =
        "2\n44\nLewis Hamilton\nFerrari\n40\nBritish\n200\n350\n7\n5000.0\n120.0\n";

    #[test]
    fn adds_a_driver_from_prompts() {
        let mut api = api();
        feed(&mut api, &format!("{ADD_HAMILTON}7\n"));

        let driver = api.find_driver(44).unwrap();
        assert_eq!(driver.team, "Ferrari");
        assert_eq!(driver.career_points, 5000.0);
    }

    #[test]
    fn bad_number_during_add_adds_nothing() {
        let mut api = api();
        feed(
            &mut api,
            "2\n44\nLewis Hamilton\nFerrari\nforty\nBritish\n200\n350\n7\n5000\n120\n7\n",
        );
        assert!(api.roster().is_empty());
    }

    #[test]
    fn errors_keep_the_loop_running() {
        let mut api = api();
        feed(&mut api, &format!("{ADD_HAMILTON}{ADD_HAMILTON}9\n5\n99\n3\nham\n"));
        assert_eq!(api.roster().len(), 1);
    }

    #[test]
    fn edit_by_menu_number() {
        let mut api = api();
        feed(&mut api, &format!("{ADD_HAMILTON}5\n44\n3\n41\n7\n"));
        assert_eq!(api.find_driver(44).unwrap().age, 41);
    }

    #[test]
    fn delete_needs_explicit_yes() {
        let mut api = api();
        feed(&mut api, &format!("{ADD_HAMILTON}6\n44\nmaybe\n"));
        assert!(api.find_driver(44).is_some());

        feed(&mut api, "6\n44\nYes\n7\n");
        assert!(api.find_driver(44).is_none());
    }

    #[test]
    fn end_of_input_mid_prompt_ends_the_loop() {
        let mut api = api();
        feed(&mut api, "2\n44\nLewis");
        assert!(api.roster().is_empty());
    }
}
