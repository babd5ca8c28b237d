use std::io::{self, BufRead, Write};

use colony::Colony;

use command::Command;

mod command;

fn main() {
    println!("welcome to colony...");
    print_help();

    let mut colony = Colony::new();
    let mut input = io::stdin().lock();
    loop {
        print!("enter command: ");
        if let Err(err) = io::stdout().flush() {
            eprintln!("failed to write prompt: {err}");
            break;
        }

        let mut line = String::new();
        match input.read_line(&mut line) {
            // EOF quits like "exit" does.
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("failed to read input: {err}");
                break;
            }
        }

        match command::parse(&line) {
            Ok(None) => {}
            Ok(Some(command)) => {
                if !run(&mut colony, command) {
                    break;
                }
            }
            Err(err) => eprintln!("{err}"),
        }
    }
}

/// Execute one command. Returns false when the session should end.
fn run(colony: &mut Colony, command: Command) -> bool {
    match command {
        Command::Exit => return false,
        Command::Help => print_help(),
        Command::Start { name } => match colony.start_worker(&name) {
            Ok(id) => println!("started worker {name} ({id})"),
            Err(err) => eprintln!("{err}"),
        },
        Command::Link { first, second } => match colony.link(&first, &second) {
            Ok(()) => println!("linked {first} and {second}"),
            Err(err) => eprintln!("{err}"),
        },
        Command::Status { name } => match colony.status(&name) {
            Ok(status) => println!("{status}"),
            Err(err) => eprintln!("{err}"),
        },
        Command::State => {
            match serde_json::to_writer_pretty(io::stdout().lock(), colony) {
                Ok(()) => println!(),
                Err(err) => eprintln!("failed to write state: {err}"),
            }
        }
    }
    true
}

fn print_help() {
    println!("commands:");
    println!(" - help: list commands");
    println!(" - start <name>: begin a worker");
    println!(" - link <worker1> <worker2>: link two workers");
    println!(" - status <name>: report on one worker");
    println!(" - state: dump the whole colony as JSON");
    println!(" - exit: quit");
}
