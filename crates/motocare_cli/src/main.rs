//! Interactive console probe for `motocare_core`.
//!
//! # Responsibility
//! - Provide a minimal executable to exercise the assistant and the fuel
//!   engine against a local SQLite store.
//! - Keep output deterministic for quick local sanity checks.

use motocare_core::store::{keys, KvJournal, SqliteKeyValueStore};
use motocare_core::{default_log_level, init_logging, Assistant, FuelService};
use std::io::{BufRead, Write};

fn main() {
    if let Ok(log_dir) = std::env::var("MOTOCARE_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let db_path = std::env::var("MOTOCARE_DB").unwrap_or_else(|_| "motocare.db".to_string());
    let connection = match motocare_core::open_store(&db_path) {
        Ok(connection) => connection,
        Err(err) => {
            eprintln!("cannot open store at `{db_path}`: {err}");
            std::process::exit(1);
        }
    };
    let store = SqliteKeyValueStore::new(&connection);

    println!("motocare_core version={}", motocare_core::core_version());
    println!("Escribe tu pregunta, \"/fuel <comando>\" para combustible, o \"salir\".");

    let mut assistant = Assistant::new(&store);
    let fuel = FuelService::load(&store, KvJournal::new(&store, keys::JOURNAL_EMERGENCY));

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("> ");
        if stdout.flush().is_err() {
            break;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("salir") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        let answer = match line.strip_prefix("/fuel") {
            Some(rest) => fuel.handle(rest.trim()),
            None => assistant.answer(line),
        };
        println!("{answer}");
    }
}
