pub mod commands;

use chrono::Utc;
use serde_json::{Map, Value};
use std::io::{self, BufRead, Write};

use crate::catalog::Catalog;
use crate::chat::{self, ChatRequest};
use crate::cli::commands::Commands;
use crate::config::AppConfig;
use crate::db::{open_store, DocumentStore, CHAT_MESSAGE_COLLECTION};

pub fn run_cli(command: Commands, config_path: String) {
    let config = match AppConfig::load(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return;
        }
    };

    match command {
        Commands::Serve => {
            eprintln!("The serve command is handled by the server entrypoint.");
        }
        Commands::Catalog => print_catalog(&Catalog::default()),
        Commands::Thread { id } => {
            let store = open_store(&config.database);
            print_thread(store.as_ref(), &id);
        }
        Commands::Chat { thread, season, username } => {
            let store = open_store(&config.database);
            run_repl(store.as_ref(), thread, season, username);
        }
    }
}

fn print_catalog(catalog: &Catalog) {
    println!("{:<40} | {:<4} | {}", "Title", "Year", "Slug");
    println!("{:-<40}-+-{:-<4}-+-{:-<20}", "", "", "");
    for b in catalog.books() {
        println!("{:<40} | {:<4} | {}", b.title, b.year, b.slug);
    }
    println!();
    for tv in catalog.tv() {
        println!("{} ({})", tv.title, tv.role);
    }
}

fn print_thread(store: &dyn DocumentStore, thread_id: &str) {
    let mut filter = Map::new();
    filter.insert("thread_id".to_string(), Value::String(thread_id.to_string()));

    match store.query(CHAT_MESSAGE_COLLECTION, &filter) {
        Ok(docs) if docs.is_empty() => println!("No messages found for thread {}.", thread_id),
        Ok(docs) => {
            for (page, doc) in docs.iter().enumerate() {
                let username = doc.body.get("username").and_then(Value::as_str).unwrap_or("?");
                let content = doc.body.get("content").and_then(Value::as_str).unwrap_or("");
                println!("[{}] {} {}: {}", page + 1, doc.created_at.format("%Y-%m-%d %H:%M"), username, content);
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn run_repl(
    store: &dyn DocumentStore,
    thread_id: Option<String>,
    season: Option<String>,
    username: Option<String>,
) {
    println!("--- The Infinite Scroll ---");
    if let Some(id) = &thread_id {
        println!("Thread: {}", id);
    }
    println!("Type /exit to quit.");
    println!("---------------------------");

    let stdin = io::stdin();
    let mut rng = rand::thread_rng();

    loop {
        print!("\nYou> ");
        let _ = io::stdout().flush();

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let text = input.trim();

        if text.is_empty() {
            continue;
        }
        if text == "/exit" || text == "/quit" {
            break;
        }

        let req = ChatRequest {
            message: text.to_string(),
            season: season.clone(),
            depth: None,
            username: username.clone(),
            thread_id: thread_id.clone(),
        };
        let response = chat::respond(store, &req, &mut rng, Utc::now());

        println!("Gary (page {})> {}", response.page_number, response.reply);
    }
}
