/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use rpassword::read_password;
use std::io::{self, Write};
use std::process::exit;

fn prompt(text: &str) {
    print!("{}", text);

    if let Err(e) = io::stdout().flush() {
        eprintln!("{}", e);
        exit(1);
    }
}

fn read_line(what: &str) -> String {
    let mut inp = String::new();

    if let Err(e) = io::stdin().read_line(&mut inp) {
        eprintln!("Failed to read {}: {}", what, e);
        exit(1);
    }

    inp.trim().to_string()
}

pub fn ask_for_password(label: &str) -> String {
    prompt(&format!("{}: ", label));

    let inp = read_password().unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", label, e);
        exit(1);
    });

    if inp.is_empty() {
        eprintln!("{} cannot be empty.", label);
        exit(1);
    }

    inp
}

pub fn ask_for_input(label: &str) -> String {
    prompt(&format!("{}: ", label));
    let inp = read_line(label);

    if inp.is_empty() {
        eprintln!("{} cannot be empty.", label);
        exit(1);
    }

    inp
}

/// Like [`ask_for_input`] but an empty answer keeps `default`.
pub fn ask_with_default(label: &str, default: &str) -> String {
    if default.is_empty() {
        prompt(&format!("{}: ", label));
    } else {
        prompt(&format!("{} [{}]: ", label, default));
    }

    let inp = read_line(label);

    if inp.is_empty() {
        default.to_string()
    } else {
        inp
    }
}

pub fn ask_for_choice(label: &str, count: usize) -> usize {
    loop {
        let inp = ask_for_input(label);

        match inp.parse::<usize>() {
            Ok(choice) if (1..=count).contains(&choice) => return choice - 1,
            _ => eprintln!("Please enter a number between 1 and {}.", count),
        }
    }
}

pub fn confirm(question: &str) -> bool {
    prompt(&format!("{} [y/N]: ", question));
    matches!(read_line("answer").to_lowercase().as_str(), "y" | "yes")
}

pub fn or_ask(value: Option<String>, label: &str) -> String {
    value.unwrap_or_else(|| ask_for_input(label))
}
