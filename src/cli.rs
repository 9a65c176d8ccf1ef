use std::env;
use std::fs;

use crate::ingest;
use crate::planner::{plan_engagement, LaneValues};
use crate::roster::validate::validate_roster;
use crate::roster::{parse_power_text, total_power};
use crate::server;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Plan,
    Convert,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("plan") => Some(Command::Plan),
        Some("convert") => Some(Command::Convert),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Plan) => handle_plan(args),
        Some(Command::Convert) => handle_convert(args),
        Some(Command::Validate) => handle_validate(args),
        None => {
            eprintln!("usage: trilane <serve|plan|convert|validate>");
            2
        }
    }
}

fn handle_serve() -> i32 {
    let bind_addr = env::var("TRILANE_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    match server::run_server(&bind_addr) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_plan(args: &[String]) -> i32 {
    let mut positional: Vec<&String> = Vec::new();
    let mut out_path: Option<&String> = None;
    let mut index = 2;
    while index < args.len() {
        if args[index] == "--out" {
            match args.get(index + 1) {
                Some(path) => {
                    out_path = Some(path);
                    index += 2;
                }
                None => {
                    eprintln!("--out requires a file path");
                    return 2;
                }
            }
        } else {
            positional.push(&args[index]);
            index += 1;
        }
    }

    if positional.len() < 4 {
        eprintln!(
            "usage: trilane plan <home> <enemy-left> <enemy-center> <enemy-right> \
             [adv-left adv-center adv-right] [--out <file>]"
        );
        return 2;
    }

    let mut texts: Vec<String> = Vec::with_capacity(4);
    for path in &positional[..4] {
        match fs::read_to_string(path) {
            Ok(text) => texts.push(text),
            Err(err) => {
                eprintln!("failed to read '{path}': {err}");
                return 1;
            }
        }
    }

    let advantages = LaneValues::new(
        parse_i64_arg(positional.get(4).map(|s| s.as_str()), "adv-left", 0),
        parse_i64_arg(positional.get(5).map(|s| s.as_str()), "adv-center", 0),
        parse_i64_arg(positional.get(6).map(|s| s.as_str()), "adv-right", 0),
    );

    let home = parse_power_text(&texts[0]);
    let enemy_totals = LaneValues::new(
        total_power(&parse_power_text(&texts[1])),
        total_power(&parse_power_text(&texts[2])),
        total_power(&parse_power_text(&texts[3])),
    );

    let report = plan_engagement(&home, enemy_totals, advantages);
    match serde_json::to_string_pretty(&report) {
        Ok(payload) => println!("{payload}"),
        Err(err) => {
            eprintln!("failed to serialize plan report: {err}");
            return 1;
        }
    }

    if let Some(path) = out_path {
        let envelope = serde_json::json!({
            "generated_at": chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            "report": report,
        });
        let serialized = match serde_json::to_string_pretty(&envelope) {
            Ok(serialized) => serialized,
            Err(err) => {
                eprintln!("failed to serialize plan report: {err}");
                return 1;
            }
        };
        if let Err(err) = fs::write(path, serialized) {
            eprintln!("failed to write '{path}': {err}");
            return 1;
        }
        println!("wrote report to {path}");
    }

    0
}

fn handle_convert(args: &[String]) -> i32 {
    let Some(path) = args.get(2) else {
        eprintln!("usage: trilane convert <roster.xlsx|roster.csv>");
        return 2;
    };

    match ingest::convert_file(std::path::Path::new(path)) {
        Ok(power_text) => {
            println!("{power_text}");
            0
        }
        Err(err) => {
            eprintln!("convert failed: {err}");
            1
        }
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let Some(path) = args.get(2) else {
        eprintln!("usage: trilane validate <home-roster.txt>");
        return 2;
    };

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("failed to read '{path}': {err}");
            return 1;
        }
    };

    let teams = parse_power_text(&text);
    let report = validate_roster(&teams);
    for diagnostic in &report.diagnostics {
        eprintln!("- {diagnostic}");
    }

    if report.has_errors() {
        eprintln!("validation failed: {path}");
        1
    } else {
        println!("validation passed: {path} ({} teams)", teams.len());
        0
    }
}

fn parse_i64_arg(raw: Option<&str>, name: &str, default: i64) -> i64 {
    raw.and_then(|value| value.parse::<i64>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}
