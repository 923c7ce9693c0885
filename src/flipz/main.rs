use clap::Parser;
use colored::*;
use console::{Key, Term};
use flipz::api::{CmdMessage, FlipzApi, MessageLevel};
use flipz::error::Result;
use flipz::model::Side;
use flipz::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let store = FileStore::new(cwd);
    let mut api = FlipzApi::new(store);
    let load_messages = api.load().messages;

    match cli.command {
        Some(Commands::List) => {
            print_messages(&load_messages);
            handle_list(&api)
        }
        Some(Commands::Add { front, back }) => {
            print_messages(&load_messages);
            handle_add(&mut api, &front, &back)
        }
        Some(Commands::Study) | None => handle_study(&mut api, load_messages),
    }
}

fn handle_list(api: &FlipzApi<FileStore>) -> Result<()> {
    let result = api.labels();
    print_labels(&result.labels);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(api: &mut FlipzApi<FileStore>, front: &str, back: &str) -> Result<()> {
    let result = api.add_card(front, back);
    print_messages(&result.messages);
    Ok(())
}

// --- The interactive study loop ---

fn handle_study(api: &mut FlipzApi<FileStore>, mut pending: Vec<CmdMessage>) -> Result<()> {
    let term = Term::stdout();
    loop {
        draw(&term, api, &pending)?;
        pending.clear();

        match term.read_key()? {
            Key::Char('q') | Key::Escape => break,
            Key::Char('f') | Key::Char(' ') | Key::Enter => {
                pending.extend(api.flip().messages);
            }
            Key::Char('n') | Key::ArrowRight => {
                pending.extend(api.next().messages);
            }
            Key::Char('p') | Key::ArrowLeft => {
                pending.extend(api.prev().messages);
            }
            Key::Char('a') => {
                pending.extend(prompt_add(&term, api)?);
            }
            Key::Char('l') => {
                show_list(&term, api)?;
            }
            Key::Char(c) if c.is_ascii_digit() => {
                select_by_digit(api, c);
            }
            _ => {}
        }
    }
    term.clear_screen()?;
    Ok(())
}

fn draw(term: &Term, api: &FlipzApi<FileStore>, pending: &[CmdMessage]) -> Result<()> {
    term.clear_screen()?;

    let view = api.current();
    let session = api.session();

    term.write_line("")?;
    for line in card_frame(view.text.as_deref()) {
        term.write_line(&format!("  {}", line))?;
    }

    let status = match session.cursor() {
        Some(i) => {
            let side = if session.showing_front() {
                "front"
            } else {
                "back"
            };
            format!("card {}/{} · {}", i + 1, session.len(), side)
        }
        None => "no cards yet — press [a] to add one".to_string(),
    };
    let flip_hint = match view.reveals {
        Some(Side::Back) => "[f]lip shows the back",
        Some(Side::Front) => "[f]lip shows the front",
        None => "",
    };
    term.write_line(&format!("  {}   {}", status.dimmed(), flip_hint.dimmed()))?;
    term.write_line("")?;
    term.write_line(&format!(
        "  {}",
        "[n]ext [p]rev [1-9] select [a]dd [l]ist [q]uit".dimmed()
    ))?;

    if !pending.is_empty() {
        term.write_line("")?;
        print_messages(pending);
    }
    Ok(())
}

fn prompt_add(term: &Term, api: &mut FlipzApi<FileStore>) -> Result<Vec<CmdMessage>> {
    term.write_line("")?;

    // An empty answer at either prompt cancels the add without touching
    // the deck or the file.
    term.write_str("  Front (empty cancels): ")?;
    let front = term.read_line()?;
    if front.trim().is_empty() {
        return Ok(Vec::new());
    }

    term.write_str("  Back (empty cancels): ")?;
    let back = term.read_line()?;
    if back.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(api.add_card(&front, &back).messages)
}

fn show_list(term: &Term, api: &mut FlipzApi<FileStore>) -> Result<()> {
    term.clear_screen()?;
    term.write_line("")?;

    let labels = api.labels().labels;
    if labels.is_empty() {
        term.write_line("  No cards yet.")?;
    }
    for (i, label) in labels.iter().enumerate() {
        term.write_line(&format!("  {:>3}. {}", i + 1, label))?;
    }

    term.write_line("")?;
    term.write_line(&format!(
        "  {}",
        "press a number to jump, any other key to go back".dimmed()
    ))?;

    if let Key::Char(c) = term.read_key()? {
        if c.is_ascii_digit() {
            select_by_digit(api, c);
        }
    }
    Ok(())
}

fn select_by_digit(api: &mut FlipzApi<FileStore>, digit: char) {
    if let Some(n) = digit.to_digit(10) {
        if n >= 1 {
            // keys are 1-based, the cursor is 0-based
            api.select((n - 1) as usize);
        }
    }
}

// --- Rendering helpers ---

const CARD_WIDTH: usize = 44;

fn card_frame(text: Option<&str>) -> Vec<String> {
    let inner = CARD_WIDTH - 2;
    let shown = truncate_to_width(text.unwrap_or("(empty deck)"), inner.saturating_sub(2));

    let padding = inner.saturating_sub(shown.width());
    let left = padding / 2;
    let right = padding - left;

    vec![
        format!("┌{}┐", "─".repeat(inner)),
        format!("│{}│", " ".repeat(inner)),
        format!("│{}{}{}│", " ".repeat(left), shown, " ".repeat(right)),
        format!("│{}│", " ".repeat(inner)),
        format!("└{}┘", "─".repeat(inner)),
    ]
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn print_labels(labels: &[String]) {
    if labels.is_empty() {
        println!("No cards yet.");
        return;
    }
    for (i, label) in labels.iter().enumerate() {
        println!("{:>3}. {}", i + 1, label);
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
