use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use termfolio::console::commands::{COMMANDS, CommandAction, not_found};
use termfolio::console::{CommandInterpreter, Submission};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_line(interp: &mut CommandInterpreter, text: &str) {
    for ch in text.chars() {
        interp.handle_key(key(KeyCode::Char(ch)));
    }
}

#[test]
fn every_static_command_prints_its_lines() {
    for (name, action) in COMMANDS {
        let CommandAction::Static(lines) = action else {
            continue;
        };
        let mut interp = CommandInterpreter::new();
        assert_eq!(interp.submit(name), Submission::Appended, "{name}");
        let entry = interp.transcript().last().unwrap();
        assert_eq!(entry.input, *name);
        let expected: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(entry.output, expected, "{name}");
    }
}

#[test]
fn unknown_commands_report_not_found() {
    for input in ["sudo rm -rf /", "cat missing.txt", "helpme", "LS -la"] {
        let mut interp = CommandInterpreter::new();
        interp.submit(input);
        let key = input.trim().to_lowercase();
        let entry = interp.transcript().last().unwrap();
        assert_eq!(entry.output, not_found(&key));
        assert_eq!(entry.output[0], format!("Command not found: {key}"));
    }
}

#[test]
fn clear_empties_transcript_but_keeps_recall() {
    let mut interp = CommandInterpreter::new();
    interp.submit("help");
    interp.submit("ls");
    assert_eq!(interp.submit("clear"), Submission::Cleared);
    assert!(interp.transcript().is_empty());
    assert_eq!(interp.recall().entries(), ["help", "ls"]);
}

#[test]
fn achievements_counts_prior_commands() {
    let mut interp = CommandInterpreter::new();
    interp.submit("cat about.txt");
    interp.submit("nope");
    interp.submit("cat secret.txt");
    interp.submit("achievements");
    let output = &interp.transcript().last().unwrap().output;
    assert!(output.contains(&"Total Commands Executed: 3".to_string()));
    assert!(output.contains(&"Files Explored: 2".to_string()));
}

#[test]
fn recall_walks_back_and_forward_through_keys() {
    let mut interp = CommandInterpreter::new();
    for cmd in ["help", "ls", "skills"] {
        type_line(&mut interp, cmd);
        interp.handle_key(key(KeyCode::Enter));
    }
    assert_eq!(interp.line().value(), "");

    interp.handle_key(key(KeyCode::Up));
    assert_eq!(interp.line().value(), "skills");
    interp.handle_key(key(KeyCode::Up));
    interp.handle_key(key(KeyCode::Up));
    interp.handle_key(key(KeyCode::Up));
    assert_eq!(interp.line().value(), "help");

    interp.handle_key(key(KeyCode::Down));
    assert_eq!(interp.line().value(), "ls");
    interp.handle_key(key(KeyCode::Down));
    interp.handle_key(key(KeyCode::Down));
    assert_eq!(interp.line().value(), "");
}

