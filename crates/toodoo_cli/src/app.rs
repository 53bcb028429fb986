//! Interactive command loop.
//!
//! # Responsibility
//! - Read commands, call the matching manager operation, print results.
//! - Own every user-facing message; the manager returns values only.
//!
//! # Invariants
//! - The loop never terminates the process; it returns `LoopExit`.
//! - Non-integer index input is ignored without calling the manager.

use crate::command::{parse_index, Command};
use log::debug;
use std::io::{self, BufRead, Write};
use toodoo_core::{ActionOutcome, ActionReport, TodoManager, TodoStore};

const BANNER: &str = "Todo App";
const COMMAND_PROMPT: &str = "enter command (add, list, toggle, delete, exit): ";
const TITLE_PROMPT: &str = "enter title:";
const INDEX_PROMPT: &str = "enter index:";
const WRONG_COMMAND: &str = "wrong command!";
const INVALID_INDEX: &str = "enter a valid number";
const SAVE_FAILED: &str = "failed to save todos";

/// Why the loop handed control back to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The user entered `exit`.
    Exit,
    /// Input was closed at the command prompt.
    EndOfInput,
}

/// Runs the command loop until `exit` or end of input.
///
/// # Errors
/// - Returns an I/O error when reading input or writing output fails.
pub fn run<S, R, W>(
    manager: &mut TodoManager<S>,
    input: &mut R,
    output: &mut W,
) -> io::Result<LoopExit>
where
    S: TodoStore,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{BANNER}")?;

    loop {
        writeln!(output, "{COMMAND_PROMPT}")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            writeln!(output, "{WRONG_COMMAND}")?;
            return Ok(LoopExit::EndOfInput);
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                debug!("event=command_rejected module=cli status=unknown error={err}");
                writeln!(output, "{WRONG_COMMAND}")?;
                continue;
            }
        };

        match command {
            Command::Add => {
                writeln!(output, "{TITLE_PROMPT}")?;
                output.flush()?;
                if let Some(title) = read_line(input)? {
                    let report = manager.add_todo(title);
                    write_report(output, &report)?;
                }
            }
            Command::List => {
                for line in manager.list_todos() {
                    writeln!(output, "{line}")?;
                }
            }
            Command::Toggle => {
                if let Some(index) = prompt_index(input, output)? {
                    let report = manager.toggle_completion(index);
                    write_report(output, &report)?;
                }
            }
            Command::Delete => {
                if let Some(index) = prompt_index(input, output)? {
                    let report = manager.delete_todo(index);
                    write_report(output, &report)?;
                }
            }
            Command::Exit => return Ok(LoopExit::Exit),
        }
    }
}

fn prompt_index<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<i64>> {
    writeln!(output, "{INDEX_PROMPT}")?;
    output.flush()?;
    Ok(read_line(input)?.as_deref().and_then(parse_index))
}

fn write_report<W: Write>(output: &mut W, report: &ActionReport) -> io::Result<()> {
    if let ActionOutcome::InvalidIndex { .. } = report.outcome {
        writeln!(output, "{INVALID_INDEX}")?;
    }
    if !report.persisted {
        writeln!(output, "{SAVE_FAILED}")?;
    }
    Ok(())
}

/// Reads one line without its terminator. `None` means end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::{run, LoopExit, COMMAND_PROMPT, INVALID_INDEX, SAVE_FAILED, WRONG_COMMAND};
    use std::io::Cursor;
    use toodoo_core::{
        FileTodoStore, MemoryTodoStore, TodoManager, TodoStore, COMPLETED_MARKER, PENDING_MARKER,
    };

    fn drive<S: TodoStore>(manager: &mut TodoManager<S>, script: &str) -> (LoopExit, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let exit = run(manager, &mut input, &mut output).expect("loop should not fail");
        (exit, String::from_utf8(output).expect("output should be UTF-8"))
    }

    #[test]
    fn scenario_add_toggle_delete_list() {
        let mut manager = TodoManager::new(MemoryTodoStore::new());
        let script = "add\nbuy milk\nadd\npay bills\nlist\ntoggle\n1\nlist\ndelete\n1\nlist\nexit\n";

        let (exit, output) = drive(&mut manager, script);

        assert_eq!(exit, LoopExit::Exit);
        assert!(output.starts_with("Todo App\n"));
        let both_pending = format!("1. {PENDING_MARKER} buy milk\n2. {PENDING_MARKER} pay bills\n");
        let first_done = format!("1. {COMPLETED_MARKER} buy milk\n2. {PENDING_MARKER} pay bills\n");
        let after_delete = format!("1. {PENDING_MARKER} pay bills\n");
        assert!(output.contains(&both_pending));
        assert!(output.contains(&first_done));
        assert!(output.ends_with(&format!("{after_delete}{COMMAND_PROMPT}\n")));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.todos()[0].title, "pay bills");
    }

    #[test]
    fn commands_are_trimmed_and_case_folded() {
        let mut manager = TodoManager::new(MemoryTodoStore::new());
        let (exit, _) = drive(&mut manager, "  ADD  \nwash car\n EXIT\n");

        assert_eq!(exit, LoopExit::Exit);
        assert_eq!(manager.todos()[0].title, "wash car");
    }

    #[test]
    fn unknown_and_empty_commands_print_wrong_command_and_continue() {
        let mut manager = TodoManager::new(MemoryTodoStore::new());
        let (exit, output) = drive(&mut manager, "remove\n\nexit\n");

        assert_eq!(exit, LoopExit::Exit);
        assert_eq!(output.matches(WRONG_COMMAND).count(), 2);
        assert_eq!(output.matches(COMMAND_PROMPT).count(), 3);
    }

    #[test]
    fn end_of_input_returns_to_caller() {
        let mut manager = TodoManager::new(MemoryTodoStore::new());
        let (exit, output) = drive(&mut manager, "add\nlast one\n");

        assert_eq!(exit, LoopExit::EndOfInput);
        assert!(output.ends_with(&format!("{WRONG_COMMAND}\n")));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn empty_title_is_stored() {
        let mut manager = TodoManager::new(MemoryTodoStore::new());
        drive(&mut manager, "add\n\nexit\n");

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.todos()[0].title, "");
    }

    #[test]
    fn non_integer_index_is_silently_ignored() {
        let mut manager = TodoManager::new(MemoryTodoStore::new());
        manager.add_todo("keep me");
        let saved_before = manager.store().snapshot().map(<[_]>::to_vec);

        let (_, output) = drive(&mut manager, "toggle\nfirst\ndelete\n1.0\nexit\n");

        assert!(!output.contains(INVALID_INDEX));
        assert!(!manager.todos()[0].is_completed);
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.store().snapshot().map(<[_]>::to_vec), saved_before);
    }

    #[test]
    fn out_of_range_index_prints_invalid_number() {
        let mut manager = TodoManager::new(MemoryTodoStore::new());
        manager.add_todo("only");

        let (_, output) = drive(&mut manager, "toggle\n0\ndelete\n2\nexit\n");

        assert_eq!(output.matches(INVALID_INDEX).count(), 2);
        assert_eq!(manager.len(), 1);
        assert!(!manager.todos()[0].is_completed);
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        let mut manager = TodoManager::new(MemoryTodoStore::new());
        drive(&mut manager, "add\r\nbuy milk\r\nexit\r\n");

        assert_eq!(manager.todos()[0].title, "buy milk");
    }

    #[test]
    fn failed_save_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"plain file").expect("blocker file should be written");
        let mut manager = TodoManager::new(FileTodoStore::in_dir(&blocker));

        let (_, output) = drive(&mut manager, "add\nunsaved\nexit\n");

        assert!(output.contains(SAVE_FAILED));
    }
}
