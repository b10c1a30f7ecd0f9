use colored::Colorize;
use itask::api::MessageLevel;
use itask::commands::CmdMessage;
use itask::index::DisplayTodo;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const DONE_MARKER: &str = "[x]";
const OPEN_MARKER: &str = "[ ]";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

/// One line per todo: right-aligned index, checkbox, then the text on a single line.
/// Completed todos are struck through and dimmed.
pub(super) fn render_todo_list(todos: &[DisplayTodo]) -> String {
    let idx_width = todos
        .last()
        .map(|dt| format!("{}.", dt.index).width())
        .unwrap_or(0);

    let mut output = String::new();
    for dt in todos {
        let idx_str = format!("{:>width$}", format!("{}.", dt.index), width = idx_width);
        let marker = if dt.todo.is_completed {
            DONE_MARKER
        } else {
            OPEN_MARKER
        };

        let fixed_width = idx_width + 1 + marker.width() + 1;
        let text = single_line(&dt.todo.text);
        let text = truncate_to_width(&text, LINE_WIDTH.saturating_sub(fixed_width));

        let line = if dt.todo.is_completed {
            format!(
                "{} {} {}",
                idx_str.dimmed(),
                marker.green(),
                text.strikethrough().dimmed()
            )
        } else {
            format!("{} {} {}", idx_str.yellow(), marker, text)
        };
        output.push_str(&line);
        output.push('\n');
    }
    output
}

fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

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
