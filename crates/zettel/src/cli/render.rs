use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use zettelapp::api::{CmdMessage, MessageLevel, Neighborhood};
use zettelapp::model::DisplayNote;

const LINE_WIDTH: usize = 100;
const INDENT: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

fn label(note: &DisplayNote) -> &str {
    if note.title.is_empty() {
        &note.filename
    } else {
        &note.title
    }
}

fn note_line(note: &DisplayNote, indent: &str) -> String {
    let fixed = indent.width() + note.id.width() + 1;
    let text = truncate_to_width(label(note), LINE_WIDTH.saturating_sub(fixed));
    format!("{}{} {}", indent, note.id.yellow(), text)
}

/// One line per note, indented by depth.
pub(super) fn render_tree(notes: &[DisplayNote]) -> String {
    if notes.is_empty() {
        return "No notes found.\n".to_string();
    }

    let mut output = String::new();
    for note in notes {
        output.push_str(&note_line(note, &INDENT.repeat(note.depth)));
        output.push('\n');
    }
    output
}

pub(super) fn render_neighborhood(hood: &Neighborhood) -> String {
    let mut output = String::new();

    match &hood.parent {
        Some(parent) => output.push_str(&format!(
            "{} {}\n",
            "Parent:".dimmed(),
            note_line(parent, "")
        )),
        None => output.push_str(&format!("{} {}\n", "Parent:".dimmed(), "(top level)".dimmed())),
    }
    output.push_str(&format!("{} {}\n", "Note:".bold(), note_line(&hood.note, "")));

    if hood.children.is_empty() {
        output.push_str(&format!("{}\n", "No children.".dimmed()));
    } else {
        output.push_str(&format!("{}\n", "Children:".dimmed()));
        for child in &hood.children {
            output.push_str(&note_line(child, INDENT));
            output.push('\n');
        }
    }

    output.push_str(&format!(
        "{} {}\n",
        "Next sibling:".dimmed(),
        hood.next_sibling_id
    ));
    output.push_str(&format!("{} {}\n", "Next child:".dimmed(), hood.next_child_id));
    output
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
