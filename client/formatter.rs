use crate::commands::Reply;
use colored::*;

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format_reply(reply: &Reply) -> String {
        match reply {
            Reply::Status(s) => Self::format_status(s),
            Reply::Error(err) => Self::format_error(err),
            Reply::Integer(i) => Self::format_integer(*i),
            Reply::Text(s) => Self::format_text(s),
            Reply::List(items) => Self::format_list(items),
            Reply::Nil => "(nil)".red().to_string(),
        }
    }

    fn format_status(s: &str) -> String {
        s.green().to_string()
    }

    fn format_error(err: &str) -> String {
        format!("(error) {}", err.red())
    }

    fn format_integer(i: i64) -> String {
        format!("(integer) {}", i.to_string().cyan())
    }

    fn format_text(s: &str) -> String {
        if s.is_empty() {
            "(empty string)".yellow().to_string()
        } else {
            s.to_string()
        }
    }

    fn format_list(items: &[String]) -> String {
        if items.is_empty() {
            return "(empty list)".yellow().to_string();
        }
        items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}) {}", (i + 1).to_string().blue(), item))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn format_prompt(worlds: &[&str]) -> String {
        format!("railarea[{}]> ", worlds.join(",").blue())
    }

    pub fn format_loaded_message(areas: usize, worlds: usize) -> String {
        format!(
            "Loaded {} platform areas in {} worlds",
            areas.to_string().green(),
            worlds.to_string().green()
        )
    }

    pub fn format_goodbye_message() -> String {
        "Bye".cyan().to_string()
    }
}
