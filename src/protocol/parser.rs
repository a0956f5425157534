//! Admin command parsing

/// Commands accepted on the admin listener
#[derive(Debug, PartialEq)]
pub enum Command {
    /// `SHOW [file]` - read a config file, or list the config root
    Show(Option<String>),
    /// `PUSH <file> <contents>` - overwrite a config file
    Push { file: String, contents: String },
    Quit,
    Unknown(String),
}

/// Parse a raw request line into a Command
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "SHOW" => Command::Show((!arg.is_empty()).then(|| arg.to_string())),
        "PUSH" => {
            let mut rest = arg.splitn(2, char::is_whitespace);
            match (rest.next(), rest.next()) {
                (Some(file), Some(contents)) if !file.is_empty() => Command::Push {
                    file: file.to_string(),
                    contents: contents.to_string(),
                },
                _ => Command::Unknown(trimmed.to_string()),
            }
        }
        "QUIT" | "Q" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
