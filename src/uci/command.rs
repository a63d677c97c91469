/// One line of input from the GUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciCommand {
    Uci,
    IsReady,
    UciNewGame,
    Position(Vec<String>),
    Go(Vec<String>),
    SetOption(Vec<String>),
    /// Print the current board (`d`)
    Display,
    Quit,
    Unknown(String),
}

/// Split a line into a command. Blank lines yield `None`.
#[must_use]
pub fn parse_uci_command(line: &str) -> Option<UciCommand> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let first = *parts.first()?;

    let owned_parts = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<String>>();

    let cmd = match first {
        "uci" => UciCommand::Uci,
        "isready" => UciCommand::IsReady,
        "ucinewgame" => UciCommand::UciNewGame,
        "position" => UciCommand::Position(owned_parts()),
        "go" => UciCommand::Go(owned_parts()),
        "setoption" => UciCommand::SetOption(owned_parts()),
        "d" => UciCommand::Display,
        "quit" => UciCommand::Quit,
        _ => UciCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

/// Node budget requested by a `go` command, if any
#[must_use]
pub fn parse_go_nodes(parts: &[&str]) -> Option<u64> {
    parts
        .windows(2)
        .find(|pair| pair[0] == "nodes")
        .and_then(|pair| pair[1].parse::<u64>().ok())
}
