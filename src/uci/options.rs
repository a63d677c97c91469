use std::io::{self, Write};

use crate::board::{SearchParams, Searcher};

/// Protocol-level settings, changed through `setoption`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UciOptions {
    /// Nodes per `go` when the command gives no limit
    pub node_budget: u64,
    pub table_capacity: usize,
}

impl Default for UciOptions {
    fn default() -> Self {
        UciOptions {
            node_budget: 10_000,
            table_capacity: SearchParams::default().table_capacity,
        }
    }
}

impl UciOptions {
    /// Write the `uci` handshake: identity, options, `uciok`.
    pub fn print(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "id name {}", env!("CARGO_PKG_NAME"))?;
        writeln!(out, "id author {}", env!("CARGO_PKG_NAME"))?;
        writeln!(
            out,
            "option name Nodes type spin default {} min 1 max 1000000000",
            self.node_budget
        )?;
        writeln!(
            out,
            "option name TableSize type spin default {} min 1 max 100000000",
            self.table_capacity
        )?;
        writeln!(out, "uciok")
    }

    /// Apply one option. Unknown names and unparsable values are ignored.
    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>, searcher: &mut Searcher) {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "nodes" => {
                if let Some(v) = value.and_then(|v| v.parse::<u64>().ok()) {
                    self.node_budget = v.max(1);
                }
            }
            "tablesize" | "table size" => {
                if let Some(v) = value.and_then(|v| v.parse::<usize>().ok()) {
                    self.table_capacity = v.max(1);
                    searcher.set_table_capacity(self.table_capacity);
                }
            }
            _ => eprintln!("Unknown option: {name}"),
        }
    }
}

/// Split `setoption name <name...> [value <value...>]` into its parts.
#[must_use]
pub fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    if parts.first() != Some(&"setoption") {
        return None;
    }

    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut in_value = false;
    let mut seen_name = false;

    for part in parts.iter().skip(1) {
        match *part {
            "name" if !seen_name => seen_name = true,
            "value" if seen_name => in_value = true,
            _ if in_value => value_parts.push(part),
            _ if seen_name => name_parts.push(part),
            _ => {}
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let value = (!value_parts.is_empty()).then(|| value_parts.join(" "));
    Some((name_parts.join(" "), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_setoption() {
        assert_eq!(
            parse_setoption(&["setoption", "name", "Nodes", "value", "500"]),
            Some(("Nodes".to_string(), Some("500".to_string())))
        );
        assert_eq!(
            parse_setoption(&["setoption", "name", "Table", "Size"]),
            Some(("Table Size".to_string(), None))
        );
        assert_eq!(parse_setoption(&["setoption", "value", "3"]), None);
        assert_eq!(parse_setoption(&["go"]), None);
    }

    #[test]
    fn test_apply_setoption() {
        let mut options = UciOptions::default();
        let mut searcher = Searcher::new();
        options.apply_setoption("Nodes", Some("250"), &mut searcher);
        assert_eq!(options.node_budget, 250);
        options.apply_setoption("nodes", Some("lots"), &mut searcher);
        assert_eq!(options.node_budget, 250);
        options.apply_setoption("TableSize", Some("64"), &mut searcher);
        assert_eq!(searcher.table().capacity(), 64);
        assert_eq!(searcher.params().table_capacity, 64);
    }

    #[test]
    fn test_handshake() {
        let mut out = Vec::new();
        UciOptions::default().print(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("id name mailbox_engine\n"));
        assert!(text.contains("option name Nodes type spin default 10000"));
        assert!(text.ends_with("uciok\n"));
    }
}
