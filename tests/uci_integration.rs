use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

use mailbox_engine::board::Game;
use mailbox_engine::uci::{self, try_parse_position_command};

fn bestmove_of(output: &str) -> &str {
    let line = output
        .lines()
        .find(|l| l.starts_with("bestmove"))
        .expect("no bestmove found");
    line.split_whitespace().nth(1).expect("bestmove missing move")
}

#[test]
fn uci_smoke_test_returns_legal_move() {
    let exe = env!("CARGO_BIN_EXE_mailbox_engine");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn engine binary");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let mut reader = BufReader::new(stdout);

    stdin
        .write_all(b"uci\nisready\nposition startpos moves e2e4\ngo nodes 500\n")
        .unwrap();

    let mut output = String::new();
    loop {
        let mut line = String::new();
        let bytes = reader.read_line(&mut line).expect("read failed");
        if bytes == 0 {
            break;
        }
        output.push_str(&line);
        if line.starts_with("bestmove") {
            break;
        }
    }

    stdin.write_all(b"quit\n").unwrap();
    let _ = child.wait();

    assert!(output.contains("uciok"));
    assert!(output.contains("readyok"));
    assert!(output.contains("info depth"));

    let mv = bestmove_of(&output);
    assert_ne!(mv, "0000", "engine returned null move");

    let game = try_parse_position_command(&["position", "startpos", "moves", "e2e4"]).unwrap();
    assert!(game.parse_move(mv).is_ok(), "illegal bestmove {mv}");
}

#[test]
fn black_reply_is_in_absolute_notation() {
    let script = "position startpos moves e2e4\ngo nodes 300\nquit\n";
    let mut out = Vec::new();
    uci::run(script.as_bytes(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let mv = bestmove_of(&text);
    let mut game = Game::startpos();
    game.play_uci_moves(["e2e4"]).unwrap();
    assert!(!game.white_to_move);
    // Black's moves start on ranks 7 or 8 at the beginning of the game
    assert!(matches!(&mv[1..2], "7" | "8"), "{mv}");
    assert!(game.parse_move(mv).is_ok());
}

#[test]
fn fen_position_and_display() {
    let script = "position fen 4k3/8/8/8/8/8/8/R3K3 w Q - 0 1\nd\nquit\n";
    let mut out = Vec::new();
    uci::run(script.as_bytes(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("\n....k...\n"));
    assert!(text.contains("\nR...K...\n"));
    assert!(text.contains("White to move"));
}

#[test]
fn ucinewgame_resets_the_board() {
    let script = "position startpos moves e2e4\nucinewgame\nd\nquit\n";
    let mut out = Vec::new();
    uci::run(script.as_bytes(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("\nPPPPPPPP\n"));
}

#[test]
fn finds_mate_through_protocol() {
    let script = "position fen 6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1\ngo\nquit\n";
    let mut out = Vec::new();
    uci::run(script.as_bytes(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(bestmove_of(&text), "a1a8");
}
