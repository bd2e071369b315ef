use anyhow::{Context, Result};
use clap::Parser;
use grid_piece::{Board, Command, Position, DEFAULT_SIZE};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Walk a piece around a square grid with M (move), L (left) and R (right)
/// tokens read from stdin.
#[derive(Parser, Debug)]
#[command(name = "grid-piece", version)]
struct Cli {
    /// Side length of the board.
    #[arg(long, env = "GRID_PIECE_SIZE", default_value_t = DEFAULT_SIZE)]
    size: u32,
    /// Print each position as a JSON object instead of `(x,y D)`.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut board = Board::new(cli.size)?.without_history();
    info!(size = cli.size, "board ready");
    eprintln!("Enter commands (M, L, R)");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = run(&mut board, stdin.lock(), stdout.lock(), cli.json)?;

    info!(
        position = %board.current_position(),
        commands = summary.commands,
        blocked = summary.blocked,
        skipped = summary.skipped,
        "input exhausted"
    );
    Ok(())
}

/// Counters reported when the input is exhausted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct RunSummary {
    commands: u64,
    blocked: u64,
    skipped: u64,
}

/// Apply every token of `input` to `board`, reporting each resulting position.
///
/// Unknown tokens, including bytes that are not valid UTF-8, are logged
/// and skipped.
fn run<R: BufRead, W: Write>(
    board: &mut Board,
    input: R,
    mut output: W,
    json: bool,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    for line in input.split(b'\n') {
        let line = line.context("failed to read command input")?;
        let line = String::from_utf8_lossy(&line);
        for token in line.split_whitespace() {
            match token.parse::<Command>() {
                Ok(command) => {
                    let from = board.current_position();
                    let position = board.apply_one(command);
                    summary.commands += 1;
                    if command == Command::Move && position == from {
                        summary.blocked += 1;
                    }
                    write_position(&mut output, &position, json)?;
                }
                Err(err) => {
                    summary.skipped += 1;
                    warn!(%err, "skipping token");
                }
            }
        }
    }
    Ok(summary)
}

fn write_position<W: Write>(output: &mut W, position: &Position, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *output, position)?;
        writeln!(output)?;
    } else {
        writeln!(output, "Moved to position: {position}")?;
    }
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_piece::Direction;
    use std::io::Cursor;

    fn run_text(board: &mut Board, input: &str, json: bool) -> String {
        let mut output = Vec::new();
        run(board, Cursor::new(input), &mut output, json).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn summary_counts_commands_without_board_history() {
        let mut board = Board::new(2).unwrap().without_history();
        let mut output = Vec::new();
        let summary = run(&mut board, Cursor::new("M M M R q"), &mut output, false).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                commands: 4,
                blocked: 2,
                skipped: 1,
            }
        );
        assert!(board.history().is_empty());
    }

    #[test]
    fn invalid_utf8_is_skipped_not_fatal() {
        let mut board = Board::default().without_history();
        let mut output = Vec::new();
        let input: &[u8] = b"M \xff\nM M\n";
        let summary = run(&mut board, Cursor::new(input), &mut output, false).unwrap();

        assert_eq!(summary.commands, 3);
        assert_eq!(summary.skipped, 1);
        assert_eq!(
            board.current_position(),
            Position::new(0, 3, Direction::North)
        );
    }

    #[test]
    fn reports_position_after_each_token() {
        let mut board = Board::default();
        let output = run_text(&mut board, "M R\nM\n", false);

        assert_eq!(
            output,
            "Moved to position: (0,1 N)\nMoved to position: (0,1 E)\nMoved to position: (1,1 E)\n"
        );
    }

    #[test]
    fn skips_unknown_tokens() {
        let mut board = Board::default();
        let output = run_text(&mut board, "M x MM m M", false);

        assert_eq!(output.lines().count(), 2);
        assert_eq!(
            board.current_position(),
            Position::new(0, 2, Direction::North)
        );
    }

    #[test]
    fn empty_input_prints_nothing() {
        let mut board = Board::default();
        assert!(run_text(&mut board, "", false).is_empty());
        assert_eq!(board.current_position(), Position::default());
    }

    #[test]
    fn json_output_is_one_object_per_line() {
        let mut board = Board::default();
        let output = run_text(&mut board, "R M", true);

        let positions: Vec<Position> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0, Direction::East),
                Position::new(1, 0, Direction::East),
            ]
        );
    }

    #[test]
    fn cli_defaults_to_size_five() {
        let cli = Cli::try_parse_from(["grid-piece"]).unwrap();
        assert_eq!(cli.size, DEFAULT_SIZE);
        assert!(!cli.json);
    }

    #[test]
    fn cli_accepts_size_and_json() {
        let cli = Cli::try_parse_from(["grid-piece", "--size", "8", "--json"]).unwrap();
        assert_eq!(cli.size, 8);
        assert!(cli.json);
    }
}
