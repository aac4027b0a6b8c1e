use anyhow::Context;
use clap::Parser;
use minesweeper_engine::{
    CellView, Difficulty, Game, GameError, GameStatus, GridDimension, Position, RevealOutcome,
};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Terminal minesweeper")]
struct Args {
    /// Preset: easy, medium or hard
    #[arg(short, long, default_value = "easy")]
    difficulty: Difficulty,

    /// Custom grid height, overrides the preset together with --width and --mines
    #[arg(long, requires_all = ["width", "mines"])]
    height: Option<u32>,

    #[arg(long, requires_all = ["height", "mines"])]
    width: Option<u32>,

    #[arg(long, requires_all = ["height", "width"])]
    mines: Option<u32>,

    /// Seed for reproducible mine placement
    #[arg(long)]
    seed: Option<u64>,
}

enum Command {
    Reveal(Position),
    Flag(Position),
    Reset,
    Quit,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let game = new_game(&args).context("cannot start game")?;
    run_game(game)?;
    println!("Thanks for playing!");
    Ok(())
}

fn new_game(args: &Args) -> Result<Game, GameError> {
    let (dimensions, mines) = match (args.height, args.width, args.mines) {
        (Some(height), Some(width), Some(mines)) => (GridDimension::new(height, width)?, mines),
        _ => (args.difficulty.dimensions(), args.difficulty.mine_count()),
    };

    match args.seed {
        Some(seed) => Game::seeded(dimensions, mines, seed),
        None => Game::new(dimensions, mines),
    }
}

fn run_game(mut game: Game) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_board(&game)?;
        print_status(&game);
        prompt(&mut io::stdout())?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.context("cannot read command")?;

        let result = match parse_command(&line) {
            Some(Command::Reveal(pos)) => game.reveal(pos).map(|outcome| match outcome {
                RevealOutcome::HitMine => println!("Boom! Game over."),
                RevealOutcome::Won => println!("Congratulations! You won!"),
                RevealOutcome::NoChange | RevealOutcome::Revealed(_) => {}
            }),
            Some(Command::Flag(pos)) => game.flag(pos).map(|_| ()),
            Some(Command::Reset) => {
                game.reset();
                Ok(())
            }
            Some(Command::Quit) => return Ok(()),
            None => {
                println!("Invalid command. Use 'row col r' to reveal or 'row col f' to flag");
                continue;
            }
        };

        if let Err(e) = result {
            println!("Error: {}", e);
        }
    }
}

fn prompt(out: &mut impl Write) -> anyhow::Result<()> {
    write!(out, "Enter command (row col [r/f], reset, quit): ")?;
    out.flush().context("cannot flush prompt")
}

fn parse_command(input: &str) -> Option<Command> {
    let mut parts = input.split_whitespace();
    let first = parts.next()?;

    match first {
        "reset" => return Some(Command::Reset),
        "quit" | "q" => return Some(Command::Quit),
        _ => {}
    }

    let row = first.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    let pos = Position::new(row, col);

    match parts.next().unwrap_or("r") {
        "r" => Some(Command::Reveal(pos)),
        "f" => Some(Command::Flag(pos)),
        _ => None,
    }
}

fn print_board(game: &Game) -> Result<(), GameError> {
    let dims = game.dimensions();

    // Column numbers
    print!("    ");
    for col in 0..dims.width() {
        print!("{:>2} ", col);
    }
    println!();

    for row in 0..dims.height() {
        print!("{:>2}  ", row);
        for col in 0..dims.width() {
            let symbol = match game.cell_view(Position::new(row as i32, col as i32))? {
                CellView::Hidden => "□".to_string(),
                CellView::Flagged => "⚑".to_string(),
                CellView::Revealed(0) => " ".to_string(),
                CellView::Revealed(n) => n.to_string(),
                CellView::Exploded => "✹".to_string(),
                CellView::Mine => "*".to_string(),
                CellView::MisplacedFlag => "✗".to_string(),
            };
            print!("{:>2} ", symbol);
        }
        println!();
    }
    Ok(())
}

fn print_status(game: &Game) {
    let status = match game.status() {
        GameStatus::NotStarted => "not started",
        GameStatus::InProgress => "in progress",
        GameStatus::Won => "won",
        GameStatus::Lost => "lost",
    };
    println!(
        "Status: {} | Mines left: {} | Time: {}s",
        status,
        game.mines_left(),
        game.elapsed().as_secs()
    );
}
