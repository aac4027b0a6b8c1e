use criterion::{black_box, criterion_group, criterion_main, Criterion};
use minesweeper_engine::{
    reveal::reveal_cascade, Difficulty, Game, GameStatus, GridDimension, Minefield, Position,
};

#[derive(Debug, Default)]
struct SweepStats {
    won: bool,
    moves_made: usize,
    cells_remaining: u32,
}

/// Reveals cells in row-major order until the game ends, skipping known-bad moves.
fn sweep_game(game: &mut Game) -> SweepStats {
    let mut stats = SweepStats::default();
    let positions: Vec<_> = game.dimensions().positions().collect();

    for pos in positions {
        if game.status().is_finished() {
            break;
        }
        if game.is_revealed(pos).unwrap_or(true) {
            continue;
        }
        if game.reveal(pos).is_ok() {
            stats.moves_made += 1;
        }
    }

    stats.won = game.status() == GameStatus::Won;
    stats.cells_remaining = game.unrevealed_count();
    stats
}

fn benchmark_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("Cascade");

    for size in [16u32, 64, 256] {
        let dims = GridDimension::new(size, size).unwrap();
        group.bench_function(format!("open {}x{}", size, size), |b| {
            b.iter_with_setup(
                || Minefield::new(dims, 0),
                |mut field| black_box(reveal_cascade(&mut field, Position::new(0, 0))),
            );
        });
    }

    group.finish();
}

fn benchmark_games(c: &mut Criterion) {
    let mut group = c.benchmark_group("Games");

    for difficulty in Difficulty::ALL {
        group.bench_function(format!("sweep {}", difficulty), |b| {
            let mut seed = 0;
            b.iter_with_setup(
                || {
                    seed += 1;
                    Game::seeded(difficulty.dimensions(), difficulty.mine_count(), seed)
                        .unwrap()
                },
                |mut game| black_box(sweep_game(&mut game)),
            );
        });

        let games: Vec<_> = (0..50)
            .map(|seed| {
                let mut game =
                    Game::seeded(difficulty.dimensions(), difficulty.mine_count(), seed).unwrap();
                sweep_game(&mut game)
            })
            .collect();
        let won = games.iter().filter(|g| g.won).count();
        let moves: usize = games.iter().map(|g| g.moves_made).sum();
        let remaining: u32 = games.iter().map(|g| g.cells_remaining).sum();

        println!("\nRow-major sweep on {}:", difficulty);
        println!("Games won: {}/{}", won, games.len());
        println!("Average moves per game: {:.1}", moves as f64 / games.len() as f64);
        println!(
            "Average cells left: {:.1}",
            remaining as f64 / games.len() as f64
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_cascade, benchmark_games);
criterion_main!(benches);
