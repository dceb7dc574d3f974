//! Runs the computer opponent against randomly placed fleets and prints a
//! JSON summary: `sim <seed> [games]`.

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    use broadside::{init_logging, Board, TargetingStrategy};
    use rand::{rngs::SmallRng, SeedableRng};
    use serde_json::json;

    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };
    if games == 0 {
        anyhow::bail!("games must be at least 1");
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut shots = Vec::with_capacity(games);
    let mut final_shots = Vec::with_capacity(games);
    for _ in 0..games {
        let mut board = Board::new();
        board.place_fleet_randomly(&mut rng)?;
        let mut strategy = TargetingStrategy::new(&mut rng);
        let mut taken = 0usize;
        let mut last = None;
        while !strategy.has_won() {
            last = Some(strategy.take_shot(&mut board)?);
            taken += 1;
        }
        shots.push(taken);
        final_shots.push(last);
    }

    let min = shots.iter().copied().min().unwrap_or(0);
    let max = shots.iter().copied().max().unwrap_or(0);
    let mean = shots.iter().sum::<usize>() as f64 / games as f64;
    let result = json!({
        "seed": seed,
        "games": games,
        "shots": shots,
        "min": min,
        "max": max,
        "mean": mean,
        "final_shots": final_shots,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
