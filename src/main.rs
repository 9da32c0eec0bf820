use anyhow::Context;
use broadside::{
    init_logging, AttackStrategy, BoardSetup, Fleet, GameConfig, Grid, DEFAULT_COLS,
    DEFAULT_ROWS,
};
use clap::{Args, Parser, Subcommand};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about = "Random fleet layouts and a hunt/target attacker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
struct Setup {
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,
    /// Fleet as `id:count[:length]` pairs, e.g. `4:1,3:2,2:3,1:4`.
    #[arg(long)]
    fleet: Option<Fleet>,
    #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Full layout restarts allowed when a ship cannot be placed.
    #[arg(long, default_value_t = 10)]
    restarts: usize,
    /// Print JSON instead of a text board.
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Place a fleet at random and print the board.
    Place(Setup),
    /// Place a fleet, then attack it until every ship is sunk.
    Play(Setup),
}

impl Setup {
    fn config(&self) -> GameConfig {
        match &self.fleet {
            Some(fleet) => GameConfig::new(self.rows, self.cols, fleet.clone()),
            None => GameConfig {
                rows: self.rows,
                cols: self.cols,
                ..GameConfig::default()
            },
        }
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => SmallRng::from_rng(&mut rand::rng()),
        }
    }

    fn defender(&self, config: &GameConfig, rng: &mut SmallRng) -> anyhow::Result<BoardSetup> {
        let mut setup = BoardSetup::from_config(config)?;
        setup
            .place_ships_with_restarts(rng, self.restarts)
            .with_context(|| format!("placing fleet {}", config.fleet))?;
        Ok(setup)
    }
}

fn place(args: Setup) -> anyhow::Result<()> {
    let config = args.config();
    let mut rng = args.rng();
    let setup = args.defender(&config, &mut rng)?;
    let stats = setup.board_stats();
    if args.json {
        let out = json!({
            "config": config,
            "board": setup.get_board(),
            "placements": setup.placements(),
            "stats": stats,
        });
        println!("{}", serde_json::to_string(&out)?);
    } else {
        println!("{}", setup.board());
        println!(
            "empty: {}, occupied: {}",
            stats.empty_spaces, stats.occupied_spaces
        );
    }
    Ok(())
}

fn play(args: Setup) -> anyhow::Result<()> {
    let config = args.config();
    let mut rng = args.rng();
    let defender = args.defender(&config, &mut rng)?;
    let mut attacker = AttackStrategy::from_config(&config)?;
    let mut shots = Grid::new(config.rows, config.cols, false);
    let mut hits = 0usize;

    while !attacker.all_ships_sunk() {
        let (x, y) = attacker.get_next_attack()?;
        shots.set(x, y, true)?;
        let (is_hit, is_sunk) = match defender.placement_at(x, y) {
            Some(ship) => (true, ship.is_sunk(&shots)),
            None => (false, false),
        };
        if is_hit {
            hits += 1;
        }
        if is_sunk {
            info!("sunk ship {} at ({}, {})", defender.get_tile(x, y)?, x, y);
        }
        attacker.register_attack(x, y, is_hit, is_sunk)?;
    }

    if args.json {
        let out = json!({
            "config": config,
            "shots": attacker.shots_fired(),
            "hits": hits,
            "enemy_board": attacker.get_enemy_board(),
        });
        println!("{}", serde_json::to_string(&out)?);
    } else {
        println!("{}", defender.board());
        println!();
        println!("{}", attacker.enemy_board());
        println!(
            "fleet {} sunk in {} shots ({} hits)",
            config.fleet,
            attacker.shots_fired(),
            hits
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Place(args) => place(args),
        Commands::Play(args) => play(args),
    }
}
