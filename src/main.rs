use std::env;
use std::process;

use clap::{App, Arg, ArgGroup};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use pathblocker_solver::config::Method;
use pathblocker_solver::replay::{frame_label, replay};
use pathblocker_solver::terrain::Elevation;
use pathblocker_solver::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("pathblocker-solver")
        .version("0.1")
        .arg(
            Arg::with_name("move-optimal")
                .short("m")
                .long("move-optimal")
                .help("fewest moves, ignores terrain (default)"),
        )
        .arg(
            Arg::with_name("cost-optimal")
                .short("c")
                .long("cost-optimal")
                .help("cheapest total cost over generated terrain"),
        )
        .group(
            ArgGroup::with_name("method")
                .arg("move-optimal")
                .arg("cost-optimal"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .help("terrain RNG seed, random when omitted (cost-optimal only)"),
        )
        .arg(
            Arg::with_name("pyramids")
                .long("pyramids")
                .takes_value(true)
                .default_value("5")
                .help("number of terrain pyramids, clamped to 1-8 (cost-optimal only)"),
        )
        .arg(
            Arg::with_name("status")
                .long("status")
                .help("print stats when the search reaches a new depth"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let method = if matches.is_present("cost-optimal") {
        Method::CostOptimal
    } else {
        Method::MoveOptimal
    };
    let path = matches.value_of("file").unwrap();

    let level = path.load_level().unwrap_or_else(|err| {
        let current_dir = env::current_dir().unwrap();
        println!(
            "Can't load level {} in {}: {}",
            path,
            current_dir.display(),
            err
        );
        process::exit(1);
    });

    let terrain = if method == Method::CostOptimal {
        let pyramids = parse_arg(&matches, "pyramids");
        let mut rng = match matches.value_of("seed") {
            Some(_) => ChaCha8Rng::seed_from_u64(parse_arg(&matches, "seed")),
            None => ChaCha8Rng::from_entropy(),
        };
        let elevation = Elevation::generate(
            level.board.width(),
            level.board.height(),
            pyramids,
            &mut rng,
        );
        println!("Terrain:");
        println!("{}", elevation);
        Some(elevation)
    } else {
        None
    };

    println!("Solving {}...", path);
    let solver_ok = level.solve(method, terrain.as_ref(), matches.is_present("status"));
    println!("{}", solver_ok.stats);

    match solver_ok.solution {
        Some(solution) => {
            let replay = replay(&level, &solution.moves, terrain.as_ref());
            println!("Found solution:");
            for (i, snapshot) in replay.snapshots.iter().enumerate() {
                println!("{}:", frame_label(i));
                println!("{}", snapshot);
            }
            println!("{}", solution.moves);
            println!("Moves: {}", solution.moves.move_cnt());
            println!("Total cost: {}", replay.total_cost);
        }
        None => println!("No solution"),
    }
}

fn parse_arg<T: std::str::FromStr>(matches: &clap::ArgMatches<'_>, name: &str) -> T {
    let raw = matches.value_of(name).unwrap();
    raw.parse().unwrap_or_else(|_| {
        println!("Can't parse --{}: {}", name, raw);
        process::exit(1);
    })
}
