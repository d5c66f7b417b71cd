use clap::Parser;
use tracing_subscriber::EnvFilter;

use meal_planner_rs::catalog::load_cached;
use meal_planner_rs::cli::{Cli, Command};
use meal_planner_rs::error::Result;
use meal_planner_rs::interface::{
    collect_user_constraints, display_calories, display_meal_list, display_planner,
    prompt_yes_no, write_planner_csv, write_planner_json,
};
use meal_planner_rs::models::MealTime;
use meal_planner_rs::planner::{
    adjusted_calories, base_calories, generate_planner, planner_rng, SelectionConfig,
};
use meal_planner_rs::state::{ProfileStore, Vote};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        if e.is_exhaustion() {
            eprintln!("Cannot generate a plan with these constraints; try relaxing diet or ingredient filters.");
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Plan {
            ref user,
            seed,
            occurrence_cap,
            calorie_range,
            allow_repeats,
            ref json,
            ref csv,
        } => {
            let mut config = SelectionConfig {
                enforce_occurrence_cap: !allow_repeats,
                ..Default::default()
            };
            if let Some(cap) = occurrence_cap {
                config.occurrence_cap = cap;
            }
            if let Some(range) = calorie_range {
                config.calorie_range = range;
            }
            cmd_plan(&cli, user, seed, &config, json.as_deref(), csv.as_deref())
        }
        Command::Profile { ref user } => cmd_profile(&cli, user),
        Command::Vote {
            ref user,
            meal,
            up,
            down: _,
        } => cmd_vote(&cli, user, meal, if up { Vote::Up } else { Vote::Down }),
        Command::Calories { ref user } => cmd_calories(&cli, user),
        Command::Meals { slot } => cmd_meals(&cli, slot),
    }
}

/// Generate and display a plan for a stored user.
fn cmd_plan(
    cli: &Cli,
    user_id: &str,
    seed: Option<u64>,
    config: &SelectionConfig,
    json: Option<&std::path::Path>,
    csv: Option<&std::path::Path>,
) -> Result<()> {
    let store = ProfileStore::load(&cli.profiles)?;
    let constraints = store.get(user_id)?;
    let catalog = load_cached(&cli.catalog)?;

    println!("Loaded {} meals", catalog.len());

    let mut rng = planner_rng(seed);
    let planner = generate_planner(user_id, constraints, &catalog, config, &mut rng)?;

    display_planner(&planner);

    if let Some(path) = json {
        write_planner_json(&planner, path)?;
        println!("Wrote plan to {}", path.display());
    }
    if let Some(path) = csv {
        write_planner_csv(&planner, path)?;
        println!("Wrote plan to {}", path.display());
    }

    Ok(())
}

/// Create or replace a user's constraints.
fn cmd_profile(cli: &Cli, user_id: &str) -> Result<()> {
    let mut store = ProfileStore::load(&cli.profiles)?;

    let known_diets: Vec<String> = match load_cached(&cli.catalog) {
        Ok(catalog) => catalog.diets().into_iter().collect(),
        Err(e) => {
            eprintln!("Could not load catalog for diet suggestions: {}", e);
            Vec::new()
        }
    };

    let constraints = collect_user_constraints(&known_diets)?;

    if prompt_yes_no(&format!("Save profile for '{}'?", user_id), true)? {
        store.upsert(user_id, constraints);
        store.save(&cli.profiles)?;
        println!("Profile saved.");
    }

    Ok(())
}

/// Record a meal vote.
fn cmd_vote(cli: &Cli, user_id: &str, meal_id: u32, vote: Vote) -> Result<()> {
    let mut store = ProfileStore::load(&cli.profiles)?;

    if let Ok(catalog) = load_cached(&cli.catalog) {
        match catalog.get(meal_id) {
            Some(meal) => println!("{:?} vote for '{}'", vote, meal.name),
            None => eprintln!("Warning: meal {} is not in the catalog", meal_id),
        }
    }

    store.vote(user_id, meal_id, vote)?;
    store.save(&cli.profiles)?;
    println!("Vote saved.");
    Ok(())
}

/// Show calorie targets for a user.
fn cmd_calories(cli: &Cli, user_id: &str) -> Result<()> {
    let store = ProfileStore::load(&cli.profiles)?;
    let constraints = store.get(user_id)?;
    constraints.validate()?;

    let base = base_calories(constraints);
    let adjusted = adjusted_calories(constraints, base);
    display_calories(user_id, constraints, base, adjusted);
    Ok(())
}

/// List catalog meals, optionally for one slot.
fn cmd_meals(cli: &Cli, slot: Option<MealTime>) -> Result<()> {
    let catalog = load_cached(&cli.catalog)?;
    match slot {
        Some(slot) => display_meal_list(&catalog.for_slot(slot), &format!("{} meals", slot)),
        None => {
            let all: Vec<_> = catalog.meals().iter().collect();
            display_meal_list(&all, "Catalog");
        }
    }
    Ok(())
}
