//! Ristorante CLI entry point.
//!
//! Loads the menu collections from the configured backend and prints one view
//! of the resulting store.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::sync::Arc;

use ristorante::domain::DishId;
use ristorante::infra::app_config::load_config;
use ristorante::infra::http::HttpCollectionSource;
use ristorante::store::{AppState, Slice, Store};

#[derive(Parser, Debug)]
#[command(name = "ristorante")]
#[command(version)]
#[command(about = "Browse the restaurant menu, promotions and comments", long_about = None)]
struct Args {
    /// Backend base URL (overrides config and RISTORANTE_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Featured dish, promotion and leader
    Home,

    /// Every dish on the menu
    Menu,

    /// One dish with its comments
    Dish { id: DishId },

    /// Leadership team
    About,

    /// Submit a comment for a dish (kept for this session only)
    Comment {
        dish_id: DishId,
        /// Rating from 1 to 5
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
        author: String,
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = load_config().context("Failed to load configuration")?;
    if let Some(base_url) = args.base_url.as_deref() {
        config.set_base_url(base_url)?;
    }

    let source = HttpCollectionSource::new(config.base_url.clone(), config.request_timeout())
        .context("Failed to build HTTP client")?;
    log::info!("using backend {}", source.base_url());

    let mut store = Store::new(Arc::new(source), config.leaders.clone());
    store.mount();
    store.settle().await;

    match args.command.unwrap_or(Commands::Home) {
        Commands::Home => print_home(store.state()),
        Commands::Menu => print_menu(store.state()),
        Commands::Dish { id } => print_dish(store.state(), id)?,
        Commands::About => print_about(store.state()),
        Commands::Comment {
            dish_id,
            rating,
            author,
            text,
        } => {
            if store.state().dish_by_id(dish_id).is_none() {
                log::warn!("dish {dish_id} is not on the menu; comment will not be listed");
            }
            store.add_comment(dish_id, rating, author, text);
            print_dish(store.state(), dish_id)?;
        }
    }

    Ok(())
}

/// Prints the slice's error and returns `false` when its content should be
/// suppressed.
fn slice_ready<T>(name: &str, slice: &Slice<T>) -> bool {
    if slice.is_loading() {
        println!("{name}: loading...");
        return false;
    }
    if let Some(err) = slice.error_message() {
        println!("{name}: {err}");
        return false;
    }
    true
}

fn print_home(state: &AppState) {
    if slice_ready("dishes", &state.dishes) {
        match state.featured_dish() {
            Some(dish) => println!(
                "Dish of the day: {} ({}) - {}",
                dish.name, dish.price, dish.description
            ),
            None => println!("No featured dish"),
        }
    }
    if slice_ready("promotions", &state.promotions) {
        match state.featured_promotion() {
            Some(promo) => println!(
                "Promotion: {} ({}) - {}",
                promo.name, promo.price, promo.description
            ),
            None => println!("No featured promotion"),
        }
    }
    if let Some(leader) = state.featured_leader() {
        println!("Meet {}, {}", leader.name, leader.designation);
    }
}

fn print_menu(state: &AppState) {
    if !slice_ready("dishes", &state.dishes) {
        return;
    }
    for dish in state.dishes.items() {
        let label = if dish.label.is_empty() {
            String::new()
        } else {
            format!(" [{}]", dish.label)
        };
        println!(
            "{:>3}  {}{}  {}  ({})",
            dish.id, dish.name, label, dish.price, dish.category
        );
    }
}

fn print_dish(state: &AppState, id: DishId) -> Result<()> {
    if !slice_ready("dishes", &state.dishes) {
        return Ok(());
    }
    let Some(dish) = state.dish_by_id(id) else {
        bail!("No dish with id {id}");
    };

    println!("{}\n{}\n", dish.name, dish.description);
    if !slice_ready("comments", &state.comments) {
        return Ok(());
    }
    let comments = state.comments_for_dish(id);
    if comments.is_empty() {
        return Ok(());
    }
    println!("Comments");
    for comment in comments {
        println!("{}", comment.comment);
        println!("-- {}, {}", comment.author, comment.display_date());
    }
    Ok(())
}

fn print_about(state: &AppState) {
    if state.leaders.is_empty() {
        println!("No leaders configured");
    }
    for leader in &state.leaders {
        println!(
            "{} ({})\n{}\n",
            leader.name, leader.designation, leader.description
        );
    }
}
