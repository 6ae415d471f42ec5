use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::error;

use lunchwheel::errors::LunchwheelError;
use lunchwheel::history::HistoryStore;
use lunchwheel::presenter::{LocalDateStamp, Notification, NotificationSink, ResultPresenter};
use lunchwheel::provider::{FixtureProvider, RestaurantProvider, pick_candidates};
use lunchwheel::settings::Settings;
use lunchwheel::storage::FileBasedStore;
use lunchwheel::wheel::{RenderSurface, SpinController, WheelModel};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Spin the wheel over candidates loaded from a JSON file
    Spin {
        /// JSON file with an array of candidate restaurants
        #[arg(short, long)]
        input: PathBuf,

        #[arg(long, default_value_t = 0.)]
        lat: f64,

        #[arg(long, default_value_t = 0.)]
        lon: f64,
    },
    /// Show past picks, newest first
    History,
    /// Wipe all past picks
    ClearHistory,
    /// Show or change the saved search settings
    Settings {
        /// Search radius in miles
        #[arg(long)]
        distance: Option<f64>,

        /// Price band as "min,max" on the 1-4 scale
        #[arg(long)]
        price: Option<String>,
    },
}

/// Redraws the segment currently facing the pointer on one terminal line.
struct ConsoleSurface;

impl RenderSurface for ConsoleSurface {
    fn render(&mut self, wheel: &WheelModel) {
        print!("\r  > {:<16}", wheel.winning_option().display_label());
        let _ = io::stdout().flush();
    }
}

/// Prints the result dialog to the terminal.
struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn show(&mut self, notification: &Notification) {
        println!("\n{}", notification.title);
        if !notification.body.is_empty() {
            println!("  {}", notification.body);
        }
        if let Some(link) = &notification.link {
            println!("  View on Foursquare: {link}");
        }
    }
}

fn spin(input: PathBuf, lat: f64, lon: f64) -> Result<(), LunchwheelError> {
    let mut rng = rand::rng();
    let store = FileBasedStore::new_default()?;
    let settings = Settings::load(&store);

    let provider = FixtureProvider::new(input);
    let restaurants = provider.search(&settings.to_query(lat, lon)?)?;
    let options = pick_candidates(&restaurants, &mut rng);

    let mut controller = SpinController::new(WheelModel::new(options)?, ConsoleSurface);
    let index = controller.run_to_completion(&mut rng)?;
    let winner = controller.model().options()[index].clone();

    let mut history = HistoryStore::new(store);
    let mut presenter = ResultPresenter::new(ConsoleSink, LocalDateStamp);
    presenter.present(&winner, &mut history, &mut rng)
}

fn show_history() -> Result<(), LunchwheelError> {
    let history = HistoryStore::new(FileBasedStore::new_default()?);
    let entries = history.list()?;
    if entries.is_empty() {
        println!("No picks recorded yet.");
        return Ok(());
    }
    for entry in entries {
        println!("{:<30} {}", entry.name, entry.timestamp);
    }
    Ok(())
}

fn clear_history() -> Result<(), LunchwheelError> {
    let mut history = HistoryStore::new(FileBasedStore::new_default()?);
    history.clear()?;
    ResultPresenter::new(ConsoleSink, LocalDateStamp).confirm_cleared();
    Ok(())
}

fn update_settings(distance: Option<f64>, price: Option<String>) -> Result<(), LunchwheelError> {
    let mut store = FileBasedStore::new_default()?;
    let mut settings = Settings::load(&store);
    if distance.is_some() || price.is_some() {
        if let Some(miles) = distance {
            settings.set_distance(miles)?;
        }
        if let Some(band) = price {
            settings.set_price_band(&band)?;
        }
        settings.save(&mut store)?;
    }
    println!("distance: {} miles", settings.distance_miles);
    println!("price:    {}", settings.price_band);
    Ok(())
}

fn run(command: Commands) -> Result<(), LunchwheelError> {
    match command {
        Commands::Spin { input, lat, lon } => spin(input, lat, lon),
        Commands::History => show_history(),
        Commands::ClearHistory => clear_history(),
        Commands::Settings { distance, price } => update_settings(distance, price),
    }
}

fn main() {
    colog::init();

    let cli = Args::parse();
    if let Err(e) = run(cli.command) {
        error!("{e}");
        std::process::exit(1);
    }
}
