mod app;
mod catalog;
mod config;
mod fetch;
mod filter;
mod logging;
mod selection;
mod ui;

use app::{App, FilterField, Focus};
use catalog::{SkipOption, format_gbp, is_most_efficient, total_price};
use clap::{Parser, Subcommand};
use config::{Config, ConfigOverrides};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use fetch::messages::{CatalogChannels, CatalogMessage};
use fetch::{CatalogClient, load_catalog, spawn_catalog_fetch};
use filter::{FilterState, apply_filters};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

/// TUI browser for skip hire prices by location
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog endpoint, without query string
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Postcode to price skips for
    #[arg(long, global = true)]
    postcode: Option<String>,

    /// Area name sent with the postcode
    #[arg(long, global = true)]
    area: Option<String>,

    /// Log level for the log file (RUST_LOG overrides)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the TUI browser (default)
    Run,
    /// Fetch the catalog once and print the matching skips
    List {
        /// Lowest total price to include
        #[arg(long, default_value_t = filter::DEFAULT_MIN_PRICE)]
        min_price: f64,
        /// Highest total price to include
        #[arg(long, default_value_t = filter::DEFAULT_MAX_PRICE)]
        max_price: f64,
        /// Only skips that may be placed on the road
        #[arg(long)]
        road_only: bool,
        /// Only skips that take heavy waste
        #[arg(long)]
        heavy_waste: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        endpoint: cli.endpoint,
        postcode: cli.postcode,
        area: cli.area,
        log_level: cli.log_level,
    };
    let config = match Config::load(cli.config.as_deref()) {
        Ok(c) => c.apply(overrides),
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            std::process::exit(1);
        }
    };

    match config::data_dir() {
        Ok(dir) => {
            if let Err(e) = logging::init_logging(&dir, &config.log_level) {
                eprintln!("Warning: Failed to initialize logging: {}", e);
            }
        }
        Err(e) => eprintln!("Warning: {}", e.user_message()),
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let channels = CatalogChannels::new();
            let _fetch = spawn_catalog_fetch(CatalogClient::new(config.catalog_url()), channels.tx);

            let mut app = App::new(config.price_step);

            // Init terminal
            let mut terminal = ratatui::init();
            let result = run_app(&mut terminal, &mut app, &channels.rx);
            ratatui::restore();

            if let Err(e) = result {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Commands::List {
            min_price,
            max_price,
            road_only,
            heavy_waste,
            json,
        } => {
            let client = CatalogClient::new(config.catalog_url());
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
            spinner.set_message(format!("Fetching {}", client.url()));
            spinner.enable_steady_tick(std::time::Duration::from_millis(100));

            let options = load_catalog(&client).await;
            spinner.finish_and_clear();

            let filters = FilterState {
                min_price,
                max_price,
                show_road_only: road_only,
                show_heavy_waste: heavy_waste,
            };
            let matching = apply_filters(&options, &filters);
            if json {
                println!("{}", render_json(&matching)?);
            } else {
                print!("{}", render_table(&matching));
            }
        }
    }

    Ok(())
}

fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    rx: &Receiver<CatalogMessage>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.drain_messages(rx);
        terminal.draw(|frame| ui::render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Poll for events with a 250ms timeout
        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_key(app, key);
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // If help is showing, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_focus();
            return;
        }
        _ => {}
    }

    // Nothing to navigate until the catalog is in
    if app.loading {
        return;
    }

    match app.focus {
        Focus::Catalog => handle_catalog_key(app, key),
        Focus::Filters => handle_filters_key(app, key),
    }
}

fn handle_catalog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.list_next(),
        KeyCode::Up | KeyCode::Char('k') => app.list_prev(),
        KeyCode::Char('g') | KeyCode::Home => app.list_first(),
        KeyCode::Char('G') | KeyCode::End => app.list_last(),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_highlighted(),
        KeyCode::Char('c') => app.press_continue(),
        KeyCode::Char('f') => app.focus = Focus::Filters,
        _ => {}
    }
}

fn handle_filters_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.filter_field = app.filter_field.next(),
        KeyCode::Up | KeyCode::Char('k') => app.filter_field = app.filter_field.prev(),
        KeyCode::Right | KeyCode::Char('l') => app.adjust_filter(1.0),
        KeyCode::Left | KeyCode::Char('h') => app.adjust_filter(-1.0),
        KeyCode::PageUp => app.adjust_filter(10.0),
        KeyCode::PageDown => app.adjust_filter(-10.0),
        KeyCode::Char(' ') | KeyCode::Enter => match app.filter_field {
            FilterField::RoadOnly => app.toggle_road_only(),
            FilterField::HeavyWaste => app.toggle_heavy_waste(),
            FilterField::MinPrice | FilterField::MaxPrice => {}
        },
        KeyCode::Char('c') => app.press_continue(),
        _ => {}
    }
}

/// A catalog entry with its derived figures, for `list --json`.
#[derive(Serialize)]
struct ListedSkip<'a> {
    #[serde(flatten)]
    option: &'a SkipOption,
    total_price: f64,
    most_efficient: bool,
}

fn render_json(options: &[SkipOption]) -> serde_json::Result<String> {
    let listed: Vec<ListedSkip> = options
        .iter()
        .map(|option| ListedSkip {
            option,
            total_price: total_price(option),
            most_efficient: is_most_efficient(option),
        })
        .collect();
    serde_json::to_string_pretty(&listed)
}

fn render_table(options: &[SkipOption]) -> String {
    let mut out = format!(
        "{:<8} {:>5} {:>6} {:>10} {:>5} {:>10}  {}\n",
        "ID", "YARDS", "DAYS", "BASE", "VAT", "TOTAL", "NOTES"
    );
    for option in options {
        let mut notes = Vec::new();
        if is_most_efficient(option) {
            notes.push("most-efficient");
        }
        if option.allowed_on_road {
            notes.push("road");
        }
        if option.allows_heavy_waste {
            notes.push("heavy-waste");
        }
        out.push_str(&format!(
            "{:<8} {:>5} {:>6} {:>10} {:>4}% {:>10}  {}\n",
            option.id.to_string(),
            option.size,
            option.hire_period_days,
            format_gbp(option.price_before_vat),
            option.vat,
            format_gbp(total_price(option)),
            notes.join(",")
        ));
    }
    out
}
