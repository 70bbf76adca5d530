//! Card CLI
//!
//! Evaluates saved card database responses offline: profile cards, list
//! pages, the chemistry style catalog and accelerate types.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "card")]
#[command(about = "Player card ratings, chemistry styles and accelerate types", long_about = None)]
struct Cli {
    /// JSON config file (overrides CARD_CONFIG_PATH)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single player response
    Profile {
        /// Player JSON file (single player endpoint response)
        #[arg(long)]
        file: PathBuf,

        /// Chemistry style name (e.g. "Hunter")
        #[arg(long)]
        style: Option<String>,

        /// Chemistry level: none|low|mid|high, chemistry0..3 or 0..3
        #[arg(long)]
        chemistry: Option<String>,

        /// Also evaluate the player's other card versions
        #[arg(long, default_value = "false")]
        all_versions: bool,

        /// Print JSON instead of text
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Evaluate every player of a list page
    Page {
        /// Page JSON file (paged list endpoint response)
        #[arg(long)]
        file: PathBuf,

        #[arg(long)]
        style: Option<String>,

        #[arg(long)]
        chemistry: Option<String>,

        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// List chemistry styles
    Styles {
        /// Main position; GK lists goalkeeper styles
        #[arg(long)]
        position: Option<String>,

        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Classify an accelerate type from raw values
    Classify {
        /// Height in cm
        #[arg(long)]
        height: u16,

        #[arg(long)]
        agility: u8,

        #[arg(long)]
        acceleration: u8,

        #[arg(long)]
        strength: u8,

        #[arg(long, default_value = "false")]
        json: bool,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    use card_cli::{render_classification, render_profile, render_styles, resolve_selection, CliConfig};
    use card_core::accelerate::{AccelerateClassifier, AccelerateInput};
    use card_core::{chemistry, PlayerProfile};
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => Some(CliConfig::load(&path)?),
        None => CliConfig::from_env()?,
    };

    match cli.command {
        Commands::Profile { file, style, chemistry, all_versions, json } => {
            let response = card_cli::load_player(&file)?;
            let selection = resolve_selection(style, chemistry.as_deref(), config.as_ref())?;

            let mut versions = vec![&response.main_version];
            if all_versions {
                versions.extend(response.other_versions.iter());
            }
            let views: Vec<_> =
                versions.into_iter().map(|player| PlayerProfile::evaluate(player, &selection)).collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else {
                let blocks: Vec<String> = views.iter().map(render_profile).collect();
                println!("{}", blocks.join("\n\n"));
            }
        }

        Commands::Page { file, style, chemistry, json } => {
            let page = card_cli::load_player_page(&file)?;
            let selection = resolve_selection(style, chemistry.as_deref(), config.as_ref())?;
            let views = PlayerProfile::evaluate_page(&page, &selection);

            if json {
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else {
                println!("Page of {} ({} players total)", views.len(), page.total_players);
                for view in &views {
                    println!("\n{}", render_profile(view));
                }
            }
        }

        Commands::Styles { position, json } => {
            let styles = match position.as_deref() {
                Some(position) => chemistry::styles_for_position(position),
                None => chemistry::all_styles().iter().collect(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&styles)?);
            } else {
                println!("{}", render_styles(&styles));
            }
        }

        Commands::Classify { height, agility, acceleration, strength, json } => {
            let input = AccelerateInput::new(height, agility, acceleration, strength);
            let kind = AccelerateClassifier::classify(&input);

            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "accelerate_type": kind,
                        "strength_agility_gap": input.strength_agility_gap(),
                    })
                );
            } else {
                println!("{}", render_classification(height, input.strength_agility_gap(), kind));
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("card CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
