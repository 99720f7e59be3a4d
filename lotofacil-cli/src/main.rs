mod display;
mod export;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;

use lotofacil_data::config::Settings;
use lotofacil_data::models::parse_pool;
use lotofacil_data::source::load_draws;
use lotofacil_engine::analysis::{aggregate, analyze, classify};
use lotofacil_engine::generation::{chunk_size, generate_bounded, sample};
use crate::display::{
    display_final_set, display_generation_summary, display_not_used, display_ranges,
    display_ranking, display_selection, display_tickets,
};

#[derive(Parser)]
#[command(name = "lotofacil", about = "Générateur de grilles et analyse des résultats Lotofácil")]
struct Cli {
    /// Fichier de configuration JSON
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Générer des grilles à partir d'un pool de numéros
    Generate {
        /// Nom de base du fichier CSV exporté
        name: Option<String>,

        /// Numéros du pool (séparés par des espaces)
        #[arg(short, long)]
        numbers: Option<String>,

        /// Nombre de grilles à générer
        #[arg(short, long)]
        tickets: Option<usize>,

        /// Nombre de numéros par grille
        #[arg(short, long, alias = "perticket")]
        per_ticket: Option<usize>,

        /// Seed pour la reproductibilité
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Analyser les numéros les plus sortis
    Analyze {
        /// Fichier JSON des résultats (défaut : data/data.json)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Plus grand numéro du jeu
        #[arg(long)]
        max_number: Option<u32>,

        /// Largeur des tranches de numéros
        #[arg(long)]
        bucket_width: Option<u32>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Command::Generate {
            name,
            numbers,
            tickets,
            per_ticket,
            seed,
        } => cmd_generate(&settings, name, numbers, tickets, per_ticket, seed),
        Command::Analyze {
            file,
            max_number,
            bucket_width,
        } => {
            let mut settings = settings;
            if let Some(file) = file {
                settings.draws_file = file;
            }
            if let Some(max_number) = max_number {
                settings.max_number = max_number;
            }
            if let Some(width) = bucket_width {
                settings.bucket_width = width;
            }
            cmd_analyze(&settings)
        }
    }
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load(path).context("Impossible de charger la configuration"),
        None => Ok(Settings::default()),
    }
}

fn cmd_generate(
    settings: &Settings,
    name: Option<String>,
    numbers: Option<String>,
    tickets: Option<usize>,
    per_ticket: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => prompt_with_default("Nom du fichier à enregistrer", "loteria")?,
    };
    if name.trim().is_empty() {
        bail!("Le nom du fichier ne peut pas être vide");
    }
    let numbers = match numbers {
        Some(n) => n,
        None => prompt("Numéros utilisés dans les combinaisons (séparés par des espaces) : ")?,
    };
    let tickets = match tickets {
        Some(t) => t,
        None => prompt_count("Nombre de grilles à générer : ")?,
    };
    let per_ticket = match per_ticket {
        Some(p) => p,
        None => prompt_count("Nombre de numéros par grille : ")?,
    };

    let pool = parse_pool(&numbers);
    if tickets < 1 {
        bail!("Le nombre de grilles doit être au moins 1");
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .context("Style de progression invalide")?,
    );
    pb.set_message(format!(
        "Énumération des combinaisons de {} parmi {}...",
        per_ticket,
        pool.len()
    ));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    let set = generate_bounded(&pool, per_ticket, settings.max_combinations);
    pb.finish_and_clear();
    let set = set.context("Impossible de générer les combinaisons")?;
    log::info!("{} combinaisons générées", set.len());

    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let sampled = sample(&set, tickets, &mut rng)?;

    let path = export::write_tickets(&settings.export_dir, &name, &sampled, chrono::Local::now())?;

    display_generation_summary(set.len(), chunk_size(set.len(), tickets), sampled.len(), &path);
    display_tickets(&sampled);
    Ok(())
}

fn cmd_analyze(settings: &Settings) -> Result<()> {
    let draws = load_draws(&settings.draws_file).with_context(|| {
        format!("Impossible de lire les résultats {:?}", settings.draws_file)
    })?;
    if draws.is_empty() {
        log::warn!("Aucun tirage dans {:?}", settings.draws_file);
    }

    let table = analyze(&draws);
    let universe = settings.universe();
    let classification = classify(&table, &universe)?;
    let buckets = aggregate(&classification.ranked, settings.bucket_width)?;

    display_ranking(&classification.ranked, draws.len());
    display_not_used(&classification.not_used);
    display_ranges(&buckets);
    display_selection(&classification);
    display_final_set(&classification.final_set);
    Ok(())
}

fn prompt(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Erreur de lecture")?;
    Ok(input.trim().to_string())
}

fn prompt_with_default(msg: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}] : ", msg, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

fn prompt_count(msg: &str) -> Result<usize> {
    loop {
        let input = prompt(msg)?;
        match input.parse::<usize>() {
            Ok(n) if n >= 1 => return Ok(n),
            _ => println!("Entrez un entier positif. Réessayez."),
        }
    }
}
