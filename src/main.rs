mod api;
mod provider;
mod server;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use skive_archetype::archetype::StaticPhraseCatalog;
use skive_archetype::config::EngineConfig;
use skive_archetype::normalize::ratings_from_value;
use skive_archetype::suggest::{
    default_suggestions, sanitize_suggestions, RoleContext, SuggestionKind,
};
use skive_archetype::{
    generate_archetype, generate_consolidated_archetype, ArchetypeResult, Rating, SkiveCategory,
};

#[derive(Parser)]
#[command(name = "skive-archetype", about = "SKIVE competency archetype generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Archetype(ArchetypeArgs),
    Suggest(SuggestArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
struct ArchetypeArgs {
    #[arg(long)]
    ratings: Option<PathBuf>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    consolidated: bool,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct SuggestArgs {
    #[arg(long, default_value = "day_to_day")]
    kind: String,
    #[arg(long, default_value = "")]
    profession: String,
    #[arg(long, default_value = "")]
    department: String,
    #[arg(long, default_value = "")]
    role: String,
    #[arg(long)]
    ai: bool,
    #[arg(long)]
    ai_model: Option<String>,
    #[arg(long)]
    target: Option<usize>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Command::Archetype(args) => run_archetype(args),
        Command::Suggest(args) => run_suggest(args).await,
        Command::Serve(args) => server::serve(args).await,
    }
}

fn run_archetype(args: ArchetypeArgs) -> Result<(), String> {
    let (config, _) = EngineConfig::load(None)?;
    let catalog = StaticPhraseCatalog::seeded();

    let document = read_ratings(args.ratings.as_deref())?;
    let ratings = ratings_from_value(&document, config.scores.policy);

    let scope = match args.category.as_deref() {
        Some(value) => Some(
            SkiveCategory::from_str(value)
                .ok_or_else(|| format!("invalid SKIVE category: {}", value))?,
        ),
        None => None,
    };

    let mut sections: Vec<(String, ArchetypeResult)> = Vec::new();
    if let Some(category) = scope {
        let result = generate_archetype(&ratings, Some(category), &catalog, &config.selection);
        sections.push((category.label().to_string(), result));
    } else if !args.consolidated {
        for category in categories_in_order(&ratings) {
            let result = generate_archetype(&ratings, Some(category), &catalog, &config.selection);
            sections.push((category.label().to_string(), result));
        }
    }
    if scope.is_none() {
        let consolidated = generate_consolidated_archetype(&ratings, &catalog, &config.selection);
        sections.push(("consolidated".to_string(), consolidated));
    }

    if args.json {
        let payload: Vec<serde_json::Value> = sections
            .iter()
            .map(|(name, result)| {
                serde_json::json!({ "scope": name, "archetype": result })
            })
            .collect();
        let text = serde_json::to_string_pretty(&payload)
            .map_err(|err| format!("failed to serialize output: {}", err))?;
        println!("{}", text);
        return Ok(());
    }

    for (name, result) in sections {
        println!("[{}]", name);
        if !result.title.is_empty() {
            println!("Archetype: {}", result.title);
        }
        println!("Narrative: {}", result.narrative);
        if !result.signature.is_empty() {
            println!("Signature: {}", result.signature.join(", "));
        }
        if !result.supporting.is_empty() {
            println!("Supporting: {}", result.supporting.join(", "));
        }
        if !result.foundational.is_empty() {
            println!("Foundational: {}", result.foundational.join(", "));
        }
        println!();
    }

    Ok(())
}

async fn run_suggest(args: SuggestArgs) -> Result<(), String> {
    let (config, _) = EngineConfig::load(None)?;

    let kind = SuggestionKind::from_str(&args.kind)
        .ok_or_else(|| format!("invalid suggestion kind: {}", args.kind))?;
    let context = RoleContext::new(args.profession, args.department, args.role);
    let target = args.target.unwrap_or(config.suggestions.target_count);

    let candidates = if args.ai {
        let client = provider::SuggestionClient::from_env(&config.provider, args.ai_model)
            .ok_or_else(|| "SUGGEST_API_KEY is not set".to_string())?;
        match client.fetch_candidates(kind, &context).await {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(error = %err, "provider failed, using deterministic suggestions");
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    let tokens = context.tokens();
    let fallback = default_suggestions(kind, &context);
    let result = sanitize_suggestions(&candidates, &tokens, target, &fallback)?;

    if args.json {
        let text = serde_json::to_string_pretty(&result)
            .map_err(|err| format!("failed to serialize output: {}", err))?;
        println!("{}", text);
        return Ok(());
    }

    println!("Suggestions ({}):", result.source.label());
    for item in result.items {
        println!("- {}", item);
    }

    Ok(())
}

fn read_ratings(path: Option<&Path>) -> Result<serde_json::Value, String> {
    let contents = match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("failed to read ratings file: {}", err))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("failed reading stdin: {}", err))?;
            buffer
        }
    };

    let trimmed = contents.trim();
    if trimmed.is_empty() {
        return Err("missing ratings: pass --ratings or pipe stdin".to_string());
    }
    serde_json::from_str(trimmed).map_err(|err| format!("invalid ratings JSON: {}", err))
}

fn categories_in_order(ratings: &[Rating]) -> Vec<SkiveCategory> {
    let mut categories = Vec::new();
    for rating in ratings {
        if !categories.contains(&rating.category) {
            categories.push(rating.category);
        }
    }
    categories
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
