// ============================================================================
// give-ui - Terminal host for the give-ui server mod
// ============================================================================
// Usage:
//   give-ui server                                   Check the connection
//   give-ui profiles                                 List player profiles
//   give-ui items [--category C] [--search S]        Browse the item catalog
//   give-ui traders --session ID                     Show trader standings
//   give-ui give --session ID --item ID --amount N   Give an item
//   give-ui favorite add ID                          Mark an item as favorite
//   give-ui config set-locale German                 Change the locale
// ============================================================================

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use give_core::{
    apply_favorites, AllItems, ConfigStore, FileConfigStore, HostConfig, Locale, SptClient,
    ViewItem, DEFAULT_SERVER_URL,
};
use serde::Serialize;
use tracing::debug;

/// Give items and manage traders on a running server
#[derive(Parser)]
#[command(name = "give-ui", version, about = "Give items and manage traders on a running server")]
struct Cli {
    /// Server base URL
    #[arg(long, global = true, env = "GIVE_UI_URL", default_value = DEFAULT_SERVER_URL)]
    url: String,

    /// Locale label or code (overrides the stored preference)
    #[arg(long, global = true, env = "GIVE_UI_LOCALE")]
    locale: Option<Locale>,

    /// Path to the config file (default: <config_dir>/give-ui/config.json)
    #[arg(long = "config", global = true)]
    config_path: Option<PathBuf>,

    /// Print view models as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show server version information
    Server,

    /// List player profiles
    Profiles,

    /// List givable items
    Items {
        /// Only items in this category
        #[arg(long)]
        category: Option<String>,

        /// Filter by id or name
        #[arg(long)]
        search: Option<String>,

        /// Only favorite items
        #[arg(long)]
        favorites: bool,
    },

    /// List item categories
    Categories,

    /// List global weapon presets
    Presets,

    /// Show traders for a profile
    Traders {
        #[arg(long, env = "GIVE_UI_SESSION")]
        session: String,
    },

    /// Give an item to a profile
    Give {
        #[arg(long, env = "GIVE_UI_SESSION")]
        session: String,

        #[arg(long)]
        item: String,

        #[arg(long, default_value = "1")]
        amount: i64,
    },

    /// Give a weapon built from a global preset
    GivePreset {
        #[arg(long, env = "GIVE_UI_SESSION")]
        session: String,

        #[arg(long)]
        preset: String,
    },

    /// Set a trader's sales sum and reputation
    UpdateTrader {
        #[arg(long, env = "GIVE_UI_SESSION")]
        session: String,

        /// Trader nickname as known by the server
        #[arg(long)]
        nickname: String,

        #[arg(long)]
        spend: String,

        #[arg(long)]
        rep: String,
    },

    /// Manage favorite items
    Favorite {
        #[command(subcommand)]
        action: FavoriteAction,
    },

    /// Inspect or change stored preferences
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum FavoriteAction {
    Add { item: String },
    Remove { item: String },
    List,
}

#[derive(Subcommand)]
enum ConfigAction {
    Show,
    SetLocale { language: Locale },
    SetCacheFolder { folder: PathBuf },
    ClearCacheFolder,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = FileConfigStore::open(cli.config_path.as_deref())?;
    let config = store.load()?;
    let locale = cli.locale.unwrap_or(config.locale);
    let client = SptClient::new(&cli.url);

    debug!("Server: {}, locale: {}", client.base_url(), locale.code());

    match cli.command {
        Commands::Server => cmd_server(&client, cli.json).await,
        Commands::Profiles => cmd_profiles(&client, cli.json).await,
        Commands::Items {
            category,
            search,
            favorites,
        } => {
            let filter = ItemFilter {
                category,
                search,
                favorites,
            };
            cmd_items(&client, locale, &config, &filter, cli.json).await
        }
        Commands::Categories => cmd_categories(&client, locale, cli.json).await,
        Commands::Presets => cmd_presets(&client, locale, cli.json).await,
        Commands::Traders { session } => cmd_traders(&client, &session, locale, cli.json).await,
        Commands::Give {
            session,
            item,
            amount,
        } => {
            client.give_item(&session, &item, amount).await?;
            println!("Gave {} x {}", amount, item);
            Ok(())
        }
        Commands::GivePreset { session, preset } => {
            client.give_weapon_preset(&session, &preset).await?;
            println!("Gave preset {}", preset);
            Ok(())
        }
        Commands::UpdateTrader {
            session,
            nickname,
            spend,
            rep,
        } => {
            client.update_trader(&session, &nickname, &spend, &rep).await?;
            println!("Updated {} (spend: {}, rep: {})", nickname, spend, rep);
            Ok(())
        }
        Commands::Favorite { action } => cmd_favorite(&store, config, action),
        Commands::Config { action } => cmd_config(&store, config, action),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "give_core=debug,give_ui=debug"
    } else {
        "give_core=info,give_ui=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn cmd_server(client: &SptClient, json: bool) -> Result<()> {
    let info = client
        .server_info()
        .await
        .with_context(|| format!("Could not connect to {}", client.base_url()))?;

    if json {
        return print_json(&info);
    }

    println!("Connected to {}", client.base_url());
    println!("Server version: {}", info.version.as_deref().unwrap_or("-"));
    println!("Mod version:    {}", info.mod_version.as_deref().unwrap_or("-"));
    if let Some(path) = &info.path {
        println!("Server path:    {}", path);
    }
    Ok(())
}

async fn cmd_profiles(client: &SptClient, json: bool) -> Result<()> {
    let profiles = client.load_profiles().await?;

    if json {
        return print_json(&profiles);
    }
    if profiles.is_empty() {
        println!("No profiles found.");
        return Ok(());
    }

    println!("{:<26}  {:<20}  {:<20}  {}", "SESSION", "USERNAME", "NICKNAME", "LEVEL");
    println!("{}", "-".repeat(76));
    for profile in &profiles {
        let (nickname, level) = profile
            .characters
            .pmc
            .info
            .as_ref()
            .map(|info| (info.nickname.as_str(), info.level.to_string()))
            .unwrap_or(("-", "-".to_string()));
        println!(
            "{:<26}  {:<20}  {:<20}  {}",
            profile.session_id(),
            profile.username(),
            nickname,
            level
        );
    }
    println!("\nTotal: {} profiles", profiles.len());
    Ok(())
}

struct ItemFilter {
    category: Option<String>,
    search: Option<String>,
    favorites: bool,
}

impl ItemFilter {
    fn select<'a>(&self, all: &'a AllItems) -> Vec<&'a ViewItem> {
        let mut items = match (&self.category, &self.search) {
            (Some(category), _) => all.in_category(category),
            (None, Some(query)) => all.search(query),
            (None, None) => all.search(""),
        };
        if let (Some(_), Some(query)) = (&self.category, &self.search) {
            let needle = query.to_lowercase();
            items.retain(|item| {
                item.id.to_lowercase().contains(&needle)
                    || item.name.to_lowercase().contains(&needle)
            });
        }
        if self.favorites {
            items.retain(|item| item.favorite);
        }
        items
    }
}

async fn load_items(client: &SptClient, locale: Locale) -> Result<AllItems> {
    client
        .load_items(locale.code())
        .await
        .with_context(|| format!("Failed to load items ({})", locale))
}

async fn cmd_items(
    client: &SptClient,
    locale: Locale,
    config: &HostConfig,
    filter: &ItemFilter,
    json: bool,
) -> Result<()> {
    let mut all = load_items(client, locale).await?;
    apply_favorites(&mut all, config);
    let items = filter.select(&all);

    if json {
        return print_json(&items);
    }
    if items.is_empty() {
        println!("No items found.");
        return Ok(());
    }

    println!("{:<26}  {:<40}  {:<24}  {}", "ID", "NAME", "CATEGORY", "STACK");
    println!("{}", "-".repeat(100));
    for item in &items {
        let star = if item.favorite { "*" } else { " " };
        let name: String = item.name.chars().take(38).collect();
        println!(
            "{:<26}  {}{:<39}  {:<24}  {}",
            item.id, star, name, item.category, item.max_stock
        );
    }
    println!("\nTotal: {} items", items.len());
    Ok(())
}

async fn cmd_categories(client: &SptClient, locale: Locale, json: bool) -> Result<()> {
    let all = load_items(client, locale).await?;

    if json {
        return print_json(&all.categories);
    }
    for category in &all.categories {
        println!("{:<32} {}", category, all.in_category(category).len());
    }
    Ok(())
}

async fn cmd_presets(client: &SptClient, locale: Locale, json: bool) -> Result<()> {
    let all = load_items(client, locale).await?;

    if json {
        return print_json(&all.global_presets);
    }
    println!("{:<26}  {}", "PRESET", "ENCYCLOPEDIA");
    println!("{}", "-".repeat(40));
    for preset in &all.global_presets {
        println!("{:<26}  {}", preset.id, if preset.encyclopedia { "yes" } else { "no" });
    }
    println!("\nTotal: {} presets", all.global_presets.len());
    Ok(())
}

async fn cmd_traders(client: &SptClient, session: &str, locale: Locale, json: bool) -> Result<()> {
    let profiles = client.load_profiles().await?;
    let Some(profile) = profiles.iter().find(|p| p.session_id() == session) else {
        bail!("No profile with session id '{}'", session);
    };

    let traders = client.load_traders(profile, session, locale.code()).await?;

    if json {
        return print_json(&traders);
    }
    if traders.is_empty() {
        println!("No traders available for {}.", profile.username());
        return Ok(());
    }

    println!(
        "{:<26}  {:<16}  {:<16}  {:>8}  {:>14}  {}",
        "ID", "NICKNAME", "LOCALIZED", "REP", "SALES", "LL"
    );
    println!("{}", "-".repeat(92));
    for trader in &traders {
        println!(
            "{:<26}  {:<16}  {:<16}  {:>8}  {:>14}  {}",
            trader.id,
            trader.nickname,
            trader.nickname_locale,
            trader.reputation,
            trader.sales_sum,
            trader.loyalty_level
        );
    }
    Ok(())
}

fn cmd_favorite(store: &dyn ConfigStore, mut config: HostConfig, action: FavoriteAction) -> Result<()> {
    match action {
        FavoriteAction::Add { item } => {
            if config.is_favorite(&item) {
                println!("{} is already a favorite", item);
                return Ok(());
            }
            config.toggle_favorite(&item);
            store.save(&config)?;
            println!("Added {} to favorites", item);
        }
        FavoriteAction::Remove { item } => {
            if !config.is_favorite(&item) {
                println!("{} is not a favorite", item);
                return Ok(());
            }
            config.toggle_favorite(&item);
            store.save(&config)?;
            println!("Removed {} from favorites", item);
        }
        FavoriteAction::List => {
            if config.favorites.is_empty() {
                println!("No favorites.");
            }
            for item in &config.favorites {
                println!("{}", item);
            }
        }
    }
    Ok(())
}

fn cmd_config(store: &dyn ConfigStore, mut config: HostConfig, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            println!("Locale:       {} ({})", config.locale, config.locale.code());
            println!(
                "Cache folder: {}",
                config
                    .cache_folder
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(default)".into())
            );
            println!("Favorites:    {}", config.favorites.len());
            println!(
                "Locales:      {}",
                Locale::ALL
                    .iter()
                    .map(|l| l.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        ConfigAction::SetLocale { language } => {
            if config.set_locale(language) {
                store.save(&config)?;
            }
            println!("Locale set to {}", language);
        }
        ConfigAction::SetCacheFolder { folder } => {
            if !folder.is_dir() {
                bail!("{} is not a directory", folder.display());
            }
            println!("Cache folder set to {}", folder.display());
            config.set_cache_folder(folder);
            store.save(&config)?;
        }
        ConfigAction::ClearCacheFolder => {
            config.clear_cache_folder();
            store.save(&config)?;
            println!("Using the default cache folder");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use give_core::MemoryConfigStore;

    fn all_items() -> AllItems {
        let mut all = AllItems::default();
        for (id, name, category) in [
            ("a", "Bandage", "Medical"),
            ("b", "Salewa", "Medical"),
            ("c", "5.45 BT", "Ammo"),
        ] {
            all.items.insert(
                id.to_string(),
                ViewItem {
                    id: id.to_string(),
                    name: name.to_string(),
                    item_type: "Item".to_string(),
                    description: String::new(),
                    category: category.to_string(),
                    max_stock: 1,
                    favorite: id == "b",
                },
            );
        }
        all
    }

    fn ids(items: Vec<&ViewItem>) -> Vec<&str> {
        items.into_iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();

        let cli = Cli::try_parse_from([
            "give-ui", "--locale", "es-mx", "give", "--session", "s1", "--item", "A", "--amount", "5",
        ])
        .unwrap();
        assert_eq!(cli.locale, Some(Locale::SpanishMexico));
        assert!(matches!(cli.command, Commands::Give { amount: 5, .. }));
    }

    #[test]
    fn test_item_filter() {
        let all = all_items();

        let everything = ItemFilter { category: None, search: None, favorites: false };
        assert_eq!(ids(everything.select(&all)), vec!["c", "a", "b"]);

        let medical = ItemFilter { category: Some("Medical".into()), search: None, favorites: false };
        assert_eq!(ids(medical.select(&all)), vec!["a", "b"]);

        let narrowed = ItemFilter {
            category: Some("Medical".into()),
            search: Some("sale".into()),
            favorites: false,
        };
        assert_eq!(ids(narrowed.select(&all)), vec!["b"]);

        let favorites = ItemFilter { category: None, search: None, favorites: true };
        assert_eq!(ids(favorites.select(&all)), vec!["b"]);
    }

    #[test]
    fn test_favorite_commands_persist() {
        let store = MemoryConfigStore::default();

        cmd_favorite(&store, store.load().unwrap(), FavoriteAction::Add { item: "A".into() }).unwrap();
        assert!(store.load().unwrap().is_favorite("A"));

        cmd_favorite(&store, store.load().unwrap(), FavoriteAction::Remove { item: "A".into() }).unwrap();
        assert!(!store.load().unwrap().is_favorite("A"));
    }

    #[test]
    fn test_config_commands_persist() {
        let store = MemoryConfigStore::default();

        cmd_config(&store, store.load().unwrap(), ConfigAction::SetLocale { language: Locale::Korean }).unwrap();
        assert_eq!(store.load().unwrap().locale, Locale::Korean);

        let dir = tempfile::tempdir().unwrap();
        cmd_config(
            &store,
            store.load().unwrap(),
            ConfigAction::SetCacheFolder { folder: dir.path().to_path_buf() },
        )
        .unwrap();
        assert_eq!(store.load().unwrap().cache_folder.as_deref(), Some(dir.path()));

        cmd_config(&store, store.load().unwrap(), ConfigAction::ClearCacheFolder).unwrap();
        assert!(store.load().unwrap().cache_folder.is_none());

        let missing = dir.path().join("missing");
        assert!(cmd_config(
            &store,
            store.load().unwrap(),
            ConfigAction::SetCacheFolder { folder: missing },
        )
        .is_err());
    }
}
