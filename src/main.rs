use abno_catalog::{cli, config, error, render, session, store};
use abno_catalog::client::CatalogClient;
use abno_catalog_common::{
    Action, DetailTab, FavoritesStore, KeyValueStore, RatingValue, ensure_user_id,
};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{CatalogError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use session::Session;
use std::time::Duration;
use store::FileStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("✖ {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "abno_catalog=debug,abno_catalog_common=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let base_url = config.resolve_base_url(cli.base_url.as_deref());
    let store = FileStore::open(Config::storage_path()?);

    match cli.command {
        Commands::List { sort, filter, search } => {
            let mut session = Session::new(CatalogClient::new(base_url), &store);
            load_with_spinner(&mut session).await?;

            session.dispatch(Action::SetSort(sort)).await;
            session.dispatch(Action::SetFilter(filter)).await;
            session.dispatch(Action::SetSearch(search)).await;
            print!("{}", render::render_grid(&session.state.grid()));
        }

        Commands::Show { id, breach } => {
            let mut session = Session::new(CatalogClient::new(base_url), &store);
            load_with_spinner(&mut session).await?;

            session.dispatch(Action::OpenDetail(id.clone())).await;
            if breach {
                session.dispatch(Action::SelectTab(DetailTab::Breach)).await;
            }
            let (panel, tabs) = session
                .state
                .detail_panel()
                .ok_or(CatalogError::NotFound(id))?;
            if breach && tabs.active() != DetailTab::Breach {
                println!("(脱走情報はありません)\n");
            }
            print!("{}", render::render_detail(&panel, tabs.active()));
        }

        Commands::Rate { id, rating } => {
            let rating = RatingValue::new(rating)?;
            let mut session = Session::new(CatalogClient::new(base_url), &store);
            load_with_spinner(&mut session).await?;

            if session.state.entity(&id).is_none() {
                return Err(CatalogError::NotFound(id));
            }
            session.dispatch(Action::OpenDetail(id.clone())).await;

            let notices = session.dispatch(Action::Rate { id: id.clone(), rating }).await;
            if let Some(notice) = notices.into_iter().next() {
                return Err(CatalogError::Notice(notice));
            }

            println!("✔ {} に ★{} を送信しました", id, rating);
            println!(
                "  現在の評価: {}",
                abno_catalog_common::format_rating(session.state.ratings.get(&id))
            );
        }

        Commands::Favorite { id } => {
            let mut favorites = FavoritesStore::load(&store);
            favorites.toggle(&id);
            if favorites.is_favorite(&id) {
                println!("★ {} をお気に入りに追加しました", id);
            } else {
                println!("☆ {} をお気に入りから外しました", id);
            }
        }

        Commands::Favorites { clear, yes } => {
            let mut favorites = FavoritesStore::load(&store);

            if clear {
                if favorites.favorites().is_empty() {
                    println!("お気に入りはありません");
                    return Ok(());
                }
                let confirmed = yes
                    || dialoguer::Confirm::new()
                        .with_prompt("Are you sure you want to clear all your favorites?")
                        .default(false)
                        .interact()?;
                if !confirmed {
                    return Err(CatalogError::Cancelled);
                }
                favorites.clear();
                println!("✔ お気に入りを全て削除しました");
            } else if favorites.favorites().is_empty() {
                println!("お気に入りはありません");
            } else {
                for fav in favorites.favorites().ids() {
                    println!("★ {}", fav);
                }
            }
        }

        Commands::Whoami => {
            println!("{}", ensure_user_id(&store));
        }

        Commands::Config { set_base_url, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ 接続先を設定しました");
            }

            if show {
                println!("設定:");
                println!("  接続先: {}", config.resolve_base_url(cli.base_url.as_deref()));
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!("  ストア: {}", store.path().display());
                println!(
                    "  匿名ID: {}",
                    store.load(abno_catalog_common::storage::USER_ID_KEY).as_deref().unwrap_or("未生成")
                );
            }
        }
    }

    Ok(())
}

/// スピナーを出しながらカタログを読み込む
async fn load_with_spinner<S: KeyValueStore>(session: &mut Session<S>) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("カタログを取得中...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = session.load().await;
    spinner.finish_and_clear();
    Ok(result?)
}
