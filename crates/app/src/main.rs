use std::sync::Arc;

use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{ApiConfig, AppServices, AuthService, PracticeApi, ensure_seed_words};
use ui::{App, UiApp, build_app_context};

mod db_url;
mod logging;

use db_url::{normalize_sqlite_url, prepare_sqlite_file};

#[derive(Parser, Debug)]
#[command(name = "caligula")]
#[command(about = "Italian conjugation drills against a Caligula backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Backend base URL, e.g. http://127.0.0.1:8000/api
    #[arg(long, env = "CALIGULA_API_BASE", global = true)]
    api_base: Option<String>,

    /// Where the login session is kept
    #[arg(
        long,
        env = "CALIGULA_DB_URL",
        default_value = "sqlite://caligula.sqlite3",
        global = true
    )]
    db: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Open the desktop window (default)
    Ui,
    /// Log in as a dev user and add the starter verbs if their list is empty
    Seed {
        #[arg(long)]
        user: String,
    },
    /// Print the user behind the stored session
    Whoami,
    /// Forget the stored session
    Logout,
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn api(&self) -> Arc<dyn PracticeApi> {
        self.services.api()
    }

    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn dev_users(&self) -> Vec<String> {
        self.services.dev_users()
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = ApiConfig::from_env();
    if let Some(base) = cli.api_base.filter(|base| !base.trim().is_empty()) {
        config = config.with_base_url(base.trim());
    }
    let db_url = normalize_sqlite_url(&cli.db)?;
    prepare_sqlite_file(&db_url)?;
    tracing::info!(api = %config.base_url, db = %db_url, "starting");

    let app_services = AppServices::new_sqlite(&db_url, config).await?;

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                services: app_services,
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Caligula")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
        }
        Command::Seed { user } => {
            let auth = app_services.auth();
            let user = auth.login(&user).await?;
            let added = ensure_seed_words(app_services.api().as_ref()).await?;
            println!("{}: added {added} word(s)", user.username);
        }
        Command::Whoami => {
            let auth = app_services.auth();
            if auth.restore().await.is_none() {
                println!("not logged in");
                return Ok(());
            }
            let user = auth.whoami().await?;
            println!("{} (id {})", user.username, user.id);
        }
        Command::Logout => {
            app_services.auth().logout().await?;
            println!("logged out");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    logging::init();
    if let Err(err) = run().await {
        tracing::error!(error = %err, "caligula failed");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
