use clap::{
    Parser,
    Subcommand,
};
use glcore::{
    error::NavigationError,
    navigation::{
        ExecutionContext,
        Navigation,
        Navigator,
    },
};
use glsession::{
    config::Config,
    github::GithubClient,
    resolver::{
        Builder as ResolverBuilder,
        Outcome,
    },
    store::FileStore,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[clap(long, value_name = "GITLIGHT_STORE", env = "GITLIGHT_STORE")]
    store: PathBuf,
    #[clap(flatten)]
    config: Config,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a resolution pass for the URL against the store
    #[command(arg_required_else_help = true)]
    Resolve {
        url: String,
        /// Resolve as if not running inside a browser
        #[arg(long)]
        server: bool,
    },
    /// Show the stored session
    Status,
    /// Clear the stored session
    SignOut,
}

/// Reports navigation side effects rather than performing them.
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn replace_history(&self, path: &str) -> Result<(), NavigationError> {
        println!("history entry replaced with {path}");
        Ok(())
    }

    fn assign(&self, url: &str) -> Result<(), NavigationError> {
        println!("navigated to {url}");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .module("glcore")
        .module("glsession")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let store = FileStore::open(&args.store)?;
    log::debug!("using store at {:?}", store.path());

    let context = match &args.command {
        Commands::Resolve { server: true, .. } => ExecutionContext::Server,
        _ => ExecutionContext::Browser,
    };
    let resolver = ResolverBuilder::new()
        .store(store)
        .identity(GithubClient::new(&args.config))
        .navigator(ConsoleNavigator)
        .context(context)
        .build()?;

    match args.command {
        Commands::Resolve { url, .. } => {
            let navigation = Navigation::from_url(&url);
            match resolver.resolve(&navigation).await? {
                Outcome::Skipped => println!("not resolved outside of a browser"),
                Outcome::Render(session) => {
                    println!("render {}", navigation.path());
                    if let Some(session) = session {
                        println!("{}", serde_json::to_string_pretty(&session.user)?);
                    }
                }
                Outcome::Redirect(redirect) => println!("redirect: {redirect}"),
            }
        }
        Commands::Status => {
            match resolver.current_session()? {
                Some(session) => {
                    let name = session.user.name.as_deref().unwrap_or("-");
                    println!("login: {}", session.user.login);
                    println!("name: {name}");
                    println!("avatar: {}", session.user.avatar);
                }
                None => println!("no session"),
            }
        }
        Commands::SignOut => {
            resolver.sign_out()?;
            println!("session cleared");
        }
    }

    Ok(())
}
