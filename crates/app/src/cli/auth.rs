use clap::{Args, Subcommand};
use storefront_app::auth::{AuthError, Credentials};
use tracing::warn;

use crate::cli::CliConfig;

#[derive(Debug, Args)]
pub(crate) struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Debug, Subcommand)]
enum AuthSubcommand {
    /// Sign in and remember the session
    SignIn(CredentialsArgs),
    /// Create an account
    SignUp(CredentialsArgs),
    /// Sign out and forget the session
    SignOut,
    /// Show the signed-in user
    Whoami,
}

#[derive(Debug, Args)]
struct CredentialsArgs {
    #[arg(long)]
    email: String,

    #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
    password: String,
}

impl From<CredentialsArgs> for Credentials {
    fn from(args: CredentialsArgs) -> Self {
        Credentials::new(args.email, args.password)
    }
}

pub(crate) async fn run(config: &CliConfig, command: AuthCommand) -> Result<(), String> {
    match command.command {
        AuthSubcommand::SignIn(args) => sign_in(config, args.into()).await,
        AuthSubcommand::SignUp(args) => sign_up(config, args.into()).await,
        AuthSubcommand::SignOut => sign_out(config).await,
        AuthSubcommand::Whoami => whoami(config),
    }
}

async fn sign_in(config: &CliConfig, credentials: Credentials) -> Result<(), String> {
    let storefront = config.storefront()?;
    let mut sessions = config.sessions()?;

    let session = storefront
        .auth
        .sign_in(&credentials)
        .await
        .map_err(|error| format!("sign-in failed: {error}"))?;

    sessions
        .save(&session)
        .map_err(|error| format!("failed to save session: {error}"))?;

    println!("signed in as {}", session.email());

    Ok(())
}

async fn sign_up(config: &CliConfig, credentials: Credentials) -> Result<(), String> {
    let storefront = config.storefront()?;
    let mut sessions = config.sessions()?;

    match storefront.auth.sign_up(&credentials).await {
        Ok(session) => {
            sessions
                .save(&session)
                .map_err(|error| format!("failed to save session: {error}"))?;

            println!("account created, signed in as {}", session.email());

            Ok(())
        }
        Err(AuthError::ConfirmationRequired) => {
            println!("account created; check your inbox to confirm it, then sign in");

            Ok(())
        }
        Err(error) => Err(format!("sign-up failed: {error}")),
    }
}

async fn sign_out(config: &CliConfig) -> Result<(), String> {
    let mut sessions = config.sessions()?;

    let Some(session) = sessions
        .check_session()
        .map_err(|error| format!("failed to read session: {error}"))?
    else {
        println!("not signed in");
        return Ok(());
    };

    if let Err(error) = config.storefront()?.auth.sign_out(&session).await {
        warn!(%error, "remote sign-out failed, forgetting local session anyway");
    }

    sessions
        .clear()
        .map_err(|error| format!("failed to clear session: {error}"))?;

    println!("signed out");

    Ok(())
}

fn whoami(config: &CliConfig) -> Result<(), String> {
    match config
        .sessions()?
        .check_session()
        .map_err(|error| format!("failed to read session: {error}"))?
    {
        Some(session) => {
            println!("email: {}", session.email());
            println!("user_id: {}", session.user.id);
        }
        None => println!("not signed in"),
    }

    Ok(())
}
