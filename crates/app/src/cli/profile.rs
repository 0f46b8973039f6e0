use clap::{Args, Subcommand};
use storefront_app::domain::profiles::models::ProfileChanges;

use crate::cli::{CliConfig, output::print_profile};

#[derive(Debug, Args)]
pub(crate) struct ProfileCommand {
    #[command(subcommand)]
    command: ProfileSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProfileSubcommand {
    /// Show the signed-in user's profile
    Show,
    /// Update profile fields; an empty value clears the field
    Set(SetArgs),
}

#[derive(Debug, Args)]
struct SetArgs {
    #[arg(long)]
    full_name: Option<String>,

    /// Address stamped on new orders
    #[arg(long)]
    delivery_address: Option<String>,

    #[arg(long)]
    phone: Option<String>,
}

impl From<SetArgs> for ProfileChanges {
    fn from(args: SetArgs) -> Self {
        Self {
            full_name: args.full_name,
            delivery_address: args.delivery_address,
            phone: args.phone,
        }
    }
}

pub(crate) async fn run(config: &CliConfig, command: ProfileCommand) -> Result<(), String> {
    let storefront = config.storefront()?;
    let session = config.session(&storefront).await?;
    let profiles = storefront.profiles_service();

    let profile = match command.command {
        ProfileSubcommand::Show => profiles
            .profile(&session)
            .await
            .map_err(|error| format!("failed to load profile: {error}"))?,
        ProfileSubcommand::Set(args) => profiles
            .save_profile(&session, args.into())
            .await
            .map_err(|error| format!("failed to save profile: {error}"))?,
    };

    print_profile(&profile);

    Ok(())
}
