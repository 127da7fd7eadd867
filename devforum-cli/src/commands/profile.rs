use std::path::Path;

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use shared::{config::ClientConfig, models::UpdateUserRequest};
use web::Theme;

use super::{
    open_app,
    session::{failure_message, print_user, require_session},
};

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Update fields of the signed-in user's profile
    Update(UpdateArgs),
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    #[arg(long)]
    pub display_name: Option<String>,

    #[arg(long)]
    pub bio: Option<String>,

    #[arg(long)]
    pub avatar_url: Option<String>,

    #[arg(long)]
    pub theme_preference: Option<Theme>,
}

impl From<UpdateArgs> for UpdateUserRequest {
    fn from(args: UpdateArgs) -> Self {
        Self {
            display_name: args.display_name,
            bio: args.bio,
            avatar_url: args.avatar_url,
            theme_preference: args.theme_preference.map(|theme| theme.to_string()),
        }
    }
}

pub async fn run(command: ProfileCommand, config: ClientConfig, storage: &Path) -> Result<()> {
    match command {
        ProfileCommand::Update(args) => {
            let changes = UpdateUserRequest::from(args);
            if changes.is_empty() {
                bail!("nothing to update; pass at least one field");
            }

            let app = open_app(config, storage);
            let session = require_session(&app).await?;
            if !session.update_user_info(&changes).await {
                bail!("{}", failure_message(session));
            }
            print_user(session);
            Ok(())
        }
    }
}
