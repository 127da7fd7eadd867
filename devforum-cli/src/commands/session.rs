use std::{
    io::{self, BufRead},
    path::Path,
};

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use rpassword::prompt_password;
use shared::{config::ClientConfig, models::User};
use web::{ForumApp, SessionController};

use super::open_app;

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Log in and store the session token
    Login(LoginArgs),
    /// Create an account, then log in with it
    Register(RegisterArgs),
    /// Forget the stored session token
    Logout,
    /// Show the account behind the stored token
    Me,
    /// Change the signed-in user's password
    Password(PasswordArgs),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long, short)]
    pub username: String,

    /// Read the password from the first line of stdin instead of prompting
    #[arg(long)]
    pub password_stdin: bool,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long, short)]
    pub username: String,

    #[arg(long, short)]
    pub email: String,

    /// Read the password from the first line of stdin instead of prompting
    #[arg(long)]
    pub password_stdin: bool,
}

#[derive(Args, Debug)]
pub struct PasswordArgs {
    /// Read the current and new passwords from the first two lines of stdin
    #[arg(long)]
    pub password_stdin: bool,
}

pub async fn run(command: SessionCommand, config: ClientConfig, storage: &Path) -> Result<()> {
    let app = open_app(config, storage);
    match command {
        SessionCommand::Login(args) => login(&app, args).await,
        SessionCommand::Register(args) => register(&app, args).await,
        SessionCommand::Logout => {
            logout(&app);
            Ok(())
        }
        SessionCommand::Me => me(&app).await,
        SessionCommand::Password(args) => change_password(&app, &args).await,
    }
}

async fn login(app: &ForumApp, args: LoginArgs) -> Result<()> {
    let password = if args.password_stdin {
        read_stdin_lines(1)?.remove(0)
    } else {
        prompt_password("Password: ")?
    };
    if password.is_empty() {
        bail!("password must not be empty");
    }

    let session = app.session();
    if !session.login(&args.username, &password).await {
        bail!("login failed: {}", failure_message(session));
    }
    print_user(session);
    Ok(())
}

async fn register(app: &ForumApp, args: RegisterArgs) -> Result<()> {
    let password = if args.password_stdin {
        read_stdin_lines(1)?.remove(0)
    } else {
        let password = prompt_password("Password: ")?;
        if prompt_password("Confirm password: ")? != password {
            bail!("passwords do not match");
        }
        password
    };
    if password.is_empty() {
        bail!("password must not be empty");
    }

    let session = app.session();
    if !session.register(&args.username, &args.email, &password).await {
        bail!("registration failed: {}", failure_message(session));
    }
    print_user(session);
    Ok(())
}

fn logout(app: &ForumApp) {
    let had_token = app.session().client().tokens().is_present();
    app.session().logout();
    if had_token {
        println!("Logged out.");
    } else {
        println!("No stored session.");
    }
}

async fn me(app: &ForumApp) -> Result<()> {
    let session = require_session(app).await?;
    print_user(session);
    Ok(())
}

async fn change_password(app: &ForumApp, args: &PasswordArgs) -> Result<()> {
    let session = require_session(app).await?;

    let (current, new) = if args.password_stdin {
        let mut lines = read_stdin_lines(2)?.into_iter();
        (
            lines.next().unwrap_or_default(),
            lines.next().unwrap_or_default(),
        )
    } else {
        let current = prompt_password("Current password: ")?;
        let new = prompt_password("New password: ")?;
        if prompt_password("Confirm new password: ")? != new {
            bail!("passwords do not match");
        }
        (current, new)
    };
    if new.is_empty() {
        bail!("new password must not be empty");
    }

    if !session.change_password(&current, &new).await {
        bail!("{}", failure_message(session));
    }
    println!("Password changed.");
    Ok(())
}

/// Restore the stored session, failing when there is none or it has expired.
pub async fn require_session(app: &ForumApp) -> Result<&SessionController> {
    let session = app.session();
    if !session.client().tokens().is_present() {
        bail!("no active session; run `devforum session login` first");
    }

    session.initialize().await;
    if !session.state().is_authenticated() {
        bail!("{}", failure_message(session));
    }
    Ok(session)
}

pub fn failure_message(session: &SessionController) -> String {
    session
        .state()
        .error
        .clone()
        .unwrap_or_else(|| "unknown error".to_string())
}

pub fn print_user(session: &SessionController) {
    let state = session.state();
    let Some(user) = state.user.as_ref() else {
        return;
    };
    print_profile(user);
}

fn print_profile(user: &User) {
    println!("Logged in as {}", user.display_label());
    println!("username: {}", user.username);
    println!("email: {}", user.email);
    if let Some(bio) = &user.bio {
        println!("bio: {bio}");
    }
    if let Some(avatar_url) = &user.avatar_url {
        println!("avatar: {avatar_url}");
    }
    if let Some(theme) = &user.theme_preference {
        println!("theme preference: {theme}");
    }
    if user.is_admin {
        println!("role: admin");
    }
}

fn read_stdin_lines(count: usize) -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut lines = Vec::with_capacity(count);
    for line in stdin.lock().lines().take(count) {
        lines.push(line?.trim_end_matches(['\r', '\n']).to_string());
    }
    if lines.len() < count {
        bail!("expected {count} line(s) on stdin");
    }
    Ok(lines)
}
