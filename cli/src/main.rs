mod api;
mod store;

use std::path::PathBuf;
use std::process::ExitCode;

use accounts::error::{LOGIN_FAILED_MESSAGE, login_failure_message, users_failure_message};
use accounts::{Session, SignInError, StoreError, User};
use clap::{Parser, Subcommand};

use crate::api::ApiClient;
use crate::store::{FileTokenStore, default_token_path};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not logged in; run `amctl login` first")]
    NotLoggedIn,
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "amctl", about = "Access Manager command-line client")]
struct Cli {
    #[arg(long, env = "ACCESS_MANAGER_API_URL", default_value = accounts::DEFAULT_API_BASE_URL)]
    base_url: String,

    #[arg(long, env = "ACCESS_MANAGER_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for a token and store it.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "ACCESS_MANAGER_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// List user accounts.
    Users {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show the signed-in account.
    Whoami {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Forget the stored token. Does not contact the backend.
    Logout,
}

struct CliContext {
    api: ApiClient,
    store: FileTokenStore,
    session: Session,
}

impl CliContext {
    fn token(&self) -> Result<&str, CliError> {
        self.session.token().ok_or(CliError::NotLoggedIn)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let store = FileTokenStore::new(cli.token_file.unwrap_or_else(default_token_path));
    let mut ctx = CliContext {
        api: ApiClient::new(cli.base_url),
        session: Session::restore(&store),
        store,
    };

    let result = match cli.command {
        Command::Login { username, password } => run_login(&mut ctx, &username, &password).await,
        Command::Users { json } => run_users(&ctx, json).await,
        Command::Whoami { json } => run_whoami(&ctx, json).await,
        Command::Logout => run_logout(&mut ctx),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_login(ctx: &mut CliContext, username: &str, password: &str) -> Result<(), CliError> {
    let body = ctx
        .api
        .login(username, password)
        .await
        .map_err(|e| CliError::Rejected(login_failure_message(&e)))?;
    match ctx.session.sign_in(&ctx.store, body.access_token) {
        Ok(()) => println!("Logged in. Token saved to {}", ctx.store.path().display()),
        Err(SignInError::EmptyToken) => return Err(CliError::Rejected(LOGIN_FAILED_MESSAGE.to_owned())),
        // Same as the browser: the login stands, only persistence is lost.
        Err(SignInError::Store(e)) => {
            eprintln!("warning: token not saved, later commands will need a new login: {e}");
            println!("Logged in.");
        }
    }
    Ok(())
}

async fn run_users(ctx: &CliContext, json: bool) -> Result<(), CliError> {
    let users = ctx
        .api
        .users(ctx.token()?)
        .await
        .map_err(|e| CliError::Rejected(users_failure_message(&e)))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&users)?);
    } else {
        print!("{}", render_users(&users));
    }
    Ok(())
}

async fn run_whoami(ctx: &CliContext, json: bool) -> Result<(), CliError> {
    let user = ctx
        .api
        .current_user(ctx.token()?)
        .await
        .map_err(|e| CliError::Rejected(users_failure_message(&e)))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&user)?);
    } else {
        println!("{} <{}>", user.username, user.email);
    }
    Ok(())
}

fn run_logout(ctx: &mut CliContext) -> Result<(), CliError> {
    ctx.session.sign_out(&ctx.store)?;
    println!("Logged out.");
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Plain-text table of users in backend order, or the empty-list message.
fn render_users(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.\n".to_owned();
    }

    let header = ["Username", "Email", "Active", "Superuser", "Roles"];
    let rows: Vec<[String; 5]> = users
        .iter()
        .map(|u| {
            [
                u.username.clone(),
                u.email.clone(),
                yes_no(u.is_active).to_owned(),
                yes_no(u.is_superuser).to_owned(),
                u.role_names(),
            ]
        })
        .collect();

    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_line = |cells: [&str; 5]| {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    };
    push_line(header);
    for row in &rows {
        push_line([&row[0], &row[1], &row[2], &row[3], &row[4]].map(String::as_str));
    }
    out
}
