use std::process;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use learnhub_auth::{
    Role, TokenError, create_access_token, create_refresh_token, decode_refresh_token,
    decode_token,
};
use learnhub_config::JwtConfig;
use learnhub_observability::init_basic_console_logging;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "learnhub-cli")]
#[command(about = "LearnHub CLI - Token tools for operators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign a token for an existing user
    IssueToken {
        /// User id the token refers to
        #[arg(short = 'u', long)]
        user_id: Uuid,

        /// Email address carried in the payload
        #[arg(short = 'e', long)]
        email: String,

        /// STUDENT, TEACHER or ADMIN
        #[arg(short = 'r', long)]
        role: Role,

        /// Issue a refresh token instead of an access token
        #[arg(long)]
        refresh: bool,
    },
    /// Verify a token and print its payload
    InspectToken {
        token: String,

        /// Verify against the refresh secret
        #[arg(long)]
        refresh: bool,
    },
}

fn main() {
    dotenv().ok();
    init_basic_console_logging();

    let cli = Cli::parse();
    let jwt_config = JwtConfig::from_env();

    match cli.command {
        Commands::IssueToken {
            user_id,
            email,
            role,
            refresh,
        } => handle_issue_token(&jwt_config, user_id, &email, role, refresh),
        Commands::InspectToken { token, refresh } => {
            handle_inspect_token(&jwt_config, &token, refresh)
        }
    }
}

fn handle_issue_token(
    jwt_config: &JwtConfig,
    user_id: Uuid,
    email: &str,
    role: Role,
    refresh: bool,
) {
    let issued = if refresh {
        create_refresh_token(user_id, email, role, jwt_config)
    } else {
        create_access_token(user_id, email, role, jwt_config)
    };

    match issued {
        Ok(token) => println!("{token}"),
        Err(e) => {
            eprintln!("❌ Error issuing token: {}", e);
            process::exit(1);
        }
    }
}

fn handle_inspect_token(jwt_config: &JwtConfig, token: &str, refresh: bool) {
    let payload = if refresh {
        decode_refresh_token(token, jwt_config).and_then(|claims| to_json(&claims))
    } else {
        decode_token(token, jwt_config).and_then(|claims| to_json(&claims))
    };

    match payload {
        Ok(json) => println!("{json}"),
        Err(TokenError::Expired) => {
            eprintln!("❌ Token expired");
            process::exit(1);
        }
        Err(TokenError::Malformed) => {
            eprintln!("❌ Invalid token");
            process::exit(1);
        }
    }
}

fn to_json<T: serde::Serialize>(claims: &T) -> Result<String, TokenError> {
    serde_json::to_string_pretty(claims).map_err(|_| TokenError::Malformed)
}
