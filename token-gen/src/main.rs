use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::{Map, Value};

/// Mint a shared-secret (HS256) JWT for exercising the token authorizer locally.
///
/// The secret is never defaulted: pass `--secret` or export `JWT_SECRET`
/// (the same variable the authorizer reads).
#[derive(Parser, Debug)]
#[command(name = "token-gen", version, about)]
struct Args {
    /// Subject (`sub`) of the token
    #[arg(long)]
    sub: String,

    /// Emit `sub` as a JSON number (legacy issuers do this)
    #[arg(long, default_value_t = false)]
    numeric_sub: bool,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    role: Option<String>,

    /// Lifetime in seconds. Negative values produce an already-expired token.
    #[arg(long, default_value_t = 3600, allow_hyphen_values = true)]
    expires_in: i64,

    /// HMAC secret
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    secret: String,
}

fn validate_secret(secret: &str) -> Result<(), Box<dyn std::error::Error>> {
    if secret.trim().is_empty() {
        return Err("secret must not be empty".into());
    }
    Ok(())
}

fn now_unix() -> Result<i64, Box<dyn std::error::Error>> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64)
}

fn build_claims(args: &Args, now: i64) -> Result<Map<String, Value>, Box<dyn std::error::Error>> {
    let sub = if args.numeric_sub {
        let n: i64 = args
            .sub
            .parse()
            .map_err(|_| format!("--numeric-sub requires an integer subject, got {:?}", args.sub))?;
        Value::from(n)
    } else {
        Value::from(args.sub.clone())
    };

    let mut claims = Map::new();
    claims.insert("sub".to_string(), sub);
    if let Some(email) = &args.email {
        claims.insert("email".to_string(), Value::from(email.clone()));
    }
    if let Some(role) = &args.role {
        claims.insert("role".to_string(), Value::from(role.clone()));
    }
    claims.insert("iat".to_string(), Value::from(now));
    claims.insert("exp".to_string(), Value::from(now + args.expires_in));

    Ok(claims)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    validate_secret(&args.secret)?;

    let claims = build_claims(&args, now_unix()?)?;
    let token = jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(args.secret.as_bytes()),
    )?;

    println!("{token}");
    Ok(())
}
