// apps/backcli/src/main.rs

use clap::{Arg, ArgAction, ArgMatches, Command};
use sqlx::MySqlPool;
use std::process;
use tracing_subscriber::EnvFilter;

use user_lib::role_service::RoleService;
use user_lib::repository::RoleRepository;
use user_lib::util::{connect_with_retry, MIGRATOR};

const DATABASE_URL: &str = "DATABASE_URL";
const CONNECT_RETRIES: u32 = 5;

fn cli() -> Command {
    Command::new("backcli")
        .about("User management backend CLI utility")
        .arg(
            Arg::new("migrations")
                .long("migrations")
                .action(ArgAction::SetTrue)
                .help("Execute database migrations"),
        )
        .arg(
            Arg::new("seed-roles")
                .long("seed-roles")
                .value_name("ROLES")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .help("Create the given comma-separated roles, skipping existing ones"),
        )
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let matches = cli().get_matches();

    if let Err(e) = run(&matches).await {
        tracing::error!(error = %e, "backcli failed");
        process::exit(1);
    }
}

async fn run(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let run_migrations = matches.get_flag("migrations");
    let roles = role_names(matches);

    if !run_migrations && roles.is_empty() {
        println!("{}", cli().render_help());
        return Ok(());
    }

    let db_url = std::env::var(DATABASE_URL)
        .map_err(|_| format!("{} must be set", DATABASE_URL))?;
    let pool = connect_with_retry(&db_url, CONNECT_RETRIES).await?;

    if run_migrations {
        run_user_lib_migrations(&pool).await?;
    }

    if !roles.is_empty() {
        seed_roles(pool, &roles).await?;
    }

    Ok(())
}

/// Trimmed, non-empty role names in the order given.
fn role_names(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("seed-roles")
        .map(|values| {
            values
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

async fn run_user_lib_migrations(pool: &MySqlPool) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("running migrations for user-lib");
    MIGRATOR.run(pool).await?;
    tracing::info!("migrations applied successfully");
    Ok(())
}

async fn seed_roles(pool: MySqlPool, roles: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let service = RoleService::new(RoleRepository::new(pool));
    let mut existing: Vec<String> = service
        .get_all_roles()
        .await?
        .into_iter()
        .map(|r| r.role_name)
        .collect();

    for name in roles {
        if existing.contains(name) {
            tracing::info!(role_name = %name, "role already exists, skipping");
            continue;
        }
        let role = service.create_role(name).await?;
        tracing::info!(role_id = %role.id, role_name = %role.role_name, "role seeded");
        existing.push(role.role_name);
    }

    Ok(())
}
