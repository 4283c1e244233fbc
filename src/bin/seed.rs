//! Fills a development database with a user, an organization and sample tickets.
//!
//! Reads `DATABASE_URL` and an optional `SEED_EMAIL`, runs pending migrations and is
//! safe to run repeatedly: the user and organization are reused, only tickets are added.

use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use opsdeck::server::{
    data::{
        organization::OrganizationRepository, ticket::TicketRepository, user::UserRepository,
    },
    error::{config::ConfigError, AppError},
    model::{
        organization::CreateOrganizationParams,
        ticket::{
            completed_at_after_transition, CreateTicketParams, TicketChanges, TicketPriority,
            TicketStatus,
        },
        user::{CreateUserParams, GlobalRole, User},
    },
};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

const DEFAULT_SEED_EMAIL: &str = "seed@opsdeck.dev";
const TICKET_COUNT: usize = 20;
const LOCATIONS: [&str; 4] = ["Server Room", "Main Office", "Warehouse", "Remote"];
const PRIORITIES: [TicketPriority; 4] = [
    TicketPriority::Low,
    TicketPriority::Medium,
    TicketPriority::High,
    TicketPriority::Critical,
];

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;
    let email = std::env::var("SEED_EMAIL").unwrap_or_else(|_| DEFAULT_SEED_EMAIL.to_string());

    let mut opt = ConnectOptions::new(&database_url);
    opt.sqlx_logging(false);
    let db = Database::connect(opt).await?;
    Migrator::up(&db, None).await?;

    let user = seed_user(&db, &email).await?;
    let organization_id = seed_organization(&db, &user).await?;

    for n in 1..=TICKET_COUNT {
        seed_ticket(&db, &user, organization_id, n).await?;
    }

    tracing::info!(
        "Seeded {} tickets into organization {} for {}",
        TICKET_COUNT,
        organization_id,
        user.email
    );

    Ok(())
}

async fn seed_user(db: &DatabaseConnection, email: &str) -> Result<User, AppError> {
    let repo = UserRepository::new(db);

    if let Some(user) = repo.find_by_email(email).await? {
        tracing::info!("Using existing user {}", user.email);
        return Ok(user);
    }

    let user = repo
        .create(CreateUserParams {
            email: email.to_string(),
            name: "Seed User".to_string(),
            role: GlobalRole::Manager,
            avatar_url: String::new(),
        })
        .await?;

    tracing::info!("Created user {}", user.email);

    Ok(user)
}

async fn seed_organization(db: &DatabaseConnection, user: &User) -> Result<Uuid, AppError> {
    let repo = OrganizationRepository::new(db);

    if let Some(existing) = repo.list_for_user(user.id).await?.into_iter().next() {
        tracing::info!("Using organization {}", existing.organization.slug);
        return Ok(existing.organization.id);
    }

    let suffix: [u8; 4] = rand::random();
    let organization = repo
        .create_with_owner(CreateOrganizationParams {
            name: "Seeder Corp".to_string(),
            slug: format!("seeder-corp-{}", hex::encode(suffix)),
            owner_id: user.id,
        })
        .await?;

    tracing::info!("Created organization {}", organization.slug);

    Ok(organization.id)
}

async fn seed_ticket(
    db: &DatabaseConnection,
    user: &User,
    organization_id: Uuid,
    n: usize,
) -> Result<(), AppError> {
    let status = TicketStatus::ALL[rand::random_range(0..TicketStatus::ALL.len())];
    let priority = PRIORITIES[rand::random_range(0..PRIORITIES.len())];
    let location = LOCATIONS[rand::random_range(0..LOCATIONS.len())];
    let assignee_user_id = rand::random_bool(0.5).then_some(user.id);

    let params = CreateTicketParams {
        organization_id,
        title: format!("Fix issue #{} with server", n),
        description: format!("Seeded ticket {} for local development.", n),
        location: location.to_string(),
        priority_id: priority.to_string(),
        reporter_id: user.id,
        assignee_user_id,
        sensitive: false,
        files: Vec::new(),
    };

    let repo = TicketRepository::new(db);
    let ticket = repo.create(&params, priority).await?;

    if status != ticket.status {
        let now = Utc::now();
        repo.update(
            ticket.id,
            TicketChanges {
                title: ticket.title,
                description: ticket.description,
                location: ticket.location,
                status,
                priority: ticket.priority,
                assignee_user_id: ticket.assignee_user_id,
                sensitive: ticket.sensitive,
                updated_at: now,
                completed_at: completed_at_after_transition(
                    ticket.status,
                    status,
                    ticket.completed_at,
                    now,
                ),
            },
        )
        .await?;
    }

    Ok(())
}
