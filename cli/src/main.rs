mod client;
mod output;

use clap::{Args, Parser, Subcommand};
use records::{ApiFailure, Contact, Entity, FormValues, ListQuery, RecordId, SubmitTarget, User};
use tracing_subscriber::EnvFilter;

use crate::client::AdminClient;
use crate::output::render_table;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Api(#[from] ApiFailure),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Parser, Debug)]
#[command(name = "webadmin-cli", about = "Contacts and users admin CLI")]
struct Cli {
    #[arg(long, env = "WEBADMIN_API_BASE_URL", default_value = "http://localhost:8000")]
    base_url: String,

    #[arg(long, env = "WEBADMIN_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Contacts(ContactsCommand),
    Users(UsersCommand),
}

#[derive(Args, Debug)]
struct ContactsCommand {
    #[command(subcommand)]
    command: ContactsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ContactsSubcommand {
    List,
    Get {
        id: RecordId,
    },
    Create(ContactFields),
    Update {
        id: RecordId,
        #[command(flatten)]
        fields: ContactFields,
    },
    Delete {
        id: RecordId,
    },
}

#[derive(Args, Debug)]
struct ContactFields {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    birthday: Option<String>,
    #[arg(long)]
    email: Option<String>,
    /// Comma-separated.
    #[arg(long)]
    phones: Option<String>,
    #[arg(long)]
    address: Option<String>,
}

impl ContactFields {
    fn into_pairs(self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("first_name", self.first_name),
            ("last_name", self.last_name),
            ("birthday", self.birthday),
            ("email", self.email),
            ("phones", self.phones),
            ("address", self.address),
        ]
    }
}

#[derive(Args, Debug)]
struct UsersCommand {
    #[command(subcommand)]
    command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
enum UsersSubcommand {
    List(UserListArgs),
    Get {
        id: RecordId,
    },
    Me,
    Create(UserFields),
    Update {
        id: RecordId,
        #[command(flatten)]
        fields: UserFields,
    },
    Delete {
        id: RecordId,
    },
    Ban {
        id: RecordId,
    },
}

#[derive(Args, Debug)]
struct UserListArgs {
    #[arg(long, default_value_t = records::query::DEFAULT_LIMIT)]
    limit: u8,
    #[arg(long, default_value_t = 0)]
    offset: u32,
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    username: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    birthday: Option<String>,
    #[arg(long)]
    role: Option<String>,
}

impl UserListArgs {
    fn into_query(self) -> ListQuery {
        let filters = [
            ("first_name", self.first_name),
            ("username", self.username),
            ("email", self.email),
            ("birthday", self.birthday),
            ("roles", self.role),
        ];
        filters.into_iter().fold(
            ListQuery::new().with_limit(self.limit).with_offset(self.offset),
            |query, (key, value)| match value {
                Some(value) => query.with_filter(key, &value),
                None => query,
            },
        )
    }
}

#[derive(Args, Debug)]
struct UserFields {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    username: Option<String>,
    #[arg(long)]
    email: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    birthday: Option<String>,
    /// Left unchanged on update when omitted.
    #[arg(long)]
    password: Option<String>,
}

impl UserFields {
    fn into_pairs(self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("first_name", self.first_name),
            ("username", self.username),
            ("email", self.email),
            ("birthday", self.birthday),
            ("password", self.password),
        ]
    }
}

/// One CRUD operation, independent of the entity it targets.
enum EntityOp {
    List(ListQuery),
    Get(RecordId),
    Create(Vec<(&'static str, Option<String>)>),
    Update(RecordId, Vec<(&'static str, Option<String>)>),
    Delete(RecordId),
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = AdminClient::new(cli.base_url, cli.token)?;

    match cli.command {
        Command::Contacts(contacts) => {
            let op = match contacts.command {
                ContactsSubcommand::List => EntityOp::List(ListQuery::new()),
                ContactsSubcommand::Get { id } => EntityOp::Get(id),
                ContactsSubcommand::Create(fields) => EntityOp::Create(fields.into_pairs()),
                ContactsSubcommand::Update { id, fields } => EntityOp::Update(id, fields.into_pairs()),
                ContactsSubcommand::Delete { id } => EntityOp::Delete(id),
            };
            run_entity::<Contact>(&client, op).await
        }
        Command::Users(users) => run_users(&client, users).await,
    }
}

async fn run_users(client: &AdminClient, users: UsersCommand) -> Result<(), CliError> {
    let op = match users.command {
        UsersSubcommand::Me => {
            let me = client.current_user().await?;
            println!("{}", render_table(&[me]));
            return Ok(());
        }
        UsersSubcommand::Ban { id } => {
            let user = client.ban_and_fetch(id).await?;
            println!("{}", render_table(&[user]));
            return Ok(());
        }
        UsersSubcommand::List(args) => EntityOp::List(args.into_query()),
        UsersSubcommand::Get { id } => EntityOp::Get(id),
        UsersSubcommand::Create(fields) => EntityOp::Create(fields.into_pairs()),
        UsersSubcommand::Update { id, fields } => EntityOp::Update(id, fields.into_pairs()),
        UsersSubcommand::Delete { id } => EntityOp::Delete(id),
    };
    run_entity::<User>(client, op).await
}

async fn run_entity<E: Entity>(client: &AdminClient, op: EntityOp) -> Result<(), CliError> {
    match op {
        EntityOp::List(query) => {
            let records: Vec<E> = client.list(&query).await?;
            println!("{}", render_table(&records));
        }
        EntityOp::Get(id) => {
            let record: E = client.fetch(id).await?;
            println!("{}", render_table(&[record]));
        }
        EntityOp::Create(pairs) => {
            let values = overlay(FormValues::blank(E::form_fields()), pairs);
            let saved: E = client.save(SubmitTarget::Create, &values).await?;
            println!("{}", render_table(&[saved]));
        }
        EntityOp::Update(id, pairs) => {
            // PUT replaces the record, so unspecified flags keep the stored values.
            let current: E = client.fetch(id).await?;
            let values = overlay(current.form_values(), pairs);
            let saved: E = client.save(SubmitTarget::Edit(id), &values).await?;
            println!("{}", render_table(&[saved]));
        }
        EntityOp::Delete(id) => {
            client.delete::<E>(id).await?;
            tracing::info!(noun = E::NOUN, id, "deleted");
            println!("deleted {} {id}", E::NOUN);
        }
    }
    Ok(())
}

fn overlay(mut values: FormValues, pairs: Vec<(&'static str, Option<String>)>) -> FormValues {
    for (name, value) in pairs {
        if let Some(value) = value {
            values.set(name, value);
        }
    }
    values
}

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;
