//! `mobigo` — command-line access to the Mobigo administration API.
//!
//! # Usage
//!
//! ```text
//! mobigo --url http://localhost:8080 list rides --size 20 --sort dateDepart,desc
//! mobigo get people 18053
//! mobigo search bookings "douala"
//! mobigo --config ~/.config/mobigo/config.toml cancel-ride 12
//! ```
//!
//! Results are printed to stdout as pretty JSON; logs go to stderr.

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use mobigo_client::{ApiClient, ApiConfig, RequestOptions, Search, client::DEFAULT_BASE_URL};
use mobigo_core::{
  Id,
  date::to_wire,
  model::{
    BookingFields, GroupAuthorityFields, GroupFields, GroupMemberFields, MessageFields,
    PaymentFields, PeopleFields, RatingFields, Resource, RideFields, StepFields, VehicleFields,
  },
};
use serde::Deserialize;
use serde_json::Value;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "mobigo", version, about = "Command-line client for the Mobigo admin API")]
struct Args {
  /// Path to a TOML config file (url, timeout_secs).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base URL of the Mobigo server (default: http://localhost:8080).
  #[arg(long, env = "MOBIGO_URL")]
  url: Option<String>,

  /// Request timeout in seconds (default: 30).
  #[arg(long, env = "MOBIGO_TIMEOUT")]
  timeout: Option<u64>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List records of an entity.
  List {
    entity: Entity,
    #[arg(long)]
    page:   Option<u32>,
    #[arg(long)]
    size:   Option<u32>,
    /// Sort criterion such as `id,asc`; may be repeated.
    #[arg(long)]
    sort:   Vec<String>,
  },
  /// Show one record by id (or by name for authorities).
  Get { entity: Entity, id: String },
  /// Full-text search.
  Search { entity: Entity, query: String },
  /// Delete one record by id (or by name for authorities).
  Delete { entity: Entity, id: String },
  /// Mark a ride as completed.
  CompleteRide { id: Id },
  /// Cancel a ride.
  CancelRide { id: Id },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Entity {
  People,
  Vehicles,
  Rides,
  Steps,
  Bookings,
  Payments,
  Ratings,
  Messages,
  Groups,
  GroupMembers,
  GroupAuthorities,
  Authorities,
}

/// Run `$body` with `$fields` bound to the fields type of an id-keyed entity.
/// Authorities are handled by the caller.
macro_rules! with_fields {
  ($entity:expr, $fields:ident => $body:expr) => {
    match $entity {
      Entity::People => { type $fields = PeopleFields; $body }
      Entity::Vehicles => { type $fields = VehicleFields; $body }
      Entity::Rides => { type $fields = RideFields; $body }
      Entity::Steps => { type $fields = StepFields; $body }
      Entity::Bookings => { type $fields = BookingFields; $body }
      Entity::Payments => { type $fields = PaymentFields; $body }
      Entity::Ratings => { type $fields = RatingFields; $body }
      Entity::Messages => { type $fields = MessageFields; $body }
      Entity::Groups => { type $fields = GroupFields; $body }
      Entity::GroupMembers => { type $fields = GroupMemberFields; $body }
      Entity::GroupAuthorities => { type $fields = GroupAuthorityFields; $body }
      Entity::Authorities => bail!("authorities are not id-keyed"),
    }
  };
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url:          Option<String>,
  #[serde(default)]
  timeout_secs: Option<u64>,
}

fn api_config(args: &Args) -> Result<ApiConfig> {
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  Ok(ApiConfig {
    base_url: args
      .url
      .clone()
      .or(file_cfg.url)
      .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
    timeout:  Duration::from_secs(args.timeout.or(file_cfg.timeout_secs).unwrap_or(30)),
  })
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();
  let client = ApiClient::new(api_config(&args)?).context("building HTTP client")?;

  let output = run(&client, args.command).await?;
  println!("{}", serde_json::to_string_pretty(&output)?);
  Ok(())
}

async fn run(client: &ApiClient, command: Command) -> Result<Value> {
  match command {
    Command::List {
      entity,
      page,
      size,
      sort,
    } => {
      let options = RequestOptions {
        page,
        size,
        sort,
        filters: Vec::new(),
      };
      if let Entity::Authorities = entity {
        return Ok(to_wire(&client.authorities().query(&options).await?)?);
      }
      with_fields!(entity, F => list::<F>(client, &options).await)
    }
    Command::Get { entity, id } => {
      if let Entity::Authorities = entity {
        return match client.authorities().find(&id).await? {
          Some(authority) => Ok(to_wire(&authority)?),
          None => bail!("authority {id} not found"),
        };
      }
      let id = parse_id(&id)?;
      with_fields!(entity, F => get::<F>(client, id).await)
    }
    Command::Search { entity, query } => {
      if let Entity::Authorities = entity {
        bail!("authorities cannot be searched");
      }
      with_fields!(entity, F => search::<F>(client, &query).await)
    }
    Command::Delete { entity, id } => {
      if let Entity::Authorities = entity {
        client.authorities().delete(&id).await?;
        return Ok(Value::Null);
      }
      let id = parse_id(&id)?;
      with_fields!(entity, F => {
        client.service::<F>().delete(id).await?;
        Ok(Value::Null)
      })
    }
    Command::CompleteRide { id } => {
      Ok(to_wire(&client.service::<RideFields>().complete(id).await?)?)
    }
    Command::CancelRide { id } => {
      Ok(to_wire(&client.service::<RideFields>().cancel(id).await?)?)
    }
  }
}

fn parse_id(raw: &str) -> Result<Id> {
  raw.parse().with_context(|| format!("{raw:?} is not a numeric id"))
}

async fn list<F: Resource>(client: &ApiClient, options: &RequestOptions) -> Result<Value> {
  let records = client.service::<F>().query(options).await?;
  Ok(to_wire(&records)?)
}

async fn get<F: Resource>(client: &ApiClient, id: Id) -> Result<Value> {
  match client.service::<F>().find(id).await? {
    Some(record) => Ok(to_wire(&record)?),
    None => bail!("{} {id} not found", F::NAME),
  }
}

async fn search<F: Resource>(client: &ApiClient, query: &str) -> Result<Value> {
  let found = client.service::<F>().search(&Search::new(query)).await?;
  Ok(to_wire(&found)?)
}
