use crate::cli::{Action, BrandAction, DepartmentAction, ProductAction, RunArgs};
use crate::config::ProjectConfig;
use crate::logging;
use anyhow::Context;
use catalog::{
    BrandHandler, CatalogResult, DatabaseConfig, DepartmentHandler, ExecResult, GenericClient,
    ProductHandler, QueryResult,
};
use serde::Serialize;
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use tokio_postgres::Row;
use tokio_postgres::types::ToSql;

/// What a command produced: the JSON to print, plus the failure message when
/// the handler captured one.
#[derive(Debug)]
pub struct Output {
    pub json: serde_json::Value,
    pub failure: Option<String>,
}

impl Output {
    fn query<T: Serialize>(result: QueryResult<T>) -> anyhow::Result<Self> {
        Ok(Self {
            failure: result.status.message().map(str::to_string),
            json: serde_json::to_value(&result)?,
        })
    }

    fn exec(result: ExecResult) -> anyhow::Result<Self> {
        Ok(Self {
            failure: result.status.message().map(str::to_string),
            json: serde_json::to_value(&result)?,
        })
    }
}

pub async fn run(args: RunArgs) -> anyhow::Result<()> {
    let project = ProjectConfig::load_optional(&args.config)?;
    let configured = project.as_ref().map(|p| p.file.log.level.as_str());
    logging::init(&logging::directive(configured, args.verbose))?;

    if let Some(project) = &project {
        tracing::debug!(config = %project.config_path.display(), "loaded config");
    }

    if args.dry_run {
        let client = EchoClient::default();
        dispatch(&client, &args.action).await?;
        for sql in client.into_statements() {
            println!("{sql};");
        }
        return Ok(());
    }

    let config = resolve_database(&args.config, project.as_ref(), args.database)?;
    let client = catalog::connect(&config)
        .await
        .context("failed to connect to database")?;

    let output = dispatch(&client, &args.action).await?;
    println!("{}", serde_json::to_string_pretty(&output.json)?);

    if let Some(message) = output.failure {
        anyhow::bail!("{message}");
    }
    Ok(())
}

/// `--database` first, then `database.url` from the config file, then the
/// process environment.
fn resolve_database(
    config_path: &Path,
    project: Option<&ProjectConfig>,
    database: Option<String>,
) -> anyhow::Result<DatabaseConfig> {
    if let Some(url) = database {
        return Ok(DatabaseConfig::new(url).validated()?);
    }
    if let Some(project) = project {
        let url = project.file.database.url.clone();
        return Ok(DatabaseConfig::new(url).validated()?);
    }
    DatabaseConfig::from_env().with_context(|| {
        format!(
            "database URL is required: pass --database or provide {}",
            config_path.display()
        )
    })
}

pub async fn dispatch<C: GenericClient>(client: &C, action: &Action) -> anyhow::Result<Output> {
    match action {
        Action::Brand(action) => {
            let handler = BrandHandler::new(client);
            match action {
                BrandAction::List => Output::query(handler.list().await),
                BrandAction::Get(id) => Output::query(handler.get(*id).await),
                BrandAction::Create(brand) => Output::exec(handler.create(brand).await),
                BrandAction::Update(brand) => Output::exec(handler.update(brand).await),
            }
        }
        Action::Department(action) => {
            let handler = DepartmentHandler::new(client);
            match action {
                DepartmentAction::List => Output::query(handler.list().await),
                DepartmentAction::Get(id) => Output::query(handler.get(*id).await),
                DepartmentAction::Create(department) => {
                    Output::exec(handler.create(department).await)
                }
                DepartmentAction::Update(department) => {
                    Output::exec(handler.update(department).await)
                }
            }
        }
        Action::Product(action) => {
            let handler = ProductHandler::new(client);
            match action {
                ProductAction::List => Output::query(handler.list().await),
                ProductAction::Get(id) => Output::query(handler.get(*id).await),
                ProductAction::Detailed => Output::query(handler.list_detailed().await),
                ProductAction::ByBrand(id) => Output::query(handler.by_brand(*id).await),
                ProductAction::ByDepartment(id) => {
                    Output::query(handler.by_department(*id).await)
                }
                ProductAction::Create(product) => Output::exec(handler.create(product).await),
                ProductAction::Update(product) => Output::exec(handler.update(product).await),
            }
        }
    }
}

/// Client used by `--dry-run`: remembers each statement and answers with
/// nothing.
#[derive(Debug, Default)]
pub struct EchoClient {
    statements: Mutex<Vec<String>>,
}

impl EchoClient {
    pub fn into_statements(self) -> Vec<String> {
        self.statements
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, sql: &str) {
        self.statements
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sql.to_string());
    }
}

impl GenericClient for EchoClient {
    async fn query(&self, sql: &str, _params: &[&(dyn ToSql + Sync)]) -> CatalogResult<Vec<Row>> {
        self.push(sql);
        Ok(Vec::new())
    }

    async fn execute(&self, sql: &str, _params: &[&(dyn ToSql + Sync)]) -> CatalogResult<u64> {
        self.push(sql);
        Ok(0)
    }
}
