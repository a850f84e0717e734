use anyhow::Context;
use catalog::{Brand, Department, Product};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Root,
    Brand,
    Department,
    Product,
}

#[derive(Debug, Clone)]
pub enum Command {
    Help(HelpTopic),
    Run(RunArgs),
}

#[derive(Debug, Clone)]
pub struct RunArgs {
    pub config: PathBuf,
    pub database: Option<String>,
    pub dry_run: bool,
    pub verbose: bool,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Brand(BrandAction),
    Department(DepartmentAction),
    Product(ProductAction),
}

#[derive(Debug, Clone, PartialEq)]
pub enum BrandAction {
    List,
    Get(i32),
    Create(Brand),
    Update(Brand),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DepartmentAction {
    List,
    Get(i32),
    Create(Department),
    Update(Department),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    List,
    Get(i32),
    Detailed,
    ByBrand(i32),
    ByDepartment(i32),
    Create(Product),
    Update(Product),
}

/// Tokens shared by every table command, collected before the action is built.
#[derive(Debug, Default)]
struct Parsed<'a> {
    config: Option<PathBuf>,
    database: Option<String>,
    dry_run: bool,
    verbose: bool,
    help: bool,
    positional: Vec<&'a str>,
    id: Option<&'a str>,
    code: Option<&'a str>,
    name: Option<&'a str>,
    price: Option<&'a str>,
    stock: Option<&'a str>,
    brand: Option<&'a str>,
    department: Option<&'a str>,
}

impl<'a> Parsed<'a> {
    fn into_run(self, action: Action) -> Command {
        Command::Run(RunArgs {
            config: self.config.unwrap_or_else(|| PathBuf::from("catalog.toml")),
            database: self.database,
            dry_run: self.dry_run,
            verbose: self.verbose,
            action,
        })
    }

    fn require(value: Option<&'a str>, flag: &str) -> anyhow::Result<&'a str> {
        value.with_context(|| format!("{flag} is required"))
    }

    fn id(&self) -> anyhow::Result<i32> {
        parse_int(Self::require(self.id, "--id")?, "--id")
    }

    fn code(&self) -> anyhow::Result<String> {
        Ok(Self::require(self.code, "--code")?.to_string())
    }

    fn name(&self) -> anyhow::Result<String> {
        Ok(Self::require(self.name, "--name")?.to_string())
    }
}

pub fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut it = args.iter().skip(1);
    let Some(first) = it.next() else {
        return Ok(Command::Help(HelpTopic::Root));
    };

    let (topic, table) = match first.as_str() {
        "-h" | "--help" | "help" => return Ok(Command::Help(HelpTopic::Root)),
        "brand" => (HelpTopic::Brand, first.as_str()),
        "department" => (HelpTopic::Department, first.as_str()),
        "product" => (HelpTopic::Product, first.as_str()),
        _ => anyhow::bail!("unknown command: {first}"),
    };

    let parsed = collect(it.map(|s| s.as_str()))?;
    if parsed.help {
        return Ok(Command::Help(topic));
    }

    let action = match table {
        "brand" => Action::Brand(parse_brand(&parsed)?),
        "department" => Action::Department(parse_department(&parsed)?),
        _ => Action::Product(parse_product(&parsed)?),
    };

    Ok(parsed.into_run(action))
}

fn collect<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Parsed<'a>> {
    let mut parsed = Parsed::default();

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => parsed.help = true,
            "-v" | "--verbose" => parsed.verbose = true,
            "--dry-run" => parsed.dry_run = true,
            "--config" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--config requires a value");
                };
                parsed.config = Some(PathBuf::from(v));
            }
            _ if token.starts_with("--config=") => {
                parsed.config = Some(PathBuf::from(token.trim_start_matches("--config=")));
            }
            "--database" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--database requires a value");
                };
                parsed.database = Some(v.to_string());
            }
            _ if token.starts_with("--database=") => {
                parsed.database = Some(token.trim_start_matches("--database=").to_string());
            }
            "--id" | "--code" | "--name" | "--price" | "--stock" | "--brand" | "--department" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("{token} requires a value");
                };
                let slot = match token {
                    "--id" => &mut parsed.id,
                    "--code" => &mut parsed.code,
                    "--name" => &mut parsed.name,
                    "--price" => &mut parsed.price,
                    "--stock" => &mut parsed.stock,
                    "--brand" => &mut parsed.brand,
                    _ => &mut parsed.department,
                };
                *slot = Some(v);
            }
            other if other.starts_with('-') => anyhow::bail!("unknown argument: {other}"),
            other => parsed.positional.push(other),
        }
    }

    Ok(parsed)
}

fn parse_int(v: &str, what: &str) -> anyhow::Result<i32> {
    v.parse()
        .with_context(|| format!("{what} must be an integer, got {v:?}"))
}

/// `get <ID>` style lookups: exactly one positional id after the action.
fn lookup_id(parsed: &Parsed<'_>) -> anyhow::Result<i32> {
    match parsed.positional.as_slice() {
        [_, id] => parse_int(id, "id"),
        [action] => anyhow::bail!("{action} requires an id"),
        [_, _, extra, ..] => anyhow::bail!("unexpected argument: {extra}"),
        [] => anyhow::bail!("missing action"),
    }
}

fn no_extra(parsed: &Parsed<'_>) -> anyhow::Result<()> {
    if let Some(extra) = parsed.positional.get(1) {
        anyhow::bail!("unexpected argument: {extra}");
    }
    Ok(())
}

fn parse_brand(parsed: &Parsed<'_>) -> anyhow::Result<BrandAction> {
    let action = parsed.positional.first().copied().unwrap_or("list");
    match action {
        "list" => no_extra(parsed).map(|_| BrandAction::List),
        "get" => lookup_id(parsed).map(BrandAction::Get),
        "create" | "update" => {
            no_extra(parsed)?;
            let brand = Brand {
                id: parsed.id()?,
                code: parsed.code()?,
                name: parsed.name()?,
            };
            Ok(if action == "create" {
                BrandAction::Create(brand)
            } else {
                BrandAction::Update(brand)
            })
        }
        other => anyhow::bail!("unknown brand action: {other}"),
    }
}

fn parse_department(parsed: &Parsed<'_>) -> anyhow::Result<DepartmentAction> {
    let action = parsed.positional.first().copied().unwrap_or("list");
    match action {
        "list" => no_extra(parsed).map(|_| DepartmentAction::List),
        "get" => lookup_id(parsed).map(DepartmentAction::Get),
        "create" | "update" => {
            no_extra(parsed)?;
            let department = Department {
                id: parsed.id()?,
                name: parsed.name()?,
            };
            Ok(if action == "create" {
                DepartmentAction::Create(department)
            } else {
                DepartmentAction::Update(department)
            })
        }
        other => anyhow::bail!("unknown department action: {other}"),
    }
}

fn parse_product(parsed: &Parsed<'_>) -> anyhow::Result<ProductAction> {
    let action = parsed.positional.first().copied().unwrap_or("list");
    match action {
        "list" => no_extra(parsed).map(|_| ProductAction::List),
        "detailed" => no_extra(parsed).map(|_| ProductAction::Detailed),
        "get" => lookup_id(parsed).map(ProductAction::Get),
        "by-brand" => lookup_id(parsed).map(ProductAction::ByBrand),
        "by-department" => lookup_id(parsed).map(ProductAction::ByDepartment),
        "create" | "update" => {
            no_extra(parsed)?;
            let price = Parsed::require(parsed.price, "--price")?;
            let product = Product {
                id: parsed.id()?,
                code: parsed.code()?,
                name: parsed.name()?,
                price: price
                    .parse::<Decimal>()
                    .with_context(|| format!("--price must be a decimal, got {price:?}"))?,
                stock: parse_int(Parsed::require(parsed.stock, "--stock")?, "--stock")?,
                brand_id: parse_int(Parsed::require(parsed.brand, "--brand")?, "--brand")?,
                department_id: parse_int(
                    Parsed::require(parsed.department, "--department")?,
                    "--department",
                )?,
                brand: None,
                department: None,
            };
            Ok(if action == "create" {
                ProductAction::Create(product)
            } else {
                ProductAction::Update(product)
            })
        }
        other => anyhow::bail!("unknown product action: {other}"),
    }
}

pub fn print_help(topic: HelpTopic) {
    match topic {
        HelpTopic::Root => {
            println!(
                "\
catalog - query and edit the product catalog

USAGE:
  catalog <TABLE> [ACTION] [OPTIONS]

TABLES:
  brand         Brands (TB_BRAND)
  department    Departments (TB_DEPARTMENT)
  product       Products (TB_PRODUCT)

GLOBAL OPTIONS:
  --config <FILE>       Config file path (default: catalog.toml)
  --database <URL>      Override database.url from config
  --dry-run             Print the SQL instead of running it
  -v, --verbose         Log every statement to stderr
  -h, --help            Print help

Run `catalog <table> --help` for more."
            );
        }
        HelpTopic::Brand => {
            println!(
                "\
USAGE:
  catalog brand list
  catalog brand get <ID>
  catalog brand create --id <ID> --code <CODE> --name <NAME>
  catalog brand update --id <ID> --code <CODE> --name <NAME>"
            );
        }
        HelpTopic::Department => {
            println!(
                "\
USAGE:
  catalog department list
  catalog department get <ID>
  catalog department create --id <ID> --name <NAME>
  catalog department update --id <ID> --name <NAME>"
            );
        }
        HelpTopic::Product => {
            println!(
                "\
USAGE:
  catalog product list
  catalog product get <ID>
  catalog product detailed
  catalog product by-brand <BRAND_ID>
  catalog product by-department <DEPARTMENT_ID>
  catalog product create <FIELDS>
  catalog product update <FIELDS>

FIELDS:
  --id <ID> --code <CODE> --name <NAME> --price <DECIMAL>
  --stock <N> --brand <BRAND_ID> --department <DEPARTMENT_ID>

`detailed` includes each product's brand and, when present, its department."
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        std::iter::once("catalog")
            .chain(tokens.iter().copied())
            .map(str::to_string)
            .collect()
    }

    fn run_args(tokens: &[&str]) -> RunArgs {
        match parse_args(&args(tokens)).unwrap() {
            Command::Run(run) => run,
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn no_arguments_prints_root_help() {
        let cmd = parse_args(&args(&[])).unwrap();
        assert!(matches!(cmd, Command::Help(HelpTopic::Root)));
    }

    #[test]
    fn table_help() {
        let cmd = parse_args(&args(&["product", "get", "--help"])).unwrap();
        assert!(matches!(cmd, Command::Help(HelpTopic::Product)));
    }

    #[test]
    fn list_is_the_default_action() {
        let run = run_args(&["brand"]);
        assert_eq!(run.action, Action::Brand(BrandAction::List));
        assert_eq!(run.config, PathBuf::from("catalog.toml"));
        assert!(!run.dry_run);
    }

    #[test]
    fn parse_product_get_with_overrides() {
        let run = run_args(&[
            "product",
            "get",
            "5",
            "--config=conf/catalog.toml",
            "--database",
            "postgres://localhost/shop",
            "--dry-run",
        ]);
        assert_eq!(run.action, Action::Product(ProductAction::Get(5)));
        assert_eq!(run.config, PathBuf::from("conf/catalog.toml"));
        assert_eq!(run.database.as_deref(), Some("postgres://localhost/shop"));
        assert!(run.dry_run);
    }

    #[test]
    fn parse_product_create() {
        let run = run_args(&[
            "product",
            "create",
            "--id",
            "5",
            "--code",
            "SHO-01",
            "--name",
            "Shoes",
            "--price",
            "19.99",
            "--stock",
            "12",
            "--brand",
            "1",
            "--department",
            "2",
        ]);
        let Action::Product(ProductAction::Create(product)) = run.action else {
            panic!("expected product create");
        };
        assert_eq!(product.price, Decimal::new(1999, 2));
        assert_eq!(product.brand_id, 1);
        assert_eq!(product.department_id, 2);
    }

    #[test]
    fn parse_department_update() {
        let run = run_args(&["department", "update", "--id", "2", "--name", "Garden"]);
        assert_eq!(
            run.action,
            Action::Department(DepartmentAction::Update(Department {
                id: 2,
                name: "Garden".to_string(),
            }))
        );
    }

    #[test]
    fn missing_field_is_reported() {
        let err = parse_args(&args(&["brand", "create", "--id", "1", "--name", "Acme"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "--code is required");
    }

    #[test]
    fn bad_id_is_reported() {
        let err = parse_args(&args(&["product", "by-brand", "abc"])).unwrap_err();
        assert!(err.to_string().contains("id must be an integer"));
    }

    #[test]
    fn get_requires_an_id() {
        let err = parse_args(&args(&["brand", "get"])).unwrap_err();
        assert_eq!(err.to_string(), "get requires an id");
    }

    #[test]
    fn unknown_table_and_flag() {
        assert!(parse_args(&args(&["supplier"])).is_err());
        let err = parse_args(&args(&["brand", "--limit", "3"])).unwrap_err();
        assert_eq!(err.to_string(), "unknown argument: --limit");
    }
}
