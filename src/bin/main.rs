use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use search_core::core::types::Product;
use search_core::{ProductFilters, SearchConfig, SearchEngine, SortDirection, SortField};
use std::io::{stdin, stdout, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

const DEFAULT_CATALOG_PATH: &str = "catalog.json";

fn main() -> search_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let catalog_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_CATALOG_PATH);
    let config = match args.get(2) {
        Some(path) => Some(SearchConfig::from_json_file(Path::new(path))?),
        None => None,
    };
    let engine = SearchEngine::open(catalog_path, config)?;

    let mut filters = ProductFilters::default();
    let mut status = String::new();

    loop {
        print_ui(&engine, &filters, &status)?;
        status.clear();

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "" => {}
            ":clear" => filters = ProductFilters::default(),
            s if s.starts_with(':') => {
                if let Err(message) = apply_command(&engine, &mut filters, &s[1..]) {
                    status = message;
                }
            }
            s => filters.search = s.to_string(),
        }
    }
    Ok(())
}

/// Applies one `:command`. Returns a message for the status line on bad input.
fn apply_command(engine: &SearchEngine, filters: &mut ProductFilters, command: &str) -> Result<(), String> {
    let (name, arg) = command.split_once(' ').unwrap_or((command, ""));
    let arg = arg.trim();

    match name {
        "cat" => filters.category = non_empty(arg),
        "producer" => filters.producer_id = parse_optional(arg)?,
        "min" => filters.min_price = parse_optional(arg)?,
        "max" => filters.max_price = parse_optional(arg)?,
        "organic" => {
            filters.organic = match arg {
                "yes" => Some(true),
                "no" => Some(false),
                "any" | "" => None,
                other => return Err(format!("organic expects yes|no|any, got '{other}'")),
            }
        }
        "sort" => {
            let mut parts = arg.split_whitespace();
            filters.sort = match parts.next() {
                Some("created") | None => SortField::CreatedAt,
                Some("name") => SortField::Name,
                Some("price") => SortField::Price,
                Some(other) => return Err(format!("unknown sort field '{other}'")),
            };
            filters.direction = match parts.next() {
                Some("asc") => SortDirection::Asc,
                Some("desc") | None => SortDirection::Desc,
                Some(other) => return Err(format!("unknown direction '{other}'")),
            };
        }
        "save" => {
            if arg.is_empty() {
                return Err("save expects a path".to_string());
            }
            engine
                .save_snapshot(Path::new(arg))
                .map_err(|e| format!("could not save snapshot: {e}"))?;
        }
        other => return Err(format!("unknown command ':{other}'")),
    }
    Ok(())
}

fn non_empty(arg: &str) -> Option<String> {
    (!arg.is_empty()).then(|| arg.to_string())
}

fn parse_optional<T: std::str::FromStr>(arg: &str) -> Result<Option<T>, String> {
    if arg.is_empty() {
        return Ok(None);
    }
    arg.parse()
        .map(Some)
        .map_err(|_| format!("could not parse '{arg}'"))
}

fn print_ui(engine: &SearchEngine, filters: &ProductFilters, status: &str) -> std::io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    println!("{}", "Dixis Catalog Search".bold());
    println!("---------------------------------------------------------------");
    println!("Type a query and press [Enter]. 'exit' to quit.");
    println!(":cat <name>  :producer <id>  :min <p>  :max <p>  :organic yes|no|any");
    println!(":sort created|name|price [asc|desc]  :clear  :save <path>\n");

    let facets = engine.facets();
    if !facets.categories.is_empty() {
        println!("Categories: {}", facets.categories.join(", ").dark_grey());
    }
    println!("Filters: {:?}", filters);

    if !filters.search.trim().is_empty() {
        let variants = engine.expand_query(&filters.search);
        println!("Variants -> {}", variants.by_length().join(" | ").cyan());
    }

    let hits = engine.search(filters);
    if hits.is_empty() {
        println!("\n{}", "No products found.".yellow());
    } else {
        println!("\n{} of {} products:", hits.len(), engine.products().len());
        for product in hits {
            print_product(product);
        }
    }

    if !status.is_empty() {
        println!("\n{}", status.red());
    }
    print!("\n> ");
    out.flush()
}

fn print_product(product: &Product) {
    let organic = if product.is_organic { " [bio]".green().to_string() } else { String::new() };
    println!(
        "  #{:<4} {} - {:.2} EUR/{} ({}){}",
        product.id,
        product.name.as_str().bold(),
        product.price,
        product.unit,
        product.producer.display_name(),
        organic
    );
}
