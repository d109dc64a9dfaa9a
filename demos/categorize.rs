use statement_categorizer::{CategorizationService, StoreConfig};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let service = CategorizationService::new(StoreConfig::from_env());
    let args: Vec<String> = env::args().skip(1).collect();

    let response = match args.as_slice() {
        [description, category] => {
            serde_json::to_string_pretty(&service.upsert_category(description, category))?
        }
        [] => serde_json::to_string_pretty(&service.get_categories())?,
        _ => {
            eprintln!("usage: categorize [<description> <category>]");
            std::process::exit(2);
        }
    };

    println!("{response}");
    Ok(())
}
