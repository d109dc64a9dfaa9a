use statement_categorizer::{CategoryStore, ExtractorBuilder, StoreConfig, categorize};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(file_path) = args.get(1) else {
        eprintln!("usage: extract_text <statement.txt|statement.pdf>");
        std::process::exit(2);
    };

    let transactions = ExtractorBuilder::new().filename(file_path).extract()?;
    let memory = CategoryStore::new(StoreConfig::from_env()).read_all()?;

    println!("Found {} transactions\n", transactions.len());

    for (i, tx) in categorize(transactions, &memory).iter().enumerate() {
        println!("Transaction {}:", i + 1);
        if let Some(date) = &tx.record.date {
            println!("  Date: {}", date);
        }
        println!("  Description: {}", tx.record.description);
        if let Some(amount) = &tx.record.amount {
            println!("  Amount: {}", amount);
        }
        if let Some(category) = &tx.category {
            println!("  Category: {}", category);
        }
        println!();
    }

    Ok(())
}
