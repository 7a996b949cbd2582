#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Basic usage example for `strext_date_utils`.
//!
//! This example parses a handful of date strings and shows which candidate
//! pattern accepted each one, including inputs that no pattern round-trips.

use strext_date_utils::{DateParser, parse_date};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Running strext_date_utils basic usage example");

    println!("strext Date Utils - Basic Usage Example\n");
    println!("=======================================\n");

    println!("1. Built-in candidates:");
    for input in [
        "2023-05-16",
        "2023-05-16 02:30 PM",
        "05/16/2023",
        "5/16/2023 02:30:15 PM",
        "5/16/2023",
    ] {
        match parse_date(input, None) {
            Some(parsed) => println!(
                "   {input:<24} -> {} (pattern {})",
                parsed.naive(),
                parsed.pattern()
            ),
            None => println!("   {input:<24} -> no match"),
        }
    }

    println!("\n2. Inputs that do not round-trip:");
    for input in ["02/30/2023", "5/16/2023 2:30 PM", "not a date"] {
        let outcome = DateParser::default().try_parse(input, None);
        match outcome {
            Ok(parsed) => println!("   {input:<24} -> {}", parsed.naive()),
            Err(e) => println!("   {input:<24} -> {e}"),
        }
    }

    println!("\n3. Preferred format:");
    let parsed = parse_date("16.05.2023 14:30", Some("dd.MM.yyyy HH:mm"))
        .ok_or("preferred format did not match")?;
    println!("   16.05.2023 14:30 -> {} (pattern {})", parsed.naive(), parsed.pattern());

    println!("\n4. Custom fallback list:");
    let parser = DateParser::new(["yyyyMMdd", "d MMMM yyyy"])?;
    for input in ["20230516", "16 May 2023"] {
        let parsed = parser.try_parse(input, None)?;
        println!("   {input:<24} -> {}", parsed.naive());
    }

    println!("\n=======================================");
    println!("Example completed successfully!");

    Ok(())
}
