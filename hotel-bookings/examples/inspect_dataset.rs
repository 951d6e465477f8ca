//! Dataset inspector
//!
//! Loads a hotel-bookings CSV and prints what the cleaning pass will work
//! with:
//! - Shape of the raw table
//! - Columns with missing values
//! - Fill values and dropped rows

use hotel_bookings::{clean, formats::CsvLoader};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <csv_file_path>", args[0]);
        println!("\nExample:");
        println!("  {} dataset/hotel_bookings.csv", args[0]);
        return;
    }

    let file_path = Path::new(&args[1]);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║          HOTEL BOOKINGS DATASET INSPECTOR                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!("\nFile: {:?}", file_path);
    println!("────────────────────────────────────────────────────────────────\n");

    let raw = match CsvLoader::load(file_path) {
        Ok(raw) => raw,
        Err(e) => {
            println!("❌ ERROR: {}", e);
            return;
        }
    };

    let (rows, columns) = raw.shape();
    println!("📊 Shape: {} rows × {} columns\n", rows, columns);

    println!("Missing values:");
    let nulls: Vec<_> = raw
        .null_summary()
        .into_iter()
        .filter(|s| s.null_values > 0)
        .collect();
    if nulls.is_empty() {
        println!("  (none)");
    }
    for summary in &nulls {
        println!(
            "  {:<32} {:>8} {:>8.2}%",
            summary.column, summary.null_values, summary.percentage
        );
    }

    match clean(&raw) {
        Ok((table, cleaning)) => {
            println!("\nCleaning:");
            println!("  Children fill value: {}", cleaning.fill_values.children);
            println!("  Country fill value:  {}", cleaning.fill_values.country);
            println!("  Dropped (no guests): {}", cleaning.rows_without_guests);
            println!("  Retained:            {}", table.len());
        }
        Err(e) => println!("\n⚠️  Cleaning failed: {}", e),
    }
}
