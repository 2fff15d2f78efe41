use std::env;
use std::fs::{create_dir_all, File};
use std::io::{self, stdout, Write};
use std::path::Path;

use chrono::{Duration, NaiveDate};
use rand::seq::IndexedRandom;
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

const PROBABILITY_DUPLICATE: f64 = 0.002;
const PROBABILITY_NEGATIVE: f64 = 0.002;
const PROBABILITY_MALFORMED: f64 = 0.001;

const DATE_RANGE_DAYS: i64 = 600;

const CITIES: &[&str] = &[
    "Delhi", "Greater Mumbai", "Bengaluru", "Ahmedabad", "Hyderabad",
    "Kolkata", "Chennai", "Pune", "Jaipur", "Surat"
];
const CARD_TYPES: &[&str] = &["Gold", "Platinum", "Signature", "Silver"];
const EXP_TYPES: &[&str] = &["Bills", "Entertainment", "Food", "Fuel", "Grocery", "Travel"];
const GENDERS: &[&str] = &["F", "M"];

struct GeneratorConfig {
    num_records: usize,
    output_path: String,
}

impl GeneratorConfig {
    fn from_args() -> Self {
        let args: Vec<String> = env::args().collect();
        let num_records = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(25_000);

        Self {
            num_records,
            output_path: "samples/generated.csv".to_string(),
        }
    }
}

fn main() -> io::Result<()> {
    let config = GeneratorConfig::from_args();

    println!("Generating {} transactions in {}...", config.num_records, config.output_path);

    if let Some(parent) = Path::new(&config.output_path).parent() {
        create_dir_all(parent)?;
    }

    let file = File::create(&config.output_path)?;
    let mut writer = io::BufWriter::new(file);

    writeln!(writer, "transaction_id,transaction_date,city,card_type,exp_type,gender,amount")?;

    let mut rng = rand::rng();
    let start_date = NaiveDate::from_ymd_opt(2013, 10, 4).unwrap();

    for tx_id in 1..=config.num_records as u32 {
        let roll: f64 = rng.random();

        if roll < PROBABILITY_MALFORMED {
            generate_malformed_record(&mut writer, &mut rng, tx_id)?;
        } else if roll < PROBABILITY_MALFORMED + PROBABILITY_DUPLICATE && tx_id > 1 {
            let duplicate_id = rng.random_range(1..tx_id);
            generate_record(&mut writer, &mut rng, duplicate_id, start_date, false)?;
        } else if roll < PROBABILITY_MALFORMED + PROBABILITY_DUPLICATE + PROBABILITY_NEGATIVE {
            generate_record(&mut writer, &mut rng, tx_id, start_date, true)?;
        } else {
            generate_record(&mut writer, &mut rng, tx_id, start_date, false)?;
        }

        if tx_id % 100_000 == 0 {
            print!(".");
            stdout().flush()?;
        }
    }

    println!("\nGeneration complete.");

    Ok(())
}

fn generate_record<W: Write, R: Rng>(writer: &mut W, rng: &mut R, tx_id: u32, start_date: NaiveDate, negative: bool) -> io::Result<()> {
    let date = start_date + Duration::days(rng.random_range(0..DATE_RANGE_DAYS));

    let amount_value: f64 = if negative {
        rng.random_range(-5000.0..-0.01)
    } else {
        rng.random_range(100.0..300_000.0)
    };

    let amount = Decimal::from_f64(amount_value).unwrap_or(Decimal::ZERO).round_dp(2);

    writeln!(
        writer,
        "{},{},{},{},{},{},{}",
        tx_id,
        date,
        CITIES.choose(rng).unwrap(),
        CARD_TYPES.choose(rng).unwrap(),
        EXP_TYPES.choose(rng).unwrap(),
        GENDERS.choose(rng).unwrap(),
        amount
    )
}

fn generate_malformed_record<W: Write, R: Rng>(writer: &mut W, rng: &mut R, tx_id: u32) -> io::Result<()> {
    let malformed = [
        "bad_id,2014-01-01,Delhi,Gold,Bills,F,10.0".to_string(),
        format!("{},not-a-date,Delhi,Gold,Bills,F,10.0", tx_id),
        format!("{},2014-01-01,Delhi,Copper,Bills,F,10.0", tx_id),
        format!("{},2014-01-01,Delhi,Gold,Bills,F,", tx_id),
        format!("{},2014-01-01,Delhi,Gold,Bills,F", tx_id),
    ];

    let record = malformed.choose(rng).unwrap();
    writeln!(writer, "{}", record)
}
