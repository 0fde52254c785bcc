//! dataset-runner: headless CRM dataset generation.
//!
//! Usage:
//!   dataset-runner --seed 12345 --accounts 200 --profile b2b-saas --out-dir ./data
//!   dataset-runner --seed 7 --profile manufacturer --years 2 --end 2026-02-01

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use crmforge_core::{
    csv_io, AccountGenerator, ActivityGenerator, ContactGenerator, DateWindow, DealGenerator,
    Profile, ProfileKind, RngBank, StageSlot,
};
use crmforge_core::profile::Outcome;

#[derive(serde::Serialize)]
struct Manifest {
    generator_version: &'static str,
    seed: u64,
    profile: &'static str,
    account_count: usize,
    window: DateWindow,
    accounts: usize,
    contacts: usize,
    deals: usize,
    activities: usize,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let account_count = parse_arg(&args, "--accounts", 200usize);
    let years = parse_arg(&args, "--years", 3u32);
    let profile_arg = str_arg(&args, "--profile").unwrap_or("b2b-saas");
    let out_dir = PathBuf::from(str_arg(&args, "--out-dir").unwrap_or("./data"));

    if account_count == 0 {
        bail!("--accounts must be at least 1");
    }
    const FLAGS: [&str; 6] = [
        "--seed", "--accounts", "--years", "--profile", "--out-dir", "--end",
    ];
    for arg in args.iter().skip(1).filter(|a| a.starts_with("--")) {
        if !FLAGS.contains(&arg.as_str()) {
            log::warn!("ignoring unknown flag {arg}");
        }
    }

    let kind = ProfileKind::parse(profile_arg)?;
    let profile = Profile::for_kind(kind);

    let window = match str_arg(&args, "--end") {
        Some(end) => {
            let end = NaiveDate::parse_from_str(end, "%Y-%m-%d")
                .with_context(|| format!("--end '{end}' is not a YYYY-MM-DD date"))?;
            DateWindow::years_back(end, years)
        }
        None if args.iter().any(|a| a == "--years") => {
            DateWindow::years_back(DateWindow::default_three_year().end, years)
        }
        None => DateWindow::default_three_year(),
    };

    println!("crmforge — dataset-runner");
    println!("  seed:     {seed}");
    println!("  profile:  {}", profile.name);
    println!("  accounts: {account_count}");
    println!("  window:   {} .. {}", window.start, window.end);
    println!("  out dir:  {}", out_dir.display());
    println!();

    let bank = RngBank::new(seed);
    let accounts = AccountGenerator::new(&profile)
        .generate(account_count, &mut bank.for_stage(StageSlot::Account));
    let contacts =
        ContactGenerator::new(&profile).generate(&accounts, &mut bank.for_stage(StageSlot::Contact));
    let deals = DealGenerator::new(&profile, window).generate(
        &accounts,
        &contacts,
        &mut bank.for_stage(StageSlot::Deal),
    );
    let activities = ActivityGenerator::new(&profile, window).generate(
        &accounts,
        &contacts,
        &deals,
        &mut bank.for_stage(StageSlot::Activity),
    );

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    csv_io::write_accounts(&out_dir.join("accounts.csv"), &accounts)?;
    csv_io::write_contacts(&out_dir.join("contacts.csv"), &contacts)?;
    csv_io::write_deals(
        &out_dir.join("deals.csv"),
        &deals,
        profile.has_subscription_types(),
    )?;
    csv_io::write_activities(&out_dir.join("activities.csv"), &activities)?;

    let manifest = Manifest {
        generator_version: env!("CARGO_PKG_VERSION"),
        seed,
        profile: profile.name,
        account_count,
        window,
        accounts: accounts.len(),
        contacts: contacts.len(),
        deals: deals.len(),
        activities: activities.len(),
    };
    fs::write(
        out_dir.join("manifest.json"),
        serde_json::to_string_pretty(&manifest)?,
    )?;

    print_summary(accounts.len(), &contacts, &deals, activities.len());
    Ok(())
}

fn print_summary(
    accounts: usize,
    contacts: &[crmforge_core::Contact],
    deals: &[crmforge_core::Deal],
    activities: usize,
) {
    let won = deals.iter().filter(|d| d.deal_status == Outcome::Won).count();
    let lost = deals.iter().filter(|d| d.deal_status == Outcome::Lost).count();
    let open = deals.iter().filter(|d| d.deal_status == Outcome::Open).count();
    let won_value: i64 = deals
        .iter()
        .filter(|d| d.deal_status == Outcome::Won)
        .map(|d| d.amount)
        .sum();
    let open_value: i64 = deals
        .iter()
        .filter(|d| d.deal_status == Outcome::Open)
        .map(|d| d.amount)
        .sum();

    println!("=== RUN SUMMARY ===");
    println!("  accounts:    {accounts}");
    println!("  contacts:    {}", contacts.len());
    println!("  deals:       {} ({won} won / {lost} lost / {open} open)", deals.len());
    println!("  won value:   ${won_value}");
    println!("  open value:  ${open_value}");
    println!("  activities:  {activities}");
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
