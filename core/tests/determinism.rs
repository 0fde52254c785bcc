//! THE MOST IMPORTANT TEST IN THE PROJECT.
//!
//! Two runs, same seed, same parameters.
//! They must produce byte-identical CSV exports.
//! Any divergence is a blocker — do not merge until fixed.

use std::fs;
use std::path::Path;

use crmforge_core::{
    csv_io, AccountGenerator, ActivityGenerator, ContactGenerator, DateWindow, DealGenerator,
    Profile, ProfileKind, RngBank, StageSlot,
};

fn export_run(seed: u64, kind: ProfileKind, accounts: usize, dir: &Path) {
    let _ = env_logger::builder().is_test(true).try_init();
    let profile = Profile::for_kind(kind);
    let window = DateWindow::default_three_year();
    let bank = RngBank::new(seed);

    let account_rows = AccountGenerator::new(&profile)
        .generate(accounts, &mut bank.for_stage(StageSlot::Account));
    let contact_rows = ContactGenerator::new(&profile)
        .generate(&account_rows, &mut bank.for_stage(StageSlot::Contact));
    let deal_rows = DealGenerator::new(&profile, window).generate(
        &account_rows,
        &contact_rows,
        &mut bank.for_stage(StageSlot::Deal),
    );
    let activity_rows = ActivityGenerator::new(&profile, window).generate(
        &account_rows,
        &contact_rows,
        &deal_rows,
        &mut bank.for_stage(StageSlot::Activity),
    );

    csv_io::write_accounts(&dir.join("accounts.csv"), &account_rows).expect("accounts");
    csv_io::write_contacts(&dir.join("contacts.csv"), &contact_rows).expect("contacts");
    csv_io::write_deals(&dir.join("deals.csv"), &deal_rows, profile.has_subscription_types())
        .expect("deals");
    csv_io::write_activities(&dir.join("activities.csv"), &activity_rows).expect("activities");
}

const FILES: [&str; 4] = ["accounts.csv", "contacts.csv", "deals.csv", "activities.csv"];

#[test]
fn same_seed_produces_identical_exports() {
    const SEED: u64 = 0xDEAD_BEEF_CAFE_1234;

    for kind in [
        ProfileKind::B2bSaas,
        ProfileKind::Manufacturer,
        ProfileKind::Consultancy,
    ] {
        let dir_a = tempfile::tempdir().expect("tempdir a");
        let dir_b = tempfile::tempdir().expect("tempdir b");
        export_run(SEED, kind, 60, dir_a.path());
        export_run(SEED, kind, 60, dir_b.path());

        for file in FILES {
            let a = fs::read(dir_a.path().join(file)).expect("read a");
            let b = fs::read(dir_b.path().join(file)).expect("read b");
            assert_eq!(a, b, "{file} diverged for {kind:?} with identical seeds");
        }
    }
}

#[test]
fn different_seeds_produce_different_datasets() {
    let dir_a = tempfile::tempdir().expect("tempdir a");
    let dir_b = tempfile::tempdir().expect("tempdir b");
    export_run(42, ProfileKind::B2bSaas, 60, dir_a.path());
    export_run(99, ProfileKind::B2bSaas, 60, dir_b.path());

    let a = fs::read(dir_a.path().join("accounts.csv")).expect("read a");
    let b = fs::read(dir_b.path().join("accounts.csv")).expect("read b");
    assert_ne!(a, b, "different seeds produced identical accounts — seed is not being used");
}

#[test]
fn stage_streams_are_isolated() {
    // Regenerating only the activity stage must not disturb deals:
    // the deal stream never sees how many activities were drawn.
    let profile = Profile::for_kind(ProfileKind::B2bSaas);
    let window = DateWindow::default_three_year();
    let bank = RngBank::new(7);

    let accounts =
        AccountGenerator::new(&profile).generate(40, &mut bank.for_stage(StageSlot::Account));
    let contacts =
        ContactGenerator::new(&profile).generate(&accounts, &mut bank.for_stage(StageSlot::Contact));

    let deals_a = DealGenerator::new(&profile, window).generate(
        &accounts,
        &contacts,
        &mut bank.for_stage(StageSlot::Deal),
    );
    // A second deal pass from a fresh stage stream, after activities ran.
    ActivityGenerator::new(&profile, window).generate(
        &accounts,
        &contacts,
        &deals_a,
        &mut bank.for_stage(StageSlot::Activity),
    );
    let deals_b = DealGenerator::new(&profile, window).generate(
        &accounts,
        &contacts,
        &mut bank.for_stage(StageSlot::Deal),
    );

    assert_eq!(deals_a.len(), deals_b.len());
    for (a, b) in deals_a.iter().zip(&deals_b) {
        assert_eq!(a.deal_name, b.deal_name);
        assert_eq!(a.amount, b.amount);
        assert_eq!(a.created_date, b.created_date);
    }
}
