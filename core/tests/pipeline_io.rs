//! End-to-end export/import: a dataset written to disk and loaded back
//! must feed later stages exactly as the in-memory records do.

use crmforge_core::{
    csv_io, AccountGenerator, ActivityGenerator, ContactGenerator, DateWindow, DealGenerator,
    Profile, ProfileKind, RngBank, StageSlot,
};

#[test]
fn loaded_csvs_drive_the_activity_stage_identically() {
    let _ = env_logger::builder().is_test(true).try_init();
    let profile = Profile::for_kind(ProfileKind::B2bSaas);
    let window = DateWindow::default_three_year();
    let bank = RngBank::new(1234);

    let accounts =
        AccountGenerator::new(&profile).generate(50, &mut bank.for_stage(StageSlot::Account));
    let contacts =
        ContactGenerator::new(&profile).generate(&accounts, &mut bank.for_stage(StageSlot::Contact));
    let deals = DealGenerator::new(&profile, window).generate(
        &accounts,
        &contacts,
        &mut bank.for_stage(StageSlot::Deal),
    );
    let direct = ActivityGenerator::new(&profile, window).generate(
        &accounts,
        &contacts,
        &deals,
        &mut bank.for_stage(StageSlot::Activity),
    );

    let dir = tempfile::tempdir().expect("tempdir");
    let accounts_path = dir.path().join("accounts.csv");
    let contacts_path = dir.path().join("contacts.csv");
    let deals_path = dir.path().join("deals.csv");
    csv_io::write_accounts(&accounts_path, &accounts).expect("write accounts");
    csv_io::write_contacts(&contacts_path, &contacts).expect("write contacts");
    csv_io::write_deals(&deals_path, &deals, profile.has_subscription_types())
        .expect("write deals");

    let loaded_accounts = csv_io::read_accounts(&accounts_path).expect("read accounts");
    let loaded_contacts = csv_io::read_contacts(&contacts_path).expect("read contacts");
    let loaded_deals = csv_io::read_deals(&deals_path).expect("read deals");

    let replayed = ActivityGenerator::new(&profile, window).generate(
        &loaded_accounts,
        &loaded_contacts,
        &loaded_deals,
        &mut bank.for_stage(StageSlot::Activity),
    );

    assert_eq!(direct.len(), replayed.len());
    for (a, b) in direct.iter().zip(&replayed) {
        assert_eq!(a.activity_id, b.activity_id);
        assert_eq!(a.subject, b.subject);
        assert_eq!(a.activity_date, b.activity_date);
        assert_eq!(a.account_id, b.account_id);
        assert_eq!(a.contact_id, b.contact_id);
        assert_eq!(a.deal_id, b.deal_id);
        assert_eq!(a.activity_owner, b.activity_owner);
        assert_eq!(a.meeting_start_time, b.meeting_start_time);
    }
}

#[test]
fn all_four_files_export_with_expected_headers() {
    let profile = Profile::for_kind(ProfileKind::Manufacturer);
    let window = DateWindow::default_three_year();
    let bank = RngBank::new(5);

    let accounts =
        AccountGenerator::new(&profile).generate(30, &mut bank.for_stage(StageSlot::Account));
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

    let dir = tempfile::tempdir().expect("tempdir");
    csv_io::write_accounts(&dir.path().join("accounts.csv"), &accounts).expect("accounts");
    csv_io::write_contacts(&dir.path().join("contacts.csv"), &contacts).expect("contacts");
    csv_io::write_deals(&dir.path().join("deals.csv"), &deals, false).expect("deals");
    csv_io::write_activities(&dir.path().join("activities.csv"), &activities)
        .expect("activities");

    let first_line = |name: &str| {
        let text = std::fs::read_to_string(dir.path().join(name)).expect("read file");
        text.lines().next().unwrap_or_default().to_string()
    };

    assert!(first_line("accounts.csv").starts_with("id,company_name,industry"));
    assert!(first_line("contacts.csv").starts_with("contact_id,first_name,last_name"));
    assert!(first_line("deals.csv").starts_with("deal_id,deal_name,account_id"));
    assert!(!first_line("deals.csv").contains("subscription_type"));
    assert!(first_line("activities.csv").starts_with("activity_id,activity_type,subject"));
    assert!(first_line("activities.csv").ends_with("meeting_start_time,meeting_end_time"));
}
