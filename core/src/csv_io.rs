//! CSV export and import.
//!
//! Writers emit the four dataset files with fixed column orders so
//! diffing two runs is meaningful. Readers validate headers up front
//! (missing required columns fail before any row is parsed) and
//! default the optional ones, so a trimmed file still loads.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use csv::{Reader, StringRecord, Writer};
use log::info;

use crate::account_gen::Account;
use crate::activity_gen::Activity;
use crate::contact_gen::Contact;
use crate::deal_gen::Deal;
use crate::error::{GenError, GenResult};
use crate::profile::Outcome;

const DATE_FORMAT: &str = "%Y-%m-%d";

const ACCOUNT_COLUMNS: [&str; 9] = [
    "id",
    "company_name",
    "industry",
    "employee_count",
    "annual_revenue",
    "region",
    "founded_year",
    "website",
    "description",
];

const CONTACT_COLUMNS: [&str; 9] = [
    "contact_id",
    "first_name",
    "last_name",
    "email",
    "phone",
    "title",
    "department",
    "account_id",
    "contact_owner",
];

const DEAL_COLUMNS: [&str; 13] = [
    "deal_id",
    "deal_name",
    "account_id",
    "contact_id",
    "pipeline",
    "segment",
    "stage",
    "amount",
    "created_date",
    "close_date",
    "deal_status",
    "deal_owner",
    "loss_reason",
];

const ACTIVITY_COLUMNS: [&str; 24] = [
    "activity_id",
    "activity_type",
    "subject",
    "activity_date",
    "account_id",
    "contact_id",
    "deal_id",
    "completed",
    "duration_minutes",
    "notes",
    "activity_owner",
    "note_body",
    "email_subject",
    "email_body",
    "email_direction",
    "email_status",
    "call_notes",
    "call_duration",
    "call_disposition",
    "call_direction",
    "meeting_title",
    "meeting_description",
    "meeting_start_time",
    "meeting_end_time",
];

pub fn write_accounts(path: &Path, accounts: &[Account]) -> GenResult<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(ACCOUNT_COLUMNS)?;
    for a in accounts {
        writer.write_record([
            a.id.to_string(),
            a.company_name.clone(),
            a.industry.clone(),
            a.employee_count.to_string(),
            a.annual_revenue.to_string(),
            a.region.clone(),
            a.founded_year.to_string(),
            a.website.clone(),
            a.description.clone(),
        ])?;
    }
    writer.flush()?;
    info!("wrote {} accounts to {}", accounts.len(), path.display());
    Ok(())
}

pub fn write_contacts(path: &Path, contacts: &[Contact]) -> GenResult<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(CONTACT_COLUMNS)?;
    for c in contacts {
        writer.write_record([
            c.contact_id.to_string(),
            c.first_name.clone(),
            c.last_name.clone(),
            c.email.clone(),
            c.phone.clone(),
            c.title.clone(),
            c.department.clone(),
            c.account_id.to_string(),
            c.contact_owner.clone(),
        ])?;
    }
    writer.flush()?;
    info!("wrote {} contacts to {}", contacts.len(), path.display());
    Ok(())
}

/// The `subscription_type` column is only emitted for business types
/// that have a self-serve motion.
pub fn write_deals(path: &Path, deals: &[Deal], include_subscription_type: bool) -> GenResult<()> {
    let mut writer = Writer::from_path(path)?;

    let mut header: Vec<&str> = DEAL_COLUMNS.to_vec();
    if include_subscription_type {
        header.push("subscription_type");
    }
    writer.write_record(&header)?;

    for d in deals {
        let mut record = vec![
            d.deal_id.to_string(),
            d.deal_name.clone(),
            d.account_id.to_string(),
            d.contact_id.to_string(),
            d.pipeline.clone(),
            d.segment.clone(),
            d.stage.clone(),
            d.amount.to_string(),
            d.created_date.format(DATE_FORMAT).to_string(),
            d.close_date
                .map(|c| c.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            d.deal_status.label().to_string(),
            d.deal_owner.clone(),
            d.loss_reason.clone(),
        ];
        if include_subscription_type {
            record.push(d.subscription_type.clone().unwrap_or_default());
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;
    info!("wrote {} deals to {}", deals.len(), path.display());
    Ok(())
}

pub fn write_activities(path: &Path, activities: &[Activity]) -> GenResult<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(ACTIVITY_COLUMNS)?;
    for a in activities {
        writer.write_record([
            a.activity_id.to_string(),
            a.activity_type.label().to_string(),
            a.subject.clone(),
            a.activity_date.format(DATE_FORMAT).to_string(),
            a.account_id.to_string(),
            a.contact_id.to_string(),
            a.deal_id.map(|d| d.to_string()).unwrap_or_default(),
            if a.completed { "Yes" } else { "No" }.to_string(),
            a.duration_minutes.map(|d| d.to_string()).unwrap_or_default(),
            a.notes.clone(),
            a.activity_owner.clone(),
            a.note_body.clone(),
            a.email_subject.clone(),
            a.email_body.clone(),
            a.email_direction.clone(),
            a.email_status.clone(),
            a.call_notes.clone(),
            a.call_duration.map(|d| d.to_string()).unwrap_or_default(),
            a.call_disposition.clone(),
            a.call_direction.clone(),
            a.meeting_title.clone(),
            a.meeting_description.clone(),
            a.meeting_start_time.clone(),
            a.meeting_end_time.clone(),
        ])?;
    }
    writer.flush()?;
    info!("wrote {} activities to {}", activities.len(), path.display());
    Ok(())
}

/// Header positions for one CSV file, with required-column validation.
struct Columns {
    entity: &'static str,
    index: BTreeMap<String, usize>,
}

impl Columns {
    fn read(entity: &'static str, headers: &StringRecord, required: &[&str]) -> GenResult<Self> {
        let index: BTreeMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().to_string(), i))
            .collect();
        let missing: Vec<String> = required
            .iter()
            .filter(|c| !index.contains_key(**c))
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(GenError::MissingColumns {
                entity,
                columns: missing,
            });
        }
        Ok(Self { entity, index })
    }

    fn get<'r>(&self, record: &'r StringRecord, column: &str) -> &'r str {
        self.index
            .get(column)
            .and_then(|i| record.get(*i))
            .unwrap_or("")
            .trim()
    }

    fn parse_u32(&self, record: &StringRecord, row: usize, column: &'static str) -> GenResult<u32> {
        let value = self.get(record, column);
        value.parse().map_err(|_| self.invalid(row, column, value))
    }

    fn parse_i64_or_zero(
        &self,
        record: &StringRecord,
        row: usize,
        column: &'static str,
    ) -> GenResult<i64> {
        let value = self.get(record, column);
        if value.is_empty() {
            return Ok(0);
        }
        value.parse().map_err(|_| self.invalid(row, column, value))
    }

    fn parse_date(
        &self,
        record: &StringRecord,
        row: usize,
        column: &'static str,
    ) -> GenResult<NaiveDate> {
        let value = self.get(record, column);
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|_| self.invalid(row, column, value))
    }

    fn parse_date_opt(
        &self,
        record: &StringRecord,
        row: usize,
        column: &'static str,
    ) -> GenResult<Option<NaiveDate>> {
        let value = self.get(record, column);
        if value.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Some)
            .map_err(|_| self.invalid(row, column, value))
    }

    fn invalid(&self, row: usize, column: &'static str, value: &str) -> GenError {
        GenError::InvalidField {
            entity: self.entity,
            row,
            column,
            value: value.to_string(),
        }
    }
}

pub fn read_accounts(path: &Path) -> GenResult<Vec<Account>> {
    let mut reader = Reader::from_path(path)?;
    let columns = Columns::read(
        "accounts",
        reader.headers()?,
        &["id", "company_name", "employee_count"],
    )?;

    let mut accounts = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let row = row + 2; // header is line 1
        accounts.push(Account {
            id: columns.parse_u32(&record, row, "id")?,
            company_name: columns.get(&record, "company_name").to_string(),
            industry: columns.get(&record, "industry").to_string(),
            employee_count: columns.parse_u32(&record, row, "employee_count")?,
            annual_revenue: columns.parse_i64_or_zero(&record, row, "annual_revenue")?,
            region: columns.get(&record, "region").to_string(),
            founded_year: columns
                .parse_i64_or_zero(&record, row, "founded_year")? as i32,
            website: columns.get(&record, "website").to_string(),
            description: columns.get(&record, "description").to_string(),
        });
    }
    info!("read {} accounts from {}", accounts.len(), path.display());
    Ok(accounts)
}

pub fn read_contacts(path: &Path) -> GenResult<Vec<Contact>> {
    let mut reader = Reader::from_path(path)?;
    let columns = Columns::read(
        "contacts",
        reader.headers()?,
        &["contact_id", "account_id", "contact_owner"],
    )?;

    let mut contacts = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let row = row + 2;
        contacts.push(Contact {
            contact_id: columns.parse_u32(&record, row, "contact_id")?,
            first_name: columns.get(&record, "first_name").to_string(),
            last_name: columns.get(&record, "last_name").to_string(),
            email: columns.get(&record, "email").to_string(),
            phone: columns.get(&record, "phone").to_string(),
            title: columns.get(&record, "title").to_string(),
            department: columns.get(&record, "department").to_string(),
            account_id: columns.parse_u32(&record, row, "account_id")?,
            contact_owner: columns.get(&record, "contact_owner").to_string(),
        });
    }
    info!("read {} contacts from {}", contacts.len(), path.display());
    Ok(contacts)
}

pub fn read_deals(path: &Path) -> GenResult<Vec<Deal>> {
    let mut reader = Reader::from_path(path)?;
    let columns = Columns::read(
        "deals",
        reader.headers()?,
        &[
            "deal_id",
            "account_id",
            "contact_id",
            "pipeline",
            "segment",
            "stage",
            "deal_status",
            "deal_owner",
            "created_date",
            "close_date",
        ],
    )?;

    let mut deals = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let row = row + 2;
        let status_value = columns.get(&record, "deal_status");
        let deal_status = parse_status(status_value)
            .ok_or_else(|| columns.invalid(row, "deal_status", status_value))?;
        let subscription_type = match columns.get(&record, "subscription_type") {
            "" => None,
            s => Some(s.to_string()),
        };
        deals.push(Deal {
            deal_id: columns.parse_u32(&record, row, "deal_id")?,
            deal_name: columns.get(&record, "deal_name").to_string(),
            account_id: columns.parse_u32(&record, row, "account_id")?,
            contact_id: columns.parse_u32(&record, row, "contact_id")?,
            pipeline: columns.get(&record, "pipeline").to_string(),
            segment: columns.get(&record, "segment").to_string(),
            stage: columns.get(&record, "stage").to_string(),
            amount: columns.parse_i64_or_zero(&record, row, "amount")?,
            created_date: columns.parse_date(&record, row, "created_date")?,
            close_date: columns.parse_date_opt(&record, row, "close_date")?,
            deal_status,
            deal_owner: columns.get(&record, "deal_owner").to_string(),
            loss_reason: columns.get(&record, "loss_reason").to_string(),
            subscription_type,
        });
    }
    info!("read {} deals from {}", deals.len(), path.display());
    Ok(deals)
}

fn parse_status(value: &str) -> Option<Outcome> {
    match value {
        "Won" => Some(Outcome::Won),
        "Lost" => Some(Outcome::Lost),
        "Open" => Some(Outcome::Open),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact_gen::ContactGenerator;
    use crate::dates::DateWindow;
    use crate::deal_gen::DealGenerator;
    use crate::profile::{Profile, ProfileKind};
    use crate::rng::{RngBank, StageSlot};
    use crate::AccountGenerator;
    use std::io::Write as _;

    fn sample(seed: u64, n: usize) -> (Vec<Account>, Vec<Contact>, Vec<Deal>) {
        let profile = Profile::for_kind(ProfileKind::B2bSaas);
        let bank = RngBank::new(seed);
        let accounts =
            AccountGenerator::new(&profile).generate(n, &mut bank.for_stage(StageSlot::Account));
        let contacts = ContactGenerator::new(&profile)
            .generate(&accounts, &mut bank.for_stage(StageSlot::Contact));
        let deals = DealGenerator::new(&profile, DateWindow::default_three_year()).generate(
            &accounts,
            &contacts,
            &mut bank.for_stage(StageSlot::Deal),
        );
        (accounts, contacts, deals)
    }

    #[test]
    fn accounts_survive_a_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.csv");
        let (accounts, _, _) = sample(1, 20);

        write_accounts(&path, &accounts).unwrap();
        let loaded = read_accounts(&path).unwrap();

        assert_eq!(loaded.len(), accounts.len());
        for (a, b) in accounts.iter().zip(&loaded) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.company_name, b.company_name);
            assert_eq!(a.annual_revenue, b.annual_revenue);
            assert_eq!(a.website, b.website);
        }
    }

    #[test]
    fn deals_survive_a_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deals.csv");
        let (_, _, deals) = sample(2, 30);

        write_deals(&path, &deals, true).unwrap();
        let loaded = read_deals(&path).unwrap();

        assert_eq!(loaded.len(), deals.len());
        for (a, b) in deals.iter().zip(&loaded) {
            assert_eq!(a.deal_id, b.deal_id);
            assert_eq!(a.stage, b.stage);
            assert_eq!(a.deal_status, b.deal_status);
            assert_eq!(a.close_date, b.close_date);
            assert_eq!(a.subscription_type, b.subscription_type);
        }
    }

    #[test]
    fn missing_required_columns_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "contact_id,first_name").unwrap();
        writeln!(file, "1,Ada").unwrap();

        let err = read_contacts(&path).unwrap_err();
        match err {
            GenError::MissingColumns { entity, columns } => {
                assert_eq!(entity, "contacts");
                assert_eq!(columns, vec!["account_id", "contact_owner"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_cell_values_name_the_row_and_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "id,company_name,employee_count").unwrap();
        writeln!(file, "1,Acme,fifty").unwrap();

        let err = read_accounts(&path).unwrap_err();
        match err {
            GenError::InvalidField { row, column, value, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, "employee_count");
                assert_eq!(value, "fifty");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn optional_columns_default_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "id,company_name,employee_count").unwrap();
        writeln!(file, "7,Acme,120").unwrap();

        let accounts = read_accounts(&path).unwrap();
        assert_eq!(accounts[0].id, 7);
        assert_eq!(accounts[0].annual_revenue, 0);
        assert!(accounts[0].region.is_empty());
    }

    #[test]
    fn subscription_column_only_appears_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let (_, _, deals) = sample(3, 20);

        let with = dir.path().join("with.csv");
        let without = dir.path().join("without.csv");
        write_deals(&with, &deals, true).unwrap();
        write_deals(&without, &deals, false).unwrap();

        let header = |p: &Path| {
            let mut r = Reader::from_path(p).unwrap();
            r.headers().unwrap().iter().map(String::from).collect::<Vec<_>>()
        };
        assert!(header(&with).contains(&"subscription_type".to_string()));
        assert!(!header(&without).contains(&"subscription_type".to_string()));
    }

    #[test]
    fn empty_close_dates_read_back_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deals.csv");
        let (_, _, deals) = sample(4, 30);
        assert!(deals.iter().any(|d| d.close_date.is_none()));

        write_deals(&path, &deals, true).unwrap();
        let loaded = read_deals(&path).unwrap();
        for (a, b) in deals.iter().zip(&loaded) {
            assert_eq!(a.close_date, b.close_date);
        }
    }
}
