//! Contact generation.
//!
//! Every account gets a weighted-random 2 to 5 contacts with names from
//! the curated pools, a work email derived from the account's website
//! domain, and a department-weighted title. Contact ids are globally
//! sequential in account order.

use crate::account_gen::Account;
use crate::names::NamePool;
use crate::profile::{roll_weighted, Profile};
use crate::rng::GeneratorRng;
use crate::types::{AccountId, ContactId};
use log::info;

#[derive(Debug, Clone)]
pub struct Contact {
    pub contact_id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub title: String,
    pub department: String,
    pub account_id: AccountId,
    pub contact_owner: String,
}

pub struct ContactGenerator<'a> {
    profile: &'a Profile,
}

impl<'a> ContactGenerator<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self { profile }
    }

    pub fn generate(&self, accounts: &[Account], rng: &mut GeneratorRng) -> Vec<Contact> {
        let mut contacts = Vec::new();
        let mut contact_id: ContactId = 1;

        for account in accounts {
            let domain = email_domain(&account.website);
            let count = *roll_weighted(&self.profile.contacts_per_account, rng);

            for _ in 0..count {
                let first_name = NamePool::first_name(rng);
                let last_name = NamePool::last_name(rng);
                let (department, title) = self.department_and_title(rng);
                contacts.push(Contact {
                    contact_id,
                    first_name: first_name.to_string(),
                    last_name: last_name.to_string(),
                    email: email(first_name, last_name, &domain),
                    phone: NamePool::phone(rng),
                    title,
                    department,
                    account_id: account.id,
                    contact_owner: rng.choose(&self.profile.sales_reps).to_string(),
                });
                contact_id += 1;
            }
        }

        info!(
            "generated {} contacts across {} accounts",
            contacts.len(),
            accounts.len()
        );
        contacts
    }

    fn department_and_title(&self, rng: &mut GeneratorRng) -> (String, String) {
        let weights: Vec<u32> = self.profile.departments.iter().map(|d| d.weight).collect();
        let dept = &self.profile.departments[rng.weighted_index(&weights)];
        let title = rng.choose(&dept.titles);
        (dept.name.to_string(), title.to_string())
    }
}

/// Strip the URL scheme and "www." so the domain can carry emails.
fn email_domain(website: &str) -> String {
    let mut domain = website;
    for prefix in ["https://www.", "http://www.", "https://", "http://"] {
        if let Some(rest) = domain.strip_prefix(prefix) {
            domain = rest;
            break;
        }
    }
    domain.to_string()
}

/// first.last@domain, apostrophes and spaces stripped.
fn email(first: &str, last: &str, domain: &str) -> String {
    let clean = |s: &str| s.to_lowercase().replace(['\'', ' '], "");
    format!("{}.{}@{}", clean(first), clean(last), domain)
}
