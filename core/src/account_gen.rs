//! Account generation.
//!
//! Produces the company records everything downstream hangs off.
//! Company names come from the profile's prefix/suffix/word pools,
//! sizes from weighted employee tiers, and revenue is correlated with
//! headcount through a per-employee draw.

use crate::profile::Profile;
use crate::rng::GeneratorRng;
use crate::types::AccountId;
use log::info;

/// US geographic regions, shared by every business type.
const REGIONS: [&str; 8] = [
    "West",
    "East",
    "Central",
    "Southwest",
    "Southeast",
    "Northwest",
    "Northeast",
    "Midwest",
];

/// Revenue bounds in USD, applied after the per-employee draw.
const REVENUE_FLOOR: i64 = 100_000;
const REVENUE_CEILING: i64 = 50_000_000;

#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub company_name: String,
    pub industry: String,
    pub employee_count: u32,
    pub annual_revenue: i64,
    pub region: String,
    pub founded_year: i32,
    pub website: String,
    pub description: String,
}

pub struct AccountGenerator<'a> {
    profile: &'a Profile,
}

impl<'a> AccountGenerator<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self { profile }
    }

    /// Generate `count` accounts with sequential ids from 1.
    pub fn generate(&self, count: usize, rng: &mut GeneratorRng) -> Vec<Account> {
        let accounts: Vec<Account> = (1..=count as AccountId)
            .map(|id| self.generate_one(id, rng))
            .collect();
        info!("generated {} accounts", accounts.len());
        accounts
    }

    fn generate_one(&self, id: AccountId, rng: &mut GeneratorRng) -> Account {
        let company_name = self.company_name(rng);
        let industry = rng.choose(&self.profile.industries).to_string();
        let employee_count = self.employee_count(rng);
        let annual_revenue = self.annual_revenue(employee_count, rng);
        let region = rng.choose(&REGIONS).to_string();
        let founded_year =
            rng.int_in(
                self.profile.founded_year_range.0 as i64,
                self.profile.founded_year_range.1 as i64,
            ) as i32;
        let website = self.website(&company_name, rng);
        let description = self.description(&industry, rng);
        Account {
            id,
            company_name,
            industry,
            employee_count,
            annual_revenue,
            region,
            founded_year,
            website,
            description,
        }
    }

    /// Two naming strategies: prefix+suffix ("CloudStack") and
    /// prefix+word ("SyncPoint"), weighted toward the former.
    fn company_name(&self, rng: &mut GeneratorRng) -> String {
        let prefix = rng.choose(&self.profile.name_prefixes);
        if rng.chance(0.6) {
            let suffix = rng.choose(&self.profile.name_suffixes);
            format!("{prefix}{suffix}")
        } else {
            let word = rng.choose(&self.profile.name_words);
            let mut chars = word.chars();
            let capitalized = match chars.next() {
                Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            };
            format!("{prefix}{capitalized}")
        }
    }

    fn employee_count(&self, rng: &mut GeneratorRng) -> u32 {
        let weights: Vec<u32> = self.profile.employee_tiers.iter().map(|t| t.2).collect();
        let (lo, hi, _) = self.profile.employee_tiers[rng.weighted_index(&weights)];
        rng.int_in(lo as i64, hi as i64) as u32
    }

    /// Headcount times a per-employee draw, clamped and rounded to 10k.
    fn annual_revenue(&self, employee_count: u32, rng: &mut GeneratorRng) -> i64 {
        let (lo, hi) = self.profile.revenue_per_employee;
        let per_employee = rng.int_in(lo, hi);
        let revenue = (employee_count as i64 * per_employee).clamp(REVENUE_FLOOR, REVENUE_CEILING);
        (revenue + 5_000) / 10_000 * 10_000
    }

    fn website(&self, company_name: &str, rng: &mut GeneratorRng) -> String {
        let clean: String = company_name
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        let tld = rng.choose(&self.profile.website_tlds);
        format!("https://www.{clean}{tld}")
    }

    fn description(&self, industry: &str, rng: &mut GeneratorRng) -> String {
        rng.choose(&self.profile.description_templates)
            .replace("{industry}", &industry.to_lowercase())
    }
}
