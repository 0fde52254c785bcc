//! Activity generation engine.
//!
//! Produces the touchpoint history behind the deal book:
//!   1. Deal-linked activities, phase-weighted across each deal's
//!      lifecycle (prospecting channels early, closing channels late),
//!      with counts scaled by outcome and segment.
//!   2. Non-deal activities: relationship touches for accounts with
//!      deals, cold outreach for half the accounts without, and a ~10%
//!      slice of untouched accounts with no activity at all.
//!   3. Global sort by (activity_date, account_id) and sequential ids.
//!
//! Records are flat: every type-specific payload field exists on every
//! activity and only the fields matching the activity's type are
//! populated.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Duration, NaiveDate};
use log::info;

use crate::account_gen::Account;
use crate::contact_gen::Contact;
use crate::dates::DateWindow;
use crate::deal_gen::Deal;
use crate::profile::{ActivityType, Outcome, Phase, Profile};
use crate::rng::GeneratorRng;
use crate::types::{AccountId, ActivityId, ContactId, DealId};

/// Weeks-open cap for open-deal activity counts.
const OPEN_DEAL_WEEK_CAP: i64 = 15;
/// Probability a deal-linked activity goes to a different contact at
/// the account than the deal's primary contact.
const ALT_CONTACT_PROBABILITY: f64 = 0.30;
/// Probability a deal-linked subject comes from the phase-biased pool.
const PHASE_SUBJECT_BIAS: f64 = 0.70;

const CALL_DISPOSITIONS: [(&str, u32); 4] = [
    ("Connected", 50),
    ("Left voicemail", 25),
    ("No answer", 15),
    ("Busy", 10),
];
const CALL_DIRECTIONS: [(&str, u32); 2] = [("Outbound", 80), ("Inbound", 20)];
const EMAIL_DIRECTIONS: [(&str, u32); 2] = [("Outbound", 75), ("Inbound", 25)];

const EMAIL_BODIES: [&str; 5] = [
    "Hi, following up on our recent conversation. Let me know if you have any questions.",
    "Thanks for your time earlier. Attaching the material we discussed.",
    "Wanted to circle back on next steps. Does later this week work for a quick call?",
    "Sharing some additional detail ahead of our next conversation.",
    "Appreciate the discussion. Summary and relevant links below.",
];
const CALL_NOTE_BODIES: [&str; 5] = [
    "Walked through current priorities and agreed on next steps.",
    "Short call, rescheduled the deeper discussion for next week.",
    "Discussed timeline and budget owner. Positive signals.",
    "Left a message referencing our last email.",
    "Covered open questions from the previous meeting.",
];
const MEETING_DESCRIPTIONS: [&str; 4] = [
    "Agenda: intros, current state review, open discussion.",
    "Working session with the broader stakeholder group.",
    "Deep dive with the evaluation team.",
    "Review of outstanding items and decision timeline.",
];

#[derive(Debug, Clone)]
pub struct Activity {
    pub activity_id: ActivityId,
    pub activity_type: ActivityType,
    pub subject: String,
    pub activity_date: NaiveDate,
    pub account_id: AccountId,
    pub contact_id: ContactId,
    /// Empty for relationship and outreach activities.
    pub deal_id: Option<DealId>,
    pub completed: bool,
    pub duration_minutes: Option<u32>,
    pub notes: String,
    pub activity_owner: String,

    // Type-specific payloads. Only the group matching `activity_type`
    // is ever non-empty.
    pub note_body: String,
    pub email_subject: String,
    pub email_body: String,
    pub email_direction: String,
    pub email_status: String,
    pub call_notes: String,
    pub call_duration: Option<u32>,
    pub call_disposition: String,
    pub call_direction: String,
    pub meeting_title: String,
    pub meeting_description: String,
    pub meeting_start_time: String,
    pub meeting_end_time: String,
}

pub struct ActivityGenerator<'a> {
    profile: &'a Profile,
    window: DateWindow,
}

impl<'a> ActivityGenerator<'a> {
    pub fn new(profile: &'a Profile, window: DateWindow) -> Self {
        Self { profile, window }
    }

    pub fn generate(
        &self,
        accounts: &[Account],
        contacts: &[Contact],
        deals: &[Deal],
        rng: &mut GeneratorRng,
    ) -> Vec<Activity> {
        let index = ActivityIndex::new(accounts, contacts, deals);
        let mut activities: Vec<Activity> = Vec::new();

        let zero_activity = self.zero_activity_accounts(accounts, deals, rng);

        // Phase 1: deal-linked activities.
        for deal in deals {
            if deal.deal_owner.is_empty() {
                // Self-serve deals have no rep working them.
                continue;
            }
            self.deal_activities(deal, &index, &mut activities, rng);
        }

        // Phase 2a: relationship touches for accounts with deals.
        for &account_id in &index.accounts_with_deals {
            self.relationship_activities(account_id, &index, &mut activities, rng);
        }

        // Phase 2b: cold outreach for half the no-deal accounts.
        self.outreach_activities(&index, &zero_activity, &mut activities, rng);

        // Phase 3: global sort and sequential ids.
        activities.sort_by(|a, b| {
            (a.activity_date, a.account_id).cmp(&(b.activity_date, b.account_id))
        });
        for (idx, activity) in activities.iter_mut().enumerate() {
            activity.activity_id = idx as ActivityId + 1;
        }

        info!(
            "generated {} activities ({} untouched accounts)",
            activities.len(),
            zero_activity.len()
        );
        activities
    }

    /// ~10% of all accounts stay untouched. Only accounts without deals
    /// qualify; deal engagement implies activity. This is the first
    /// draw on the activity stream, so the exact set `generate` will
    /// exclude can be reproduced from a fresh stage RNG.
    pub fn zero_activity_accounts(
        &self,
        accounts: &[Account],
        deals: &[Deal],
        rng: &mut GeneratorRng,
    ) -> BTreeSet<AccountId> {
        let with_deals: BTreeSet<AccountId> = deals.iter().map(|d| d.account_id).collect();
        let no_deal: Vec<AccountId> = accounts
            .iter()
            .map(|a| a.id)
            .filter(|id| !with_deals.contains(id))
            .collect();
        let wanted = ((accounts.len() as f64 * self.profile.zero_activity_fraction).round()
            as usize)
            .max(1)
            .min(no_deal.len());
        rng.sample_indices(no_deal.len(), wanted)
            .into_iter()
            .map(|i| no_deal[i])
            .collect()
    }

    fn deal_activities(
        &self,
        deal: &Deal,
        index: &ActivityIndex,
        out: &mut Vec<Activity>,
        rng: &mut GeneratorRng,
    ) {
        let deal_end = deal.close_date.unwrap_or(self.window.end);
        let multiplier = self
            .profile
            .segment(&deal.segment)
            .map(|s| s.activity_multiplier)
            .unwrap_or(1.0);

        let count = match deal.deal_status {
            Outcome::Won | Outcome::Lost => {
                let (lo, hi) = if deal.deal_status == Outcome::Won {
                    self.profile.activity_count_won
                } else {
                    self.profile.activity_count_lost
                };
                let lo = (lo as f64 * multiplier).round() as i64;
                let hi = (hi as f64 * multiplier).round() as i64;
                rng.int_in(lo.min(hi), hi.max(lo))
            }
            Outcome::Open => self.open_deal_count(deal.created_date, multiplier),
        };

        let account_contacts = index
            .contacts_by_account
            .get(&deal.account_id)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        for i in 0..count {
            let date = if deal.deal_status == Outcome::Open && i < 2 {
                // The first two touches on an open deal are recent, so
                // the pipeline snapshot looks actively worked.
                let recent_start = self.window.recent_cutoff.max(deal.created_date);
                DateWindow::random_date(rng, recent_start, self.window.end)
            } else {
                DateWindow::random_date(rng, deal.created_date, deal_end)
            };

            let phase = lifecycle_phase(date, deal.created_date, deal_end);
            let activity_type = self.profile.phase_type_weights.get(phase).roll(rng);
            let subject = self.pick_subject(activity_type, Some(phase), rng);

            let contact_id = if !account_contacts.is_empty() && rng.chance(ALT_CONTACT_PROBABILITY)
            {
                *rng.choose(account_contacts)
            } else {
                deal.contact_id
            };

            out.push(self.build_activity(
                activity_type,
                subject,
                date,
                deal.account_id,
                contact_id,
                Some(deal.deal_id),
                deal.deal_owner.clone(),
                rng,
            ));
        }
    }

    /// Roughly one touch per week the deal has been open, capped, then
    /// segment-scaled. Never fewer than two.
    fn open_deal_count(&self, created: NaiveDate, multiplier: f64) -> i64 {
        let days_open = (self.window.end - created).num_days();
        let weeks_open = (days_open / 7).max(1);
        let base = weeks_open.min(OPEN_DEAL_WEEK_CAP);
        ((base as f64 * multiplier).round() as i64).max(2)
    }

    fn relationship_activities(
        &self,
        account_id: AccountId,
        index: &ActivityIndex,
        out: &mut Vec<Activity>,
        rng: &mut GeneratorRng,
    ) {
        let Some(account_contacts) = index.contacts_by_account.get(&account_id) else {
            return;
        };
        let fallback_owner = index
            .first_deal_owner
            .get(&account_id)
            .cloned()
            .unwrap_or_default();

        let count = rng.int_in(
            self.profile.relationship_count.0 as i64,
            self.profile.relationship_count.1 as i64,
        );
        for _ in 0..count {
            let contact_id = *rng.choose(account_contacts);
            let owner = index
                .contact_owners
                .get(&contact_id)
                .filter(|o| !o.is_empty())
                .cloned()
                .unwrap_or_else(|| fallback_owner.clone());

            let activity_type = self.profile.activity_type_weights.roll(rng);
            let subject = self.pick_subject(activity_type, None, rng);
            let date = DateWindow::random_date(rng, self.window.start, self.window.end);

            out.push(self.build_activity(
                activity_type,
                subject,
                date,
                account_id,
                contact_id,
                None,
                owner,
                rng,
            ));
        }
    }

    fn outreach_activities(
        &self,
        index: &ActivityIndex,
        zero_activity: &BTreeSet<AccountId>,
        out: &mut Vec<Activity>,
        rng: &mut GeneratorRng,
    ) {
        let eligible: Vec<AccountId> = index
            .accounts_without_deals
            .iter()
            .copied()
            .filter(|id| !zero_activity.contains(id))
            .collect();
        let wanted = ((eligible.len() as f64 * self.profile.outreach_fraction).round() as usize)
            .min(eligible.len());
        let mut picked: Vec<AccountId> = rng
            .sample_indices(eligible.len(), wanted)
            .into_iter()
            .map(|i| eligible[i])
            .collect();
        picked.sort_unstable();

        for account_id in picked {
            let Some(account_contacts) = index.contacts_by_account.get(&account_id) else {
                continue;
            };
            let count = rng.int_in(
                self.profile.outreach_count.0 as i64,
                self.profile.outreach_count.1 as i64,
            );
            for _ in 0..count {
                let contact_id = *rng.choose(account_contacts);
                let owner = index
                    .contact_owners
                    .get(&contact_id)
                    .cloned()
                    .unwrap_or_default();

                // Prospecting-skewed types with early-phase subjects.
                let activity_type = self.profile.outreach_type_weights.roll(rng);
                let subject = self.pick_subject(activity_type, Some(Phase::Early), rng);
                let date = DateWindow::random_date(rng, self.window.start, self.window.end);

                out.push(self.build_activity(
                    activity_type,
                    subject,
                    date,
                    account_id,
                    contact_id,
                    None,
                    owner,
                    rng,
                ));
            }
        }
    }

    fn pick_subject(
        &self,
        activity_type: ActivityType,
        phase: Option<Phase>,
        rng: &mut GeneratorRng,
    ) -> String {
        if let Some(phase) = phase {
            if rng.chance(PHASE_SUBJECT_BIAS) {
                let pool = self.profile.phase_subjects.get(phase).for_type(activity_type);
                if !pool.is_empty() {
                    return rng.choose(pool).to_string();
                }
            }
        }
        rng.choose(self.profile.subjects.for_type(activity_type))
            .to_string()
    }

    #[allow(clippy::too_many_arguments)]
    fn build_activity(
        &self,
        activity_type: ActivityType,
        subject: String,
        date: NaiveDate,
        account_id: AccountId,
        contact_id: ContactId,
        deal_id: Option<DealId>,
        owner: String,
        rng: &mut GeneratorRng,
    ) -> Activity {
        let duration_minutes = self
            .profile
            .duration_range(activity_type)
            .map(|(lo, hi)| round_to_5(rng.int_in(lo as i64, hi as i64)));

        let mut activity = Activity {
            activity_id: 0,
            activity_type,
            subject,
            activity_date: date,
            account_id,
            contact_id,
            deal_id,
            completed: date <= self.window.end,
            duration_minutes,
            notes: String::new(),
            activity_owner: owner,
            note_body: String::new(),
            email_subject: String::new(),
            email_body: String::new(),
            email_direction: String::new(),
            email_status: String::new(),
            call_notes: String::new(),
            call_duration: None,
            call_disposition: String::new(),
            call_direction: String::new(),
            meeting_title: String::new(),
            meeting_description: String::new(),
            meeting_start_time: String::new(),
            meeting_end_time: String::new(),
        };
        self.fill_payload(&mut activity, rng);
        activity
    }

    /// Populate the payload group matching the activity's type. All
    /// other groups stay empty.
    fn fill_payload(&self, activity: &mut Activity, rng: &mut GeneratorRng) {
        match activity.activity_type {
            ActivityType::Email => {
                activity.email_subject = activity.subject.clone();
                activity.email_body = rng.choose(&EMAIL_BODIES).to_string();
                let direction = pick_labeled(&EMAIL_DIRECTIONS, rng);
                activity.email_status = if direction == "Outbound" {
                    "Sent".to_string()
                } else {
                    "Received".to_string()
                };
                activity.email_direction = direction;
            }
            ActivityType::PhoneCall => {
                activity.call_notes = rng.choose(&CALL_NOTE_BODIES).to_string();
                activity.call_duration = activity.duration_minutes;
                activity.call_disposition = pick_labeled(&CALL_DISPOSITIONS, rng);
                activity.call_direction = pick_labeled(&CALL_DIRECTIONS, rng);
            }
            ActivityType::Meeting => {
                activity.meeting_title = activity.subject.clone();
                activity.meeting_description = rng.choose(&MEETING_DESCRIPTIONS).to_string();
                // Business-hours start; the end follows from the duration.
                let hour = rng.int_in(9, 16);
                let minute = if rng.chance(0.5) { 0 } else { 30 };
                let start = activity
                    .activity_date
                    .and_hms_opt(hour as u32, minute, 0)
                    .unwrap();
                let end = start
                    + Duration::minutes(activity.duration_minutes.unwrap_or(30) as i64);
                activity.meeting_start_time = start.format("%Y-%m-%d %H:%M").to_string();
                activity.meeting_end_time = end.format("%Y-%m-%d %H:%M").to_string();
            }
            // LinkedIn touches carry only the subject.
            ActivityType::LinkedIn => {}
            ActivityType::Note => {
                activity.note_body = activity.subject.clone();
            }
        }
    }
}

/// Lookups the engine builds once per run.
struct ActivityIndex {
    contacts_by_account: BTreeMap<AccountId, Vec<ContactId>>,
    contact_owners: BTreeMap<ContactId, String>,
    accounts_with_deals: BTreeSet<AccountId>,
    accounts_without_deals: BTreeSet<AccountId>,
    first_deal_owner: BTreeMap<AccountId, String>,
}

impl ActivityIndex {
    fn new(accounts: &[Account], contacts: &[Contact], deals: &[Deal]) -> Self {
        let mut contacts_by_account: BTreeMap<AccountId, Vec<ContactId>> = BTreeMap::new();
        let mut contact_owners = BTreeMap::new();
        for contact in contacts {
            contacts_by_account
                .entry(contact.account_id)
                .or_default()
                .push(contact.contact_id);
            contact_owners.insert(contact.contact_id, contact.contact_owner.clone());
        }

        let mut accounts_with_deals = BTreeSet::new();
        let mut first_deal_owner = BTreeMap::new();
        for deal in deals {
            accounts_with_deals.insert(deal.account_id);
            if !deal.deal_owner.is_empty() {
                first_deal_owner
                    .entry(deal.account_id)
                    .or_insert_with(|| deal.deal_owner.clone());
            }
        }

        let accounts_without_deals = accounts
            .iter()
            .map(|a| a.id)
            .filter(|id| !accounts_with_deals.contains(id))
            .collect();

        Self {
            contacts_by_account,
            contact_owners,
            accounts_with_deals,
            accounts_without_deals,
            first_deal_owner,
        }
    }
}

/// Where a date falls in the created-to-closed span: the first quarter
/// is early, the last quarter late.
fn lifecycle_phase(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> Phase {
    let total = (end - start).num_days();
    if total <= 0 {
        return Phase::Mid;
    }
    let progress = (date - start).num_days() as f64 / total as f64;
    if progress < 0.25 {
        Phase::Early
    } else if progress < 0.75 {
        Phase::Mid
    } else {
        Phase::Late
    }
}

fn pick_labeled(table: &[(&str, u32)], rng: &mut GeneratorRng) -> String {
    let weights: Vec<u32> = table.iter().map(|(_, w)| *w).collect();
    table[rng.weighted_index(&weights)].0.to_string()
}

fn round_to_5(minutes: i64) -> u32 {
    (((minutes + 2) / 5) * 5) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account_gen::AccountGenerator;
    use crate::contact_gen::ContactGenerator;
    use crate::deal_gen::DealGenerator;
    use crate::profile::ProfileKind;
    use crate::rng::{RngBank, StageSlot};

    struct Fixture {
        window: DateWindow,
        accounts: Vec<Account>,
        contacts: Vec<Contact>,
        deals: Vec<Deal>,
        activities: Vec<Activity>,
    }

    fn run(seed: u64, kind: ProfileKind, n: usize) -> Fixture {
        let profile = Profile::for_kind(kind);
        let window = DateWindow::default_three_year();
        let bank = RngBank::new(seed);
        let accounts =
            AccountGenerator::new(&profile).generate(n, &mut bank.for_stage(StageSlot::Account));
        let contacts = ContactGenerator::new(&profile)
            .generate(&accounts, &mut bank.for_stage(StageSlot::Contact));
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
        Fixture {
            window,
            accounts,
            contacts,
            deals,
            activities,
        }
    }

    #[test]
    fn payload_fields_are_exclusive() {
        let fx = run(42, ProfileKind::B2bSaas, 50);
        for a in &fx.activities {
            let email = !a.email_subject.is_empty()
                || !a.email_body.is_empty()
                || !a.email_direction.is_empty()
                || !a.email_status.is_empty();
            let call = !a.call_notes.is_empty()
                || a.call_duration.is_some()
                || !a.call_disposition.is_empty()
                || !a.call_direction.is_empty();
            let meeting = !a.meeting_title.is_empty()
                || !a.meeting_description.is_empty()
                || !a.meeting_start_time.is_empty()
                || !a.meeting_end_time.is_empty();
            let note = !a.note_body.is_empty();
            match a.activity_type {
                ActivityType::Email => assert!(email && !call && !meeting && !note),
                ActivityType::PhoneCall => assert!(!email && call && !meeting && !note),
                ActivityType::Meeting => assert!(!email && !call && meeting && !note),
                ActivityType::Note => assert!(!email && !call && !meeting && note),
                ActivityType::LinkedIn => assert!(!email && !call && !meeting && !note),
            }
        }
    }

    #[test]
    fn activity_ids_follow_the_sort_order() {
        let fx = run(7, ProfileKind::Manufacturer, 40);
        for pair in fx.activities.windows(2) {
            assert!(pair[0].activity_id < pair[1].activity_id);
            assert!(
                (pair[0].activity_date, pair[0].account_id)
                    <= (pair[1].activity_date, pair[1].account_id)
            );
        }
    }

    #[test]
    fn deal_linked_dates_stay_inside_the_deal_span() {
        let fx = run(42, ProfileKind::B2bSaas, 50);
        for a in fx.activities.iter().filter(|a| a.deal_id.is_some()) {
            let deal = fx
                .deals
                .iter()
                .find(|d| d.deal_id == a.deal_id.unwrap())
                .expect("dangling deal reference");
            assert!(a.activity_date >= deal.created_date);
            assert!(a.activity_date <= deal.close_date.unwrap_or(fx.window.end));
            assert_eq!(a.account_id, deal.account_id);
            assert_eq!(a.activity_owner, deal.deal_owner);
        }
    }

    #[test]
    fn open_deals_show_recent_activity() {
        let fx = run(42, ProfileKind::B2bSaas, 60);
        for deal in fx
            .deals
            .iter()
            .filter(|d| d.deal_status == Outcome::Open && !d.deal_owner.is_empty())
        {
            let recent = fx
                .activities
                .iter()
                .filter(|a| a.deal_id == Some(deal.deal_id))
                .filter(|a| a.activity_date >= fx.window.recent_cutoff.max(deal.created_date))
                .count();
            assert!(recent >= 2, "open deal {} has {recent} recent touches", deal.deal_id);
        }
    }

    #[test]
    fn self_serve_deals_get_no_activities() {
        let fx = run(11, ProfileKind::B2bSaas, 80);
        let self_serve: BTreeSet<DealId> = fx
            .deals
            .iter()
            .filter(|d| d.deal_owner.is_empty())
            .map(|d| d.deal_id)
            .collect();
        assert!(!self_serve.is_empty());
        for a in &fx.activities {
            if let Some(deal_id) = a.deal_id {
                assert!(!self_serve.contains(&deal_id));
            }
        }
    }

    #[test]
    fn some_accounts_are_completely_untouched() {
        let fx = run(42, ProfileKind::Consultancy, 60);
        let touched: BTreeSet<AccountId> =
            fx.activities.iter().map(|a| a.account_id).collect();
        let untouched: Vec<&Account> = fx
            .accounts
            .iter()
            .filter(|a| !touched.contains(&a.id))
            .collect();
        assert!(!untouched.is_empty(), "expected a zero-activity slice");
        // Untouched accounts never carry deals.
        for account in untouched {
            assert!(!fx.deals.iter().any(|d| d.account_id == account.id));
        }
    }

    #[test]
    fn accounts_with_deals_always_have_activity() {
        let fx = run(9, ProfileKind::Manufacturer, 50);
        let touched: BTreeSet<AccountId> =
            fx.activities.iter().map(|a| a.account_id).collect();
        for deal in &fx.deals {
            if !deal.deal_owner.is_empty() {
                assert!(touched.contains(&deal.account_id));
            }
        }
    }

    #[test]
    fn referential_integrity_holds() {
        let fx = run(42, ProfileKind::B2bSaas, 50);
        let contact_accounts: BTreeMap<ContactId, AccountId> = fx
            .contacts
            .iter()
            .map(|c| (c.contact_id, c.account_id))
            .collect();
        for a in &fx.activities {
            assert_eq!(
                contact_accounts.get(&a.contact_id),
                Some(&a.account_id),
                "activity contact must belong to its account"
            );
        }
    }

    #[test]
    fn durations_only_on_calls_and_meetings() {
        let fx = run(3, ProfileKind::B2bSaas, 40);
        for a in &fx.activities {
            match a.activity_type {
                ActivityType::PhoneCall | ActivityType::Meeting => {
                    let d = a.duration_minutes.expect("calls and meetings have durations");
                    assert_eq!(d % 5, 0);
                }
                _ => assert!(a.duration_minutes.is_none()),
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_activity_set() {
        let a = run(123, ProfileKind::B2bSaas, 40).activities;
        let b = run(123, ProfileKind::B2bSaas, 40).activities;
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.subject, y.subject);
            assert_eq!(x.activity_date, y.activity_date);
            assert_eq!(x.contact_id, y.contact_id);
        }
    }
}
