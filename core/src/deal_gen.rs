//! Deal generation engine.
//!
//! Three-phase algorithm:
//!   1. New-business deals for ~70% of accounts, plus the optional
//!      self-serve/PLG motion sampled independently over all accounts.
//!   2. Renewals and expansions spawned from won primary deals.
//!   3. Global sort by (created_date, account_id), sequential ids, and
//!      deal names with collision suffixes.
//!
//! Dates always respect the run's window. A Won/Lost roll whose cycle
//! cannot fit before the horizon is repaired to Open rather than
//! emitting an invalid close date, and an Open roll on a follow-on
//! created before the active window is re-rolled to a terminal outcome
//! (an Open deal cannot be stale).

use std::collections::{BTreeMap, HashSet};

use chrono::{Duration, NaiveDate};
use log::{debug, warn};

use crate::account_gen::Account;
use crate::contact_gen::Contact;
use crate::dates::DateWindow;
use crate::profile::{roll_weighted, Outcome, PipelineSpec, Profile};
use crate::rng::GeneratorRng;
use crate::types::{AccountId, ContactId, DealId};

/// Stale-Open re-roll weights (Won, Lost) for follow-on deals created
/// before the active window.
const STALE_RENEWAL_REROLL: (u32, u32) = (85, 15);
const STALE_EXPANSION_REROLL: (u32, u32) = (60, 40);

#[derive(Debug, Clone)]
pub struct Deal {
    pub deal_id: DealId,
    pub deal_name: String,
    pub account_id: AccountId,
    pub contact_id: ContactId,
    pub pipeline: String,
    pub segment: String,
    pub stage: String,
    pub amount: i64,
    pub created_date: NaiveDate,
    pub close_date: Option<NaiveDate>,
    pub deal_status: Outcome,
    /// Empty for self-serve deals.
    pub deal_owner: String,
    /// Non-empty exactly when the status is Lost.
    pub loss_reason: String,
    pub subscription_type: Option<String>,
}

/// Status is a pure function of the stage, never set independently.
pub fn derive_status(pipeline: &PipelineSpec, stage: &str) -> Outcome {
    if stage == pipeline.won_stage {
        Outcome::Won
    } else if stage == pipeline.lost_stage {
        Outcome::Lost
    } else {
        Outcome::Open
    }
}

/// Won primary deal recorded for Phase 2.
struct WonPrimary {
    account_id: AccountId,
    close_date: NaiveDate,
    amount: i64,
}

pub struct DealGenerator<'a> {
    profile: &'a Profile,
    window: DateWindow,
}

impl<'a> DealGenerator<'a> {
    pub fn new(profile: &'a Profile, window: DateWindow) -> Self {
        Self { profile, window }
    }

    pub fn generate(
        &self,
        accounts: &[Account],
        contacts: &[Contact],
        rng: &mut GeneratorRng,
    ) -> Vec<Deal> {
        let mut state = EngineState::new(accounts, contacts);
        let mut deals: Vec<Deal> = Vec::new();
        let mut won_primaries: Vec<WonPrimary> = Vec::new();

        let selected = self.select_deal_accounts(accounts, rng);
        let selected_set: HashSet<AccountId> = selected.iter().copied().collect();

        // Phase 1: new-business deals.
        for &account_id in &selected {
            if !state.contacts_by_account.contains_key(&account_id) {
                warn!("account {account_id} has no contacts, skipping deal generation");
                continue;
            }
            let count = *roll_weighted(&self.profile.deal_count_weights, rng);
            for _ in 0..count {
                let deal = self.new_business_deal(account_id, &mut state, rng);
                if deal.deal_status == Outcome::Won {
                    won_primaries.push(WonPrimary {
                        account_id,
                        close_date: deal.close_date.unwrap(),
                        amount: deal.amount,
                    });
                }
                deals.push(deal);
            }
        }

        // Phase 1b: self-serve signups, sampled over all accounts.
        if self.profile.self_serve.is_some() {
            self.self_serve_deals(accounts, &selected_set, &mut state, &mut deals, rng);
        }

        // Phase 2: renewals and expansions from won primaries.
        for won in &won_primaries {
            let renewal_created = won.close_date
                + Duration::days(rng.int_in(
                    self.profile.renewal_timing_days.0,
                    self.profile.renewal_timing_days.1,
                ));
            if renewal_created <= self.window.end {
                deals.push(self.follow_on_deal(
                    won,
                    self.profile.renewal_pipeline,
                    renewal_created,
                    &mut state,
                    rng,
                ));
            }

            if rng.chance(self.profile.expansion_probability) {
                let expansion_created = won.close_date
                    + Duration::days(rng.int_in(
                        self.profile.expansion_timing_days.0,
                        self.profile.expansion_timing_days.1,
                    ));
                if expansion_created <= self.window.end {
                    deals.push(self.follow_on_deal(
                        won,
                        self.profile.expansion_pipeline,
                        expansion_created,
                        &mut state,
                        rng,
                    ));
                }
            }
        }

        // Phase 3: global sort, sequential ids, names.
        self.finalize(&mut deals, &state, rng);
        deals
    }

    /// Sorted sample of account ids that receive sales-assisted deals.
    fn select_deal_accounts(&self, accounts: &[Account], rng: &mut GeneratorRng) -> Vec<AccountId> {
        let k = ((accounts.len() as f64 * self.profile.accounts_with_deals_fraction).round()
            as usize)
            .max(1)
            .min(accounts.len());
        let mut picked: Vec<AccountId> = rng
            .sample_indices(accounts.len(), k)
            .into_iter()
            .map(|i| accounts[i].id)
            .collect();
        picked.sort_unstable();
        picked
    }

    fn new_business_deal(
        &self,
        account_id: AccountId,
        state: &mut EngineState,
        rng: &mut GeneratorRng,
    ) -> Deal {
        let pipeline = self.profile.pipeline(self.profile.primary_pipeline);
        let segment = self
            .profile
            .classify_segment(state.employee_counts[&account_id]);
        let contact_id = state.pick_contact(account_id, rng);
        let owner = rng.choose(&self.profile.sales_reps).to_string();
        let amount = round_to(rng.int_in(segment.acv_range.0, segment.acv_range.1), 500);
        let subscription_type = self.sales_subscription_type(rng);

        let mut outcome = pipeline.outcome_rates.roll(rng);
        let (created, close, stage) = if outcome == Outcome::Open {
            self.open_placement(pipeline, rng)
        } else {
            let cycle = rng.int_in(segment.nb_cycle_days.0, segment.nb_cycle_days.1);
            let latest_start = self.window.end - Duration::days(cycle);
            if latest_start <= self.window.start {
                // The horizon cannot fit a full cycle.
                debug!("cycle of {cycle} days does not fit the window, forcing deal open");
                outcome = Outcome::Open;
                self.open_placement(pipeline, rng)
            } else {
                let created = DateWindow::random_date(rng, self.window.start, latest_start);
                let close = created + Duration::days(cycle);
                let stage = match outcome {
                    Outcome::Won => pipeline.won_stage,
                    _ => pipeline.lost_stage,
                };
                (created, Some(close), stage)
            }
        };

        let loss_reason = if outcome == Outcome::Lost {
            self.profile.roll_loss_reason(segment.name, rng).to_string()
        } else {
            String::new()
        };

        Deal {
            deal_id: 0,
            deal_name: String::new(),
            account_id,
            contact_id,
            pipeline: pipeline.name.to_string(),
            segment: segment.name.to_string(),
            stage: stage.to_string(),
            amount,
            created_date: created,
            close_date: close,
            deal_status: derive_status(pipeline, stage),
            deal_owner: owner,
            loss_reason,
            subscription_type,
        }
    }

    /// Open deals are created inside the active window with a weighted
    /// non-terminal stage and no close date.
    fn open_placement(
        &self,
        pipeline: &'a PipelineSpec,
        rng: &mut GeneratorRng,
    ) -> (NaiveDate, Option<NaiveDate>, &'a str) {
        let created =
            DateWindow::random_date(rng, self.window.active_window_start, self.window.end);
        let stage = pipeline.roll_active_stage(rng);
        (created, None, stage)
    }

    fn self_serve_deals(
        &self,
        accounts: &[Account],
        phase1_selected: &HashSet<AccountId>,
        state: &mut EngineState,
        deals: &mut Vec<Deal>,
        rng: &mut GeneratorRng,
    ) {
        let config = self.profile.self_serve.as_ref().unwrap();
        let pipeline = self.profile.pipeline(config.pipeline);

        let k = ((accounts.len() as f64 * config.fraction_of_accounts).round() as usize)
            .min(accounts.len());
        let mut picked: Vec<AccountId> = rng
            .sample_indices(accounts.len(), k)
            .into_iter()
            .map(|i| accounts[i].id)
            .collect();
        picked.sort_unstable();

        for account_id in picked {
            let Some(account_contacts) = state.contacts_by_account.get(&account_id) else {
                warn!("account {account_id} has no contacts, skipping self-serve signup");
                continue;
            };
            let contact_id = *rng.choose(account_contacts);

            let subscription = *roll_weighted(&config.subscription_split, rng);
            let amount_range = if subscription == "Monthly" {
                config.monthly_amount_range
            } else {
                config.annual_amount_range
            };
            let amount = rng.int_in(amount_range.0, amount_range.1);

            let outcome = pipeline.outcome_rates.roll(rng);
            let (days_range, stage) = match outcome {
                Outcome::Won => (config.conversion_days, pipeline.won_stage),
                _ => (config.churn_days, pipeline.lost_stage),
            };
            let resolution_days = rng.int_in(days_range.0, days_range.1);
            let latest_start = self.window.end - Duration::days(resolution_days);
            let created = DateWindow::random_date(rng, self.window.start, latest_start);
            let close = created + Duration::days(resolution_days);

            let loss_reason = if outcome == Outcome::Lost {
                roll_weighted(&config.churn_reasons, rng).to_string()
            } else {
                String::new()
            };

            deals.push(Deal {
                deal_id: 0,
                deal_name: String::new(),
                account_id,
                contact_id,
                pipeline: pipeline.name.to_string(),
                segment: config.segment.to_string(),
                stage: stage.to_string(),
                amount,
                created_date: created,
                close_date: Some(close),
                deal_status: derive_status(pipeline, stage),
                deal_owner: String::new(),
                loss_reason,
                subscription_type: Some(subscription.to_string()),
            });

            // PLG handoff: a converted account sales never touched may
            // surface as a fresh open primary-pipeline deal.
            if outcome == Outcome::Won
                && !phase1_selected.contains(&account_id)
                && rng.chance(config.plg_to_sales_probability)
            {
                deals.push(self.plg_handoff_deal(account_id, close, state, rng));
            }
        }
    }

    fn plg_handoff_deal(
        &self,
        account_id: AccountId,
        converted_on: NaiveDate,
        state: &mut EngineState,
        rng: &mut GeneratorRng,
    ) -> Deal {
        let pipeline = self.profile.pipeline(self.profile.primary_pipeline);
        let segment = self
            .profile
            .classify_segment(state.employee_counts[&account_id]);
        let contact_id = state.pick_contact(account_id, rng);
        let owner = rng.choose(&self.profile.sales_reps).to_string();
        let amount = round_to(rng.int_in(segment.acv_range.0, segment.acv_range.1), 500);
        let subscription_type = self.sales_subscription_type(rng);

        let earliest = self.window.active_window_start.max(converted_on);
        let created = DateWindow::random_date(rng, earliest, self.window.end);
        let stage = pipeline.roll_active_stage(rng);

        Deal {
            deal_id: 0,
            deal_name: String::new(),
            account_id,
            contact_id,
            pipeline: pipeline.name.to_string(),
            segment: segment.name.to_string(),
            stage: stage.to_string(),
            amount,
            created_date: created,
            close_date: None,
            deal_status: derive_status(pipeline, stage),
            deal_owner: owner,
            loss_reason: String::new(),
            subscription_type,
        }
    }

    fn follow_on_deal(
        &self,
        won: &WonPrimary,
        pipeline_name: &str,
        created: NaiveDate,
        state: &mut EngineState,
        rng: &mut GeneratorRng,
    ) -> Deal {
        let pipeline = self.profile.pipeline(pipeline_name);
        let is_renewal = pipeline_name == self.profile.renewal_pipeline;
        let segment = self
            .profile
            .classify_segment(state.employee_counts[&won.account_id]);
        let contact_id = state.pick_contact(won.account_id, rng);
        let owner = rng.choose(&self.profile.sales_reps).to_string();

        let factor_range = if is_renewal {
            self.profile.renewal_amount_factor
        } else {
            self.profile.expansion_amount_factor
        };
        let factor = rng.float_in(factor_range.0, factor_range.1);
        let amount = round_to((won.amount as f64 * factor) as i64, 100);
        let subscription_type = self.sales_subscription_type(rng);

        let mut outcome = pipeline.outcome_rates.roll(rng);

        // An Open deal cannot be stale: re-roll to a terminal outcome
        // when the follow-on was created before the active window.
        if outcome == Outcome::Open && created < self.window.active_window_start {
            let (won_w, lost_w) = if is_renewal {
                STALE_RENEWAL_REROLL
            } else {
                STALE_EXPANSION_REROLL
            };
            outcome = if rng.weighted_index(&[won_w, lost_w]) == 0 {
                Outcome::Won
            } else {
                Outcome::Lost
            };
        }

        let cycle_range = if is_renewal {
            self.profile.renewal_cycle_days
        } else {
            self.profile.expansion_cycle_days
        };

        let (close, stage) = if outcome == Outcome::Open {
            (None, pipeline.roll_active_stage(rng))
        } else {
            let cycle = rng.int_in(cycle_range.0, cycle_range.1);
            let close = created + Duration::days(cycle);
            if close > self.window.end {
                if created >= self.window.active_window_start {
                    // Close overflow: the deal is simply still in flight.
                    outcome = Outcome::Open;
                    (None, pipeline.roll_active_stage(rng))
                } else {
                    // A stale deal cannot become Open again; keep the
                    // terminal outcome and clamp the close to the horizon.
                    debug!(
                        "follow-on close {close} clamped to window end for account {}",
                        won.account_id
                    );
                    (Some(self.window.end), terminal_stage(pipeline, outcome))
                }
            } else {
                (Some(close), terminal_stage(pipeline, outcome))
            }
        };

        let loss_reason = if outcome == Outcome::Lost {
            self.profile.roll_loss_reason(segment.name, rng).to_string()
        } else {
            String::new()
        };

        Deal {
            deal_id: 0,
            deal_name: String::new(),
            account_id: won.account_id,
            contact_id,
            pipeline: pipeline.name.to_string(),
            segment: segment.name.to_string(),
            stage: stage.to_string(),
            amount,
            created_date: created,
            close_date: close,
            deal_status: derive_status(pipeline, stage),
            deal_owner: owner,
            loss_reason,
            subscription_type,
        }
    }

    fn sales_subscription_type(&self, rng: &mut GeneratorRng) -> Option<String> {
        self.profile
            .subscription_type_weights
            .as_ref()
            .map(|weights| roll_weighted(weights, rng).to_string())
    }

    /// Sort, assign sequential ids, and name every deal. Name collisions
    /// within an account get a letter suffix; the first keeps the base.
    fn finalize(&self, deals: &mut [Deal], state: &EngineState, rng: &mut GeneratorRng) {
        deals.sort_by(|a, b| {
            (a.created_date, a.account_id).cmp(&(b.created_date, b.account_id))
        });

        let mut seen: BTreeMap<(AccountId, String), u32> = BTreeMap::new();
        for (idx, deal) in deals.iter_mut().enumerate() {
            deal.deal_id = idx as DealId + 1;

            let company = &state.company_names[&deal.account_id];
            let base = self
                .profile
                .deal_name_style
                .format(company, deal.created_date, rng);
            let n = seen.entry((deal.account_id, base.clone())).or_insert(0);
            deal.deal_name = if *n == 0 {
                base
            } else {
                let letter = (b'a' + ((*n - 1) % 26) as u8) as char;
                format!("{base}{letter}")
            };
            *n += 1;
        }
    }
}

/// Per-run lookups shared across phases.
struct EngineState {
    contacts_by_account: BTreeMap<AccountId, Vec<ContactId>>,
    employee_counts: BTreeMap<AccountId, u32>,
    company_names: BTreeMap<AccountId, String>,
    used_contacts: BTreeMap<AccountId, HashSet<ContactId>>,
}

impl EngineState {
    fn new(accounts: &[Account], contacts: &[Contact]) -> Self {
        let mut contacts_by_account: BTreeMap<AccountId, Vec<ContactId>> = BTreeMap::new();
        for contact in contacts {
            contacts_by_account
                .entry(contact.account_id)
                .or_default()
                .push(contact.contact_id);
        }
        let mut employee_counts = BTreeMap::new();
        let mut company_names = BTreeMap::new();
        for account in accounts {
            employee_counts.insert(account.id, account.employee_count);
            company_names.insert(account.id, account.company_name.clone());
        }
        Self {
            contacts_by_account,
            employee_counts,
            company_names,
            used_contacts: BTreeMap::new(),
        }
    }

    /// Prefer a contact not yet attached to a deal at this account;
    /// fall back to uniform reuse once everyone has one.
    fn pick_contact(&mut self, account_id: AccountId, rng: &mut GeneratorRng) -> ContactId {
        let all = &self.contacts_by_account[&account_id];
        let used = self.used_contacts.entry(account_id).or_default();
        let fresh: Vec<ContactId> = all.iter().copied().filter(|c| !used.contains(c)).collect();
        let picked = if fresh.is_empty() {
            *rng.choose(all)
        } else {
            *rng.choose(&fresh)
        };
        used.insert(picked);
        picked
    }
}

fn round_to(value: i64, increment: i64) -> i64 {
    (value + increment / 2) / increment * increment
}

fn terminal_stage(pipeline: &PipelineSpec, outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Won => pipeline.won_stage,
        Outcome::Lost => pipeline.lost_stage,
        Outcome::Open => unreachable!("terminal stage requested for an open outcome"),
    }
}
