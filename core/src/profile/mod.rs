//! Business profiles.
//!
//! A profile supplies every business-specific constant the generators
//! consume: pipelines and stages, outcome-rate tables, amount and cycle
//! ranges, loss-reason weights, activity-type and phase weights, subject
//! pools, and the self-serve configuration. Profiles are plain data —
//! one constructor per business type, selected at run start. Generators
//! hold the distribution logic and no business knowledge.
//!
//! All weighted tables are ordered vectors. Hash maps are banned here:
//! the generators draw from a shared deterministic RNG and iteration
//! order must never depend on hashing.

mod b2b_saas;
mod consultancy;
mod manufacturer;

use crate::error::GenError;
use crate::rng::GeneratorRng;
use chrono::NaiveDate;

/// Terminal fate of a deal. `Open` means not yet terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    Open,
}

/// Won / Lost / Open weights for one pipeline.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeRates {
    pub won: u32,
    pub lost: u32,
    pub open: u32,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Won => "Won",
            Self::Lost => "Lost",
            Self::Open => "Open",
        }
    }
}

impl OutcomeRates {
    pub fn roll(&self, rng: &mut GeneratorRng) -> Outcome {
        match rng.weighted_index(&[self.won, self.lost, self.open]) {
            0 => Outcome::Won,
            1 => Outcome::Lost,
            _ => Outcome::Open,
        }
    }
}

/// One sales motion: a named, ordered sequence of stages with explicit
/// won/lost terminals and a weighted table over the non-terminal stages
/// used when snapshotting an active deal.
#[derive(Debug, Clone)]
pub struct PipelineSpec {
    pub name: &'static str,
    pub stages: Vec<&'static str>,
    pub won_stage: &'static str,
    pub lost_stage: &'static str,
    pub outcome_rates: OutcomeRates,
    /// (stage, weight) over non-terminal stages. Middle stages carry more
    /// weight than the extremes so an active pipeline snapshot looks
    /// realistic. Empty for pipelines that are never snapshotted open.
    pub active_stage_weights: Vec<(&'static str, u32)>,
}

impl PipelineSpec {
    pub fn is_terminal(&self, stage: &str) -> bool {
        stage == self.won_stage || stage == self.lost_stage
    }

    /// Weighted pick of a non-terminal stage.
    pub fn roll_active_stage(&self, rng: &mut GeneratorRng) -> &'static str {
        let weights: Vec<u32> = self.active_stage_weights.iter().map(|(_, w)| *w).collect();
        self.active_stage_weights[rng.weighted_index(&weights)].0
    }
}

/// A coarse account-size class driving amounts and cycle lengths.
#[derive(Debug, Clone)]
pub struct SegmentSpec {
    pub name: &'static str,
    /// Inclusive employee ceiling; `None` marks the top segment.
    pub max_employees: Option<u32>,
    /// Annual contract value range in USD.
    pub acv_range: (i64, i64),
    /// New-business sales cycle length range in days.
    pub nb_cycle_days: (i64, i64),
    /// Scales deal-linked activity counts (enterprise deals involve more
    /// stakeholders, so more touchpoints).
    pub activity_multiplier: f64,
}

/// How deal names are formatted for a given business type.
#[derive(Debug, Clone)]
pub enum DealNameStyle {
    /// "{company} {yymm}" from the created date.
    CompanyPeriod,
    /// "PO-{yymm}-{company}".
    PurchaseOrder,
    /// "{company} - {engagement}" with the engagement type drawn from a
    /// pool.
    Engagement(Vec<&'static str>),
}

impl DealNameStyle {
    pub fn format(&self, company: &str, created: NaiveDate, rng: &mut GeneratorRng) -> String {
        match self {
            Self::CompanyPeriod => format!("{} {}", company, created.format("%y%m")),
            Self::PurchaseOrder => format!("PO-{}-{}", created.format("%y%m"), company),
            Self::Engagement(pool) => format!("{} - {}", company, rng.choose(pool)),
        }
    }
}

/// Product-led pipeline configuration. Present only for business types
/// with a self-serve motion.
#[derive(Debug, Clone)]
pub struct SelfServeConfig {
    /// Must name a pipeline in `Profile::pipelines` whose outcome rates
    /// encode the conversion-vs-churn split (open weight zero — a
    /// self-serve signup always resolves).
    pub pipeline: &'static str,
    /// Segment label stamped on self-serve deals.
    pub segment: &'static str,
    /// Fraction of ALL accounts sampled into the self-serve motion,
    /// independent of the sales-assisted selection.
    pub fraction_of_accounts: f64,
    pub monthly_amount_range: (i64, i64),
    pub annual_amount_range: (i64, i64),
    /// (subscription type, weight) for the signup split.
    pub subscription_split: Vec<(&'static str, u32)>,
    /// Days from signup to conversion.
    pub conversion_days: (i64, i64),
    /// Days from signup to churn.
    pub churn_days: (i64, i64),
    /// Probability a converted self-serve account is handed to sales as a
    /// fresh open primary-pipeline deal.
    pub plg_to_sales_probability: f64,
    /// Weighted churn reasons, so churned deals carry a loss reason like
    /// any other lost deal.
    pub churn_reasons: Vec<(&'static str, u32)>,
}

/// Department name, selection weight, and the titles it contains.
#[derive(Debug, Clone)]
pub struct DepartmentSpec {
    pub name: &'static str,
    pub weight: u32,
    pub titles: Vec<&'static str>,
}

/// The five touchpoint channels. Fixed across business types; profiles
/// vary the weights, subjects, and durations per type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityType {
    Email,
    PhoneCall,
    Meeting,
    LinkedIn,
    Note,
}

impl ActivityType {
    pub const ALL: [ActivityType; 5] = [
        ActivityType::Email,
        ActivityType::PhoneCall,
        ActivityType::Meeting,
        ActivityType::LinkedIn,
        ActivityType::Note,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::PhoneCall => "Phone Call",
            Self::Meeting => "Meeting",
            Self::LinkedIn => "LinkedIn",
            Self::Note => "Note",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap()
    }
}

/// Where a date falls within a deal's created→closed span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Early,
    Mid,
    Late,
}

/// Activity-type weights aligned with `ActivityType::ALL`.
#[derive(Debug, Clone, Copy)]
pub struct TypeWeights(pub [u32; 5]);

impl TypeWeights {
    pub fn roll(&self, rng: &mut GeneratorRng) -> ActivityType {
        ActivityType::ALL[rng.weighted_index(&self.0)]
    }
}

/// Per-phase table of anything.
#[derive(Debug, Clone)]
pub struct PhaseTable<T> {
    pub early: T,
    pub mid: T,
    pub late: T,
}

impl<T> PhaseTable<T> {
    pub fn get(&self, phase: Phase) -> &T {
        match phase {
            Phase::Early => &self.early,
            Phase::Mid => &self.mid,
            Phase::Late => &self.late,
        }
    }
}

/// Subject lines per activity type.
#[derive(Debug, Clone)]
pub struct SubjectPools {
    pub email: Vec<&'static str>,
    pub phone_call: Vec<&'static str>,
    pub meeting: Vec<&'static str>,
    pub linkedin: Vec<&'static str>,
    pub note: Vec<&'static str>,
}

impl SubjectPools {
    pub fn for_type(&self, activity_type: ActivityType) -> &[&'static str] {
        match activity_type {
            ActivityType::Email => &self.email,
            ActivityType::PhoneCall => &self.phone_call,
            ActivityType::Meeting => &self.meeting,
            ActivityType::LinkedIn => &self.linkedin,
            ActivityType::Note => &self.note,
        }
    }
}

/// Which built-in profile to run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    B2bSaas,
    Manufacturer,
    Consultancy,
}

impl ProfileKind {
    pub fn parse(s: &str) -> Result<Self, GenError> {
        match s {
            "b2b-saas" | "b2b_saas" | "saas" => Ok(Self::B2bSaas),
            "manufacturer" => Ok(Self::Manufacturer),
            "consultancy" => Ok(Self::Consultancy),
            other => Err(GenError::UnknownProfile(other.to_string())),
        }
    }
}

/// Every business-specific constant consumed by the four generators.
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: &'static str,
    pub description: &'static str,
    pub sales_reps: Vec<&'static str>,

    // — account generation —
    pub name_prefixes: Vec<&'static str>,
    pub name_suffixes: Vec<&'static str>,
    /// Second-word pool for the prefix+word naming strategy.
    pub name_words: Vec<&'static str>,
    pub industries: Vec<&'static str>,
    /// (min employees, max employees, weight), smallest tiers weighted
    /// heaviest.
    pub employee_tiers: Vec<(u32, u32, u32)>,
    pub revenue_per_employee: (i64, i64),
    pub website_tlds: Vec<&'static str>,
    /// Templates with an `{industry}` placeholder.
    pub description_templates: Vec<&'static str>,
    pub founded_year_range: (i32, i32),

    // — contact generation —
    pub departments: Vec<DepartmentSpec>,
    /// (contacts per account, weight).
    pub contacts_per_account: Vec<(u32, u32)>,

    // — deal generation —
    pub pipelines: Vec<PipelineSpec>,
    pub primary_pipeline: &'static str,
    pub renewal_pipeline: &'static str,
    pub expansion_pipeline: &'static str,
    /// Ordered smallest to largest; classification walks the ceilings.
    pub segments: Vec<SegmentSpec>,
    pub renewal_cycle_days: (i64, i64),
    pub expansion_cycle_days: (i64, i64),
    pub loss_reasons_default: Vec<(&'static str, u32)>,
    pub loss_reasons_enterprise: Vec<(&'static str, u32)>,
    pub deal_name_style: DealNameStyle,
    pub accounts_with_deals_fraction: f64,
    /// (new-business deals per account, weight).
    pub deal_count_weights: Vec<(u32, u32)>,
    pub renewal_timing_days: (i64, i64),
    pub expansion_probability: f64,
    pub expansion_timing_days: (i64, i64),
    pub renewal_amount_factor: (f64, f64),
    pub expansion_amount_factor: (f64, f64),
    pub self_serve: Option<SelfServeConfig>,
    /// Subscription split stamped on sales-assisted deals, when the
    /// business sells subscriptions.
    pub subscription_type_weights: Option<Vec<(&'static str, u32)>>,

    // — activity generation —
    /// Overall weights used for non-deal relationship activities.
    pub activity_type_weights: TypeWeights,
    /// Deal-lifecycle weights: early skews to prospecting channels, late
    /// to closing channels.
    pub phase_type_weights: PhaseTable<TypeWeights>,
    /// Prospecting-skewed weights for outreach to deal-less accounts.
    pub outreach_type_weights: TypeWeights,
    pub activity_count_won: (u32, u32),
    pub activity_count_lost: (u32, u32),
    pub subjects: SubjectPools,
    pub phase_subjects: PhaseTable<SubjectPools>,
    /// Minutes per type; `None` for types with no duration.
    pub duration_ranges: [(ActivityType, Option<(u32, u32)>); 5],
    pub zero_activity_fraction: f64,
    pub outreach_fraction: f64,
    /// Non-deal relationship activities per account with deals.
    pub relationship_count: (u32, u32),
    /// Outreach activities per sampled deal-less account.
    pub outreach_count: (u32, u32),
}

impl Profile {
    pub fn for_kind(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::B2bSaas => b2b_saas::profile(),
            ProfileKind::Manufacturer => manufacturer::profile(),
            ProfileKind::Consultancy => consultancy::profile(),
        }
    }

    pub fn pipeline(&self, name: &str) -> &PipelineSpec {
        self.pipelines
            .iter()
            .find(|p| p.name == name)
            .unwrap_or_else(|| panic!("profile {} has no pipeline '{name}'", self.name))
    }

    /// Classify an account into a segment from its employee count.
    pub fn classify_segment(&self, employee_count: u32) -> &SegmentSpec {
        for seg in &self.segments {
            match seg.max_employees {
                Some(max) if employee_count <= max => return seg,
                Some(_) => continue,
                None => return seg,
            }
        }
        self.segments.last().expect("profile has no segments")
    }

    pub fn segment(&self, name: &str) -> Option<&SegmentSpec> {
        self.segments.iter().find(|s| s.name == name)
    }

    /// Segment-sensitive loss reason (enterprise deals fail for
    /// enterprise reasons: security reviews, spec compliance).
    pub fn roll_loss_reason(&self, segment: &str, rng: &mut GeneratorRng) -> &'static str {
        let table = if segment == "Enterprise" {
            &self.loss_reasons_enterprise
        } else {
            &self.loss_reasons_default
        };
        let weights: Vec<u32> = table.iter().map(|(_, w)| *w).collect();
        table[rng.weighted_index(&weights)].0
    }

    pub fn duration_range(&self, activity_type: ActivityType) -> Option<(u32, u32)> {
        self.duration_ranges[activity_type.index()].1
    }

    /// Whether deal CSVs for this profile carry a subscription_type
    /// column.
    pub fn has_subscription_types(&self) -> bool {
        self.self_serve.is_some() || self.subscription_type_weights.is_some()
    }
}

/// Weighted pick from a (value, weight) table.
pub(crate) fn roll_weighted<'a, T>(table: &'a [(T, u32)], rng: &mut GeneratorRng) -> &'a T {
    let weights: Vec<u32> = table.iter().map(|(_, w)| *w).collect();
    &table[rng.weighted_index(&weights)].0
}
