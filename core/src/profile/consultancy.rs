//! Consulting and professional services firms. Engagement-based naming,
//! follow-on projects as the expansion motion, retainer renewals.

use super::*;

const ENGAGEMENT_TYPES: [&str; 12] = [
    "Digital Transformation",
    "Process Optimization",
    "Strategic Planning",
    "Org Restructuring",
    "System Implementation",
    "Market Entry Strategy",
    "Operational Assessment",
    "Change Management",
    "Cost Reduction Initiative",
    "Growth Strategy",
    "M&A Due Diligence",
    "Technology Roadmap",
];

pub(super) fn profile() -> Profile {
    Profile {
        name: "Consultancy",
        description: "Consulting and professional services firms with engagement-based sales cycles.",
        sales_reps: vec![
            "Catherine Brooks",
            "Daniel Reeves",
            "Patricia Morales",
            "Andrew Fleming",
            "Jessica Thornton",
            "Michael Lancaster",
        ],

        name_prefixes: vec![
            "Meridian",
            "Elevate",
            "Catalyst",
            "Pinnacle",
            "Sterling",
            "Keystone",
            "Vantage",
            "Summit",
            "Nexus",
            "Beacon",
            "Clarity",
            "Stratton",
            "Archer",
            "Crestview",
            "Whitfield",
        ],
        name_suffixes: vec![
            "Consulting Group",
            "Advisory",
            "Partners",
            "& Associates",
            "Solutions",
            "Strategy Group",
            "Consulting",
            "Group",
        ],
        name_words: vec![
            "point", "bridge", "north", "field", "gate", "crest", "haven", "ridge", "brook",
            "wood", "view", "stone",
        ],
        industries: vec![
            "Management Consulting",
            "IT Consulting",
            "Financial Advisory",
            "Human Capital Consulting",
            "Strategy Consulting",
            "Operations Consulting",
            "Risk & Compliance",
            "Digital Transformation",
            "Healthcare Consulting",
            "Environmental Consulting",
            "Legal Consulting",
            "Marketing & Brand Strategy",
        ],
        employee_tiers: vec![
            (10, 30, 25),
            (31, 75, 25),
            (76, 200, 20),
            (201, 500, 15),
            (501, 1500, 10),
            (1501, 5000, 5),
        ],
        revenue_per_employee: (80_000, 250_000),
        website_tlds: vec![".com", ".co", ".consulting", ".net"],
        description_templates: vec![
            "Trusted {industry} partner helping organizations drive growth.",
            "Boutique {industry} firm delivering measurable business outcomes.",
            "Leading {industry} practice serving Fortune 500 and mid-market clients.",
            "Expert {industry} advisors with deep domain expertise.",
            "Results-driven {industry} consultancy focused on sustainable impact.",
        ],
        founded_year_range: (1990, 2023),

        departments: vec![
            DepartmentSpec {
                name: "Sales",
                weight: 20,
                titles: vec![
                    "Business Development Director",
                    "Client Partner",
                    "VP of Business Development",
                    "Engagement Manager",
                    "Sales Director",
                ],
            },
            DepartmentSpec {
                name: "Consulting",
                weight: 25,
                titles: vec![
                    "Senior Consultant",
                    "Principal Consultant",
                    "Managing Consultant",
                    "Associate Consultant",
                    "Director of Consulting",
                ],
            },
            DepartmentSpec {
                name: "Operations",
                weight: 15,
                titles: vec![
                    "COO",
                    "Director of Operations",
                    "Practice Manager",
                    "Resource Manager",
                    "VP of Operations",
                ],
            },
            DepartmentSpec {
                name: "Executive",
                weight: 15,
                titles: vec![
                    "Managing Partner",
                    "Senior Partner",
                    "CEO",
                    "Founder",
                    "President",
                ],
            },
            DepartmentSpec {
                name: "Finance",
                weight: 8,
                titles: vec!["CFO", "Finance Director", "Controller", "Billing Manager"],
            },
            DepartmentSpec {
                name: "Marketing",
                weight: 10,
                titles: vec![
                    "Marketing Director",
                    "VP of Marketing",
                    "Content Strategist",
                    "Thought Leadership Manager",
                ],
            },
            DepartmentSpec {
                name: "Human Resources",
                weight: 7,
                titles: vec![
                    "HR Director",
                    "Talent Acquisition Lead",
                    "VP of People",
                    "Recruiting Manager",
                ],
            },
        ],
        contacts_per_account: vec![(2, 35), (3, 35), (4, 20), (5, 10)],

        pipelines: vec![
            PipelineSpec {
                name: "New Engagements",
                stages: vec![
                    "Opportunity Qualified",
                    "Discovery",
                    "Proposal",
                    "Negotiation",
                    "Verbal",
                    "Closed Won",
                    "Closed Lost",
                ],
                won_stage: "Closed Won",
                lost_stage: "Closed Lost",
                outcome_rates: OutcomeRates {
                    won: 25,
                    lost: 55,
                    open: 20,
                },
                active_stage_weights: vec![
                    ("Opportunity Qualified", 10),
                    ("Discovery", 25),
                    ("Proposal", 30),
                    ("Negotiation", 20),
                    ("Verbal", 15),
                ],
            },
            PipelineSpec {
                name: "Follow-On Projects",
                stages: vec![
                    "Opportunity Identified",
                    "Scoping",
                    "Proposal",
                    "Verbal",
                    "Closed Won",
                    "Closed Lost",
                ],
                won_stage: "Closed Won",
                lost_stage: "Closed Lost",
                outcome_rates: OutcomeRates {
                    won: 60,
                    lost: 20,
                    open: 20,
                },
                active_stage_weights: vec![
                    ("Opportunity Identified", 15),
                    ("Scoping", 30),
                    ("Proposal", 30),
                    ("Verbal", 25),
                ],
            },
            PipelineSpec {
                name: "Retainer Renewals",
                stages: vec![
                    "Renewal Discussion",
                    "Scope Review",
                    "Terms",
                    "Verbal",
                    "Closed Won",
                    "Closed Lost",
                ],
                won_stage: "Closed Won",
                lost_stage: "Closed Lost",
                outcome_rates: OutcomeRates {
                    won: 80,
                    lost: 12,
                    open: 8,
                },
                active_stage_weights: vec![
                    ("Renewal Discussion", 20),
                    ("Scope Review", 30),
                    ("Terms", 30),
                    ("Verbal", 20),
                ],
            },
        ],
        primary_pipeline: "New Engagements",
        renewal_pipeline: "Retainer Renewals",
        expansion_pipeline: "Follow-On Projects",
        segments: vec![
            SegmentSpec {
                name: "SMB",
                max_employees: Some(199),
                acv_range: (25_000, 100_000),
                nb_cycle_days: (30, 60),
                activity_multiplier: 0.8,
            },
            SegmentSpec {
                name: "Mid-Market",
                max_employees: Some(1000),
                acv_range: (100_000, 500_000),
                nb_cycle_days: (60, 120),
                activity_multiplier: 1.0,
            },
            SegmentSpec {
                name: "Enterprise",
                max_employees: None,
                acv_range: (500_000, 2_000_000),
                nb_cycle_days: (120, 240),
                activity_multiplier: 1.3,
            },
        ],
        renewal_cycle_days: (15, 45),
        expansion_cycle_days: (20, 60),
        loss_reasons_default: vec![
            ("Budget Constraints", 20),
            ("Chose Competitor", 20),
            ("Project Deprioritized", 15),
            ("Internal Resources Preferred", 15),
            ("Scope Mismatch", 10),
            ("Timing / Budget Cycle", 10),
            ("Key Stakeholder Left", 10),
        ],
        loss_reasons_enterprise: vec![
            ("Budget Constraints", 15),
            ("Chose Competitor", 25),
            ("Project Deprioritized", 15),
            ("Internal Resources Preferred", 10),
            ("Scope Mismatch", 15),
            ("Timing / Budget Cycle", 10),
            ("Key Stakeholder Left", 10),
        ],
        deal_name_style: DealNameStyle::Engagement(ENGAGEMENT_TYPES.to_vec()),
        accounts_with_deals_fraction: 0.70,
        deal_count_weights: vec![(1, 50), (2, 35), (3, 15)],
        renewal_timing_days: (350, 380),
        expansion_probability: 0.50,
        expansion_timing_days: (90, 270),
        renewal_amount_factor: (0.95, 1.05),
        expansion_amount_factor: (0.20, 0.50),
        self_serve: None,
        subscription_type_weights: None,

        activity_type_weights: TypeWeights([30, 15, 30, 15, 10]),
        phase_type_weights: PhaseTable {
            early: TypeWeights([20, 15, 15, 40, 10]),
            mid: TypeWeights([25, 15, 40, 10, 10]),
            late: TypeWeights([40, 15, 25, 5, 15]),
        },
        outreach_type_weights: TypeWeights([30, 15, 5, 40, 10]),
        activity_count_won: (10, 18),
        activity_count_lost: (4, 8),
        subjects: SubjectPools {
            email: vec![
                "Proposal follow-up",
                "Engagement scope outline",
                "Case study - similar project",
                "Statement of work draft",
                "Rate card and availability",
                "Thought leadership piece",
            ],
            phone_call: vec![
                "Needs assessment call",
                "Stakeholder alignment call",
                "Scope clarification",
                "Partner introduction",
                "Project status check-in",
                "Retainer renewal discussion",
            ],
            meeting: vec![
                "Discovery workshop",
                "Proposal presentation",
                "Executive sponsor meeting",
                "Project kick-off",
                "Quarterly business review",
                "Strategy alignment session",
            ],
            linkedin: vec![
                "Connection request",
                "Thought leadership share",
                "InMail introduction",
                "Conference follow-up",
                "Article engagement",
            ],
            note: vec![
                "Met at industry conference",
                "Referral from partner firm",
                "Internal team briefing",
                "Competitive intelligence",
                "Budget cycle timing note",
            ],
        },
        phase_subjects: PhaseTable {
            early: SubjectPools {
                email: vec![
                    "Engagement scope outline",
                    "Case study - similar project",
                    "Thought leadership piece",
                ],
                phone_call: vec!["Needs assessment call", "Partner introduction"],
                meeting: vec!["Discovery workshop", "Strategy alignment session"],
                linkedin: vec![
                    "Connection request",
                    "InMail introduction",
                    "Conference follow-up",
                ],
                note: vec!["Met at industry conference", "Referral from partner firm"],
            },
            mid: SubjectPools {
                email: vec!["Case study - similar project", "Rate card and availability"],
                phone_call: vec!["Stakeholder alignment call", "Scope clarification"],
                meeting: vec!["Proposal presentation", "Executive sponsor meeting"],
                linkedin: vec!["Thought leadership share", "Article engagement"],
                note: vec!["Competitive intelligence", "Internal team briefing"],
            },
            late: SubjectPools {
                email: vec![
                    "Proposal follow-up",
                    "Statement of work draft",
                    "Rate card and availability",
                ],
                phone_call: vec!["Project status check-in", "Retainer renewal discussion"],
                meeting: vec!["Executive sponsor meeting", "Quarterly business review"],
                linkedin: vec!["Article engagement"],
                note: vec!["Budget cycle timing note", "Internal team briefing"],
            },
        },
        duration_ranges: [
            (ActivityType::Email, None),
            (ActivityType::PhoneCall, Some((15, 45))),
            (ActivityType::Meeting, Some((45, 120))),
            (ActivityType::LinkedIn, None),
            (ActivityType::Note, None),
        ],
        zero_activity_fraction: 0.10,
        outreach_fraction: 0.50,
        relationship_count: (1, 3),
        outreach_count: (1, 3),
    }
}
