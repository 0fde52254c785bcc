//! B2B SaaS: subscription sales with a product-led self-serve motion
//! alongside the sales-assisted pipelines.

use super::*;

pub(super) fn profile() -> Profile {
    Profile {
        name: "B2B SaaS",
        description: "Software-as-a-Service companies with subscription-based sales cycles.",
        sales_reps: vec![
            "Sarah Chen",
            "Marcus Johnson",
            "Emily Rodriguez",
            "David Kim",
            "Rachel Thompson",
            "James O'Brien",
        ],

        name_prefixes: vec![
            "Cloud", "Data", "Cyber", "Tech", "Net", "Digi", "Info", "Smart", "Sync", "Flow",
            "Stack", "Grid", "Node", "Pixel", "Byte", "Core", "Meta", "Hyper", "Ultra", "Prime",
            "Alpha", "Beta", "Quantum", "Vector", "Logic", "Signal", "Pulse", "Wave",
        ],
        name_suffixes: vec![
            "Labs", "Systems", "Solutions", "Tech", "Software", "IO", "AI", "Analytics", "Cloud",
            "Networks", "Dynamics", "Ware", "Works", "Hub", "Base", "Stack", "Logic", "Mind",
            "Sense", "Force", "Bridge", "Link", "Path", "Scale", "Shift", "Stream", "Vault",
        ],
        name_words: vec![
            "Point", "Metrics", "Forge", "Sphere", "Layer", "Deck", "Pilot", "Loop", "Board",
            "Lens", "Trail", "Craft", "Beam", "Cast", "Drift", "Frame",
        ],
        industries: vec![
            "Enterprise Software",
            "Cloud Infrastructure",
            "Cybersecurity",
            "Data Analytics",
            "Artificial Intelligence",
            "Developer Tools",
            "Marketing Technology",
            "Sales Enablement",
            "Human Resources Tech",
            "Financial Technology",
            "Healthcare Technology",
            "Supply Chain Software",
            "Customer Success",
            "Business Intelligence",
            "E-commerce Platform",
            "Communication & Collaboration",
            "Project Management",
            "Identity & Access Management",
            "DevOps & CI/CD",
            "API & Integration Platform",
        ],
        employee_tiers: vec![
            (50, 100, 30),
            (101, 250, 25),
            (251, 500, 20),
            (501, 1000, 15),
            (1001, 2500, 7),
            (2501, 5000, 3),
        ],
        revenue_per_employee: (50_000, 200_000),
        website_tlds: vec![".com", ".io", ".co", ".ai", ".tech"],
        description_templates: vec![
            "Leading provider of {industry} solutions for modern enterprises.",
            "Innovative {industry} platform helping businesses scale.",
            "Next-generation {industry} tools for growing teams.",
            "Enterprise-grade {industry} solutions with a focus on simplicity.",
            "Transforming how businesses approach {industry}.",
        ],
        founded_year_range: (2010, 2024),

        departments: vec![
            DepartmentSpec {
                name: "Sales",
                weight: 25,
                titles: vec![
                    "Account Executive",
                    "Sales Manager",
                    "VP of Sales",
                    "Sales Development Representative",
                    "Director of Sales",
                    "Chief Revenue Officer",
                    "Regional Sales Manager",
                ],
            },
            DepartmentSpec {
                name: "Marketing",
                weight: 15,
                titles: vec![
                    "Marketing Manager",
                    "VP of Marketing",
                    "CMO",
                    "Content Marketing Manager",
                    "Demand Generation Manager",
                    "Director of Marketing",
                ],
            },
            DepartmentSpec {
                name: "Customer Success",
                weight: 15,
                titles: vec![
                    "Customer Success Manager",
                    "VP of Customer Success",
                    "Director of Customer Success",
                    "Customer Success Associate",
                    "Head of Customer Success",
                ],
            },
            DepartmentSpec {
                name: "Engineering",
                weight: 10,
                titles: vec![
                    "Software Engineer",
                    "Engineering Manager",
                    "VP of Engineering",
                    "CTO",
                    "Senior Software Engineer",
                    "Principal Engineer",
                ],
            },
            DepartmentSpec {
                name: "Product",
                weight: 10,
                titles: vec![
                    "Product Manager",
                    "VP of Product",
                    "Chief Product Officer",
                    "Senior Product Manager",
                    "Director of Product",
                ],
            },
            DepartmentSpec {
                name: "Operations",
                weight: 10,
                titles: vec![
                    "Operations Manager",
                    "COO",
                    "Director of Operations",
                    "Business Operations Analyst",
                    "VP of Operations",
                ],
            },
            DepartmentSpec {
                name: "Executive",
                weight: 8,
                titles: vec!["CEO", "President", "Co-Founder", "Managing Director"],
            },
            DepartmentSpec {
                name: "Finance",
                weight: 7,
                titles: vec![
                    "CFO",
                    "Finance Manager",
                    "Controller",
                    "Director of Finance",
                    "Financial Analyst",
                ],
            },
        ],
        contacts_per_account: vec![(2, 35), (3, 35), (4, 20), (5, 10)],

        pipelines: vec![
            PipelineSpec {
                name: "New Business",
                stages: vec![
                    "Lead",
                    "Qualified",
                    "Discovery",
                    "Demo/Evaluation",
                    "Proposal",
                    "Negotiation",
                    "Closed Won",
                    "Closed Lost",
                ],
                won_stage: "Closed Won",
                lost_stage: "Closed Lost",
                outcome_rates: OutcomeRates {
                    won: 22,
                    lost: 58,
                    open: 20,
                },
                active_stage_weights: vec![
                    ("Lead", 10),
                    ("Qualified", 15),
                    ("Discovery", 25),
                    ("Demo/Evaluation", 25),
                    ("Proposal", 15),
                    ("Negotiation", 10),
                ],
            },
            PipelineSpec {
                name: "Renewal",
                stages: vec![
                    "Upcoming Renewal",
                    "Customer Review",
                    "Renewal Proposal",
                    "Negotiation",
                    "Closed Won",
                    "Closed Lost",
                ],
                won_stage: "Closed Won",
                lost_stage: "Closed Lost",
                outcome_rates: OutcomeRates {
                    won: 85,
                    lost: 10,
                    open: 5,
                },
                active_stage_weights: vec![
                    ("Upcoming Renewal", 20),
                    ("Customer Review", 30),
                    ("Renewal Proposal", 30),
                    ("Negotiation", 20),
                ],
            },
            PipelineSpec {
                name: "Expansion",
                stages: vec![
                    "Expansion Identified",
                    "Needs Analysis",
                    "Proposal",
                    "Negotiation",
                    "Closed Won",
                    "Closed Lost",
                ],
                won_stage: "Closed Won",
                lost_stage: "Closed Lost",
                outcome_rates: OutcomeRates {
                    won: 45,
                    lost: 30,
                    open: 25,
                },
                active_stage_weights: vec![
                    ("Expansion Identified", 15),
                    ("Needs Analysis", 30),
                    ("Proposal", 30),
                    ("Negotiation", 25),
                ],
            },
            PipelineSpec {
                name: "Self-Serve",
                stages: vec!["Signed Up", "Activated", "Trial", "Converted", "Churned"],
                won_stage: "Converted",
                lost_stage: "Churned",
                // Conversion-vs-churn split; signups always resolve.
                outcome_rates: OutcomeRates {
                    won: 15,
                    lost: 85,
                    open: 0,
                },
                active_stage_weights: vec![],
            },
        ],
        primary_pipeline: "New Business",
        renewal_pipeline: "Renewal",
        expansion_pipeline: "Expansion",
        segments: vec![
            SegmentSpec {
                name: "SMB",
                max_employees: Some(199),
                acv_range: (8_000, 25_000),
                nb_cycle_days: (30, 45),
                activity_multiplier: 0.8,
            },
            SegmentSpec {
                name: "Mid-Market",
                max_employees: Some(1000),
                acv_range: (25_000, 100_000),
                nb_cycle_days: (60, 90),
                activity_multiplier: 1.0,
            },
            SegmentSpec {
                name: "Enterprise",
                max_employees: None,
                acv_range: (100_000, 350_000),
                nb_cycle_days: (90, 180),
                activity_multiplier: 1.4,
            },
        ],
        renewal_cycle_days: (15, 30),
        expansion_cycle_days: (30, 60),
        loss_reasons_default: vec![
            ("Budget Constraints", 20),
            ("Went with Competitor", 25),
            ("No Decision Made", 20),
            ("Bad Timing", 10),
            ("Champion Left Company", 5),
            ("Failed Security Review", 5),
            ("Lost to Open Source", 10),
            ("Chose to Build In-House", 5),
        ],
        loss_reasons_enterprise: vec![
            ("Budget Constraints", 25),
            ("Went with Competitor", 15),
            ("No Decision Made", 15),
            ("Bad Timing", 5),
            ("Champion Left Company", 5),
            ("Failed Security Review", 20),
            ("Lost to Open Source", 5),
            ("Chose to Build In-House", 10),
        ],
        deal_name_style: DealNameStyle::CompanyPeriod,
        accounts_with_deals_fraction: 0.70,
        deal_count_weights: vec![(1, 50), (2, 35), (3, 15)],
        renewal_timing_days: (350, 380),
        expansion_probability: 0.50,
        expansion_timing_days: (90, 270),
        renewal_amount_factor: (0.95, 1.05),
        expansion_amount_factor: (0.20, 0.50),
        self_serve: Some(SelfServeConfig {
            pipeline: "Self-Serve",
            segment: "Self-Serve",
            fraction_of_accounts: 0.20,
            monthly_amount_range: (50, 500),
            annual_amount_range: (500, 5_000),
            subscription_split: vec![("Monthly", 60), ("Annual", 40)],
            conversion_days: (1, 14),
            churn_days: (1, 30),
            plg_to_sales_probability: 0.10,
            churn_reasons: vec![
                ("Never Activated", 30),
                ("Trial Expired", 30),
                ("Switched to Competitor", 15),
                ("Price Sensitivity", 15),
                ("Missing Features", 10),
            ],
        }),
        subscription_type_weights: Some(vec![("Annual", 70), ("Monthly", 30)]),

        activity_type_weights: TypeWeights([35, 20, 20, 15, 10]),
        phase_type_weights: PhaseTable {
            early: TypeWeights([20, 20, 10, 40, 10]),
            mid: TypeWeights([25, 20, 35, 10, 10]),
            late: TypeWeights([45, 20, 20, 5, 10]),
        },
        outreach_type_weights: TypeWeights([30, 15, 5, 40, 10]),
        activity_count_won: (10, 20),
        activity_count_lost: (4, 8),
        subjects: SubjectPools {
            email: vec![
                "Follow-up on pricing proposal",
                "Introduction to platform",
                "Sending case study",
                "Contract review",
                "ROI analysis attached",
                "Nurture - industry report",
            ],
            phone_call: vec![
                "Discovery call",
                "Quarterly business review",
                "Cold outreach",
                "Champion check-in",
                "Negotiation follow-up",
                "Renewal discussion",
            ],
            meeting: vec![
                "On-site demo",
                "Executive alignment",
                "Technical deep dive",
                "Kick-off call",
                "QBR",
                "Security review walkthrough",
            ],
            linkedin: vec![
                "Connection request",
                "InMail outreach",
                "Commented on post",
                "Shared company content",
                "Intro message via mutual connection",
            ],
            note: vec![
                "Met at SaaStr conference",
                "Referred by existing customer",
                "Internal handoff notes",
                "Competitor intel",
                "Budget cycle starts Q1",
            ],
        },
        phase_subjects: PhaseTable {
            early: SubjectPools {
                email: vec![
                    "Introduction to platform",
                    "Sending case study",
                    "Nurture - industry report",
                ],
                phone_call: vec!["Discovery call", "Cold outreach"],
                meeting: vec!["Kick-off call", "Technical deep dive"],
                linkedin: vec![
                    "Connection request",
                    "InMail outreach",
                    "Intro message via mutual connection",
                ],
                note: vec!["Met at SaaStr conference", "Referred by existing customer"],
            },
            mid: SubjectPools {
                email: vec!["Sending case study", "ROI analysis attached"],
                phone_call: vec!["Champion check-in", "Quarterly business review"],
                meeting: vec!["On-site demo", "Technical deep dive", "Executive alignment"],
                linkedin: vec!["Commented on post", "Shared company content"],
                note: vec!["Competitor intel", "Internal handoff notes"],
            },
            late: SubjectPools {
                email: vec![
                    "Follow-up on pricing proposal",
                    "Contract review",
                    "ROI analysis attached",
                ],
                phone_call: vec!["Negotiation follow-up", "Renewal discussion"],
                meeting: vec!["Executive alignment", "QBR", "Security review walkthrough"],
                linkedin: vec!["Shared company content"],
                note: vec!["Budget cycle starts Q1", "Internal handoff notes"],
            },
        },
        duration_ranges: [
            (ActivityType::Email, None),
            (ActivityType::PhoneCall, Some((10, 45))),
            (ActivityType::Meeting, Some((30, 90))),
            (ActivityType::LinkedIn, None),
            (ActivityType::Note, None),
        ],
        zero_activity_fraction: 0.10,
        outreach_fraction: 0.50,
        relationship_count: (1, 3),
        outreach_count: (1, 3),
    }
}
