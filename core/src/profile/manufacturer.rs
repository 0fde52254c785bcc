//! Industrial manufacturers and distributors with procurement-driven
//! sales cycles. No self-serve motion; reorders stand in for renewals.

use super::*;

pub(super) fn profile() -> Profile {
    Profile {
        name: "Manufacturer",
        description: "Industrial manufacturers and distributors with procurement-driven sales cycles.",
        sales_reps: vec![
            "Tom Bradley",
            "Susan Park",
            "Robert Nguyen",
            "Lisa Martinez",
            "Brian Cooper",
            "Angela Wright",
        ],

        name_prefixes: vec![
            "Precision",
            "Allied",
            "National",
            "Superior",
            "Global",
            "Advanced",
            "Premier",
            "Continental",
            "Pacific",
            "Delta",
            "Atlas",
            "Sterling",
            "Apex",
            "Summit",
            "Pioneer",
            "Liberty",
            "Eagle",
            "Titan",
            "Patriot",
            "Crown",
        ],
        name_suffixes: vec![
            "Manufacturing",
            "Industries",
            "Components",
            "Fabrication",
            "Metals",
            "Engineering",
            "Products",
            "Systems",
            "Solutions",
            "Supply Co.",
            "Materials",
            "Tools",
            "Works",
            "Corp",
            "Technologies",
        ],
        name_words: vec![
            "Forge", "Gear", "Press", "Cast", "Mill", "Bolt", "Weld", "Mold", "Spring", "Shaft",
            "Plate", "Alloy", "Stamp", "Drill",
        ],
        industries: vec![
            "Automotive Parts",
            "Aerospace Components",
            "Industrial Machinery",
            "Metal Fabrication",
            "Plastics & Polymers",
            "Electronics Manufacturing",
            "Food & Beverage Processing",
            "Chemical Manufacturing",
            "Packaging & Containers",
            "Textile & Apparel",
            "Medical Devices",
            "Construction Materials",
        ],
        employee_tiers: vec![
            (25, 75, 20),
            (76, 150, 25),
            (151, 300, 25),
            (301, 750, 15),
            (751, 2000, 10),
            (2001, 5000, 5),
        ],
        revenue_per_employee: (40_000, 120_000),
        website_tlds: vec![".com", ".net", ".us", ".co"],
        description_templates: vec![
            "Leading {industry} manufacturer serving customers worldwide.",
            "Precision {industry} solutions for demanding applications.",
            "Trusted supplier of high-quality {industry} products since establishment.",
            "Full-service {industry} provider with vertically integrated operations.",
            "ISO-certified {industry} specialist with rapid turnaround capabilities.",
        ],
        founded_year_range: (1965, 2020),

        departments: vec![
            DepartmentSpec {
                name: "Sales",
                weight: 20,
                titles: vec![
                    "Regional Sales Manager",
                    "Account Manager",
                    "VP of Sales",
                    "Business Development Manager",
                    "Sales Engineer",
                    "Director of Sales",
                ],
            },
            DepartmentSpec {
                name: "Engineering",
                weight: 20,
                titles: vec![
                    "Manufacturing Engineer",
                    "Quality Engineer",
                    "Design Engineer",
                    "VP of Engineering",
                    "Process Engineer",
                    "Chief Engineer",
                ],
            },
            DepartmentSpec {
                name: "Operations",
                weight: 20,
                titles: vec![
                    "Plant Manager",
                    "Operations Director",
                    "COO",
                    "Production Manager",
                    "Supply Chain Manager",
                    "Logistics Coordinator",
                ],
            },
            DepartmentSpec {
                name: "Procurement",
                weight: 15,
                titles: vec![
                    "Purchasing Manager",
                    "Procurement Director",
                    "Buyer",
                    "VP of Procurement",
                    "Supply Chain Director",
                ],
            },
            DepartmentSpec {
                name: "Quality",
                weight: 10,
                titles: vec![
                    "Quality Manager",
                    "QA Director",
                    "Quality Control Inspector",
                    "VP of Quality",
                ],
            },
            DepartmentSpec {
                name: "Executive",
                weight: 8,
                titles: vec!["CEO", "President", "Owner", "General Manager"],
            },
            DepartmentSpec {
                name: "Finance",
                weight: 7,
                titles: vec!["CFO", "Controller", "Finance Director", "Accounting Manager"],
            },
        ],
        contacts_per_account: vec![(2, 35), (3, 35), (4, 20), (5, 10)],

        pipelines: vec![
            PipelineSpec {
                name: "New Accounts",
                stages: vec![
                    "Lead",
                    "Qualification",
                    "Sample/Trial",
                    "RFQ Response",
                    "Quote",
                    "PO Review",
                    "Closed Won",
                    "Closed Lost",
                ],
                won_stage: "Closed Won",
                lost_stage: "Closed Lost",
                outcome_rates: OutcomeRates {
                    won: 18,
                    lost: 60,
                    open: 22,
                },
                active_stage_weights: vec![
                    ("Lead", 10),
                    ("Qualification", 15),
                    ("Sample/Trial", 20),
                    ("RFQ Response", 25),
                    ("Quote", 20),
                    ("PO Review", 10),
                ],
            },
            PipelineSpec {
                name: "Reorders",
                stages: vec![
                    "Reorder Request",
                    "Quote",
                    "PO Received",
                    "Closed Won",
                    "Closed Lost",
                ],
                won_stage: "Closed Won",
                lost_stage: "Closed Lost",
                outcome_rates: OutcomeRates {
                    won: 90,
                    lost: 5,
                    open: 5,
                },
                active_stage_weights: vec![
                    ("Reorder Request", 30),
                    ("Quote", 40),
                    ("PO Received", 30),
                ],
            },
            PipelineSpec {
                name: "Custom/Engineered Solutions",
                stages: vec![
                    "Requirements Gathering",
                    "Engineering Review",
                    "Prototype",
                    "Quote",
                    "Negotiation",
                    "Closed Won",
                    "Closed Lost",
                ],
                won_stage: "Closed Won",
                lost_stage: "Closed Lost",
                outcome_rates: OutcomeRates {
                    won: 30,
                    lost: 45,
                    open: 25,
                },
                active_stage_weights: vec![
                    ("Requirements Gathering", 15),
                    ("Engineering Review", 25),
                    ("Prototype", 25),
                    ("Quote", 20),
                    ("Negotiation", 15),
                ],
            },
        ],
        primary_pipeline: "New Accounts",
        renewal_pipeline: "Reorders",
        expansion_pipeline: "Custom/Engineered Solutions",
        segments: vec![
            SegmentSpec {
                name: "SMB",
                max_employees: Some(99),
                acv_range: (5_000, 50_000),
                nb_cycle_days: (45, 90),
                activity_multiplier: 0.7,
            },
            SegmentSpec {
                name: "Mid-Market",
                max_employees: Some(500),
                acv_range: (50_000, 500_000),
                nb_cycle_days: (90, 180),
                activity_multiplier: 1.0,
            },
            SegmentSpec {
                name: "Enterprise",
                max_employees: None,
                acv_range: (500_000, 5_000_000),
                nb_cycle_days: (180, 365),
                activity_multiplier: 1.5,
            },
        ],
        renewal_cycle_days: (10, 30),
        expansion_cycle_days: (90, 270),
        loss_reasons_default: vec![
            ("Price Too High", 25),
            ("Chose Competitor", 20),
            ("Spec Non-Compliance", 15),
            ("Lead Time Too Long", 15),
            ("No Decision / Budget Freeze", 10),
            ("Failed Quality Audit", 10),
            ("Minimum Order Qty Issue", 5),
        ],
        loss_reasons_enterprise: vec![
            ("Price Too High", 15),
            ("Chose Competitor", 15),
            ("Spec Non-Compliance", 20),
            ("Lead Time Too Long", 10),
            ("No Decision / Budget Freeze", 15),
            ("Failed Quality Audit", 15),
            ("Minimum Order Qty Issue", 10),
        ],
        deal_name_style: DealNameStyle::PurchaseOrder,
        accounts_with_deals_fraction: 0.70,
        deal_count_weights: vec![(1, 50), (2, 35), (3, 15)],
        renewal_timing_days: (350, 380),
        expansion_probability: 0.50,
        expansion_timing_days: (90, 270),
        renewal_amount_factor: (0.95, 1.05),
        expansion_amount_factor: (0.20, 0.50),
        self_serve: None,
        subscription_type_weights: None,

        activity_type_weights: TypeWeights([30, 25, 25, 10, 10]),
        phase_type_weights: PhaseTable {
            early: TypeWeights([25, 25, 10, 30, 10]),
            mid: TypeWeights([25, 20, 35, 10, 10]),
            late: TypeWeights([40, 25, 20, 5, 10]),
        },
        outreach_type_weights: TypeWeights([30, 15, 5, 40, 10]),
        activity_count_won: (8, 16),
        activity_count_lost: (3, 7),
        subjects: SubjectPools {
            email: vec![
                "RFQ response follow-up",
                "Updated pricing sheet",
                "Sample shipment tracking",
                "Quality cert attached",
                "Lead time confirmation",
                "PO acknowledgment",
            ],
            phone_call: vec![
                "Initial inquiry call",
                "Spec clarification",
                "Quote review call",
                "Production status update",
                "Reorder discussion",
                "Complaint resolution",
            ],
            meeting: vec![
                "Plant tour",
                "Technical review meeting",
                "Contract negotiation",
                "Annual business review",
                "Quality audit",
                "Engineering design review",
            ],
            linkedin: vec![
                "Connection request",
                "Industry article share",
                "Trade show follow-up",
                "InMail introduction",
                "Company update engagement",
            ],
            note: vec![
                "Met at trade show",
                "Referral from distributor",
                "Internal capacity note",
                "Competitor pricing intel",
                "Seasonal demand note",
            ],
        },
        phase_subjects: PhaseTable {
            early: SubjectPools {
                email: vec!["RFQ response follow-up", "Quality cert attached"],
                phone_call: vec!["Initial inquiry call", "Spec clarification"],
                meeting: vec!["Plant tour", "Technical review meeting"],
                linkedin: vec![
                    "Connection request",
                    "InMail introduction",
                    "Trade show follow-up",
                ],
                note: vec!["Met at trade show", "Referral from distributor"],
            },
            mid: SubjectPools {
                email: vec!["Sample shipment tracking", "Updated pricing sheet"],
                phone_call: vec!["Quote review call", "Production status update"],
                meeting: vec!["Engineering design review", "Technical review meeting"],
                linkedin: vec!["Industry article share", "Company update engagement"],
                note: vec!["Competitor pricing intel", "Internal capacity note"],
            },
            late: SubjectPools {
                email: vec![
                    "PO acknowledgment",
                    "Lead time confirmation",
                    "Updated pricing sheet",
                ],
                phone_call: vec!["Reorder discussion", "Complaint resolution"],
                meeting: vec![
                    "Contract negotiation",
                    "Annual business review",
                    "Quality audit",
                ],
                linkedin: vec!["Company update engagement"],
                note: vec!["Seasonal demand note", "Internal capacity note"],
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
