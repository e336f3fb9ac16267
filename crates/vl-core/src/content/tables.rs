use super::*;

pub static PLANS: &[Plan] = &[
    Plan {
        id: "free",
        name: "Free",
        tagline: "For trying Vaultline on a single machine",
        monthly_price: Some(0),
        yearly_price: Some(0),
        features: &[
            "1 protected source",
            "5 GB encrypted storage",
            "Daily backups",
            "7-day retention",
            "Community support",
        ],
        highlighted: false,
    },
    Plan {
        id: "starter",
        name: "Starter",
        tagline: "For freelancers and small teams",
        monthly_price: Some(19),
        yearly_price: Some(190),
        features: &[
            "5 protected sources",
            "250 GB encrypted storage",
            "Hourly backups",
            "30-day retention",
            "Email support",
        ],
        highlighted: false,
    },
    Plan {
        id: "professional",
        name: "Professional",
        tagline: "For growing companies with real uptime needs",
        monthly_price: Some(49),
        yearly_price: Some(490),
        features: &[
            "25 protected sources",
            "2 TB encrypted storage",
            "15-minute backups",
            "1-year retention",
            "Point-in-time restore",
            "Priority support",
        ],
        highlighted: true,
    },
    Plan {
        id: "enterprise",
        name: "Enterprise",
        tagline: "For regulated industries and large fleets",
        monthly_price: None,
        yearly_price: None,
        features: &[
            "Unlimited sources",
            "Custom storage regions",
            "Continuous backups",
            "Custom retention and legal hold",
            "SSO and audit logs",
            "Dedicated success manager",
        ],
        highlighted: false,
    },
];

pub static PRICING_FAQS: &[Faq] = &[
    Faq {
        question: "Can I switch plans later?",
        answer: "Yes. Upgrades apply immediately and downgrades take effect at the end of the current billing period.",
        category: FaqCategory::Billing,
    },
    Faq {
        question: "What happens when I exceed my storage?",
        answer: "Backups keep running. We email you and bill overage at $0.02 per GB per month until you upgrade or prune retention.",
        category: FaqCategory::Billing,
    },
    Faq {
        question: "Is there a free trial for paid plans?",
        answer: "Every paid plan starts with a 14-day trial. No credit card is required to start.",
        category: FaqCategory::General,
    },
    Faq {
        question: "Do you offer discounts for nonprofits?",
        answer: "Registered nonprofits and schools get 40% off any paid plan. Contact sales with proof of status.",
        category: FaqCategory::Billing,
    },
];

pub static HELP_FAQS: &[Faq] = &[
    Faq {
        question: "How do I install the Vaultline agent?",
        answer: "Download the agent for your platform from the dashboard, run the installer and paste your enrollment token.",
        category: FaqCategory::General,
    },
    Faq {
        question: "How often are backups taken?",
        answer: "It depends on your plan and the schedule you set per source, from daily on Free down to continuous on Enterprise.",
        category: FaqCategory::Backups,
    },
    Faq {
        question: "Can I restore a single file?",
        answer: "Yes. Browse any snapshot in the dashboard and restore individual files or folders to the original or a new location.",
        category: FaqCategory::Backups,
    },
    Faq {
        question: "Where is my data stored?",
        answer: "In the region you pick at sign-up. Data never leaves that region unless you configure cross-region replication.",
        category: FaqCategory::Security,
    },
    Faq {
        question: "Is my data encrypted?",
        answer: "Backups are encrypted on your machine with AES-256 before upload and stay encrypted at rest.",
        category: FaqCategory::Security,
    },
    Faq {
        question: "How do I update my payment method?",
        answer: "Open Settings, then Billing, and choose Update card. Invoices are emailed to the billing contact.",
        category: FaqCategory::Billing,
    },
    Faq {
        question: "What happens to my backups if I cancel?",
        answer: "Snapshots stay restorable for 30 days after cancellation, then they are permanently deleted.",
        category: FaqCategory::General,
    },
];

pub static BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "introducing-continuous-backups",
        title: "Introducing continuous backups",
        excerpt: "Block-level change tracking brings recovery points down to seconds for Enterprise customers.",
        category: BlogCategory::Product,
        author: "Maya Lindqvist",
        published: "2024-09-12",
        read_minutes: 5,
    },
    BlogPost {
        slug: "deduplication-at-scale",
        title: "How we deduplicate 40 PB of backups",
        excerpt: "Content-defined chunking, a rolling hash and a lot of careful indexing.",
        category: BlogCategory::Engineering,
        author: "Tomás Ferreira",
        published: "2024-08-28",
        read_minutes: 12,
    },
    BlogPost {
        slug: "ransomware-recovery-playbook",
        title: "A ransomware recovery playbook",
        excerpt: "Immutable snapshots, isolated credentials and the restore drill every team should run quarterly.",
        category: BlogCategory::Security,
        author: "Priya Raman",
        published: "2024-08-14",
        read_minutes: 9,
    },
    BlogPost {
        slug: "backing-up-postgres-without-downtime",
        title: "Backing up Postgres without downtime",
        excerpt: "WAL archiving and base backups explained, with a working Vaultline configuration.",
        category: BlogCategory::Guides,
        author: "Daniel Okafor",
        published: "2024-07-30",
        read_minutes: 8,
    },
    BlogPost {
        slug: "soc2-type-ii",
        title: "Vaultline is now SOC 2 Type II certified",
        excerpt: "What the audit covered and what it means for your compliance reviews.",
        category: BlogCategory::Security,
        author: "Priya Raman",
        published: "2024-07-02",
        read_minutes: 4,
    },
    BlogPost {
        slug: "series-a",
        title: "Our Series A and what comes next",
        excerpt: "New funding to expand storage regions and grow the support team.",
        category: BlogCategory::Company,
        author: "Elena Voss",
        published: "2024-06-18",
        read_minutes: 3,
    },
    BlogPost {
        slug: "restore-drills",
        title: "Automated restore drills",
        excerpt: "Schedule test restores and get a report proving your backups actually work.",
        category: BlogCategory::Product,
        author: "Maya Lindqvist",
        published: "2024-06-04",
        read_minutes: 6,
    },
    BlogPost {
        slug: "321-rule",
        title: "The 3-2-1 rule in 2024",
        excerpt: "Three copies, two media, one offsite. Still good advice, with a few cloud-era caveats.",
        category: BlogCategory::Guides,
        author: "Daniel Okafor",
        published: "2024-05-21",
        read_minutes: 7,
    },
    BlogPost {
        slug: "agent-in-rust",
        title: "Rewriting our backup agent",
        excerpt: "Lower memory use, faster scans and fewer support tickets after moving the agent to a new codebase.",
        category: BlogCategory::Engineering,
        author: "Tomás Ferreira",
        published: "2024-05-07",
        read_minutes: 10,
    },
];

pub static SETUP_GUIDES: &[SetupGuide] = &[
    SetupGuide {
        title: "PostgreSQL",
        summary: "Continuous WAL archiving plus nightly base backups.",
        category: GuideCategory::Databases,
        minutes: 15,
        difficulty: Difficulty::Intermediate,
    },
    SetupGuide {
        title: "MySQL and MariaDB",
        summary: "Consistent dumps with binlog shipping for point-in-time restore.",
        category: GuideCategory::Databases,
        minutes: 15,
        difficulty: Difficulty::Intermediate,
    },
    SetupGuide {
        title: "MongoDB",
        summary: "Replica set snapshots without pausing writes.",
        category: GuideCategory::Databases,
        minutes: 20,
        difficulty: Difficulty::Advanced,
    },
    SetupGuide {
        title: "Amazon S3",
        summary: "Protect buckets against deletion and versioning gaps.",
        category: GuideCategory::Cloud,
        minutes: 10,
        difficulty: Difficulty::Beginner,
    },
    SetupGuide {
        title: "Google Cloud Storage",
        summary: "Service account setup and bucket selection.",
        category: GuideCategory::Cloud,
        minutes: 10,
        difficulty: Difficulty::Beginner,
    },
    SetupGuide {
        title: "Linux servers",
        summary: "Install the agent with systemd and choose which paths to protect.",
        category: GuideCategory::Servers,
        minutes: 5,
        difficulty: Difficulty::Beginner,
    },
    SetupGuide {
        title: "Windows Server",
        summary: "Volume shadow copy backups for files and system state.",
        category: GuideCategory::Servers,
        minutes: 10,
        difficulty: Difficulty::Intermediate,
    },
    SetupGuide {
        title: "Google Workspace",
        summary: "Back up Gmail, Drive and Calendar for every user in your domain.",
        category: GuideCategory::Saas,
        minutes: 10,
        difficulty: Difficulty::Beginner,
    },
    SetupGuide {
        title: "Microsoft 365",
        summary: "Exchange Online, OneDrive and SharePoint coverage via app consent.",
        category: GuideCategory::Saas,
        minutes: 15,
        difficulty: Difficulty::Intermediate,
    },
];

pub static INTEGRATIONS: &[Integration] = &[
    Integration {
        id: "postgresql",
        name: "PostgreSQL",
        description: "Native WAL-based backups.",
        category: IntegrationCategory::Database,
        votes: 0,
        available: true,
    },
    Integration {
        id: "mysql",
        name: "MySQL",
        description: "Hot backups with binlog replay.",
        category: IntegrationCategory::Database,
        votes: 0,
        available: true,
    },
    Integration {
        id: "redis",
        name: "Redis",
        description: "RDB and AOF snapshot capture.",
        category: IntegrationCategory::Database,
        votes: 412,
        available: false,
    },
    Integration {
        id: "clickhouse",
        name: "ClickHouse",
        description: "Partition-aware backups for analytics clusters.",
        category: IntegrationCategory::Database,
        votes: 287,
        available: false,
    },
    Integration {
        id: "s3",
        name: "Amazon S3",
        description: "Bucket protection with object lock.",
        category: IntegrationCategory::Storage,
        votes: 0,
        available: true,
    },
    Integration {
        id: "backblaze-b2",
        name: "Backblaze B2",
        description: "Use B2 as a secondary copy target.",
        category: IntegrationCategory::Storage,
        votes: 356,
        available: false,
    },
    Integration {
        id: "notion",
        name: "Notion",
        description: "Workspace pages and databases.",
        category: IntegrationCategory::Productivity,
        votes: 521,
        available: false,
    },
    Integration {
        id: "slack",
        name: "Slack",
        description: "Message history and shared files.",
        category: IntegrationCategory::Productivity,
        votes: 498,
        available: false,
    },
    Integration {
        id: "github",
        name: "GitHub",
        description: "Repositories, issues and wikis.",
        category: IntegrationCategory::DevOps,
        votes: 644,
        available: false,
    },
    Integration {
        id: "kubernetes",
        name: "Kubernetes",
        description: "Persistent volumes and cluster manifests.",
        category: IntegrationCategory::DevOps,
        votes: 733,
        available: false,
    },
];

pub static JOB_OPENINGS: &[JobOpening] = &[
    JobOpening {
        id: "senior-backend-engineer",
        title: "Senior Backend Engineer, Storage",
        team: "Engineering",
        location: "Remote (EU)",
        kind: "Full-time",
        summary: "Own the chunk store and deduplication pipeline that holds every customer backup.",
    },
    JobOpening {
        id: "agent-engineer",
        title: "Systems Engineer, Backup Agent",
        team: "Engineering",
        location: "Remote (Americas)",
        kind: "Full-time",
        summary: "Make the agent faster and lighter on Linux, Windows and macOS.",
    },
    JobOpening {
        id: "support-engineer",
        title: "Customer Support Engineer",
        team: "Support",
        location: "Lisbon or Remote",
        kind: "Full-time",
        summary: "Help customers through restores on the worst day of their year.",
    },
    JobOpening {
        id: "product-marketer",
        title: "Product Marketing Manager",
        team: "Marketing",
        location: "Berlin",
        kind: "Full-time",
        summary: "Tell the story of reliable backups to IT teams and developers.",
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "We restored 2 TB after a ransomware hit in under an hour. Vaultline paid for itself that day.",
        author: "Sarah Kim",
        role: "IT Director, Northwind Logistics",
    },
    Testimonial {
        quote: "Setup took ten minutes and I haven't thought about backups since. Which is exactly the point.",
        author: "Marcus Hale",
        role: "CTO, Fieldnote",
    },
    Testimonial {
        quote: "The restore drill reports made our SOC 2 audit painless.",
        author: "Aisha Bello",
        role: "Head of Security, Ledgerly",
    },
];

pub static CERTIFICATES: &[Certificate] = &[
    Certificate {
        name: "SOC 2 Type II",
        issuer: "Independent CPA firm",
        description: "Annual audit of security, availability and confidentiality controls.",
    },
    Certificate {
        name: "ISO/IEC 27001",
        issuer: "Accredited certification body",
        description: "Certified information security management system.",
    },
    Certificate {
        name: "GDPR",
        issuer: "Self-assessed, DPA available",
        description: "EU data residency and a signed data processing agreement on request.",
    },
    Certificate {
        name: "HIPAA",
        issuer: "BAA available on Enterprise",
        description: "Safeguards for protected health information.",
    },
];

pub static FEATURES: &[Feature] = &[
    Feature {
        icon: "⏱",
        title: "Set-and-forget schedules",
        description: "Pick a frequency per source and Vaultline handles the rest, including retries.",
    },
    Feature {
        icon: "🔐",
        title: "Client-side encryption",
        description: "AES-256 on your machine before anything leaves it. We never see your keys.",
    },
    Feature {
        icon: "♻",
        title: "Deduplicated storage",
        description: "Only changed blocks are uploaded, so backups are fast and storage stays small.",
    },
    Feature {
        icon: "⏪",
        title: "Point-in-time restore",
        description: "Roll a database or folder back to any recovery point within your retention.",
    },
    Feature {
        icon: "🧪",
        title: "Restore drills",
        description: "Scheduled test restores prove your backups work before you need them.",
    },
    Feature {
        icon: "📜",
        title: "Audit trail",
        description: "Every backup, restore and settings change is logged and exportable.",
    },
];

pub static HELP_TOPICS: &[HelpTopic] = &[
    HelpTopic {
        slug: "docs",
        title: "Documentation",
        summary: "Browse every Vaultline guide and reference page.",
        sections: &[
            ("Getting started", "Create an account, install the agent and run your first backup."),
            ("Sources", "Files, databases, cloud buckets and SaaS apps each have a setup guide."),
            ("Reference", "Agent configuration, CLI flags and API endpoints."),
        ],
    },
    HelpTopic {
        slug: "quick-start",
        title: "Quick start",
        summary: "From sign-up to first backup in about five minutes.",
        sections: &[
            ("1. Create your account", "Sign up and choose a storage region."),
            ("2. Install the agent", "Download it from the dashboard and paste your enrollment token."),
            ("3. Add a source", "Pick the folders or databases to protect."),
            ("4. Run a backup", "Start one manually or wait for the first scheduled run."),
        ],
    },
    HelpTopic {
        slug: "backups",
        title: "Backups and schedules",
        summary: "Frequencies, retention and what happens when a run fails.",
        sections: &[
            ("Schedules", "Each source has its own frequency, limited by your plan."),
            ("Retention", "Snapshots older than your retention window are pruned automatically."),
            ("Failures", "Failed runs retry three times and then alert the account owner."),
        ],
    },
    HelpTopic {
        slug: "restore",
        title: "Restoring data",
        summary: "Single files, whole machines and point-in-time database restores.",
        sections: &[
            ("Browse snapshots", "Open a source and pick any recovery point."),
            ("Restore targets", "Restore in place, to another path or to another machine."),
            ("Databases", "Choose a timestamp and Vaultline replays logs up to that point."),
        ],
    },
    HelpTopic {
        slug: "billing",
        title: "Billing and plans",
        summary: "Invoices, payment methods and changing plans.",
        sections: &[
            ("Invoices", "Invoices are emailed monthly and listed under Settings, Billing."),
            ("Changing plans", "Upgrades apply immediately; downgrades apply at renewal."),
        ],
    },
    HelpTopic {
        slug: "api",
        title: "API and integrations",
        summary: "Automate Vaultline with the REST API and webhooks.",
        sections: &[
            ("Tokens", "Create scoped API tokens under Settings, Developers."),
            ("Webhooks", "Receive events for completed, failed and restored runs."),
        ],
    },
    HelpTopic {
        slug: "account",
        title: "Account and sign-in",
        summary: "Passwords, two-factor authentication and team members.",
        sections: &[
            ("Reset your password", "Use the forgot password page; links expire after one hour."),
            ("Two-factor authentication", "Enable TOTP under Settings, Security."),
            ("Team members", "Invite colleagues and assign roles from Settings, Team."),
        ],
    },
];
