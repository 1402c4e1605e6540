//! Fixed sampling pools for synthetic postings and lookup tables shared with
//! the API (countries, sources).

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Company {
    pub name: &'static str,
    pub domain: &'static str,
    pub logo: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

macro_rules! company {
    ($name:literal, $domain:literal) => {
        Company {
            name: $name,
            domain: $domain,
            logo: concat!("https://logo.clearbit.com/", $domain),
        }
    };
}

pub const COMPANIES: &[Company] = &[
    company!("Nubank", "nubank.com.br"),
    company!("Mercado Livre", "mercadolibre.com"),
    company!("iFood", "ifood.com.br"),
    company!("Stone", "stone.co"),
    company!("Netflix", "netflix.com"),
    company!("Google", "google.com"),
    company!("Stripe", "stripe.com"),
    company!("Spotify", "spotify.com"),
    company!("Meta", "meta.com"),
    company!("Amazon", "amazon.com"),
    company!("Uber", "uber.com"),
    company!("PicPay", "picpay.com"),
    company!("Banco Inter", "bancointer.com.br"),
    company!("Shopify", "shopify.com"),
    company!("Vercel", "vercel.com"),
    company!("Globo", "globo.com"),
    company!("Atlassian", "atlassian.com"),
    company!("Booking.com", "booking.com"),
    company!("Adyen", "adyen.com"),
    company!("XP Inc", "xpi.com.br"),
    company!("Itau", "itau.com.br"),
    company!("Bradesco", "bradesco.com.br"),
    company!("Totvs", "totvs.com"),
    company!("Buser", "buser.com.br"),
    company!("Hotmart", "hotmart.com"),
    company!("Microsoft", "microsoft.com"),
    company!("Apple", "apple.com"),
    company!("Tesla", "tesla.com"),
    company!("Twitter", "twitter.com"),
    company!("LinkedIn", "linkedin.com"),
];

pub const ROLES: &[&str] = &[
    "Senior Full Stack Developer",
    "Backend Engineer",
    "Tech Lead Frontend",
    "DevOps Engineer",
    "Software Engineer Python",
    "QA Automation",
    "Mobile Developer Flutter",
    "iOS Developer",
    "Data Engineer",
    "Machine Learning Engineer",
    "Cloud Architect",
    "Security Engineer",
    "Site Reliability Engineer",
    "Product Designer",
    "Solutions Architect",
    "Golang Developer",
    "React Developer",
    "Node.js Backend Developer",
    "Java Software Engineer",
    "Data Scientist",
];

pub const TECH_BUNDLES: &[&[&str]] = &[
    &["React", "Node.js", "TypeScript", "AWS", "PostgreSQL"],
    &["Java", "Spring Boot", "Kafka", "MySQL", "Redis"],
    &["Python", "Django", "FastAPI", "Docker", "Kubernetes"],
    &["Go", "gRPC", "PostgreSQL", "Kubernetes", "AWS"],
    &["Kotlin", "Jetpack Compose", "MVVM", "Coroutines"],
    &["Swift", "SwiftUI", "Combine", "Core Data"],
    &["Ruby on Rails", "MySQL", "Redis", "GraphQL"],
    &["Scala", "Spark", "Airflow", "BigQuery"],
    &["C++", "RTOS", "Python", "MATLAB"],
    &["Flutter", "Dart", "Firebase", "GraphQL"],
];

/// Boards credited on synthetic postings. The first six are Brazilian boards,
/// the rest international.
pub const SOURCES: &[&str] = &[
    "LinkedIn Jobs",
    "Vagas.com.br",
    "InfoJobs",
    "Empregos.com.br",
    "DevVagas",
    "Indeed",
    "DevJobsScanner",
    "SlashJobs",
    "Jooble",
    "Adzuna",
    "Whatjobs",
    "Trabalhe Conosco (Direto)",
];

pub const BRAZILIAN_SOURCE_COUNT: usize = 6;

pub const LOCATIONS_BY_COUNTRY: &[(&str, &[&str])] = &[
    (
        "BR",
        &[
            "São Paulo, SP",
            "Rio de Janeiro, RJ",
            "Belo Horizonte, MG",
            "Curitiba, PR",
            "Florianópolis, SC",
            "Remote - Brazil",
        ],
    ),
    (
        "US",
        &[
            "San Francisco, CA",
            "New York, NY",
            "Remote - USA",
            "Austin, TX",
            "Seattle, WA",
        ],
    ),
    ("PT", &["Lisbon", "Porto", "Remote - Portugal"]),
    ("UK", &["London", "Remote - UK", "Manchester"]),
    ("DE", &["Berlin", "Munich", "Remote - Germany"]),
    ("CA", &["Toronto", "Remote - Canada", "Vancouver"]),
    ("NL", &["Amsterdam", "Remote - Netherlands"]),
    ("ES", &["Madrid", "Barcelona", "Remote - Spain"]),
    ("AU", &["Sydney", "Melbourne", "Remote - Australia"]),
    ("FR", &["Paris", "Remote - France"]),
    ("IT", &["Milan", "Remote - Italy"]),
    ("JP", &["Tokyo", "Remote - Japan"]),
    ("IN", &["Bangalore", "Remote - India"]),
    ("MX", &["Mexico City", "Remote - Mexico"]),
    ("AR", &["Buenos Aires", "Remote - Argentina"]),
    ("CO", &["Bogotá", "Remote - Colombia"]),
    ("CL", &["Santiago", "Remote - Chile"]),
    ("ZA", &["Cape Town", "Remote - South Africa"]),
    ("AE", &["Dubai", "Remote - UAE"]),
    ("SG", &["Singapore", "Remote - Singapore"]),
    ("IE", &["Dublin", "Remote - Ireland"]),
    ("NZ", &["Auckland", "Remote - New Zealand"]),
    ("CH", &["Zurich", "Remote - Switzerland"]),
    ("SE", &["Stockholm", "Remote - Sweden"]),
];

pub const COUNTRIES: &[Country] = &[
    Country { code: "BR", name: "Brazil", flag: "🇧🇷" },
    Country { code: "US", name: "United States", flag: "🇺🇸" },
    Country { code: "PT", name: "Portugal", flag: "🇵🇹" },
    Country { code: "UK", name: "United Kingdom", flag: "🇬🇧" },
    Country { code: "DE", name: "Germany", flag: "🇩🇪" },
    Country { code: "CA", name: "Canada", flag: "🇨🇦" },
    Country { code: "NL", name: "Netherlands", flag: "🇳🇱" },
    Country { code: "ES", name: "Spain", flag: "🇪🇸" },
    Country { code: "AU", name: "Australia", flag: "🇦🇺" },
    Country { code: "FR", name: "France", flag: "🇫🇷" },
    Country { code: "IT", name: "Italy", flag: "🇮🇹" },
    Country { code: "JP", name: "Japan", flag: "🇯🇵" },
    Country { code: "IN", name: "India", flag: "🇮🇳" },
    Country { code: "MX", name: "Mexico", flag: "🇲🇽" },
    Country { code: "AR", name: "Argentina", flag: "🇦🇷" },
    Country { code: "CO", name: "Colombia", flag: "🇨🇴" },
    Country { code: "CL", name: "Chile", flag: "🇨🇱" },
    Country { code: "ZA", name: "South Africa", flag: "🇿🇦" },
    Country { code: "AE", name: "United Arab Emirates", flag: "🇦🇪" },
    Country { code: "SG", name: "Singapore", flag: "🇸🇬" },
    Country { code: "IE", name: "Ireland", flag: "🇮🇪" },
    Country { code: "NZ", name: "New Zealand", flag: "🇳🇿" },
    Country { code: "CH", name: "Switzerland", flag: "🇨🇭" },
    Country { code: "SE", name: "Sweden", flag: "🇸🇪" },
];

/// Case-insensitive lookup against the known-company pool.
pub fn find_company(name: &str) -> Option<&'static Company> {
    COMPANIES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}
