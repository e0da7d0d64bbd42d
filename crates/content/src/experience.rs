use shared::domain::{Job, SectionHeading};

pub const HEADING: SectionHeading = SectionHeading {
    eyebrow: "Experience",
    title: "Professional",
    accent: "Journey",
    blurb: "",
};

/// Display order; the page never re-sorts this list.
pub static JOBS: &[Job] = &[
    Job {
        title: "AI Engineer - Automation & Web Scraping Expert",
        company: "Fiverr (Top Rated Seller)",
        location: "Remote",
        period: "Mar 2022 - Present",
        description: "Self-employed AI Engineer specializing in web scraping, AI automation, and \
                      custom Python applications.",
        achievements: &[
            "Delivered 200+ successful projects with consistent 5-star reviews",
            "Earned \"Top Rated Seller\" badge - awarded only to top-performing sellers",
            "Certified Vetted Pro Seller in Data Science & Machine Learning",
            "Built robust web scrapers using Selenium, BeautifulSoup, Requests, and Scrapy for \
             international clients",
            "Deployed AI-powered automation systems leveraging Python, TensorFlow, and FastAPI for \
             high-volume task handling",
            "Developed custom Python applications for process automation, data engineering, \
             analytics dashboards, and backend services",
            "Led 1-on-1 consultation sessions with major clients on technical requirements and AI \
             solutions",
        ],
        technologies: &[
            "Python",
            "Selenium",
            "BeautifulSoup",
            "Scrapy",
            "FastAPI",
            "TensorFlow",
            "Data Engineering",
        ],
    },
    Job {
        title: "Data Scientist",
        company: "INEX BET",
        location: "Montreuil, Île-de-France, France",
        period: "Feb 2025 - Aug 2025",
        description: "Working on BimiFy project: AI-driven solution transforming 2D architectural \
                      plans into 3D models using deep learning and computer vision.",
        achievements: &[
            "Contributing to BimiFy - transforming 2D architectural plans to 3D using deep learning \
             and computer vision",
            "Developed Deep Learning classification model achieving 97% accuracy for plan scale \
             classification",
            "Optimized YOLO/CNN models for object detection in parking plans with 14% performance \
             improvement",
            "Implementing AI-powered features for architectural workflow automation and design \
             optimization",
        ],
        technologies: &[
            "Python",
            "PyTorch",
            "YOLO",
            "CNN",
            "Computer Vision",
            "Deep Learning",
            "Flask",
            "NLP",
            "LLM",
        ],
    },
    Job {
        title: "President",
        company: "DIGITECH CLUB ENSAM RABAT",
        location: "Rabat, Morocco",
        period: "Sep 2023 - Aug 2024",
        description: "Led one of the most active clubs at ENSAM, founded by the 1st promotion of \
                      INDIA program.",
        achievements: &[
            "Led and managed one of the most active clubs in the school",
            "Organized events and initiatives for students interested in digital transformation \
             and AI",
            "Demonstrated strong leadership and team management capabilities",
            "Developed marketing strategies and public speaking skills",
        ],
        technologies: &[
            "Team Leadership",
            "Public Speaking",
            "Marketing",
            "Team Management",
        ],
    },
    Job {
        title: "Data Scientist",
        company: "Mylibrairie.ma",
        location: "Casablanca, Morocco",
        period: "Jul 2023 - Aug 2023",
        description: "Developed recommendation system and analyzed purchasing behavior for \
                      e-commerce platform.",
        achievements: &[
            "Implemented recommendation system to optimize shopping experience",
            "Analyzed purchasing behavior of 3,000+ users to identify patterns and seasonality",
            "Built and optimized recommender models with hyperparameter tuning",
            "Created data-driven insights using Python, PostgreSQL, and Power BI visualization",
        ],
        technologies: &[
            "Python",
            "PostgreSQL",
            "Data Science",
            "Recommender Systems",
            "Machine Learning",
            "Power BI",
        ],
    },
    Job {
        title: "ERP & AI Consultant",
        company: "BC Skills Group",
        location: "Safi, Morocco",
        period: "Apr 2022 - Jul 2022",
        description: "Configured SAP Business Suite ERP and evaluated AI tools integration.",
        achievements: &[
            "Configured SAP Business Suite in Sales, Purchases, and Inventory modules",
            "Learned and applied ERP system implementation best practices",
            "Analyzed and evaluated AI tools integrated into the ERP system",
            "Provided technical consultation on enterprise AI implementation",
        ],
        technologies: &[
            "SAP ERP",
            "Enterprise Resource Planning",
            "AI",
            "Python",
            "Django",
            "FastAPI",
            "Flask",
        ],
    },
    Job {
        title: "Software Developer",
        company: "Ciments du Maroc - HeidelbergCement Group",
        location: "Safi, Morocco",
        period: "Jul 2021 - Aug 2021",
        description: "Created desktop application for invoice management with modern technologies.",
        achievements: &[
            "Built desktop application to streamline invoice management for Ciments du Maroc",
            "Initial implementation in C/C++ with SDL for graphics",
            "Enhanced and reimplemented using Python and Tkinter for improved functionality",
            "Demonstrated strong object-oriented programming and database design skills",
        ],
        technologies: &[
            "Python",
            "C",
            "C++",
            "Tkinter",
            "SQL",
            "SQLite",
            "OOP",
            "Data Structures",
        ],
    },
];
