use shared::domain::{ExpertiseItem, Icon, SectionHeading, Stat};

pub const HEADING: SectionHeading = SectionHeading {
    eyebrow: "About Me",
    title: "AI Engineer &",
    accent: "Data Scientist",
    blurb: "With expertise in Deep Learning, Generative AI, and Agentic AI, I build intelligent \
            systems that automate complex processes and solve real-world problems. Specialized in \
            web scraping, data engineering, and building scalable AI applications. Based in Paris, \
            France. Top Rated Seller on Fiverr with 200+ successful projects.",
};

pub static EXPERTISE: &[ExpertiseItem] = &[
    ExpertiseItem {
        icon: Icon::Brain,
        title: "Deep Learning & Generative AI",
        description: "Building advanced neural networks, GANs, VAEs, and generative models for \
                      image restoration, classification, and creative applications.",
    },
    ExpertiseItem {
        icon: Icon::Zap,
        title: "Agentic AI & Automation",
        description: "Designing intelligent agents and automated systems using LLMs, RAG, and \
                      prompt engineering for autonomous task execution.",
    },
    ExpertiseItem {
        icon: Icon::Code,
        title: "Web Scraping & Data Engineering",
        description: "Building robust web scrapers and large-scale data extraction pipelines using \
                      Selenium, BeautifulSoup, Scrapy, and automation frameworks.",
    },
    ExpertiseItem {
        icon: Icon::Database,
        title: "Data Science & Analytics",
        description: "Developing ML models, recommendation systems, and predictive analytics with \
                      comprehensive data analysis and visualization.",
    },
];

pub static STATS: &[Stat] = &[
    Stat {
        value: "3+",
        label: "Years Experience",
    },
    Stat {
        value: "200+",
        label: "Projects Completed",
    },
    Stat {
        value: "97%",
        label: "Model Accuracy",
    },
    Stat {
        value: "5.0★",
        label: "Client Rating",
    },
];
