use shared::domain::{Certification, SectionHeading, Skill, SkillCategory};

pub const HEADING: SectionHeading = SectionHeading {
    eyebrow: "Skills & Certifications",
    title: "Technical",
    accent: "Expertise",
    blurb: "",
};

pub static CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Data Science & AI",
        skills: &[
            Skill {
                name: "TensorFlow",
                level: 95,
            },
            Skill {
                name: "PyTorch",
                level: 95,
            },
            Skill {
                name: "Keras",
                level: 92,
            },
            Skill {
                name: "Scikit-learn",
                level: 90,
            },
            Skill {
                name: "Hugging Face",
                level: 90,
            },
            Skill {
                name: "XGBoost",
                level: 88,
            },
        ],
    },
    SkillCategory {
        name: "Programming Languages",
        skills: &[
            Skill {
                name: "Python",
                level: 98,
            },
            Skill {
                name: "JavaScript",
                level: 85,
            },
            Skill {
                name: "TypeScript",
                level: 82,
            },
            Skill {
                name: "SQL",
                level: 90,
            },
            Skill {
                name: "Scala",
                level: 75,
            },
            Skill {
                name: "Java",
                level: 80,
            },
        ],
    },
    SkillCategory {
        name: "Web Scraping & Automation",
        skills: &[
            Skill {
                name: "Selenium",
                level: 95,
            },
            Skill {
                name: "BeautifulSoup",
                level: 94,
            },
            Skill {
                name: "Scrapy",
                level: 92,
            },
            Skill {
                name: "Requests",
                level: 93,
            },
            Skill {
                name: "FastAPI",
                level: 90,
            },
            Skill {
                name: "Flask",
                level: 88,
            },
        ],
    },
    SkillCategory {
        name: "Databases & Cloud",
        skills: &[
            Skill {
                name: "PostgreSQL",
                level: 90,
            },
            Skill {
                name: "MongoDB",
                level: 88,
            },
            Skill {
                name: "MySQL",
                level: 90,
            },
            Skill {
                name: "AWS",
                level: 85,
            },
            Skill {
                name: "GCP",
                level: 84,
            },
            Skill {
                name: "Azure",
                level: 82,
            },
        ],
    },
    SkillCategory {
        name: "Deep Learning Specialties",
        skills: &[
            Skill {
                name: "GANs & VAEs",
                level: 92,
            },
            Skill {
                name: "Transformers & LLMs",
                level: 90,
            },
            Skill {
                name: "Computer Vision",
                level: 92,
            },
            Skill {
                name: "YOLO & CNN",
                level: 94,
            },
            Skill {
                name: "RAG & Prompt Engineering",
                level: 90,
            },
            Skill {
                name: "NLP & Transformers",
                level: 91,
            },
        ],
    },
    SkillCategory {
        name: "Tools & Visualization",
        skills: &[
            Skill {
                name: "Power BI",
                level: 87,
            },
            Skill {
                name: "Pandas & NumPy",
                level: 96,
            },
            Skill {
                name: "Matplotlib & Seaborn",
                level: 90,
            },
            Skill {
                name: "Git & GitHub",
                level: 92,
            },
            Skill {
                name: "Docker",
                level: 88,
            },
            Skill {
                name: "CI/CD",
                level: 85,
            },
        ],
    },
];

pub static CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "Deep Learning Specialization",
        issuer: "DeepLearning.AI",
        year: "2023",
    },
    Certification {
        name: "Machine Learning Specialization",
        issuer: "DeepLearning.AI",
        year: "2023",
    },
    Certification {
        name: "CCNA Introduction to Networks",
        issuer: "Cisco",
        year: "2022",
    },
    Certification {
        name: "Delf B2",
        issuer: "Institut français",
        year: "2021",
    },
];
