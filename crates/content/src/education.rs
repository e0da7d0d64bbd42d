use shared::domain::{Degree, SectionHeading};

pub const HEADING: SectionHeading = SectionHeading {
    eyebrow: "Education",
    title: "Academic",
    accent: "Background",
    blurb: "",
};

pub static DEGREES: &[Degree] = &[
    Degree {
        degree: "Master's Degree - MLSD",
        institution: "Université Paris Cité",
        years: "2025 - 2026",
        focus: "Machine Learning for Data Science",
        achievements: &[
            "Currently Enrolled",
            "Advanced Data Science & ML",
            "Paris, France",
        ],
    },
    Degree {
        degree: "Erasmus Semester",
        institution: "ESIEE PARIS",
        years: "2024 - 2025",
        focus: "Data Science and AI",
        achievements: &[
            "International Exchange",
            "Specialized in Data Science & AI",
            "Paris, France",
        ],
    },
    Degree {
        degree: "Engineer's Degree",
        institution: "Arts et Métiers - ENSAM",
        years: "2022 - 2025",
        focus: "Artificial Intelligence & Data Science",
        achievements: &[
            "Specialization in AI",
            "Deep Learning & Neural Networks",
            "Rabat, Morocco",
        ],
    },
    Degree {
        degree: "DUT's Degree",
        institution: "École Supérieure de Technologie de Safi",
        years: "2020 - 2022",
        focus: "Computer Science",
        achievements: &[
            "Foundation in Computer Science",
            "Programming & Algorithms",
            "Safi, Morocco",
        ],
    },
];
