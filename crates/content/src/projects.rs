use shared::domain::{Project, ProjectCategory, SectionHeading};

pub const HEADING: SectionHeading = SectionHeading {
    eyebrow: "Projects",
    title: "Featured",
    accent: "Work",
    blurb: "A selection of projects showcasing my expertise in AI, machine learning, and \
            software engineering.",
};

pub static PROJECTS: &[Project] = &[
    Project {
        title: "AI Agent for Stock News Analysis",
        description: "Autonomous AI agent that monitors financial news streams and transforms \
                      unstructured data into decision-ready insights.",
        long_description: "An intelligent system capable of independent reasoning for real-time \
                           stock market analysis. Built with event detection, contextual \
                           enrichment, and multi-step analysis. Features asynchronous execution, \
                           fallback mechanisms, and strict output schemas for production \
                           reliability.",
        image: "AI Agent for Stock Analysis.png",
        tags: &["AI Agent", "LLM", "Real-time Analysis"],
        category: ProjectCategory::AiAgent,
        repo_url: "#",
        demo_url: "#",
    },
    Project {
        title: "Automated Parking Availability Monitoring",
        description: "AI-based system that detects parking occupancy and makes real-time \
                      availability accessible to users.",
        long_description: "Computer vision system that processes visual inputs to determine free \
                           or occupied spaces. Includes intelligent misuse detection to identify \
                           abnormal behavior such as vehicles occupying multiple spaces. Features \
                           robust vision pipelines and spatial consistency checks.",
        image: "Parking Monitoring.png",
        tags: &["Computer Vision", "Real-time Detection", "AI"],
        category: ProjectCategory::ComputerVision,
        repo_url: "#",
        demo_url: "#",
    },
    Project {
        title: "Generative AI for Image Restoration",
        description: "Restoration and inpainting of damaged images using GAN networks, achieving \
                      87% reconstruction accuracy.",
        long_description: "Leveraged Generative Adversarial Networks (GANs) to restore and inpaint \
                           damaged historical photos. The model was trained on a custom dataset of \
                           damaged/clean pairs, achieving an 87% structural similarity index \
                           (SSIM) in reconstruction accuracy.",
        image: "restoration-demo.jpg",
        tags: &["Generative AI", "GANs", "Computer Vision"],
        category: ProjectCategory::GenerativeAi,
        repo_url: "#",
        demo_url: "#",
    },
    Project {
        title: "Real Estate Scraper",
        description: "Advanced web scraper for extracting real estate data from multiple property \
                      listing websites.",
        long_description: "Built an intelligent scraper capable of gathering property information, \
                           calculating metrics, and augmenting insights. Refined through multiple \
                           iterations to precisely match client requirements.",
        image: "Real Estate Scraper.webp",
        tags: &["Web Scraping", "Data Engineering", "Real Estate"],
        category: ProjectCategory::Automation,
        repo_url: "#",
        demo_url: "#",
    },
    Project {
        title: "Football Analysis Scraper",
        description: "Specialized web scraper for extracting comprehensive football and sports \
                      data from multiple sources.",
        long_description: "Advanced scraper designed to gather player statistics, match details, \
                           and performance metrics from diverse football websites. Includes \
                           intricate calculations to augment gathered insights.",
        image: "Football Analysis Scraper.png",
        tags: &["Web Scraping", "Sports Data", "Data Engineering"],
        category: ProjectCategory::Automation,
        repo_url: "#",
        demo_url: "#",
    },
    Project {
        title: "Real-Time Detection of American Sign Language (ASL)",
        description: "Sign language character recognition with 92% accuracy using YOLO object \
                      detection models.",
        long_description: "Developed a real-time computer vision system capable of recognizing \
                           ASL alphabets and common gestures. Utilized the YOLOv8 architecture \
                           optimized for edge deployment, achieving 92% mean Average Precision \
                           (mAP) with less than 50ms latency.",
        image: "asl-detection.png",
        tags: &["Computer Vision", "YOLO", "Real-time"],
        category: ProjectCategory::ComputerVision,
        repo_url: "#",
        demo_url: "#",
    },
];
