//! Content records rendered by the portfolio page.
//!
//! Every record borrows `'static` data so that content tables can be written as
//! plain constants and never allocated at runtime.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Brain,
    Zap,
    Code,
    Database,
    Briefcase,
    GraduationCap,
    Award,
    Mail,
    MapPin,
    Phone,
    Github,
    Linkedin,
    X,
    Terminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeading {
    pub eyebrow: &'static str,
    pub title: &'static str,
    /// Trailing words of the title drawn with the accent color.
    pub accent: &'static str,
    pub blurb: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpertiseItem {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Degree {
    pub degree: &'static str,
    pub institution: &'static str,
    pub years: &'static str,
    pub focus: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent. Kept within 0..=100 by convention only.
    pub level: u8,
}

impl Skill {
    pub fn fill_fraction(&self) -> f32 {
        f32::from(self.level.min(100)) / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    AiAgent,
    ComputerVision,
    GenerativeAi,
    Automation,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::AiAgent,
        ProjectCategory::ComputerVision,
        ProjectCategory::GenerativeAi,
        ProjectCategory::Automation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::AiAgent => "AI Agent",
            Self::ComputerVision => "Computer Vision",
            Self::GenerativeAi => "Generative AI",
            Self::Automation => "Automation",
        }
    }
}

/// Project list facet. `All` is synthetic and never a project's own category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// Filter buttons in display order.
    pub const OPTIONS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(ProjectCategory::AiAgent),
        CategoryFilter::Only(ProjectCategory::ComputerVision),
        CategoryFilter::Only(ProjectCategory::GenerativeAi),
        CategoryFilter::Only(ProjectCategory::Automation),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: ProjectCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    /// Path relative to the asset directory.
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub category: ProjectCategory,
    pub repo_url: &'static str,
    pub demo_url: &'static str,
}

impl Project {
    pub const CARD_TAG_LIMIT: usize = 3;

    pub fn card_tags(&self) -> &'static [&'static str] {
        &self.tags[..self.tags.len().min(Self::CARD_TAG_LIMIT)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactChannelKind {
    Email,
    Location,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub kind: ContactChannelKind,
    pub label: &'static str,
    pub value: &'static str,
    /// `mailto:`/`tel:` target; `None` for display-only rows.
    pub href: Option<&'static str>,
}

impl ContactChannel {
    pub fn icon(&self) -> Icon {
        match self.kind {
            ContactChannelKind::Email => Icon::Mail,
            ContactChannelKind::Location => Icon::MapPin,
            ContactChannelKind::Phone => Icon::Phone,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterContent {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub signoff: &'static str,
    pub terminal_line: &'static str,
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
