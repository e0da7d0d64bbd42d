use std::collections::HashSet;

use shared::domain::{CategoryFilter, ContactChannelKind};

use crate::{about, contact, education, experience, projects, skills};

fn assert_unique<'a>(what: &str, keys: impl IntoIterator<Item = &'a str>) {
    let mut seen = HashSet::new();
    for key in keys {
        assert!(seen.insert(key), "duplicate {what} key: {key}");
    }
}

#[test]
fn expertise_titles_are_unique() {
    assert_unique("expertise", about::EXPERTISE.iter().map(|item| item.title));
}

#[test]
fn job_render_keys_are_unique() {
    let keys: Vec<String> = experience::JOBS
        .iter()
        .map(|job| format!("{}{}", job.title, job.company))
        .collect();
    assert_unique("job", keys.iter().map(String::as_str));
}

#[test]
fn degree_and_certification_names_are_unique() {
    assert_unique("degree", education::DEGREES.iter().map(|d| d.degree));
    assert_unique("certification", skills::CERTIFICATIONS.iter().map(|c| c.name));
}

#[test]
fn skill_levels_stay_within_percent_range() {
    for category in skills::CATEGORIES {
        assert!(!category.skills.is_empty(), "{} has no skills", category.name);
        for skill in category.skills {
            assert!(skill.level <= 100, "{} is {}%", skill.name, skill.level);
        }
    }
}

#[test]
fn project_titles_are_unique_hover_keys() {
    assert_unique("project", projects::PROJECTS.iter().map(|p| p.title));
}

#[test]
fn every_filter_option_other_than_all_selects_at_least_one_project() {
    for filter in CategoryFilter::OPTIONS {
        let count = projects::PROJECTS
            .iter()
            .filter(|p| filter.matches(p.category))
            .count();
        assert!(count > 0, "filter {} selects nothing", filter.label());
    }
}

#[test]
fn mail_and_tel_fallbacks_are_always_present() {
    let email = contact::CHANNELS
        .iter()
        .find(|c| c.kind == ContactChannelKind::Email)
        .and_then(|c| c.href)
        .expect("email channel");
    let phone = contact::CHANNELS
        .iter()
        .find(|c| c.kind == ContactChannelKind::Phone)
        .and_then(|c| c.href)
        .expect("phone channel");

    assert!(email.starts_with("mailto:"));
    assert!(phone.starts_with("tel:"));
    assert_eq!(email, contact::MAILTO);
}
