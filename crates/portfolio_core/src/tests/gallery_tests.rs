use shared::domain::ProjectCategory;

use super::*;

fn project(title: &'static str, category: ProjectCategory) -> Project {
    Project {
        title,
        description: "",
        long_description: "",
        image: "",
        tags: &[],
        category,
        repo_url: "#",
        demo_url: "#",
    }
}

fn sample() -> Vec<Project> {
    vec![
        project("agent", ProjectCategory::AiAgent),
        project("parking", ProjectCategory::ComputerVision),
        project("restore", ProjectCategory::GenerativeAi),
        project("estate", ProjectCategory::Automation),
        project("football", ProjectCategory::Automation),
        project("asl", ProjectCategory::ComputerVision),
    ]
}

fn titles(gallery: &ProjectGallery<'_>) -> Vec<&'static str> {
    gallery.visible().iter().map(|p| p.title).collect()
}

#[test]
fn defaults_to_all_projects_in_table_order() {
    let projects = sample();
    let gallery = ProjectGallery::new(&projects);
    assert_eq!(gallery.active(), CategoryFilter::All);
    assert_eq!(
        titles(&gallery),
        ["agent", "parking", "restore", "estate", "football", "asl"]
    );
}

#[test]
fn each_category_filters_to_exact_matches() {
    let projects = sample();
    let mut gallery = ProjectGallery::new(&projects);

    for category in ProjectCategory::ALL {
        gallery.select(CategoryFilter::Only(category));
        let expected: Vec<_> = projects
            .iter()
            .filter(|p| p.category == category)
            .map(|p| p.title)
            .collect();
        assert_eq!(titles(&gallery), expected, "{}", category.label());
    }

    gallery.select(CategoryFilter::All);
    assert_eq!(gallery.visible().len(), projects.len());
}

#[test]
fn reselecting_the_active_filter_reports_no_change() {
    let projects = sample();
    let mut gallery = ProjectGallery::new(&projects);
    assert!(!gallery.select(CategoryFilter::All));
    assert!(gallery.select(CategoryFilter::Only(ProjectCategory::Automation)));
    assert!(!gallery.select(CategoryFilter::Only(ProjectCategory::Automation)));
}

#[test]
fn hovering_another_project_replaces_the_first() {
    let projects = sample();
    let mut gallery = ProjectGallery::new(&projects);

    assert!(gallery.hover("agent"));
    assert!(gallery.is_hovered("agent"));

    assert!(gallery.hover("estate"));
    assert!(gallery.is_hovered("estate"));
    assert!(!gallery.is_hovered("agent"));
    assert_eq!(gallery.hovered().map(|p| p.title), Some("estate"));
}

#[test]
fn unhover_only_clears_the_matching_project() {
    let projects = sample();
    let mut gallery = ProjectGallery::new(&projects);
    gallery.hover("parking");

    gallery.unhover("asl");
    assert!(gallery.is_hovered("parking"));

    gallery.unhover("parking");
    assert!(gallery.hovered().is_none());
}

#[test]
fn hidden_or_unknown_projects_cannot_be_hovered() {
    let projects = sample();
    let mut gallery = ProjectGallery::new(&projects);
    gallery.select(CategoryFilter::Only(ProjectCategory::AiAgent));

    assert!(!gallery.hover("parking"));
    assert!(!gallery.hover("missing"));
    assert!(gallery.hovered().is_none());
}

#[test]
fn filtering_out_the_hovered_project_clears_hover() {
    let projects = sample();
    let mut gallery = ProjectGallery::new(&projects);
    gallery.hover("restore");

    gallery.select(CategoryFilter::Only(ProjectCategory::GenerativeAi));
    assert!(gallery.is_hovered("restore"));

    gallery.select(CategoryFilter::Only(ProjectCategory::Automation));
    assert!(gallery.hovered().is_none());
}

#[test]
fn works_over_the_published_project_table() {
    let mut gallery = ProjectGallery::new(content::projects::PROJECTS);
    gallery.select(CategoryFilter::Only(ProjectCategory::ComputerVision));
    assert!(gallery
        .visible()
        .iter()
        .all(|p| p.category == ProjectCategory::ComputerVision));
    assert!(!gallery.visible().is_empty());
}
