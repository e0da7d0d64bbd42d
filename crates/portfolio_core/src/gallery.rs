use shared::domain::{CategoryFilter, Project};

/// Category facet and hover tracking over a fixed project table.
#[derive(Debug, Clone)]
pub struct ProjectGallery<'a> {
    projects: &'a [Project],
    active: CategoryFilter,
    hovered: Option<&'a str>,
}

impl<'a> ProjectGallery<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        Self {
            projects,
            active: CategoryFilter::All,
            hovered: None,
        }
    }

    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    /// Switches the facet. Returns whether the selection changed. A hovered
    /// project that the new facet hides loses its hover.
    pub fn select(&mut self, filter: CategoryFilter) -> bool {
        if self.active == filter {
            return false;
        }
        tracing::debug!(from = self.active.label(), to = filter.label(), "project filter changed");
        self.active = filter;
        if let Some(project) = self.hovered() {
            if !filter.matches(project.category) {
                self.hovered = None;
            }
        }
        true
    }

    /// Projects passing the active facet, in table order.
    pub fn visible(&self) -> Vec<&'a Project> {
        self.projects
            .iter()
            .filter(|project| self.active.matches(project.category))
            .collect()
    }

    /// Marks `title` as the single hovered project, replacing any other.
    /// Titles that are not currently visible are ignored.
    pub fn hover(&mut self, title: &str) -> bool {
        let Some(project) = self
            .projects
            .iter()
            .find(|p| p.title == title && self.active.matches(p.category))
        else {
            return false;
        };
        self.hovered = Some(project.title);
        true
    }

    /// Clears the hover if it belongs to `title`.
    pub fn unhover(&mut self, title: &str) {
        if self.hovered == Some(title) {
            self.hovered = None;
        }
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<&'a Project> {
        let title = self.hovered?;
        self.projects.iter().find(|p| p.title == title)
    }

    pub fn is_hovered(&self, title: &str) -> bool {
        self.hovered == Some(title)
    }
}

#[cfg(test)]
#[path = "tests/gallery_tests.rs"]
mod tests;
