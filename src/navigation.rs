use crate::content::{Category, Project};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    ProjectDetail,
}

/// In-page anchors of the home view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Projects,
    Contact,
}

impl Section {
    pub fn all() -> [Section; 3] {
        [Section::Hero, Section::Projects, Section::Contact]
    }

    pub fn element_id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Section::Hero => "nav.home",
            Section::Projects => "nav.projects",
            Section::Contact => "nav.contact",
        }
    }
}

/// Where the page should scroll once the view for the current route has rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Section(Section),
}

/// Top-level view state: home or the detail page of one project.
///
/// The detail route is derived from the selection, so a selected project exists exactly
/// when the route is [`Route::ProjectDetail`]. Every transition leaves a pending scroll
/// target that the render layer takes once the new view is mounted.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    selected: Option<Project>,
    pending_scroll: Option<ScrollTarget>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self) -> Route {
        if self.selected.is_some() {
            Route::ProjectDetail
        } else {
            Route::Home
        }
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.selected.as_ref()
    }

    pub fn navigate_to_home(&mut self) {
        log::debug!("navigating home");
        self.selected = None;
        self.pending_scroll = Some(ScrollTarget::Top);
    }

    pub fn navigate_to_projects(&mut self) {
        self.navigate_to_section(Section::Projects);
    }

    /// Goes to the home view (if not already there) and queues a scroll to `section`.
    pub fn navigate_to_section(&mut self, section: Section) {
        log::debug!("navigating to section {}", section.element_id());
        self.selected = None;
        self.pending_scroll = Some(ScrollTarget::Section(section));
    }

    pub fn navigate_to_project(&mut self, project: Project) {
        log::debug!("navigating to project {}", project.id);
        self.selected = Some(project);
        self.pending_scroll = Some(ScrollTarget::Top);
    }

    pub fn pending_scroll(&self) -> Option<ScrollTarget> {
        self.pending_scroll
    }

    pub fn take_pending_scroll(&mut self) -> Option<ScrollTarget> {
        self.pending_scroll.take()
    }
}

/// Accordion-style expansion in the project list: at most one project open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineSelection {
    expanded: Option<String>,
}

impl InlineSelection {
    /// Collapses `project` if it is the open one, otherwise opens it in place of any other.
    /// Returns whether `project` is expanded afterwards.
    pub fn select_project(&mut self, project: &Project) -> bool {
        if self.is_expanded(&project.id) {
            self.expanded = None;
            false
        } else {
            self.expanded = Some(project.id.clone());
            true
        }
    }

    pub fn expanded_id(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    pub fn clear(&mut self) {
        self.expanded = None;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    /// A category name that doesn't exist; matches nothing.
    Unknown(String),
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        match value {
            "all" => Self::All,
            x => Category::from_slug(x)
                .map(Self::Only)
                .unwrap_or_else(|| Self::Unknown(x.to_string())),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        Self::Only(value)
    }
}

impl CategoryFilter {
    /// The filter buttons shown above the project list, in display order.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::all().into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == *category,
            CategoryFilter::Unknown(_) => false,
        }
    }

    pub fn label_key(&self) -> &str {
        match self {
            CategoryFilter::All => "projects.filter.all",
            CategoryFilter::Only(category) => category.label_key(),
            CategoryFilter::Unknown(name) => name,
        }
    }
}

/// Stable filter: keeps the original relative order.
pub fn filter_by_category<'a>(projects: &'a [Project], filter: &CategoryFilter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Index for the one-project-at-a-time view, wrapping at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::LocalizedText;

    fn project(id: &str, category: Category) -> Project {
        Project {
            id: id.to_string(),
            title: LocalizedText::new(format!("Proyecto {id}"), format!("Project {id}")),
            description: LocalizedText::new("Descripción", "Description"),
            category,
            technologies: vec!["Rust".to_string()],
            role: None,
            duration: None,
            client: None,
            year: Some(2025),
            challenges: Vec::new(),
            solution: None,
            outcomes: Vec::new(),
            links: Default::default(),
            cover: None,
            gallery: Vec::new(),
        }
    }

    fn six_projects() -> Vec<Project> {
        vec![
            project("p1", Category::UxUi),
            project("p2", Category::Frontend),
            project("p3", Category::Fullstack),
            project("p4", Category::UxUi),
            project("p5", Category::Frontend),
            project("p6", Category::Fullstack),
        ]
    }

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_navigator_starts_home() {
        let nav = Navigator::new();
        assert_eq!(nav.route(), Route::Home);
        assert!(nav.selected_project().is_none());
        assert!(nav.pending_scroll().is_none());
    }

    #[test]
    fn test_navigate_to_project_and_back_home() {
        let mut nav = Navigator::new();
        let p = project("p1", Category::UxUi);

        nav.navigate_to_project(p.clone());
        assert_eq!(nav.route(), Route::ProjectDetail);
        assert_eq!(nav.selected_project().map(|s| s.id.as_str()), Some("p1"));
        assert_eq!(nav.take_pending_scroll(), Some(ScrollTarget::Top));

        nav.navigate_to_home();
        assert_eq!(nav.route(), Route::Home);
        assert!(nav.selected_project().is_none());
        assert_eq!(nav.take_pending_scroll(), Some(ScrollTarget::Top));
    }

    #[test]
    fn test_navigate_to_projects_queues_section_scroll() {
        let mut nav = Navigator::new();
        nav.navigate_to_project(project("p2", Category::Frontend));
        nav.navigate_to_projects();

        assert_eq!(nav.route(), Route::Home);
        assert!(nav.selected_project().is_none());
        assert_eq!(
            nav.pending_scroll(),
            Some(ScrollTarget::Section(Section::Projects))
        );
        // consumed exactly once
        assert_eq!(
            nav.take_pending_scroll(),
            Some(ScrollTarget::Section(Section::Projects))
        );
        assert_eq!(nav.take_pending_scroll(), None);
    }

    #[test]
    fn test_latest_transition_wins_scroll_target() {
        let mut nav = Navigator::new();
        nav.navigate_to_section(Section::Contact);
        nav.navigate_to_project(project("p3", Category::Fullstack));
        assert_eq!(nav.take_pending_scroll(), Some(ScrollTarget::Top));
    }

    #[test]
    fn test_select_project_toggles() {
        let mut selection = InlineSelection::default();
        let p = project("p1", Category::UxUi);

        assert!(selection.select_project(&p));
        assert_eq!(selection.expanded_id(), Some("p1"));
        assert!(!selection.select_project(&p));
        assert_eq!(selection.expanded_id(), None);
    }

    #[test]
    fn test_select_project_switches() {
        let mut selection = InlineSelection::default();
        let p1 = project("p1", Category::UxUi);
        let p2 = project("p2", Category::Frontend);

        selection.select_project(&p1);
        selection.select_project(&p2);
        assert!(selection.is_expanded("p2"));
        assert!(!selection.is_expanded("p1"));

        selection.clear();
        assert_eq!(selection.expanded_id(), None);
    }

    #[test]
    fn test_filter_by_category_keeps_order() {
        let projects = six_projects();
        let frontend = filter_by_category(&projects, &CategoryFilter::from("frontend"));
        assert_eq!(ids(&frontend), vec!["p2", "p5"]);
        assert!(frontend.iter().all(|p| p.category == Category::Frontend));

        let all = filter_by_category(&projects, &CategoryFilter::All);
        assert_eq!(all.len(), projects.len());
        assert!(all.iter().zip(&projects).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_filter_by_category_counts() {
        let projects = six_projects();
        assert_eq!(
            filter_by_category(&projects, &CategoryFilter::from("ux-ui")).len(),
            2
        );
        assert_eq!(
            filter_by_category(&projects, &Category::Fullstack.into()).len(),
            2
        );
        let unknown = CategoryFilter::from("mobile");
        assert_eq!(unknown, CategoryFilter::Unknown("mobile".to_string()));
        assert!(filter_by_category(&projects, &unknown).is_empty());
        assert!(filter_by_category(&[], &CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_filter_options() {
        let options = CategoryFilter::options();
        assert_eq!(options.len(), 4);
        assert_eq!(options[0], CategoryFilter::All);
        assert_eq!(options[0].label_key(), "projects.filter.all");
        assert_eq!(options[1].label_key(), "projects.filter.uxui");
    }

    #[test]
    fn test_carousel_wraps() {
        let projects = six_projects();
        let mut carousel = Carousel::new(projects.len());
        assert_eq!(carousel.current(&projects).map(|p| p.id.as_str()), Some("p1"));

        carousel.prev();
        assert_eq!(carousel.index(), 5);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.current(&projects).map(|p| p.id.as_str()), Some("p2"));
    }

    #[test]
    fn test_empty_carousel() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_empty());
        assert!(carousel.current::<Project>(&[]).is_none());
    }

    #[test]
    fn test_sections() {
        for section in Section::all() {
            assert!(!section.element_id().is_empty());
            assert!(section.label_key().starts_with("nav."));
        }
    }
}
