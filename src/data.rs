use std::collections::HashSet;

use crate::error::SiteError;
use crate::icons::{
    Envelope, GithubLogo, LeptosLogo, LinkedinLogo, NextLogo, NodeLogo, ReactLogo, Renderable,
    RustLogo,
};

/// Routes at or below this prefix belong to individual projects.
pub const PROJECT_ROUTE_PREFIX: &str = "/project";

pub struct ProjectTech {
    pub name: &'static str,
    pub tag: &'static str,
    pub component: &'static dyn Renderable,
}

impl std::fmt::Debug for ProjectTech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectTech")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub href: &'static str,
    pub img_src: &'static str,
    pub img_alt: &'static str,
    pub github_link: &'static str,
    pub tags: &'static [&'static str],
    pub is_solo: bool,
    /// Marks the entry describing this site itself.
    pub is_meta: bool,
}

pub static TECHS: &[ProjectTech] = &[
    ProjectTech {
        name: "ReactJS",
        tag: "react",
        component: &ReactLogo,
    },
    ProjectTech {
        name: "NodeJS",
        tag: "node",
        component: &NodeLogo,
    },
    ProjectTech {
        name: "NextJS",
        tag: "next",
        component: &NextLogo,
    },
    ProjectTech {
        name: "Rust",
        tag: "rust",
        component: &RustLogo,
    },
    ProjectTech {
        name: "Leptos",
        tag: "leptos",
        component: &LeptosLogo,
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        id: "portfolio",
        name: "Portfolio",
        href: "/",
        img_src: "/projects/portfolio.png",
        img_alt: "Screenshot of this portfolio's homepage, with a profile picture and a short bio",
        github_link: "https://github.com/richard-portfolio/portfolio",
        tags: &["rust", "leptos"],
        is_solo: true,
        is_meta: true,
    },
    Project {
        id: "tasklist",
        name: "Tasklist",
        href: "/project/tasklist",
        img_src: "/projects/tasklist.png",
        img_alt: "Screenshot of a kanban board with three columns of task cards",
        github_link: "https://github.com/richard-portfolio/tasklist",
        tags: &["react", "node"],
        is_solo: false,
        is_meta: false,
    },
    Project {
        id: "weather-now",
        name: "Weather Now",
        href: "/project/weather-now",
        img_src: "/projects/weather-now.png",
        img_alt: "Screenshot of a weather forecast with a five day temperature chart",
        github_link: "https://github.com/richard-portfolio/weather-now",
        tags: &["next", "react"],
        is_solo: true,
        is_meta: false,
    },
];

pub struct ContactInfo {
    /// Translation key for the card title.
    pub title_key: &'static str,
    pub icon: &'static dyn Renderable,
    pub label: &'static str,
    pub href: &'static str,
}

pub static CONTACTS: &[ContactInfo] = &[
    ContactInfo {
        title_key: "contact.email",
        icon: &Envelope,
        label: "richard@richard.dev",
        href: "mailto:richard@richard.dev",
    },
    ContactInfo {
        title_key: "contact.github",
        icon: &GithubLogo,
        label: "/richard-portfolio",
        href: "https://github.com/richard-portfolio",
    },
    ContactInfo {
        title_key: "contact.linkedin",
        icon: &LinkedinLogo,
        label: "/in/richard-portfolio",
        href: "https://www.linkedin.com/in/richard-portfolio",
    },
];

pub fn find_tech(tag: &str) -> Option<&'static ProjectTech> {
    TECHS.iter().find(|t| t.tag == tag)
}

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

impl Project {
    /// The meta entry is active anywhere outside the project routes; every
    /// other entry is active when the path starts with its href.
    pub fn is_active(&self, path: &str) -> bool {
        if self.is_meta {
            !path.starts_with(PROJECT_ROUTE_PREFIX)
        } else {
            path.starts_with(self.href)
        }
    }

    /// Where clicking the card should go, `None` when it is already active.
    pub fn navigation_target(&self, path: &str) -> Option<&'static str> {
        if self.is_active(path) {
            None
        } else {
            Some(self.href)
        }
    }

    pub fn techs(&self) -> impl Iterator<Item = &'static ProjectTech> + '_ {
        self.tags.iter().filter_map(|tag| find_tech(tag))
    }
}

/// Active projects first, the rest in table order.
pub fn order_for_path<'a>(projects: &'a [Project], path: &str) -> Vec<&'a Project> {
    let mut ordered = projects.iter().collect::<Vec<_>>();
    ordered.sort_by_key(|p| !p.is_active(path));
    ordered
}

pub fn validate_tables() -> Result<(), SiteError> {
    validate(TECHS, PROJECTS)
}

fn validate(techs: &[ProjectTech], projects: &[Project]) -> Result<(), SiteError> {
    let mut tags = HashSet::new();
    for tech in techs {
        if !tags.insert(tech.tag) {
            return Err(SiteError::DuplicateTag(tech.tag));
        }
    }

    let mut ids = HashSet::new();
    for (i, project) in projects.iter().enumerate() {
        if !ids.insert(project.id) {
            return Err(SiteError::DuplicateId(project.id));
        }
        if let Some(tag) = project.tags.iter().find(|t| !tags.contains(*t)) {
            return Err(SiteError::DanglingTag {
                project: project.id,
                tag: *tag,
            });
        }
        if let Some(other) = projects[..i].iter().find(|p| p.href == project.href) {
            return Err(SiteError::DuplicateHref {
                first: other.id,
                second: project.id,
                href: project.href,
            });
        }
        if project.is_meta {
            if let Some(other) = projects[..i].iter().find(|p| p.is_meta) {
                return Err(SiteError::MultipleMeta {
                    first: other.id,
                    second: project.id,
                });
            }
            continue;
        }
        let under_projects = project
            .href
            .strip_prefix(PROJECT_ROUTE_PREFIX)
            .is_some_and(|rest| rest.len() > 1 && rest.starts_with('/'));
        if !under_projects {
            return Err(SiteError::HrefOutsideProjects {
                project: project.id,
                href: project.href,
            });
        }
        // prefix matching would light up both cards
        let nested = projects[..i].iter().filter(|p| !p.is_meta).find(|p| {
            p.href.starts_with(project.href) || project.href.starts_with(p.href)
        });
        if let Some(other) = nested {
            let (outer, inner) = if project.href.starts_with(other.href) {
                (other.href, project.href)
            } else {
                (project.href, other.href)
            };
            return Err(SiteError::NestedHref {
                first: other.id,
                second: project.id,
                outer,
                inner,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &'static str, href: &'static str, is_meta: bool) -> Project {
        Project {
            id,
            name: id,
            href,
            img_src: "",
            img_alt: "",
            github_link: "",
            tags: &[],
            is_solo: true,
            is_meta,
        }
    }

    #[test]
    fn shipped_tables_are_consistent() {
        assert_eq!(validate_tables(), Ok(()));
    }

    #[test]
    fn project_route_activates_matching_project() {
        let table = [project("foo", "/project/foo", false), project("home", "/", true)];
        assert!(table[0].is_active("/project/foo"));
        assert!(!table[1].is_active("/project/foo"));
    }

    #[test]
    fn other_routes_activate_meta_project() {
        let table = [project("foo", "/project/foo", false), project("home", "/", true)];
        assert!(!table[0].is_active("/about"));
        assert!(table[1].is_active("/about"));
        assert!(table[1].is_active("/"));
        assert!(table[1].is_active(""));
    }

    #[test]
    fn meta_project_inactive_on_any_project_route() {
        let meta = find_project("portfolio").expect("meta project should exist");
        for path in ["/project", "/projects", "/project/tasklist", "/project/unknown"] {
            assert!(!meta.is_active(path), "{path}");
        }
    }

    #[test]
    fn matching_is_plain_prefix() {
        let foo = project("foo", "/project/foo", false);
        assert!(foo.is_active("/project/foo/details?tab=1"));
        assert!(foo.is_active("/project/foobar"));
        assert!(!foo.is_active("/Project/foo"));
        assert!(!foo.is_active("project/foo"));
    }

    #[test]
    fn at_most_one_shipped_project_active() {
        for path in ["/", "/about", "/projects", "/project/tasklist", "/project/weather-now"] {
            let active = PROJECTS.iter().filter(|p| p.is_active(path)).count();
            assert!(active <= 1, "{path} activated {active} projects");
        }
    }

    #[test]
    fn active_project_sorts_first_and_rest_keep_table_order() {
        let ordered = order_for_path(PROJECTS, "/project/weather-now");
        let ids = ordered.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["weather-now", "portfolio", "tasklist"]);

        let ordered = order_for_path(PROJECTS, "/contact");
        let ids = ordered.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["portfolio", "tasklist", "weather-now"]);
    }

    #[test]
    fn no_active_project_keeps_table_order() {
        let ordered = order_for_path(PROJECTS, "/project/missing");
        let ids = ordered.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["portfolio", "tasklist", "weather-now"]);
    }

    #[test]
    fn clicking_active_card_does_not_navigate() {
        let tasklist = find_project("tasklist").expect("tasklist should exist");
        assert_eq!(tasklist.navigation_target("/project/tasklist"), None);
        assert_eq!(tasklist.navigation_target("/"), Some("/project/tasklist"));
    }

    #[test]
    fn project_techs_resolve_in_tag_order() {
        let tasklist = find_project("tasklist").expect("tasklist should exist");
        let names = tasklist.techs().map(|t| t.name).collect::<Vec<_>>();
        assert_eq!(names, vec!["ReactJS", "NodeJS"]);
    }

    #[test]
    fn project_routes_are_derived_from_ids() {
        for p in PROJECTS.iter().filter(|p| !p.is_meta) {
            assert_eq!(p.href, format!("{PROJECT_ROUTE_PREFIX}/{}", p.id));
        }
    }

    #[test]
    fn referenced_assets_are_shipped() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let images = PROJECTS.iter().map(|p| p.img_src);
        for src in images.chain(["/pfp.jpg", "/favicon.ico"]) {
            let file = public.join(src.trim_start_matches('/'));
            assert!(file.is_file(), "{} is missing", file.display());
        }
    }

    #[test]
    fn contact_links_are_external() {
        for c in CONTACTS {
            assert!(
                c.href.starts_with("mailto:") || c.href.starts_with("https://"),
                "{}",
                c.href
            );
        }
    }

    #[test]
    fn dangling_tag_is_reported() {
        let mut broken = project("broken", "/project/broken", false);
        broken.tags = &["cobol"];
        assert_eq!(
            validate(TECHS, &[broken]),
            Err(SiteError::DanglingTag {
                project: "broken",
                tag: "cobol"
            })
        );
    }

    #[test]
    fn colliding_href_is_reported() {
        let table = [
            project("a", "/project/same", false),
            project("b", "/project/same", false),
        ];
        assert_eq!(
            validate(TECHS, &table),
            Err(SiteError::DuplicateHref {
                first: "a",
                second: "b",
                href: "/project/same"
            })
        );
    }

    #[test]
    fn nested_href_is_reported() {
        let table = [
            project("foo", "/project/foo", false),
            project("foobar", "/project/foobar", false),
        ];
        assert_eq!(
            validate(TECHS, &table),
            Err(SiteError::NestedHref {
                first: "foo",
                second: "foobar",
                outer: "/project/foo",
                inner: "/project/foobar"
            })
        );

        let table = [
            project("deep", "/project/foo/deep", false),
            project("foo", "/project/foo", false),
        ];
        assert_eq!(
            validate(TECHS, &table),
            Err(SiteError::NestedHref {
                first: "deep",
                second: "foo",
                outer: "/project/foo",
                inner: "/project/foo/deep"
            })
        );
    }

    #[test]
    fn project_href_outside_project_routes_is_reported() {
        for href in ["/about", "/projects/foo", "/project", "/project/"] {
            let table = [project("home", "/", true), project("foo", href, false)];
            assert_eq!(
                validate(TECHS, &table),
                Err(SiteError::HrefOutsideProjects { project: "foo", href }),
                "{href}"
            );
        }
    }

    #[test]
    fn second_meta_project_is_reported() {
        let table = [
            project("home", "/", true),
            project("foo", "/project/foo", false),
            project("about", "/about", true),
        ];
        assert_eq!(
            validate(TECHS, &table),
            Err(SiteError::MultipleMeta {
                first: "home",
                second: "about"
            })
        );
    }

    #[test]
    fn duplicate_id_is_reported() {
        let table = [project("a", "/project/a", false), project("a", "/project/b", false)];
        assert_eq!(validate(TECHS, &table), Err(SiteError::DuplicateId("a")));
    }
}
