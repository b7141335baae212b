use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
    #[error("unknown color mode: {0}")]
    UnknownColorMode(String),
    #[error("project {project} references unknown tech tag {tag}")]
    DanglingTag {
        project: &'static str,
        tag: &'static str,
    },
    #[error("projects {first} and {second} share href {href}")]
    DuplicateHref {
        first: &'static str,
        second: &'static str,
        href: &'static str,
    },
    #[error("href {inner} of {second} falls under href {outer} of {first}")]
    NestedHref {
        first: &'static str,
        second: &'static str,
        outer: &'static str,
        inner: &'static str,
    },
    #[error("project {project} href {href} is not under /project/")]
    HrefOutsideProjects {
        project: &'static str,
        href: &'static str,
    },
    #[error("projects {first} and {second} are both marked meta")]
    MultipleMeta {
        first: &'static str,
        second: &'static str,
    },
    #[error("duplicate project id {0}")]
    DuplicateId(&'static str),
    #[error("duplicate tech tag {0}")]
    DuplicateTag(&'static str),
    #[error("couldn't load locale catalog for {0}")]
    CatalogUnavailable(&'static str),
}
