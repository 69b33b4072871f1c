//! Navigation bar active-state bookkeeping

use std::fmt;

/// Resolve the page name from a request path.
///
/// Takes the last `/`-separated segment and falls back to `default_page`
/// when that segment is empty (e.g. `"/"` or `""`).
pub fn current_page<'a>(path: &'a str, default_page: &'a str) -> &'a str {
    path.rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(default_page)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub active: bool,
}

/// Ordered set of navigation links with at most one active href.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavBar {
    links: Vec<NavLink>,
}

impl NavBar {
    pub fn new<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            links: hrefs
                .into_iter()
                .map(|href| NavLink {
                    href: href.into(),
                    active: false,
                })
                .collect(),
        }
    }

    /// Mark links whose href equals `current` active and clear all others.
    ///
    /// Returns the number of links now active.
    pub fn highlight(&mut self, current: &str) -> usize {
        let mut count = 0;
        for link in &mut self.links {
            link.active = link.href == current;
            if link.active {
                count += 1;
            }
        }
        count
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn active(&self) -> Option<&NavLink> {
        self.links.iter().find(|link| link.active)
    }
}

impl fmt::Display for NavBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, link) in self.links.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            if link.active {
                write!(f, "[{}]", link.href)?;
            } else {
                f.write_str(&link.href)?;
            }
        }
        Ok(())
    }
}
