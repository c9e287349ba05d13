//! Sidebar outline entries

/// One navigable entry in the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub title: String,
    pub route: String,
}

impl OutlineEntry {
    pub fn new(title: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            route: route.into(),
        }
    }

    /// Build entries from routes, titling each by its last path segment
    pub fn from_routes<I, S>(routes: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        routes
            .into_iter()
            .map(|route| {
                let route = route.as_ref();
                let title = route
                    .trim_end_matches('/')
                    .rsplit('/')
                    .next()
                    .filter(|segment| !segment.is_empty())
                    .unwrap_or("Overview");
                Self::new(title, route)
            })
            .collect()
    }
}
