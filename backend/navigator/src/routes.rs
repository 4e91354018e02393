use crate::location::Location;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteId {
    Root,
    Index,
    Contact,
    EditContact,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: RouteId,
    pub id: Option<String>,
}

impl RouteMatch {
    fn new(route: RouteId, id: Option<&str>) -> Self {
        Self {
            route,
            id: id.map(str::to_string),
        }
    }

    /// What a mounted loader's output depends on. A changed key means the loader runs again.
    /// Child routes also run again when only the search string changed.
    pub fn key(&self, location: &Location) -> String {
        match self.route {
            RouteId::Root => location.search.clone(),
            RouteId::Index | RouteId::Contact | RouteId::EditContact => location.href(),
        }
    }

    pub fn has_loader(&self) -> bool {
        self.route != RouteId::Index
    }
}

/// The root route always matches, followed by exactly one child.
pub fn match_routes(pathname: &str) -> Option<Vec<RouteMatch>> {
    let segments: Vec<&str> = pathname
        .trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    let child = match segments.as_slice() {
        [] => RouteMatch::new(RouteId::Index, None),
        ["contacts", id] => RouteMatch::new(RouteId::Contact, Some(id)),
        ["contacts", id, "edit"] => RouteMatch::new(RouteId::EditContact, Some(id)),
        _ => return None,
    };

    Some(vec![RouteMatch::new(RouteId::Root, None), child])
}
