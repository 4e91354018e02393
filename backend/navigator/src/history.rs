use crate::location::Location;

/// Session history: a stack of entries and a cursor into it.
#[derive(Clone, Debug)]
pub struct History {
    entries: Vec<Location>,
    index: usize,
}

impl History {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Drops every forward entry, like a browser does.
    pub fn push(&mut self, location: Location) {
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index += 1;
    }

    pub fn replace(&mut self, location: Location) {
        self.entries[self.index] = location;
    }

    pub fn back(&mut self) -> Option<&Location> {
        self.index = self.index.checked_sub(1)?;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&Location> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }

        self.index += 1;
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(href: &str) -> Location {
        Location::parse(href).unwrap()
    }

    #[test]
    fn test_push_replace() {
        let mut history = History::new(at("/"));

        history.push(at("/?q=a"));
        history.replace(at("/?q=ab"));

        assert_eq!(history.entries().len(), 2);
        assert_eq!(history.current(), &at("/?q=ab"));
    }

    #[test]
    fn test_back_forward() {
        let mut history = History::new(at("/"));
        history.push(at("/contacts/a"));

        assert_eq!(history.back(), Some(&at("/")));
        assert_eq!(history.back(), None);
        assert_eq!(history.index(), 0);
        assert_eq!(history.forward(), Some(&at("/contacts/a")));
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = History::new(at("/"));
        history.push(at("/contacts/a"));
        history.push(at("/contacts/b"));
        history.back();
        history.back();

        history.push(at("/contacts/c"));

        assert_eq!(history.entries(), &[at("/"), at("/contacts/c")]);
    }
}
