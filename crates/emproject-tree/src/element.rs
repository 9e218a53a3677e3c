//! Owned element tree with ordered attributes and children.

/// A single element of a project descriptor document.
///
/// Attributes keep their document order so a parse/write round trip is
/// stable; ownership flows strictly parent to child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Element name, e.g. `"configuration"`.
    pub name: String,
    attrs: Vec<(String, String)>,
    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    /// Create an element with no attributes and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Look up an attribute value by key.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, updating in place if the key already exists so
    /// attribute order is preserved, appending otherwise.
    pub fn set_attr(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((key.to_string(), value)),
        }
    }

    /// Iterate attributes in document order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Append a child element.
    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Iterate children with the given element name, in document order.
    pub fn children_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Element> + 'a {
        let name = name.to_string();
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Mutable variant of [`Element::children_named`].
    pub fn children_named_mut<'a>(
        &'a mut self,
        name: &str,
    ) -> impl Iterator<Item = &'a mut Element> + 'a {
        let name = name.to_string();
        self.children.iter_mut().filter(move |c| c.name == name)
    }

    /// First child with the given element name.
    pub fn find_child(&self, name: &str) -> Option<&Element> {
        self.children_named(name).next()
    }

    /// Mutable variant of [`Element::find_child`].
    pub fn find_child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children_named_mut(name).next()
    }

    /// First child with the given element name and attribute value,
    /// ElementTree-style (`configuration[Name="Common"]`).
    pub fn find_child_where(&self, name: &str, key: &str, value: &str) -> Option<&Element> {
        self.children_named(name).find(|c| c.attr(key) == Some(value))
    }

    /// Mutable variant of [`Element::find_child_where`].
    pub fn find_child_where_mut(
        &mut self,
        name: &str,
        key: &str,
        value: &str,
    ) -> Option<&mut Element> {
        self.children_named_mut(name)
            .find(|c| c.attr(key) == Some(value))
    }

    /// Like [`Element::find_child_where_mut`], but appends a new child
    /// carrying the attribute when no match exists.
    pub fn find_or_create_child_where(
        &mut self,
        name: &str,
        key: &str,
        value: &str,
    ) -> &mut Element {
        let index = self
            .children
            .iter()
            .position(|c| c.name == name && c.attr(key) == Some(value));
        let index = match index {
            Some(index) => index,
            None => {
                let mut child = Element::new(name);
                child.set_attr(key, value);
                self.children.push(child);
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }
}
