//! Collection names used by the document store.

/// The document collections the service persists into.
///
/// Each aggregate kind maps to a fixed collection name; adapters use these
/// names rather than hard-coding strings at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// Menu catalog entries.
    MenuItems,
    /// Placed orders.
    Orders,
}

impl Collection {
    /// The collection name as it appears in the store.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MenuItems => "menuitem",
            Self::Orders => "order",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_names() {
        assert_eq!(Collection::MenuItems.name(), "menuitem");
        assert_eq!(Collection::Orders.name(), "order");
    }
}
