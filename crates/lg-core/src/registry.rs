use std::collections::HashMap;

/// The narrow view of the host class database the analysis needs.
pub trait ClassRegistry {
    fn class_exists(&self, class_name: &str) -> bool;

    /// Whether `class_name` is `ancestor` or inherits from it.
    fn is_parent_class(&self, class_name: &str, ancestor: &str) -> bool;
}

/// A registry backed by a snapshot of `class -> parent` links.
#[derive(Debug, Clone, Default)]
pub struct StaticClassRegistry {
    parents: HashMap<String, Option<String>>,
}

impl StaticClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class. Root classes pass `None` as their parent.
    pub fn register(&mut self, class_name: impl Into<String>, parent: Option<&str>) -> &mut Self {
        self.parents
            .insert(class_name.into(), parent.map(str::to_string));
        self
    }

    pub fn parent_class(&self, class_name: &str) -> Option<&str> {
        self.parents.get(class_name)?.as_deref()
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

impl ClassRegistry for StaticClassRegistry {
    fn class_exists(&self, class_name: &str) -> bool {
        self.parents.contains_key(class_name)
    }

    fn is_parent_class(&self, class_name: &str, ancestor: &str) -> bool {
        let mut current = Some(class_name);
        // Bounded by the class count so a malformed cycle cannot spin.
        for _ in 0..=self.parents.len() {
            match current {
                Some(name) if name == ancestor => return true,
                Some(name) => current = self.parent_class(name),
                None => return false,
            }
        }
        false
    }
}

impl<T: ClassRegistry + ?Sized> ClassRegistry for &T {
    fn class_exists(&self, class_name: &str) -> bool {
        (**self).class_exists(class_name)
    }

    fn is_parent_class(&self, class_name: &str, ancestor: &str) -> bool {
        (**self).is_parent_class(class_name, ancestor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> StaticClassRegistry {
        let mut reg = StaticClassRegistry::new();
        reg.register("Object", None)
            .register("RefCounted", Some("Object"))
            .register("Resource", Some("RefCounted"))
            .register("Texture2D", Some("Resource"))
            .register("Node", Some("Object"));
        reg
    }

    #[test]
    fn class_exists() {
        let reg = registry();
        assert!(reg.class_exists("Node"));
        assert!(!reg.class_exists("Node2D"));
        assert_eq!(reg.len(), 5);
    }

    #[test]
    fn ancestry_includes_self() {
        let reg = registry();
        assert!(reg.is_parent_class("Texture2D", "Resource"));
        assert!(reg.is_parent_class("Resource", "Resource"));
        assert!(reg.is_parent_class("Texture2D", "Object"));
        assert!(!reg.is_parent_class("Node", "Resource"));
        assert!(!reg.is_parent_class("Missing", "Resource"));
    }

    #[test]
    fn cycle_terminates() {
        let mut reg = StaticClassRegistry::new();
        reg.register("A", Some("B")).register("B", Some("A"));
        assert!(!reg.is_parent_class("A", "C"));
    }
}
