//! Member signature pointcut.

use weave_core::{PointKind, ReflectedClass, ReflectionPoint, Visibility};

use super::pattern::NamePattern;
use crate::model::{Pointcut, PointcutKind};

/// Selects methods or properties by name, visibility, static-ness and type.
///
/// Unset criteria match anything. A type criterion never matches a member
/// without a declared type.
#[derive(Debug, Clone)]
pub struct SignaturePointcut {
    kind: PointcutKind,
    name: NamePattern,
    visibility: Option<Visibility>,
    is_static: Option<bool>,
    type_name: Option<NamePattern>,
}

impl SignaturePointcut {
    /// Select methods whose name matches `name`.
    pub fn methods(name: NamePattern) -> Self {
        Self::new(PointcutKind::METHOD, name)
    }

    /// Select properties whose name matches `name`.
    pub fn properties(name: NamePattern) -> Self {
        Self::new(PointcutKind::PROPERTY, name)
    }

    fn new(kind: PointcutKind, name: NamePattern) -> Self {
        Self {
            kind,
            name,
            visibility: None,
            is_static: None,
            type_name: None,
        }
    }

    /// Require a visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Require static or instance members.
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = Some(is_static);
        self
    }

    /// Require a return type (methods) or declared type (properties).
    pub fn with_type(mut self, type_name: NamePattern) -> Self {
        self.type_name = Some(type_name);
        self
    }
}

impl Pointcut for SignaturePointcut {
    fn kind(&self) -> PointcutKind {
        self.kind
    }

    fn matches_class(&self, _class: &ReflectedClass) -> bool {
        true
    }

    fn matches(&self, _class: &ReflectedClass, point: ReflectionPoint<'_>) -> bool {
        if point.kind() == PointKind::Class || !self.kind.accepts(point.kind()) {
            return false;
        }

        if !self.name.matches(point.name()) {
            return false;
        }

        if let Some(visibility) = self.visibility {
            if point.visibility() != Some(visibility) {
                return false;
            }
        }

        if let Some(is_static) = self.is_static {
            if point.is_static() != is_static {
                return false;
            }
        }

        match (&self.type_name, point.type_name()) {
            (None, _) => true,
            (Some(pattern), Some(type_name)) => pattern.matches(type_name),
            (Some(_), None) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weave_core::{ReflectedMethod, ReflectedProperty};

    fn class() -> ReflectedClass {
        ReflectedClass::new("Order", "Order.src")
            .with_method(ReflectedMethod::new("save").returning("void"))
            .with_method(ReflectedMethod::new("id").returning("int"))
            .with_method(
                ReflectedMethod::new("touch")
                    .with_visibility(Visibility::Private)
                    .returning("void"),
            )
            .with_method(ReflectedMethod::new("create").into_static())
            .with_property(ReflectedProperty::new("total").with_type("int"))
    }

    #[test]
    fn test_public_void_methods() {
        let class = class();
        let pointcut = SignaturePointcut::methods(NamePattern::any())
            .with_visibility(Visibility::Public)
            .with_type(NamePattern::new("void").unwrap());

        let matched: Vec<_> = class
            .methods
            .iter()
            .filter(|m| pointcut.matches(&class, ReflectionPoint::Method(m)))
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(matched, vec!["save"]);
    }

    #[test]
    fn test_static_filter() {
        let class = class();
        let pointcut = SignaturePointcut::methods(NamePattern::any()).with_static(true);
        let create = class.method("create").unwrap();
        let save = class.method("save").unwrap();

        assert!(pointcut.matches(&class, ReflectionPoint::Method(create)));
        assert!(!pointcut.matches(&class, ReflectionPoint::Method(save)));
    }

    #[test]
    fn test_member_kind_is_respected() {
        let class = class();
        let methods = SignaturePointcut::methods(NamePattern::any());
        let properties = SignaturePointcut::properties(NamePattern::any());
        let total = ReflectionPoint::Property(&class.properties[0]);

        assert!(!methods.matches(&class, total));
        assert!(properties.matches(&class, total));
        assert!(!properties.matches(&class, ReflectionPoint::Class(&class)));
    }
}
