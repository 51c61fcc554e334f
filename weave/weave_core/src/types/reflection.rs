//! Reflected code model.
//!
//! These types describe a class of the target application as produced by the
//! external reflection subsystem. They are plain, serializable data so a
//! reflection broker can hand them over in any serde format. The engine
//! never mutates them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::annotation::Annotation;
use crate::error::{Error, ReflectionError};

/// Member visibility.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Visible everywhere.
    #[default]
    Public,

    /// Visible to the class and its descendants.
    Protected,

    /// Visible to the class only.
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Protected => write!(f, "protected"),
            Self::Private => write!(f, "private"),
        }
    }
}

/// A reflected class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectedClass {
    /// The fully-qualified class name.
    pub name: String,

    /// The file the class is defined in.
    pub file: PathBuf,

    /// The parent class, if any.
    #[serde(default)]
    pub parent: Option<String>,

    /// Interfaces implemented by the class.
    #[serde(default)]
    pub interfaces: Vec<String>,

    /// Whether the class is abstract.
    #[serde(default)]
    pub is_abstract: bool,

    /// The raw doc comment of the class.
    #[serde(default)]
    pub doc_comment: Option<String>,

    /// Methods declared by the class, in declaration order.
    #[serde(default)]
    pub methods: Vec<ReflectedMethod>,

    /// Properties declared by the class, in declaration order.
    #[serde(default)]
    pub properties: Vec<ReflectedProperty>,

    /// Class-level annotations.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl ReflectedClass {
    /// Create a class with no members.
    pub fn new(name: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            parent: None,
            interfaces: Vec::new(),
            is_abstract: false,
            doc_comment: None,
            methods: Vec::new(),
            properties: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// Add a method.
    pub fn with_method(mut self, method: ReflectedMethod) -> Self {
        self.methods.push(method);
        self
    }

    /// Add a property.
    pub fn with_property(mut self, property: ReflectedProperty) -> Self {
        self.properties.push(property);
        self
    }

    /// Add a class-level annotation.
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Add an implemented interface.
    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Set the parent class.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set the doc comment.
    pub fn with_doc_comment(mut self, doc_comment: impl Into<String>) -> Self {
        self.doc_comment = Some(doc_comment.into());
        self
    }

    /// The file the class is defined in.
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Find a declared method by name.
    pub fn method(&self, name: &str) -> Option<&ReflectedMethod> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Find a declared property by name.
    pub fn property(&self, name: &str) -> Option<&ReflectedProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Check whether the class extends or implements `type_name` directly.
    pub fn is_subtype_of(&self, type_name: &str) -> bool {
        self.parent.as_deref() == Some(type_name) || self.interfaces.iter().any(|i| i == type_name)
    }
}

/// A reflected method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectedMethod {
    /// The method name.
    pub name: String,

    /// The method visibility.
    #[serde(default)]
    pub visibility: Visibility,

    /// Whether the method is static.
    #[serde(default)]
    pub is_static: bool,

    /// Whether the method is abstract.
    #[serde(default)]
    pub is_abstract: bool,

    /// The declared return type, if any.
    #[serde(default)]
    pub return_type: Option<String>,

    /// Method-level annotations.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl ReflectedMethod {
    /// Create a public, non-static method without a declared return type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            is_abstract: false,
            return_type: None,
            annotations: Vec::new(),
        }
    }

    /// Set the visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set the declared return type.
    pub fn returning(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    /// Mark the method as static.
    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark the method as abstract.
    pub fn into_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Add an annotation.
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A reflected property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectedProperty {
    /// The property name.
    pub name: String,

    /// The property visibility.
    #[serde(default)]
    pub visibility: Visibility,

    /// Whether the property is static.
    #[serde(default)]
    pub is_static: bool,

    /// The declared type, if any.
    #[serde(default)]
    pub type_name: Option<String>,

    /// Property-level annotations.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl ReflectedProperty {
    /// Create a public, non-static, untyped property.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            type_name: None,
            annotations: Vec::new(),
        }
    }

    /// Set the visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set the declared type.
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Mark the property as static.
    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Add an annotation.
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// The kind of a reflection point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    /// A class.
    Class,

    /// A method.
    Method,

    /// A property.
    Property,
}

impl PointKind {
    /// Get the name of this point kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Method => "method",
            Self::Property => "property",
        }
    }
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PointKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "class" => Ok(Self::Class),
            "method" => Ok(Self::Method),
            "property" => Ok(Self::Property),
            _ => Err(ReflectionError::UnsupportedPoint(s.to_string()).into()),
        }
    }
}

/// A borrowed view of one reflection point.
#[derive(Debug, Clone, Copy)]
pub enum ReflectionPoint<'a> {
    /// A class.
    Class(&'a ReflectedClass),

    /// A method.
    Method(&'a ReflectedMethod),

    /// A property.
    Property(&'a ReflectedProperty),
}

impl<'a> ReflectionPoint<'a> {
    /// The kind of this point.
    pub fn kind(&self) -> PointKind {
        match self {
            Self::Class(_) => PointKind::Class,
            Self::Method(_) => PointKind::Method,
            Self::Property(_) => PointKind::Property,
        }
    }

    /// The name of the class or member.
    pub fn name(&self) -> &'a str {
        match self {
            Self::Class(class) => &class.name,
            Self::Method(method) => &method.name,
            Self::Property(property) => &property.name,
        }
    }

    /// The annotations attached to this point.
    pub fn annotations(&self) -> &'a [Annotation] {
        match self {
            Self::Class(class) => &class.annotations,
            Self::Method(method) => &method.annotations,
            Self::Property(property) => &property.annotations,
        }
    }

    /// The visibility of a member. Classes have none.
    pub fn visibility(&self) -> Option<Visibility> {
        match self {
            Self::Class(_) => None,
            Self::Method(method) => Some(method.visibility),
            Self::Property(property) => Some(property.visibility),
        }
    }

    /// Whether this point is a static member.
    pub fn is_static(&self) -> bool {
        match self {
            Self::Class(_) => false,
            Self::Method(method) => method.is_static,
            Self::Property(property) => property.is_static,
        }
    }

    /// The method return type or property type.
    pub fn type_name(&self) -> Option<&'a str> {
        match self {
            Self::Class(_) => None,
            Self::Method(method) => method.return_type.as_deref(),
            Self::Property(property) => property.type_name.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_class() -> ReflectedClass {
        ReflectedClass::new("App\\Order", "/app/src/Order.src")
            .with_interface("Persistable")
            .with_method(ReflectedMethod::new("save").returning("void"))
            .with_method(
                ReflectedMethod::new("load")
                    .into_static()
                    .with_visibility(Visibility::Protected),
            )
            .with_property(ReflectedProperty::new("id").with_type("int"))
    }

    #[test]
    fn test_member_lookup() {
        let class = order_class();
        assert_eq!(
            class.method("save").and_then(|m| m.return_type.as_deref()),
            Some("void")
        );
        assert!(class.method("missing").is_none());
        assert!(class.property("id").is_some());
        assert!(class.is_subtype_of("Persistable"));
        assert!(!class.is_subtype_of("Serializable"));
    }

    #[test]
    fn test_reflection_point_accessors() {
        let class = order_class();
        let load = class.method("load").unwrap();
        let point = ReflectionPoint::Method(load);

        assert_eq!(point.kind(), PointKind::Method);
        assert_eq!(point.name(), "load");
        assert_eq!(point.visibility(), Some(Visibility::Protected));
        assert!(point.is_static());
        assert_eq!(ReflectionPoint::Class(&class).visibility(), None);
    }

    #[test]
    fn test_point_kind_from_str() {
        assert_eq!("Method".parse::<PointKind>().unwrap(), PointKind::Method);
        let err = "function".parse::<PointKind>().unwrap_err();
        assert!(matches!(
            err,
            Error::Reflection(ReflectionError::UnsupportedPoint(_))
        ));
    }

    #[test]
    fn test_deserialize_class_with_defaults() {
        let json = r#"{
            "name": "App\\Order",
            "file": "/app/src/Order.src",
            "methods": [{ "name": "save", "return_type": "void" }]
        }"#;
        let class: ReflectedClass = serde_json::from_str(json).unwrap();
        assert_eq!(class.methods[0].visibility, Visibility::Public);
        assert!(class.properties.is_empty());
    }
}
