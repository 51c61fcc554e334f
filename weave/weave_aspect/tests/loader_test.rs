//! Integration tests for aspect loading.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::json;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use weave_aspect::*;
use weave_core::error::{ContainerError, Error, LoaderError, ReflectionError, Result};
use weave_core::{
    Annotation, AnnotationReader, AttachedAnnotationReader, ReflectedClass, ReflectedMethod,
    ReflectedProperty, ReflectionPoint,
};

// Initialize tracing for tests
fn init_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

// Records every aspect it is run on and registers one advisor per aspect
struct RecordingExtension {
    calls: AtomicUsize,
    loaded: Mutex<Vec<String>>,
    fail: AtomicBool,
    callback: &'static str,
}

impl RecordingExtension {
    fn new(callback: &'static str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            loaded: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
            callback,
        }
    }
}

impl AspectLoaderExtension for RecordingExtension {
    fn targets(&self) -> LoaderTarget {
        LoaderTarget::CLASS
    }

    fn kind(&self) -> LoaderKind {
        LoaderKind::Reflection
    }

    fn supports(&self, _: &Aspect, point: ReflectionPoint<'_>, _: Option<&Annotation>) -> bool {
        matches!(point, ReflectionPoint::Class(_))
    }

    fn load(
        &self,
        aspect: &Aspect,
        _: ReflectionPoint<'_>,
        _: Option<&Annotation>,
    ) -> Result<LoadedItems> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(LoaderError::Configuration(format!("cannot load {}", aspect.id())).into());
        }
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.loaded.lock().push(aspect.id().to_string());

        let id = format!("{}->marker", aspect.id());
        let pointcut = PointcutSpec::Introduction { class: "*".to_string() }.build()?;
        let mut items = LoadedItems::new();
        items.insert_advisor(Advisor::new(
            id,
            pointcut,
            Advice::new(AdviceKind::Introduction, self.callback),
        ));
        Ok(items)
    }
}

fn aspect_class(name: &str) -> ReflectedClass {
    ReflectedClass::new(name, format!("/app/aspect/{}.src", name))
}

fn advice(name: &str, pointcut: serde_json::Value) -> Annotation {
    Annotation::new(name).with_args(json!({ "pointcut": pointcut }))
}

fn logging_aspect() -> Aspect {
    Aspect::new(
        aspect_class("Logging")
            .with_method(
                ReflectedMethod::new("aroundSave")
                    .with_annotation(advice("Around", json!({ "method": { "name": "save" } }))),
            )
            .with_method(
                ReflectedMethod::new("publicMethods")
                    .with_annotation(advice("Pointcut", json!({ "method": { "visibility": "public" } }))),
            )
            .with_method(ReflectedMethod::new("helper")),
    )
}

fn recording_loader(
    extension: &Arc<RecordingExtension>,
) -> AspectLoader<InMemoryAspectContainer> {
    let mut loader = AspectLoader::new(
        InMemoryAspectContainer::new(),
        Arc::new(AttachedAnnotationReader),
    );
    loader.register_extension(extension.clone());
    loader
}

#[test]
fn test_changed_pass_is_idempotent() {
    init_tracing();
    let extension = Arc::new(RecordingExtension::new("first"));
    let mut loader = recording_loader(&extension);
    loader.container().register_aspect(Aspect::new(aspect_class("A")));

    assert_eq!(loader.load_and_register_changed().unwrap(), 1);
    assert_eq!(loader.load_and_register_changed().unwrap(), 0);
    assert_eq!(extension.calls.load(Ordering::SeqCst), 1);
    assert_eq!(loader.container().advisors().len(), 1);
}

#[test]
fn test_changed_pass_only_loads_new_resources() {
    let extension = Arc::new(RecordingExtension::new("first"));
    let mut loader = recording_loader(&extension);
    loader.container().register_aspect(Aspect::new(aspect_class("A")));
    loader.container().register_aspect(Aspect::new(aspect_class("B")));

    loader.load_and_register_changed().unwrap();
    assert_eq!(*extension.loaded.lock(), vec!["A", "B"]);

    loader.container().register_aspect(Aspect::new(aspect_class("C")));
    loader.load_and_register_changed().unwrap();
    assert_eq!(*extension.loaded.lock(), vec!["A", "B", "C"]);
    assert_eq!(loader.loaded_resources().len(), 3);
}

#[test]
fn test_first_produced_item_wins() {
    let first = Arc::new(RecordingExtension::new("first"));
    let second = Arc::new(RecordingExtension::new("second"));
    let mut loader = recording_loader(&first);
    loader.register_extension(second.clone());

    let items = loader.load(&Aspect::new(aspect_class("A"))).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(second.calls.load(Ordering::SeqCst), 1);

    match items.get("A->marker") {
        Some(LoadedItem::Advisor(advisor)) => assert_eq!(advisor.advice().callback, "first"),
        other => panic!("expected an advisor, got {:?}", other),
    }
}

#[test]
fn test_failed_pass_can_be_retried() {
    let extension = Arc::new(RecordingExtension::new("first"));
    let mut loader = recording_loader(&extension);
    loader.container().register_aspect(Aspect::new(aspect_class("A")));

    extension.fail.store(true, Ordering::SeqCst);
    let err = loader.load_and_register_changed().unwrap_err();
    assert!(matches!(err, Error::Loader(LoaderError::Configuration(_))));
    assert!(loader.loaded_resources().is_empty());
    assert!(loader.container().advisors().is_empty());

    extension.fail.store(false, Ordering::SeqCst);
    assert_eq!(loader.load_and_register_changed().unwrap(), 1);
    assert!(loader.container().find_advisor("A->marker").is_some());
}

#[test]
fn test_resource_without_aspects_loads_nothing() {
    let extension = Arc::new(RecordingExtension::new("first"));
    let mut loader = recording_loader(&extension);
    loader.container().register_aspect(Aspect::new(aspect_class("A")));
    loader.load_and_register_changed().unwrap();

    // A resource without aspects is recorded but loads nothing.
    loader.container().add_resource("/app/aspect/Empty.src".into());
    assert_eq!(loader.load_and_register_changed().unwrap(), 0);
    assert_eq!(extension.calls.load(Ordering::SeqCst), 1);
    assert_eq!(loader.loaded_resources().len(), 2);
}

#[test]
fn test_default_extensions_load_annotated_members() {
    let loader = AspectLoader::with_default_extensions(
        InMemoryAspectContainer::new(),
        Arc::new(AttachedAnnotationReader),
    );
    let aspect = Aspect::new(
        aspect_class("Audit").with_property(ReflectedProperty::new("auditable").with_annotation(
            Annotation::new("DeclareParents")
                .with_args(json!({ "class": "Order*", "interface": "Auditable" })),
        )),
    );

    let items = loader.load(&logging_aspect()).unwrap();
    assert_eq!(
        items.ids().collect::<Vec<_>>(),
        vec!["Logging->aroundSave", "Logging->publicMethods"]
    );
    assert!(matches!(items.get("Logging->aroundSave"), Some(LoadedItem::Advisor(_))));
    assert!(matches!(items.get("Logging->publicMethods"), Some(LoadedItem::Pointcut(_))));

    assert_eq!(loader.load_and_register(&aspect).unwrap(), 1);
    let advisor = loader.container().get_advisor("Audit->auditable").unwrap();
    assert_eq!(advisor.kind(), AdviceKind::Introduction);
    assert_eq!(advisor.advice().callback, "Auditable");
}

#[test]
fn test_unknown_advisor_is_not_found_until_loaded() {
    let loader = AspectLoader::with_default_extensions(
        InMemoryAspectContainer::new(),
        Arc::new(AttachedAnnotationReader),
    );
    loader.container().register_aspect(logging_aspect());

    let err = loader.container().get_advisor("missing").unwrap_err();
    assert!(matches!(
        err,
        Error::Container(ContainerError::AdvisorNotFound(ref id)) if id == "missing"
    ));
    assert!(loader.container().find_advisor("Logging->aroundSave").is_none());

    let advisor = loader.get_or_load_advisor("Logging->aroundSave").unwrap();
    assert_eq!(advisor.id(), "Logging->aroundSave");
    assert!(loader.container().get_advisor("Logging->aroundSave").is_ok());
    assert!(loader.container().get_pointcut("Logging->publicMethods").is_ok());
}

#[test]
fn test_get_or_load_advisor_errors() {
    let loader = AspectLoader::with_default_extensions(
        InMemoryAspectContainer::new(),
        Arc::new(AttachedAnnotationReader),
    );
    loader.container().register_aspect(logging_aspect());

    let err = loader.get_or_load_advisor("Logging->helper").unwrap_err();
    assert!(matches!(err, Error::Container(ContainerError::AdvisorNotFound(_))));

    let err = loader.get_or_load_advisor("Metrics->count").unwrap_err();
    assert!(matches!(
        err,
        Error::Container(ContainerError::AspectNotFound(ref id)) if id == "Metrics"
    ));

    let err = loader.get_or_load_advisor("missing").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_malformed_pointcut_is_configuration_error() {
    let loader = AspectLoader::with_default_extensions(
        InMemoryAspectContainer::new(),
        Arc::new(AttachedAnnotationReader),
    );
    let aspect = Aspect::new(aspect_class("Broken").with_method(
        ReflectedMethod::new("before").with_annotation(Annotation::new("Before")),
    ));

    let err = loader.load_and_register(&aspect).unwrap_err();
    assert!(matches!(err, Error::Loader(LoaderError::Configuration(_))));
    assert!(loader.container().advisors().is_empty());
}

// Reader that only understands methods
struct MethodOnlyReader;

impl AnnotationReader for MethodOnlyReader {
    fn class_annotations(&self, class: &ReflectedClass) -> Result<Vec<Annotation>> {
        Err(ReflectionError::UnsupportedPoint(format!("class {}", class.name)).into())
    }

    fn method_annotations(&self, method: &ReflectedMethod) -> Result<Vec<Annotation>> {
        Ok(method.annotations.clone())
    }

    fn property_annotations(&self, property: &ReflectedProperty) -> Result<Vec<Annotation>> {
        Err(ReflectionError::UnsupportedPoint(format!("property {}", property.name)).into())
    }
}

#[test]
fn test_reader_errors_propagate() {
    let loader = AspectLoader::with_default_extensions(
        InMemoryAspectContainer::new(),
        Arc::new(MethodOnlyReader),
    );

    // Methods only: the property extension never asks the reader.
    assert!(loader.load(&logging_aspect()).is_ok());

    let aspect = Aspect::new(aspect_class("Audit").with_property(ReflectedProperty::new("x")));
    let err = loader.load(&aspect).unwrap_err();
    assert!(matches!(err, Error::Reflection(ReflectionError::UnsupportedPoint(_))));
}

// Class-level annotation extension keyed by the `id` argument
#[derive(Default)]
struct ClassAnnotationExtension {
    supported: Mutex<Vec<String>>,
    loaded: Mutex<Vec<String>>,
}

impl AspectLoaderExtension for ClassAnnotationExtension {
    fn targets(&self) -> LoaderTarget {
        LoaderTarget::CLASS
    }

    fn kind(&self) -> LoaderKind {
        LoaderKind::Annotation
    }

    fn supports(
        &self,
        aspect: &Aspect,
        _: ReflectionPoint<'_>,
        annotation: Option<&Annotation>,
    ) -> bool {
        let Some(annotation) = annotation else {
            return false;
        };
        self.supported
            .lock()
            .push(format!("{}:{}", aspect.id(), annotation.name));
        annotation.str_arg("id").is_some()
    }

    fn load(
        &self,
        aspect: &Aspect,
        _: ReflectionPoint<'_>,
        annotation: Option<&Annotation>,
    ) -> Result<LoadedItems> {
        let annotation = annotation
            .ok_or_else(|| LoaderError::Configuration("annotation required".to_string()))?;
        self.loaded
            .lock()
            .push(format!("{}:{}", aspect.id(), annotation.name));

        let id = format!("{}->{}", aspect.id(), annotation.str_arg("id").unwrap_or_default());
        let pointcut = PointcutSpec::Introduction { class: "*".to_string() }.build()?;
        let mut items = LoadedItems::new();
        items.insert_advisor(Advisor::new(
            id,
            pointcut,
            Advice::new(AdviceKind::Introduction, annotation.name.clone()),
        ));
        Ok(items)
    }
}

#[test]
fn test_class_annotations_are_loaded_one_at_a_time() {
    let extension = Arc::new(ClassAnnotationExtension::default());
    let mut loader = AspectLoader::new(
        InMemoryAspectContainer::new(),
        Arc::new(AttachedAnnotationReader),
    );
    loader.register_extension(extension.clone());

    let aspect = Aspect::new(
        aspect_class("A")
            .with_annotation(Annotation::new("X").with_args(json!({ "id": "shared" })))
            .with_annotation(Annotation::new("Note"))
            .with_annotation(Annotation::new("Y").with_args(json!({ "id": "shared" })))
            .with_annotation(Annotation::new("Z").with_args(json!({ "id": "own" }))),
    );

    let items = loader.load(&aspect).unwrap();
    assert_eq!(*extension.supported.lock(), vec!["A:X", "A:Note", "A:Y", "A:Z"]);
    assert_eq!(*extension.loaded.lock(), vec!["A:X", "A:Y", "A:Z"]);
    assert_eq!(items.ids().collect::<Vec<_>>(), vec!["A->shared", "A->own"]);
    match items.get("A->shared") {
        Some(LoadedItem::Advisor(advisor)) => assert_eq!(advisor.advice().callback, "X"),
        other => panic!("expected an advisor, got {:?}", other),
    }

    loader.container().register_aspect(aspect);
    assert_eq!(loader.load_and_register_changed().unwrap(), 2);
    assert_eq!(loader.load_and_register_changed().unwrap(), 0);
    assert_eq!(extension.loaded.lock().len(), 6);
}
