use std::{
    any::{self, Any, TypeId},
    borrow::Cow,
    fmt::{self, Debug, Formatter},
    sync::Arc,
};

/// An opaque reference to the component that an element wraps.
///
/// The reference is never inspected by this crate. It only travels from the caller to the
/// `Component` prop of the element, where the container or the rendering runtime can downcast it
/// back to whatever it expects.
///
/// Cloning is cheap and preserves identity: two references are equal if and only if they point to
/// the same underlying value.
#[derive(Clone)]
pub struct ComponentRef {
    name: Cow<'static, str>,
    inner: Arc<dyn Any + Send + Sync>,
}

impl ComponentRef {
    /// Creates a reference named after the type of `value`.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            name: Cow::Borrowed(short_type_name::<T>()),
            inner: Arc::new(value),
        }
    }

    /// Creates a reference with an explicit name.
    pub fn named<T: Any + Send + Sync>(name: impl Into<Cow<'static, str>>, value: T) -> Self {
        Self {
            name: name.into(),
            inner: Arc::new(value),
        }
    }

    /// The display name of the component.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type id of the referenced value.
    pub fn type_id(&self) -> TypeId {
        (*self.inner).type_id()
    }

    /// Returns the referenced value if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Returns true if both references point to the same value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for ComponentRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ComponentRef {}

impl Debug for ComponentRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComponentRef").field(&self.name).finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ComponentRef {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

// `my_crate::widgets::Button<T>` -> `Button<T>`. Tuples, references, arrays and the like keep
// their full name.
fn short_type_name<T: ?Sized>() -> &'static str {
    shorten(any::type_name::<T>())
}

fn shorten(full: &str) -> &str {
    let path = &full[..full.find('<').unwrap_or(full.len())];
    if path.is_empty() || !path.chars().all(|c| c.is_alphanumeric() || c == '_' || c == ':') {
        return full;
    }
    match path.rfind("::") {
        Some(i) => &full[i + 2..],
        None => full,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;

    #[test]
    fn test_name() {
        assert_eq!(ComponentRef::new(Widget).name(), "Widget");
        assert_eq!(ComponentRef::named("Fancy", Widget).name(), "Fancy");
    }

    #[test]
    fn test_shorten() {
        assert_eq!(shorten("a::b::Button"), "Button");
        assert_eq!(shorten("a::Generic<b::Widget>"), "Generic<b::Widget>");
        assert_eq!(shorten("Widget"), "Widget");
        assert_eq!(shorten("(a::B, c::D)"), "(a::B, c::D)");
        assert_eq!(shorten("&a::B"), "&a::B");
        assert_eq!(shorten("[a::B; 2]"), "[a::B; 2]");
        assert_eq!(shorten("dyn a::Trait"), "dyn a::Trait");
    }

    #[test]
    fn test_tuple_name() {
        let name = ComponentRef::new((Widget, 1u8)).name().to_string();
        assert!(name.starts_with('('), "{name}");
        assert!(name.contains("Widget"), "{name}");
    }

    #[test]
    fn test_identity() {
        let a = ComponentRef::new(Widget);
        let b = a.clone();
        let c = ComponentRef::new(Widget);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn test_downcast() {
        let c = ComponentRef::new(42u32);
        assert_eq!(c.downcast_ref::<u32>(), Some(&42));
        assert!(c.downcast_ref::<Widget>().is_none());
        assert_eq!(c.type_id(), TypeId::of::<u32>());
    }
}
