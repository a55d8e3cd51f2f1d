use crate::{ComponentRef, PropValue, Props, COMPONENT_PROP};
use std::{
    any::Any,
    fmt::{self, Debug, Display, Formatter},
    sync::Arc,
};

/// Uniquely identifies an element. Every element gets a fresh key when it's created.
#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug)]
pub struct ElementKey(uuid::Uuid);

impl ElementKey {
    /// Creates a new, random key.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ElementKey {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ElementKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// A description of an element: construct a `C` with these props.
///
/// Elements are immutable. They aren't rendered by this crate; hand them to the rendering runtime
/// the container type belongs to.
pub struct Element<C> {
    key: ElementKey,
    container: Arc<C>,
    props: Props,
}

impl<C> Element<C> {
    pub(crate) fn new(container: Arc<C>, props: Props) -> Self {
        Self {
            key: ElementKey::new(),
            container,
            props,
        }
    }

    /// The element's key.
    pub fn key(&self) -> ElementKey {
        self.key
    }

    /// The container type this element should be constructed as.
    pub fn container(&self) -> &Arc<C> {
        &self.container
    }

    /// The element's props, including its `Component` prop.
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// The component this element wraps.
    pub fn component(&self) -> Option<&ComponentRef> {
        self.props.get(COMPONENT_PROP).and_then(PropValue::as_component)
    }

    /// Consumes the element, returning its props.
    pub fn into_props(self) -> Props {
        self.props
    }
}

impl<C: Any + Send + Sync> Element<C> {
    /// Erases the container type.
    pub fn into_any(self) -> AnyElement {
        self.into()
    }
}

impl<C> Clone for Element<C> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            container: self.container.clone(),
            props: self.props.clone(),
        }
    }
}

impl<C> Debug for Element<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("key", &self.key)
            .field("container", &std::any::type_name::<C>())
            .field("props", &self.props)
            .finish()
    }
}

#[cfg(feature = "serde")]
impl<C> serde::Serialize for Element<C> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("Element", 2)?;
        s.serialize_field("key", &self.key.to_string())?;
        s.serialize_field("props", &self.props)?;
        s.end()
    }
}

/// An element whose container type has been erased.
///
/// Useful for keeping elements from several factories, each bound to a different container type,
/// in one collection.
#[derive(Clone)]
pub struct AnyElement {
    key: ElementKey,
    container: Arc<dyn Any + Send + Sync>,
    props: Props,
}

impl AnyElement {
    /// The element's key.
    pub fn key(&self) -> ElementKey {
        self.key
    }

    /// The element's props, including its `Component` prop.
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// The component this element wraps.
    pub fn component(&self) -> Option<&ComponentRef> {
        self.props.get(COMPONENT_PROP).and_then(PropValue::as_component)
    }

    /// Returns the container if it is a `C`.
    pub fn downcast_container<C: Any>(&self) -> Option<&C> {
        self.container.downcast_ref::<C>()
    }

    /// Recovers the typed element if the container is a `C`.
    pub fn downcast<C: Any + Send + Sync>(self) -> Result<Element<C>, Self> {
        match self.container.clone().downcast::<C>() {
            Ok(container) => Ok(Element {
                key: self.key,
                container,
                props: self.props,
            }),
            Err(_) => Err(self),
        }
    }
}

impl<C: Any + Send + Sync> From<Element<C>> for AnyElement {
    fn from(e: Element<C>) -> Self {
        Self {
            key: e.key,
            container: e.container,
            props: e.props,
        }
    }
}

impl Debug for AnyElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyElement")
            .field("key", &self.key)
            .field("props", &self.props)
            .finish()
    }
}
