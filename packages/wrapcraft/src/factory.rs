use crate::{ComponentRef, ContainerFactory, Element, Props, COMPONENT_PROP};
use std::{any, sync::Arc};
use tracing::{debug, trace};

/// Creates elements that wrap components in a container type bound to one rendering runtime.
///
/// The container type is resolved once, when the factory is created, and every element the
/// factory produces shares it. The library handle is kept for the factory's lifetime, so all of
/// its elements are compatible with the same runtime instance.
///
/// ```
/// use wrapcraft::prelude::*;
///
/// struct Runtime;
///
/// #[derive(Debug)]
/// struct Suspense;
///
/// struct Widget;
///
/// let factory = ElementFactory::new(Runtime, &|_: &Runtime| Ok::<_, ()>(Suspense)).unwrap();
/// let widget = ComponentRef::new(Widget);
///
/// let element = factory.create_element(widget.clone(), props!(id: 1, Component: "ignored"));
/// assert_eq!(element.props().keys().collect::<Vec<_>>(), ["id", "Component"]);
/// assert_eq!(element.component(), Some(&widget));
/// ```
pub struct ElementFactory<L, C> {
    library: L,
    container: Arc<C>,
}

impl<L, C> ElementFactory<L, C> {
    /// Binds a factory to `library`, resolving its container type with `container_factory`.
    ///
    /// The container factory is called exactly once, before this returns. If it fails, its error is
    /// returned as is and no factory is created.
    pub fn new<F>(library: L, container_factory: &F) -> Result<Self, F::Error>
    where
        F: ContainerFactory<L, Container = C> + ?Sized,
    {
        let container = match container_factory.create_container(&library) {
            Ok(container) => container,
            Err(err) => {
                debug!(
                    library = any::type_name::<L>(),
                    "failed to resolve container type"
                );
                return Err(err);
            }
        };
        debug!(
            library = any::type_name::<L>(),
            container = any::type_name::<C>(),
            "resolved container type"
        );
        Ok(Self {
            library,
            container: Arc::new(container),
        })
    }

    /// Creates an element of the container type whose `Component` prop is `component`.
    ///
    /// Every entry of `props` is carried over in order. The `Component` prop is applied last and
    /// always wins, even if `props` already has an entry by that name. Passing `None` is the same
    /// as passing an empty [`Props`].
    pub fn create_element(
        &self,
        component: impl Into<ComponentRef>,
        props: impl Into<Option<Props>>,
    ) -> Element<C> {
        let component = component.into();
        let mut props = props.into().unwrap_or_default();
        let replaced = props.insert(COMPONENT_PROP, component.clone());
        trace!(
            component = component.name(),
            props = props.len(),
            replaced_component_prop = replaced.is_some(),
            "creating element"
        );
        Element::new(self.container.clone(), props)
    }

    /// The library handle this factory is bound to.
    pub fn library(&self) -> &L {
        &self.library
    }

    /// The container type every element from this factory is constructed as.
    pub fn container(&self) -> &Arc<C> {
        &self.container
    }

    /// Turns the factory into a plain `create_element` function.
    pub fn into_fn(self) -> impl Fn(ComponentRef, Option<Props>) -> Element<C> {
        move |component: ComponentRef, props: Option<Props>| {
            self.create_element(component, props)
        }
    }
}

/// Binds `library` and returns a `create_element(component, props)` function.
///
/// This is [`ElementFactory::new`] followed by [`ElementFactory::into_fn`].
pub fn create_element_factory<L, F>(
    library: L,
    container_factory: &F,
) -> Result<impl Fn(ComponentRef, Option<Props>) -> Element<F::Container>, F::Error>
where
    F: ContainerFactory<L> + ?Sized,
{
    Ok(ElementFactory::new(library, container_factory)?.into_fn())
}
