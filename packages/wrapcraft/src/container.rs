/// Resolves the container type for a rendering runtime.
///
/// This is the boundary between [`ElementFactory`](crate::ElementFactory) and whatever decides
/// how a wrapped component actually behaves (deferred loading, error boundaries, visibility
/// gating, and so on). The element factory only needs the resulting container type and never
/// looks inside it.
///
/// Any `Fn(&L) -> Result<C, E>` is a container factory, so most of the time a closure or a plain
/// function is all you need:
///
/// ```
/// # use wrapcraft::ContainerFactory;
/// struct Runtime {
///     version: u32,
/// }
///
/// #[derive(Debug, PartialEq)]
/// struct Container {
///     legacy: bool,
/// }
///
/// fn container_for(runtime: &Runtime) -> Result<Container, String> {
///     match runtime.version {
///         0 => Err("unsupported runtime".to_string()),
///         v => Ok(Container { legacy: v < 16 }),
///     }
/// }
///
/// let runtime = Runtime { version: 15 };
/// assert_eq!(container_for.create_container(&runtime), Ok(Container { legacy: true }));
/// ```
pub trait ContainerFactory<L: ?Sized> {
    /// The container type produced for a runtime.
    type Container;

    /// The error produced when the runtime can't be used.
    type Error;

    /// Resolves the container type for `library`.
    fn create_container(&self, library: &L) -> Result<Self::Container, Self::Error>;
}

impl<L, C, E, F> ContainerFactory<L> for F
where
    L: ?Sized,
    F: Fn(&L) -> Result<C, E>,
{
    type Container = C;
    type Error = E;

    fn create_container(&self, library: &L) -> Result<C, E> {
        self(library)
    }
}
