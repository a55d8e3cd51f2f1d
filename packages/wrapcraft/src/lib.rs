//! # wrapcraft
//!
//! `wrapcraft` builds element descriptors that wrap a target component in a container type. The
//! container type is resolved once, from a rendering-runtime handle that you inject, so the same
//! code can target several runtime instances living side by side.
//!
//! ```
//! use wrapcraft::prelude::*;
//!
//! struct Runtime;
//! struct Container;
//! struct Widget;
//!
//! let factory = ElementFactory::new(Runtime, &|_: &Runtime| Ok::<_, ()>(Container)).unwrap();
//! let element = factory.create_element(ComponentRef::new(Widget), props!(id: 1));
//!
//! assert_eq!(element.props()["id"], PropValue::Int(1));
//! assert!(element.component().is_some());
//! ```

#![warn(missing_docs)]

// # Organization
//
// Code is organized into modules primarily for the benefit of the maintainers. Types are
// re-exported in the root so that users of the library have a flat namespace to work with.

mod component;
mod container;
mod element;
mod factory;
mod props;

mod flattened_exports {
    pub use crate::component::*;
    pub use crate::container::*;
    pub use crate::element::*;
    pub use crate::factory::*;
    pub use crate::props::*;

    pub use wrapcraft_macros::*;
}

pub use flattened_exports::*;

/// By importing this module, you'll bring all of the crate's commonly used types into scope.
pub mod prelude {
    pub use crate::flattened_exports::*;
}

// So we can use our own macros.
extern crate self as wrapcraft;
