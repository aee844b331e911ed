//! vf-components: typed component model for electrical circuits.
//!
//! A [`Component`] is an immutable record of one electrical element: an
//! opaque caller-supplied id, a closed [`ComponentKind`], a nominal value in
//! SI base units, and a free-form display unit string. Construction
//! validates the value (finite; strictly positive for passive kinds) and
//! returns [`ComponentError`] on bad input. No side effects, no mutation.
//!
//! # Example
//!
//! ```
//! use vf_components::{Component, ComponentKind};
//!
//! let r1 = Component::resistor("R1", 10.0).unwrap();
//! assert_eq!(r1.kind(), ComponentKind::Resistor);
//! assert!(r1.is_passive());
//! assert_eq!(r1.resistance().unwrap().value, 10.0);
//!
//! // Zero-valued passives are physically invalid
//! assert!(Component::resistor("R2", 0.0).is_err());
//! // Zero-valued sources are fine (a disabled source)
//! assert!(Component::voltage_source("V1", 0.0).is_ok());
//! ```

pub mod component;
pub mod error;
pub mod kind;

// Re-exports
pub use component::Component;
pub use error::{ComponentError, ComponentResult};
pub use kind::ComponentKind;
