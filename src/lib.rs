//! Surface area and volume for flat shapes, solids and prisms.
//!
//! ```
//! use mensura::geometry::{Prism, Shape, Square};
//!
//! let prism = Prism::extrude(10.0, Square::new(4.0));
//! assert_eq!(prism.tag(), "square prism");
//! assert_eq!(prism.volume().ok(), Some(160.0));
//! assert!(Square::new(4.0).volume().is_err());
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod store;

pub use error::{MensuraError, Result};
