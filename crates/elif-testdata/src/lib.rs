//! # elif-testdata - Test Data Factories
//!
//! Small, explicit building blocks for preparing test data in elif.rs
//! applications: construct an object, then run it through an ordered list of
//! customizations.
//!
//! ## Features
//!
//! - **Factory**: build one object through `Default` or an instantiation closure
//! - **Customizer**: apply ordered, composable in-place mutations to any value
//! - **Batch Factory**: build an ordered list of independently customized objects
//! - **Configurable bounds**: batch sizes are capped by [`TestDataConfig`]
//!
//! ## Quick Start
//!
//! ```rust
//! use elif_testdata::prelude::*;
//!
//! #[derive(Debug, Default)]
//! struct Greeting {
//!     text: String,
//! }
//!
//! let greeting = create(
//!     &Customizations::new()
//!         .then(|g: &mut Greeting| g.text = "Hello, ".to_string())
//!         .then(|g: &mut Greeting| g.text.push_str("World!")),
//! )
//! .unwrap();
//! assert_eq!(greeting.text, "Hello, World!");
//!
//! let seq = Sequence::new();
//! let squares = create_list_of_with(
//!     4,
//!     || seq.next(),
//!     &Customizations::new().then(|n: &mut usize| *n *= *n),
//! )
//! .unwrap();
//! assert_eq!(squares, vec![0, 1, 4, 9]);
//! ```

pub mod batch;
pub mod config;
pub mod customization;
pub mod error;
pub mod factory;
pub mod sequence;

// Re-export commonly used types
#[cfg(feature = "parallel")]
pub use batch::create_list_of_par;
pub use batch::{create_list_of, create_list_of_with, extend_with};
pub use config::{TestDataConfig, TestDataConfigBuilder};
pub use customization::{
    customize, customize_nullable, Customization, CustomizationBounds, Customizations, Customize,
};
pub use error::{TestDataError, TestDataResult};
pub use factory::{create, create_with, try_create_with, Factory, TestDataFactory};
pub use sequence::Sequence;

/// Prelude module for convenient imports
pub mod prelude {
    #[cfg(feature = "parallel")]
    pub use crate::batch::create_list_of_par;
    pub use crate::{
        batch::{create_list_of, create_list_of_with, extend_with},
        config::{TestDataConfig, TestDataConfigBuilder},
        customization::{customize, customize_nullable, Customization, Customizations, Customize},
        error::{TestDataError, TestDataResult},
        factory::{create, create_with, try_create_with, Factory, TestDataFactory},
        sequence::Sequence,
    };
}
