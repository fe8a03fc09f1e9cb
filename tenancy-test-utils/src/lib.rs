pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
pub use fixtures::tenancy::PartRef;

pub mod prelude {
    pub use crate::{
        fixtures::tenancy::factory, test_setup_with_tables, PartRef, TestBuilder, TestContext,
        TestError,
    };
}
