//! Declarative test builder.
//!
//! Configuration methods are queued and executed during the final `build()` call.

use mockito::Mock;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_tenancy_tables: bool,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    error_sink_endpoints: Vec<(usize, usize)>, // (status, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_tenancy_tables: false,
            mock_builders: Vec::new(),
            error_sink_endpoints: Vec::new(),
        }
    }

    /// Add every tenancy table to the test database.
    ///
    /// Creates Tenant, TenantPropertyPart, Contract and ContractTenant in dependency order,
    /// plus the unique `(contract_id, tenant_id)` roster index from the migrations.
    pub fn with_tenancy_tables(mut self) -> Self {
        self.include_tenancy_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tenancy_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), tenancy_test_utils::TestError> {
    /// let test = TestBuilder::new().with_table(Tenant).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Register a mock error-logging sink endpoint.
    ///
    /// # Arguments
    /// - `status` - HTTP status the sink answers with
    /// - `expected_requests` - Number of reports the sink should receive
    pub fn with_error_sink_endpoint(mut self, status: usize, expected_requests: usize) -> Self {
        self.error_sink_endpoints.push((status, expected_requests));
        self
    }

    /// Register an arbitrary mock endpoint on the mock server.
    pub fn with_mock_endpoint<F>(mut self, builder: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(builder));
        self
    }

    /// Build the test context, creating tables and mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready to use test context
    /// - `Err(TestError::DbErr)` - Connecting or creating tables failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        let mut all_tables = Vec::new();
        if self.include_tenancy_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Tenant),
                schema.create_table_from_entity(entity::prelude::TenantPropertyPart),
                schema.create_table_from_entity(entity::prelude::Contract),
                schema.create_table_from_entity(entity::prelude::ContractTenant),
            ]);
        }
        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        if self.include_tenancy_tables {
            setup.with_indexes(tenancy_indexes()).await?;
        }

        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (status, expected) in self.error_sink_endpoints {
            let mock = setup.error_sink().create_endpoint(status, expected).await;
            mocks.push(mock);
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

/// Indexes carrying invariants that entity-derived tables do not express.
fn tenancy_indexes() -> Vec<IndexCreateStatement> {
    vec![Index::create()
        .name("idx-contract_tenant-contract_id-tenant_id")
        .table(entity::prelude::ContractTenant)
        .col(entity::contract_tenant::Column::ContractId)
        .col(entity::contract_tenant::Column::TenantId)
        .unique()
        .to_owned()]
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
