/// Create a [`TestContext`](crate::TestContext) with only the provided entity tables.
///
/// With no arguments the database is left empty, which is useful for asserting that
/// repositories surface errors when their tables are missing.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}
