use crate::status::RegistryBuilder;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn small_builder() -> RegistryBuilder {
    RegistryBuilder::new()
        .entry(200, "OK", "OK")
        .entry(404, "NOT_FOUND", "Not Found")
        .entry(422, "UNPROCESSABLE_CONTENT", "Unprocessable Content")
        .alias("UNPROCESSABLE_ENTITY", "UNPROCESSABLE_CONTENT")
}
