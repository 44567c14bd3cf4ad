use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static PETS_ADDED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "petstore_pets_added_total",
        "Total pets created or replaced"
    )
    .expect("register pets_added_total")
});

pub static PETS_DELETED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "petstore_pets_deleted_total",
        "Total pets removed"
    )
    .expect("register pets_deleted_total")
});

pub static LOOKUPS_MISSED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "petstore_lookups_missed_total",
        "Total id lookups that found no pet"
    )
    .expect("register lookups_missed_total")
});

pub static UPLOADS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "petstore_uploads_total",
        "Total image uploads stored"
    )
    .expect("register uploads_total")
});

/// Force registration so every counter shows up in the first scrape.
pub fn init() {
    Lazy::force(&PETS_ADDED_TOTAL);
    Lazy::force(&PETS_DELETED_TOTAL);
    Lazy::force(&LOOKUPS_MISSED_TOTAL);
    Lazy::force(&UPLOADS_TOTAL);
}

/// Encode the default registry in the text exposition format.
pub fn gather_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let mut buf = Vec::new();
    if let Err(e) = encoder.encode(&prometheus::gather(), &mut buf) {
        return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
    }
    match String::from_utf8(buf) {
        Ok(text) => (StatusCode::OK, text),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
