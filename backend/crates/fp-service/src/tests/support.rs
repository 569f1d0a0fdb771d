use crate::ServiceError;
use crate::support::{parse_enum, required, with_timeout};

use fp_ai::AiResult;
use fp_core::Genre;

use std::time::Duration;

use googletest::prelude::*;

#[test]
fn test_required_trims_and_rejects_blank() {
    assert_that!(required("  Midnight ", "title"), ok(eq("Midnight")));
    assert!(matches!(
        required(" \t", "title"),
        Err(ServiceError::Validation { field: Some(ref f), .. }) if f == "title"
    ));
}

#[test]
fn test_parse_enum_names_the_field() {
    assert_that!(parse_enum::<Genre>(" horror ", "genre"), ok(eq(&Genre::Horror)));
    assert!(matches!(
        parse_enum::<Genre>("western", "genre"),
        Err(ServiceError::Validation { field: Some(ref f), .. }) if f == "genre"
    ));
}

#[tokio::test]
async fn test_with_timeout_passes_result_through() {
    let result = with_timeout(Duration::from_secs(1), async { AiResult::Ok(7) }).await;

    assert_that!(result, ok(eq(&7)));
}

#[tokio::test]
async fn test_with_timeout_elapses_as_upstream() {
    let slow = async {
        tokio::time::sleep(Duration::from_secs(60)).await;
        AiResult::Ok(())
    };

    let result = with_timeout(Duration::from_millis(10), slow).await;

    assert!(matches!(result, Err(ServiceError::Upstream { .. })));
}
