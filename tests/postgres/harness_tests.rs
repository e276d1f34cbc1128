//! Tests for the temporary-database harness itself.

use crate::postgres::helpers::{BoxError, TEST_DATABASE_URL_VAR, admin_url, with_database};
use rstest::rstest;

#[rstest]
#[case(None)]
#[case(Some(String::new()))]
#[case(Some("   ".to_owned()))]
fn missing_server_url_is_an_error(#[case] value: Option<String>) -> Result<(), BoxError> {
    let Err(err) = admin_url(value) else {
        return Err("setup must fail without a server".into());
    };

    assert!(err.to_string().contains(TEST_DATABASE_URL_VAR));
    Ok(())
}

#[rstest]
fn configured_server_url_is_used() -> Result<(), BoxError> {
    let url = admin_url(Some("postgres://localhost/postgres".to_owned()))?;

    assert_eq!(url, "postgres://localhost/postgres");
    Ok(())
}

#[rstest]
#[case("postgres://user@localhost/postgres", "postgres://user@localhost/taskgate_x")]
#[case(
    "postgres://user@localhost:5433/postgres?sslmode=disable",
    "postgres://user@localhost:5433/taskgate_x?sslmode=disable"
)]
fn database_name_is_swapped_in_url(
    #[case] admin: &str,
    #[case] expected: &str,
) -> Result<(), BoxError> {
    let url = with_database(admin, "taskgate_x")?;

    assert_eq!(url, expected);
    Ok(())
}
