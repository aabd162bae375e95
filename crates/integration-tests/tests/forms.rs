//! Integration tests for the login and registration forms.
//!
//! Both forms are demo-only: a valid login checks no credentials and a valid
//! registration saves nothing.

#![allow(clippy::unwrap_used)]

use demo_shop_integration_tests::TempStore;
use demo_shop_storefront::actions::{LOGGED_IN, REGISTERED};
use demo_shop_storefront::validate::{LoginForm, RegisterForm, fields, messages};
use demo_shop_storefront::{Action, KeyValueStore, PageState, View, dispatch, render_page};

fn register(name: &str, email: &str, password: &str, confirm: &str) -> Action {
    Action::Register(RegisterForm {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        confirm: confirm.to_string(),
    })
}

#[test]
fn test_registration_mismatch_stays_on_page() {
    let temp = TempStore::new();
    let mut shop = temp.shop().unwrap();

    let outcome = dispatch(
        &mut shop,
        register("Ana", "ana@example.com", "Secret1", "Secret2"),
    )
    .unwrap();

    assert_eq!(outcome.navigate, None);
    assert_eq!(outcome.notice, None);
    assert_eq!(
        outcome.errors.message(fields::REG_CONFIRM),
        messages::PASSWORD_MISMATCH
    );
}

#[test]
fn test_registration_saves_nothing() {
    let temp = TempStore::new();
    let mut shop = temp.shop().unwrap();
    let before = std::fs::read_to_string(temp.path()).unwrap();

    let outcome = dispatch(
        &mut shop,
        register("Ana", "ana@example.com", "Secret1", "Secret1"),
    )
    .unwrap();

    assert_eq!(outcome.navigate, Some(View::Login));
    assert_eq!(outcome.notice, Some(REGISTERED));
    assert_eq!(std::fs::read_to_string(temp.path()).unwrap(), before);

    let backend = shop.into_backend();
    for key in ["users", "user", "session"] {
        assert_eq!(backend.get_item(key).unwrap(), None);
    }
}

#[test]
fn test_weak_password_reported_with_other_errors() {
    let temp = TempStore::new();
    let mut shop = temp.shop().unwrap();

    let outcome = dispatch(&mut shop, register("A", "not-an-email", "secret", "secret")).unwrap();

    assert!(outcome.errors.contains(fields::REG_NAME));
    assert!(outcome.errors.contains(fields::REG_EMAIL));
    assert_eq!(
        outcome.errors.message(fields::REG_PASS),
        messages::WEAK_PASSWORD
    );
    assert!(!outcome.errors.contains(fields::REG_CONFIRM));
}

#[test]
fn test_login_accepts_any_password_of_length() {
    let temp = TempStore::new();
    let mut shop = temp.shop().unwrap();

    let outcome = dispatch(
        &mut shop,
        Action::Login(LoginForm {
            email: "someone@example.org".to_string(),
            password: "anything".to_string(),
        }),
    )
    .unwrap();

    assert_eq!(outcome.navigate, Some(View::Home));
    assert_eq!(outcome.notice, Some(LOGGED_IN));
}

#[test]
fn test_rejected_login_renders_errors() {
    let temp = TempStore::new();
    let mut shop = temp.shop().unwrap();
    let form = LoginForm {
        email: "someone".to_string(),
        password: "abc".to_string(),
    };

    let outcome = dispatch(&mut shop, Action::Login(form.clone())).unwrap();
    let html = render_page(
        &shop,
        View::Login,
        PageState {
            errors: outcome.errors,
            login: form,
            ..PageState::default()
        },
    )
    .unwrap();

    assert!(html.contains(messages::INVALID_EMAIL));
    assert!(html.contains(messages::PASSWORD_TOO_SHORT));
    assert!(html.contains(r#"value="someone""#));
    assert!(!html.contains("abc\""));
}
