//! Typed entities declared with `validated_entity!`.

use crate::common::*;
use typekind::validated_entity;

validated_entity! {
    /// The login record with generated accessors
    pub struct User {
        /// Login name
        username: String => set_username,
        /// Secret
        password: String => set_password,
    }
}

impl User {
    fn with_credentials(name: &str, password: &str) -> Result<Self, Error> {
        let mut user = User::new()?;
        user.set_username(name)?;
        user.set_password(password)?;
        Ok(user)
    }

    fn user_name(&self) -> Option<&str> {
        self.username().ok().and_then(Value::as_str)
    }
}

validated_entity! {
    struct Settings {
        retries: Number => set_retries,
        verbose: Boolean => set_verbose,
        filter: RegExp => set_filter,
        extra: Object => set_extra,
    }
}

#[test]
fn typed_user_scenario() {
    init_tracing();
    let mut user = User::with_credentials("Igor", "Ivanovic").unwrap();
    assert_eq!(user.user_name(), Some("Igor"));
    assert_eq!(user.password(), Ok(&Value::from("Ivanovic")));

    user.set_username("Ana").unwrap();
    assert_eq!(user.user_name(), Some("Ana"));

    assert_mismatch!(user.set_password(false), "password", Kind::Boolean, Kind::String);

    user.destroy();
    assert!(user.is_destroyed());
    assert!(matches!(user.username(), Err(Error::Destroyed { .. })));
}

#[test]
fn typed_entity_exposes_schema() {
    let user = User::new().unwrap();
    assert_eq!(
        user.entity().attributes().collect::<Vec<_>>(),
        ["username", "password"]
    );
    assert_eq!(user.entity().kind_of("password"), Some(Kind::String));
}

#[test]
fn typed_entity_checks_every_kind() {
    let mut settings = Settings::new().unwrap();
    settings.set_retries(3).unwrap();
    settings.set_verbose(true).unwrap();
    settings.set_filter(Value::regexp("^warn").unwrap()).unwrap();
    settings.set_extra(Value::Object(Default::default())).unwrap();

    assert_eq!(settings.retries(), Ok(&Value::Number(3.0)));
    assert!(settings
        .filter()
        .unwrap()
        .as_pattern()
        .is_some_and(|p| p.is_match("warning")));
    assert_eq!(settings.verbose(), Ok(&Value::Bool(true)));
    assert_eq!(settings.extra().unwrap().kind(), Ok(Kind::Object));

    assert_mismatch!(
        settings.set_extra(Value::Array(vec![])),
        "extra",
        Kind::Array,
        Kind::Object
    );
}
