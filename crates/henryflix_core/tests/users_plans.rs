use henryflix_core::{CatalogError, CatalogService, Plan};

#[test]
fn add_user_creates_regular_user_with_empty_history() {
    let mut service = CatalogService::in_memory();

    let message = service.add_user("a@x.com", "Ana").unwrap();
    assert_eq!(message, "Usuario a@x.com creado correctamente");

    let users = service.list_users(None);
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "a@x.com");
    assert_eq!(users[0].name, "Ana");
    assert_eq!(users[0].plan, Plan::Regular);
    assert!(users[0].watched.is_empty());
}

#[test]
fn duplicate_email_is_rejected_and_only_first_insert_counts() {
    let mut service = CatalogService::in_memory();
    service.add_user("a@x.com", "Ana").unwrap();

    let err = service.add_user("a@x.com", "Impostora").unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateUser(ref email) if email == "a@x.com"));
    assert_eq!(err.to_string(), "El usuario ya existe");

    let users = service.list_users(None);
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Ana");
}

#[test]
fn list_users_filters_by_plan_in_insertion_order() {
    let mut service = CatalogService::in_memory();
    service.add_user("a@x.com", "Ana").unwrap();
    service.add_user("b@x.com", "Beto").unwrap();
    service.add_user("c@x.com", "Caro").unwrap();
    service.switch_plan("c@x.com").unwrap();
    service.switch_plan("a@x.com").unwrap();

    let premium: Vec<String> = service
        .list_users(Some("premium"))
        .into_iter()
        .map(|user| user.email)
        .collect();
    assert_eq!(premium, vec!["a@x.com", "c@x.com"]);

    let regular = service.list_users(Some("regular"));
    assert_eq!(regular.len(), 1);
    assert_eq!(regular[0].email, "b@x.com");
}

#[test]
fn list_users_ignores_unknown_plan_filter() {
    let mut service = CatalogService::in_memory();
    service.add_user("a@x.com", "Ana").unwrap();
    service.add_user("b@x.com", "Beto").unwrap();
    service.switch_plan("b@x.com").unwrap();

    assert_eq!(service.list_users(Some("vip")).len(), 2);
    assert_eq!(service.list_users(Some("Premium")).len(), 2);
    assert_eq!(service.list_users(Some("")), service.list_users(None));
}

#[test]
fn switch_plan_toggles_and_is_its_own_inverse() {
    let mut service = CatalogService::in_memory();
    service.add_user("m@x.com", "Martu").unwrap();

    assert_eq!(
        service.switch_plan("m@x.com").unwrap(),
        "Martu, ahora tienes el plan premium"
    );
    assert_eq!(service.get_user("m@x.com").unwrap().plan, Plan::Premium);

    assert_eq!(
        service.switch_plan("m@x.com").unwrap(),
        "Martu, ahora tienes el plan regular"
    );
    assert_eq!(service.get_user("m@x.com").unwrap().plan, Plan::Regular);
}

#[test]
fn switch_plan_unknown_user_fails() {
    let mut service = CatalogService::in_memory();

    let err = service.switch_plan("ghost@x.com").unwrap_err();
    assert_eq!(err, CatalogError::UserNotFound("ghost@x.com".to_string()));
    assert_eq!(err.to_string(), "Usuario inexistente");
}

#[test]
fn reset_empties_users_and_series() {
    let mut service = CatalogService::in_memory();
    service.add_user("a@x.com", "Ana").unwrap();
    service.add_serie("Friends", 10, "regular", 1994).unwrap();

    service.reset();

    assert!(service.list_users(None).is_empty());
    assert!(service.list_series(None).unwrap().is_empty());
    service.add_user("a@x.com", "Ana").unwrap();
}
