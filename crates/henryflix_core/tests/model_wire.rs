use henryflix_core::{Category, Plan, Review, Series, User};
use serde_json::json;

#[test]
fn user_serializes_with_expected_fields() {
    let mut user = User::new("a@x.com", "Ana");
    user.watched.push("Friends".to_string());

    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(
        value,
        json!({
            "email": "a@x.com",
            "name": "Ana",
            "plan": "regular",
            "watched": ["Friends"]
        })
    );
}

#[test]
fn series_serializes_with_expected_fields() {
    let mut series = Series::new("Dark", 3, Category::Premium, 2017);
    series.add_review(Review::new("a@x.com", 5.0));

    let value = serde_json::to_value(&series).unwrap();
    assert_eq!(value["name"], "Dark");
    assert_eq!(value["seasons"], 3);
    assert_eq!(value["category"], "premium");
    assert_eq!(value["year"], 2017);
    assert_eq!(value["rating"], 5.0);
    assert_eq!(value["reviews"], json!([{ "email": "a@x.com", "score": 5.0 }]));
}

#[test]
fn plan_rejects_unknown_wire_value() {
    let plan: Plan = serde_json::from_value(json!("premium")).unwrap();
    assert_eq!(plan, Plan::Premium);
    assert!(serde_json::from_value::<Plan>(json!("gold")).is_err());
}
