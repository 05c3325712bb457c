//! Integration tests for the sample user fixtures

use serde_json::{Map, Value, json};
use treekit_core::accessor;
use treekit_core::fixtures::{
    add_new_user, change_users_address, convert_users_geo_to_number, remove_address_coordinates,
    remove_company_info, sample_users,
};

#[test]
fn test_edits_compose_without_touching_the_fixture() {
    let mut changes = Map::new();
    changes.insert("city".to_string(), json!("London"));

    let users = change_users_address(sample_users(), &changes);
    let users = remove_company_info(&users);
    let users = add_new_user(&users, json!({"id": 11, "name": "Leanne"}));
    let users = convert_users_geo_to_number(&users).expect("numeric coordinates");

    assert_eq!(users.len(), 2);
    assert_eq!(accessor::get(&users[0], "address.city"), Some(&json!("London")));
    assert_eq!(accessor::get(&users[0], "company"), None);
    assert!(
        accessor::get(&users[0], "address.geo.lng")
            .is_some_and(Value::is_number)
    );

    let original = &sample_users()[0];
    assert_eq!(accessor::get(original, "address.city"), Some(&json!("Lebsackbury")));
    assert!(accessor::get(original, "company").is_some());
}

#[test]
fn test_coordinates_removed() {
    let users = remove_address_coordinates(sample_users());
    assert_eq!(accessor::get(&users[0], "address.geo"), None);
    assert_eq!(accessor::get(&users[0], "address.suite"), Some(&json!("Suite 198")));
}
