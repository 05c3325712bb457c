use once_cell::sync::Lazy;
use serde_json::{Value, json};

static SAMPLE_USERS: Lazy<Vec<Value>> = Lazy::new(|| {
    vec![json!({
        "id": 10,
        "name": "Clementina DuBuque",
        "username": "Moriah.Stanton",
        "email": "Rey.Padberg@karina.biz",
        "address": {
            "street": "Kattie Turnpike",
            "suite": "Suite 198",
            "city": "Lebsackbury",
            "zipcode": "31428-2261",
            "geo": {
                "lat": "-38.2386",
                "lng": "57.2232"
            }
        },
        "phone": "024-648-3804",
        "website": "ambrose.net",
        "company": {
            "name": "Hoeger LLC",
            "catchPhrase": "Centralized empowering task-force",
            "bs": "target end-to-end models"
        }
    })]
});

/// Sample user records, built on first access and shared read-only
#[must_use]
pub fn sample_users() -> &'static [Value] {
    SAMPLE_USERS.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor;

    #[test]
    fn same_instance_every_call() {
        assert!(std::ptr::eq(sample_users(), sample_users()));
    }

    #[test]
    fn nested_fields() {
        let user = &sample_users()[0];
        assert_eq!(accessor::get(user, "address.geo.lat"), Some(&json!("-38.2386")));
        assert_eq!(accessor::get(user, "company.name"), Some(&json!("Hoeger LLC")));
    }
}
