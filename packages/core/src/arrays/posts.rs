//! Joining posts with their authors and comments

use serde_json::Value;

use crate::value::Object;

/// Posts with `user` and `comments` embedded
///
/// Each post's `userId` is replaced by `user`, the matching user record
/// (`null` if none matches). `comments` lists the comments whose `postId`
/// is the post's `id` (empty if none), each with `userId` replaced by
/// `user` and `postId` removed. Inputs are left untouched.
#[must_use]
pub fn populate_posts(posts: &[Value], comments: &[Value], users: &[Value]) -> Vec<Value> {
    posts
        .iter()
        .map(|post| {
            let Value::Object(fields) = post else {
                return post.clone();
            };

            let mut populated = without(fields, &["userId"]);
            populated.insert("user".to_string(), find_user(users, post.get("userId")));

            let post_comments = comments
                .iter()
                .filter(|comment| same_id(comment.get("postId"), post.get("id")))
                .filter_map(Value::as_object)
                .map(|comment| {
                    let mut populated = without(comment, &["userId", "postId"]);
                    populated.insert("user".to_string(), find_user(users, comment.get("userId")));
                    Value::Object(populated)
                })
                .collect();
            populated.insert("comments".to_string(), Value::Array(post_comments));

            Value::Object(populated)
        })
        .collect()
}

fn same_id(a: Option<&Value>, b: Option<&Value>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

fn find_user(users: &[Value], user_id: Option<&Value>) -> Value {
    users
        .iter()
        .find(|user| same_id(user.get("id"), user_id))
        .cloned()
        .unwrap_or(Value::Null)
}

fn without(fields: &Object, keys: &[&str]) -> Object {
    fields
        .iter()
        .filter(|(key, _)| !keys.contains(&key.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn list(value: Value) -> Vec<Value> {
        value.as_array().cloned().unwrap_or_default()
    }

    #[test]
    fn embeds_users_and_comments() {
        let posts = list(json!([
            {"id": 1, "title": "First", "userId": 10},
            {"id": 2, "title": "Second", "userId": 11}
        ]));
        let comments = list(json!([
            {"id": 100, "postId": 1, "userId": 11, "text": "nice"},
            {"id": 101, "postId": 1, "userId": 10, "text": "thanks"}
        ]));
        let users = list(json!([{"id": 10, "name": "Ada"}, {"id": 11, "name": "Bob"}]));

        let populated = populate_posts(&posts, &comments, &users);
        assert_eq!(
            populated,
            list(json!([
                {
                    "id": 1,
                    "title": "First",
                    "user": {"id": 10, "name": "Ada"},
                    "comments": [
                        {"id": 100, "text": "nice", "user": {"id": 11, "name": "Bob"}},
                        {"id": 101, "text": "thanks", "user": {"id": 10, "name": "Ada"}}
                    ]
                },
                {
                    "id": 2,
                    "title": "Second",
                    "user": {"id": 11, "name": "Bob"},
                    "comments": []
                }
            ]))
        );

        assert_eq!(posts[0].get("userId"), Some(&json!(10)));
        assert_eq!(comments[0].get("postId"), Some(&json!(1)));
    }

    #[test]
    fn unknown_author_is_null() {
        let posts = list(json!([{"id": 1, "userId": 99}]));
        let populated = populate_posts(&posts, &[], &[]);
        assert_eq!(populated[0].get("user"), Some(&Value::Null));
    }
}
