//! User emitter

use crate::application::ports::outbound::MarkupElement;
use crate::domain::entities::User;
use crate::infrastructure::export::field_table::{emit_fields, Field};

fn user_fields() -> Vec<Field<User>> {
    vec![
        Field::text("wp:author_id", |u: &User| u.id.to_string()),
        Field::text("wp:author_login", |u: &User| u.username.clone()),
        Field::text("wp:author_email", |u: &User| u.email.clone()),
        Field::text("wp:author_display_name", |u: &User| u.display_name.clone()),
        Field::text("wp:author_first_name", |u: &User| u.first_name.clone()),
        Field::text("wp:author_last_name", |u: &User| u.last_name.clone()),
    ]
}

pub fn emit_user(channel: &mut MarkupElement, user: &User) {
    let mut author = MarkupElement::new("wp:author");
    emit_fields(&mut author, &user_fields(), user);
    channel.push(author);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::UserId;

    #[test]
    fn test_author_entry() {
        let user = User {
            id: UserId::new(3),
            username: "jdoe".into(),
            email: "jdoe@example.test".into(),
            display_name: "Jay".into(),
            first_name: "J".into(),
            last_name: "Doe".into(),
        };
        let mut channel = MarkupElement::new("channel");
        emit_user(&mut channel, &user);

        let author = channel.find("wp:author").unwrap();
        let fields: Vec<_> = author
            .elements()
            .map(|e| (e.name.as_str(), e.text_content()))
            .collect();
        assert_eq!(
            fields,
            vec![
                ("wp:author_id", "3".to_string()),
                ("wp:author_login", "jdoe".to_string()),
                ("wp:author_email", "jdoe@example.test".to_string()),
                ("wp:author_display_name", "Jay".to_string()),
                ("wp:author_first_name", "J".to_string()),
                ("wp:author_last_name", "Doe".to_string()),
            ]
        );
    }
}
