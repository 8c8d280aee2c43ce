use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup};

use crate::bot::utils::CallbackData;
use crate::database::UserEntity;

pub fn cmd_start_text(first_name: &str) -> String {
    format!("Hi, {first_name}, nice to meet you! 😊")
}

/// 跟随欢迎消息一起发送的快捷按钮
pub fn cmd_start_keyboard() -> KeyboardMarkup {
    let rows = vec![
        vec![KeyboardButton::new("register"), KeyboardButton::new("help")],
        vec![KeyboardButton::new("check my data"), KeyboardButton::new("delete my data")],
    ];
    KeyboardMarkup::new(rows).resize_keyboard(true)
}

pub fn cmd_register_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("Yes", CallbackData::RegisterConfirm.pack()),
        InlineKeyboardButton::callback("No", CallbackData::RegisterCancel.pack()),
    ]])
}

pub fn cmd_mydata_text(user: &UserEntity) -> String {
    format!(
        "chat id: {}\nfirst name: {}\nlast name: {}\nusername: {}\nregistered at: {}",
        user.chat_id,
        user.first_name,
        user.last_name.as_deref().unwrap_or("-"),
        user.username.as_deref().unwrap_or("-"),
        user.registered_at.format("%Y-%m-%d %H:%M:%S"),
    )
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use teloxide::types::InlineKeyboardButtonKind;

    use super::*;

    #[test]
    fn test_keyboards() {
        let keyboard = cmd_start_keyboard();
        let texts = keyboard
            .keyboard
            .iter()
            .flatten()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>();
        assert_eq!(texts, vec!["register", "help", "check my data", "delete my data"]);

        let keyboard = cmd_register_keyboard();
        let buttons = keyboard.inline_keyboard.iter().flatten().collect::<Vec<_>>();
        assert_eq!(buttons.len(), 2);
        assert_eq!(
            buttons[0].kind,
            InlineKeyboardButtonKind::CallbackData("register yes".to_string())
        );
        assert_eq!(
            buttons[1].kind,
            InlineKeyboardButtonKind::CallbackData("register no".to_string())
        );
    }

    #[test]
    fn test_mydata_text() {
        let user = UserEntity {
            chat_id: 42,
            first_name: "Alice".to_string(),
            last_name: None,
            username: Some("alice".to_string()),
            registered_at: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap().and_hms_opt(12, 0, 0).unwrap(),
        };
        let text = cmd_mydata_text(&user);
        assert!(text.contains("chat id: 42"));
        assert!(text.contains("first name: Alice"));
        assert!(text.contains("last name: -"));
        assert!(text.contains("username: alice"));
        assert!(text.contains("registered at: 2023-06-01 12:00:00"));
    }
}
