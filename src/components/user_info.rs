//! Name and phone table for the current user.

use crate::components::Memo;
use crate::constants::{COLUMN_PHONE, COLUMN_USERNAME};
use crate::models::User;

/// Render the table for `user`, or nothing when there is none.
///
/// Values are printed verbatim; columns are padded to their widest cell.
pub fn render(user: Option<&User>) -> String {
    let Some(user) = user else {
        return String::new();
    };

    let name_width = width(COLUMN_USERNAME).max(width(&user.name));
    let phone_width = width(COLUMN_PHONE).max(width(&user.phone));

    let mut out = String::new();
    out.push_str(&row(COLUMN_USERNAME, name_width, COLUMN_PHONE));
    out.push_str(&format!(
        "{}-+-{}\n",
        "-".repeat(name_width),
        "-".repeat(phone_width)
    ));
    out.push_str(&row(&user.name, name_width, &user.phone));
    out
}

fn row(left: &str, left_width: usize, right: &str) -> String {
    format!("{left:<left_width$} | {right}\n")
}

fn width(s: &str) -> usize {
    s.chars().count()
}

/// Memoised user info view.
#[derive(Debug, Default)]
pub struct UserInfo {
    memo: Memo<Option<User>>,
}

impl UserInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self, user: Option<&User>) -> String {
        self.memo.render(&user.cloned(), |u| render(u.as_ref()))
    }

    /// Number of real renders so far.
    pub fn renders(&self) -> usize {
        self.memo.renders()
    }
}
