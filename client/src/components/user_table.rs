//! Account table with two-state badges.

#[cfg(test)]
#[path = "user_table_test.rs"]
mod user_table_test;

use accounts::User;
use leptos::prelude::*;

/// Rendered form of one boolean column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub class: &'static str,
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

pub fn active_badge(is_active: bool) -> Badge {
    Badge {
        label: yes_no(is_active),
        class: if is_active { "badge badge--active" } else { "badge badge--inactive" },
    }
}

pub fn superuser_badge(is_superuser: bool) -> Badge {
    Badge {
        label: yes_no(is_superuser),
        class: if is_superuser { "badge badge--superuser" } else { "badge badge--regular" },
    }
}

#[component]
fn BadgeCell(badge: Badge) -> impl IntoView {
    view! {
        <td class="user-table__cell">
            <span class=badge.class>{badge.label}</span>
        </td>
    }
}

/// One row per user, in the order given.
#[component]
pub fn UserTable(users: Vec<User>) -> impl IntoView {
    view! {
        <div class="user-table__wrap">
            <table class="user-table">
                <thead>
                    <tr>
                        <th scope="col">"Username"</th>
                        <th scope="col">"Email"</th>
                        <th scope="col">"Active"</th>
                        <th scope="col">"Superuser"</th>
                    </tr>
                </thead>
                <tbody>
                    {users
                        .into_iter()
                        .map(|user| {
                            view! {
                                <tr class="user-table__row" data-user-id=user.id.to_string()>
                                    <td class="user-table__cell user-table__cell--name">{user.username}</td>
                                    <td class="user-table__cell user-table__cell--muted">{user.email}</td>
                                    <BadgeCell badge=active_badge(user.is_active)/>
                                    <BadgeCell badge=superuser_badge(user.is_superuser)/>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
