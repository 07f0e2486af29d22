//! HTML documents for the user pages. Plain string assembly, no templating
//! engine; every interpolated value goes through [`escape`].

use crate::users::repo_types::User;

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{}</title>
</head>
<body>
{}
</body>
</html>"#,
        escape(title),
        body
    )
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn users_index(users: &[User]) -> String {
    let rows: String = users
        .iter()
        .map(|u| {
            format!(
                "        <tr><td>{}</td><td>{}</td><td><a href=\"/update/{}\">Edit</a></td></tr>\n",
                escape(&u.username),
                escape(&u.email),
                u.id
            )
        })
        .collect();

    let body = format!(
        r#"    <h1>Users</h1>
    <p><a href="/create-user">Create user</a></p>
    <table>
        <tr><th>Username</th><th>Email</th><th></th></tr>
{}    </table>"#,
        rows
    );
    page("Users", &body)
}

pub fn create_user_form() -> String {
    let body = r#"    <h1>Create user</h1>
    <form method="post" action="/create-user">
        <label>Username <input type="text" name="username"></label><br>
        <label>Email <input type="email" name="email"></label><br>
        <label>Password <input type="password" name="password"></label><br>
        <button type="submit">Create</button>
    </form>"#;
    page("Create user", body)
}

pub fn update_user_form(user: &User) -> String {
    let body = format!(
        r#"    <h1>Update user</h1>
    <form method="post" action="/update/{id}">
        <label>Username <input type="text" name="username" value="{username}"></label><br>
        <label>Email <input type="email" name="email" value="{email}"></label><br>
        <button type="submit">Save</button>
    </form>
    <h2>Change password</h2>
    <form method="post" action="/update-password">
        <input type="hidden" name="id" value="{id}">
        <label>New password <input type="password" name="new_password"></label><br>
        <button type="submit">Update password</button>
    </form>"#,
        id = user.id,
        username = escape(&user.username),
        email = escape(&user.email),
    );
    page("Update user", &body)
}

pub fn user_not_found(id: &str) -> String {
    let body = format!(
        r#"    <h1>User not found</h1>
    <p>No user with id {}.</p>
    <p><a href="/">Back to users</a></p>"#,
        escape(id)
    );
    page("User not found", &body)
}
