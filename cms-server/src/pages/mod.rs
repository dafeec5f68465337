//! 页面渲染
//!
//! HTML 模板在编译期嵌入；处理器只传入数据，所有插入值都经过转义。

use std::fmt::Write;

use shared::models::{MenuItem, Reservation};

const LOGIN: &str = include_str!("../../templates/login.html");
const ADMIN_LOGIN: &str = include_str!("../../templates/admin-login.html");
const STAFF_LOGIN: &str = include_str!("../../templates/staff-login.html");
const DASHBOARD: &str = include_str!("../../templates/dashboard.html");
const STAFF_DASHBOARD: &str = include_str!("../../templates/staff-dashboard.html");

/// Escape text for HTML element and attribute context
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Legacy login page, optionally with an inline error
pub fn login(error: Option<&str>) -> String {
    LOGIN.replace("{{error}}", &escape_html(error.unwrap_or_default()))
}

pub fn admin_login() -> &'static str {
    ADMIN_LOGIN
}

pub fn staff_login() -> &'static str {
    STAFF_LOGIN
}

/// Admin dashboard with one card per menu item
pub fn dashboard(items: &[MenuItem], message: Option<&str>) -> String {
    let mut cards = String::new();
    if items.is_empty() {
        cards.push_str("      <p class=\"empty\">No menu items yet.</p>\n");
    }
    for item in items {
        let id = escape_html(&item.id);
        let name = escape_html(&item.name);
        let price = escape_html(&item.price);
        let category = escape_html(&item.category);

        let _ = writeln!(cards, "      <div class=\"menu-card\">");
        if !item.image.is_empty() {
            let _ = writeln!(
                cards,
                "        <img src=\"{}\" alt=\"{}\">",
                escape_html(&item.image),
                name
            );
        }
        let _ = writeln!(cards, "        <h4>{name}</h4>");
        let _ = writeln!(cards, "        <p>Price: ₹{price}</p>");
        let _ = writeln!(cards, "        <p>Category: {category}</p>");
        let _ = writeln!(
            cards,
            "        <form method=\"POST\" action=\"/update-menu/{id}\" enctype=\"multipart/form-data\">"
        );
        let _ = writeln!(
            cards,
            "          <input type=\"text\" name=\"name\" placeholder=\"{name}\">"
        );
        let _ = writeln!(
            cards,
            "          <input type=\"number\" name=\"price\" min=\"0\" step=\"0.01\" placeholder=\"{price}\">"
        );
        let _ = writeln!(
            cards,
            "          <input type=\"text\" name=\"category\" placeholder=\"{category}\">"
        );
        let _ = writeln!(
            cards,
            "          <input type=\"file\" name=\"imageFile\" accept=\"image/*\">"
        );
        let _ = writeln!(cards, "          <button type=\"submit\">Update</button>");
        let _ = writeln!(cards, "        </form>");
        let _ = writeln!(
            cards,
            "        <button class=\"delete-btn\" onclick=\"window.location.href='/delete-menu/{id}'\">Delete</button>"
        );
        let _ = writeln!(cards, "      </div>");
    }

    DASHBOARD
        .replace("{{message}}", &escape_html(message.unwrap_or_default()))
        .replace("{{menu_items}}", &cards)
}

/// Staff dashboard with one row per reservation
pub fn staff_dashboard(reservations: &[Reservation]) -> String {
    let mut rows = String::new();
    if reservations.is_empty() {
        rows.push_str("      <tr><td colspan=\"7\" class=\"empty\">No reservations yet.</td></tr>\n");
    }
    for r in reservations {
        let _ = writeln!(
            rows,
            "      <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&r.name),
            escape_html(&r.email),
            escape_html(&r.phone),
            escape_html(&r.date),
            escape_html(&r.time),
            escape_html(&r.guests),
            escape_html(&r.special_requests),
        );
    }
    STAFF_DASHBOARD.replace("{{reservations}}", &rows)
}
