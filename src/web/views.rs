//! Server-rendered HTML for the three pages: kiosk board, admin panel, and
//! history log.

use crate::models::history::HistoryRecord;
use crate::models::student::Student;
use std::fmt::Write;

/// Escape user-derived text for embedding in HTML.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; margin: 2rem auto; max-width: 48rem; color: #222; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }}
.banner {{ padding: 0.6rem 1rem; margin-bottom: 1rem; border-radius: 4px; }}
.full {{ background: #fdd; }}
.free {{ background: #dfd; }}
.out {{ color: #a00; font-weight: bold; }}
nav a {{ margin-right: 1rem; }}
form.inline {{ display: inline; }}
</style>
</head>
<body>
<nav><a href="/">Kiosk</a><a href="/admin">Admin</a><a href="/admin/history">History</a></nav>
{body}
</body>
</html>
"#
    )
}

/// Student-facing board with per-student sign-out / sign-in actions.
pub fn kiosk_page(students: &[Student], out_count: i64, max_students: i64) -> String {
    let is_full = out_count >= max_students;
    let banner = if is_full {
        format!(
            r#"<div class="banner full">Room full: {out_count} of {max_students} out</div>"#
        )
    } else {
        format!(
            r#"<div class="banner free">{out_count} of {max_students} out</div>"#
        )
    };

    let mut rows = String::new();
    for s in students {
        let name = escape(&s.name);
        let (status, action) = if s.is_out {
            (
                format!(r#"<span class="out">Out since {}</span>"#, s.time_out_display()),
                format!(r#"<a href="/sign_in/{}">Sign in</a>"#, s.id),
            )
        } else if is_full {
            ("In".to_string(), String::new())
        } else {
            (
                "In".to_string(),
                format!(r#"<a href="/sign_out/{}">Sign out</a>"#, s.id),
            )
        };
        let _ = write!(
            rows,
            "<tr><td>{name}</td><td>{status}</td><td>{action}</td></tr>"
        );
    }

    let body = format!(
        r#"<h1>Hall Pass</h1>
{banner}
<table>
<tr><th>Student</th><th>Status</th><th></th></tr>
{rows}
</table>"#
    );
    layout("Hall Pass", &body)
}

/// Admin panel: roster management plus the capacity form.
pub fn admin_page(students: &[Student], max_students: i64) -> String {
    let mut rows = String::new();
    for s in students {
        let _ = write!(
            rows,
            r#"<tr><td>{}</td><td>{}</td><td><a href="/admin/remove_student/{}">Remove</a></td></tr>"#,
            escape(&s.name),
            if s.is_out { "Out" } else { "In" },
            s.id
        );
    }

    let body = format!(
        r#"<h1>Admin</h1>
<form method="post" action="/admin/add_student">
<input type="text" name="name" placeholder="Student name" required>
<button type="submit">Add student</button>
</form>
<form method="post" action="/admin/set_max_students">
<label>Max students out:
<input type="number" name="max_students" value="{max_students}" min="1"></label>
<button type="submit">Save</button>
</form>
<table>
<tr><th>Student</th><th>Status</th><th></th></tr>
{rows}
</table>"#
    );
    layout("Admin", &body)
}

/// History log with the search box.
pub fn history_page(records: &[HistoryRecord], search: &str) -> String {
    let mut rows = String::new();
    for r in records {
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&r.student_name),
            r.sign_out_display(),
            escape(&r.sign_in_display()),
            r.duration_display()
        );
    }

    let body = format!(
        r#"<h1>History</h1>
<form method="get" action="/admin/history">
<input type="text" name="search" value="{}" placeholder="Search by name">
<button type="submit">Search</button>
</form>
<table>
<tr><th>Student</th><th>Signed out</th><th>Signed in</th><th>Duration</th></tr>
{rows}
</table>"#,
        escape(search)
    );
    layout("History", &body)
}
