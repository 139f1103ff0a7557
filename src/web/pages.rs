//! HTML for every view. All user-supplied text passes through [`escape`];
//! class names placed in links pass through [`path_segment`] as well.

use std::fmt::Write as _;

use crate::calc::ClassReport;
use crate::store::{ClassRecord, Document};

/// Checkbox name for a student on the attendance form.
pub fn present_field(sid: &str) -> String {
    format!("present_{}", sid)
}

pub fn note_field(sid: &str) -> String {
    format!("note_{}", sid)
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// Percent-encodes everything outside the RFC 3986 unreserved set.
pub fn path_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for b in raw.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~') {
            out.push(b as char);
        } else {
            let _ = write!(out, "%{:02X}", b);
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"ar\" dir=\"rtl\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

pub fn class_list(doc: &Document) -> String {
    let mut body = String::from("<h1>الصفوف</h1>\n<p><a href=\"/add_class\">إنشاء صف جديد</a></p>\n");
    if doc.is_empty() {
        body.push_str("<p>لا توجد صفوف بعد.</p>\n");
        return layout("الصفوف", &body);
    }
    body.push_str("<table>\n<tr><th>الصف</th><th>المعلم</th><th>عدد الطلاب</th><th></th></tr>\n");
    for (name, class) in doc {
        let seg = path_segment(name);
        let _ = writeln!(
            body,
            "<tr class=\"class-row\"><td>{}</td><td>{}</td><td>{}</td><td>\
             <a href=\"/add_student/{seg}\">إضافة طالب</a> \
             <a href=\"/attendance/{seg}\">تسجيل الحضور</a> \
             <a href=\"/report/{seg}\">التقرير</a></td></tr>",
            escape(name),
            escape(&class.teacher),
            class.students.len(),
        );
    }
    body.push_str("</table>");
    layout("الصفوف", &body)
}

pub fn add_class_form() -> String {
    layout(
        "إنشاء صف",
        "<h1>إنشاء صف</h1>\n<form method=\"post\">\n\
         <label>اسم الصف <input name=\"name\" required></label>\n\
         <label>اسم المعلم <input name=\"teacher\"></label>\n\
         <button type=\"submit\">حفظ</button>\n</form>\n<p><a href=\"/\">رجوع</a></p>",
    )
}

pub fn add_student_form(class_name: &str) -> String {
    let body = format!(
        "<h1>إضافة طالب إلى {}</h1>\n<form method=\"post\">\n\
         <label>رقم الطالب <input name=\"sid\" required></label>\n\
         <label>الاسم <input name=\"name\" required></label>\n\
         <label>الهاتف <input name=\"phone\"></label>\n\
         <button type=\"submit\">حفظ</button>\n</form>\n<p><a href=\"/\">رجوع</a></p>",
        escape(class_name)
    );
    layout("إضافة طالب", &body)
}

pub fn attendance_form(class_name: &str, class: &ClassRecord) -> String {
    let mut body = format!(
        "<h1>تسجيل الحضور: {}</h1>\n<form method=\"post\">\n<table>\n\
         <tr><th>الطالب</th><th>حاضر</th><th>ملاحظة</th></tr>\n",
        escape(class_name)
    );
    for (sid, student) in &class.students {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td><input type=\"checkbox\" name=\"{}\"></td>\
             <td><input name=\"{}\"></td></tr>",
            escape(&student.name),
            escape(&present_field(sid)),
            escape(&note_field(sid)),
        );
    }
    body.push_str("</table>\n<button type=\"submit\">حفظ</button>\n</form>\n<p><a href=\"/\">رجوع</a></p>");
    layout("تسجيل الحضور", &body)
}

pub fn report(class_name: &str, class: &ClassRecord, report: &ClassReport, analysis: &str) -> String {
    let mut body = format!(
        "<h1>تقرير الحضور: {}</h1>\n<p>المعلم: {}</p>\n<table>\n\
         <tr><th>الطالب</th><th>الهاتف</th><th>حضور</th><th>غياب</th><th>الأيام</th></tr>\n",
        escape(class_name),
        escape(&class.teacher)
    );
    for t in &report.tallies {
        let phone = class
            .students
            .get(&t.student_id)
            .map(|s| s.phone.as_str())
            .unwrap_or("");
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&t.name),
            escape(phone),
            t.tally.present_count,
            t.tally.absent_count(),
            t.tally.total_days,
        );
    }
    body.push_str("</table>\n<ul class=\"report-lines\">\n");
    for line in &report.lines {
        let _ = writeln!(body, "<li>{}</li>", escape(line));
    }
    let _ = write!(
        body,
        "</ul>\n<h2>التحليل</h2>\n<pre class=\"analysis\">{}</pre>\n<p><a href=\"/\">رجوع</a></p>",
        escape(analysis)
    );
    layout("تقرير الحضور", &body)
}
