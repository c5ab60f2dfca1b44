//! HTML pages for the browser upload flow

use crate::excel::EXPORT_HEADERS;
use crate::types::Report;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem}\
table{border-collapse:collapse}\
th,td{border:1px solid #ccc;padding:4px 8px;text-align:left}\
th{background:#f0f0f0}";

/// Escape text for HTML element and attribute content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>{style}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape_html(title),
        style = STYLE,
    )
}

/// GET / - upload form
pub fn upload_form() -> String {
    page(
        "Missing Time Report",
        r#"<h1>Missing Time Report</h1>
<form method="post" action="/" enctype="multipart/form-data">
  <p><label>Monthly missing time report (.xlsb)<br>
    <input type="file" name="monthly_file" accept=".xlsb,.xlsx,.xls" required></label></p>
  <p><label>Employee / manager list (.xlsx, .xls)<br>
    <input type="file" name="employee_file" accept=".xlsx,.xls,.xlsb" required></label></p>
  <p><button type="submit">Generate report</button></p>
</form>"#,
    )
}

/// POST / - matched entries as a table
pub fn results_page(report: &Report) -> String {
    let mut body = String::new();
    body.push_str("<h1>Missing Time Report</h1>\n");
    body.push_str(&format!(
        "<p>Sheet <strong>{}</strong>: {} matching entr{} out of {} rows \
         ({} roster emails, {} roster names).</p>\n",
        escape_html(&report.sheet_name),
        report.len(),
        if report.len() == 1 { "y" } else { "ies" },
        report.rows_scanned,
        report.roster_emails,
        report.roster_names,
    ));

    if report.is_empty() {
        body.push_str("<p>No employees from the list have missing time.</p>\n");
    } else {
        body.push_str("<table>\n<thead><tr>");
        for header in EXPORT_HEADERS {
            body.push_str(&format!("<th>{}</th>", header));
        }
        body.push_str("</tr></thead>\n<tbody>\n");
        for entry in &report.entries {
            let level = entry
                .level
                .as_ref()
                .map(|l| l.to_string())
                .unwrap_or_default();
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&level),
                escape_html(&entry.name),
                escape_html(&entry.email.to_string()),
                escape_html(&entry.missing_time.to_string()),
            ));
        }
        body.push_str("</tbody>\n</table>\n");
    }

    body.push_str("<p><a href=\"/\">Upload another pair of files</a></p>");
    page("Missing Time Report - Results", &body)
}
