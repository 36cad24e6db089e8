//! Dashboard layout shell.
//!
//! Renders the persistent frame (header, sidebar navigation) around the
//! currently routed page's content. The frame is produced exactly once per
//! call and the child content is inserted verbatim; the shell never mutates
//! or filters what the page gave it. Only the shell's own chrome text (page
//! title, nav labels, badges) is escaped.

use crate::models::SidebarSection;

pub fn render_shell(title: &str, active_href: &str, sections: &[SidebarSection], content: &str) -> String {
    let mut nav = String::new();
    for section in sections {
        nav.push_str("      <section class=\"nav-section\">\n");
        if let Some(heading) = &section.heading {
            nav.push_str(&format!(
                "        <h2 class=\"nav-heading\">{}</h2>\n",
                escape_html(heading)
            ));
        }
        nav.push_str("        <ul>\n");
        for item in &section.items {
            let class = if item.href == active_href {
                " class=\"active\""
            } else {
                ""
            };
            let badge = item
                .badge
                .as_ref()
                .map(|b| format!(" <span class=\"badge\">{}</span>", escape_html(b)))
                .unwrap_or_default();
            nav.push_str(&format!(
                "          <li{}><a href=\"{}\" data-icon=\"{}\">{}</a>{}</li>\n",
                class,
                escape_html(&item.href),
                escape_html(&item.icon),
                escape_html(&item.title),
                badge
            ));
        }
        nav.push_str("        </ul>\n      </section>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} - Study Dashboard</title>
  <link rel="stylesheet" href="/styles.css">
</head>
<body>
  <div class="dashboard-frame">
    <header class="dashboard-header">
      <a class="brand" href="/dashboard">Study Dashboard</a>
    </header>
    <nav class="dashboard-sidebar">
{nav}    </nav>
    <main class="dashboard-content">
{content}
    </main>
  </div>
</body>
</html>
"#,
        title = escape_html(title),
        nav = nav,
        content = content
    )
}

pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
