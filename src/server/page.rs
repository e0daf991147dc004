//! HTML rendering for the listing page.
//!
//! Every interpolated value goes through [`escape`]; play links and poster
//! URLs are attribute values and are escaped the same way.

use davshelf_core::{DisplayItem, Player, PlayerRegistry};

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#141414;color:#eee}\
header{padding:1rem 2rem;background:#1f1f1f}\
h1{margin:0 0 .5rem;font-size:1.5rem}\
nav a{color:#aaa;margin-right:.75rem;text-decoration:none}\
nav a.selected{color:#fff;font-weight:bold;border-bottom:2px solid #e50914}\
main{display:grid;grid-template-columns:repeat(auto-fill,minmax(260px,1fr));gap:1.5rem;padding:2rem}\
.item{background:#1f1f1f;border-radius:6px;overflow:hidden}\
.item img{width:100%;display:block}\
.info{padding:.75rem}\
.info h2{font-size:1.1rem;margin:0 0 .25rem}\
.filename{color:#888;font-size:.8rem;word-break:break-all}\
.play{display:inline-block;margin-top:.5rem;padding:.4rem .9rem;background:#e50914;color:#fff;border-radius:4px;text-decoration:none}\
.empty{grid-column:1/-1;color:#888}";

/// Render the full listing page.
pub fn render_index(items: &[DisplayItem], players: &PlayerRegistry, selected: &Player) -> String {
    let mut html = String::with_capacity(1024 + items.len() * 512);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>davshelf</title>\n");
    html.push_str(&format!("<style>{STYLE}</style>\n"));
    html.push_str("</head>\n<body>\n<header>\n<h1>Media library</h1>\n");

    html.push_str("<nav class=\"players\">Player: ");
    for player in players.iter() {
        let class = if player.id == selected.id {
            " class=\"selected\""
        } else {
            ""
        };
        let id = escape(player.id);
        html.push_str(&format!("<a href=\"/?player={id}\"{class}>{id}</a>"));
    }
    html.push_str("</nav>\n</header>\n<main>\n");

    if items.is_empty() {
        html.push_str("<p class=\"empty\">No media files found.</p>\n");
    }
    for item in items {
        render_item(&mut html, item);
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_item(html: &mut String, item: &DisplayItem) {
    let title = escape(&item.title);

    html.push_str("<article class=\"item\">\n");
    if let Some(poster) = &item.poster_url {
        html.push_str(&format!(
            "<img class=\"poster\" src=\"{}\" alt=\"{title} poster\" loading=\"lazy\">\n",
            escape(poster)
        ));
    }
    html.push_str("<div class=\"info\">\n");
    html.push_str(&format!("<h2>{title}</h2>\n"));
    html.push_str(&format!(
        "<p class=\"filename\">{}</p>\n",
        escape(&item.filename)
    ));
    if !item.description.is_empty() {
        html.push_str(&format!(
            "<p class=\"description\">{}</p>\n",
            escape(&item.description)
        ));
    }
    html.push_str(&format!(
        "<a class=\"play\" href=\"{}\">Play</a>\n",
        escape(&item.play_link)
    ));
    html.push_str("</div>\n</article>\n");
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
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
