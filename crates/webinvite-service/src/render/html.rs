//! Static HTML for a [`PreviewView`].

use std::fmt::Write;

use super::{InvitationView, PreviewView};

fn escape(text: &str) -> String {
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

/// Renders a complete HTML document.
#[must_use]
pub fn render_html(view: &PreviewView) -> String {
    let mut body = String::new();
    let written = match view {
        PreviewView::Empty { message } => {
            write!(body, "<p class=\"empty\">{}</p>", escape(message))
        }
        PreviewView::Invitation(invitation) => write_invitation(&mut body, invitation),
    };
    if let Err(e) = written {
        tracing::error!(error = %e, "Failed to render preview");
    }
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Invitation preview</title></head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

fn write_invitation(html: &mut String, view: &InvitationView) -> std::fmt::Result {
    html.push_str("<div class=\"preview\">\n");

    if let Some(bg) = &view.background {
        writeln!(
            html,
            "<div class=\"background\" style=\"background-image:url('{}');background-size:cover;background-position:center;filter:blur({}px);opacity:{}\"></div>",
            escape(&bg.image_url),
            bg.blur_px,
            bg.opacity
        )?;
    }
    if let Some(overlay) = &view.overlay {
        writeln!(
            html,
            "<div class=\"overlay\" style=\"background-color:{}\"></div>",
            escape(&overlay.color)
        )?;
    }

    writeln!(
        html,
        "<div class=\"monogram\">{}</div>\n<h1>{} <span class=\"amp\">&amp;</span> {}</h1>",
        escape(&view.monogram),
        escape(&view.couple1_name),
        escape(&view.couple2_name)
    )?;
    if let Some(date) = &view.date {
        writeln!(html, "<p class=\"date\">{}</p>", escape(date))?;
    }
    writeln!(
        html,
        "<div class=\"welcome\"><h2>{}</h2><p>{}</p></div>",
        escape(view.welcome_title),
        escape(view.welcome_message)
    )?;

    if !view.events.is_empty() {
        html.push_str("<div class=\"events\"><h3>Event Schedule</h3>\n");
        for event in &view.events {
            writeln!(
                html,
                "<div class=\"event\"><span class=\"marker\" style=\"background-color:{}\"></span><p class=\"title\">{}</p><p class=\"time\">{}</p></div>",
                escape(&event.marker_color),
                escape(&event.title),
                event.time.as_deref().map(escape).unwrap_or_default()
            )?;
        }
        if let Some(more) = &view.more_events {
            writeln!(html, "<p class=\"more\">{}</p>", escape(more))?;
        }
        html.push_str("</div>\n");
    }

    if let Some(quote) = &view.quote {
        write!(html, "<blockquote>{}", escape(&quote.text))?;
        if let Some(author) = &quote.author {
            write!(html, "<cite>{}</cite>", escape(author))?;
        }
        html.push_str("</blockquote>\n");
    }
    if let Some(footer) = &view.footer {
        writeln!(html, "<footer>{}</footer>", escape(footer))?;
    }

    html.push_str("</div>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>\"Tom\" & 'Jerry'</b>"), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
    }

    #[test]
    fn test_empty_view() {
        let html = render_html(&PreviewView::Empty {
            message: super::super::EMPTY_MESSAGE,
        });
        assert!(html.contains("Select a wedding to preview"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
