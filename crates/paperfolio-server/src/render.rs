//! HTML rendering for the catalog pages.
//!
//! Handlers pass either the full collection, nothing, or a single lookup
//! outcome; everything here is a pure function from that data to markup.
//! All interpolated record fields are HTML-escaped.

use paperfolio_core::{Lookup, Paper};

/// Escapes HTML-significant characters in text content and attribute values.
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

/// Wraps a page body in the shared document shell.
fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <nav><a href=\"/\">Papers</a> | <a href=\"/personal\">Personal</a></nav>\n\
         {body}\n\
         </body>\n\
         </html>\n",
        title = escape(title),
    )
}

/// Renders the index page listing all papers in insertion order.
#[must_use]
pub fn index_page(papers: &[Paper]) -> String {
    let mut body = String::from("<h1>Papers</h1>\n<ul>\n");
    for paper in papers {
        body.push_str(&format!(
            "<li><a href=\"/paper/{id}\">{title}</a>, {authors} ({date})</li>\n",
            id = paper.id,
            title = escape(&paper.title),
            authors = escape(&paper.authors),
            date = escape(&paper.date),
        ));
    }
    body.push_str("</ul>\n");
    layout("Papers", &body)
}

/// Renders the static personal page. Receives no paper data.
#[must_use]
pub fn personal_page() -> &'static str {
    include_str!("personal.html")
}

/// Renders the detail page for a lookup outcome.
///
/// A found paper renders its full metadata; a missing one renders an
/// explicit not-found body naming the requested id.
#[must_use]
pub fn paper_detail_page(lookup: &Lookup<'_>) -> String {
    match lookup {
        Lookup::Found(paper) => {
            let body = format!(
                "<h1>{title}</h1>\n\
                 <dl>\n\
                 <dt>Authors</dt><dd>{authors}</dd>\n\
                 <dt>Journal</dt><dd>{journal}</dd>\n\
                 <dt>Date</dt><dd>{date}</dd>\n\
                 <dt>Keywords</dt><dd>{keywords}</dd>\n\
                 </dl>\n\
                 <p>{summary}</p>\n",
                title = escape(&paper.title),
                authors = escape(&paper.authors),
                journal = escape(&paper.journal),
                date = escape(&paper.date),
                keywords = escape(&paper.keywords.join(", ")),
                summary = escape(&paper.summary),
            );
            layout(&paper.title, &body)
        }
        Lookup::Missing(id) => {
            let body = format!(
                "<h1>Paper not found</h1>\n<p>No paper with id {id} exists.</p>\n"
            );
            layout("Paper not found", &body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperfolio_core::{Catalog, PaperId};

    #[test]
    fn index_lists_all_papers_in_order() {
        let catalog = Catalog::placeholder();
        let html = index_page(catalog.papers());
        let first = html.find("Placeholder Paper").expect("first title");
        let second = html.find("Another Paper").expect("second title");
        assert!(first < second);
    }

    #[test]
    fn index_links_to_detail_pages() {
        let catalog = Catalog::placeholder();
        let html = index_page(catalog.papers());
        assert!(html.contains("href=\"/paper/1\""));
        assert!(html.contains("href=\"/paper/2\""));
    }

    #[test]
    fn detail_page_contains_record_fields() {
        let catalog = Catalog::placeholder();
        let html = paper_detail_page(&catalog.lookup(PaperId(1)));
        assert!(html.contains("Placeholder Paper"));
        assert!(html.contains("A. Author"));
        assert!(html.contains("Journal X"));
        assert!(html.contains("2023-01-01"));
        assert!(html.contains("AI, placeholder"));
        assert!(html.contains("placeholder abstract summary"));
    }

    #[test]
    fn detail_page_names_missing_id() {
        let catalog = Catalog::placeholder();
        let html = paper_detail_page(&catalog.lookup(PaperId(99)));
        assert!(html.contains("Paper not found"));
        assert!(html.contains("No paper with id 99"));
    }

    #[test]
    fn personal_page_carries_no_paper_data() {
        let html = personal_page();
        assert!(!html.contains("Placeholder Paper"));
        assert!(!html.contains("Another Paper"));
    }

    #[test]
    fn record_fields_are_escaped() {
        use paperfolio_core::Paper;
        let paper = Paper {
            id: PaperId(1),
            title: "<script>alert('x')</script>".to_string(),
            authors: "A & B".to_string(),
            journal: String::new(),
            date: String::new(),
            summary: String::new(),
            keywords: vec![],
        };
        let html = paper_detail_page(&Lookup::Found(&paper));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("A &amp; B"));
    }
}
