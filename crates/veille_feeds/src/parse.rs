use veille_core::{Error, Feed, FeedEntry, Result};

/// Parses an RSS or Atom document into the core feed model.
///
/// RSS dates are kept as the exact text of `<pubDate>` / `<dc:date>`, whether
/// or not they are valid RFC 2822. `url` only labels the error when the
/// document is neither RSS nor Atom.
pub fn parse_feed(url: &str, bytes: &[u8]) -> Result<Feed> {
    let rss_error = match rss::Channel::read_from(bytes) {
        Ok(channel) => return Ok(convert_channel(&channel)),
        Err(e) => e,
    };

    match atom_syndication::Feed::read_from(bytes) {
        Ok(feed) => Ok(convert_atom(&feed)),
        Err(atom_error) => Err(Error::FeedParse {
            url: url.to_string(),
            message: format!("not RSS ({}) nor Atom ({})", rss_error, atom_error),
        }),
    }
}

fn convert_channel(channel: &rss::Channel) -> Feed {
    Feed {
        title: non_blank(Some(channel.title())),
        entries: channel.items().iter().map(convert_item).collect(),
    }
}

fn convert_item(item: &rss::Item) -> FeedEntry {
    let dc_date = item
        .dublin_core_ext()
        .and_then(|dc| dc.dates().first())
        .map(String::as_str);

    FeedEntry {
        title: non_blank(item.title()),
        summary: non_blank(item.description()),
        link: non_blank(item.link()),
        published: non_blank(item.pub_date()),
        updated: non_blank(dc_date),
    }
}

fn convert_atom(feed: &atom_syndication::Feed) -> Feed {
    Feed {
        title: non_blank(Some(feed.title().as_str())),
        entries: feed.entries().iter().map(convert_atom_entry).collect(),
    }
}

fn convert_atom_entry(entry: &atom_syndication::Entry) -> FeedEntry {
    // atom_syndication fills a missing <updated> with the epoch
    let updated = Some(entry.updated()).filter(|d| d.timestamp() != 0);

    FeedEntry {
        title: non_blank(Some(entry.title().as_str())),
        summary: non_blank(entry.summary().map(|s| s.as_str())),
        link: select_link(entry.links()),
        published: entry.published().map(|d| d.to_rfc3339()),
        updated: updated.map(|d| d.to_rfc3339()),
    }
}

/// Content as-is, or `None` when missing or whitespace only.
fn non_blank(text: Option<&str>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty()).map(str::to_string)
}

/// First alternate link, then any non-empty link.
fn select_link(links: &[atom_syndication::Link]) -> Option<String> {
    let non_empty = || links.iter().filter(|l| !l.href().trim().is_empty());

    non_empty()
        .find(|l| l.rel().is_empty() || l.rel().eq_ignore_ascii_case("alternate"))
        .or_else(|| non_empty().next())
        .map(|l| l.href().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <title>ZDNet France</title>
    <link>https://www.zdnet.fr/</link>
    <description>Actualités</description>
    <item>
      <title>Nouvelle faille ransomware détectée</title>
      <link>http://x/1</link>
      <description>Un groupe cible les hôpitaux</description>
      <pubDate>Fri, 01 Mar 2024 10:00:00 +0100</pubDate>
    </item>
    <item>
      <title>Recette de cuisine</title>
      <description>aucun rapport</description>
    </item>
    <item>
      <title>Cloud souverain</title>
      <link>http://x/3</link>
      <pubDate>vendredi 1 mars 2024 10:00</pubDate>
    </item>
    <item>
      <title>Linux 6.8</title>
      <link>http://x/4</link>
      <dc:date>2024-03-01T10:00:00+01:00</dc:date>
    </item>
  </channel>
</rss>"#;

    const ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <id>urn:example:feed</id>
  <title></title>
  <updated>2024-03-01T12:00:00Z</updated>
  <entry>
    <id>urn:example:1</id>
    <title>Kubernetes 1.30</title>
    <published>2024-03-01T11:30:00+02:00</published>
    <updated>2024-03-01T12:00:00+01:00</updated>
    <link rel="self" href="http://y/self"/>
    <link rel="alternate" href="http://y/1"/>
    <summary>Nouvelle version</summary>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_rss() {
        let feed = parse_feed("https://www.zdnet.fr/feeds/rss/actualites/", RSS.as_bytes()).unwrap();
        assert_eq!(feed.title.as_deref(), Some("ZDNet France"));
        assert_eq!(feed.entries.len(), 4);

        let first = &feed.entries[0];
        assert_eq!(first.title.as_deref(), Some("Nouvelle faille ransomware détectée"));
        assert_eq!(first.summary.as_deref(), Some("Un groupe cible les hôpitaux"));
        assert_eq!(first.link.as_deref(), Some("http://x/1"));

        let second = &feed.entries[1];
        assert_eq!(second.link, None);
        assert_eq!(second.published, None);
        assert_eq!(second.updated, None);
    }

    #[test]
    fn test_rss_dates_are_verbatim() {
        let feed = parse_feed("http://x/rss", RSS.as_bytes()).unwrap();

        assert_eq!(
            feed.entries[0].published.as_deref(),
            Some("Fri, 01 Mar 2024 10:00:00 +0100")
        );
        assert_eq!(
            feed.entries[2].published.as_deref(),
            Some("vendredi 1 mars 2024 10:00")
        );
        assert_eq!(feed.entries[3].published, None);
        assert_eq!(
            feed.entries[3].updated.as_deref(),
            Some("2024-03-01T10:00:00+01:00")
        );
        assert_eq!(feed.entries[3].timestamp(), "2024-03-01T10:00:00+01:00");
    }

    #[test]
    fn test_parse_atom() {
        let feed = parse_feed("http://y/atom", ATOM.as_bytes()).unwrap();
        assert_eq!(feed.title, None);

        let entry = &feed.entries[0];
        assert_eq!(entry.title.as_deref(), Some("Kubernetes 1.30"));
        assert_eq!(entry.link.as_deref(), Some("http://y/1"));
        assert_eq!(entry.summary.as_deref(), Some("Nouvelle version"));
        assert_eq!(entry.published.as_deref(), Some("2024-03-01T11:30:00+02:00"));
        assert_eq!(entry.updated.as_deref(), Some("2024-03-01T12:00:00+01:00"));
    }

    #[test]
    fn test_non_blank_keeps_content_untouched() {
        assert_eq!(non_blank(Some("  Docker ")), Some("  Docker ".to_string()));
        assert_eq!(non_blank(Some(" \n\t")), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn test_parse_garbage() {
        let result = parse_feed("http://z/rss", b"<html><body>not a feed</body></html>");
        match result {
            Err(Error::FeedParse { url, .. }) => assert_eq!(url, "http://z/rss"),
            other => panic!("expected FeedParse, got {:?}", other),
        }
    }
}
