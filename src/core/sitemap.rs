//! `robots.txt` and `sitemap.xml` bodies for the public pages

/// Paths listed in the sitemap; the dashboard is private and excluded
pub const PUBLIC_PATHS: [&str; 3] = ["/", "/login", "/register"];

pub fn sitemap_xml(site_url: &str) -> String {
    let base = site_url.trim_end_matches('/');
    let urls: String = PUBLIC_PATHS
        .iter()
        .map(|path| format!("  <url><loc>{base}{path}</loc></url>\n"))
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\
         {urls}</urlset>\n"
    )
}

pub fn robots_txt(site_url: &str) -> String {
    let base = site_url.trim_end_matches('/');
    format!("User-agent: *\nDisallow: /dashboard\nSitemap: {base}/sitemap.xml\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sitemap_lists_public_pages() {
        let xml = sitemap_xml("https://pulsemark.io/");
        assert!(xml.contains("<loc>https://pulsemark.io/</loc>"));
        assert!(xml.contains("<loc>https://pulsemark.io/register</loc>"));
        assert!(!xml.contains("dashboard"));
    }

    #[test]
    fn test_robots_points_to_sitemap() {
        let robots = robots_txt("https://pulsemark.io");
        assert!(robots.ends_with("Sitemap: https://pulsemark.io/sitemap.xml\n"));
        assert!(robots.contains("Disallow: /dashboard"));
    }
}
