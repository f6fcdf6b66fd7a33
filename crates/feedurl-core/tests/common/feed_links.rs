//! Links as they show up in real feed entries.

/// Site URL of the sample feed.
pub const SITE_URL: &str = "https://www.example.com/blog/";

/// `(raw link, expected absolute URL)` pairs for one entry body.
pub const RESOLVABLE: &[(&str, &str)] = &[
    ("2024/01/hello-world", "https://www.example.com/blog/2024/01/hello-world"),
    ("/about", "https://www.example.com/about"),
    ("../press/kit.zip", "https://www.example.com/press/kit.zip"),
    ("?tag=rust", "https://www.example.com/blog/?tag=rust"),
    ("#comments", "https://www.example.com/blog/#comments"),
    ("//cdn.example.net/img/header.png", "https://cdn.example.net/img/header.png"),
    ("http://legacy.example.org/feed.rss", "http://legacy.example.org/feed.rss"),
    ("mailto:editor@example.com", "mailto:editor@example.com"),
    ("", "https://www.example.com/blog/"),
];

/// Links a sanitizer should drop rather than store.
pub const BROKEN: &[&str] = &[":missing-scheme", "/img/%zz.png", "HTTP://[::1/x", "a\u{0}b"];
