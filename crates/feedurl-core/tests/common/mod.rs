pub mod feed_links;
