//! Test support.


pub(crate) use feed_server::FeedServer;
