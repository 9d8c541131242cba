mod nyt;

pub use nyt::NytClient;
