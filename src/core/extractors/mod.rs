mod isbn_extractor;
mod lottery_extractor;

pub use isbn_extractor::extract_isbn;
pub use lottery_extractor::LotteryExtractor;
