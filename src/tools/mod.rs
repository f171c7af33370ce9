pub use self::document::Document;
pub use self::find_anchor::{count_matches, find_anchor};
pub use self::insert_after_anchor::insert_after_anchor;

mod document;
mod find_anchor;
mod insert_after_anchor;
