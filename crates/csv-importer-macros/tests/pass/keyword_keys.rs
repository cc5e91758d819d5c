// Keys may be Rust keywords
use csv_importer::{MessageKey, messages};

messages! {
    en {
        type = "Type";
        r#match = "Match";
    }
}

fn main() {
    assert_eq!(Message::Type.as_str(), "type");
    assert_eq!(Message::Match.as_str(), "match");
}
