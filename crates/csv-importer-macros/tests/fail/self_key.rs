// `self` would generate a variant named `Self`
use csv_importer::messages;

messages! {
    en {
        self = "Self";
    }
}

fn main() {}
