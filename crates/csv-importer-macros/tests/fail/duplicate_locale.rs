// A locale block may only appear once
use csv_importer::messages;

messages! {
    en {
        title = "CSV Import";
    }
    en {
        title = "CSV Import";
    }
}

fn main() {}
