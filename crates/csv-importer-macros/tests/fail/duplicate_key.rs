// A key may only be declared once per locale
use csv_importer::messages;

messages! {
    en {
        title = "CSV Import";
        title = "Import";
    }
}

fn main() {}
