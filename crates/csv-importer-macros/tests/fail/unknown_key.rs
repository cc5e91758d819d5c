// Translations may only use keys of the reference locale
use csv_importer::messages;

messages! {
    en {
        title = "CSV Import";
    }
    es {
        titel = "Importar CSV";
    }
}

fn main() {}
