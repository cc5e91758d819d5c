// Translations may only use placeholders of the reference template
use csv_importer::messages;

messages! {
    en {
        greeting = "Hello {name}";
    }
    es {
        greeting = "Hola {nombre}";
    }
}

fn main() {}
