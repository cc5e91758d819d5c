// Translations may cover a subset of keys and reorder placeholders
use csv_importer::{TranslatorOptions, create_typed_i18n, messages, params};

messages! {
    en {
        greeting = "Hello {name}";
        rows = "no rows | one row | {count} rows";
    }
    es {
        greeting = "Hola {name}";
    }
    "pt-BR" {
        rows = "nenhuma linha | uma linha | {count} linhas";
    }
}

fn main() {
    let i18n = create_typed_i18n::<Message>(
        TranslatorOptions::builder()
            .locale("es")
            .fallback_locale(SOURCE_LOCALE)
            .messages(catalog())
            .build(),
    );

    assert_eq!(i18n.t_with(Message::Greeting, &params! { "name" => "Ana" }), "Hola Ana");
    assert_eq!(i18n.t_plural(Message::Rows, &params! { "count" => 3 }, 3), "3 rows");
    assert!(catalog().has_locale("pt-BR"));
}
