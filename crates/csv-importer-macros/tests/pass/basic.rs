// A single reference locale compiles and generates keys and a catalog
use csv_importer::{MessageKey, Translator, TranslatorOptions, messages};

messages! {
    en {
        title = "CSV Import";
        errorCount = "{count} error | {count} errors";
        page_of = "Page {current} of {total}";
    }
}

fn main() {
    let catalog = catalog();
    assert_eq!(SOURCE_LOCALE, "en");
    assert_eq!(Message::ALL.len(), 3);
    assert_eq!(Message::ErrorCount.as_str(), "errorCount");
    assert_eq!(Message::PageOf.key(), "page_of");
    assert_eq!(Message::Title.to_string(), "title");

    let i18n = Translator::new(TranslatorOptions::builder().messages(catalog).build());
    assert_eq!(i18n.t(Message::Title.key()), "CSV Import");
}
