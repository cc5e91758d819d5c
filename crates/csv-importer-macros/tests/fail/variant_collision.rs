// Keys that differ only in case style would generate the same variant
use csv_importer::messages;

messages! {
    en {
        error_count = "{count} errors";
        errorCount = "{count} errors";
    }
}

fn main() {}
