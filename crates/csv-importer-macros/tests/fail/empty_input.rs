// messages! needs at least one locale block
use csv_importer::messages;

messages! {}

fn main() {}
