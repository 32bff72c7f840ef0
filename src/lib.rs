pub mod differ;
pub mod formatters;
pub mod io;
pub mod models;
pub mod normalize;
pub mod parser;

// Re-export commonly used items
pub use differ::compute_diff;
pub use formatters::{format_deck_line, format_decklist, format_diff_summary};
pub use io::read_deck_file;
pub use models::{
    CardEntry, CardKey, CardTotal, DiffResult, DiffSection, ParsedDeck, PrintingChange,
    QuantityChange,
};
pub use parser::parse;
