/// Screen module exports

pub mod name;
pub mod results;
pub mod selection;

pub use name::NameScreen;
pub use results::ResultsScreen;
pub use selection::SelectionScreen;
