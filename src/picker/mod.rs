mod debounce;
mod filter;
mod state;

pub use debounce::Debouncer;
pub use filter::{ContainsMatcher, NameMatcher};
pub use state::{Phase, PickerState, PickerView, SuggestionRowView};
