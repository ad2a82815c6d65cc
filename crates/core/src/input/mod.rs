//! Event orchestration - the currency input state machine and the traits
//! that connect it to a host text field.

mod currency_input;
mod input_options;
mod input_traits;
mod selection;
mod text_field;

pub use currency_input::CurrencyInput;
pub use input_options::CurrencyInputOptions;
pub use input_traits::{InputCallbacks, InputHost, NoopCallbacks};
pub use selection::SelectionRange;
pub use text_field::TextField;
