pub mod console;
pub mod output;
pub mod presenter;

pub use console::{Console, MemoryConsole, TermConsole};
pub use output::{OutputFormatter, OutputMode, Prompter};
pub use presenter::Presenter;
