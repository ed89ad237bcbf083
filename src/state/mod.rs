//! Form session state module

mod forms;
mod notification;
mod outcome;
mod response;

pub use forms::*;
pub use notification::*;
pub use outcome::*;
pub use response::*;
