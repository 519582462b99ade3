pub mod async_string;
pub mod calc;
pub mod dialog;
pub mod divide;
pub mod password;
